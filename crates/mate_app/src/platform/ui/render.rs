use mate_core::{AppViewModel, Phase};

pub fn render(view: &AppViewModel) -> Vec<String> {
    let tag = format!("[{}]", view.format.label());

    match view.phase {
        Phase::Idle => vec![format!("{tag} Paste a YouTube link and press Enter.")],
        Phase::Pending => {
            let url = view.pending_url.as_deref().unwrap_or_default();
            vec![format!("{tag} Converting {url} ...")]
        }
        Phase::Resolved => render_resolved(&tag, view),
        Phase::Failed => {
            let message = view.error_message.as_deref().unwrap_or_default();
            vec![format!("{tag} Error: {message}")]
        }
    }
}

fn render_resolved(tag: &str, view: &AppViewModel) -> Vec<String> {
    let Some(result) = &view.result else {
        return Vec::new();
    };

    let mut lines = vec![format!("{tag} {}", result.title)];
    if !result.thumbnail_url.is_empty() {
        lines.push(format!("  Thumbnail: {}", result.thumbnail_url));
    }
    lines.push("  Ready to download in your selected format!".to_string());
    if let Some(link) = &view.active_download_location {
        lines.push(format!("  Download {}: {}", view.format.label(), link));
    }
    lines
}
