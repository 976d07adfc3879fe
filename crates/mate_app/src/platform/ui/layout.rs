use chrono::Datelike;
use mate_core::OutputFormat;

use super::constants::*;

pub fn banner(format: OutputFormat) -> Vec<String> {
    vec![
        APP_TITLE.to_string(),
        TAGLINE.to_string(),
        String::new(),
        format!("YouTube to {} Converter", format.label()),
        INTRO.to_string(),
        format!("Type {} for commands.", CMD_HELP[1]),
        String::new(),
    ]
}

pub fn help() -> Vec<String> {
    vec![
        "  <link>           convert a YouTube link".to_string(),
        format!("  {} / {}        switch between MP3 and MP4", CMD_FORMAT[0], CMD_FORMAT[1]),
        format!("  {} / {}        convert the current link again", CMD_SUBMIT[0], CMD_SUBMIT[1]),
        format!("  {} / {}          show this help", CMD_HELP[0], CMD_HELP[1]),
        format!("  {} / {}          quit", CMD_QUIT[0], CMD_QUIT[1]),
    ]
}

pub fn footer(year: i32) -> Vec<String> {
    vec![
        String::new(),
        format!("\u{a9} {year} {APP_TITLE}. All Rights Reserved."),
        COPYRIGHT_NOTICE.to_string(),
    ]
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_names_selected_format() {
        let lines = banner(OutputFormat::Mp4);
        assert_eq!(lines[0], "Mp3-Mate");
        assert!(lines.contains(&"YouTube to MP4 Converter".to_string()));
    }

    #[test]
    fn footer_carries_year() {
        let lines = footer(2026);
        assert!(lines[1].contains("2026 Mp3-Mate"));
        assert_eq!(lines[2], COPYRIGHT_NOTICE);
    }
}
