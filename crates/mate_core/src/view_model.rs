use crate::{ConversionResult, OutputFormat, Phase};

/// Read-only snapshot handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub phase: Phase,
    pub input: String,
    pub format: OutputFormat,
    /// Trimmed link of the request being awaited while `Pending`.
    pub pending_url: Option<String>,
    pub result: Option<ConversionResult>,
    pub error_message: Option<String>,
    pub active_download_location: Option<String>,
}

impl AppViewModel {
    /// True once the current cycle has ended, successfully or not.
    pub fn is_settled(&self) -> bool {
        matches!(self.phase, Phase::Resolved | Phase::Failed)
    }
}
