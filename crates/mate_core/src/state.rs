use mate_logging::{mate_debug, mate_info};

use crate::view_model::AppViewModel;
use crate::{ConversionFailure, OutputFormat, SubmissionError};

/// Identifies one issued conversion request. Strictly increasing per session.
pub type RequestId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Pending,
    Resolved,
    Failed,
}

/// One download link per output format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadLocations {
    pub mp3: String,
    pub mp4: String,
}

impl DownloadLocations {
    pub fn get(&self, format: OutputFormat) -> &str {
        match format {
            OutputFormat::Mp3 => &self.mp3,
            OutputFormat::Mp4 => &self.mp4,
        }
    }
}

/// Metadata and links returned by one successful conversion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    pub title: String,
    pub thumbnail_url: String,
    pub download_locations: DownloadLocations,
}

// Result and error live inside the variant they belong to, so neither can
// outlive the phase that owns it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum Cycle {
    #[default]
    Idle,
    Pending {
        request_id: RequestId,
        url: String,
    },
    Resolved(ConversionResult),
    Failed(SubmissionError),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    input: String,
    format: OutputFormat,
    cycle: Cycle,
    last_request_id: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            phase: self.phase(),
            input: self.input.clone(),
            format: self.format,
            pending_url: self.pending_url().map(ToOwned::to_owned),
            result: self.result().cloned(),
            error_message: self.error_message().map(ToOwned::to_owned),
            active_download_location: self.active_download_location().map(ToOwned::to_owned),
        }
    }

    pub fn phase(&self) -> Phase {
        match self.cycle {
            Cycle::Idle => Phase::Idle,
            Cycle::Pending { .. } => Phase::Pending,
            Cycle::Resolved(_) => Phase::Resolved,
            Cycle::Failed(_) => Phase::Failed,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn selected_format(&self) -> OutputFormat {
        self.format
    }

    pub fn result(&self) -> Option<&ConversionResult> {
        match &self.cycle {
            Cycle::Resolved(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&SubmissionError> {
        match &self.cycle {
            Cycle::Failed(error) => Some(error),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error().map(|error| error.message.as_str())
    }

    /// The link for the currently selected format, derived on every call.
    pub fn active_download_location(&self) -> Option<&str> {
        self.result()
            .map(|result| result.download_locations.get(self.format))
    }

    /// The request whose completion would currently be applied, if any.
    pub fn awaited_request(&self) -> Option<RequestId> {
        match self.cycle {
            Cycle::Pending { request_id, .. } => Some(request_id),
            _ => None,
        }
    }

    fn pending_url(&self) -> Option<&str> {
        match &self.cycle {
            Cycle::Pending { url, .. } => Some(url.as_str()),
            _ => None,
        }
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_input(&mut self, text: String) {
        if self.input != text {
            self.input = text;
            self.dirty = true;
        }
    }

    pub(crate) fn toggle_format(&mut self) {
        self.format = self.format.toggled();
        self.dirty = true;
    }

    /// Abandons whatever was shown or awaited and records an empty-input failure.
    pub(crate) fn fail_validation(&mut self) {
        if let Some(request_id) = self.awaited_request() {
            mate_debug!("Validation failure abandons request_id={}", request_id);
        }
        self.cycle = Cycle::Failed(SubmissionError::validation());
        self.dirty = true;
    }

    /// Starts a new cycle for `url`, superseding any request still in flight.
    pub(crate) fn begin_request(&mut self, url: String) -> RequestId {
        if let Some(previous) = self.awaited_request() {
            mate_debug!("request_id={} superseded before completion", previous);
        }
        self.last_request_id += 1;
        let request_id = self.last_request_id;
        mate_info!(
            "Issuing conversion request_id={} url_len={}",
            request_id,
            url.len()
        );
        self.cycle = Cycle::Pending { request_id, url };
        self.dirty = true;
        request_id
    }

    /// Applies a completion if it answers the awaited request; stale ones are dropped.
    pub(crate) fn apply_completion(
        &mut self,
        request_id: RequestId,
        outcome: Result<ConversionResult, ConversionFailure>,
    ) -> bool {
        if self.awaited_request() != Some(request_id) {
            mate_debug!(
                "Discarding stale completion request_id={} (awaiting {:?})",
                request_id,
                self.awaited_request()
            );
            return false;
        }

        self.cycle = match outcome {
            Ok(result) => {
                mate_info!("request_id={} resolved", request_id);
                Cycle::Resolved(result)
            }
            Err(failure) => {
                mate_info!("request_id={} failed: {}", request_id, failure.kind);
                Cycle::Failed(failure.into())
            }
        };
        self.dirty = true;
        true
    }
}
