//! Mp3-Mate core: pure conversion request state machine and view-model helpers.
mod effect;
mod failure;
mod format;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use failure::{
    ConversionFailure, FailureKind, SubmissionError, GENERIC_FAILURE_MESSAGE, TIMEOUT_MESSAGE,
    VALIDATION_MESSAGE,
};
pub use format::OutputFormat;
pub use msg::Msg;
pub use state::{AppState, ConversionResult, DownloadLocations, Phase, RequestId};
pub use update::update;
pub use view_model::AppViewModel;
