#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the link input box.
    InputChanged(String),
    /// User clicked the MP3/MP4 format button.
    FormatToggled,
    /// User submitted the current link for conversion.
    Submitted,
    /// The conversion service answered (or failed) for one request.
    ConversionFinished {
        request_id: crate::RequestId,
        outcome: Result<crate::ConversionResult, crate::ConversionFailure>,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
