#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the conversion service about `url`; the completion must come back
    /// as `Msg::ConversionFinished` carrying the same `request_id`.
    RequestConversion {
        request_id: crate::RequestId,
        url: String,
    },
}
