use serde::Deserialize;
use url::Url;

use crate::{ConversionError, FailureKind, VideoInfo};

// Every field is optional on the wire; presence is checked after parsing so a
// missing field is reported as a malformed response rather than a JSON error.
#[derive(Debug, Default, Deserialize)]
struct ServicePayload {
    title: Option<String>,
    thumbnail: Option<String>,
    download_url_mp3: Option<String>,
    download_url_mp4: Option<String>,
    error: Option<String>,
}

/// Interpret one service response: HTTP status plus raw body bytes.
///
/// Order of precedence: an `error` field wins regardless of status, then a
/// non-2xx status, then field validation of the success payload.
pub fn decode_response(status: u16, body: &[u8]) -> Result<VideoInfo, ConversionError> {
    let success = (200..300).contains(&status);

    let payload: ServicePayload = match serde_json::from_slice(body) {
        Ok(payload) => payload,
        Err(err) if success => {
            return Err(ConversionError::new(
                FailureKind::MalformedResponse,
                format!("response body is not a valid payload: {err}"),
            ));
        }
        Err(_) => ServicePayload::default(),
    };

    if let Some(message) = payload.error.filter(|text| !text.is_empty()) {
        return Err(ConversionError::new(
            FailureKind::ServiceReported { status },
            message,
        ));
    }

    if !success {
        return Err(ConversionError::new(
            FailureKind::HttpStatus(status),
            format!("service answered with status {status}"),
        ));
    }

    Ok(VideoInfo {
        title: required_field(payload.title, "title")?,
        // The service sends an empty thumbnail when it has none.
        thumbnail: required_field(payload.thumbnail, "thumbnail")?,
        download_url_mp3: download_link(payload.download_url_mp3, "download_url_mp3")?,
        download_url_mp4: download_link(payload.download_url_mp4, "download_url_mp4")?,
    })
}

fn required_field(value: Option<String>, name: &str) -> Result<String, ConversionError> {
    value.ok_or_else(|| {
        ConversionError::new(
            FailureKind::MalformedResponse,
            format!("missing field `{name}`"),
        )
    })
}

fn download_link(value: Option<String>, name: &str) -> Result<String, ConversionError> {
    let link = required_field(value, name)?;
    if link.trim().is_empty() {
        return Err(ConversionError::new(
            FailureKind::MalformedResponse,
            format!("empty field `{name}`"),
        ));
    }
    Url::parse(link.trim()).map_err(|err| {
        ConversionError::new(
            FailureKind::MalformedResponse,
            format!("field `{name}` is not a url: {err}"),
        )
    })?;
    Ok(link)
}
