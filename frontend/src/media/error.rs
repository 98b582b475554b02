use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures from the browser media APIs. None of these reach the user; call
/// sites log them at debug level and move on.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("playback rejected: {0}")]
    PlaybackRejected(String),
    #[error("fullscreen request rejected: {0}")]
    FullscreenRejected(String),
    #[error("no fullscreen capability on this platform")]
    FullscreenUnsupported,
}

impl MediaError {
    pub fn playback(reason: JsValue) -> Self {
        MediaError::PlaybackRejected(describe(&reason))
    }

    pub fn fullscreen(reason: JsValue) -> Self {
        MediaError::FullscreenRejected(describe(&reason))
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
