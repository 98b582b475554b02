use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlVideoElement;

use super::error::MediaError;
use crate::config;

/// Shared flag that stops a pending retry loop. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Keeps retrying `play()` on a video until it starts or the loop is dropped.
pub struct AutoplayLoop {
    token: CancelToken,
}

impl AutoplayLoop {
    pub fn start(video: HtmlVideoElement) -> Self {
        let token = CancelToken::new();
        let loop_token = token.clone();
        spawn_local(async move {
            retry_until_playing(&video, &loop_token, config::AUTOPLAY_RETRY_MS).await;
        });
        Self { token }
    }
}

impl Drop for AutoplayLoop {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

async fn retry_until_playing(video: &HtmlVideoElement, token: &CancelToken, delay_ms: u32) {
    let mut attempts = 0u32;
    while !token.is_cancelled() {
        attempts += 1;
        match play(video).await {
            Ok(()) => {
                log::debug!("Background video playing after {} attempt(s)", attempts);
                return;
            }
            Err(e) => log::debug!("{}; retrying in {}ms", e, delay_ms),
        }
        TimeoutFuture::new(delay_ms).await;
    }
}

/// Awaits the promise returned by `play()`.
pub async fn play(video: &HtmlVideoElement) -> Result<(), MediaError> {
    let promise = video.play().map_err(MediaError::playback)?;
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(MediaError::playback)
}

/// Single best-effort attempt; a rejection is expected under autoplay rules.
pub fn play_once(video: HtmlVideoElement) {
    spawn_local(async move {
        if let Err(e) = play(&video).await {
            log::debug!("Ignoring: {}", e);
        }
    });
}
