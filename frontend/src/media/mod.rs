pub mod autoplay;
pub mod error;
pub mod fullscreen;
pub mod mute;

pub use autoplay::AutoplayLoop;
pub use fullscreen::{exit_fullscreen, FullscreenSession};
pub use mute::ensure_muted;
