use web_sys::{HtmlMediaElement, HtmlVideoElement};

/// The slice of a media element that mute enforcement touches.
pub trait MediaSurface {
    fn is_muted(&self) -> bool;
    fn volume(&self) -> f64;
    fn set_muted(&self, muted: bool);
    fn set_volume(&self, volume: f64);
    fn set_controls(&self, controls: bool);
    fn set_looping(&self, looping: bool);
}

impl MediaSurface for HtmlVideoElement {
    fn is_muted(&self) -> bool {
        HtmlMediaElement::muted(self)
    }

    fn volume(&self) -> f64 {
        HtmlMediaElement::volume(self)
    }

    fn set_muted(&self, muted: bool) {
        HtmlMediaElement::set_muted(self, muted)
    }

    fn set_volume(&self, volume: f64) {
        HtmlMediaElement::set_volume(self, volume)
    }

    fn set_controls(&self, controls: bool) {
        HtmlMediaElement::set_controls(self, controls)
    }

    fn set_looping(&self, looping: bool) {
        HtmlMediaElement::set_loop(self, looping)
    }
}

pub fn ensure_muted<M: MediaSurface + ?Sized>(media: &M) {
    // Writing unchanged values would still cost a volumechange round trip.
    if !media.is_muted() {
        media.set_muted(true);
    }
    if media.volume() != 0.0 {
        media.set_volume(0.0);
    }
}

/// State a gallery video takes on before going fullscreen.
pub fn prepare_for_fullscreen<M: MediaSurface + ?Sized>(media: &M) {
    ensure_muted(media);
    media.set_controls(false);
    media.set_looping(true);
}

/// Back to a silent decorative loop once fullscreen ends.
pub fn restore_decorative<M: MediaSurface + ?Sized>(media: &M) {
    media.set_controls(false);
    ensure_muted(media);
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[derive(Debug)]
    struct FakeVideo {
        muted: Cell<bool>,
        volume: Cell<f64>,
        controls: Cell<bool>,
        looping: Cell<bool>,
        writes: Cell<usize>,
    }

    impl Default for FakeVideo {
        fn default() -> Self {
            Self {
                muted: Cell::new(false),
                volume: Cell::new(1.0),
                controls: Cell::new(true),
                looping: Cell::new(false),
                writes: Cell::new(0),
            }
        }
    }

    impl MediaSurface for FakeVideo {
        fn is_muted(&self) -> bool {
            self.muted.get()
        }
        fn volume(&self) -> f64 {
            self.volume.get()
        }
        fn set_muted(&self, muted: bool) {
            self.writes.set(self.writes.get() + 1);
            self.muted.set(muted);
        }
        fn set_volume(&self, volume: f64) {
            self.writes.set(self.writes.get() + 1);
            self.volume.set(volume);
        }
        fn set_controls(&self, controls: bool) {
            self.controls.set(controls);
        }
        fn set_looping(&self, looping: bool) {
            self.looping.set(looping);
        }
    }

    #[test]
    fn ensure_muted_silences() {
        let video = FakeVideo::default();
        ensure_muted(&video);
        assert!(video.muted.get());
        assert_eq!(video.volume.get(), 0.0);
    }

    #[test]
    fn ensure_muted_skips_redundant_writes() {
        let video = FakeVideo::default();
        ensure_muted(&video);
        let writes = video.writes.get();
        ensure_muted(&video);
        assert_eq!(video.writes.get(), writes);
    }

    #[test]
    fn fullscreen_preparation_hides_controls_and_loops() {
        let video = FakeVideo::default();
        prepare_for_fullscreen(&video);
        assert!(video.muted.get());
        assert_eq!(video.volume.get(), 0.0);
        assert!(!video.controls.get());
        assert!(video.looping.get());
    }

    #[test]
    fn restore_undoes_user_unmute() {
        let video = FakeVideo::default();
        prepare_for_fullscreen(&video);
        // User turned sound on from the native fullscreen UI.
        video.muted.set(false);
        video.volume.set(0.8);
        video.controls.set(true);

        restore_decorative(&video);
        assert!(video.muted.get());
        assert_eq!(video.volume.get(), 0.0);
        assert!(!video.controls.get());
    }
}
