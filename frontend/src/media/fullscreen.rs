use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::js_sys::{Function, Promise, Reflect};
use web_sys::{window, Document, Element, Event, EventTarget, HtmlVideoElement};

use super::autoplay::play_once;
use super::error::MediaError;
use super::mute::{prepare_for_fullscreen, restore_decorative};

/// Ways of getting a gallery video fullscreen, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenStrategy {
    /// `requestFullscreen()` on the container.
    Standard,
    /// `webkitRequestFullscreen()` on the container (older desktop Safari).
    Webkit,
    /// `webkitEnterFullscreen()` on the video itself (iOS). The custom exit
    /// button is not shown here; the native player UI takes over.
    NativeVideo,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub standard: bool,
    pub webkit: bool,
    pub native_video: bool,
}

impl Capabilities {
    pub fn probe(container: &Element, video: &HtmlVideoElement) -> Self {
        Self {
            standard: has_method(container, "requestFullscreen"),
            webkit: has_method(container, "webkitRequestFullscreen"),
            native_video: has_method(video, "webkitEnterFullscreen"),
        }
    }
}

impl FullscreenStrategy {
    const PRIORITY: [FullscreenStrategy; 3] = [
        FullscreenStrategy::Standard,
        FullscreenStrategy::Webkit,
        FullscreenStrategy::NativeVideo,
    ];

    pub fn resolve(caps: Capabilities) -> Option<Self> {
        Self::PRIORITY
            .into_iter()
            .find(|strategy| strategy.available(caps))
    }

    fn available(self, caps: Capabilities) -> bool {
        match self {
            FullscreenStrategy::Standard => caps.standard,
            FullscreenStrategy::Webkit => caps.webkit,
            FullscreenStrategy::NativeVideo => caps.native_video,
        }
    }

    fn method(self) -> &'static str {
        match self {
            FullscreenStrategy::Standard => "requestFullscreen",
            FullscreenStrategy::Webkit => "webkitRequestFullscreen",
            FullscreenStrategy::NativeVideo => "webkitEnterFullscreen",
        }
    }

    /// Event that fires when fullscreen obtained this way ends.
    pub fn exit_event(self) -> &'static str {
        match self {
            FullscreenStrategy::Standard => "fullscreenchange",
            FullscreenStrategy::Webkit => "webkitfullscreenchange",
            FullscreenStrategy::NativeVideo => "webkitendfullscreen",
        }
    }

    /// Event that fires on the document when the request is denied. The
    /// native video path has none; it either opens the player or does nothing.
    pub fn error_event(self) -> Option<&'static str> {
        match self {
            FullscreenStrategy::Standard => Some("fullscreenerror"),
            FullscreenStrategy::Webkit => Some("webkitfullscreenerror"),
            FullscreenStrategy::NativeVideo => None,
        }
    }

    /// Whether the exit event fires on the document (as opposed to the video).
    fn exit_on_document(self) -> bool {
        !matches!(self, FullscreenStrategy::NativeVideo)
    }

    fn request(
        self,
        container: &Element,
        video: &HtmlVideoElement,
    ) -> Result<Option<Promise>, MediaError> {
        let target: &JsValue = match self {
            FullscreenStrategy::NativeVideo => video,
            _ => container,
        };
        call_method(target, self.method())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FullscreenPhase {
    #[default]
    Inactive,
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseEvent {
    Requested,
    Exited,
    RequestFailed,
}

impl FullscreenPhase {
    /// Next phase after `event`, or `None` when the event is not allowed
    /// here (a second request while already fullscreen).
    pub fn on(self, event: PhaseEvent) -> Option<Self> {
        match (self, event) {
            (FullscreenPhase::Inactive, PhaseEvent::Requested) => Some(FullscreenPhase::Active),
            (FullscreenPhase::Active, PhaseEvent::Requested) => None,
            (_, PhaseEvent::Exited | PhaseEvent::RequestFailed) => Some(FullscreenPhase::Inactive),
        }
    }
}

struct DomListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl DomListener {
    fn attach(
        target: EventTarget,
        event: &'static str,
        callback: Closure<dyn FnMut(Event)>,
    ) -> Result<Self, MediaError> {
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(MediaError::fullscreen)?;
        Ok(Self {
            target,
            event,
            callback,
        })
    }
}

impl Drop for DomListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::debug!("Could not remove {} listener: {:?}", self.event, e);
        }
    }
}

type ListenerSlot = RefCell<Vec<DomListener>>;

/// Fullscreen lifecycle of one gallery video. Dropping the session removes
/// any pending exit or error listener.
#[derive(Default)]
pub struct FullscreenSession {
    phase: Rc<Cell<FullscreenPhase>>,
    listeners: Rc<ListenerSlot>,
}

impl FullscreenSession {
    pub fn phase(&self) -> FullscreenPhase {
        self.phase.get()
    }

    pub fn enter(&self, container: &Element, video: &HtmlVideoElement) {
        let Some(next) = self.phase().on(PhaseEvent::Requested) else {
            log::debug!("Fullscreen already active, ignoring enter");
            return;
        };

        prepare_for_fullscreen(video);
        play_once(video.clone());

        let Some(strategy) = FullscreenStrategy::resolve(Capabilities::probe(container, video))
        else {
            log::debug!("{}", MediaError::FullscreenUnsupported);
            return;
        };

        self.phase.set(next);
        // Without a way to see the exit or a denial the tile could never
        // leave Active, so do not request at all.
        if let Err(e) = self.watch(strategy, video) {
            log::debug!("Could not watch fullscreen state: {}", e);
            drop(finish(&self.phase, &self.listeners, PhaseEvent::RequestFailed));
            return;
        }

        match strategy.request(container, video) {
            Ok(Some(promise)) => {
                let phase = self.phase.clone();
                let listeners = self.listeners.clone();
                spawn_local(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        log::debug!("Ignoring: {}", MediaError::fullscreen(e));
                        drop(finish(&phase, &listeners, PhaseEvent::RequestFailed));
                    }
                });
            }
            // Prefixed and native requests report denial through the error event.
            Ok(None) => {}
            Err(e) => {
                log::debug!("Ignoring: {}", e);
                drop(finish(&self.phase, &self.listeners, PhaseEvent::RequestFailed));
            }
        }
    }

    fn watch(&self, strategy: FullscreenStrategy, video: &HtmlVideoElement) -> Result<(), MediaError> {
        let document: EventTarget = document()
            .ok_or(MediaError::FullscreenUnsupported)?
            .into();
        let exit_target = if strategy.exit_on_document() {
            document.clone()
        } else {
            video.clone().into()
        };

        let on_exit = {
            let phase = self.phase.clone();
            let slot = Rc::downgrade(&self.listeners);
            let video = video.clone();
            Closure::<dyn FnMut(Event)>::new(move |_: Event| {
                // fullscreenchange also fires on the way in.
                if strategy.exit_on_document() && still_fullscreen() {
                    return;
                }
                restore_decorative(&video);
                play_once(video.clone());
                finish_later(&phase, &slot, PhaseEvent::Exited);
            })
        };
        let exit = DomListener::attach(exit_target, strategy.exit_event(), on_exit)?;
        self.listeners.borrow_mut().push(exit);

        if let Some(event) = strategy.error_event() {
            let on_error = {
                let phase = self.phase.clone();
                let slot = Rc::downgrade(&self.listeners);
                Closure::<dyn FnMut(Event)>::new(move |_: Event| {
                    log::debug!("Ignoring: fullscreen request denied");
                    finish_later(&phase, &slot, PhaseEvent::RequestFailed);
                })
            };
            let error = DomListener::attach(document, event, on_error)?;
            self.listeners.borrow_mut().push(error);
        }
        Ok(())
    }
}

/// Applies `event` and hands back the listeners that are no longer needed.
fn finish(phase: &Cell<FullscreenPhase>, listeners: &ListenerSlot, event: PhaseEvent) -> Vec<DomListener> {
    phase.set(phase.get().on(event).unwrap_or_default());
    std::mem::take(&mut *listeners.borrow_mut())
}

/// Same as `finish`, from inside one of the listeners: they are freed on
/// the next tick so a closure is not dropped while it runs.
fn finish_later(phase: &Cell<FullscreenPhase>, slot: &Weak<ListenerSlot>, event: PhaseEvent) {
    match slot.upgrade() {
        Some(listeners) => {
            let finished = finish(phase, &listeners, event);
            spawn_local(async move { drop(finished) });
        }
        None => phase.set(phase.get().on(event).unwrap_or_default()),
    }
}

/// Handler for the exit button shown inside fullscreen. Stops the click from
/// reaching the container, which would enter fullscreen again.
pub fn exit_fullscreen(event: &Event) {
    event.stop_propagation();
    if !still_fullscreen() {
        return;
    }
    let Some(document) = document() else {
        return;
    };
    let Some(method) = exit_method(|name| has_method(&document, name)) else {
        log::debug!("{}", MediaError::FullscreenUnsupported);
        return;
    };
    match call_method(&document, method) {
        Ok(Some(promise)) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::debug!("Ignoring: {}", MediaError::fullscreen(e));
            }
        }),
        Ok(None) => {}
        Err(e) => log::debug!("Ignoring: {}", e),
    }
}

/// First exit method the document has, standard before prefixed.
fn exit_method(available: impl Fn(&str) -> bool) -> Option<&'static str> {
    ["exitFullscreen", "webkitExitFullscreen"]
        .into_iter()
        .find(|name| available(*name))
}

fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

fn still_fullscreen() -> bool {
    let Some(document) = document() else {
        return false;
    };
    if document.fullscreen_element().is_some() {
        return true;
    }
    Reflect::get(&document, &JsValue::from_str("webkitFullscreenElement"))
        .map(|el| !el.is_null() && !el.is_undefined())
        .unwrap_or(false)
}

fn has_method(target: &JsValue, name: &str) -> bool {
    Reflect::get(target, &JsValue::from_str(name))
        .map(|value| value.is_function())
        .unwrap_or(false)
}

/// Calls `target[name]()`. Returns the promise when the method produced one.
fn call_method(target: &JsValue, name: &str) -> Result<Option<Promise>, MediaError> {
    let method = Reflect::get(target, &JsValue::from_str(name))
        .map_err(MediaError::fullscreen)?
        .dyn_into::<Function>()
        .map_err(|_| MediaError::FullscreenUnsupported)?;
    let returned = method.call0(target).map_err(MediaError::fullscreen)?;
    Ok(returned.dyn_into::<Promise>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_wins_when_everything_is_available() {
        let caps = Capabilities {
            standard: true,
            webkit: true,
            native_video: true,
        };
        assert_eq!(
            FullscreenStrategy::resolve(caps),
            Some(FullscreenStrategy::Standard)
        );
    }

    #[test]
    fn falls_back_in_priority_order() {
        let webkit_only = Capabilities {
            webkit: true,
            native_video: true,
            ..Capabilities::default()
        };
        assert_eq!(
            FullscreenStrategy::resolve(webkit_only),
            Some(FullscreenStrategy::Webkit)
        );

        let ios = Capabilities {
            native_video: true,
            ..Capabilities::default()
        };
        assert_eq!(
            FullscreenStrategy::resolve(ios),
            Some(FullscreenStrategy::NativeVideo)
        );
    }

    #[test]
    fn nothing_available_resolves_to_none() {
        assert_eq!(FullscreenStrategy::resolve(Capabilities::default()), None);
    }

    #[test]
    fn native_video_exit_is_watched_on_the_video() {
        assert!(FullscreenStrategy::Standard.exit_on_document());
        assert!(FullscreenStrategy::Webkit.exit_on_document());
        assert!(!FullscreenStrategy::NativeVideo.exit_on_document());
        assert_eq!(
            FullscreenStrategy::NativeVideo.exit_event(),
            "webkitendfullscreen"
        );
    }

    #[test]
    fn denial_is_reported_on_the_document_for_container_requests() {
        assert_eq!(
            FullscreenStrategy::Standard.error_event(),
            Some("fullscreenerror")
        );
        assert_eq!(
            FullscreenStrategy::Webkit.error_event(),
            Some("webkitfullscreenerror")
        );
        assert_eq!(FullscreenStrategy::NativeVideo.error_event(), None);
    }

    #[test]
    fn request_from_inactive_activates() {
        assert_eq!(
            FullscreenPhase::Inactive.on(PhaseEvent::Requested),
            Some(FullscreenPhase::Active)
        );
    }

    #[test]
    fn request_while_active_is_refused() {
        assert_eq!(FullscreenPhase::Active.on(PhaseEvent::Requested), None);
    }

    #[test]
    fn exit_and_failure_both_return_to_inactive() {
        for event in [PhaseEvent::Exited, PhaseEvent::RequestFailed] {
            assert_eq!(
                FullscreenPhase::Active.on(event),
                Some(FullscreenPhase::Inactive)
            );
            assert_eq!(
                FullscreenPhase::Inactive.on(event),
                Some(FullscreenPhase::Inactive)
            );
        }
    }

    #[test]
    fn new_session_is_inactive() {
        let session = FullscreenSession::default();
        assert_eq!(session.phase(), FullscreenPhase::Inactive);
    }

    #[test]
    fn denied_request_lets_the_tile_try_again() {
        let session = FullscreenSession::default();
        let next = session.phase().on(PhaseEvent::Requested).unwrap();
        session.phase.set(next);

        let finished = finish(&session.phase, &session.listeners, PhaseEvent::RequestFailed);
        assert!(finished.is_empty());
        assert_eq!(session.phase(), FullscreenPhase::Inactive);
        assert!(session.listeners.borrow().is_empty());
        assert_eq!(
            session.phase().on(PhaseEvent::Requested),
            Some(FullscreenPhase::Active)
        );
    }

    #[test]
    fn finish_without_session_still_resets_phase() {
        let phase = Cell::new(FullscreenPhase::Active);
        let gone: Weak<ListenerSlot> = Weak::new();
        finish_later(&phase, &gone, PhaseEvent::Exited);
        assert_eq!(phase.get(), FullscreenPhase::Inactive);
    }

    #[test]
    fn exit_prefers_the_standard_method() {
        assert_eq!(exit_method(|_| true), Some("exitFullscreen"));
        assert_eq!(
            exit_method(|name| name == "webkitExitFullscreen"),
            Some("webkitExitFullscreen")
        );
        assert_eq!(exit_method(|_| false), None);
    }
}
