use std::rc::Rc;

use yew::Reducible;

use super::catalog::{GalleryCatalog, VideoItem};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    pub is_open: bool,
    pub title: String,
    pub items: Vec<VideoItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    Open { title: String, items: Vec<VideoItem> },
    Close,
    /// Escape pressed somewhere in the document.
    Escape,
}

impl ModalAction {
    /// Resolves `key` against the catalog. Unknown keys open an empty gallery.
    pub fn open(catalog: &GalleryCatalog, key: &str, title: impl Into<String>) -> Self {
        ModalAction::Open {
            title: title.into(),
            items: catalog.items_for(key),
        }
    }
}

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ModalAction::Open { title, items } => Rc::new(ModalState {
                is_open: true,
                title,
                items,
            }),
            ModalAction::Close => self.closed(),
            ModalAction::Escape if self.is_open => self.closed(),
            ModalAction::Escape => self,
        }
    }
}

impl ModalState {
    // Returning the same Rc when nothing changes keeps yew from re-rendering.
    fn closed(self: Rc<Self>) -> Rc<Self> {
        if *self == ModalState::default() {
            self
        } else {
            Rc::new(ModalState::default())
        }
    }
}

pub fn is_escape_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(src: &str) -> VideoItem {
        VideoItem {
            src: src.to_string(),
            poster: None,
        }
    }

    fn tours_catalog() -> GalleryCatalog {
        GalleryCatalog::from_json(r#"{"tours": [{"src": "a.mp4"}, {"src": "b.mp4"}]}"#).unwrap()
    }

    #[test]
    fn open_then_close_returns_to_initial() {
        let catalog = tours_catalog();
        let state = Rc::new(ModalState::default());

        let opened = state.reduce(ModalAction::open(&catalog, "tours", "Tours"));
        assert_eq!(
            *opened,
            ModalState {
                is_open: true,
                title: "Tours".to_string(),
                items: vec![item("a.mp4"), item("b.mp4")],
            }
        );

        let closed = opened.reduce(ModalAction::Close);
        assert_eq!(*closed, ModalState::default());
        assert!(!closed.is_open);
        assert!(closed.title.is_empty());
        assert!(closed.items.is_empty());
    }

    #[test]
    fn unknown_key_opens_empty_gallery() {
        let state = Rc::new(ModalState::default())
            .reduce(ModalAction::open(&tours_catalog(), "unknown-key", "X"));
        assert!(state.is_open);
        assert_eq!(state.title, "X");
        assert!(state.items.is_empty());
    }

    #[test]
    fn close_is_idempotent() {
        let state = Rc::new(ModalState::default());
        let once = state.clone().reduce(ModalAction::Close);
        assert!(Rc::ptr_eq(&state, &once));
        let twice = once.reduce(ModalAction::Close);
        assert_eq!(*twice, ModalState::default());
    }

    #[test]
    fn escape_only_acts_when_open() {
        let closed = Rc::new(ModalState::default());
        let after = closed.clone().reduce(ModalAction::Escape);
        assert!(Rc::ptr_eq(&closed, &after));

        let open = after.reduce(ModalAction::open(&tours_catalog(), "tours", "Tours"));
        let via_escape = open.clone().reduce(ModalAction::Escape);
        let via_close = open.reduce(ModalAction::Close);
        assert_eq!(via_escape, via_close);
    }

    #[test]
    fn reopening_replaces_previous_gallery() {
        let catalog = tours_catalog();
        let state = Rc::new(ModalState::default())
            .reduce(ModalAction::open(&catalog, "tours", "Tours"))
            .reduce(ModalAction::open(&catalog, "nope", "Nope"));
        assert_eq!(state.title, "Nope");
        assert!(state.items.is_empty());
    }

    #[test]
    fn escape_key_names() {
        assert!(is_escape_key("Escape"));
        assert!(is_escape_key("Esc"));
        assert!(!is_escape_key("Enter"));
    }
}
