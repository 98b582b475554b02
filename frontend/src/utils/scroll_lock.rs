use web_sys::{window, HtmlElement};

use crate::config;

/// Anything with an inline `overflow` style.
pub trait OverflowTarget {
    fn set_overflow(&self, value: &str);
}

impl OverflowTarget for HtmlElement {
    fn set_overflow(&self, value: &str) {
        let style = self.style();
        let result = if value.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", value)
        };
        if let Err(e) = result {
            log::debug!("Could not set overflow to {:?}: {:?}", value, e);
        }
    }
}

/// Page scrolling stays locked while this guard is alive.
pub struct ScrollLock<T: OverflowTarget> {
    target: T,
}

impl<T: OverflowTarget> ScrollLock<T> {
    pub fn acquire(target: T) -> Self {
        target.set_overflow(config::LOCKED_OVERFLOW);
        Self { target }
    }
}

impl<T: OverflowTarget> Drop for ScrollLock<T> {
    fn drop(&mut self) {
        self.target.set_overflow("");
    }
}

pub fn lock_body_scroll() -> Option<ScrollLock<HtmlElement>> {
    let body = window()?.document()?.body()?;
    Some(ScrollLock::acquire(body))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Clone, Default)]
    struct FakeBody(Rc<RefCell<String>>);

    impl OverflowTarget for FakeBody {
        fn set_overflow(&self, value: &str) {
            *self.0.borrow_mut() = value.to_string();
        }
    }

    #[test]
    fn acquire_hides_overflow() {
        let body = FakeBody::default();
        let _lock = ScrollLock::acquire(body.clone());
        assert_eq!(*body.0.borrow(), "hidden");
    }

    #[test]
    fn drop_restores_scrolling() {
        let body = FakeBody::default();
        let lock = ScrollLock::acquire(body.clone());
        drop(lock);
        assert_eq!(*body.0.borrow(), "");
    }

    #[test]
    fn released_when_owner_is_torn_down_early() {
        let body = FakeBody::default();
        let mut slot = Some(ScrollLock::acquire(body.clone()));
        assert_eq!(*body.0.borrow(), "hidden");
        // Same as an effect destructor running on unmount.
        slot.take();
        assert_eq!(*body.0.borrow(), "");
    }
}
