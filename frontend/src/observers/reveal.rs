use std::collections::HashSet;

use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement};
use yew::prelude::*;

use super::ObserverHandle;
use crate::config;

pub fn stagger_delay_ms(index: usize) -> u32 {
    (index % config::STAGGER_GROUP) as u32 * config::STAGGER_STEP_MS
}

pub fn transition_delay(index: usize) -> String {
    format!("{}ms", stagger_delay_ms(index))
}

/// Remembers which reveal targets already played their entrance.
#[derive(Debug, Default)]
pub struct RevealTracker {
    revealed: HashSet<usize>,
}

impl RevealTracker {
    /// `true` exactly once per target: on its first intersecting report.
    pub fn should_reveal(&mut self, index: usize, is_intersecting: bool) -> bool {
        is_intersecting && self.revealed.insert(index)
    }
}

/// Staggers and observes every element matching `selector` once the page has
/// rendered; each gets `is-visible` the first time it scrolls into view.
#[hook]
pub fn use_reveal_on_scroll(selector: &'static str) {
    use_effect_with_deps(
        move |_| {
            let handle = watch_reveal_targets(selector);
            move || drop(handle)
        },
        (),
    );
}

fn watch_reveal_targets(selector: &str) -> Option<ObserverHandle> {
    let document = window()?.document()?;
    let targets = document
        .query_selector_all(selector)
        .map_err(|e| log::warn!("Bad reveal selector {}: {:?}", selector, e))
        .ok()?;

    let mut tracker = RevealTracker::default();
    let handle = ObserverHandle::new(config::REVEAL_OBSERVER, move |entries, observer| {
        for entry in entries {
            let target = entry.target();
            let Some(index) = target
                .get_attribute(config::REVEAL_INDEX_ATTR)
                .and_then(|raw| raw.parse::<usize>().ok())
            else {
                continue;
            };
            if tracker.should_reveal(index, entry.is_intersecting()) {
                if let Err(e) = target.class_list().add_1(config::REVEALED_CLASS) {
                    log::debug!("Could not mark reveal target {}: {:?}", index, e);
                }
                observer.unobserve(&target);
            }
        }
    })
    .map_err(|e| log::warn!("Failed to create reveal observer: {:?}", e))
    .ok()?;

    let mut observed = 0;
    for i in 0..targets.length() {
        let Some(el) = targets
            .item(i)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        let index = i as usize;
        if let Err(e) = el
            .style()
            .set_property("transition-delay", &transition_delay(index))
        {
            log::debug!("Could not stagger reveal target {}: {:?}", index, e);
        }
        // The callback finds targets by this index; without it nothing would reveal.
        if let Err(e) = el.set_attribute(config::REVEAL_INDEX_ATTR, &index.to_string()) {
            log::warn!("Skipping reveal target {}: {:?}", index, e);
            continue;
        }
        handle.observe(&el);
        observed += 1;
    }
    log::debug!("Observing {} reveal targets", observed);

    Some(handle)
}
