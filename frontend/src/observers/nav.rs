use web_sys::window;
use yew::prelude::*;

use super::ObserverHandle;
use crate::config;

/// Navbar is solid while the hero is out of view. A batch can carry several
/// entries; the last one is the most recent state.
pub fn solid_nav_for(intersecting: &[bool]) -> Option<bool> {
    intersecting.last().map(|visible| !visible)
}

/// `true` once the hero section `hero_id` has scrolled out from under the
/// navbar. Stays `false` when the page has no such section.
#[hook]
pub fn use_solid_nav(hero_id: &'static str) -> bool {
    let solid = use_state(|| false);
    {
        let solid = solid.clone();
        use_effect_with_deps(
            move |_| {
                let handle = watch_hero(hero_id, solid);
                move || drop(handle)
            },
            (),
        );
    }
    *solid
}

fn watch_hero(hero_id: &str, solid: UseStateHandle<bool>) -> Option<ObserverHandle> {
    let Some(hero) = window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(hero_id))
    else {
        log::debug!("No #{} on the page, navbar stays transparent", hero_id);
        return None;
    };

    let handle = ObserverHandle::new(config::HERO_OBSERVER, move |entries, _| {
        let intersecting: Vec<bool> = entries.iter().map(|e| e.is_intersecting()).collect();
        if let Some(next) = solid_nav_for(&intersecting) {
            solid.set(next);
        }
    })
    .map_err(|e| log::warn!("Failed to create hero observer: {:?}", e))
    .ok()?;

    handle.observe(&hero);
    Some(handle)
}
