// Page-wide constants. Everything here is compile-time; the site has no
// runtime configuration.

/// Id of the hero section the navbar observer watches.
pub const HERO_SECTION_ID: &str = "inicio";

pub const REVEAL_SELECTOR: &str = ".reveal";
pub const REVEALED_CLASS: &str = "is-visible";
pub const REVEAL_INDEX_ATTR: &str = "data-reveal-index";

/// Stagger applied to reveal targets: `(index % STAGGER_GROUP) * STAGGER_STEP_MS`.
pub const STAGGER_STEP_MS: u32 = 60;
pub const STAGGER_GROUP: usize = 6;

/// Delay between autoplay attempts on the hero video.
pub const AUTOPLAY_RETRY_MS: u32 = 300;

pub const LOCKED_OVERFLOW: &str = "hidden";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    pub root_margin: &'static str,
    pub threshold: f64,
}

/// Top margin pre-triggers the solid navbar before the hero fully leaves.
pub const HERO_OBSERVER: ObserverOptions = ObserverOptions {
    root_margin: "-80px 0px 0px 0px",
    threshold: 0.05,
};

pub const REVEAL_OBSERVER: ObserverOptions = ObserverOptions {
    root_margin: "0px 0px -8% 0px",
    threshold: 0.15,
};

/// Embedded gallery catalog, parsed once at start-up.
pub const GALLERY_CATALOG_JSON: &str = include_str!("../assets/galleries.json");
