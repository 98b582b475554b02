use web_sys::HtmlVideoElement;
use yew::prelude::*;

use crate::config;
use crate::media::{ensure_muted, AutoplayLoop};

#[function_component(Hero)]
pub fn hero() -> Html {
    let video_ref = use_node_ref();

    // Background video: always silent, keeps retrying until the browser
    // lets it play. Unmounting cancels the retries.
    {
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |_| {
                let autoplay = video_ref.cast::<HtmlVideoElement>().map(|video| {
                    ensure_muted(&video);
                    if let Err(e) = video.set_attribute("playsinline", "") {
                        log::debug!("Could not set playsinline on hero video: {:?}", e);
                    }
                    AutoplayLoop::start(video)
                });
                move || drop(autoplay)
            },
            (),
        );
    }

    let keep_muted = Callback::from(|e: Event| {
        let video: HtmlVideoElement = e.target_unchecked_into();
        ensure_muted(&video);
    });

    html! {
        <header id={config::HERO_SECTION_ID} class="hero">
            <video
                ref={video_ref}
                class="hero-video"
                src="assets/videos/hero.mp4"
                poster="assets/img/fotouri.jpeg"
                muted=true
                loop=true
                preload="auto"
                onvolumechange={keep_muted}
            />
            <div class="hero-overlay"></div>
            <div class="hero-content reveal">
                <h1 class="hero-title">{"Contamos historias desde el aire"}</h1>
                <p class="hero-subtitle">
                    {"Filmación con drones FPV para televisión, tours, marcas y festivales."}
                </p>
                <a href="#servicios" class="hero-cta">{"Ver trabajos"}</a>
            </div>
        </header>
    }
}
