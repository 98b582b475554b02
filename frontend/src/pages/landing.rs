use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::components::gallery_modal::GalleryModal;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::config;
use crate::gallery::modal::is_escape_key;
use crate::gallery::{GalleryCatalog, ModalAction, ModalState};
use crate::observers::{use_reveal_on_scroll, use_solid_nav};
use crate::utils::scroll_lock::lock_body_scroll;

struct Service {
    key: &'static str,
    title: &'static str,
    blurb: &'static str,
    icon: &'static str,
}

const SERVICES: [Service; 4] = [
    Service {
        key: "television",
        title: "Televisión",
        blurb: "Tomas aéreas para transmisiones deportivas y programas en vivo.",
        icon: "fas fa-tv",
    },
    Service {
        key: "tours",
        title: "Tours virtuales",
        blurb: "Recorridos interiores en una sola toma para inmobiliarias y hoteles.",
        icon: "fas fa-building",
    },
    Service {
        key: "comerciales",
        title: "Comerciales",
        blurb: "Piezas para marcas e industria, de la fábrica a la pantalla.",
        icon: "fas fa-industry",
    },
    Service {
        key: "festivales",
        title: "Festivales y eventos",
        blurb: "La energía del público vista desde adentro y desde arriba.",
        icon: "fas fa-music",
    },
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let catalog = use_memo(|_| GalleryCatalog::builtin(), ());
    let modal = use_reducer(ModalState::default);
    let solid_nav = use_solid_nav(config::HERO_SECTION_ID);
    use_reveal_on_scroll(config::REVEAL_SELECTOR);

    // Page scroll is locked exactly while the gallery is open. The lock is
    // released by the destructor, so unmounting with the modal open also
    // restores scrolling.
    {
        use_effect_with_deps(
            |is_open: &bool| {
                let lock = if *is_open { lock_body_scroll() } else { None };
                move || drop(lock)
            },
            modal.is_open,
        );
    }

    // Escape closes the gallery from anywhere in the document
    {
        let modal = modal.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window()
                    .and_then(|w| w.document())
                    .map(|document| {
                        let callback = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                            if is_escape_key(&e.key()) {
                                modal.dispatch(ModalAction::Escape);
                            }
                        });
                        if let Err(e) = document
                            .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
                        {
                            log::warn!("Failed to listen for keydown: {:?}", e);
                        }
                        (document, callback)
                    });
                move || {
                    if let Some((document, callback)) = listener {
                        if let Err(e) = document.remove_event_listener_with_callback(
                            "keydown",
                            callback.as_ref().unchecked_ref(),
                        ) {
                            log::debug!("Failed to remove keydown listener: {:?}", e);
                        }
                    }
                }
            },
            (),
        );
    }

    let open_gallery = {
        let modal = modal.clone();
        let catalog = catalog.clone();
        Callback::from(move |(key, title): (&'static str, &'static str)| {
            if !catalog.contains(key) {
                log::warn!("No gallery named {}, opening it empty", key);
            }
            modal.dispatch(ModalAction::open(&catalog, key, title));
        })
    };

    let close_modal = {
        let modal = modal.clone();
        Callback::from(move |_: ()| modal.dispatch(ModalAction::Close))
    };

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>
            <Navbar solid={solid_nav} />
            <Hero />

            <section id="servicios" class="services">
                <h2 class="reveal">{"Servicios"}</h2>
                <div class="service-grid">
                    { for SERVICES.iter().map(|service| {
                        let onclick = {
                            let open_gallery = open_gallery.clone();
                            let (key, title) = (service.key, service.title);
                            Callback::from(move |_: MouseEvent| open_gallery.emit((key, title)))
                        };
                        html! {
                            <article class="service-card reveal" key={service.key} {onclick}>
                                <i class={service.icon}></i>
                                <h3>{service.title}</h3>
                                <p>{service.blurb}</p>
                                <span class="service-more">{"Ver videos"}</span>
                            </article>
                        }
                    }) }
                </div>
            </section>

            <section id="nosotros" class="about">
                <div class="about-text reveal">
                    <h2>{"Nosotros"}</h2>
                    <p>{"Somos pilotos y realizadores. Volamos drones FPV donde una cámara tradicional no llega: entre máquinas, sobre autos de rally y en medio de la pista."}</p>
                </div>
                <img class="about-image reveal" src="assets/img/fotouri.jpeg" alt="Piloto con drone FPV" />
            </section>

            <footer id="contacto" class="contact">
                <h2 class="reveal">{"Contacto"}</h2>
                <p class="reveal">{"¿Tenés un proyecto? Escribinos y lo filmamos."}</p>
                <a class="contact-cta reveal" href="mailto:hola@urifilms.com">{"hola@urifilms.com"}</a>
            </footer>

            {
                if modal.is_open {
                    html! {
                        <GalleryModal
                            title={modal.title.clone()}
                            items={modal.items.clone()}
                            on_close={close_modal}
                        />
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

const LANDING_CSS: &str = r#"
    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 50;
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 1rem 2rem;
        background: transparent;
        transition: background-color 0.3s ease, box-shadow 0.3s ease;
    }
    .top-nav.solid {
        background: rgba(10, 10, 14, 0.95);
        box-shadow: 0 2px 12px rgba(0, 0, 0, 0.4);
    }
    .top-nav a {
        color: #fff;
        text-decoration: none;
    }
    .nav-links {
        display: flex;
        gap: 1.5rem;
        list-style: none;
        margin: 0;
    }
    .hero {
        position: relative;
        height: 100vh;
        overflow: hidden;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .hero-video {
        position: absolute;
        inset: 0;
        width: 100%;
        height: 100%;
        object-fit: cover;
    }
    .hero-overlay {
        position: absolute;
        inset: 0;
        background: linear-gradient(rgba(0, 0, 0, 0.35), rgba(0, 0, 0, 0.75));
    }
    .hero-content {
        position: relative;
        text-align: center;
        color: #fff;
    }
    .reveal {
        opacity: 0;
        transform: translateY(24px);
        transition: opacity 0.6s ease, transform 0.6s ease;
    }
    .reveal.is-visible {
        opacity: 1;
        transform: none;
    }
    .service-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
        gap: 1.5rem;
    }
    .service-card {
        cursor: pointer;
        padding: 1.5rem;
        border-radius: 12px;
        background: #15151c;
        color: #ddd;
    }
    .modal-overlay {
        position: fixed;
        inset: 0;
        z-index: 100;
        display: flex;
        align-items: center;
        justify-content: center;
        background: rgba(0, 0, 0, 0.8);
    }
    .modal-content {
        width: min(960px, 92vw);
        max-height: 90vh;
        overflow-y: auto;
        padding: 1.5rem;
        border-radius: 12px;
        background: #111;
        color: #fff;
    }
    .modal-header {
        display: flex;
        justify-content: space-between;
        align-items: center;
    }
    .gallery-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
        gap: 1rem;
    }
    .video-tile {
        position: relative;
        cursor: zoom-in;
        border-radius: 8px;
        overflow: hidden;
    }
    .video-tile video {
        width: 100%;
        display: block;
    }
    .video-tile .fs-exit {
        display: none;
    }
    .video-tile:fullscreen {
        cursor: default;
        background: #000;
    }
    .video-tile:fullscreen video {
        height: 100%;
        object-fit: contain;
    }
    .video-tile:fullscreen .fs-exit {
        display: block;
        position: absolute;
        top: 1rem;
        right: 1rem;
    }
    .video-tile:-webkit-full-screen {
        cursor: default;
        background: #000;
    }
    .video-tile:-webkit-full-screen video {
        height: 100%;
        object-fit: contain;
    }
    .video-tile:-webkit-full-screen .fs-exit {
        display: block;
        position: absolute;
        top: 1rem;
        right: 1rem;
    }
    @media (max-width: 768px) {
        .top-nav {
            padding: 0.75rem 1rem;
        }
        .nav-links {
            gap: 1rem;
        }
    }
"#;
