use yew::prelude::*;

use super::video_tile::VideoTile;
use crate::gallery::VideoItem;

#[derive(Properties, PartialEq)]
pub struct GalleryModalProps {
    pub title: String,
    pub items: Vec<VideoItem>,
    pub on_close: Callback<()>,
}

#[function_component(GalleryModal)]
pub fn gallery_modal(props: &GalleryModalProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    // Clicks inside the dialog must not reach the overlay.
    let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-overlay" onclick={close.clone()}>
            <div class="modal-content" onclick={swallow}>
                <div class="modal-header">
                    <h3>{&props.title}</h3>
                    <button class="modal-close" onclick={close}>{"×"}</button>
                </div>
                {
                    if props.items.is_empty() {
                        html! { <p class="gallery-empty">{"Pronto vamos a sumar videos acá."}</p> }
                    } else {
                        html! {
                            <div class="gallery-grid">
                                { for props.items.iter().map(|item| html! {
                                    <VideoTile key={item.src.clone()} item={item.clone()} />
                                }) }
                            </div>
                        }
                    }
                }
            </div>
        </div>
    }
}
