use web_sys::{Element, HtmlVideoElement};
use yew::prelude::*;

use crate::gallery::VideoItem;
use crate::media::{ensure_muted, exit_fullscreen, FullscreenSession};

#[derive(Properties, PartialEq)]
pub struct VideoTileProps {
    pub item: VideoItem,
}

/// One gallery video. Clicking the tile promotes the whole tile (video plus
/// exit button) to fullscreen; sound stays off throughout.
#[function_component(VideoTile)]
pub fn video_tile(props: &VideoTileProps) -> Html {
    let container_ref = use_node_ref();
    let video_ref = use_node_ref();
    let session = use_mut_ref(FullscreenSession::default);

    {
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                    ensure_muted(&video);
                }
                || ()
            },
            props.item.src.clone(),
        );
    }

    let enter_fullscreen = {
        let container_ref = container_ref.clone();
        let video_ref = video_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let (Some(container), Some(video)) = (
                container_ref.cast::<Element>(),
                video_ref.cast::<HtmlVideoElement>(),
            ) else {
                return;
            };
            session.borrow().enter(&container, &video);
        })
    };

    let leave_fullscreen = Callback::from(|e: MouseEvent| exit_fullscreen(&e));

    let keep_muted = Callback::from(|e: Event| {
        let video: HtmlVideoElement = e.target_unchecked_into();
        ensure_muted(&video);
    });

    html! {
        <div class="video-tile" ref={container_ref} onclick={enter_fullscreen}>
            <video
                ref={video_ref}
                src={props.item.src.clone()}
                poster={props.item.poster.clone()}
                muted=true
                loop=true
                preload="metadata"
                playsinline=true
                onloadedmetadata={keep_muted.clone()}
                onvolumechange={keep_muted}
            />
            <span class="tile-hint"><i class="fas fa-expand"></i></span>
            <button class="fs-exit" onclick={leave_fullscreen}>{"Salir"}</button>
        </div>
    }
}
