use yew::prelude::*;

mod components;
mod config;
mod gallery;
mod media;
mod observers;
mod pages;
mod utils;

use pages::landing::Landing;

#[function_component(App)]
fn app() -> Html {
    html! { <Landing /> }
}

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    yew::Renderer::<App>::new().render();
}
