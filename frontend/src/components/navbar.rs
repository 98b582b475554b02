use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    /// Opaque background once the hero has scrolled away.
    pub solid: bool,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    html! {
        <nav class={classes!("top-nav", props.solid.then_some("solid"))}>
            <a href="#inicio" class="brand">{"Uri Films"}</a>
            <ul class="nav-links">
                <li><a href="#servicios">{"Servicios"}</a></li>
                <li><a href="#nosotros">{"Nosotros"}</a></li>
                <li><a href="#contacto">{"Contacto"}</a></li>
            </ul>
        </nav>
    }
}
