use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct NavProps {
    pub on_reset: Callback<()>,
}

/// Fixed corner navigation: identity, layout reset, contact.
#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let reset_cb = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <nav class="corner-nav">
            <div class="corner top-left">
                <h1 class="serif-display identity">{"Jayaram H"}</h1>
                <p class="hand subtitle">{"Portfolio 2026"}</p>
            </div>
            <div class="corner top-right">
                <button onclick={reset_cb} class="reset-button" data-hoverable="true">
                    {"[ Reset Layout ]"}
                </button>
            </div>
            <div class="corner bottom-right">
                <a href="mailto:hello@jayaram.design" class="serif-display contact" data-hoverable="true">
                    {"Let's Chat ->"}
                </a>
            </div>
        </nav>
    }
}
