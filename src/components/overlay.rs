use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use super::info_modal::InfoModal;
use super::project_modal::ProjectModal;
use crate::model::Overlay;

/// Time the exit animation gets before the overlay leaves the tree.
const EXIT_MS: i32 = 300;

#[derive(Properties, PartialEq, Clone)]
pub struct OverlayHostProps {
    pub overlay: Option<Overlay>,
    pub on_close: Callback<()>,
}

/// Renders the single overlay slot. A cleared selection keeps the last
/// record on screen while its exit animation plays; a new selection
/// replaces the current one immediately.
#[function_component(OverlayHost)]
pub fn overlay_host(props: &OverlayHostProps) -> Html {
    let shown = use_state(|| props.overlay.clone());
    let leaving = use_state(|| false);

    {
        let shown = shown.clone();
        let leaving = leaving.clone();
        use_effect_with(props.overlay.clone(), move |overlay| {
            let mut timer = None;
            match overlay {
                Some(o) => {
                    shown.set(Some(o.clone()));
                    leaving.set(false);
                }
                None if shown.is_some() => {
                    leaving.set(true);
                    if let Some(win) = web_sys::window() {
                        let done = Closure::once(move || {
                            shown.set(None);
                            leaving.set(false);
                        });
                        if let Ok(id) = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                            done.as_ref().unchecked_ref(),
                            EXIT_MS,
                        ) {
                            timer = Some((win, id, done));
                        }
                    }
                }
                None => {}
            }
            move || {
                if let Some((win, id, _done)) = timer {
                    win.clear_timeout_with_handle(id);
                }
            }
        });
    }

    // Escape closes whatever is open
    {
        let on_close = props.on_close.clone();
        let open = props.overlay.is_some();
        use_effect_with(open, move |open| {
            let listener = if *open {
                web_sys::window().map(|win| {
                    let cb = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                        if e.key() == "Escape" {
                            on_close.emit(());
                        }
                    }) as Box<dyn FnMut(_)>);
                    let _ = win.add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref());
                    (win, cb)
                })
            } else {
                None
            };
            move || {
                if let Some((win, cb)) = listener {
                    let _ = win.remove_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref());
                }
            }
        });
    }

    let Some(overlay) = (*shown).clone() else {
        return html! {};
    };

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
    let (backdrop_class, panel) = match &overlay {
        Overlay::Project(project) => (
            "overlay-backdrop project",
            html! { <ProjectModal project={project.clone()} on_close={props.on_close.clone()} /> },
        ),
        Overlay::Info(info) => (
            "overlay-backdrop info",
            html! { <InfoModal info={info.clone()} on_close={props.on_close.clone()} /> },
        ),
    };

    html! {
        <div
            key={overlay.id().to_string()}
            class={classes!(backdrop_class, (*leaving).then_some("leaving"))}
            onclick={close_cb}
        >
            <div class={classes!("overlay-panel", (*leaving).then_some("leaving"))} onclick={stop}>
                { panel }
            </div>
        </div>
    }
}
