use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::config::MotionConfig;
use crate::state::CursorState;
use crate::state::cursor::is_interactive;
use crate::state::spring::RedrawGate;
use crate::util::{has_hoverable_ancestor, set_style};

#[function_component(Cursor)]
pub fn cursor() -> Html {
    let config = use_context::<MotionConfig>().unwrap_or_default().cursor;
    let node = use_node_ref();
    let ring = use_node_ref();
    let state = use_mut_ref(|| CursorState::new(config));

    {
        let node = node.clone();
        let ring = ring.clone();
        let state = state.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();

            let mousemove_cb = {
                let state = state.clone();
                Closure::wrap(Box::new(move |e: MouseEvent| {
                    state
                        .borrow_mut()
                        .pointer_moved(e.client_x() as f64, e.client_y() as f64);
                }) as Box<dyn FnMut(_)>)
            };
            let mouseover_cb = {
                let state = state.clone();
                let ring = ring.clone();
                Closure::wrap(Box::new(move |e: MouseEvent| {
                    let interactive = e
                        .target()
                        .and_then(|t| t.dyn_into::<Element>().ok())
                        .map(|el| is_interactive(&el.tag_name(), has_hoverable_ancestor(&el)))
                        .unwrap_or(false);
                    state.borrow_mut().pointer_over(interactive);
                    if let Some(ring) = ring.cast::<Element>() {
                        set_style(
                            &ring,
                            "background-color",
                            if interactive { "rgba(255,255,255,0.2)" } else { "transparent" },
                        );
                    }
                }) as Box<dyn FnMut(_)>)
            };

            let raf_id = Rc::new(RefCell::new(None::<i32>));
            let frame_cell: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> =
                Rc::new(RefCell::new(None));
            {
                let raf_id = raf_id.clone();
                let frame_cell_loop = frame_cell.clone();
                let mut last_ts = None::<f64>;
                let mut redraw = RedrawGate::default();
                *frame_cell.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
                    let dt = match last_ts.replace(ts) {
                        Some(prev) => ts - prev,
                        None => 16.0,
                    };
                    let mut s = state.borrow_mut();
                    let moving = s.tick(dt);
                    if redraw.frame(moving) {
                        if let Some(el) = node.cast::<Element>() {
                            set_style(
                                &el,
                                "transform",
                                &format!(
                                    "translate3d({:.2}px, {:.2}px, 0) scale({:.3})",
                                    s.follow_x.value, s.follow_y.value, s.scale.value
                                ),
                            );
                        }
                    }
                    drop(s);
                    if let Some(win) = web_sys::window() {
                        if let Some(cb) = frame_cell_loop.borrow().as_ref() {
                            if let Ok(id) = win.request_animation_frame(cb.as_ref().unchecked_ref())
                            {
                                *raf_id.borrow_mut() = Some(id);
                            }
                        }
                    }
                }) as Box<dyn FnMut(f64)>));
            }

            if let Some(win) = window.as_ref() {
                let _ = win.add_event_listener_with_callback(
                    "mousemove",
                    mousemove_cb.as_ref().unchecked_ref(),
                );
                let _ = win.add_event_listener_with_callback(
                    "mouseover",
                    mouseover_cb.as_ref().unchecked_ref(),
                );
                if let Some(cb) = frame_cell.borrow().as_ref() {
                    if let Ok(id) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                        *raf_id.borrow_mut() = Some(id);
                    }
                }
            }

            move || {
                if let Some(win) = window {
                    let _ = win.remove_event_listener_with_callback(
                        "mousemove",
                        mousemove_cb.as_ref().unchecked_ref(),
                    );
                    let _ = win.remove_event_listener_with_callback(
                        "mouseover",
                        mouseover_cb.as_ref().unchecked_ref(),
                    );
                    if let Some(id) = *raf_id.borrow() {
                        let _ = win.cancel_animation_frame(id);
                    }
                }
                frame_cell.borrow_mut().take();
            }
        });
    }

    html! {
        <div
            ref={node}
            class="cursor"
            style={format!(
                "position:fixed; top:0; left:0; width:{s}px; height:{s}px; pointer-events:none; z-index:40000; mix-blend-mode:difference;",
                s = config.size
            )}
        >
            <div
                ref={ring}
                style="width:100%; height:100%; border-radius:9999px; border:1px solid rgba(255,255,255,0.8); transition:background-color 0.2s;"
            />
        </div>
    }
}
