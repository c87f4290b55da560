use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Element;
use yew::prelude::*;

use crate::state::Reveal;
use crate::util::{client_rect, viewport_height};

/// Flips to true the first time `node` scrolls into the viewport (shrunk by
/// `margin` px) and stays true until the component remounts.
#[hook]
pub fn use_reveal(node: NodeRef, margin: f64) -> bool {
    let revealed = use_state(|| false);
    {
        let handle = revealed.clone();
        // Keyed on the flag too: flipping it tears the listeners down
        use_effect_with((node, *revealed), move |(node, already)| {
            let latch = Rc::new(RefCell::new(if *already {
                Reveal::latched(margin)
            } else {
                Reveal::new(margin)
            }));
            let check = {
                let node = node.clone();
                let latch = latch.clone();
                move || {
                    let Some(el) = node.cast::<Element>() else {
                        return;
                    };
                    let rect = client_rect(&el);
                    if latch.borrow_mut().check(rect.top, rect.bottom, viewport_height()) {
                        handle.set(true);
                    }
                }
            };
            if latch.borrow().watching() {
                check();
            }
            let listener = if latch.borrow().watching() {
                web_sys::window().map(|window| {
                    let cb = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                        check();
                    }) as Box<dyn FnMut(_)>);
                    for kind in ["scroll", "resize"] {
                        let _ = window
                            .add_event_listener_with_callback(kind, cb.as_ref().unchecked_ref());
                    }
                    (window, cb)
                })
            } else {
                None
            };
            move || {
                if let Some((window, cb)) = listener {
                    for kind in ["scroll", "resize"] {
                        let _ = window
                            .remove_event_listener_with_callback(kind, cb.as_ref().unchecked_ref());
                    }
                }
            }
        });
    }
    *revealed
}
