use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Node, PointerEvent};
use yew::prelude::*;

use super::reveal::use_reveal;
use crate::config::MotionConfig;
use crate::state::parallax::{self, Anchor};
use crate::state::spring::RedrawGate;
use crate::state::{Bounds, DragStep, ItemState, Placement, Release};
use crate::util::{
    client_rect, cubic_bezier_css, scroll_y, set_style, transform_css, viewport_height,
};

#[derive(Properties, PartialEq, Clone)]
pub struct CollageItemProps {
    pub children: Html,
    #[prop_or_default]
    pub class: Classes,
    /// Parallax speed; 1 travels the full configured distance.
    #[prop_or(1.0)]
    pub speed: f64,
    #[prop_or(10)]
    pub z_index: i32,
    /// CSS length, usually a percentage of the enclosing section.
    #[prop_or(AttrValue::Static("0"))]
    pub x: AttrValue,
    #[prop_or(AttrValue::Static("0"))]
    pub y: AttrValue,
    #[prop_or_default]
    pub rotation: f64,
    #[prop_or(1.0)]
    pub scale: f64,
    /// Entrance delay in seconds.
    #[prop_or_default]
    pub delay: f64,
    /// Drag stays inside this element; without it drag is unconstrained.
    #[prop_or_default]
    pub container: Option<NodeRef>,
    /// Fired on a press that never turned into a drag.
    #[prop_or_default]
    pub on_click: Option<Callback<()>>,
}

#[function_component(CollageItem)]
pub fn collage_item(props: &CollageItemProps) -> Html {
    let config = use_context::<MotionConfig>().unwrap_or_default();
    let outer_ref = use_node_ref();
    let layer_ref = use_node_ref();
    let body_ref = use_node_ref();
    let placement = Placement {
        z_index: props.z_index,
        rotation: props.rotation,
        speed: props.speed,
        scale: props.scale,
    };
    let item = use_mut_ref(|| ItemState::new(placement, &config));
    let on_click_ref = use_mut_ref(|| props.on_click.clone());
    let baseline_z = item.borrow().placement.z_index;
    let revealed = use_reveal(outer_ref.clone(), config.entrance.margin);

    // Keep the latest tap handler without re-registering listeners
    *on_click_ref.borrow_mut() = props.on_click.clone();

    // Frame loop and window pointer listeners, live for the item's lifetime
    {
        let item = item.clone();
        let outer_ref = outer_ref.clone();
        let layer_ref = layer_ref.clone();
        let body_ref = body_ref.clone();
        let on_click_ref = on_click_ref.clone();
        let distance = config.parallax.distance;
        use_effect_with((), move |_| {
            let window = web_sys::window();
            // Cleared on resize; re-measured lazily by the next frame
            let anchor = Rc::new(Cell::new(None::<Anchor>));

            let raf_id = Rc::new(RefCell::new(None::<i32>));
            let frame_cell: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> =
                Rc::new(RefCell::new(None));
            {
                let item = item.clone();
                let anchor = anchor.clone();
                let raf_id = raf_id.clone();
                let frame_cell_loop = frame_cell.clone();
                let outer_ref = outer_ref.clone();
                let layer_ref = layer_ref.clone();
                let body_ref = body_ref.clone();
                let mut last_ts = None::<f64>;
                let mut redraw = RedrawGate::default();
                let mut written_z = None::<i32>;
                *frame_cell.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
                    let dt = match last_ts.replace(ts) {
                        Some(prev) => ts - prev,
                        None => 16.0,
                    };
                    if let (Some(outer), Some(layer), Some(body)) = (
                        outer_ref.cast::<Element>(),
                        layer_ref.cast::<Element>(),
                        body_ref.cast::<Element>(),
                    ) {
                        let y = scroll_y();
                        let vh = viewport_height();
                        let a = match anchor.get() {
                            Some(a) => a,
                            None => {
                                let rect = client_rect(&outer);
                                let a = Anchor::measure(rect.top, rect.bottom - rect.top, y);
                                anchor.set(Some(a));
                                a
                            }
                        };
                        let mut it = item.borrow_mut();
                        let dragging = it.drag.is_dragging();
                        if redraw.is_animating() || dragging || a.on_screen(y, vh) {
                            let target =
                                parallax::offset(a.progress(y, vh), it.placement.speed, distance);
                            let moving = it.tick(target, dt);
                            let z = it.z_index();
                            if redraw.frame(moving) || dragging || written_z != Some(z) {
                                let offset = it.drag.offset();
                                let pose = it.pose();
                                if written_z != Some(z) {
                                    set_style(&outer, "z-index", &z.to_string());
                                    written_z = Some(z);
                                }
                                set_style(
                                    &layer,
                                    "transform",
                                    &format!("translate3d(0, {:.2}px, 0)", it.parallax.value),
                                );
                                set_style(
                                    &body,
                                    "transform",
                                    &transform_css(offset.x, offset.y, pose.rotation, pose.scale),
                                );
                            }
                        }
                    }
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
            if let (Some(win), Some(cb)) = (window.as_ref(), frame_cell.borrow().as_ref()) {
                if let Ok(id) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    *raf_id.borrow_mut() = Some(id);
                }
            }

            let pointermove_cb = {
                let item = item.clone();
                Closure::wrap(Box::new(move |e: PointerEvent| {
                    let mut it = item.borrow_mut();
                    let step = it.drag.moved(
                        e.client_x() as f64,
                        e.client_y() as f64,
                        e.time_stamp(),
                    );
                    if step == DragStep::Started {
                        it.drag_start();
                        log::debug!("drag start");
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let pointerup_cb = {
                let item = item.clone();
                let body_ref = body_ref.clone();
                Closure::wrap(Box::new(move |e: PointerEvent| {
                    let on_item = match (body_ref.cast::<Node>(), e.target()) {
                        (Some(body), Some(target)) => target
                            .dyn_ref::<Node>()
                            .is_some_and(|node| body.contains(Some(node))),
                        _ => false,
                    };
                    let release = item.borrow_mut().drag.release(e.time_stamp(), on_item);
                    match release {
                        Release::Ignored => {}
                        Release::Tap => {
                            // Clone out first; the handler may re-render this item
                            let cb = on_click_ref.borrow().clone();
                            if let Some(cb) = cb {
                                cb.emit(());
                            }
                        }
                        Release::Fling { target } => {
                            item.borrow_mut().drag_end();
                            log::debug!("drag end, gliding to ({:.0}, {:.0})", target.x, target.y);
                        }
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let pointercancel_cb = {
                let item = item.clone();
                Closure::wrap(Box::new(move |_e: PointerEvent| {
                    let mut it = item.borrow_mut();
                    if it.drag.cancel() {
                        it.drag_end();
                        log::debug!("drag cancelled");
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let resize_cb = {
                let anchor = anchor.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    anchor.set(None);
                }) as Box<dyn FnMut(_)>)
            };
            let listeners: [(&str, &Closure<dyn FnMut(PointerEvent)>); 3] = [
                ("pointermove", &pointermove_cb),
                ("pointerup", &pointerup_cb),
                ("pointercancel", &pointercancel_cb),
            ];
            if let Some(win) = window.as_ref() {
                for (kind, cb) in listeners {
                    let _ = win.add_event_listener_with_callback(kind, cb.as_ref().unchecked_ref());
                }
                let _ = win.add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());
            }

            move || {
                if let Some(win) = window {
                    let listeners: [(&str, &Closure<dyn FnMut(PointerEvent)>); 3] = [
                        ("pointermove", &pointermove_cb),
                        ("pointerup", &pointerup_cb),
                        ("pointercancel", &pointercancel_cb),
                    ];
                    for (kind, cb) in listeners {
                        let _ = win
                            .remove_event_listener_with_callback(kind, cb.as_ref().unchecked_ref());
                    }
                    let _ = win.remove_event_listener_with_callback(
                        "resize",
                        resize_cb.as_ref().unchecked_ref(),
                    );
                    if let Some(id) = *raf_id.borrow() {
                        let _ = win.cancel_animation_frame(id);
                    }
                }
                // Break the self-reference so the frame closure is dropped
                frame_cell.borrow_mut().take();
            }
        });
    }

    let onpointerdown = {
        let item = item.clone();
        let body_ref = body_ref.clone();
        let container = props.container.clone();
        Callback::from(move |e: PointerEvent| {
            if e.button() != 0 {
                return;
            }
            let mut it = item.borrow_mut();
            let bounds = match (
                container.as_ref().and_then(|c| c.cast::<Element>()),
                body_ref.cast::<Element>(),
            ) {
                (Some(c), Some(b)) => Some(Bounds::from_rects(
                    client_rect(&c),
                    client_rect(&b),
                    it.drag.offset(),
                )),
                _ => None,
            };
            it.drag.set_bounds(bounds);
            it.drag
                .press(e.client_x() as f64, e.client_y() as f64, e.time_stamp());
        })
    };
    let onpointerenter = {
        let item = item.clone();
        Callback::from(move |_e: PointerEvent| item.borrow_mut().pointer_enter())
    };
    let onpointerleave = {
        let item = item.clone();
        Callback::from(move |_e: PointerEvent| item.borrow_mut().pointer_leave())
    };

    let entrance = config.entrance;
    let entrance_style = format!(
        "opacity:{}; transform:translate3d(0, {}px, 0); transition:opacity {d}s {ease} {delay}s, transform {d}s {ease} {delay}s;",
        if revealed { 1 } else { 0 },
        if revealed { 0.0 } else { entrance.distance },
        d = entrance.duration_s,
        ease = cubic_bezier_css(entrance.easing),
        delay = props.delay,
    );

    html! {
        <div
            ref={outer_ref}
            class={props.class.clone()}
            style={format!(
                "position:absolute; left:{}; top:{}; z-index:{}; pointer-events:none; width:max-content; max-width:100%;",
                props.x, props.y, baseline_z
            )}
        >
            <div ref={layer_ref} style="width:100%; height:100%; will-change:transform;">
                <div
                    ref={body_ref}
                    class="collage-body"
                    data-hoverable="true"
                    style={format!(
                        "pointer-events:auto; touch-action:none; user-select:none; transform:{};",
                        transform_css(0.0, 0.0, placement.rotation, placement.scale)
                    )}
                    {onpointerdown}
                    {onpointerenter}
                    {onpointerleave}
                >
                    <div style={entrance_style}>
                        { props.children.clone() }
                    </div>
                </div>
            </div>
        </div>
    }
}
