// Decorative vector shapes. Paths draw themselves in once they scroll into view.
use yew::prelude::*;

use super::reveal::use_reveal;

const INK_GREEN: &str = "#3D5A3D";
const INK_BROWN: &str = "#8B4513";
const INK_BLUE: &str = "#0000EE";

#[derive(Properties, PartialEq, Clone)]
pub struct DoodleProps {
    #[prop_or_default]
    pub class: Classes,
}

#[derive(Properties, PartialEq, Clone)]
struct DrawPathProps {
    d: AttrValue,
    stroke: AttrValue,
    #[prop_or(1.0)]
    width: f64,
    drawn: bool,
    duration: f64,
    #[prop_or_default]
    delay: f64,
    #[prop_or(AttrValue::Static("ease-in-out"))]
    easing: AttrValue,
}

// pathLength=1 normalizes the dash so the reveal works for any path length
#[function_component(DrawPath)]
fn draw_path(props: &DrawPathProps) -> Html {
    let offset = if props.drawn { 0 } else { 1 };
    html! {
        <path
            d={props.d.clone()}
            stroke={props.stroke.clone()}
            stroke-width={props.width.to_string()}
            stroke-linecap="round"
            pathLength="1"
            style={format!(
                "stroke-dasharray:1; stroke-dashoffset:{offset}; transition:stroke-dashoffset {}s {} {}s;",
                props.duration, props.easing, props.delay
            )}
        />
    }
}

#[function_component(SwirlVine)]
pub fn swirl_vine(props: &DoodleProps) -> Html {
    let node = use_node_ref();
    let drawn = use_reveal(node.clone(), 0.0);
    html! {
        <svg ref={node} viewBox="0 0 200 200" class={props.class.clone()} fill="none" xmlns="http://www.w3.org/2000/svg">
            <DrawPath d="M20,180 C50,150 10,120 40,90 C80,50 150,150 180,20" stroke={INK_GREEN} width={2.0} {drawn} duration={2.0} />
            <DrawPath d="M45,95 C60,100 50,110 40,105" stroke={INK_GREEN} width={1.5} {drawn} duration={0.5} delay={1.0} />
        </svg>
    }
}

#[function_component(CircleScribble)]
pub fn circle_scribble(props: &DoodleProps) -> Html {
    let node = use_node_ref();
    let drawn = use_reveal(node.clone(), 0.0);
    let spin = if drawn { 360 } else { 0 };
    html! {
        <svg
            ref={node}
            viewBox="0 0 100 100"
            class={props.class.clone()}
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
            style={format!("transform:rotate({spin}deg); transition:transform 3s linear;")}
        >
            <DrawPath
                d="M50,10 C20,15 10,40 15,60 C20,85 55,95 75,80 C95,65 90,30 65,20 C45,15 30,25 35,45"
                stroke={INK_BROWN}
                {drawn}
                duration={3.0}
                easing="linear"
            />
        </svg>
    }
}

#[function_component(StarSparkle)]
pub fn star_sparkle(props: &DoodleProps) -> Html {
    let node = use_node_ref();
    let shown = use_reveal(node.clone(), 0.0);
    let (scale, rotate) = if shown { (1, 180) } else { (0, 0) };
    html! {
        <svg ref={node} viewBox="0 0 50 50" class={props.class.clone()} fill="none" xmlns="http://www.w3.org/2000/svg">
            <path
                d="M25 0L30 20L50 25L30 30L25 50L20 30L0 25L20 20L25 0Z"
                fill="#1A1A1A"
                style={format!(
                    "transform-origin:25px 25px; transform:scale({scale}) rotate({rotate}deg); transition:transform 1.5s cubic-bezier(0.34, 1.56, 0.64, 1);"
                )}
            />
        </svg>
    }
}

#[function_component(Underline)]
pub fn underline(props: &DoodleProps) -> Html {
    let node = use_node_ref();
    let drawn = use_reveal(node.clone(), 0.0);
    html! {
        <svg ref={node} viewBox="0 0 200 20" class={props.class.clone()} fill="none" preserveAspectRatio="none">
            <DrawPath d="M5,15 Q50,5 100,10 T195,5" stroke={INK_BLUE} width={2.0} {drawn} duration={1.2} />
        </svg>
    }
}

#[function_component(Crosshair)]
pub fn crosshair(props: &DoodleProps) -> Html {
    html! {
        <svg viewBox="0 0 24 24" class={props.class.clone()} fill="none" stroke="currentColor" stroke-width="1">
            <line x1="12" y1="0" x2="12" y2="24" />
            <line x1="0" y1="12" x2="24" y2="12" />
            <circle cx="12" cy="12" r="8" stroke-dasharray="2 2" />
        </svg>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct StampProps {
    #[prop_or(AttrValue::Static("APPROVED"))]
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Stamp)]
pub fn stamp(props: &StampProps) -> Html {
    html! {
        <div class={classes!("stamp", props.class.clone())}>
            <span>{ props.text.clone() }</span>
        </div>
    }
}
