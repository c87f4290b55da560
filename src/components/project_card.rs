use yew::prelude::*;

use super::doodles::Stamp;
use crate::model::Project;
use crate::util::{tape_color, tape_tilt};

#[derive(Properties, PartialEq, Clone)]
pub struct ProjectCardProps {
    pub project: Project,
    pub index: usize,
    pub on_view: Callback<String>,
}

/// Spec-sheet card shown in the gallery.
#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;
    let view_cb = {
        let cb = props.on_view.clone();
        let id = project.id.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(id.clone());
        })
    };
    // Keep the press on the button from starting a drag of the whole card
    let swallow_press = Callback::from(|e: PointerEvent| e.stop_propagation());

    html! {
        <div class="project-card" data-hoverable="true">
            <div
                class="washi-tape"
                style={format!(
                    "background-color:{}; transform:translateX(-50%) rotate({:.2}deg);",
                    tape_color(props.index),
                    tape_tilt(&project.id)
                )}
            />
            <div class="card-header">
                <div style="display:flex; flex-direction:column;">
                    <span class="mono-label tiny">{"Project ID"}</span>
                    <span class="mono" style="font-size:14px; font-weight:700; letter-spacing:0.1em;">{ project.id.clone() }</span>
                </div>
                <span class="mono-label tiny chip">{ project.kind.clone() }</span>
            </div>
            <div class="card-figure">
                <img src={project.image_url.clone()} alt={project.title.clone()} />
                <div class="card-figure-hover">
                    <button class="view-button" onclick={view_cb} onpointerdown={swallow_press}>
                        {"View Case Study"}
                    </button>
                </div>
            </div>
            <div>
                <h4 class="serif-display card-title">{ project.title.clone() }</h4>
                <p class="card-description">{ project.description.clone() }</p>
            </div>
            <div class="card-footer">
                <span class="hand fig">{ format!("Fig. {}a", props.index + 1) }</span>
                <Stamp text="REVIEWED" class="on-hover" />
            </div>
        </div>
    }
}
