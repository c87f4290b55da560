use yew::prelude::*;

use super::doodles::{Crosshair, Stamp};
use crate::model::Project;

#[derive(Properties, PartialEq, Clone)]
pub struct ProjectModalProps {
    pub project: Project,
    pub on_close: Callback<()>,
}

#[function_component(ProjectModal)]
pub fn project_modal(props: &ProjectModalProps) -> Html {
    let project = &props.project;
    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let meta = [
        ("Classification", project.kind.as_str(), ""),
        ("Date", "2023-2024", ""),
        ("Materiality", "Aluminum / PLA", ""),
        ("Status", "Fabricated", "color:#15803d;"),
    ];

    html! {
        <div class="case-file">
            <div class="case-file-figure">
                <img src={project.image_url.clone()} alt={project.title.clone()} />
                <span class="fig-label">{"Fig 1.1"}</span>
                <div class="scanlines" />
            </div>
            <div class="case-file-body">
                <div style="display:flex; justify-content:space-between; align-items:flex-start; margin-bottom:24px;">
                    <div>
                        <span class="mono-label">{"Subject Matter"}</span>
                        <h2 class="serif-display" style="font-size:44px; line-height:1; margin:0;">{ project.title.clone() }</h2>
                    </div>
                    <Crosshair class="icon-32 faint" />
                </div>
                <div class="meta-grid">
                    { for meta.iter().map(|(label, value, style)| html! {
                        <div>
                            <p class="mono-label small">{ *label }</p>
                            <p style={format!("font-size:14px; font-weight:700; margin:0; {style}")}>{ *value }</p>
                        </div>
                    }) }
                </div>
                <div style="flex-grow:1;">
                    <h3 class="mono-heading"><span class="dot" />{"Field Notes"}</h3>
                    <p class="serif-display" style="font-size:18px; line-height:1.6; color:#1f2937;">
                        { project.description.clone() }
                        <br /><br />
                        {"Further analysis indicates high structural integrity. The juxtaposition of organic curves with industrial rigidity creates a unique tactile experience. This prototype served as the foundation for the subsequent \"Series B\" design language."}
                    </p>
                </div>
                <div class="case-file-footer">
                    <Stamp text="DECLASSIFIED" class="tilt-left" />
                    <button onclick={close_cb} class="close-link" data-hoverable="true">
                        <span>{"Close Case File"}</span>
                        <span class="arrow">{"->"}</span>
                    </button>
                </div>
                <div class="doc-id">{ format!("DOC_ID: {}_SECURE", project.id) }</div>
            </div>
        </div>
    }
}
