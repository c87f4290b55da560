use yew::prelude::*;

use super::doodles::{Crosshair, Stamp};
use crate::model::{InfoContent, InfoItem};

#[derive(Properties, PartialEq, Clone)]
pub struct InfoModalProps {
    pub info: InfoItem,
    pub on_close: Callback<()>,
}

#[function_component(InfoModal)]
pub fn info_modal(props: &InfoModalProps) -> Html {
    let info = &props.info;
    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let body = match &info.content {
        InfoContent::List(items) => html! {
            <div style="display:grid; grid-template-columns:1fr 1fr; gap:8px;">
                { for items.iter().map(|item| html! {
                    <div style="display:flex; align-items:center; gap:8px;">
                        <div class="bullet" />
                        <span class="mono" style="font-size:11px; color:#374151;">{ item.clone() }</span>
                    </div>
                }) }
            </div>
        },
        InfoContent::Text(text) => html! {
            <p class="hand" style="font-size:18px; line-height:1.2; margin:0;">{ text.clone() }</p>
        },
    };

    html! {
        <div class="info-card">
            <div style="display:flex; justify-content:space-between; align-items:flex-start; margin-bottom:16px;">
                <div>
                    <span class="mono-label tiny">{ format!("Information / {}", info.category) }</span>
                    <h2 class="serif-display" style="font-size:24px; font-style:italic; line-height:1; margin:0;">{ info.title.clone() }</h2>
                </div>
                <Crosshair class="icon-20 accent-blue faint" />
            </div>
            <div style="flex-grow:1; padding:16px 0; border-top:1px solid #e5e7eb; border-bottom:1px solid #e5e7eb; margin-top:8px;">
                { body }
            </div>
            <div style="margin-top:16px; display:flex; justify-content:space-between; align-items:flex-end;">
                <div style="display:flex; flex-direction:column;">
                    <span class="mono-label tiny">{"System Log V1.0"}</span>
                    <Stamp text="VERIFIED" class="mini" />
                </div>
                <button onclick={close_cb} class="close-link" data-hoverable="true">{"[ Close ]"}</button>
            </div>
            <div class="corner top-right" />
            <div class="corner bottom-left" />
        </div>
    }
}
