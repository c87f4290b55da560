use std::rc::Rc;
use yew::prelude::*;

use super::collage_item::CollageItem;
use super::cursor::Cursor;
use super::doodles::{CircleScribble, Crosshair, StarSparkle, SwirlVine, Underline};
use super::nav::Nav;
use super::overlay::OverlayHost;
use super::project_card::ProjectCard;
use crate::config::MotionConfig;
use crate::model::{PageAction, PageState, SiteContent};

const PALETTE: [&str; 4] = ["#2f2f2f", "#8B4513", "#D4C5A5", "#E8C4C4"];

#[function_component(App)]
pub fn app() -> Html {
    let content = use_memo((), |_| SiteContent::load());
    let motion = use_memo((), {
        let overrides = content.motion;
        move |_| MotionConfig::or_default(overrides)
    });
    let page = use_reducer({
        let content = content.clone();
        move || PageState::new(Rc::clone(&content))
    });
    let container = use_node_ref();

    let reset = {
        let page = page.clone();
        Callback::from(move |_: ()| page.dispatch(PageAction::ResetLayout))
    };
    let close_overlay = {
        let page = page.clone();
        Callback::from(move |_: ()| page.dispatch(PageAction::CloseOverlay))
    };
    let view_project = {
        let page = page.clone();
        Callback::from(move |id: String| page.dispatch(PageAction::OpenProject(id)))
    };
    let open_info = |id: &'static str| {
        let page = page.clone();
        Callback::from(move |_: ()| page.dispatch(PageAction::OpenInfo(id.to_string())))
    };

    let key = |name: &str| page.item_key(name);
    let c = Some(container.clone());

    let gallery = page.content.projects.iter().enumerate().map(|(index, project)| {
        html! {
            <CollageItem
                key={key(&project.id)}
                container={c.clone()}
                x={format!("{}%", project.x)}
                y={format!("{}%", project.y)}
                rotation={project.rotation}
                scale={project.scale_or_default()}
                speed={0.2 + index as f64 * 0.1}
                z_index={10 + index as i32}
            >
                <ProjectCard project={project.clone()} {index} on_view={view_project.clone()} />
            </CollageItem>
        }
    });

    html! {
        <ContextProvider<MotionConfig> context={(*motion).clone()}>
            <div ref={container.clone()} class="page">
                <Cursor key="cursor" />
                <OverlayHost key="overlay" overlay={page.overlay.clone()} on_close={close_overlay} />
                <Nav key="nav" on_reset={reset} />

                // Hero
                <section key="hero" class="hero">
                    <CollageItem key={key("hero-text")} container={c.clone()} x="10%" y="20%" z_index={20} speed={0.5}>
                        <h2 class="serif-display hero-title">
                            {"Product"}<br />
                            <span class="hero-subtitle">{"Design Engineer."}</span>
                        </h2>
                    </CollageItem>

                    <CollageItem
                        key={key("hero-card")}
                        container={c.clone()}
                        x="60%" y="30%" z_index={15} rotation={5.0} speed={0.8}
                        on_click={open_info("about")}
                    >
                        <div class="bio-card">
                            <div class="washi-tape" style="background-color:#D4C5A5;" />
                            <p class="hand bio-quote">{"\"I design things you can hold. Sometimes they work.\""}</p>
                            <div class="rule" />
                            <p class="bio-tagline">
                                {"Making stuff. "}<span class="muted">{"/"}</span>
                                {" Breaking stuff. "}<span class="muted">{"/"}</span>
                                {" Fixing stuff."}
                            </p>
                            <div class="bio-footer">
                                <div style="display:flex; flex-direction:column;">
                                    <span class="mono-label tiny">{"Spec Sheet"}</span>
                                    <span class="version-chip">{"V1.2"}</span>
                                </div>
                                <span class="hand signature">{"Jayaram H."}</span>
                            </div>
                            <div class="ref-stamp"><span>{"REF"}<br />{"A"}</span></div>
                        </div>
                    </CollageItem>

                    <CollageItem key={key("hero-quote")} container={c.clone()} x="15%" y="60%" speed={0.6} rotation={-2.0} z_index={10}>
                        <div style="max-width:24rem;">
                            <p class="serif-display quote">
                                {"\"There's a big difference between making a simple product & making a product simple.\""}
                            </p>
                            <p class="mono attribution">{"— Des Traynor"}</p>
                        </div>
                    </CollageItem>

                    <CollageItem key={key("hero-img1")} container={c.clone()} x="55%" y="15%" speed={1.2} rotation={-15.0} z_index={5}>
                        <img src="https://picsum.photos/seed/gear/200/200" alt="Gear sketch" class="gear-sketch" />
                    </CollageItem>

                    <CollageItem key={key("hero-img2")} container={c.clone()} x="80%" y="65%" speed={0.3} rotation={10.0} z_index={1}>
                        <img src="https://picsum.photos/seed/tech/300/400" alt="Tech Detail" class="tech-detail" />
                    </CollageItem>

                    <CollageItem key={key("hero-star")} container={c.clone()} x="85%" y="25%" speed={0.1}>
                        <StarSparkle class="icon-40 soft" />
                    </CollageItem>

                    <CollageItem key={key("hero-scroll")} container={c.clone()} x="45%" y="85%" z_index={30}>
                        <div class="bounce"><span class="hand scroll-hint">{"View Projects"}</span></div>
                    </CollageItem>
                </section>

                // Loose items positioned against the whole page
                <CollageItem key={key("dfw-quote")} container={c.clone()} x="35%" y="55%" speed={0.7} rotation={3.0} z_index={12}>
                    <div style="max-width:20rem;">
                        <p class="serif-display quote">{"\"This is water.\""}</p>
                        <p class="mono attribution">{"— David Foster Wallace"}</p>
                    </div>
                </CollageItem>

                <CollageItem key={key("barcode")} container={c.clone()} x="80%" y="12%" speed={0.4} rotation={90.0} z_index={4}>
                    <div class="barcode-sticker">
                        <div class="barcode" />
                        <p class="mono">{"092-2-XA"}</p>
                    </div>
                </CollageItem>

                <CollageItem
                    key={key("palette")}
                    container={c.clone()}
                    x="4%" y="38%" speed={0.9} rotation={-5.0} z_index={6}
                    on_click={open_info("toolkit")}
                >
                    <div class="palette">
                        { for PALETTE.iter().map(|color| html! {
                            <div key={*color} style={format!("width:100%; height:32px; background-color:{color};")} />
                        }) }
                    </div>
                </CollageItem>

                <CollageItem key={key("note")} container={c.clone()} x="88%" y="92%" speed={1.1} rotation={-10.0} z_index={25}>
                    <div class="sticky-note">
                        <p class="hand">{"Draft v0.9"}<br /><span class="small">{"Check fit & finish."}</span></p>
                        <div class="note-circle" />
                    </div>
                </CollageItem>

                // Work
                <section key="work" id="work" class="work">
                    <div key="grid" class="grid-backdrop" />

                    <CollageItem key={key("work-header")} container={c.clone()} x="5%" y="5%" z_index={5}>
                        <h3 class="serif-display work-title">{"Work Logs"}</h3>
                        <p class="mono-label">{"Classified Prototypes"}</p>
                        <Underline class="underline" />
                    </CollageItem>

                    { for gallery }

                    <CollageItem key={key("decor-1")} container={c.clone()} x="30%" y="20%" z_index={1} speed={0.1}>
                        <Crosshair class="icon-48 grey" />
                    </CollageItem>
                    <CollageItem key={key("decor-2")} container={c.clone()} x="70%" y="50%" z_index={1} speed={0.15}>
                        <Crosshair class="icon-64 grey faint tilt-45" />
                    </CollageItem>
                    <CollageItem key={key("decor-3")} container={c.clone()} x="10%" y="80%" z_index={1} speed={0.1}>
                        <Crosshair class="icon-32 accent-blue faint" />
                    </CollageItem>
                    <CollageItem key={key("decor-4")} container={c.clone()} x="40%" y="30%" z_index={1}>
                        <SwirlVine class="icon-224 faint tilt-45" />
                    </CollageItem>
                    <CollageItem key={key("decor-5")} container={c.clone()} x="85%" y="60%" z_index={1}>
                        <CircleScribble class="icon-96 soft" />
                    </CollageItem>

                    <CollageItem key={key("archive-text")} container={c.clone()} x="5%" y="90%" rotation={-90.0} z_index={2}>
                        <span class="serif-display archive">{"ARCHIVE"}</span>
                    </CollageItem>
                </section>

                // Footer
                <section key="contact" id="contact" class="contact-section">
                    <SwirlVine class="footer-vine" />
                    <div style="position:relative; z-index:20;">
                        <h2 class="serif-display footer-title">
                            {"Let's build something"}<br />
                            <span class="accent-brown" style="font-style:italic;">{"tangible"}</span>{"."}
                        </h2>
                        <div class="socials">
                            <a href="#" class="social" data-hoverable="true">{"Instagram"}</a>
                            <a href="#" class="social" data-hoverable="true">{"Twitter / X"}</a>
                            <a href="#" class="social" data-hoverable="true">{"LinkedIn"}</a>
                        </div>
                    </div>
                    <div class="copyright">{"© 2026 Jayaram Hariharan"}</div>
                </section>
            </div>
        </ContextProvider<MotionConfig>>
    }
}
