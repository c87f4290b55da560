//! Static site content and page-level UI state.
//!
//! Content is embedded at compile time and parsed once at startup. The page
//! reducer owns the overlay slot and the layout key that remounts every
//! collage item on reset.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

use crate::config::MotionConfig;
use crate::error::{Error, Result};

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    /// Category label, e.g. "Study" or "Mechanism".
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub image_url: String,
    /// Percent of the gallery section width.
    pub x: f64,
    /// Percent of the gallery section height.
    pub y: f64,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
}

impl Project {
    pub fn scale_or_default(&self) -> f64 {
        self.scale.unwrap_or(1.0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InfoContent {
    Text(String),
    List(Vec<String>),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InfoItem {
    pub id: String,
    pub title: String,
    pub category: String,
    pub content: InfoContent,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub info: Vec<InfoItem>,
    /// Overrides for the default motion tuning.
    #[serde(default, skip_serializing)]
    pub motion: Option<MotionConfig>,
}

impl SiteContent {
    pub fn parse(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Parses the embedded content, degrading to an empty site on failure.
    pub fn load() -> Self {
        match Self::parse(SITE_JSON) {
            Ok(content) => {
                log::info!(
                    "loaded {} projects, {} info entries",
                    content.projects.len(),
                    content.info.len()
                );
                content
            }
            Err(e) => {
                log::warn!("{e}");
                Self::default()
            }
        }
    }

    pub fn project(&self, id: &str) -> Result<&Project> {
        self.projects
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| Error::UnknownProject(id.to_string()))
    }

    pub fn info_item(&self, id: &str) -> Result<&InfoItem> {
        self.info
            .iter()
            .find(|i| i.id == id)
            .ok_or_else(|| Error::UnknownInfo(id.to_string()))
    }
}

/// The single overlay slot. Holds a full record so the overlay can keep
/// rendering during its exit animation.
#[derive(Clone, Debug, PartialEq)]
pub enum Overlay {
    Project(Project),
    Info(InfoItem),
}

impl Overlay {
    pub fn id(&self) -> &str {
        match self {
            Overlay::Project(p) => &p.id,
            Overlay::Info(i) => &i.id,
        }
    }
}

#[derive(Clone, Debug)]
pub enum PageAction {
    OpenProject(String),
    OpenInfo(String),
    CloseOverlay,
    ResetLayout,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageState {
    pub content: Rc<SiteContent>,
    pub overlay: Option<Overlay>,
    /// Folded into every collage item key; bumping it remounts the scene.
    pub layout_key: u32,
}

impl PageState {
    pub fn new(content: Rc<SiteContent>) -> Self {
        Self {
            content,
            overlay: None,
            layout_key: 0,
        }
    }

    pub fn item_key(&self, name: &str) -> String {
        format!("{name}-{}", self.layout_key)
    }

    fn resolve(&self, action: &PageAction) -> Result<Option<Overlay>> {
        Ok(match action {
            PageAction::OpenProject(id) => {
                Some(Overlay::Project(self.content.project(id)?.clone()))
            }
            PageAction::OpenInfo(id) => Some(Overlay::Info(self.content.info_item(id)?.clone())),
            PageAction::CloseOverlay | PageAction::ResetLayout => None,
        })
    }
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            PageAction::OpenProject(_) | PageAction::OpenInfo(_) => match self.resolve(&action) {
                // Opening replaces whatever was shown; there is only one slot.
                Ok(overlay) => {
                    log::debug!("overlay open: {:?}", overlay.as_ref().map(Overlay::id));
                    new.overlay = overlay;
                }
                Err(e) => {
                    log::warn!("{e}");
                    return self;
                }
            },
            PageAction::CloseOverlay => {
                if self.overlay.is_none() {
                    return self;
                }
                log::debug!("overlay closed");
                new.overlay = None;
            }
            PageAction::ResetLayout => {
                new.layout_key = new.layout_key.wrapping_add(1);
                log::debug!("layout reset -> key {}", new.layout_key);
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;
