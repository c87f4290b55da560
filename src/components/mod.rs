pub mod app;
pub mod collage_item;
pub mod cursor;
pub mod doodles;
pub mod info_modal;
pub mod nav;
pub mod overlay;
pub mod project_card;
pub mod project_modal;
pub mod reveal;
