pub mod gallery_modal;
pub mod hero;
pub mod navbar;
pub mod video_tile;
