pub mod catalog;
pub mod modal;

pub use catalog::{GalleryCatalog, VideoItem};
pub use modal::{ModalAction, ModalState};
