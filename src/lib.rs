//! A drag and drop carousel for egui.
//!
//! [`Carousel`] shows a row of cards in a horizontally scrolling viewport. Cards can be reordered
//! by dragging them, Next / Previous buttons step through them, and the viewport smoothly scrolls
//! to center the current card whenever the [`CarouselState`] changes.
//!
//! The drag and drop part is usable on its own through [`DragDropUi`].

pub use carousel::CarouselState;
pub use config::CarouselConfig;
pub use error::CarouselError;
pub use handle::Handle;
pub use scroll::ScrollSync;
pub use state::{Axis, DragDropItem, DragDropResponse, DragDropUi, DragIndices, DropResult};
pub use widget::{paint_card, Carousel, CarouselResponse};

mod carousel;
mod config;
mod error;
mod handle;
mod scroll;
mod state;
mod widget;

pub mod utils;
