//! Auto-advancing rotation controller for banner carousels.
//!
//! A [`CarouselController`] tracks a position over a fixed number of opaque
//! items, advances it on a refractory autoplay timer, and accepts user
//! navigation. At most one transition window is open at a time; requests
//! arriving during a window are dropped.

pub mod carousel;
pub mod controller;
pub mod error;
pub mod settings;
pub mod state;
pub mod timer;

pub use carousel::Carousel;
pub use controller::CarouselController;
pub use error::{CarouselError, SettingsError};
pub use settings::CarouselSettings;
