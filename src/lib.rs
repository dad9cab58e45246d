pub mod dom;
pub mod error;

// Gesture tracking + the carousel controller built on it
pub mod gesture;
pub mod carousel;

pub use carousel::options::CarouselOptions;
pub use carousel::surface::{CarouselSurface, DomSurface};
pub use carousel::{CarouselAction, CarouselController, CarouselEvent};
pub use error::CarouselError;
