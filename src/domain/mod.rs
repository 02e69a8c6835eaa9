//! Domain data: tuning, palette, gestures and the error taxonomy.

pub mod error;
pub mod gesture;
pub mod palette;
pub mod tuning;

pub use error::{WorldError, WorldResult};
pub use gesture::GestureKind;
pub use palette::{BlockColor, Palette, PaletteEntry};
pub use tuning::TuningProfile;
