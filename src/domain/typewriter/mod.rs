//! Character-by-character reveal of HTML strings.

pub mod services;
pub mod value_objects;

pub use services::{StepOutcome, Typewriter};
pub use value_objects::{RenderState, Stage, Timing, CURSOR_GLYPH};
