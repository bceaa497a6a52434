//! # Models
//!
//! Immutable value objects stored in a sign's banks.
//!
//! - [`graphic`]: 18×7 four-colour bitmaps
//! - [`timer`]: scheduled page sequences
//!
//! Both are validated when built; a value that exists is always valid.

pub mod graphic;
pub mod timer;

pub use graphic::{Graphic, Pixel};
pub use timer::Timer;
