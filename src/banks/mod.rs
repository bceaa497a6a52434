//! # Banks
//!
//! Per-sign storage for graphics, pages and timers.
//!
//! Each bank belongs to one display address and has a fixed set of lettered
//! slots. Slots are set or overwritten, never deleted; a full wipe is a
//! reset of the whole sign (see [`crate::display::Display::configuration`]).
//!
//! | Bank | Slots | Line |
//! |------|-------|------|
//! | [`GraphicsBank`] | `A`..`Z` | `<IDhh><Gx>…` |
//! | [`PageBank`] | `A`..`Z` | `<IDhh><Px>…` |
//! | [`TimerBank`] | `A`..`J` | `<IDdd><Tx>…` |
//!
//! Every bank renders only its populated slots, in slot order.

pub mod graphics;
pub mod pages;
pub mod timers;

pub use graphics::GraphicsBank;
pub use pages::PageBank;
pub use timers::TimerBank;
