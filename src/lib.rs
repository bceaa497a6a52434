//! # Prolite - LED Sign Configuration Library
//!
//! Prolite builds the text command stream understood by Pro-Lite style LED
//! matrix signs. It provides:
//!
//! - **Banks**: the lettered page, graphic and timer slots of a sign
//! - **Text codec**: control tag escaping, Unicode folding and inline styles
//! - **Assembly**: the full configuration stream in the order the firmware
//!   requires
//!
//! Delivering the stream (serial port, TTY, network bridge) is left to the
//! caller.
//!
//! ## Quick Start
//!
//! ```
//! use prolite::{Display, models::Timer, protocol::text};
//!
//! let mut display = Display::new(1)?;
//!
//! let pages = display.page_bank_mut();
//! pages.set_page(0, &format!("{}Page 1", text::DISPLAY_APPEAR))?;
//! pages.set_page(1, &format!("{}Page 2", text::DISPLAY_APPEAR))?;
//!
//! display.timer_bank_mut().set_timer(0, Timer::new(-1, -1, -1, &[0, 1])?)?;
//!
//! let stream = display.configuration(true, None)?;
//! assert!(stream.starts_with("<ID01>\r\n<ID01><DP*>\r\n"));
//! assert!(stream.ends_with("<ID01><TA>*****AB\r\n"));
//! # Ok::<(), prolite::ProliteError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`display`] | One sign and its configuration stream |
//! | [`banks`] | Page, graphic and timer storage |
//! | [`models`] | Graphic and timer values |
//! | [`protocol`] | Line builders and the text codec |
//! | [`json_api`] | Sign definition files |
//! | [`demo`] | Ready-made configurations |
//! | [`error`] | Error types |
//!
//! ## Untrusted Text
//!
//! Page content is sent verbatim apart from Unicode folding. Text from
//! outside sources must go through [`protocol::text::escape`] before it is
//! stored, or it can reprogram the sign.

pub mod banks;
pub mod demo;
pub mod display;
pub mod error;
pub mod json_api;
pub mod models;
pub mod protocol;

// Re-exports for convenience
pub use display::Display;
pub use error::{ProliteError, Result};
