//! # Sign Protocol Implementation
//!
//! This module provides low-level line builders and the text codec for the
//! ASCII command protocol spoken by Pro-Lite style LED signs.
//!
//! ## Module Structure
//!
//! - [`commands`]: Address headers, slot keys and single command lines
//! - [`text`]: Inline style tokens, escaping and normalization of page text
//! - [`fold`]: ASCII spellings for letters without a decomposition
//!
//! ## Usage Example
//!
//! ```
//! use prolite::protocol::{commands, commands::DisplayId, text};
//!
//! let id = DisplayId::new(1)?;
//! let content = format!("{}{}", text::DISPLAY_APPEAR, text::normalize("Café"));
//!
//! let mut stream = String::new();
//! stream.push_str(&commands::define_page(id, 'A', &content));
//! stream.push_str(&commands::run_page(id, 'A'));
//!
//! assert_eq!(stream, "<ID01><PA><FD>Cafe\r\n<ID01><RPA>\r\n");
//! # Ok::<(), prolite::ProliteError>(())
//! ```
//!
//! Higher-level assembly with the required ordering lives in
//! [`crate::display`].

pub mod commands;
pub mod fold;
pub mod text;
