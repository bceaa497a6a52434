//! # JSON API
//!
//! Describe a whole sign in one JSON document and turn it into a
//! [`Display`](crate::Display) or straight into its configuration stream.
//!
//! ## Example
//!
//! ```
//! use prolite::json_api::SignDefinition;
//!
//! let json = r#"{
//!     "id": 1,
//!     "reset": false,
//!     "show_page": 0,
//!     "pages": [{"index": 0, "content": "<FD>Hello"}],
//!     "timers": [{"index": 0, "sequence": [0]}]
//! }"#;
//!
//! let sign = SignDefinition::from_json(json)?;
//! assert_eq!(
//!     sign.configuration()?,
//!     "<ID01><PA><FD>Hello\r\n<ID01><TA>*****A\r\n<ID01><RPA>\r\n"
//! );
//! # Ok::<(), prolite::ProliteError>(())
//! ```
//!
//! ## Fields
//!
//! | Field | Default | Meaning |
//! |-------|---------|---------|
//! | `id` | required | Display address 0..=255 |
//! | `reset` | `true` | Wipe the sign before defining anything |
//! | `clock` | none | `"now"` or `{year, month, day, hour, minute, second}` |
//! | `show_page` | none | Page forced on screen at the end |
//! | `escape` | `false` | Strip control tags from page content |
//! | `pages` | `[]` | `{index, content}` |
//! | `graphics` | `[]` | `{index, pixels}` (126 of `R`/`G`/`Y`/`B`) |
//! | `timers` | `[]` | `{index, day_of_week, hour, minute, sequence}` |
//!
//! A `null` or missing timer field is a wildcard.

mod convert;
mod schema;

pub use schema::{JsonClock, JsonDateTime, JsonGraphic, JsonPage, JsonTimer, SignDefinition};
