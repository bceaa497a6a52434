//! # Sign Protocol Commands
//!
//! This module implements the line-oriented command protocol understood by
//! Pro-Lite style LED matrix signs.
//!
//! ## Protocol Overview
//!
//! The sign consumes plain ASCII. Every command is a bracketed token, and most
//! lines start with an address header naming the sign they are meant for:
//!
//! ```text
//! <ID01><PA>Hello, world!\r\n
//! └─┬──┘└┬─┘└─────┬─────┘└┬─┘
//!   │    │        │       └── CRLF line ending
//!   │    │        └────────── payload
//!   │    └─────────────────── command token (page A)
//!   └──────────────────────── address header (display 0x01)
//! ```
//!
//! ## Slot Keys
//!
//! Pages, graphics and timers are stored in lettered slots. Slot `n` is the
//! letter `'A' + n`: pages and graphics use `A`..`Z`, timers use `A`..`J`.
//!
//! ## Ordering
//!
//! The firmware is unstable and order-sensitive. Builders in this module only
//! produce single lines; the order they are concatenated in is decided by
//! [`crate::display::Display::configuration`].

use std::fmt;

use chrono::NaiveDateTime;

use crate::error::{ProliteError, Result};

// ============================================================================
// PROTOCOL CONSTANTS
// ============================================================================

/// Line ending terminating every command line.
pub const EOL: &str = "\r\n";

/// Number of page slots (`A`..`Z`).
pub const PAGE_SLOTS: usize = 26;

/// Number of graphic slots (`A`..`Z`).
pub const GRAPHIC_SLOTS: usize = 26;

/// Number of timer slots (`A`..`J`).
pub const TIMER_SLOTS: usize = 10;

/// Maximum size of one page, in bytes.
pub const PAGE_SIZE: usize = 1000;

/// Width of a graphic in pixels.
pub const GRAPHIC_WIDTH: usize = 18;

/// Height of a graphic in pixels.
pub const GRAPHIC_HEIGHT: usize = 7;

/// Longest page sequence a timer can play.
pub const MAX_SEQUENCE_LEN: usize = 32;

// ============================================================================
// DISPLAY ADDRESS
// ============================================================================

/// # Display Address
///
/// A sign's address on the shared line. Any byte is a valid address.
///
/// ## Example
///
/// ```
/// use prolite::protocol::commands::DisplayId;
///
/// let id = DisplayId::new(1)?;
/// assert_eq!(id.header(), "<ID01>");
/// assert!(DisplayId::new(256).is_err());
/// # Ok::<(), prolite::ProliteError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayId(u8);

impl DisplayId {
    /// Validate an address. Anything outside 0..=255 is rejected.
    pub fn new(id: i32) -> Result<Self> {
        u8::try_from(id)
            .map(Self)
            .map_err(|_| ProliteError::InvalidDisplayId(id))
    }

    /// The raw address byte.
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// # Address Header (`<IDxx>`)
    ///
    /// Two uppercase hex digits.
    pub fn header(self) -> String {
        format!("<ID{:02X}>", self.0)
    }

    /// Address header using two *decimal* digits.
    ///
    /// Timer lines are addressed this way by the reference firmware tooling,
    /// which only agrees with [`header`](Self::header) for addresses below 10.
    pub fn decimal_header(self) -> String {
        format!("<ID{:02}>", self.0)
    }
}

impl fmt::Display for DisplayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for DisplayId {
    fn from(id: u8) -> Self {
        Self(id)
    }
}

// ============================================================================
// SLOT KEYS
// ============================================================================

/// Letter for slot `index` (0 → `'A'`).
///
/// Callers validate the index first; this only does the arithmetic.
#[inline]
pub const fn slot_key(index: usize) -> char {
    (b'A' + index as u8) as char
}

/// Validate an index against a bank of `slots` slots.
///
/// Returns the index as `usize` or `None` when it falls outside `0..slots`.
#[inline]
pub fn checked_slot(index: i32, slots: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&i| i < slots)
}

// ============================================================================
// LINE BUILDERS
// ============================================================================

/// # Bare Address Line (`<IDxx>`)
///
/// Wakes up the addressed sign before a reset sequence.
pub fn address(id: DisplayId) -> String {
    format!("{}{}", id.header(), EOL)
}

/// # Delete All Pages (`<DP*>`)
pub fn delete_all_pages(id: DisplayId) -> String {
    format!("{}<DP*>{}", id.header(), EOL)
}

/// # Delete All Timers (`<DT*>`)
pub fn delete_all_timers(id: DisplayId) -> String {
    format!("{}<DT*>{}", id.header(), EOL)
}

/// # Delete All Graphics (`<DG*>`)
pub fn delete_all_graphics(id: DisplayId) -> String {
    format!("{}<DG*>{}", id.header(), EOL)
}

/// # Define Graphic (`<Gx>`)
///
/// `pixels` is the 126-symbol R/G/Y/B string, row by row.
pub fn define_graphic(id: DisplayId, key: char, pixels: &str) -> String {
    format!("{}<G{}>{}{}", id.header(), key, pixels, EOL)
}

/// # Define Page (`<Px>`)
pub fn define_page(id: DisplayId, key: char, content: &str) -> String {
    format!("{}<P{}>{}{}", id.header(), key, content, EOL)
}

/// # Define Timer (`<Tx>`)
///
/// `body` is the already rendered `{day}{hour}{minute}{sequence}` field block.
/// Timer lines use the decimal address header.
pub fn define_timer(id: DisplayId, key: char, body: &str) -> String {
    format!("{}<T{}>{}{}", id.decimal_header(), key, body, EOL)
}

/// # Run Page (`<RPx>`)
///
/// Forces page `key` on screen. This stops timer-driven page rotation until
/// the sign is reprogrammed.
pub fn run_page(id: DisplayId, key: char) -> String {
    format!("{}<RP{}>{}", id.header(), key, EOL)
}

/// # Set Clock (`<Tyymmddwhhmmss>`)
///
/// 13 digits: two-digit year, month, day, weekday (Sunday = 0), hour,
/// minute, second. This line carries no address header.
///
/// ## Example
///
/// ```
/// use chrono::NaiveDate;
/// use prolite::protocol::commands::set_clock;
///
/// let at = NaiveDate::from_ymd_opt(2021, 3, 1)
///     .and_then(|d| d.and_hms_opt(2, 30, 8))
///     .unwrap();
/// assert_eq!(set_clock(&at), "<T2103011023008>\r\n");
/// ```
pub fn set_clock(at: &NaiveDateTime) -> String {
    format!("<T{}>{}", at.format("%y%m%d%w%H%M%S"), EOL)
}

// ============================================================================
// TESTS
// ============================================================================
