//! # Error Types
//!
//! This module defines error types used throughout the prolite library.
//!
//! Every variant except the outer-surface ones (`Document`, `Json`, `Io`)
//! describes a caller contract violation: the value handed in was out of the
//! range the sign accepts. Nothing is retried and no partial state is kept.

use thiserror::Error;

/// Main error type for prolite operations
#[derive(Debug, Error)]
pub enum ProliteError {
    /// Display address outside 0..=255
    #[error("Invalid display ID {0}")]
    InvalidDisplayId(i32),

    /// Graphic pixel string is not 18×7 symbols long
    #[error("Invalid graphic size {0}")]
    InvalidGraphicSize(usize),

    /// Graphic pixel outside the R/G/Y/B alphabet
    #[error("Invalid pixel type {0}")]
    InvalidPixel(char),

    /// Pixel lookup outside the 18×7 grid
    #[error("Invalid coordinates {x}, {y}")]
    InvalidCoordinates { x: i32, y: i32 },

    /// Graphic slot outside A..Z
    #[error("{0} is not a valid graphic index.")]
    InvalidGraphicIndex(i32),

    /// Page slot outside A..Z, or a page requested for display that is not defined
    #[error("{0} is not a valid page.")]
    InvalidPage(i32),

    /// Normalized page content exceeds the device page size
    #[error("Page content for page {page} is too long (maximum {max} characters)")]
    PageTooLong { page: char, max: usize },

    /// Timer slot outside A..J
    #[error("Invalid timer index {0}")]
    InvalidTimerIndex(i32),

    #[error("Invalid timer day of week {0}")]
    InvalidDayOfWeek(i32),

    #[error("Invalid timer hour {0}")]
    InvalidHour(i32),

    #[error("Invalid timer minute {0}")]
    InvalidMinute(i32),

    /// Timer sequence empty or longer than 32 pages
    #[error("Invalid timer sequence length {0}")]
    InvalidSequenceLength(usize),

    /// Timer sequence entry outside 0..=25
    #[error("Invalid timer sequence page {0}")]
    InvalidSequencePage(i32),

    /// Clock value that is not a real calendar date/time
    #[error("Invalid date and time: {0}")]
    InvalidDateTime(String),

    /// Sign definition file problem that is not a field range error
    #[error("Invalid sign definition: {0}")]
    Document(String),

    /// JSON parse error wrapper
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ProliteError>;
