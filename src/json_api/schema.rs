//! JSON schema types for sign definition files.

use serde::Deserialize;

fn default_true() -> bool {
    true
}

/// Top-level sign definition.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SignDefinition {
    /// Display address (0..=255).
    pub id: i32,
    /// Delete all pages, timers and graphics first (default: true).
    #[serde(default = "default_true")]
    pub reset: bool,
    /// Clock value to send, if any.
    #[serde(default)]
    pub clock: Option<JsonClock>,
    /// Page to force on screen once everything is defined.
    #[serde(default)]
    pub show_page: Option<i32>,
    /// Run page content through the control tag filter before storing it.
    #[serde(default)]
    pub escape: bool,
    #[serde(default)]
    pub pages: Vec<JsonPage>,
    #[serde(default)]
    pub graphics: Vec<JsonGraphic>,
    #[serde(default)]
    pub timers: Vec<JsonTimer>,
}

/// Either the keyword `"now"` or an explicit date and time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum JsonClock {
    Keyword(String),
    At(JsonDateTime),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct JsonDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    #[serde(default)]
    pub hour: u32,
    #[serde(default)]
    pub minute: u32,
    #[serde(default)]
    pub second: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JsonPage {
    pub index: i32,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JsonGraphic {
    pub index: i32,
    /// Row-major pixel symbols, top-left first.
    pub pixels: String,
}

/// Timer slot. `None` fields are wildcards.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JsonTimer {
    pub index: i32,
    #[serde(default)]
    pub day_of_week: Option<i32>,
    #[serde(default)]
    pub hour: Option<i32>,
    #[serde(default)]
    pub minute: Option<i32>,
    pub sequence: Vec<i32>,
}
