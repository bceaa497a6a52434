//! # Graphics Bank
//!
//! The 26 graphic slots (`A`..`Z`) of one sign.
//!
//! ## Built-in Graphics
//!
//! Every slot has a factory bitmap that the sign shows until the slot is
//! redefined. [`default_graphic`] returns it; the table is decoded into
//! [`Graphic`] values the first time it is needed and shared afterwards.
//!
//! ## Wire Format
//!
//! ```text
//! <ID01><GA>RRRRRR…(126 symbols)\r\n
//! ```

use std::sync::OnceLock;

use log::{debug, error, trace};

use crate::error::{ProliteError, Result};
use crate::models::{Graphic, Pixel};
use crate::protocol::commands::{self, DisplayId, GRAPHIC_SLOTS, checked_slot, slot_key};

/// Factory bitmaps, one per slot, row by row.
const DEFAULT_PIXELS: [&str; GRAPHIC_SLOTS] = [
    "BBRRRRRRRRRRRRRRRBBRRRRBBGBBBGBBRRRRBBBBBBYYYYYYYBBBBBBBBBBYYYGGGYYYBBBBBBBBYYYGBBBGYYYBBBBBBBYYYYGGGYYYYBBBBBBBYYYYYYYYYYYBBB",
    "BBBBBGGBBBBBBBBBGBBBBGBBBBBBBBBBBBGBBBGBBBBBBBBBBBBGBBBRRRRRRBRRRRRRGBBBBRBBBBRGRBBBBRBBBBBBRBBRBBBRBBRBBBBBBBBRRBBBBBRRBBBBBB",
    "BBBBBBBRRRRRBBBBBBBBBBBBBBBRBBBBBBBBBBBBBBBYYYYYBBBRRBBBBYYYYYYYYYYYYRRBBBYYYYYYYYYYYYYRRBBBYYBBBYYYYYBBBRRBBBYYBBBBBBBBBBBBBB",
    "BBBBBBBBBBBBBBGGGGBBBBBBBBBBBBBGGBBBBBBBYYYRRRRRRRRRBBBRRYGGYRRRRRRGGGGGBBBBYYYRRRRRRRRRBBBBBBBBBBBBBBBGGBBBBBBBBBBBBBBBBBGGGG",
    "BBRRBBBBBBBBBBBRRBBGGBRBBBBBBBBBRBGGBBBBBRYYYYYYYRBBBBBBBBYYBBBYBBBYYBBBBBBBBYYYYYYYYYBBBBBBBBBBGGBBBGGBBBBBBBBGGGGBBBBBGGGGBB",
    "BBBBBBBBBBBBBBBBBBBBBBBBBBBBBYYYYYYBBBRRRRRRRRYYYYYYYYBRRRRRRRRRYYYYYBBYBBRBRRBRBRYYYYYYYYBBBBBBBBBBBYYYYYYBBBBBBBBBBBBBBBBBBB",
    "BBBBBRRRBBBRRRBBBBBBBBRRRGGGGGRRRBBBBBBRRRGGGRGGGRRRBBBBRRRBGGGGGGGBRRRBBBBRBBGGGRGGGBBRBBBBBBBBGGGGGGGBBBBBBBBBBBGGGGGGGBBBBB",
    "BBYYYYYYYYYBBBBBBBBBBBBBGBBBBBBBBBBBBBBBRRRRRBBBBBBBGBBBBRBBBBRRRRRRRGGGBBBRBBBRRRBBBBBBGBBYBBRRRRBBBBBBBBBBBBYYYYYYYBBBBBBBBB",
    "BBBBBBBBYYYYYYBBBBBBBBBBBYBYBBBYYBBBBBBBBBYBBYBBBYBYBBBBBGGGYYYYYYYYGGBBBBGGGGGGGGGGGGGGGBBBGGRRGGGGGGGRRGBBBBBBRRBBBBBBBRRBBB",
    "BBBBBBBBBBGGGGGBBBBRRRRRRRRGGGGGGBBBBBBBBBBBBGGGGGGBBBBBBBBBBBRRRRRRRRRBBBBBBBRRRRRRRRRRRBBBBBRYYYYYYYYYYYRBBBBBBBYYYYYYYYYBBB",
    "BBBBBRRRRRRRRRBBBBBBBBRGGRRRRRRRRBBBBBBRGGGGRRRRRRRRBBBBRGGBBGYRRRRRRRRBBBBGGBBGYYYYYYYYBBBBBGGGGGYYYYYYYYBBBBBGGGGGYYYYYYYYBB",
    "BBBBBBBBBBRBBBBBBBBBBBBBBBBRRRBBBGBBBBRRRBBBYYYYYBGBGBBBBBRRRYYYYYYYBBGBBBBBBRRYYYYYYYBBGBBBBBBBRYYYYYYYGGBBBBBBBBBBYYYYYBBBBB",
    "BBBBRBRBRBBRRBBBBBBBBBRBRBRBRRRBBBBBBBBBBRRRBBRRRBBBBBBBBBBBRBBBRRRBBBBBBBBBBBYBBBBYYBBBBBBBBBBBYBBBBYYBBBBBBBBBBBYBBBBYYBBBBB",
    "BBBBBGGBBBBBBBBBBBBBBBGBGGBBBBBBBBBBBBGGGGGBBRRRRRBBBBBBBBRRBBRRRYYYYRBBBBBRRBBRRRYYYYYYYYBBRRRRRRRRYYYYYYRBBBBRRRRRRRRRRRRRBB",
    "BBBBGGGGBBBBBBBBBBBBBBBYBBBBBBBBBBBBBBBBYBBBBRRRRRRRBBBBBGGGBBBGGGGGGGBBBBGGGGBBBBGGGGGGBBBBGRRGGGGGGGRRGBBBBBBRRBBBBBBBRRBBBB",
    "BBBBRRRRRBBBBBBBBBBBBBBBRBBBBBRRRBBBBBBBBBRRRRRRRRBBBBBBBBGGBBBRBBBGGBBBBBBGYYGBBBRBGYYGBBBBBGYYGBBBBRGYYGBBBBBBGGBBBBBBBGGBBB",
    "BBBBBBBBBRBBBBBBBBBBBBBBBBRRRBBBBBBBBBBBBYYBBYBBYYBBBBBBBBYYBYYYYYBYYBBBBBBBYBYBYYYBYBYBBBBBBBBYYYBYBYYYBBBBBBBBBBYYYYYYYBBBBB",
    "BBBBBBBBBBBBBBBBBBBBBBBGGBRRBRRBBBBBBBBBGGGRRRRRRRBBBBBBBBGGGRRRRRRRBBBBBBBBBGGGRRRRRBBBBBBBBBBBGGGRRRBBBBBBBBBBBBBGBBRBBBBBBB",
    "BBBBBBBBBBBBBRBBBBBBBBBBBBBBBBBRRBBBBBYYYYYYYYYYYRRRBBBBBYGGGGGGGGGRRRRBBBYYYYYYYYYYYRRRBBBBBBBBBBBBBBBRRBBBBBBBBBBBBBBBBRBBBB",
    "BBBBBRBBBBBBBBBBBBBBBBRRBBBBBBBBBBBBBBBRRRYYYYYYYYYYYBBBRRRRGGGGGGGGGYBBBBBRRRYYYYYYYYYYYBBBBBRRBBBBBBBBBBBBBBBBBRBBBBBBBBBBBB",
    "BBBBBBBBBYBBBBBBBBBBBBBBBBYYYBBBBBBBBBBBBBBYYYBBBBBBBBBBBBRBYYYBBBBBBBBBBBBBRRYYBBBBBBBBBBBBBBRRRBBBBBBBBBBBBBBBRRRRBBBBBBBBBB",
    "BBBBRRRRBBBBBBBBBBBBBBRRRBBBBBBBBBBBBBBBRRYYBBBBBBBBBBBBBBRBYYYBBBBBBBBBBBBBBBBYYYBBBBBBBBBBBBBBBBYYYBBBBBBBBBBBBBBBBYBBBBBBBB",
    "BBBRBBBBBBBRBBBBBBBBBRGYYYGYYRRRBBBBBBBRYYGYYYYRBBRBBBBBBRYYYYYGYRBBRBBBBBBRYGYYYYYRBBRBBBBBBRYYYYGYYRRRBBBBBBBBRRRRRRRBBBBBBB",
    "BBBBBBBBBBBBGBBBBBBBBBBBBBBBBBGBBBBBBBBBBBBBBBBBGBBBBBBBBBBBBBBBBGBBBBBBBBBBBBBYYYYYBBBBBBBBBBBBRBBBBRBBBBBBBBBBBBRBBBBRBBBBBB",
    "BBBBBBBBBBBBBBBRBBBBBBBBBBBBBBBBRRRBBBBBBBBBBBBBBRRRGBBBBBBBBBBBBBRRBGGBBBBBBBBBRRRRRBBGBBBBBBBBRRRRRRBBBGBBBBBBRRRRRRBBBBBGBB",
    "BBBBBYYYYYYYYYBBBBBBBBBBYRRRRRYBBBBBBBBBBBBYRRRYBBBBBBBBBBBBBBYRYBBBBBBBBBBBBBBBBYBBBBBBBBBBBBBBBBBYBBBBBBBBBBBBBBBYYYYYBBBBBB",
];

/// Whether `pixels` is a well-formed bitmap string.
const fn is_bitmap(pixels: &str) -> bool {
    let symbols = pixels.as_bytes();
    if symbols.len() != Graphic::SIZE {
        return false;
    }
    let mut i = 0;
    while i < symbols.len() {
        if Pixel::from_symbol(symbols[i] as char).is_none() {
            return false;
        }
        i += 1;
    }
    true
}

// A malformed factory bitmap fails the build
const _: () = {
    let mut slot = 0;
    while slot < GRAPHIC_SLOTS {
        assert!(is_bitmap(DEFAULT_PIXELS[slot]), "malformed built-in graphic");
        slot += 1;
    }
};

/// Decoded factory bitmaps.
static DEFAULT_GRAPHICS: OnceLock<Vec<Graphic>> = OnceLock::new();

fn default_graphics() -> &'static [Graphic] {
    DEFAULT_GRAPHICS.get_or_init(|| {
        trace!("decoding {} built-in graphics", DEFAULT_PIXELS.len());
        DEFAULT_PIXELS
            .iter()
            .map(|pixels| {
                Graphic::new(pixels).unwrap_or_else(|err| {
                    error!("built-in graphic rejected: {}", err);
                    Graphic::filled(Pixel::Black)
                })
            })
            .collect()
    })
}

/// Factory bitmap for slot `index` (0..=25).
///
/// All 26 keys have one, `Z` (index 25) included; only 26 and above are
/// rejected.
///
/// ```
/// use prolite::banks::graphics::default_graphic;
///
/// assert_eq!(default_graphic(0)?.pixels().len(), 126);
/// assert!(default_graphic(26).is_err());
/// # Ok::<(), prolite::ProliteError>(())
/// ```
pub fn default_graphic(index: i32) -> Result<&'static Graphic> {
    let slot = graphic_slot(index)?;
    Ok(&default_graphics()[slot])
}

fn graphic_slot(index: i32) -> Result<usize> {
    checked_slot(index, GRAPHIC_SLOTS).ok_or(ProliteError::InvalidGraphicIndex(index))
}

/// # Graphics Bank
///
/// User-defined graphics of one sign. Slots start empty; setting a slot
/// again replaces the previous graphic.
///
/// ## Example
///
/// ```
/// use prolite::banks::GraphicsBank;
/// use prolite::models::{Graphic, Pixel};
///
/// let mut bank = GraphicsBank::new(1)?;
/// bank.set_graphic(0, Graphic::filled(Pixel::Red))?;
///
/// assert_eq!(bank.configuration(), format!("<ID01><GA>{}\r\n", "R".repeat(126)));
/// # Ok::<(), prolite::ProliteError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GraphicsBank {
    display_id: DisplayId,
    graphics: [Option<Graphic>; GRAPHIC_SLOTS],
}

impl GraphicsBank {
    /// Create an empty bank for display `display_id` (0..=255).
    pub fn new(display_id: i32) -> Result<Self> {
        Ok(Self::for_display(DisplayId::new(display_id)?))
    }

    /// Create an empty bank for an already validated address.
    pub fn for_display(display_id: DisplayId) -> Self {
        Self {
            display_id,
            graphics: Default::default(),
        }
    }

    /// The display this bank belongs to.
    #[inline]
    pub fn display_id(&self) -> DisplayId {
        self.display_id
    }

    /// Store `graphic` in slot `index` (0..=25).
    pub fn set_graphic(&mut self, index: i32, graphic: Graphic) -> Result<()> {
        let slot = graphic_slot(index)?;
        if self.graphics[slot].replace(graphic).is_some() {
            debug!("display {}: graphic {} redefined", self.display_id, slot_key(slot));
        }
        Ok(())
    }

    /// Whether slot `index` holds a user-defined graphic.
    pub fn has_graphic(&self, index: i32) -> Result<bool> {
        Ok(self.graphics[graphic_slot(index)?].is_some())
    }

    /// Graphic shown for slot `index`: the user-defined one, or the
    /// factory bitmap when the slot was never set.
    pub fn graphic(&self, index: i32) -> Result<&Graphic> {
        let slot = graphic_slot(index)?;
        match &self.graphics[slot] {
            Some(graphic) => Ok(graphic),
            None => default_graphic(index),
        }
    }

    /// Definition lines for every user-defined graphic, in slot order.
    pub fn configuration(&self) -> String {
        self.graphics
            .iter()
            .enumerate()
            .filter_map(|(slot, graphic)| {
                let graphic = graphic.as_ref()?;
                Some(commands::define_graphic(self.display_id, slot_key(slot), graphic.pixels()))
            })
            .collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================
