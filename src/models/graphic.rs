//! # Graphic
//!
//! A fixed 18×7 bitmap in the sign's four colours.
//!
//! ## Pixel Layout
//!
//! Pixels are stored row by row, top row first, one symbol per pixel:
//!
//! ```text
//! index = WIDTH * y + x
//!
//!      x → 0                 17
//! y  0   RRRRRRRRRRRRRRRRRR
//! ↓  1   RBBBBBBBBBBBBBBBBR
//!    …
//!    6   RRRRRRRRRRRRRRRRRR
//! ```
//!
//! | Symbol | Colour |
//! |--------|--------|
//! | `R` | Red |
//! | `G` | Green |
//! | `Y` | Yellow |
//! | `B` | Black (off) |

use std::fmt;
use std::str::FromStr;

use crate::error::{ProliteError, Result};
use crate::protocol::commands::{GRAPHIC_HEIGHT, GRAPHIC_WIDTH};

/// One pixel colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pixel {
    Red,
    Green,
    Yellow,
    #[default]
    Black,
}

impl Pixel {
    /// Protocol symbol for this colour.
    pub const fn symbol(self) -> char {
        match self {
            Pixel::Red => 'R',
            Pixel::Green => 'G',
            Pixel::Yellow => 'Y',
            Pixel::Black => 'B',
        }
    }

    /// Parse a protocol symbol.
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'R' => Some(Pixel::Red),
            'G' => Some(Pixel::Green),
            'Y' => Some(Pixel::Yellow),
            'B' => Some(Pixel::Black),
            _ => None,
        }
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// # Graphic
///
/// Validated on construction and immutable afterwards.
///
/// ## Example
///
/// ```
/// use prolite::models::{Graphic, Pixel};
///
/// let mut pixels = "B".repeat(Graphic::SIZE);
/// pixels.replace_range(0..1, "R");
///
/// let graphic = Graphic::new(&pixels)?;
/// assert_eq!(graphic.pixel(0, 0)?, Pixel::Red);
/// assert_eq!(graphic.pixel(1, 0)?, Pixel::Black);
/// assert!(graphic.pixel(18, 0).is_err());
/// # Ok::<(), prolite::ProliteError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graphic {
    pixels: String,
}

impl Graphic {
    /// Width in pixels.
    pub const WIDTH: usize = GRAPHIC_WIDTH;

    /// Height in pixels.
    pub const HEIGHT: usize = GRAPHIC_HEIGHT;

    /// Number of pixels.
    pub const SIZE: usize = GRAPHIC_WIDTH * GRAPHIC_HEIGHT;

    /// Build a graphic from its 126-symbol pixel string.
    ///
    /// Fails with [`ProliteError::InvalidGraphicSize`] when the length is
    /// wrong and [`ProliteError::InvalidPixel`] on the first symbol outside
    /// `R`, `G`, `Y`, `B`.
    pub fn new(pixels: &str) -> Result<Self> {
        let len = pixels.chars().count();
        if len != Self::SIZE {
            return Err(ProliteError::InvalidGraphicSize(len));
        }

        if let Some(bad) = pixels.chars().find(|&ch| Pixel::from_symbol(ch).is_none()) {
            return Err(ProliteError::InvalidPixel(bad));
        }

        Ok(Self {
            pixels: pixels.to_owned(),
        })
    }

    /// A graphic with every pixel set to `pixel`.
    pub fn filled(pixel: Pixel) -> Self {
        Self {
            pixels: pixel.symbol().to_string().repeat(Self::SIZE),
        }
    }

    /// Build a graphic by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> Pixel) -> Self {
        let mut pixels = String::with_capacity(Self::SIZE);
        for y in 0..Self::HEIGHT {
            for x in 0..Self::WIDTH {
                pixels.push(f(x, y).symbol());
            }
        }
        Self { pixels }
    }

    /// The full pixel string, row by row.
    #[inline]
    pub fn pixels(&self) -> &str {
        &self.pixels
    }

    /// Pixel at column `x`, row `y`.
    pub fn pixel(&self, x: i32, y: i32) -> Result<Pixel> {
        let in_bounds = usize::try_from(x).is_ok_and(|x| x < Self::WIDTH)
            && usize::try_from(y).is_ok_and(|y| y < Self::HEIGHT);
        if !in_bounds {
            return Err(ProliteError::InvalidCoordinates { x, y });
        }

        let index = Self::WIDTH * y as usize + x as usize;
        let symbol = self.pixels.as_bytes()[index] as char;
        Pixel::from_symbol(symbol).ok_or(ProliteError::InvalidPixel(symbol))
    }

    /// Rows of the bitmap, top first.
    pub fn rows(&self) -> impl Iterator<Item = &str> {
        (0..Self::HEIGHT).map(move |y| &self.pixels[y * Self::WIDTH..(y + 1) * Self::WIDTH])
    }
}

impl FromStr for Graphic {
    type Err = ProliteError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Graphic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pixels)
    }
}

// ============================================================================
// TESTS
// ============================================================================
