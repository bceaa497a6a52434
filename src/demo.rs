//! # Demo Configurations
//!
//! Ready-made displays for trying out a sign. Each demo returns a fully
//! populated [`Display`]; pass its [`Display::configuration`] to whatever
//! delivers bytes to the sign.

use crate::display::Display;
use crate::error::Result;
use crate::models::{Graphic, Pixel, Timer};
use crate::protocol::text::{self, *};

// ============================================================================
// DEMOS
// ============================================================================

/// Three pages shown in rotation.
///
/// - Pages A, B and C read "Page 1".."Page 3", each with the *appear* effect
/// - Timer A runs every minute of every day and cycles A, B, C
pub fn simple() -> Result<Display> {
    let mut display = Display::new(1)?;

    for index in 0..3 {
        display
            .page_bank_mut()
            .set_page(index, &format!("{}Page {}", DISPLAY_APPEAR, index + 1))?;
    }

    display.timer_bank_mut().set_timer(0, Timer::new(-1, -1, -1, &[0, 1, 2])?)?;

    Ok(display)
}

/// Colours, effects and graphics on a shop sign.
///
/// - Page A: welcome text with the built-in graphic A
/// - Page B: a custom heart in graphic slot B, in rainbow bold
/// - Page C: the sign's own clock
/// - Page D: a closing notice
/// - Timer A cycles A, B, C all week; timer B shows D on Sundays
pub fn showcase() -> Result<Display> {
    let mut display = Display::new(1)?;

    display.graphics_bank_mut().set_graphic(1, heart())?;

    let pages = [
        format!("{}{}Welcome <GA>", DISPLAY_OPEN, COLOR_BRIGHT_RED),
        format!(
            "{}{}{}Open today <GB>",
            DISPLAY_SCROLL_UP,
            COLOR_RAINBOW,
            text::format(false, false, true)
        ),
        DISPLAY_TIME_AND_DATE.to_string(),
        format!("{}{}{}Closed", DISPLAY_CLOSE_OC, COLOR_GREEN, FORMAT_FLASHING_NORMAL),
    ];
    for (index, content) in (0..).zip(&pages) {
        display.page_bank_mut().set_page(index, content)?;
    }

    let timers = display.timer_bank_mut();
    timers.set_timer(0, Timer::new(-1, -1, -1, &[0, 1, 2])?)?;
    timers.set_timer(1, Timer::new(0, -1, -1, &[3])?)?;

    Ok(display)
}

fn heart() -> Graphic {
    const ROWS: [&str; Graphic::HEIGHT] = [
        "    RRR    RRR    ",
        "   RRRRR  RRRRR   ",
        "   RRRRRRRRRRRR   ",
        "    RRRRRRRRRR    ",
        "     RRRRRRRR     ",
        "      RRRRRR      ",
        "        RR        ",
    ];
    Graphic::from_fn(|x, y| match ROWS[y].as_bytes()[x] {
        b'R' => Pixel::Red,
        _ => Pixel::Black,
    })
}

// ============================================================================
// LOOKUP
// ============================================================================

/// Names accepted by [`by_name`].
pub fn list_demos() -> &'static [&'static str] {
    &["simple", "showcase"]
}

/// Get a demo display by name.
pub fn by_name(name: &str) -> Option<Result<Display>> {
    match name.to_lowercase().as_str() {
        "simple" => Some(simple()),
        "showcase" => Some(showcase()),
        _ => None,
    }
}

// ============================================================================
// TESTS
// ============================================================================
