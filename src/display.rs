//! # Display
//!
//! One physical sign: its address, its three banks and an optional clock
//! value, assembled into the configuration stream that programs it.
//!
//! ## Stream Order
//!
//! The firmware is sensitive to the order in which it receives commands;
//! out-of-order or repeated tokens have left signs unresponsive until power
//! cycled. [`Display::configuration`] always emits:
//!
//! | # | Section | Condition |
//! |---|---------|-----------|
//! | 1 | `<IDhh>`, `<DP*>`, `<DT*>`, `<DG*>` | `reset` |
//! | 2 | Graphic definitions | any graphic set |
//! | 3 | Page definitions | any page set |
//! | 4 | Timer definitions | any timer set |
//! | 5 | `<Tyymmddwhhmmss>` | clock set |
//! | 6 | `<RPx>` | page requested |
//!
//! ## Example
//!
//! ```
//! use prolite::Display;
//!
//! let mut display = Display::new(1)?;
//! display.page_bank_mut().set_page(0, "Test")?;
//!
//! assert_eq!(
//!     display.configuration(false, Some(0))?,
//!     "<ID01><PA>Test\r\n<ID01><RPA>\r\n"
//! );
//! # Ok::<(), prolite::ProliteError>(())
//! ```

use chrono::{Local, NaiveDate, NaiveDateTime};
use log::debug;

use crate::banks::{GraphicsBank, PageBank, TimerBank};
use crate::banks::pages::page_slot;
use crate::error::{ProliteError, Result};
use crate::protocol::commands::{self, DisplayId, slot_key};

/// # Display
///
/// Owns its banks for its whole lifetime. Build one per physical sign.
#[derive(Debug, Clone)]
pub struct Display {
    id: DisplayId,
    graphics: GraphicsBank,
    pages: PageBank,
    timers: TimerBank,
    date_time: Option<NaiveDateTime>,
}

impl Display {
    /// Create a display with empty banks. `id` must be 0..=255.
    pub fn new(id: i32) -> Result<Self> {
        let id = DisplayId::new(id)?;
        Ok(Self {
            id,
            graphics: GraphicsBank::for_display(id),
            pages: PageBank::for_display(id),
            timers: TimerBank::for_display(id),
            date_time: None,
        })
    }

    #[inline]
    pub fn id(&self) -> DisplayId {
        self.id
    }

    pub fn graphics_bank(&self) -> &GraphicsBank {
        &self.graphics
    }

    pub fn graphics_bank_mut(&mut self) -> &mut GraphicsBank {
        &mut self.graphics
    }

    pub fn page_bank(&self) -> &PageBank {
        &self.pages
    }

    pub fn page_bank_mut(&mut self) -> &mut PageBank {
        &mut self.pages
    }

    pub fn timer_bank(&self) -> &TimerBank {
        &self.timers
    }

    pub fn timer_bank_mut(&mut self) -> &mut TimerBank {
        &mut self.timers
    }

    /// Clock value that will be sent, if any.
    pub fn date_time(&self) -> Option<NaiveDateTime> {
        self.date_time
    }

    /// Send the local wall-clock time as of this call.
    ///
    /// The clock is never set unless asked for.
    pub fn set_date_time_to_now(&mut self) {
        self.date_time = Some(Local::now().naive_local());
    }

    /// Send a specific date and time.
    pub fn set_date_time(
        &mut self,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<()> {
        let at = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, second))
            .ok_or_else(|| {
                ProliteError::InvalidDateTime(format!(
                    "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
                    year, month, day, hour, minute, second
                ))
            })?;
        self.set_naive_date_time(at);
        Ok(())
    }

    /// Send an already constructed date and time.
    pub fn set_naive_date_time(&mut self, at: NaiveDateTime) {
        self.date_time = Some(at);
    }

    /// # Configuration Stream
    ///
    /// Everything needed to program the sign, in the order the firmware
    /// requires (see the module docs).
    ///
    /// - `reset`: wipe pages, timers and graphics first.
    /// - `display_page`: force page 0..=25 on screen afterwards. The page must
    ///   be defined. This stops timer-driven page rotation.
    ///
    /// Fails with [`ProliteError::InvalidPage`] if `display_page` is out of
    /// range or names an empty page. Nothing is emitted in that case.
    pub fn configuration(&self, reset: bool, display_page: Option<i32>) -> Result<String> {
        // Validate before building anything
        let run_page = display_page
            .map(|index| {
                let slot = page_slot(index)?;
                if self.pages.has_page(index)? {
                    Ok(slot)
                } else {
                    Err(ProliteError::InvalidPage(index))
                }
            })
            .transpose()?;

        let mut config = String::new();

        if reset {
            config.push_str(&commands::address(self.id));
            config.push_str(&commands::delete_all_pages(self.id));
            config.push_str(&commands::delete_all_timers(self.id));
            config.push_str(&commands::delete_all_graphics(self.id));
        }

        config.push_str(&self.graphics.configuration());
        config.push_str(&self.pages.configuration());
        config.push_str(&self.timers.configuration());

        if let Some(at) = &self.date_time {
            config.push_str(&commands::set_clock(at));
        }

        if let Some(slot) = run_page {
            config.push_str(&commands::run_page(self.id, slot_key(slot)));
        }

        debug!(
            "display {}: assembled {} lines ({} bytes)",
            self.id,
            config.matches(commands::EOL).count(),
            config.len()
        );
        Ok(config)
    }
}

// ============================================================================
// TESTS
// ============================================================================
