//! # Timer Bank
//!
//! The 10 timer slots (`A`..`J`) of one sign.
//!
//! Timer lines are addressed with a *decimal* header (`<ID12>` for display
//! 12), unlike every other line. Existing signs are configured this way, so
//! it is kept as is.

use log::debug;

use crate::error::{ProliteError, Result};
use crate::models::Timer;
use crate::protocol::commands::{self, DisplayId, TIMER_SLOTS, checked_slot, slot_key};

fn timer_slot(index: i32) -> Result<usize> {
    checked_slot(index, TIMER_SLOTS).ok_or(ProliteError::InvalidTimerIndex(index))
}

/// # Timer Bank
///
/// ## Example
///
/// ```
/// use prolite::banks::TimerBank;
/// use prolite::models::Timer;
///
/// let mut bank = TimerBank::new(1)?;
/// bank.set_timer(0, Timer::new(1, 2, 3, &[0, 1, 2, 3])?)?;
///
/// assert_eq!(bank.configuration(), "<ID01><TA>10203ABCD\r\n");
/// # Ok::<(), prolite::ProliteError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TimerBank {
    display_id: DisplayId,
    timers: [Option<Timer>; TIMER_SLOTS],
}

impl TimerBank {
    /// Create an empty bank for display `display_id` (0..=255).
    pub fn new(display_id: i32) -> Result<Self> {
        Ok(Self::for_display(DisplayId::new(display_id)?))
    }

    /// Create an empty bank for an already validated address.
    pub fn for_display(display_id: DisplayId) -> Self {
        Self {
            display_id,
            timers: Default::default(),
        }
    }

    /// The display this bank belongs to.
    #[inline]
    pub fn display_id(&self) -> DisplayId {
        self.display_id
    }

    /// Store `timer` in slot `index` (0..=9).
    pub fn set_timer(&mut self, index: i32, timer: Timer) -> Result<()> {
        let slot = timer_slot(index)?;
        if self.timers[slot].replace(timer).is_some() {
            debug!("display {}: timer {} redefined", self.display_id, slot_key(slot));
        }
        Ok(())
    }

    /// Whether slot `index` holds a timer.
    pub fn has_timer(&self, index: i32) -> Result<bool> {
        Ok(self.timers[timer_slot(index)?].is_some())
    }

    /// Timer in slot `index`, if set.
    pub fn timer(&self, index: i32) -> Result<Option<&Timer>> {
        Ok(self.timers[timer_slot(index)?].as_ref())
    }

    /// Definition lines for every set timer, in slot order.
    pub fn configuration(&self) -> String {
        self.timers
            .iter()
            .enumerate()
            .filter_map(|(slot, timer)| {
                let timer = timer.as_ref()?;
                Some(commands::define_timer(self.display_id, slot_key(slot), &timer.to_string()))
            })
            .collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================
