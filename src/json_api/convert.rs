//! Conversion from sign definitions to a configured [`Display`].

use log::debug;

use crate::display::Display;
use crate::error::{ProliteError, Result};
use crate::models::timer::WILDCARD;
use crate::models::{Graphic, Timer};
use crate::protocol::text;

use super::schema::*;

impl SignDefinition {
    /// Parse a sign definition from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a display with every bank populated from this definition.
    ///
    /// The first invalid entry aborts the build.
    pub fn to_display(&self) -> Result<Display> {
        let mut display = Display::new(self.id)?;

        for graphic in &self.graphics {
            display
                .graphics_bank_mut()
                .set_graphic(graphic.index, graphic.pixels.parse::<Graphic>()?)?;
        }

        for page in &self.pages {
            let content = if self.escape {
                text::escape(&text::normalize(&page.content))
            } else {
                page.content.clone()
            };
            display.page_bank_mut().set_page(page.index, &content)?;
        }

        for timer in &self.timers {
            display.timer_bank_mut().set_timer(timer.index, timer.to_timer()?)?;
        }

        match &self.clock {
            None => {}
            Some(JsonClock::Keyword(keyword)) if keyword.eq_ignore_ascii_case("now") => {
                display.set_date_time_to_now();
            }
            Some(JsonClock::Keyword(other)) => {
                return Err(ProliteError::Document(format!(
                    "clock must be \"now\" or a date, got \"{}\"",
                    other
                )));
            }
            Some(JsonClock::At(at)) => {
                display.set_date_time(at.year, at.month, at.day, at.hour, at.minute, at.second)?;
            }
        }

        debug!(
            "sign {}: {} pages, {} graphics, {} timers",
            self.id,
            self.pages.len(),
            self.graphics.len(),
            self.timers.len()
        );
        Ok(display)
    }

    /// Configuration stream for this definition, honouring `reset` and
    /// `show_page`.
    pub fn configuration(&self) -> Result<String> {
        self.to_display()?.configuration(self.reset, self.show_page)
    }
}

impl JsonTimer {
    fn to_timer(&self) -> Result<Timer> {
        Timer::new(
            self.day_of_week.unwrap_or(WILDCARD),
            self.hour.unwrap_or(WILDCARD),
            self.minute.unwrap_or(WILDCARD),
            &self.sequence,
        )
    }
}
