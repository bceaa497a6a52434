//! # Page Bank
//!
//! The 26 text pages (`A`..`Z`) of one sign.
//!
//! Content is normalized to the sign's character set when stored and must
//! fit in [`PAGE_SIZE`] bytes afterwards. An empty page counts as unset.
//! Control tags are **not** stripped here; run untrusted text through
//! [`crate::protocol::text::escape`] first.

use log::debug;

use crate::error::{ProliteError, Result};
use crate::protocol::commands::{self, DisplayId, PAGE_SIZE, PAGE_SLOTS, checked_slot, slot_key};
use crate::protocol::text;

pub(crate) fn page_slot(index: i32) -> Result<usize> {
    checked_slot(index, PAGE_SLOTS).ok_or(ProliteError::InvalidPage(index))
}

/// # Page Bank
///
/// ## Example
///
/// ```
/// use prolite::banks::PageBank;
///
/// let mut bank = PageBank::new(1)?;
/// bank.set_page(0, "Hello, world!")?;
///
/// assert!(bank.has_page(0)?);
/// assert_eq!(bank.configuration(), "<ID01><PA>Hello, world!\r\n");
/// # Ok::<(), prolite::ProliteError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PageBank {
    display_id: DisplayId,
    pages: [String; PAGE_SLOTS],
}

impl PageBank {
    /// Create an empty bank for display `display_id` (0..=255).
    pub fn new(display_id: i32) -> Result<Self> {
        Ok(Self::for_display(DisplayId::new(display_id)?))
    }

    /// Create an empty bank for an already validated address.
    pub fn for_display(display_id: DisplayId) -> Self {
        Self {
            display_id,
            pages: Default::default(),
        }
    }

    /// The display this bank belongs to.
    #[inline]
    pub fn display_id(&self) -> DisplayId {
        self.display_id
    }

    /// Store `content` in page `index` (0..=25).
    ///
    /// The content is normalized first; the length limit applies to the
    /// normalized text. Storing an empty string clears the page.
    pub fn set_page(&mut self, index: i32, content: &str) -> Result<()> {
        let slot = page_slot(index)?;
        let content = text::normalize(content);

        if content.len() > PAGE_SIZE {
            return Err(ProliteError::PageTooLong {
                page: slot_key(slot),
                max: PAGE_SIZE,
            });
        }

        if !self.pages[slot].is_empty() {
            debug!("display {}: page {} redefined", self.display_id, slot_key(slot));
        }
        self.pages[slot] = content;
        Ok(())
    }

    /// Whether page `index` has content.
    pub fn has_page(&self, index: i32) -> Result<bool> {
        Ok(!self.pages[page_slot(index)?].is_empty())
    }

    /// Content of page `index`; empty when unset.
    pub fn page(&self, index: i32) -> Result<&str> {
        Ok(&self.pages[page_slot(index)?])
    }

    /// Definition lines for every non-empty page, in slot order.
    pub fn configuration(&self) -> String {
        self.pages
            .iter()
            .enumerate()
            .filter(|(_, content)| !content.is_empty())
            .map(|(slot, content)| commands::define_page(self.display_id, slot_key(slot), content))
            .collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================
