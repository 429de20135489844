//! Full-screen image viewer.
//!
//! The modal only knows its images and the index it shows. Clicks are turned
//! into [`ModalAction`]s which the opener applies, see
//! [`crate::detail::EventDetail::dispatch`].

use crate::carousel::{wrap_next, wrap_previous};
use crate::scroll_lock::{ScrollLock, ScrollLockGuard};

/// Where a click on the open modal landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Backdrop,
    /// The image area. Clicks here never reach the backdrop.
    Content,
    CloseButton,
    PreviousButton,
    NextButton,
}

/// Request from the modal to its opener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    Close,
    Previous,
    Next,
}

/// An open image modal. Holds the page scroll lock for as long as it lives.
#[derive(Debug)]
pub struct ImageModal<'a> {
    images: &'a [String],
    index: usize,
    _scroll_lock: ScrollLockGuard,
}

impl<'a> ImageModal<'a> {
    /// Open at `index` (wrapped into range). There is nothing to show for an
    /// empty gallery, so that returns `None` and leaves the page unlocked.
    pub fn open(lock: &ScrollLock, images: &'a [String], index: usize) -> Option<Self> {
        if images.is_empty() {
            return None;
        }

        Some(ImageModal {
            images,
            index: index % images.len(),
            _scroll_lock: lock.acquire(),
        })
    }

    /// Close the modal, releasing the scroll lock.
    pub fn close(self) {}

    pub fn click(&self, target: ClickTarget) -> Option<ModalAction> {
        match target {
            ClickTarget::Backdrop | ClickTarget::CloseButton => Some(ModalAction::Close),
            ClickTarget::Content => None,
            ClickTarget::PreviousButton => self.has_controls().then_some(ModalAction::Previous),
            ClickTarget::NextButton => self.has_controls().then_some(ModalAction::Next),
        }
    }

    pub fn images(&self) -> &'a [String] {
        self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current_image(&self) -> &'a str {
        &self.images[self.index]
    }

    pub fn has_controls(&self) -> bool {
        self.len() > 1
    }

    pub fn previous_index(&self) -> usize {
        wrap_previous(self.index, self.len())
    }

    pub fn next_index(&self) -> usize {
        wrap_next(self.index, self.len())
    }

    /// Show image `index`, wrapped into range.
    pub fn show(&mut self, index: usize) {
        self.index = index % self.len();
    }

    /// Position counter, e.g. `2 / 5`.
    pub fn counter(&self) -> String {
        format!("{} / {}", self.index + 1, self.len())
    }
}
