//! Single event page.

use crate::event::Event;
use crate::modal::{ClickTarget, ImageModal, ModalAction};
use crate::scroll_lock::ScrollLock;
use crate::store::{EventStore, Lookup};

/// Result of navigating to `/event/{id}`.
#[derive(Debug)]
pub enum DetailPage<'a> {
    Found(EventDetail<'a>),
    /// No event with this id. Rendered as a page of its own, not an error.
    NotFound { id: String },
}

/// View state of a found event: the event plus the image modal, if open.
#[derive(Debug)]
pub struct EventDetail<'a> {
    event: &'a Event,
    scroll_lock: ScrollLock,
    modal: Option<ImageModal<'a>>,
}

impl<'a> EventDetail<'a> {
    pub fn open(store: &'a EventStore, id: &str, scroll_lock: &ScrollLock) -> DetailPage<'a> {
        match store.lookup(id) {
            Lookup::Found(event) => DetailPage::Found(EventDetail {
                event,
                scroll_lock: scroll_lock.clone(),
                modal: None,
            }),
            Lookup::NotFound => {
                tracing::debug!(id, "event not found");
                DetailPage::NotFound { id: id.to_string() }
            }
        }
    }

    pub fn event(&self) -> &'a Event {
        self.event
    }

    pub fn primary_image(&self) -> Option<&'a str> {
        self.event.primary_image()
    }

    /// The gallery grid is only shown when there is more than one image.
    pub fn has_gallery(&self) -> bool {
        self.event.images.len() > 1
    }

    /// `(index, url)` for each gallery tile.
    pub fn gallery(&self) -> impl Iterator<Item = (usize, &'a str)> {
        let event = self.event;
        event.images.iter().map(String::as_str).enumerate()
    }

    pub fn modal(&self) -> Option<&ImageModal<'a>> {
        self.modal.as_ref()
    }

    /// Open the modal at `index`, as a click on a gallery tile does.
    pub fn open_image(&mut self, index: usize) {
        // Release any previous hold before taking a new one.
        self.modal = None;

        let event = self.event;
        self.modal = ImageModal::open(&self.scroll_lock, &event.images, index);
    }

    /// Route a click on the open modal. No-op when the modal is closed.
    pub fn click(&mut self, target: ClickTarget) {
        if let Some(action) = self.modal.as_ref().and_then(|m| m.click(target)) {
            self.dispatch(action);
        }
    }

    pub fn dispatch(&mut self, action: ModalAction) {
        match action {
            ModalAction::Close => {
                if let Some(modal) = self.modal.take() {
                    modal.close();
                }
            }
            ModalAction::Previous => {
                if let Some(modal) = self.modal.as_mut() {
                    modal.show(modal.previous_index());
                }
            }
            ModalAction::Next => {
                if let Some(modal) = self.modal.as_mut() {
                    modal.show(modal.next_index());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> EventStore {
        EventStore::from_json(
            r#"{"events": [
                {"id": "gallery", "date": "01/01/2024", "title": "Gallery", "description": "d",
                 "images": ["https://example.com/0.jpg", "https://example.com/1.jpg", "https://example.com/2.jpg"],
                 "type": "improvements"},
                {"id": "single", "date": "02/01/2024", "title": "Single", "description": "d",
                 "images": ["https://example.com/only.jpg"], "type": "news"},
                {"id": "bare", "date": "03/01/2024", "title": "Bare", "description": "d",
                 "images": [], "type": "maintenance"}
            ]}"#,
        )
        .unwrap()
    }

    fn found<'a>(store: &'a EventStore, id: &str, lock: &ScrollLock) -> EventDetail<'a> {
        match EventDetail::open(store, id, lock) {
            DetailPage::Found(detail) => detail,
            DetailPage::NotFound { id } => panic!("Expected {id} to be found"),
        }
    }

    #[test]
    fn unknown_id_is_not_found() {
        let store = store();
        let lock = ScrollLock::new();

        match EventDetail::open(&store, "nonexistent-id", &lock) {
            DetailPage::NotFound { id } => assert_eq!(id, "nonexistent-id"),
            DetailPage::Found(_) => panic!("Expected NotFound"),
        }
    }

    #[test]
    fn gallery_only_for_multiple_images() {
        let store = store();
        let lock = ScrollLock::new();

        assert!(found(&store, "gallery", &lock).has_gallery());
        assert!(!found(&store, "single", &lock).has_gallery());
        assert!(!found(&store, "bare", &lock).has_gallery());
        assert_eq!(found(&store, "bare", &lock).primary_image(), None);
    }

    #[test]
    fn gallery_click_opens_modal_and_locks_scroll() {
        let store = store();
        let lock = ScrollLock::new();
        let mut detail = found(&store, "gallery", &lock);

        detail.open_image(2);

        assert!(lock.is_locked());
        assert_eq!(detail.modal().map(|m| m.index()), Some(2));
    }

    #[test]
    fn modal_navigation_wraps_through_dispatch() {
        let store = store();
        let lock = ScrollLock::new();
        let mut detail = found(&store, "gallery", &lock);

        detail.open_image(2);
        detail.click(ClickTarget::NextButton);
        assert_eq!(detail.modal().map(|m| m.index()), Some(0));

        detail.click(ClickTarget::PreviousButton);
        assert_eq!(detail.modal().map(|m| m.index()), Some(2));
    }

    #[test]
    fn backdrop_closes_but_content_does_not() {
        let store = store();
        let lock = ScrollLock::new();
        let mut detail = found(&store, "gallery", &lock);

        detail.open_image(0);
        detail.click(ClickTarget::Content);
        assert!(detail.modal().is_some());

        detail.click(ClickTarget::Backdrop);
        assert!(detail.modal().is_none());
        assert!(!lock.is_locked());
    }

    #[test]
    fn reopening_holds_a_single_lock() {
        let store = store();
        let lock = ScrollLock::new();
        let mut detail = found(&store, "gallery", &lock);

        detail.open_image(0);
        detail.open_image(1);
        detail.dispatch(ModalAction::Close);
        detail.dispatch(ModalAction::Close);

        assert!(!lock.is_locked());
    }

    #[test]
    fn dropping_the_page_releases_the_lock() {
        let store = store();
        let lock = ScrollLock::new();

        {
            let mut detail = found(&store, "gallery", &lock);
            detail.open_image(1);
            assert!(lock.is_locked());
        }

        assert!(!lock.is_locked());
    }

    #[test]
    fn empty_gallery_never_opens_modal() {
        let store = store();
        let lock = ScrollLock::new();
        let mut detail = found(&store, "bare", &lock);

        detail.open_image(0);
        detail.dispatch(ModalAction::Next);

        assert!(detail.modal().is_none());
        assert!(!lock.is_locked());
    }
}
