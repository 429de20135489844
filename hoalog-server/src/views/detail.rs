//! Event detail page and image modal.

use hoalog_core::detail::EventDetail;
use hoalog_core::modal::{ClickTarget, ImageModal, ModalAction};
use hoalog_core::presentation::{BACK_TO_TIMELINE, GALLERY_HEADING, NOT_FOUND};
use hoalog_core::scroll_lock::ScrollLock;
use hoalog_core::site_config::SiteConfig;
use maud::{Markup, html};

use super::{event_href, image_href, type_badge};

/// Where following `action` from the open modal leads.
fn action_href(id: &str, modal: &ImageModal, action: ModalAction) -> String {
    match action {
        ModalAction::Close => event_href(id),
        ModalAction::Previous => image_href(id, modal.previous_index()),
        ModalAction::Next => image_href(id, modal.next_index()),
    }
}

fn back_link() -> Markup {
    html! {
        a.back href="/" { "← " (BACK_TO_TIMELINE) }
    }
}

pub fn page(config: &SiteConfig, detail: &EventDetail, lock: &ScrollLock) -> Markup {
    let event = detail.event();

    let body = html! {
        main.container.narrow {
            (back_link())

            article.detail {
                div.hero-image {
                    @match detail.primary_image() {
                        Some(image) => {
                            img src=(image) alt=(event.title);
                        }
                        None => {
                            img.faded src=(config.placeholder_image) alt=(event.title);
                        }
                    }
                }

                div.detail-body {
                    div.detail-meta {
                        time datetime=(event.date.naive().to_string()) {
                            "📅 " (event.date.display_long())
                        }
                        (type_badge(event.event_type))
                    }

                    h1 { (event.title) }
                    p.description.full { (event.description) }

                    @if detail.has_gallery() {
                        section.gallery {
                            h2 { (GALLERY_HEADING) }
                            div.grid {
                                @for (index, image) in detail.gallery() {
                                    a href=(image_href(&event.id, index)) {
                                        img src=(image) alt=(event.image_alt(index));
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        @if let Some(modal) = detail.modal() {
            (modal_view(&event.id, &event.title, modal))
        }
    };

    super::page(&event.title, lock.is_locked(), body)
}

/// The backdrop is a sibling of the content, so activating the image never
/// reaches it.
fn modal_view(id: &str, title: &str, modal: &ImageModal) -> Markup {
    let href = |target: ClickTarget| {
        modal
            .click(target)
            .map(|action| action_href(id, modal, action))
    };

    html! {
        div.modal role="dialog" aria-modal="true" {
            @if let Some(close) = href(ClickTarget::Backdrop) {
                a.backdrop href=(close) aria-label="Close" {}
            }
            @if let Some(close) = href(ClickTarget::CloseButton) {
                a.close href=(close) aria-label="Close" { "✕" }
            }

            div.modal-content {
                img src=(modal.current_image()) alt=(format!("{title} - Image {}", modal.index() + 1));

                @if let Some(previous) = href(ClickTarget::PreviousButton) {
                    a.nav.prev href=(previous) aria-label="Previous image" { "‹" }
                }
                @if let Some(next) = href(ClickTarget::NextButton) {
                    a.nav.next href=(next) aria-label="Next image" { "›" }
                }

                div.counter { (modal.counter()) }
            }
        }
    }
}

pub fn not_found(config: &SiteConfig) -> Markup {
    let body = html! {
        main.container.narrow {
            div.empty {
                h1 { (NOT_FOUND) }
                (back_link())
            }
        }
    };

    super::page(&config.title, false, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hoalog_core::detail::DetailPage;
    use hoalog_core::store::EventStore;

    fn store() -> EventStore {
        EventStore::from_json(
            r#"{"events": [
                {"id": "gallery", "date": "15/06/2024", "title": "Gallery", "description": "<b>bold</b>",
                 "images": ["https://example.com/0.jpg", "https://example.com/1.jpg", "https://example.com/2.jpg"],
                 "type": "improvements"},
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
    fn description_is_escaped() {
        let store = store();
        let lock = ScrollLock::new();
        let detail = found(&store, "gallery", &lock);

        let html = page(&SiteConfig::default(), &detail, &lock).into_string();

        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(!html.contains("<b>bold</b>"));
    }

    #[test]
    fn gallery_tiles_open_the_modal() {
        let store = store();
        let lock = ScrollLock::new();
        let detail = found(&store, "gallery", &lock);

        let html = page(&SiteConfig::default(), &detail, &lock).into_string();

        assert!(html.contains(GALLERY_HEADING));
        assert!(html.contains(r#"href="/event/gallery?image=2""#));
        assert!(!html.contains(r#"class="modal""#));
    }

    #[test]
    fn missing_images_fall_back_to_faded_placeholder() {
        let store = store();
        let lock = ScrollLock::new();
        let detail = found(&store, "bare", &lock);
        let config = SiteConfig::default();

        let html = page(&config, &detail, &lock).into_string();

        assert!(html.contains(r#"class="faded""#));
        assert!(html.contains(&config.placeholder_image));
        assert!(!html.contains(GALLERY_HEADING));
    }

    #[test]
    fn open_modal_locks_body_and_wraps_navigation() {
        let store = store();
        let lock = ScrollLock::new();
        let mut detail = found(&store, "gallery", &lock);
        detail.open_image(0);

        let html = page(&SiteConfig::default(), &detail, &lock).into_string();

        assert!(html.contains(r#"class="scroll-locked""#));
        assert!(html.contains("1 / 3"));
        assert!(html.contains(r#"href="/event/gallery?image=2" aria-label="Previous image""#));
        assert!(html.contains(r#"href="/event/gallery?image=1" aria-label="Next image""#));
        assert!(html.contains(r#"href="/event/gallery" aria-label="Close""#));
    }

    #[test]
    fn not_found_page_links_back() {
        let html = not_found(&SiteConfig::default()).into_string();

        assert!(html.contains(NOT_FOUND));
        assert!(html.contains(BACK_TO_TIMELINE));
        assert!(html.contains(r#"href="/""#));
    }
}
