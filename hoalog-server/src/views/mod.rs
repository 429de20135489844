//! HTML rendering with maud.
//!
//! All interpolated text is escaped by maud, including event descriptions,
//! so data-source content can never inject markup into a page.

pub mod detail;
pub mod timeline;

use hoalog_core::EventType;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

static STYLESHEET: &str = include_str!("../../assets/style.css");

/// Characters left as-is in URL path segments and query values.
const URL_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub fn encode(s: &str) -> String {
    utf8_percent_encode(s, URL_COMPONENT).to_string()
}

pub fn event_href(id: &str) -> String {
    format!("/event/{}", encode(id))
}

/// Detail page with the image modal open at `index`.
pub fn image_href(id: &str, index: usize) -> String {
    format!("{}?image={index}", event_href(id))
}

/// Page shell. `scroll_locked` stops the page behind an open modal from
/// scrolling.
pub fn page(title: &str, scroll_locked: bool, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="uk" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(STYLESHEET)) }
            }
            body.scroll-locked[scroll_locked] {
                (body)
            }
        }
    }
}

/// Category icon and label in the category's colour.
pub fn type_badge(event_type: EventType) -> Markup {
    let descriptor = event_type.descriptor();

    html! {
        span.badge data-icon=(descriptor.icon.name()) style=(format!("color: {}", descriptor.text_color)) {
            span.icon aria-hidden="true" { (descriptor.icon.glyph()) }
            " "
            (descriptor.label)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_keeps_slug_characters() {
        assert_eq!(encode("roof-repair_2024.v2~x"), "roof-repair_2024.v2~x");
    }

    #[test]
    fn encode_escapes_reserved_characters() {
        assert_eq!(encode("a b/c?d&e"), "a%20b%2Fc%3Fd%26e");
    }

    #[test]
    fn page_marks_locked_body() {
        let locked = page("t", true, html! {}).into_string();
        let unlocked = page("t", false, html! {}).into_string();

        assert!(locked.contains(r#"class="scroll-locked""#));
        assert!(!unlocked.contains(r#"class="scroll-locked""#));
    }

    #[test]
    fn badge_shows_category_label() {
        let badge = type_badge(EventType::Improvements).into_string();
        assert!(badge.contains("Покращення"));
        assert!(badge.contains(r#"data-icon="sparkles""#));
    }
}
