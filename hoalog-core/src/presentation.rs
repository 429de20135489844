//! Display descriptors and user-facing strings.
//!
//! Each [`EventType`] maps to exactly one [`TypeDescriptor`]; the mapping is
//! an exhaustive `match`, so adding a category will not compile until it has
//! an icon, colours and a label.

use crate::event::EventType;
use crate::query::SortOrder;

pub const SITE_TITLE: &str = "ОСББ Лесі Українки 38Б";
pub const SITE_SUBTITLE: &str = "Tracking our progress through time";

pub const PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1451187580459-43490279c0fa?auto=format&fit=crop&q=80&w=1200";

pub const EMPTY_TIMELINE: &str = "Немає івентів для показу. Відредагуйте або очистіть фільтри";
pub const CLEAR_FILTERS: &str = "Очистити";
pub const APPLY_FILTERS: &str = "Застосувати";
pub const READ_MORE: &str = "Більше інформації";

pub const NOT_FOUND: &str = "Event not found";
pub const BACK_TO_TIMELINE: &str = "Back to Timeline";
pub const GALLERY_HEADING: &str = "Gallery";

/// Icon shown next to a category label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Wrench,
    Newspaper,
    Sparkles,
}

impl Icon {
    pub fn name(&self) -> &'static str {
        match self {
            Icon::Wrench => "wrench",
            Icon::Newspaper => "newspaper",
            Icon::Sparkles => "sparkles",
        }
    }

    /// Single-glyph rendering for surfaces without an icon font.
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Wrench => "🔧",
            Icon::Newspaper => "📰",
            Icon::Sparkles => "✨",
        }
    }
}

/// How a category is presented: icon, dot colour, text colour and label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeDescriptor {
    pub icon: Icon,
    /// Timeline dot colour (CSS).
    pub color: &'static str,
    /// Label colour (CSS).
    pub text_color: &'static str,
    pub label: &'static str,
}

impl EventType {
    pub const fn descriptor(self) -> TypeDescriptor {
        match self {
            EventType::Maintenance => TypeDescriptor {
                icon: Icon::Wrench,
                color: "#f59e0b",
                text_color: "#d97706",
                label: "Ремонтні роботи",
            },
            EventType::News => TypeDescriptor {
                icon: Icon::Newspaper,
                color: "#3b82f6",
                text_color: "#2563eb",
                label: "Новини",
            },
            EventType::Improvements => TypeDescriptor {
                icon: Icon::Sparkles,
                color: "#22c55e",
                text_color: "#16a34a",
                label: "Покращення",
            },
        }
    }

    pub fn label(self) -> &'static str {
        self.descriptor().label
    }
}

impl SortOrder {
    /// Label of the sort toggle while this order is active.
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Desc => "Спочатку новіші",
            SortOrder::Asc => "Спочатку старіші",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_distinct_presentation() {
        let descriptors: Vec<_> = EventType::ALL.into_iter().map(EventType::descriptor).collect();

        for (i, a) in descriptors.iter().enumerate() {
            for b in &descriptors[i + 1..] {
                assert_ne!(a.icon, b.icon);
                assert_ne!(a.color, b.color);
                assert_ne!(a.label, b.label);
            }
        }
    }

    #[test]
    fn labels_match_filter_buttons() {
        assert_eq!(EventType::Maintenance.label(), "Ремонтні роботи");
        assert_eq!(EventType::News.label(), "Новини");
        assert_eq!(EventType::Improvements.label(), "Покращення");
    }

    #[test]
    fn sort_label_describes_current_order() {
        assert_eq!(SortOrder::Desc.label(), "Спочатку новіші");
        assert_eq!(SortOrder::Asc.label(), "Спочатку старіші");
    }
}
