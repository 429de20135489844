//! Terminal rendering for hoalog-core types.
//!
//! Extension traits that add colored output with owo_colors. The list view
//! mirrors the web timeline: cards alternate sides of a guide line and
//! descriptions are cut to a short preview.

use hoalog_core::presentation::{EMPTY_TIMELINE, GALLERY_HEADING, NOT_FOUND, READ_MORE};
use hoalog_core::query::{Query, format_input_date};
use hoalog_core::site_config::SiteConfig;
use hoalog_core::timeline::{TimelineEntry, TimelineLayout};
use hoalog_core::{Event, EventType};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// Description lines shown per card in the list
const PREVIEW_LINES: usize = 5;

/// Extra indent of right-hand cards
const RIGHT_INDENT: &str = "        ";

impl Render for EventType {
    fn render(&self) -> String {
        let descriptor = self.descriptor();
        let text = format!("{} {}", descriptor.icon.glyph(), descriptor.label);

        match self {
            EventType::Maintenance => text.yellow().to_string(),
            EventType::News => text.blue().to_string(),
            EventType::Improvements => text.green().to_string(),
        }
    }
}

impl Render for TimelineEntry<'_> {
    fn render(&self) -> String {
        let event = self.event;
        let indent = if self.side.is_left() { "" } else { RIGHT_INDENT };

        let mut lines = vec![
            format!("{}  {}", event.date.display_long().bold(), event.event_type.render()),
            event.title.bold().to_string(),
        ];

        let description: Vec<&str> = event.description.lines().collect();
        lines.extend(description.iter().take(PREVIEW_LINES).map(|l| l.to_string()));
        if description.len() > PREVIEW_LINES {
            lines.push("…".dimmed().to_string());
        }

        if !event.images.is_empty() {
            lines.push(format!("🖼  {}", pluralize_images(event.images.len())).dimmed().to_string());
        }
        lines.push(format!("{} → hoalog show {}", READ_MORE, event.id).dimmed().to_string());

        lines
            .into_iter()
            .map(|line| format!("{indent}{} {line}", "│".blue()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Render for TimelineLayout<'_> {
    fn render(&self) -> String {
        if self.is_empty() {
            return EMPTY_TIMELINE.dimmed().to_string();
        }

        self.entries()
            .iter()
            .map(Render::render)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl Render for Event {
    fn render(&self) -> String {
        let mut lines = vec![
            self.title.bold().to_string(),
            format!("📅 {}  {}", self.date.display_long(), self.event_type.render()),
            String::new(),
            self.description.clone(),
        ];

        // A single image is the header image; the gallery needs at least two
        match self.images.as_slice() {
            [] => {}
            [only] => {
                lines.push(String::new());
                lines.push(format!("🖼  {}", only.dimmed()));
            }
            images => {
                lines.push(String::new());
                lines.push(GALLERY_HEADING.bold().to_string());
                for (index, image) in images.iter().enumerate() {
                    lines.push(format!("  {}. {}", index + 1, image.dimmed()));
                }
            }
        }

        lines.join("\n")
    }
}

/// Site title, subtitle and a summary of the active filters.
pub fn render_header(config: &SiteConfig, query: &Query) -> String {
    let mut lines = vec![config.title.bold().to_string(), config.subtitle.dimmed().to_string()];

    let mut filters = Vec::new();
    if let Some(start) = query.start_date {
        filters.push(format!("from {}", format_input_date(start)));
    }
    if let Some(end) = query.end_date {
        filters.push(format!("to {}", format_input_date(end)));
    }
    if let Some(event_type) = query.selected_type {
        filters.push(event_type.label().to_string());
    }
    filters.push(query.sort_order.label().to_string());

    lines.push(filters.join(" · ").dimmed().to_string());
    lines.join("\n")
}

pub fn render_not_found(id: &str) -> String {
    format!(
        "{}: {}\n\nSee all events with:\n  hoalog list",
        NOT_FOUND.red(),
        id
    )
}

fn pluralize_images(count: usize) -> String {
    if count == 1 {
        "1 image".to_string()
    } else {
        format!("{count} images")
    }
}
