//! Timeline list page.

use hoalog_core::carousel::Carousel;
use hoalog_core::error::TimelineResult;
use hoalog_core::presentation::{APPLY_FILTERS, CLEAR_FILTERS, EMPTY_TIMELINE, READ_MORE};
use hoalog_core::query::{Query, SortOrder, format_input_date, parse_image_index};
use hoalog_core::site_config::SiteConfig;
use hoalog_core::timeline::{TimelineEntry, TimelineLayout};
use hoalog_core::{Event, EventType};
use maud::{Markup, html};
use serde::Deserialize;

use super::{encode, event_href, type_badge};

/// Reveals a slide image once it has loaded and drops the pulse beneath it.
const MARK_LOADED: &str = "this.classList.add('loaded');this.previousElementSibling?.remove()";

/// `card` and `image` as they arrive in the URL.
#[derive(Debug, Default, Deserialize)]
pub struct FocusParams {
    pub card: Option<String>,
    pub image: Option<String>,
}

/// Carousel position carried in the URL: one card may be scrolled to a
/// slide other than the first.
#[derive(Debug, Default)]
pub struct CarouselFocus {
    pub card: Option<String>,
    pub image: Option<usize>,
}

impl CarouselFocus {
    pub fn from_params(params: FocusParams) -> TimelineResult<Self> {
        Ok(CarouselFocus {
            image: parse_image_index(params.image.as_deref())?,
            card: params.card.filter(|card| !card.is_empty()),
        })
    }

    pub fn carousel_for(&self, event: &Event) -> Carousel {
        match &self.card {
            Some(id) if *id == event.id => {
                Carousel::at(event.images.len(), self.image.unwrap_or(0))
            }
            _ => Carousel::new(event.images.len()),
        }
    }
}

/// Link to the list view for `query`, with optional extra parameters.
fn list_href(query: &Query, extra: Option<String>) -> String {
    let params: Vec<String> = [Some(query.to_query_string()), extra]
        .into_iter()
        .flatten()
        .filter(|p| !p.is_empty())
        .collect();

    if params.is_empty() {
        "/".to_string()
    } else {
        format!("/?{}", params.join("&"))
    }
}

fn anchor(event: &Event) -> String {
    format!("event-{}", event.id)
}

/// Link moving `event`'s carousel to slide `index`, keeping the query.
fn slide_href(query: &Query, event: &Event, index: usize) -> String {
    let extra = format!("card={}&image={index}", encode(&event.id));
    format!("{}#event-{}", list_href(query, Some(extra)), encode(&event.id))
}

pub fn page(
    config: &SiteConfig,
    query: &Query,
    layout: &TimelineLayout,
    focus: &CarouselFocus,
) -> Markup {
    let body = html! {
        main.container {
            header.hero {
                h1 { (config.title) }
                p.subtitle { (config.subtitle) }
                (filters(query))
            }

            section.timeline {
                @if layout.show_guide_line() {
                    div.guide-line {}
                }

                @if layout.is_empty() {
                    div.empty {
                        p { (EMPTY_TIMELINE) }
                    }
                } @else {
                    div.items {
                        @for entry in layout.entries() {
                            (card(config, query, entry, focus))
                        }
                    }
                }
            }
        }
    };

    super::page(&config.title, false, body)
}

fn filters(query: &Query) -> Markup {
    let mut cleared = query.clone();
    cleared.clear();

    html! {
        div.filters {
            form.date-range method="get" action="/" {
                span.icon aria-hidden="true" { "📅" }
                input type="date" name="from"
                    value=(query.start_date.map(format_input_date).unwrap_or_default());
                span { "to" }
                input type="date" name="to"
                    value=(query.end_date.map(format_input_date).unwrap_or_default());
                @if let Some(event_type) = query.selected_type {
                    input type="hidden" name="type" value=(event_type.as_str());
                }
                @if query.sort_order != SortOrder::default() {
                    input type="hidden" name="sort" value=(query.sort_order.as_str());
                }
                button type="submit" { (APPLY_FILTERS) }
            }

            nav.type-filters {
                span.icon aria-hidden="true" { "⏷" }
                @for event_type in EventType::ALL {
                    a.chip.selected[query.selected_type == Some(event_type)]
                        href=(list_href(&query.with_toggled_type(event_type), None)) {
                        (event_type.label())
                    }
                }
            }

            a.sort-toggle href=(list_href(&query.with_toggled_sort(), None)) {
                "⇅ " (query.sort_order.label())
            }

            @if query.has_active_filters() {
                a.clear href=(list_href(&cleared, None)) { "✕ " (CLEAR_FILTERS) }
            } @else {
                span.clear.disabled aria-disabled="true" { "✕ " (CLEAR_FILTERS) }
            }
        }
    }
}

fn card(config: &SiteConfig, query: &Query, entry: &TimelineEntry, focus: &CarouselFocus) -> Markup {
    let event = entry.event;
    let descriptor = event.event_type.descriptor();
    let side = if entry.side.is_left() { "left" } else { "right" };
    let carousel = focus.carousel_for(event);

    html! {
        article.timeline-item.(side) id=(anchor(event)) {
            div.marker {
                div.meta {
                    span.date { (event.date.display_long()) }
                    (type_badge(event.event_type))
                }
                div.dot style=(format!("background: {}", descriptor.color)) {}
            }

            div.card-column {
                div.card {
                    (slider(config, query, event, &carousel))
                    div.card-body {
                        h3 { (event.title) }
                        p.description { (event.description) }
                        a.more href=(event_href(&event.id)) { (READ_MORE) " →" }
                    }
                }
            }
        }
    }
}

fn slider(config: &SiteConfig, query: &Query, event: &Event, carousel: &Carousel) -> Markup {
    html! {
        div.slider {
            @if carousel.is_placeholder() {
                div.slide.placeholder {
                    img src=(config.placeholder_image) alt=(event.title);
                    span.placeholder-icon aria-hidden="true" { "🖼" }
                }
            } @else {
                div.strip style=(format!("transform: translateX(-{}%)", carousel.offset_percent())) {
                    @for (index, image) in event.images.iter().enumerate() {
                        div.slide {
                            @if !carousel.is_loaded(index) {
                                div.pulse {}
                            }
                            img.loaded[carousel.is_loaded(index)]
                                src=(image)
                                alt=(event.image_alt(index))
                                onload=(MARK_LOADED);
                        }
                    }
                }
            }

            @if carousel.has_controls() {
                a.nav.prev href=(slide_href(query, event, carousel.previous_index()))
                    aria-label="Previous image" { "‹" }
                a.nav.next href=(slide_href(query, event, carousel.next_index()))
                    aria-label="Next image" { "›" }
                div.indicators {
                    @for (index, active) in carousel.indicators() {
                        a.indicator.active[active] href=(slide_href(query, event, index))
                            aria-label=(event.image_alt(index)) {}
                    }
                }
            }
        }
    }
}
