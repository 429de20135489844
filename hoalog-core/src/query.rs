//! Timeline filtering and ordering.
//!
//! [`select`] is a pure function of the events and a [`Query`]; callers
//! recompute it on every render instead of caching results.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};
use crate::event::{Event, EventType, is_digits};

/// Ordering of the timeline by event date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    /// Newest first
    #[default]
    Desc,
}

impl SortOrder {
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = TimelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(TimelineError::InvalidSortOrder(s.to_string())),
        }
    }
}

/// Effective start bound when none is set.
pub fn earliest_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Effective end bound when none is set.
pub fn latest_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2100, 12, 31).unwrap_or(NaiveDate::MAX)
}

/// The user's current filter and sort selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub selected_type: Option<EventType>,
    pub sort_order: SortOrder,
}

impl Query {
    /// Reset to the default query.
    pub fn clear(&mut self) {
        *self = Query::default();
    }

    /// Select `event_type`, or deselect it if it is already selected.
    pub fn toggle_type(&mut self, event_type: EventType) {
        self.selected_type = if self.selected_type == Some(event_type) {
            None
        } else {
            Some(event_type)
        };
    }

    pub fn toggle_sort(&mut self) {
        self.sort_order = self.sort_order.toggle();
    }

    /// Copy of this query with `event_type` toggled.
    pub fn with_toggled_type(&self, event_type: EventType) -> Self {
        let mut query = self.clone();
        query.toggle_type(event_type);
        query
    }

    /// Copy of this query with the sort order flipped.
    pub fn with_toggled_sort(&self) -> Self {
        let mut query = self.clone();
        query.toggle_sort();
        query
    }

    /// Whether anything differs from the default query.
    pub fn has_active_filters(&self) -> bool {
        self.start_date.is_some()
            || self.end_date.is_some()
            || self.selected_type.is_some()
            || self.sort_order == SortOrder::Asc
    }

    pub fn start_bound(&self) -> NaiveDate {
        self.start_date.unwrap_or_else(earliest_date)
    }

    pub fn end_bound(&self) -> NaiveDate {
        self.end_date.unwrap_or_else(latest_date)
    }

    /// Inclusion test: date within the inclusive bounds and category match.
    pub fn matches(&self, event: &Event) -> bool {
        let date = event.date.naive();
        let in_range = self.start_bound() <= date && date <= self.end_bound();
        let type_match = self.selected_type.is_none_or(|t| t == event.event_type);

        in_range && type_match
    }

    /// Parse URL query parameters. Empty values count as unset.
    pub fn from_params(params: &QueryParams) -> TimelineResult<Self> {
        Ok(Query {
            start_date: parse_param(params.from.as_deref(), parse_input_date)?,
            end_date: parse_param(params.to.as_deref(), parse_input_date)?,
            selected_type: parse_param(params.event_type.as_deref(), str::parse)?,
            sort_order: parse_param(params.sort.as_deref(), str::parse)?.unwrap_or_default(),
        })
    }

    pub fn to_params(&self) -> QueryParams {
        QueryParams {
            from: self.start_date.map(format_input_date),
            to: self.end_date.map(format_input_date),
            event_type: self.selected_type.map(|t| t.to_string()),
            sort: (self.sort_order != SortOrder::default()).then(|| self.sort_order.to_string()),
        }
    }

    /// URL query string holding only the non-default fields, without the
    /// leading `?`. Empty for the default query.
    pub fn to_query_string(&self) -> String {
        let params = self.to_params();

        [
            ("from", params.from),
            ("to", params.to),
            ("type", params.event_type),
            ("sort", params.sort),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| format!("{key}={v}")))
        .collect::<Vec<_>>()
        .join("&")
    }
}

/// Query as it travels in a URL. Dates use the `YYYY-MM-DD` form of an
/// HTML date input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

fn parse_param<T>(
    value: Option<&str>,
    parse: impl Fn(&str) -> TimelineResult<T>,
) -> TimelineResult<Option<T>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse(s).map(Some),
    }
}

/// Parse an image index URL parameter (`image=N`). Empty counts as unset.
pub fn parse_image_index(value: Option<&str>) -> TimelineResult<Option<usize>> {
    parse_param(value, |s| {
        is_digits(s)
            .then(|| s.parse::<usize>().ok())
            .flatten()
            .ok_or_else(|| TimelineError::InvalidImageIndex(s.to_string()))
    })
}

/// Parse YYYY-MM-DD
pub fn parse_input_date(s: &str) -> TimelineResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| TimelineError::InvalidQueryDate(s.to_string()))
}

pub fn format_input_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Filter `events` by `query` and order them by date.
///
/// The sort is stable, so events sharing a date keep their input order in
/// both directions.
pub fn select<'a>(events: &'a [Event], query: &Query) -> Vec<&'a Event> {
    let mut selected: Vec<&Event> = events.iter().filter(|e| query.matches(e)).collect();

    match query.sort_order {
        SortOrder::Asc => selected.sort_by(|a, b| a.date.cmp(&b.date)),
        SortOrder::Desc => selected.sort_by(|a, b| b.date.cmp(&a.date)),
    }

    selected
}
