//! Timeline event types.
//!
//! An [`Event`] is one entry of the association's activity log: a dated,
//! categorised piece of news with an optional image gallery. Events are
//! read from the data source once and never mutated afterwards.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TimelineError;

/// The fixed set of event categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Maintenance,
    News,
    Improvements,
}

impl EventType {
    /// All categories, in the order the filter bar shows them.
    pub const ALL: [EventType; 3] = [
        EventType::Maintenance,
        EventType::News,
        EventType::Improvements,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Maintenance => "maintenance",
            EventType::News => "news",
            EventType::Improvements => "improvements",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EventType {
    type Err = TimelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| TimelineError::UnknownEventType(s.to_string()))
    }
}

/// Non-empty and ASCII digits only. Rust's integer parsing also accepts a
/// leading `+`.
pub(crate) fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// A calendar date written as `DD/MM/YYYY` in the data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventDate(NaiveDate);

impl EventDate {
    /// Parse `DD/MM/YYYY`.
    ///
    /// The month is 1-indexed in the source format, as in chrono. Dates that
    /// do not exist on the calendar (`31/02/2024`) are rejected rather than
    /// rolled over into the next month.
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.split('/').map(|part| is_digits(part).then_some(part));
        let day = parts.next()??.parse::<u32>().ok()?;
        let month = parts.next()??.parse::<u32>().ok()?;
        let year = parts.next()??.parse::<i32>().ok()?;

        if parts.next().is_some() {
            return None;
        }

        Self::from_ymd(year, month, day)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(EventDate)
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    /// Long display form used on timeline cards, e.g. `01 January 2024`.
    pub fn display_long(&self) -> String {
        self.0.format("%d %B %Y").to_string()
    }
}

impl From<NaiveDate> for EventDate {
    fn from(date: NaiveDate) -> Self {
        EventDate(date)
    }
}

impl fmt::Display for EventDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.format("%d/%m/%Y"))
    }
}

impl Serialize for EventDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EventDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        EventDate::parse(&raw).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid date '{raw}', expected DD/MM/YYYY"))
        })
    }
}

/// A single timeline entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub date: EventDate,
    pub title: String,
    pub description: String,
    /// Image URLs in gallery order. May be empty.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(rename = "type")]
    pub event_type: EventType,
}

impl Event {
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Alt text for the image at `index`, e.g. `Roof repair - Image 2`.
    pub fn image_alt(&self, index: usize) -> String {
        format!("{} - Image {}", self.title, index + 1)
    }
}
