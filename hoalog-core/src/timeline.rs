//! Layout of the timeline list.

use crate::event::Event;
use crate::query::{Query, select};
use crate::store::EventStore;

/// Which side of the guide line a card sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Even positions go left, odd positions right.
    pub fn for_position(position: usize) -> Self {
        if position % 2 == 0 { Side::Left } else { Side::Right }
    }

    pub fn is_left(self) -> bool {
        self == Side::Left
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineEntry<'a> {
    pub event: &'a Event,
    pub side: Side,
}

/// The selected events in display order, each assigned a side.
///
/// Sides are assigned by position in the current selection, so they are
/// reassigned whenever the query changes.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineLayout<'a> {
    entries: Vec<TimelineEntry<'a>>,
}

impl<'a> TimelineLayout<'a> {
    pub fn build(selected: Vec<&'a Event>) -> Self {
        let entries = selected
            .into_iter()
            .enumerate()
            .map(|(position, event)| TimelineEntry {
                event,
                side: Side::for_position(position),
            })
            .collect();

        TimelineLayout { entries }
    }

    pub fn for_query(store: &'a EventStore, query: &Query) -> Self {
        Self::build(select(store.events(), query))
    }

    pub fn entries(&self) -> &[TimelineEntry<'a>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// An empty layout renders the empty-state message instead of cards.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn show_guide_line(&self) -> bool {
        !self.is_empty()
    }
}
