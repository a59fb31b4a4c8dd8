//! Display-time overlap resolution for timeline cards.
//!
//! Cards reported by the activity tracker may overlap. Before rendering, the
//! shorter card keeps its full span and every longer card it overlaps is
//! trimmed around it. A longer card that fully contains a shorter one is
//! split into the segments on either side; both segments keep the original
//! card id.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineCard {
    pub id: String,
    pub start: i64,
    pub end: i64,
}

impl TimelineCard {
    pub fn new(id: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            id: id.into(),
            start,
            end,
        }
    }

    /// Span length; zero for empty or inverted cards. Never overflows, even
    /// for cards spanning the whole `i64` range.
    pub fn duration(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            self.end.abs_diff(self.start)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Half-open overlap: cards that only touch at an endpoint do not overlap.
    pub fn overlaps(&self, other: &TimelineCard) -> bool {
        self.start < other.end && other.start < self.end
    }

    fn with_span(&self, start: i64, end: i64) -> Self {
        Self {
            id: self.id.clone(),
            start,
            end,
        }
    }
}

/// Produces pairwise-disjoint cards sorted by start, shorter cards winning.
///
/// Placement order is ascending duration, then earlier start, then input
/// position, so the result does not depend on how the input is ordered
/// beyond those ties. Empty or inverted cards are dropped.
pub fn resolve_overlaps(cards: &[TimelineCard]) -> Vec<TimelineCard> {
    let mut order: Vec<usize> = (0..cards.len()).filter(|&i| !cards[i].is_empty()).collect();
    order.sort_by_key(|&i| (cards[i].duration(), cards[i].start, i));

    let mut placed: Vec<TimelineCard> = Vec::with_capacity(order.len());
    for idx in order {
        let card = &cards[idx];
        let mut segments = vec![(card.start, card.end)];

        for blocker in &placed {
            segments = segments
                .into_iter()
                .flat_map(|segment| subtract(segment, (blocker.start, blocker.end)))
                .collect();
            if segments.is_empty() {
                break;
            }
        }

        placed.extend(
            segments
                .into_iter()
                .map(|(start, end)| card.with_span(start, end)),
        );
    }

    placed.sort_by(|a, b| a.start.cmp(&b.start).then(a.end.cmp(&b.end)));
    placed
}

fn subtract(segment: (i64, i64), cut: (i64, i64)) -> Vec<(i64, i64)> {
    let (start, end) = segment;
    let (cut_start, cut_end) = cut;

    if cut_end <= start || cut_start >= end {
        return vec![segment];
    }

    let mut remaining = Vec::with_capacity(2);
    if cut_start > start {
        remaining.push((start, cut_start));
    }
    if cut_end < end {
        remaining.push((cut_end, end));
    }
    remaining
}
