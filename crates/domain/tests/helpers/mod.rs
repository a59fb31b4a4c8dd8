#![allow(dead_code)]
use favicon_domain::TimelineCard;

pub fn card(id: &str, start: i64, end: i64) -> TimelineCard {
    TimelineCard::new(id, start, end)
}
