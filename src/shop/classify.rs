//! Current vs upcoming partition.

use serde_json::Value;

use crate::config::consts::UPCOMING_PATH_HINTS;
use super::finder::ShopNodeMatch;
use super::item::ShopItem;

/// Items of every match, split by what the match path says about the day.
/// Order is match order, then element order. Duplicates are kept.
#[derive(Debug, Default, Clone)]
pub struct Buckets<'a> {
    pub current: Vec<&'a Value>,
    pub upcoming: Vec<&'a Value>,
}

impl<'a> Buckets<'a> {
    pub fn is_empty(&self) -> bool {
        self.current.is_empty() && self.upcoming.is_empty()
    }

    pub fn current_items(&self) -> impl Iterator<Item = ShopItem<'a>> + '_ {
        self.current.iter().map(|v| ShopItem(*v))
    }

    pub fn upcoming_items(&self) -> impl Iterator<Item = ShopItem<'a>> + '_ {
        self.upcoming.iter().map(|v| ShopItem(*v))
    }
}

pub fn is_upcoming(path: &str) -> bool {
    contains_any!(path, UPCOMING_PATH_HINTS)
}

pub fn classify<'a>(matches: &[ShopNodeMatch<'a>]) -> Buckets<'a> {
    let mut buckets = Buckets::default();
    for m in matches {
        let into = if is_upcoming(&m.path) { &mut buckets.upcoming } else { &mut buckets.current };
        into.extend(m.node.iter());
    }
    buckets
}
