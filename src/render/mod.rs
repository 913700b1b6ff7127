// src/render/mod.rs
//
// Turn classified buckets into something a human reads. Both renderers
// share the same structure: two labeled sections (current, upcoming), or
// a single placeholder when there is nothing at all.

pub mod html;
pub mod text;

use crate::config::options::RenderMode;
use crate::shop::{Buckets, ShopItem};

pub fn section_labels(mode: RenderMode) -> [&'static str; 2] {
    match mode {
        RenderMode::Minimal => ["Current Shop Items", "Upcoming Shop Items"],
        RenderMode::Full => ["📦 Current Shop Items", "🕒 Upcoming (Next Day) Items"],
    }
}

/// One card, fields already resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardView {
    pub name: String,
    pub image: String,
    pub subtitle: String,
}

impl From<ShopItem<'_>> for CardView {
    fn from(item: ShopItem<'_>) -> Self {
        Self {
            name: item.display_name(),
            image: item.image(),
            subtitle: item.subtitle(),
        }
    }
}

/// Owned copy of a cycle's buckets, for front ends that redraw every frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelView {
    pub current: Vec<CardView>,
    pub upcoming: Vec<CardView>,
}

impl PanelView {
    pub fn from_buckets(b: &Buckets) -> Self {
        Self {
            current: b.current_items().map(CardView::from).collect(),
            upcoming: b.upcoming_items().map(CardView::from).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty() && self.upcoming.is_empty()
    }
}
