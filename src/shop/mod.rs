//! # Shop extraction
//!
//! Everything that turns a raw bootstrap document into shop items lives here.
//! The pipeline runs one way only:
//!
//! ```text
//! bootstrap::fetch_bootstrap → bootstrap::normalize → finder::find_shop_nodes
//!                                                   ↘ classify::classify → render::*
//! ```
//!
//! ## What lives here
//! - **Transport seam** (`bootstrap::BootstrapSource`): the only thing that knows
//!   where JSON comes from (the site over HTTP, or a saved snapshot on disk).
//! - **Shape discovery**: the site's bootstrap has no published schema, so the
//!   normalizer unwraps well-known wrapper keys and the finder walks the graph
//!   looking for arrays that *look* like shop items.
//! - **Read-if-present item access** (`item::ShopItem`): no item field is ever
//!   required; a missing field renders as an empty string.
//!
//! ## What does **not** live here
//! - Markup and layout: see `render` (HTML, text) and `gui` (egui widgets).
//! - Scheduling: see `inspector` and `ticker`.
//!
//! ## Conventions & invariants
//! - Matches and buckets *borrow* the normalized payload; nothing outlives a
//!   refresh cycle.
//! - The finder touches every object/array node at most once.
//! - No deduplication of items: an item reachable from two matched arrays
//!   is shown twice.
pub mod bootstrap;
pub mod classify;
pub mod finder;
pub mod item;

pub use bootstrap::{fetch_bootstrap, normalize, BootstrapSource, Fetched, FileSource, HttpSource};
pub use classify::{classify, Buckets};
pub use finder::{find_shop_nodes, ShopNodeMatch};
pub use item::ShopItem;
