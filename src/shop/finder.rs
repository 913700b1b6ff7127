//! Heuristic search for shop-item arrays in a schema-less payload.

use std::collections::HashSet;
use std::fmt::Write;

use serde_json::Value;

use crate::config::consts::{ITEM_MARKER_KEYS, SHOP_PATH_HINTS};

/// One array that looks like a list of shop items, with the path it was
/// reached by (`shop.daily[0].items`). Borrows the payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ShopNodeMatch<'a> {
    pub path: String,
    pub node: &'a [Value],
}

/// Depth-first, pre-order. Every object/array is entered at most once,
/// keyed by address. Matching never prunes: matched arrays and every
/// mapping value are still descended into.
pub fn find_shop_nodes(root: &Value) -> Vec<ShopNodeMatch<'_>> {
    let mut walker = Walker { seen: HashSet::new(), out: Vec::new() };
    let mut path = s!();
    walker.walk(root, &mut path);
    logd!("Finder: {} node(s) visited, {} match(es)", walker.seen.len(), walker.out.len());
    walker.out
}

/// Does this array hold at least one mapping with a `name`/`title`/`type` key?
pub fn looks_like_items(items: &[Value]) -> bool {
    items.iter().any(|it| match it {
        Value::Object(map) => ITEM_MARKER_KEYS.iter().any(|k| map.contains_key(*k)),
        _ => false,
    })
}

pub fn path_hints_shop(path: &str) -> bool {
    contains_any!(path, SHOP_PATH_HINTS)
}

struct Walker<'a> {
    seen: HashSet<*const Value>,
    out: Vec<ShopNodeMatch<'a>>,
}

impl<'a> Walker<'a> {
    // Recursion depth is bounded by serde_json's nesting limit (128).
    fn walk(&mut self, v: &'a Value, path: &mut String) {
        if !(v.is_array() || v.is_object()) {
            return;
        }
        if !self.seen.insert(std::ptr::from_ref(v)) {
            return;
        }

        match v {
            Value::Array(items) => {
                if looks_like_items(items) || path_hints_shop(path) {
                    self.out.push(ShopNodeMatch { path: path.clone(), node: items });
                }
                for (i, child) in items.iter().enumerate() {
                    let mark = path.len();
                    let _ = write!(path, "[{i}]");
                    self.walk(child, path);
                    path.truncate(mark);
                }
            }
            Value::Object(map) => {
                for (key, child) in map {
                    let mark = path.len();
                    if !path.is_empty() {
                        path.push('.');
                    }
                    path.push_str(key);
                    self.walk(child, path);
                    path.truncate(mark);
                }
            }
            _ => {}
        }
    }
}
