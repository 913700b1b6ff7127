// src/render/text.rs
//
// Terminal rendering for the CLI. Same sections as the HTML renderer.

use serde_json::Value;

use crate::config::consts::MSG_NO_ITEMS;
use crate::config::options::RenderMode;
use crate::shop::{Buckets, ShopItem};

use super::section_labels;

pub fn render(buckets: &Buckets, mode: RenderMode) -> String {
    if buckets.is_empty() {
        return join!(MSG_NO_ITEMS, "\n");
    }
    let [cur, up] = section_labels(mode);
    let mut out = s!();
    for (label, items) in [(cur, &buckets.current), (up, &buckets.upcoming)] {
        match mode {
            RenderMode::Minimal => minimal_section(&mut out, label, items),
            RenderMode::Full => full_section(&mut out, label, items),
        }
    }
    out
}

fn minimal_section(out: &mut String, label: &str, items: &[&Value]) {
    let names: Vec<String> = items.iter().map(|v| ShopItem(*v).display_name()).collect();
    out.push_str(label);
    out.push('\n');
    out.push_str("  ");
    out.push_str(&names.join(", "));
    out.push('\n');
}

fn full_section(out: &mut String, label: &str, items: &[&Value]) {
    out.push_str(label);
    out.push('\n');
    for v in items {
        let item = ShopItem(*v);
        out.push_str("  - ");
        out.push_str(&item.display_name());
        let sub = item.subtitle();
        if !sub.is_empty() {
            out.push_str(&format!(" ({sub})"));
        }
        let img = item.image();
        if !img.is_empty() {
            out.push_str(&format!(" <{img}>"));
        }
        out.push('\n');
    }
}
