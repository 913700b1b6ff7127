// src/render/html.rs
//
// HTML fragments shaped like the in-page panel: inline styles, no external
// CSS. Every piece of item text goes through `core::html::escape`,
// attributes included.

use serde_json::Value;

use crate::config::consts::MSG_NO_ITEMS;
use crate::config::options::RenderMode;
use crate::core::html::escape;
use crate::shop::{Buckets, ShopItem};

use super::section_labels;

const PANEL_STYLE: &str = "position:fixed;right:12px;top:80px;width:400px;max-height:80vh;\
overflow-y:auto;background:rgba(0,0,0,0.9);color:#fff;padding:12px;border-radius:10px;\
z-index:99999;font-family:Arial,sans-serif;font-size:13px;box-shadow:0 8px 24px rgba(0,0,0,0.6);";
const GRID_STYLE: &str = "display:grid;grid-template-columns:1fr 1fr;gap:6px;margin-top:4px;";
const CARD_STYLE: &str = "background:rgba(255,255,255,0.05);padding:6px;border-radius:6px;\
display:flex;align-items:center;gap:6px;";
const IMG_STYLE: &str = "width:40px;height:40px;object-fit:cover;border-radius:4px;";

/// Body markup for one cycle's buckets.
pub fn render(buckets: &Buckets, mode: RenderMode) -> String {
    if buckets.is_empty() {
        return status(MSG_NO_ITEMS);
    }
    let [cur, up] = section_labels(mode);
    match mode {
        RenderMode::Minimal => join!(
            &minimal_section(cur, &buckets.current),
            &minimal_section(up, &buckets.upcoming),
        ),
        RenderMode::Full => join!(
            &full_section(cur, &buckets.current),
            &full_section(up, &buckets.upcoming),
        ),
    }
}

/// The status line element.
pub fn status(msg: &str) -> String {
    format!(r#"<div id="nt-status">{}</div>"#, escape(msg))
}

fn minimal_section(label: &str, items: &[&Value]) -> String {
    let names: Vec<String> = items
        .iter()
        .map(|v| escape(&ShopItem(*v).display_name()))
        .collect();
    format!(
        r#"<div style="margin-bottom:8px;"><strong>{}</strong><br>{}</div>"#,
        escape(label),
        names.join(", ")
    )
}

fn full_section(label: &str, items: &[&Value]) -> String {
    let mut html = vec![format!(
        r#"<div style="margin-bottom:14px;"><strong style="font-size:14px">{}</strong>"#,
        escape(label)
    )];
    html.push(format!(r#"<div style="{GRID_STYLE}">"#));
    for v in items {
        html.push(card(ShopItem(*v)));
    }
    html.push(s!("</div></div>"));
    html.concat()
}

fn card(item: ShopItem) -> String {
    format!(
        concat!(
            r#"<div style="{}">"#,
            r#"<img src="{}" style="{}">"#,
            r#"<div><strong>{}</strong><div style="font-size:11px;color:#ccc">{}</div></div>"#,
            "</div>"
        ),
        CARD_STYLE,
        escape(&item.image()),
        IMG_STYLE,
        escape(&item.display_name()),
        escape(&item.subtitle()),
    )
}

/// Standalone document: the panel chrome around a rendered body.
pub fn page(title: &str, status_line: &str, body: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>{title}</title></head>\n",
            "<body style=\"background:#111\">\n",
            "<div id=\"nt-shop-panel\" style=\"{style}\">\n",
            "<div style=\"margin-bottom:8px;\"><strong style=\"font-size:16px\">{title}</strong></div>\n",
            "{status}\n<div id=\"nt-body\">{body}</div>\n",
            "</div>\n</body></html>\n"
        ),
        title = escape(title),
        style = PANEL_STYLE,
        status = status(status_line),
        body = body,
    )
}
