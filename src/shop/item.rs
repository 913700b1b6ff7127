//! Read-if-present view over one shop item.

use serde_json::Value;

use crate::config::consts::{IMAGE_KEYS, KIND_KEYS, NAME_KEYS, PRICE_KEYS};

/// Borrowed view of an array element. Non-object elements expose no fields.
#[derive(Debug, Clone, Copy)]
pub struct ShopItem<'a>(pub &'a Value);

impl<'a> ShopItem<'a> {
    /// First present of `name`, `title`, `id`.
    pub fn display_name(&self) -> String {
        self.first_present(NAME_KEYS).unwrap_or_default()
    }

    /// First present of `image`, `img`, `icon`, `imageURL`.
    pub fn image(&self) -> String {
        self.first_present(IMAGE_KEYS).unwrap_or_default()
    }

    /// First present of `type`, `category`.
    pub fn kind(&self) -> String {
        self.first_present(KIND_KEYS).unwrap_or_default()
    }

    /// First non-null of `price`, `cash`. Zero is a price; empty text is not.
    pub fn price(&self) -> Option<String> {
        let v = PRICE_KEYS
            .iter()
            .filter_map(|k| self.field(k))
            .find(|v| !v.is_null())?;
        let text = value_text(v);
        if text.is_empty() { None } else { Some(text) }
    }

    /// `kind` followed by ` • price` when there is one.
    pub fn subtitle(&self) -> String {
        match self.price() {
            Some(p) => join!(self.kind(), " • ", &p),
            None => self.kind(),
        }
    }

    fn field(&self, key: &str) -> Option<&'a Value> {
        self.0.as_object()?.get(key)
    }

    fn first_present(&self, keys: &[&str]) -> Option<String> {
        keys.iter()
            .filter_map(|k| self.field(k))
            .find(|v| is_present(v))
            .map(value_text)
    }
}

/// Truthiness as the site's own scripts see it: null, false, "" and 0 are absent.
fn is_present(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => !matches!(n.as_f64(), Some(f) if f == 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn value_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
