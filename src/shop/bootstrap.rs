//! Bootstrap fetch + normalize.
//!
//! The site exposes its session bootstrap under a handful of paths depending
//! on the deployment; we try them in order and keep the first one that
//! actually carries data. The decoded document is then unwrapped to the
//! payload proper.

use std::fs;
use std::path::PathBuf;

use reqwest::blocking::Client;
use serde_json::{Map, Value};

use crate::config::consts::WRAPPER_KEYS;
use crate::config::options::FetchOptions;
use crate::core::net;
use crate::error::{FetchError, Result};
use crate::progress::Progress;

/// Where bootstrap JSON comes from.
pub trait BootstrapSource: Send + Sync {
    /// Short human label, used in logs.
    fn describe(&self) -> String;

    /// Fetch and decode the document at `path`.
    fn get_json(&self, path: &str) -> Result<Value>;
}

/// The live site, reached with the user's session cookie.
pub struct HttpSource {
    opts: FetchOptions,
    client: Client,
}

impl HttpSource {
    pub fn new(opts: FetchOptions) -> Result<Self> {
        let client = net::build_client(&opts)?;
        Ok(Self { opts, client })
    }
}

impl BootstrapSource for HttpSource {
    fn describe(&self) -> String {
        s!(self.opts.origin.as_str())
    }

    fn get_json(&self, path: &str) -> Result<Value> {
        net::get_json(&self.client, &self.opts.url_for(path))
    }
}

/// A bootstrap document saved to disk. Every candidate path resolves to
/// the same file.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl BootstrapSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn get_json(&self, _path: &str) -> Result<Value> {
        let text = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Result of walking the candidate list.
#[derive(Debug, Default)]
pub struct Fetched {
    pub payload: Option<Value>,
    pub source_path: Option<String>,
}

/// Try each candidate in order; the first one yielding a non-empty object
/// (or non-empty array) wins. Failures are logged and skipped, never
/// returned.
pub fn fetch_bootstrap(
    source: &dyn BootstrapSource,
    candidates: &[String],
    mut progress: Option<&mut dyn Progress>,
) -> Fetched {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(candidates.len());
    }

    let mut fetched = Fetched::default();

    for path in candidates {
        let attempt = source.get_json(path).and_then(|json| {
            if has_data(&json) { Ok(json) } else { Err(FetchError::Empty(path.clone())) }
        });

        match attempt {
            Ok(json) => {
                logd!("Bootstrap: {} → OK via {}", path, source.describe());
                if let Some(p) = progress.as_deref_mut() {
                    p.fetched(path);
                }
                fetched = Fetched { payload: Some(json), source_path: Some(path.clone()) };
                break;
            }
            Err(e) => {
                logd!("Bootstrap: {} → skipped ({})", path, e);
                if let Some(p) = progress.as_deref_mut() {
                    p.candidate_failed(path, &e.to_string());
                }
            }
        }
    }

    if fetched.payload.is_none() {
        logw!("Bootstrap: all {} candidates failed via {}", candidates.len(), source.describe());
    }
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    fetched
}

fn has_data(v: &Value) -> bool {
    match v {
        Value::Object(m) => !m.is_empty(),
        Value::Array(a) => !a.is_empty(),
        _ => false,
    }
}

/// Resolve a decoded bootstrap document to the payload proper.
///
/// 1. `[[k, v], ...]` becomes `{k: v, ...}`; later duplicates win, first
///    position is kept.
/// 2. A mapping holding one of `WRAPPER_KEYS` yields the value under the
///    first key present, in list order.
/// 3. Anything else is returned as-is. Absent or `null` yields `{}`.
pub fn normalize(raw: Option<Value>) -> Value {
    match raw {
        None | Some(Value::Null) => Value::Object(Map::new()),
        Some(Value::Array(items)) if is_pair_list(&items) => Value::Object(pairs_to_map(items)),
        Some(Value::Object(mut map)) => {
            for key in WRAPPER_KEYS {
                if let Some(inner) = map.remove(*key) {
                    return inner;
                }
            }
            Value::Object(map)
        }
        Some(other) => other,
    }
}

fn is_pair_list(items: &[Value]) -> bool {
    !items.is_empty()
        && items
            .iter()
            .all(|it| matches!(it, Value::Array(kv) if kv.len() == 2))
}

fn pairs_to_map(items: Vec<Value>) -> Map<String, Value> {
    let mut map = Map::new();
    for pair in items {
        let Value::Array(kv) = pair else { continue };
        let mut kv = kv.into_iter();
        if let (Some(k), Some(v)) = (kv.next(), kv.next()) {
            map.insert(pair_key(k), v);
        }
    }
    map
}

fn pair_key(k: Value) -> String {
    match k {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
