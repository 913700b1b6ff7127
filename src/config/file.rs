// src/config/file.rs
//
// Plain `key=value` settings file. Unknown keys and unparsable values are
// ignored so a stale file never blocks startup.
use std::{fs, io, path::Path, time::Duration};

use super::options::{AppOptions, DisplayMode};

pub fn load(path: &Path) -> AppOptions {
    let mut opts = AppOptions::default();
    if !path.exists() {
        return opts;
    }
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) => {
            logw!("Config: could not read {}: {}", path.display(), e);
            return opts;
        }
    };
    apply(&mut opts, &text);
    logd!("Config: loaded {}", path.display());
    opts
}

/// Overlay every recognised `key=value` line of `text` onto `opts`.
pub fn apply(opts: &mut AppOptions, text: &str) {
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        let Some(eq) = line.find('=') else { continue };
        let key = line[..eq].trim();
        let val = line[eq + 1..].trim();
        match key {
            "origin" if !val.is_empty() => opts.fetch.origin = s!(val.trim_end_matches('/')),
            "cookie" => opts.fetch.cookie = if val.is_empty() { None } else { Some(s!(val)) },
            "mode" => match val.parse::<DisplayMode>() {
                Ok(m) => opts.display.mode = m,
                Err(e) => logw!("Config: {}", e),
            },
            "interval_secs" => match val.parse::<u64>() {
                Ok(secs) if secs > 0 => opts.display.refresh_interval = Duration::from_secs(secs),
                _ => logw!("Config: bad interval_secs '{}'", val),
            },
            "endpoints" => {
                let list: Vec<String> = val
                    .split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(String::from)
                    .collect();
                if !list.is_empty() {
                    opts.fetch.endpoints = list;
                }
            }
            _ => {}
        }
    }
}

pub fn to_text(opts: &AppOptions) -> String {
    let mut s = s!();
    s.push_str(&format!("origin={}\n", opts.fetch.origin));
    if let Some(c) = &opts.fetch.cookie {
        s.push_str(&format!("cookie={}\n", c));
    }
    s.push_str(&format!("mode={}\n", opts.display.mode));
    s.push_str(&format!("interval_secs={}\n", opts.display.refresh_interval.as_secs()));
    s.push_str(&format!("endpoints={}\n", opts.fetch.endpoints.join(",")));
    s
}

pub fn save(path: &Path, opts: &AppOptions) -> io::Result<()> {
    fs::write(path, to_text(opts))
}
