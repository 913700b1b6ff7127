// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

pub const DEFAULT_PAGE_FILE: &str = "nt_shop.html";

/// Write a rendered page. A path ending in a separator (or naming an
/// existing directory) gets `DEFAULT_PAGE_FILE` appended.
/// Returns the final path written to.
pub fn write_page(out: &Path, contents: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = resolve_out_path(out)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(&path, contents)?;
    logf!("File: wrote {}", path.display());
    Ok(path)
}

pub fn resolve_out_path(out: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if looks_like_dir_hint(out) || out.is_dir() {
        ensure_directory(out)?;
        Ok(out.join(DEFAULT_PAGE_FILE))
    } else {
        Ok(out.to_path_buf())
    }
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
