// src/gui/components/mod.rs
pub mod body;
pub mod toolbar;
