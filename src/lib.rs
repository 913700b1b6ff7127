// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod progress;
pub mod shop;
pub mod render;
pub mod runner;
pub mod ticker;
pub mod inspector;

pub mod file;
pub mod gui;
#[cfg(feature = "cli")]
pub mod cli;
