// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::{
    inspector::PanelSink,
    render::PanelView,
    runner::Outcome,
};

/// What the panel shows. Written by cycle threads, read by the UI thread.
#[derive(Default)]
pub struct PanelShared {
    pub status: String,
    pub outcome: Option<Outcome>,
    pub view: PanelView,
    /// Bumped on every publish
    pub generation: u64,
}

pub struct GuiSink {
    shared: Arc<Mutex<PanelShared>>,
    ctx: egui::Context,
}

impl GuiSink {
    pub fn new(shared: Arc<Mutex<PanelShared>>, ctx: egui::Context) -> Self {
        Self { shared, ctx }
    }
}

impl PanelSink for GuiSink {
    fn status(&self, msg: &str) {
        if let Ok(mut g) = self.shared.lock() {
            g.status = s!(msg);
        }
        self.ctx.request_repaint();
    }

    fn publish(&self, outcome: Outcome) {
        // Build the owned view off the UI thread.
        let view = outcome.view();
        let status = outcome.status();
        if let Ok(mut g) = self.shared.lock() {
            g.status = status;
            g.view = view;
            g.outcome = Some(outcome);
            g.generation += 1;
        }
        self.ctx.request_repaint();
    }
}
