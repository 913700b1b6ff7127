// src/inspector.rs
//
// The panel controller: owns the display mode and the auto-refresh timer,
// and launches refresh cycles. Front ends hand it a `PanelSink` and react
// to what gets published; they never touch the timer directly.
//
// Overlapping cycles are allowed (manual refresh during an auto tick, rapid
// clicks). Whichever finishes last is what the sink shows.

use std::{
    sync::Arc,
    thread::{self, JoinHandle},
    time::Duration,
};

use crate::{
    config::options::{DisplayMode, DisplayOptions},
    progress::Progress,
    runner::{self, Outcome},
    shop::BootstrapSource,
    ticker::Ticker,
};

/// Receives status lines and finished cycles. Called from worker threads.
pub trait PanelSink: Send + Sync + 'static {
    fn status(&self, msg: &str);
    fn publish(&self, outcome: Outcome);
}

pub struct Inspector {
    source: Arc<dyn BootstrapSource>,
    endpoints: Arc<[String]>,
    sink: Arc<dyn PanelSink>,
    mode: DisplayMode,
    interval: Duration,
    ticker: Option<Ticker>,
    closed: bool,
}

impl Inspector {
    pub fn new(
        source: Arc<dyn BootstrapSource>,
        endpoints: Vec<String>,
        sink: Arc<dyn PanelSink>,
        display: &DisplayOptions,
    ) -> Self {
        Self {
            source,
            endpoints: endpoints.into(),
            sink,
            mode: display.mode,
            interval: display.refresh_interval,
            ticker: None,
            closed: false,
        }
    }

    pub fn mode(&self) -> DisplayMode { self.mode }

    pub fn interval(&self) -> Duration { self.interval }

    pub fn is_closed(&self) -> bool { self.closed }

    /// Is the auto-refresh timer alive?
    pub fn is_ticking(&self) -> bool {
        self.ticker.as_ref().is_some_and(Ticker::is_running)
    }

    /// Initial load; arms the timer when starting in auto mode.
    pub fn start(&mut self) -> Option<JoinHandle<()>> {
        logf!("Inspector: start mode={} source={}", self.mode, self.source.describe());
        if self.mode.is_auto() {
            self.arm_timer();
        }
        self.refresh()
    }

    /// Launch one cycle on a worker thread.
    pub fn refresh(&self) -> Option<JoinHandle<()>> {
        if self.closed {
            return None;
        }
        let (source, endpoints, sink) = self.parts();
        Some(thread::spawn(move || cycle(&*source, &endpoints, &*sink)))
    }

    /// Run one cycle on the calling thread.
    pub fn refresh_blocking(&self) {
        if self.closed {
            return;
        }
        cycle(&*self.source, &self.endpoints, &*self.sink);
    }

    /// Switch mode: the old timer is always torn down first, a new one is
    /// armed only for `Auto`, and a fresh cycle is launched either way.
    pub fn set_mode(&mut self, mode: DisplayMode) -> Option<JoinHandle<()>> {
        if self.closed {
            return None;
        }
        logf!("Inspector: mode {} → {}", self.mode, mode);
        self.disarm_timer();
        self.mode = mode;
        if mode.is_auto() {
            self.arm_timer();
        }
        self.refresh()
    }

    /// Panel closed: no more timer, no more cycles.
    pub fn close(&mut self) {
        self.disarm_timer();
        self.closed = true;
        logf!("Inspector: closed");
    }

    fn parts(&self) -> (Arc<dyn BootstrapSource>, Arc<[String]>, Arc<dyn PanelSink>) {
        (Arc::clone(&self.source), Arc::clone(&self.endpoints), Arc::clone(&self.sink))
    }

    fn arm_timer(&mut self) {
        self.disarm_timer();
        let (source, endpoints, sink) = self.parts();
        self.ticker = Some(Ticker::start(self.interval, move || {
            cycle(&*source, &endpoints, &*sink)
        }));
    }

    fn disarm_timer(&mut self) {
        if let Some(mut t) = self.ticker.take() {
            t.stop();
        }
    }
}

impl Drop for Inspector {
    fn drop(&mut self) {
        self.disarm_timer();
    }
}

/// Forwards progress lines to the sink's status.
struct SinkProgress<'a> {
    sink: &'a dyn PanelSink,
}

impl Progress for SinkProgress<'_> {
    fn log(&mut self, msg: &str) {
        self.sink.status(msg);
    }
    fn candidate_failed(&mut self, path: &str, reason: &str) {
        logd!("Inspector: candidate {} failed: {}", path, reason);
    }
}

fn cycle(source: &dyn BootstrapSource, endpoints: &[String], sink: &dyn PanelSink) {
    let mut prog = SinkProgress { sink };
    let outcome = runner::run_cycle(source, endpoints, Some(&mut prog));
    sink.publish(outcome);
}
