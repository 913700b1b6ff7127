// tests/inspector.rs
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use nt_shop::config::options::{DisplayMode, DisplayOptions};
use nt_shop::error::Result;
use nt_shop::inspector::{Inspector, PanelSink};
use nt_shop::runner::Outcome;
use nt_shop::shop::BootstrapSource;
use serde_json::{json, Value};

const TICK: Duration = Duration::from_millis(20);

/// Counts requests; the first candidate always answers.
#[derive(Default)]
struct Counting {
    hits: AtomicUsize,
}

impl BootstrapSource for Counting {
    fn describe(&self) -> String {
        "counting".into()
    }
    fn get_json(&self, _path: &str) -> Result<Value> {
        self.hits.fetch_add(1, Ordering::SeqCst);
        Ok(json!({ "shop": [ { "name": "Item" } ] }))
    }
}

/// Every request hangs like a dead server until the client timeout.
struct Stalling {
    hits: AtomicUsize,
    delay: Duration,
}

impl BootstrapSource for Stalling {
    fn describe(&self) -> String {
        "stalling".into()
    }
    fn get_json(&self, _path: &str) -> Result<Value> {
        self.hits.fetch_add(1, Ordering::SeqCst);
        thread::sleep(self.delay);
        Ok(json!({ "shop": [] }))
    }
}

#[derive(Default)]
struct Collect {
    statuses: Mutex<Vec<String>>,
    published: AtomicUsize,
}

impl PanelSink for Collect {
    fn status(&self, msg: &str) {
        self.statuses.lock().unwrap().push(msg.to_string());
    }
    fn publish(&self, _outcome: Outcome) {
        self.published.fetch_add(1, Ordering::SeqCst);
    }
}

fn inspector(mode: DisplayMode) -> (Inspector, Arc<Counting>, Arc<Collect>) {
    let src = Arc::new(Counting::default());
    let sink = Arc::new(Collect::default());
    let display = DisplayOptions { mode, refresh_interval: TICK };
    let insp = Inspector::new(
        Arc::clone(&src) as Arc<dyn BootstrapSource>,
        vec!["/api/v2/bootstrap".to_string()],
        Arc::clone(&sink) as Arc<dyn PanelSink>,
        &display,
    );
    (insp, src, sink)
}

#[test]
fn start_in_minimal_fetches_once_without_timer() {
    let (mut insp, src, sink) = inspector(DisplayMode::Minimal);
    insp.start().unwrap().join().unwrap();
    assert!(!insp.is_ticking());

    thread::sleep(TICK * 5);
    assert_eq!(src.hits.load(Ordering::SeqCst), 1);
    assert_eq!(sink.published.load(Ordering::SeqCst), 1);
    assert_eq!(sink.statuses.lock().unwrap()[0], "Fetching bootstrap...");
}

#[test]
fn auto_mode_keeps_fetching() {
    let (mut insp, src, _sink) = inspector(DisplayMode::Auto);
    insp.start().unwrap().join().unwrap();
    assert!(insp.is_ticking());

    thread::sleep(TICK * 10);
    assert!(src.hits.load(Ordering::SeqCst) >= 3);
    insp.close();
}

#[test]
fn leaving_auto_stops_scheduled_fetches() {
    let (mut insp, src, _sink) = inspector(DisplayMode::Auto);
    insp.start().unwrap().join().unwrap();
    thread::sleep(TICK * 4);

    insp.set_mode(DisplayMode::Full).unwrap().join().unwrap();
    assert_eq!(insp.mode(), DisplayMode::Full);
    assert!(!insp.is_ticking());

    // a tick that was already fetching may still land
    thread::sleep(TICK * 2);
    let settled = src.hits.load(Ordering::SeqCst);
    thread::sleep(TICK * 6);
    assert_eq!(src.hits.load(Ordering::SeqCst), settled);
}

#[test]
fn reentering_auto_replaces_the_timer() {
    let (mut insp, src, _sink) = inspector(DisplayMode::Auto);
    insp.start().unwrap().join().unwrap();
    insp.set_mode(DisplayMode::Auto).unwrap().join().unwrap();
    insp.set_mode(DisplayMode::Auto).unwrap().join().unwrap();
    assert!(insp.is_ticking());

    // Three live timers would roughly triple the rate.
    let before = src.hits.load(Ordering::SeqCst);
    thread::sleep(TICK * 10);
    let ticks = src.hits.load(Ordering::SeqCst) - before;
    assert!(ticks <= 12, "too many ticks: {ticks}");
    insp.close();
}

#[test]
fn closed_inspector_does_nothing() {
    let (mut insp, src, sink) = inspector(DisplayMode::Auto);
    insp.start().unwrap().join().unwrap();
    insp.close();
    assert!(insp.is_closed());
    assert!(!insp.is_ticking());

    thread::sleep(TICK * 2);
    let settled = src.hits.load(Ordering::SeqCst);
    assert!(insp.refresh().is_none());
    assert!(insp.set_mode(DisplayMode::Auto).is_none());
    insp.refresh_blocking();
    thread::sleep(TICK * 5);
    assert_eq!(src.hits.load(Ordering::SeqCst), settled);
    assert_eq!(sink.published.load(Ordering::SeqCst), settled);
}

#[test]
fn leaving_auto_does_not_wait_for_a_slow_tick() {
    let src = Arc::new(Stalling { hits: AtomicUsize::new(0), delay: Duration::from_secs(2) });
    let sink = Arc::new(Collect::default());
    let display = DisplayOptions { mode: DisplayMode::Auto, refresh_interval: TICK };
    let mut insp = Inspector::new(
        Arc::clone(&src) as Arc<dyn BootstrapSource>,
        vec!["/api/v2/bootstrap".to_string()],
        Arc::clone(&sink) as Arc<dyn PanelSink>,
        &display,
    );
    let _initial = insp.start();

    // initial cycle plus the first tick are both stuck in the source
    while src.hits.load(Ordering::SeqCst) < 2 {
        thread::sleep(Duration::from_millis(5));
    }

    let t0 = Instant::now();
    let _refresh = insp.set_mode(DisplayMode::Full);
    assert!(t0.elapsed() < Duration::from_millis(500), "set_mode took {:?}", t0.elapsed());
    assert!(!insp.is_ticking());

    let t0 = Instant::now();
    insp.close();
    drop(insp);
    assert!(t0.elapsed() < Duration::from_millis(500), "close took {:?}", t0.elapsed());
}
