// src/ticker.rs
//
// The one recurring timer. A worker thread waits on a stop channel with the
// period as timeout; every timeout is a tick unless the stop flag is up.
// `stop` never waits for the thread: a tick already running (a slow fetch)
// finishes on its own, and no later tick starts.

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        mpsc::{self, RecvTimeoutError, Sender},
        Arc,
    },
    thread::{self, JoinHandle},
    time::Duration,
};

pub struct Ticker {
    stopped: Arc<AtomicBool>,
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Spawn the timer thread. The first tick fires one `period` from now.
    pub fn start<F>(period: Duration, mut tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let stopped = Arc::new(AtomicBool::new(false));
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let flag = Arc::clone(&stopped);
        let handle = thread::spawn(move || {
            loop {
                match stop_rx.recv_timeout(period) {
                    Err(RecvTimeoutError::Timeout) => {
                        if flag.load(Ordering::Acquire) { break; }
                        tick();
                    }
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            logd!("Ticker: thread exit");
        });
        logd!("Ticker: started, period={:?}", period);
        Self { stopped, stop_tx: Some(stop_tx), handle: Some(handle) }
    }

    /// Armed and not yet stopped.
    pub fn is_running(&self) -> bool {
        !self.stopped.load(Ordering::Acquire)
            && self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Raise the flag, wake the thread, let it go. Idempotent.
    pub fn stop(&mut self) {
        self.stopped.store(true, Ordering::Release);
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        if self.handle.take().is_some() {
            logd!("Ticker: stopped");
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::time::Instant;

    #[test]
    fn stop_returns_while_a_tick_is_running() {
        let started = Arc::new(AtomicUsize::new(0));
        let count = Arc::clone(&started);
        let mut t = Ticker::start(Duration::from_millis(10), move || {
            count.fetch_add(1, Ordering::SeqCst);
            thread::sleep(Duration::from_millis(800));
        });

        // let the first tick get going
        while started.load(Ordering::SeqCst) == 0 {
            thread::sleep(Duration::from_millis(5));
        }
        let t0 = Instant::now();
        t.stop();
        assert!(t0.elapsed() < Duration::from_millis(200), "stop waited {:?}", t0.elapsed());
        assert!(!t.is_running());

        // the running tick ends, nothing follows it
        thread::sleep(Duration::from_millis(1200));
        assert_eq!(started.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn no_ticks_after_stop() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let count = Arc::clone(&ticks);
        let mut t = Ticker::start(Duration::from_millis(5), move || {
            count.fetch_add(1, Ordering::SeqCst);
        });
        thread::sleep(Duration::from_millis(40));
        t.stop();
        t.stop();

        thread::sleep(Duration::from_millis(20));
        let settled = ticks.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(60));
        assert_eq!(ticks.load(Ordering::SeqCst), settled);
    }
}
