/// Lightweight progress reporting used by a refresh cycle.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of candidate paths.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A candidate path was rejected; the cycle moves on.
    fn candidate_failed(&mut self, _path: &str, _reason: &str) {}

    /// A candidate path produced a usable document.
    fn fetched(&mut self, _path: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
