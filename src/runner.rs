// src/runner.rs
//
// One refresh cycle: fetch → normalize → (find → classify → render on demand).
// Nothing here is kept between cycles.

use serde_json::Value;

use crate::{
    config::consts::{MSG_FETCHING, MSG_UNAVAILABLE},
    config::options::RenderMode,
    progress::Progress,
    render,
    shop::{self, BootstrapSource, Buckets, ShopNodeMatch},
};

/// A normalized payload and the candidate path it came from.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub source_path: String,
    pub payload: Value,
}

impl Snapshot {
    pub fn matches(&self) -> Vec<ShopNodeMatch<'_>> {
        shop::find_shop_nodes(&self.payload)
    }
}

/// What a cycle produced. Failures are folded into `Unavailable`; a cycle
/// never errors out.
#[derive(Debug, Clone)]
pub enum Outcome {
    Fetched(Snapshot),
    Unavailable,
}

impl Outcome {
    pub fn status(&self) -> String {
        match self {
            Outcome::Fetched(snap) => format!("Fetched from {}", snap.source_path),
            Outcome::Unavailable => s!(MSG_UNAVAILABLE),
        }
    }

    /// Body markup: buckets when fetched, the failure status otherwise.
    pub fn render_html(&self, mode: RenderMode) -> String {
        match self {
            Outcome::Fetched(snap) => {
                let matches = snap.matches();
                render::html::render(&shop::classify(&matches), mode)
            }
            Outcome::Unavailable => render::html::status(MSG_UNAVAILABLE),
        }
    }

    pub fn render_text(&self, mode: RenderMode) -> String {
        match self {
            Outcome::Fetched(snap) => {
                let matches = snap.matches();
                render::text::render(&shop::classify(&matches), mode)
            }
            Outcome::Unavailable => join!(MSG_UNAVAILABLE, "\n"),
        }
    }

    /// Owned, render-ready copy of the buckets (empty when unavailable).
    pub fn view(&self) -> render::PanelView {
        match self {
            Outcome::Fetched(snap) => {
                let matches = snap.matches();
                render::PanelView::from_buckets(&shop::classify(&matches))
            }
            Outcome::Unavailable => render::PanelView::default(),
        }
    }
}

/// Run one full cycle against `source`, trying `candidates` in order.
pub fn run_cycle(
    source: &dyn BootstrapSource,
    candidates: &[String],
    mut progress: Option<&mut dyn Progress>,
) -> Outcome {
    if let Some(p) = progress.as_deref_mut() {
        p.log(MSG_FETCHING);
    }

    let fetched = shop::fetch_bootstrap(source, candidates, progress);

    let (Some(raw), Some(source_path)) = (fetched.payload, fetched.source_path) else {
        loge!("Cycle: no bootstrap from {}", source.describe());
        return Outcome::Unavailable;
    };

    let payload = shop::normalize(Some(raw));
    let snap = Snapshot { source_path, payload };

    {
        let matches = snap.matches();
        let buckets: Buckets = shop::classify(&matches);
        logf!(
            "Cycle: OK from {} matches={} current={} upcoming={}",
            snap.source_path,
            matches.len(),
            buckets.current.len(),
            buckets.upcoming.len()
        );
    }

    Outcome::Fetched(snap)
}
