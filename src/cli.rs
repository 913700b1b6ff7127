// src/cli.rs
use std::{
    path::PathBuf,
    sync::{mpsc, Arc, Mutex},
    time::Duration,
};

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{eyre, Result};

use crate::{
    config::{consts::CONFIG_FILE, file as config_file, options::DisplayMode},
    file,
    inspector::{Inspector, PanelSink},
    render,
    runner::Outcome,
    shop::{BootstrapSource, FileSource, HttpSource},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Html,
}

/// Show current & upcoming NitroType shop items using your session cookie.
#[derive(Parser, Debug)]
#[command(name = "nt_shop", version, about)]
pub struct Args {
    /// minimal | full | auto
    #[arg(long)]
    pub mode: Option<DisplayMode>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Site origin, e.g. https://www.nitrotype.com
    #[arg(long)]
    pub origin: Option<String>,

    /// Session cookie header, as copied from the browser
    #[arg(long, env = "NT_SHOP_COOKIE", hide_env_values = true)]
    pub cookie: Option<String>,

    /// Read the bootstrap from a saved JSON file instead of the site
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// Also write a standalone HTML page of the last render
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Auto mode: seconds between refreshes
    #[arg(long)]
    pub interval: Option<u64>,

    /// Auto mode: stop after this many timer ticks
    #[arg(long)]
    pub ticks: Option<u64>,

    #[arg(long, default_value = CONFIG_FILE)]
    pub config: PathBuf,
}

pub fn run() -> Result<()> {
    let args = Args::parse();

    let mut opts = config_file::load(&args.config);
    if let Some(m) = args.mode { opts.display.mode = m; }
    if let Some(o) = &args.origin { opts.fetch.origin = s!(o.trim_end_matches('/')); }
    if let Some(c) = &args.cookie { opts.fetch.cookie = Some(c.clone()); }
    if let Some(secs) = args.interval {
        if secs == 0 { return Err(eyre!("--interval must be at least 1 second")); }
        opts.display.refresh_interval = Duration::from_secs(secs);
    }

    let source: Arc<dyn BootstrapSource> = match &args.snapshot {
        Some(p) => Arc::new(FileSource::new(p)),
        None => Arc::new(HttpSource::new(opts.fetch.clone())?),
    };

    let (done_tx, done_rx) = mpsc::channel::<()>();
    let sink = Arc::new(CliSink {
        mode: opts.display.mode,
        format: args.format,
        out: args.out.clone(),
        done: Mutex::new(done_tx),
    });

    logf!("CLI: mode={} format={:?} source={}", opts.display.mode, args.format, source.describe());

    let mut inspector = Inspector::new(source, opts.fetch.endpoints.clone(), sink, &opts.display);

    if !opts.display.mode.is_auto() {
        inspector.refresh_blocking();
        return Ok(());
    }

    // Auto: the initial cycle plus `ticks` timer cycles (forever if unset).
    inspector.start();
    let wanted = args.ticks.map(|n| n + 1);
    let mut seen = 0u64;
    while wanted.is_none_or(|w| seen < w) {
        if done_rx.recv().is_err() { break; }
        seen += 1;
    }
    inspector.close();
    Ok(())
}

struct CliSink {
    mode: DisplayMode,
    format: OutputFormat,
    out: Option<PathBuf>,
    done: Mutex<mpsc::Sender<()>>,
}

impl PanelSink for CliSink {
    fn status(&self, msg: &str) {
        eprintln!("{msg}");
    }

    fn publish(&self, outcome: Outcome) {
        let mode = self.mode.render_mode();
        let status = outcome.status();
        eprintln!("{status}");

        match self.format {
            OutputFormat::Text => print!("{}", outcome.render_text(mode)),
            OutputFormat::Html => println!("{}", outcome.render_html(mode)),
        }

        if let Some(out) = &self.out {
            let page = render::html::page("NitroType Shop Inspector", &status, &outcome.render_html(mode));
            if let Err(e) = file::write_page(out, &page) {
                loge!("CLI: could not write {}: {}", out.display(), e);
                eprintln!("Error: could not write {}: {}", out.display(), e);
            }
        }

        if let Ok(tx) = self.done.lock() {
            let _ = tx.send(());
        }
    }
}
