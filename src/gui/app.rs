// src/gui/app.rs
use std::{
    error::Error,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{
        consts::CONFIG_FILE,
        file as config_file,
        options::DisplayMode,
        state::{AppState, GuiState},
    },
    inspector::Inspector,
    shop::{BootstrapSource, FileSource, HttpSource},
};

use super::progress::{GuiSink, PanelShared};

pub fn run(options: eframe::NativeOptions, snapshot: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "NitroType Shop Inspector",
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(App::new(cc.egui_ctx.clone(), snapshot)))
        }),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub config_path: PathBuf,

    // cycle threads write here
    pub shared: Arc<Mutex<PanelShared>>,

    // None when the source could not be built (bad cookie etc.)
    pub inspector: Option<Inspector>,
}

impl App {
    pub fn new(ctx: egui::Context, snapshot: Option<PathBuf>) -> Self {
        let config_path = PathBuf::from(CONFIG_FILE);
        let options = config_file::load(&config_path);
        let state = AppState { options, gui: GuiState::default() };

        let shared = Arc::new(Mutex::new(PanelShared {
            status: s!("Idle"),
            ..PanelShared::default()
        }));

        let source: Result<Arc<dyn BootstrapSource>, String> = match snapshot {
            Some(p) => Ok(Arc::new(FileSource::new(p))),
            None => HttpSource::new(state.options.fetch.clone())
                .map(|s| Arc::new(s) as Arc<dyn BootstrapSource>)
                .map_err(|e| e.to_string()),
        };

        let inspector = match source {
            Ok(source) => {
                let sink = Arc::new(GuiSink::new(Arc::clone(&shared), ctx));
                let mut insp = Inspector::new(
                    source,
                    state.options.fetch.endpoints.clone(),
                    sink,
                    &state.options.display,
                );
                insp.start();
                Some(insp)
            }
            Err(e) => {
                loge!("Init: cannot build source: {}", e);
                if let Ok(mut g) = shared.lock() {
                    g.status = format!("Error: {e}");
                }
                None
            }
        };

        logf!("Init: mode={} origin={}", state.options.display.mode, state.options.fetch.origin);

        Self { state, config_path, shared, inspector }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn mode(&self) -> DisplayMode { self.state.options.display.mode }

    pub fn set_mode(&mut self, mode: DisplayMode) {
        if mode == self.mode() { return; }
        self.state.options.display.mode = mode;
        if let Some(insp) = self.inspector.as_mut() {
            insp.set_mode(mode);
        }
    }

    pub fn refresh(&self) {
        if let Some(insp) = self.inspector.as_ref() {
            insp.refresh();
        }
    }

    /// × button: stop everything, remember the mode, close the window.
    pub fn close(&mut self, ctx: &egui::Context) {
        self.state.gui.closed = true;
        if let Some(insp) = self.inspector.as_mut() {
            insp.close();
        }
        self.save_config();
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }

    fn save_config(&self) {
        match config_file::save(&self.config_path, &self.state.options) {
            Ok(()) => logd!("Config: saved {}", self.config_path.display()),
            Err(e) => loge!("Config: save failed {}: {}", self.config_path.display(), e),
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if !self.state.gui.closed {
            self.save_config();
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            super::components::toolbar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::body::draw(ui, self);
        });
    }
}
