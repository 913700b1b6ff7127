// src/gui/components/toolbar.rs
//
// Title, mode selector, refresh and close. Mode changes go through the
// inspector so the auto-refresh timer is torn down / re-armed in one place.

use eframe::egui;

use crate::{config::options::DisplayMode, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.strong(egui::RichText::new("🏎 NitroType Shop Inspector").size(16.0));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("×").on_hover_text("Close").clicked() {
                logf!("UI: close");
                app.close(ui.ctx());
                return;
            }
            if ui.button("↻").on_hover_text("Refresh").clicked() {
                logf!("UI: manual refresh");
                app.refresh();
            }

            let prev = app.mode();
            let mut mode = prev;
            egui::ComboBox::from_id_salt("nt-mode")
                .selected_text(mode.label())
                .show_ui(ui, |ui| {
                    for m in DisplayMode::ALL {
                        ui.selectable_value(&mut mode, m, m.label());
                    }
                });
            if mode != prev {
                logf!("UI: mode {:?} → {:?}", prev, mode);
                app.set_mode(mode);
            }

            if let Some(insp) = app.inspector.as_ref().filter(|i| i.is_ticking()) {
                ui.label(egui::RichText::new(format!("every {}s", insp.interval().as_secs())).small().weak());
            }
        });
    });
}
