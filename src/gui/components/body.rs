// src/gui/components/body.rs
//
// Status line plus the current/upcoming sections, laid out per mode.

use eframe::egui;

use crate::{
    config::consts::{MSG_NO_ITEMS, MSG_UNAVAILABLE},
    config::options::RenderMode,
    gui::app::App,
    render::{section_labels, CardView, PanelView},
    runner::Outcome,
};

const THUMB: f32 = 40.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // Copy out under the lock; never hold it while drawing.
    let (status, view, unavailable, has_outcome) = match app.shared.lock() {
        Ok(g) => (
            g.status.clone(),
            g.view.clone(),
            matches!(g.outcome, Some(Outcome::Unavailable)),
            g.outcome.is_some(),
        ),
        Err(_) => return,
    };

    ui.label(egui::RichText::new(status).small().weak());
    ui.separator();

    egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        if unavailable {
            ui.label(MSG_UNAVAILABLE);
        } else if !has_outcome {
            // first cycle still running
            ui.spinner();
        } else if view.is_empty() {
            ui.label(MSG_NO_ITEMS);
        } else {
            sections(ui, &view, app.mode().render_mode());
        }
    });
}

fn sections(ui: &mut egui::Ui, view: &PanelView, mode: RenderMode) {
    let [cur, up] = section_labels(mode);
    for (idx, (label, cards)) in [(cur, &view.current), (up, &view.upcoming)].into_iter().enumerate() {
        match mode {
            RenderMode::Minimal => {
                ui.strong(label);
                let names: Vec<&str> = cards.iter().map(|c| c.name.as_str()).collect();
                ui.label(names.join(", "));
                ui.add_space(8.0);
            }
            RenderMode::Full => {
                ui.strong(egui::RichText::new(label).size(14.0));
                egui::Grid::new(("nt-grid", idx))
                    .num_columns(2)
                    .spacing([6.0, 6.0])
                    .show(ui, |ui| {
                        for (i, card) in cards.iter().enumerate() {
                            draw_card(ui, card);
                            if i % 2 == 1 { ui.end_row(); }
                        }
                    });
                ui.add_space(14.0);
            }
        }
    }
}

fn draw_card(ui: &mut egui::Ui, card: &CardView) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.horizontal(|ui| {
            if card.image.is_empty() {
                ui.allocate_space(egui::vec2(THUMB, THUMB));
            } else {
                ui.add(
                    egui::Image::new(card.image.as_str())
                        .fit_to_exact_size(egui::vec2(THUMB, THUMB))
                        .corner_radius(4.0),
                );
            }
            ui.vertical(|ui| {
                ui.strong(&card.name);
                if !card.subtitle.is_empty() {
                    ui.label(egui::RichText::new(&card.subtitle).small().weak());
                }
            });
        });
    });
}
