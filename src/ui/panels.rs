use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::model::{Genre, Kind, YEAR_MAX, YEAR_MIN};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            year_range_section(ui, state);
            ui.separator();
            kind_section(ui, state);
            genre_section(ui, state);
        });
}

fn year_range_section(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Release year");

    let (mut lo, mut hi) = state.selection.year_range;
    let mut changed = false;
    changed |= ui
        .add(egui::Slider::new(&mut lo, YEAR_MIN..=YEAR_MAX).text("from"))
        .changed();
    changed |= ui
        .add(egui::Slider::new(&mut hi, YEAR_MIN..=YEAR_MAX).text("to"))
        .changed();

    if changed {
        // The engine rejects lo > hi; refilter surfaces that in the top bar
        // instead of clamping silently.
        state.selection.year_range = (lo, hi);
        state.refilter();
    }
}

fn kind_section(ui: &mut Ui, state: &mut AppState) {
    let kinds: Vec<Kind> = state.catalog.kinds.iter().copied().collect();
    let n_selected = state.selection.kinds.len();
    let header = format!("Type  ({n_selected}/{})", kinds.len());

    egui::CollapsingHeader::new(RichText::new(header).strong())
        .id_salt("kind_filter")
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all_kinds();
                }
                if ui.small_button("None").clicked() {
                    state.select_no_kinds();
                }
            });

            for kind in kinds {
                let mut checked = state.selection.kinds.contains(&kind);
                if ui.checkbox(&mut checked, kind.label()).changed() {
                    state.toggle_kind(kind);
                }
            }
        });
}

fn genre_section(ui: &mut Ui, state: &mut AppState) {
    let genres: Vec<Genre> = state.catalog.genres.iter().copied().collect();
    let n_selected = state.selection.genres.len();
    let header = format!("Genre  ({n_selected}/{})", genres.len());

    egui::CollapsingHeader::new(RichText::new(header).strong())
        .id_salt("genre_filter")
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all_genres();
                }
                if ui.small_button("None").clicked() {
                    state.select_no_genres();
                }
            });

            for genre in genres {
                let mut checked = state.selection.genres.contains(&genre);
                let text =
                    RichText::new(genre.label()).color(state.genre_colors.color_for(genre));
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_genre(genre);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top bar: app label, match counts, and any selection error.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong("Flixboard");
        ui.separator();

        ui.label(format!(
            "{} titles, {} matching",
            state.catalog.len(),
            state.visible.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}
