use crate::color::CategoryColors;
use crate::data::aggregate::{summarize, Summary};
use crate::data::filter::{filtered_indices, Selection};
use crate::data::model::{Catalog, Country, Genre, Kind};

/// First-load year range shown by the sliders. Narrower than the full
/// 2015–2027 domain on purpose, matching the dashboard's default view.
pub const DEFAULT_YEAR_RANGE: (i32, i32) = (2017, 2027);

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The catalog is generated once at startup and never mutated; everything
/// else is derived from it plus the current selection.
pub struct AppState {
    /// The immutable generated dataset.
    pub catalog: Catalog,

    /// Current sidebar filter choices.
    pub selection: Selection,

    /// Indices of titles passing the current selection (cached).
    pub visible: Vec<usize>,

    /// Aggregates over `visible` (cached alongside it).
    pub summary: Summary,

    /// Colours for genre and country bars.
    pub genre_colors: CategoryColors<Genre>,
    pub country_colors: CategoryColors<Country>,

    /// Error message shown in the top bar, e.g. a reversed year range.
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the state around a freshly generated catalog: everything
    /// selected, default year range, aggregates precomputed.
    pub fn new(catalog: Catalog) -> Self {
        let mut selection = Selection::covering(&catalog);
        selection.year_range = DEFAULT_YEAR_RANGE;

        let mut state = Self {
            selection,
            visible: Vec::new(),
            summary: Summary::default(),
            genre_colors: CategoryColors::new(catalog.genres.iter().copied()),
            country_colors: CategoryColors::new(Country::ALL),
            status_message: None,
            catalog,
        };
        state.refilter();
        state
    }

    /// Recompute the visible rows and aggregates after a selection change.
    ///
    /// On a rejected selection the previous view stays on screen and the
    /// error is surfaced in the top bar; the catalog itself is untouched, so
    /// correcting the sliders recovers fully.
    pub fn refilter(&mut self) {
        match filtered_indices(&self.catalog, &self.selection) {
            Ok(indices) => {
                self.summary = summarize(&self.catalog, &indices);
                self.visible = indices;
                self.status_message = None;
            }
            Err(e) => {
                log::warn!("Selection rejected: {e}");
                self.status_message = Some(e.to_string());
            }
        }
    }

    /// Toggle a single kind in the selection.
    pub fn toggle_kind(&mut self, kind: Kind) {
        if !self.selection.kinds.remove(&kind) {
            self.selection.kinds.insert(kind);
        }
        self.refilter();
    }

    /// Toggle a single genre in the selection.
    pub fn toggle_genre(&mut self, genre: Genre) {
        if !self.selection.genres.remove(&genre) {
            self.selection.genres.insert(genre);
        }
        self.refilter();
    }

    /// Select every kind observed in the catalog.
    pub fn select_all_kinds(&mut self) {
        self.selection.kinds = self.catalog.kinds.clone();
        self.refilter();
    }

    /// Deselect every kind. Per the filter rules this hides all rows.
    pub fn select_no_kinds(&mut self) {
        self.selection.kinds.clear();
        self.refilter();
    }

    /// Select every genre observed in the catalog.
    pub fn select_all_genres(&mut self) {
        self.selection.genres = self.catalog.genres.clone();
        self.refilter();
    }

    /// Deselect every genre.
    pub fn select_no_genres(&mut self) {
        self.selection.genres.clear();
        self.refilter();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::generate::generate;

    #[test]
    fn startup_state_has_everything_selected() {
        let state = AppState::new(generate());
        assert_eq!(state.selection.year_range, DEFAULT_YEAR_RANGE);
        assert_eq!(state.selection.kinds, state.catalog.kinds);
        assert_eq!(state.selection.genres, state.catalog.genres);
        assert_eq!(state.summary.kpis.total, state.visible.len());
        assert!(state.status_message.is_none());
    }

    #[test]
    fn invalid_range_keeps_the_last_good_view() {
        let mut state = AppState::new(generate());
        let before_visible = state.visible.clone();
        let before_summary = state.summary.clone();

        state.selection.year_range = (2025, 2018);
        state.refilter();

        assert!(state.status_message.is_some());
        assert_eq!(state.visible, before_visible);
        assert_eq!(state.summary, before_summary);

        // Correcting the range recovers.
        state.selection.year_range = (2018, 2025);
        state.refilter();
        assert!(state.status_message.is_none());
    }

    #[test]
    fn deselecting_all_kinds_hides_everything() {
        let mut state = AppState::new(generate());
        state.select_no_kinds();
        assert!(state.visible.is_empty());
        assert_eq!(state.summary.kpis.total, 0);

        state.select_all_kinds();
        assert!(!state.visible.is_empty());
    }

    #[test]
    fn toggling_a_genre_twice_restores_the_view() {
        let mut state = AppState::new(generate());
        let before = state.visible.clone();

        state.toggle_genre(Genre::Thriller);
        assert!(state.visible.len() < before.len());

        state.toggle_genre(Genre::Thriller);
        assert_eq!(state.visible, before);
    }
}
