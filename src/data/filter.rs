use std::collections::BTreeSet;

use thiserror::Error;

use super::model::{Catalog, Genre, Kind, YEAR_MAX, YEAR_MIN};

// ---------------------------------------------------------------------------
// Filter selection: what the sidebar widgets currently say
// ---------------------------------------------------------------------------

/// The user's current filter choices. Ephemeral: rebuilt from the widgets on
/// every interaction, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Inclusive release-year range `(lo, hi)`.
    pub year_range: (i32, i32),
    /// Kinds to keep. An empty set keeps nothing (it does not mean "all").
    pub kinds: BTreeSet<Kind>,
    /// Genres to keep. Same empty-set rule as `kinds`.
    pub genres: BTreeSet<Genre>,
}

impl Selection {
    /// A selection covering the catalog's entire observed domain, so that
    /// filtering with it returns every row.
    pub fn covering(catalog: &Catalog) -> Self {
        Selection {
            year_range: (YEAR_MIN, YEAR_MAX),
            kinds: catalog.kinds.clone(),
            genres: catalog.genres.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("invalid year range: {lo} is after {hi}")]
    InvalidRange { lo: i32, hi: i32 },
}

// ---------------------------------------------------------------------------
// Row filter
// ---------------------------------------------------------------------------

/// Return indices of titles that pass all three predicates, in row order.
///
/// A title passes when:
/// * `lo <= release_year <= hi` (both ends inclusive)
/// * its kind is in `selection.kinds`
/// * its genre is in `selection.genres`
///
/// An empty `kinds` or `genres` set means nothing is selected, so every row
/// fails that predicate. A reversed year range is a caller error and is
/// rejected up front rather than silently matching nothing.
pub fn filtered_indices(catalog: &Catalog, selection: &Selection) -> Result<Vec<usize>, FilterError> {
    let (lo, hi) = selection.year_range;
    if lo > hi {
        return Err(FilterError::InvalidRange { lo, hi });
    }

    Ok(catalog
        .titles
        .iter()
        .enumerate()
        .filter(|(_, t)| {
            (lo..=hi).contains(&t.release_year)
                && selection.kinds.contains(&t.kind)
                && selection.genres.contains(&t.genre)
        })
        .map(|(i, _)| i)
        .collect())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::generate::generate;
    use crate::data::model::{Country, Title};

    fn title(kind: Kind, year: i32, genre: Genre) -> Title {
        Title {
            name: "Dark",
            kind,
            release_year: year,
            country: Country::Germany,
            duration: 60,
            genre,
        }
    }

    #[test]
    fn full_domain_selection_keeps_every_row() {
        let catalog = generate();
        let selection = Selection::covering(&catalog);
        let indices = filtered_indices(&catalog, &selection).unwrap();
        assert_eq!(indices, (0..catalog.len()).collect::<Vec<_>>());
    }

    #[test]
    fn result_is_an_ordered_subset() {
        let catalog = generate();
        let mut selection = Selection::covering(&catalog);
        selection.year_range = (2019, 2023);
        selection.genres.remove(&Genre::Comedy);

        let indices = filtered_indices(&catalog, &selection).unwrap();
        assert!(indices.len() < catalog.len());
        assert!(indices.windows(2).all(|w| w[0] < w[1]));
        for &i in &indices {
            let t = &catalog.titles[i];
            assert!((2019..=2023).contains(&t.release_year));
            assert_ne!(t.genre, Genre::Comedy);
        }
    }

    #[test]
    fn empty_kind_selection_matches_nothing() {
        let catalog = generate();
        let mut selection = Selection::covering(&catalog);
        selection.kinds.clear();
        let indices = filtered_indices(&catalog, &selection).unwrap();
        assert!(indices.is_empty());
    }

    #[test]
    fn empty_genre_selection_matches_nothing() {
        let catalog = generate();
        let mut selection = Selection::covering(&catalog);
        selection.genres.clear();
        let indices = filtered_indices(&catalog, &selection).unwrap();
        assert!(indices.is_empty());
    }

    #[test]
    fn reversed_year_range_is_rejected() {
        let catalog = generate();
        let mut selection = Selection::covering(&catalog);
        selection.year_range = (2025, 2018);
        assert_eq!(
            filtered_indices(&catalog, &selection),
            Err(FilterError::InvalidRange { lo: 2025, hi: 2018 })
        );
    }

    #[test]
    fn year_range_is_inclusive_on_both_ends() {
        let catalog = Catalog::from_titles(vec![
            title(Kind::Movie, 2019, Genre::Drama),
            title(Kind::Movie, 2020, Genre::Drama),
            title(Kind::Movie, 2021, Genre::Drama),
            title(Kind::Movie, 2022, Genre::Drama),
        ]);
        let mut selection = Selection::covering(&catalog);
        selection.year_range = (2020, 2021);
        let indices = filtered_indices(&catalog, &selection).unwrap();
        assert_eq!(indices, vec![1, 2]);
    }

    #[test]
    fn narrow_selection_scenario() {
        // Exactly three rows match (2020, Movie, Drama); the rest differ in
        // at least one predicate.
        let catalog = Catalog::from_titles(vec![
            title(Kind::Movie, 2020, Genre::Drama),
            title(Kind::TvShow, 2020, Genre::Drama),
            title(Kind::Movie, 2020, Genre::Drama),
            title(Kind::Movie, 2019, Genre::Drama),
            title(Kind::Movie, 2020, Genre::Action),
            title(Kind::Movie, 2020, Genre::Drama),
        ]);
        let selection = Selection {
            year_range: (2020, 2020),
            kinds: [Kind::Movie].into_iter().collect(),
            genres: [Genre::Drama].into_iter().collect(),
        };
        let indices = filtered_indices(&catalog, &selection).unwrap();
        assert_eq!(indices, vec![0, 2, 5]);
    }
}
