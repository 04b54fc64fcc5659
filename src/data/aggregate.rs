use std::collections::BTreeMap;

use super::model::{Catalog, Country, Genre, Kind};

// ---------------------------------------------------------------------------
// KPI scalars
// ---------------------------------------------------------------------------

/// The four headline numbers shown above the charts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Kpis {
    pub total: usize,
    pub movies: usize,
    pub tv_shows: usize,
    pub unique_genres: usize,
}

// ---------------------------------------------------------------------------
// Genre × year pivot
// ---------------------------------------------------------------------------

/// Dense genre×year count matrix over the values present in the filtered
/// rows. Rows are genres sorted ascending, columns are years sorted
/// ascending; combinations with no rows hold zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreYearMatrix {
    pub genres: Vec<Genre>,
    pub years: Vec<i32>,
    /// `counts[genre_idx][year_idx]`.
    pub counts: Vec<Vec<usize>>,
}

impl GenreYearMatrix {
    /// Largest cell count, used to scale the heatmap color ramp.
    pub fn max_count(&self) -> usize {
        self.counts
            .iter()
            .flat_map(|row| row.iter().copied())
            .max()
            .unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// Summary – everything the charts consume
// ---------------------------------------------------------------------------

/// All derived views over the filtered rows. Values present with zero count
/// are omitted from the count maps; only the matrix densifies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub kpis: Kpis,
    pub count_by_year: BTreeMap<i32, usize>,
    pub count_by_genre: BTreeMap<Genre, usize>,
    pub count_by_country: BTreeMap<Country, usize>,
    pub matrix: GenreYearMatrix,
    /// `(release_year, duration, kind)` per filtered row, in row order.
    pub scatter: Vec<(i32, u32, Kind)>,
    /// Durations grouped by kind, for the per-kind spread chart.
    pub durations_by_kind: BTreeMap<Kind, Vec<u32>>,
}

/// Compute every aggregate view from the filtered row indices.
///
/// Pure over its inputs; an empty `indices` slice yields zero KPIs and
/// empty maps, which the charts render as empty plots.
pub fn summarize(catalog: &Catalog, indices: &[usize]) -> Summary {
    let mut summary = Summary::default();
    let mut pivot: BTreeMap<(Genre, i32), usize> = BTreeMap::new();

    for &i in indices {
        let t = &catalog.titles[i];

        match t.kind {
            Kind::Movie => summary.kpis.movies += 1,
            Kind::TvShow => summary.kpis.tv_shows += 1,
        }

        *summary.count_by_year.entry(t.release_year).or_default() += 1;
        *summary.count_by_genre.entry(t.genre).or_default() += 1;
        *summary.count_by_country.entry(t.country).or_default() += 1;
        *pivot.entry((t.genre, t.release_year)).or_default() += 1;

        summary.scatter.push((t.release_year, t.duration, t.kind));
        summary
            .durations_by_kind
            .entry(t.kind)
            .or_default()
            .push(t.duration);
    }

    summary.kpis.total = indices.len();
    summary.kpis.unique_genres = summary.count_by_genre.len();
    summary.matrix = densify(&pivot, &summary);
    summary
}

/// Spread the sparse pivot counts over the full present-genre × present-year
/// grid. BTreeMap keys come out sorted, which gives the ascending axis order.
fn densify(pivot: &BTreeMap<(Genre, i32), usize>, summary: &Summary) -> GenreYearMatrix {
    let genres: Vec<Genre> = summary.count_by_genre.keys().copied().collect();
    let years: Vec<i32> = summary.count_by_year.keys().copied().collect();

    let counts = genres
        .iter()
        .map(|&g| {
            years
                .iter()
                .map(|&y| pivot.get(&(g, y)).copied().unwrap_or(0))
                .collect()
        })
        .collect();

    GenreYearMatrix {
        genres,
        years,
        counts,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{filtered_indices, Selection};
    use crate::data::generate::generate;
    use crate::data::model::Title;

    fn title(kind: Kind, year: i32, genre: Genre) -> Title {
        Title {
            name: "Lucifer",
            kind,
            release_year: year,
            country: Country::UnitedStates,
            duration: 45,
            genre,
        }
    }

    #[test]
    fn counts_are_consistent_with_the_total() {
        let catalog = generate();
        let mut selection = Selection::covering(&catalog);
        selection.year_range = (2018, 2024);
        let indices = filtered_indices(&catalog, &selection).unwrap();
        let summary = summarize(&catalog, &indices);

        let total = indices.len();
        assert_eq!(summary.kpis.total, total);
        assert_eq!(summary.count_by_year.values().sum::<usize>(), total);
        assert_eq!(summary.count_by_genre.values().sum::<usize>(), total);
        assert_eq!(summary.count_by_country.values().sum::<usize>(), total);
        assert_eq!(summary.scatter.len(), total);
    }

    #[test]
    fn movie_and_tv_counts_add_up() {
        let catalog = generate();
        let selection = Selection::covering(&catalog);
        let indices = filtered_indices(&catalog, &selection).unwrap();
        let summary = summarize(&catalog, &indices);
        assert_eq!(summary.kpis.movies + summary.kpis.tv_shows, summary.kpis.total);
    }

    #[test]
    fn empty_input_yields_zero_kpis_and_empty_views() {
        let catalog = generate();
        let summary = summarize(&catalog, &[]);
        assert_eq!(summary.kpis, Kpis::default());
        assert!(summary.count_by_year.is_empty());
        assert!(summary.count_by_genre.is_empty());
        assert!(summary.count_by_country.is_empty());
        assert!(summary.matrix.genres.is_empty());
        assert!(summary.matrix.years.is_empty());
        assert!(summary.scatter.is_empty());
        assert!(summary.durations_by_kind.is_empty());
        assert_eq!(summary.matrix.max_count(), 0);
    }

    #[test]
    fn absent_values_are_omitted_not_zeroed() {
        let catalog = Catalog::from_titles(vec![
            title(Kind::Movie, 2020, Genre::Drama),
            title(Kind::Movie, 2022, Genre::Drama),
        ]);
        let summary = summarize(&catalog, &[0, 1]);
        // 2021 has no rows, so it does not appear as a key at all.
        assert_eq!(
            summary.count_by_year.keys().copied().collect::<Vec<_>>(),
            vec![2020, 2022]
        );
        assert_eq!(summary.count_by_genre.len(), 1);
        assert_eq!(summary.count_by_country.len(), 1);
    }

    #[test]
    fn matrix_is_dense_over_present_axes() {
        let catalog = Catalog::from_titles(vec![
            title(Kind::Movie, 2020, Genre::Drama),
            title(Kind::Movie, 2021, Genre::Action),
            title(Kind::TvShow, 2021, Genre::Drama),
            title(Kind::TvShow, 2021, Genre::Drama),
        ]);
        let summary = summarize(&catalog, &[0, 1, 2, 3]);
        let m = &summary.matrix;

        assert_eq!(m.genres, vec![Genre::Action, Genre::Drama]);
        assert_eq!(m.years, vec![2020, 2021]);
        // Action: none in 2020, one in 2021. Drama: one in 2020, two in 2021.
        assert_eq!(m.counts, vec![vec![0, 1], vec![1, 2]]);
        assert_eq!(m.max_count(), 2);

        let matrix_total: usize = m.counts.iter().flatten().sum();
        assert_eq!(matrix_total, summary.kpis.total);
    }

    #[test]
    fn narrow_selection_scenario_kpis() {
        let catalog = Catalog::from_titles(vec![
            title(Kind::Movie, 2020, Genre::Drama),
            title(Kind::TvShow, 2020, Genre::Drama),
            title(Kind::Movie, 2020, Genre::Drama),
            title(Kind::Movie, 2019, Genre::Comedy),
            title(Kind::Movie, 2020, Genre::Drama),
        ]);
        let selection = Selection {
            year_range: (2020, 2020),
            kinds: [Kind::Movie].into_iter().collect(),
            genres: [Genre::Drama].into_iter().collect(),
        };
        let indices = filtered_indices(&catalog, &selection).unwrap();
        let summary = summarize(&catalog, &indices);

        assert_eq!(summary.kpis.total, 3);
        assert_eq!(summary.kpis.movies, 3);
        assert_eq!(summary.kpis.tv_shows, 0);
        assert_eq!(summary.kpis.unique_genres, 1);
    }

    #[test]
    fn durations_group_by_kind_in_row_order() {
        let mut a = title(Kind::Movie, 2020, Genre::Drama);
        a.duration = 90;
        let mut b = title(Kind::TvShow, 2020, Genre::Drama);
        b.duration = 40;
        let mut c = title(Kind::Movie, 2021, Genre::Drama);
        c.duration = 120;
        let catalog = Catalog::from_titles(vec![a, b, c]);

        let summary = summarize(&catalog, &[0, 1, 2]);
        assert_eq!(summary.durations_by_kind[&Kind::Movie], vec![90, 120]);
        assert_eq!(summary.durations_by_kind[&Kind::TvShow], vec![40]);
    }
}
