use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::model::{
    Catalog, Country, Genre, Kind, Title, CATALOG_SIZE, DURATION_MAX, DURATION_MIN, TITLE_NAMES,
    YEAR_MAX, YEAR_MIN,
};

/// Seed for the synthetic catalog. Fixed so every run shows the same data.
const SEED: u64 = 42;

// ---------------------------------------------------------------------------
// Synthetic catalog generator
// ---------------------------------------------------------------------------

/// Generate the synthetic 200-row catalog.
///
/// Each column is drawn independently, 200 uniform samples with replacement
/// from its fixed domain (duration as a uniform integer in `[30, 180)`).
/// No cross-column correlation is modeled. The draw is seeded, so repeated
/// calls produce identical catalogs; callers generate once at startup and
/// hand the value down instead of re-invoking.
pub fn generate() -> Catalog {
    let mut rng = StdRng::seed_from_u64(SEED);

    // Column-wise draws, matching the per-column independence of the data:
    // all names first, then all kinds, and so on.
    let names: Vec<&'static str> = draw(&mut rng, |rng| TITLE_NAMES[rng.gen_range(0..TITLE_NAMES.len())]);
    let kinds: Vec<Kind> = draw(&mut rng, |rng| Kind::ALL[rng.gen_range(0..Kind::ALL.len())]);
    let years: Vec<i32> = draw(&mut rng, |rng| rng.gen_range(YEAR_MIN..=YEAR_MAX));
    let countries: Vec<Country> =
        draw(&mut rng, |rng| Country::ALL[rng.gen_range(0..Country::ALL.len())]);
    let durations: Vec<u32> = draw(&mut rng, |rng| rng.gen_range(DURATION_MIN..DURATION_MAX));
    let genres: Vec<Genre> = draw(&mut rng, |rng| Genre::ALL[rng.gen_range(0..Genre::ALL.len())]);

    let titles: Vec<Title> = (0..CATALOG_SIZE)
        .map(|i| Title {
            name: names[i],
            kind: kinds[i],
            release_year: years[i],
            country: countries[i],
            duration: durations[i],
            genre: genres[i],
        })
        .collect();

    Catalog::from_titles(titles)
}

/// Draw one full column of `CATALOG_SIZE` samples.
fn draw<T>(rng: &mut StdRng, mut sample: impl FnMut(&mut StdRng) -> T) -> Vec<T> {
    (0..CATALOG_SIZE).map(|_| sample(rng)).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
