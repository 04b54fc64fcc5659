use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Column domains
// ---------------------------------------------------------------------------

/// Number of rows in the generated catalog.
pub const CATALOG_SIZE: usize = 200;

/// Inclusive release-year bounds for the whole dataset.
pub const YEAR_MIN: i32 = 2015;
pub const YEAR_MAX: i32 = 2027;

/// Duration bounds in minutes: `[DURATION_MIN, DURATION_MAX)`.
pub const DURATION_MIN: u32 = 30;
pub const DURATION_MAX: u32 = 180;

/// The fixed pool of title names the generator draws from.
pub const TITLE_NAMES: [&str; 10] = [
    "Money Heist",
    "Stranger Things",
    "Extraction",
    "RRR",
    "Wednesday",
    "Jawan",
    "Lucifer",
    "Dark",
    "Peaky Blinders",
    "The Crown",
];

// ---------------------------------------------------------------------------
// Kind – movie vs TV show
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    Movie,
    TvShow,
}

impl Kind {
    pub const ALL: [Kind; 2] = [Kind::Movie, Kind::TvShow];

    pub fn label(self) -> &'static str {
        match self {
            Kind::Movie => "Movie",
            Kind::TvShow => "TV Show",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Genre
// ---------------------------------------------------------------------------

// Variants are declared in alphabetical label order so the derived `Ord`
// sorts the same way the labels do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Genre {
    Action,
    Comedy,
    Drama,
    Romance,
    SciFi,
    Thriller,
}

impl Genre {
    pub const ALL: [Genre; 6] = [
        Genre::Action,
        Genre::Comedy,
        Genre::Drama,
        Genre::Romance,
        Genre::SciFi,
        Genre::Thriller,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Comedy => "Comedy",
            Genre::Drama => "Drama",
            Genre::Romance => "Romance",
            Genre::SciFi => "Sci-Fi",
            Genre::Thriller => "Thriller",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Country
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Country {
    Germany,
    India,
    Korea,
    Spain,
    UnitedKingdom,
    UnitedStates,
}

impl Country {
    pub const ALL: [Country; 6] = [
        Country::Germany,
        Country::India,
        Country::Korea,
        Country::Spain,
        Country::UnitedKingdom,
        Country::UnitedStates,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Country::Germany => "Germany",
            Country::India => "India",
            Country::Korea => "Korea",
            Country::Spain => "Spain",
            Country::UnitedKingdom => "United Kingdom",
            Country::UnitedStates => "United States",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Title – one row of the catalog
// ---------------------------------------------------------------------------

/// A single catalog entry (one row of the generated table).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title {
    pub name: &'static str,
    pub kind: Kind,
    pub release_year: i32,
    pub country: Country,
    /// Flat per-row runtime in minutes, regardless of kind.
    pub duration: u32,
    pub genre: Genre,
}

// ---------------------------------------------------------------------------
// Catalog – the complete generated dataset
// ---------------------------------------------------------------------------

/// The full catalog with pre-computed domain indices.
///
/// Immutable after construction. The filter panel builds its widgets from
/// the observed `kinds` / `genres` sets rather than the static enum
/// domains, so the options always match what the data actually contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// All titles (rows), in generation order.
    pub titles: Vec<Title>,
    /// Kinds observed anywhere in the catalog, sorted.
    pub kinds: BTreeSet<Kind>,
    /// Genres observed anywhere in the catalog, sorted.
    pub genres: BTreeSet<Genre>,
}

impl Catalog {
    /// Build the domain indices from a set of rows.
    pub fn from_titles(titles: Vec<Title>) -> Self {
        let kinds = titles.iter().map(|t| t.kind).collect();
        let genres = titles.iter().map(|t| t.genre).collect();
        Catalog {
            titles,
            kinds,
            genres,
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}
