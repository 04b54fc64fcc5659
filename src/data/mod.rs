/// Data layer: core types, generation, filtering, and aggregation.
///
/// Architecture:
/// ```text
///   ┌──────────┐
///   │ generate  │  seeded draws → Catalog (200 rows, built once)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  Selection predicates → retained row indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ aggregate │  indices → KPIs, count maps, genre×year matrix
///   └──────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod generate;
pub mod model;
