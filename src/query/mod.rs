//! Construction of PubMed search strings
//!
//! The builder functionality is split across focused modules:
//! - `builder` - Core [`SearchQuery`] state, term accumulation, and rendering
//! - `dates` - Publication-date filters (`[pdat]` ranges)
//! - `filters` - Article type, language, and sort-order vocabularies
//! - `advanced` - MeSH, author, and subset filters

mod advanced;
mod builder;
mod dates;
mod filters;

// Re-export public types
pub use builder::{SearchQuery, DEFAULT_LIMIT, MAX_LIMIT};
pub use filters::{ArticleType, Language, SortOrder};
