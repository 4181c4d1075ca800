//! # PubMed Query
//!
//! A Rust library for constructing PubMed E-utilities search strings.
//! This crate provides a fluent builder that accumulates free-text terms
//! and structured filters (publication dates, article types, MeSH terms,
//! authors) and renders them into the field-tag syntax the search API
//! expects.
//!
//! The builder is a plain synchronous value: no network I/O, no shared
//! state. The rendered string, together with the result limit and sort
//! order read from the builder, is everything an execution layer needs
//! to issue the actual search.
//!
//! ## Features
//!
//! - **Fluent construction**: chainable methods that accumulate query
//!   fragments in call order
//! - **Eager validation**: invalid limits, out-of-range years, and
//!   unknown article types are rejected at the point they are supplied
//! - **Field-tag rendering**: date ranges (`[pdat]`), publication types
//!   (`[pt]`), MeSH headings, author and affiliation tags
//! - **Executor metadata**: result limit and sort order carried
//!   alongside the query string, never inside it
//!
//! ## Quick Start
//!
//! ```
//! use pubmed_query::{QueryError, SearchQuery, SortOrder};
//!
//! let query = SearchQuery::new()
//!     .term("covid-19")
//!     .term("vaccine")
//!     .published_between(2020, 2024)?
//!     .limit(50)?
//!     .sort(SortOrder::PublicationDate);
//!
//! assert_eq!(query.build()?, "covid-19 vaccine 2020:2024[pdat]");
//! assert_eq!(query.get_limit(), 50);
//! # Ok::<(), QueryError>(())
//! ```
//!
//! ## Filtering by article type
//!
//! Article types resolve case-insensitively, including common shorthand:
//!
//! ```
//! use pubmed_query::{QueryError, SearchQuery};
//!
//! let query = SearchQuery::new()
//!     .term("hypertension")
//!     .article_types(&["RCT", "Meta-Analysis"])?
//!     .build()?;
//!
//! assert_eq!(
//!     query,
//!     "hypertension Randomized Controlled Trial[pt] OR Meta-Analysis[pt]"
//! );
//! # Ok::<(), QueryError>(())
//! ```

pub mod error;
pub mod query;

// Re-export main types for convenience
pub use error::{QueryError, Result};
pub use query::{ArticleType, Language, SearchQuery, SortOrder, DEFAULT_LIMIT, MAX_LIMIT};
