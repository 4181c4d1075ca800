//! Core SearchQuery builder with term accumulation and rendering

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{QueryError, Result};

use super::filters::SortOrder;

/// Number of results an executor should fetch when no limit was set
pub const DEFAULT_LIMIT: usize = 20;

/// Largest result count a query may request
pub const MAX_LIMIT: usize = 10_000;

/// Builder for constructing PubMed search queries
///
/// Fragments accumulate in call order and render space-separated, which
/// PubMed treats as implicit AND. The result limit and sort order are
/// metadata for the executor and never appear in the rendered string.
///
/// # Example
///
/// ```
/// use pubmed_query::{QueryError, SearchQuery};
///
/// let query = SearchQuery::new()
///     .term("covid-19")
///     .published_after(2020)?;
///
/// assert_eq!(query.build()?, "covid-19 2020:3000[pdat]");
/// # Ok::<(), QueryError>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    pub(crate) fragments: Vec<String>,
    pub(crate) limit: Option<usize>,
    pub(crate) sort: Option<SortOrder>,
}

impl SearchQuery {
    /// Create a new, empty search query builder
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_query::SearchQuery;
    ///
    /// let query = SearchQuery::new();
    /// ```
    pub fn new() -> Self {
        Self {
            fragments: Vec::new(),
            limit: None,
            sort: None,
        }
    }

    /// Add a free-text search term
    ///
    /// Terms accumulate and render space-separated in call order. A term
    /// that trims to nothing is skipped silently; it is not an error.
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_query::{QueryError, SearchQuery};
    ///
    /// let query = SearchQuery::new()
    ///     .term("covid-19")
    ///     .term("   ")
    ///     .term("treatment");
    ///
    /// assert_eq!(query.build()?, "covid-19 treatment");
    /// # Ok::<(), QueryError>(())
    /// ```
    pub fn term<S: AsRef<str>>(mut self, term: S) -> Self {
        let trimmed = term.as_ref().trim();
        if trimmed.is_empty() {
            debug!("skipping blank or absent search term");
        } else {
            self.fragments.push(trimmed.to_string());
        }
        self
    }

    /// Add a search term that may be absent
    ///
    /// `None` is skipped silently, like a blank term.
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_query::{QueryError, SearchQuery};
    ///
    /// let query = SearchQuery::new()
    ///     .opt_term(None::<&str>)
    ///     .opt_term(Some("covid-19"));
    ///
    /// assert_eq!(query.build()?, "covid-19");
    /// # Ok::<(), QueryError>(())
    /// ```
    pub fn opt_term<S: AsRef<str>>(self, term: Option<S>) -> Self {
        match term {
            Some(term) => self.term(term),
            None => {
                debug!("skipping blank or absent search term");
                self
            }
        }
    }

    /// Add multiple search terms at once
    ///
    /// Each element is processed like [`term`](Self::term): blank
    /// elements are skipped individually without aborting the batch.
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_query::{QueryError, SearchQuery};
    ///
    /// let query = SearchQuery::new().terms(["covid-19", "vaccine", "efficacy"]);
    ///
    /// assert_eq!(query.build()?, "covid-19 vaccine efficacy");
    /// # Ok::<(), QueryError>(())
    /// ```
    pub fn terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for term in terms {
            self = self.term(term);
        }
        self
    }

    /// Add multiple search terms, skipping absent elements
    ///
    /// Like [`terms`](Self::terms) for sequences whose elements may be
    /// absent; `None` and blank elements are skipped individually.
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_query::{QueryError, SearchQuery};
    ///
    /// let query = SearchQuery::new()
    ///     .opt_terms(vec![None, Some("covid-19"), None, Some("vaccine")]);
    ///
    /// assert_eq!(query.build()?, "covid-19 vaccine");
    /// # Ok::<(), QueryError>(())
    /// ```
    pub fn opt_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        for term in terms {
            self = self.opt_term(term);
        }
        self
    }

    /// Set the maximum number of results to return
    ///
    /// `None` clears a previously set limit, reverting to the default of
    /// [`DEFAULT_LIMIT`] on read. The limit is metadata for whoever
    /// executes the query; it never appears in the rendered string.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidArgument`] for `0` or for values
    /// above [`MAX_LIMIT`].
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_query::{QueryError, SearchQuery};
    ///
    /// let query = SearchQuery::new().term("cancer").limit(50)?;
    ///
    /// assert_eq!(query.get_limit(), 50);
    /// # Ok::<(), QueryError>(())
    /// ```
    pub fn limit(mut self, limit: impl Into<Option<usize>>) -> Result<Self> {
        match limit.into() {
            None => self.limit = None,
            Some(0) => {
                return Err(QueryError::InvalidArgument(
                    "limit must be greater than 0".to_string(),
                ))
            }
            Some(requested) if requested > MAX_LIMIT => {
                return Err(QueryError::InvalidArgument(
                    "limit should not exceed 10,000".to_string(),
                ))
            }
            Some(requested) => self.limit = Some(requested),
        }
        Ok(self)
    }

    /// Get the limit for this query, defaulting to [`DEFAULT_LIMIT`]
    pub fn get_limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }

    /// Set the sort order for search results
    ///
    /// Like the limit, the sort order is carried alongside the query
    /// string for the executor, not inside it.
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_query::{SearchQuery, SortOrder};
    ///
    /// let query = SearchQuery::new()
    ///     .term("cancer")
    ///     .sort(SortOrder::PublicationDate);
    /// ```
    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Get the sort order for this query
    pub fn get_sort(&self) -> Option<&SortOrder> {
        self.sort.as_ref()
    }

    /// Build the final query string
    ///
    /// Joins all fragments in insertion order with single spaces. The
    /// builder is not consumed; calling `build` again without further
    /// mutation yields an identical string.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidState`] when nothing has accumulated,
    /// including the case where every supplied term was blank or absent.
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_query::{QueryError, SearchQuery};
    ///
    /// let query_string = SearchQuery::new()
    ///     .term("covid-19")
    ///     .published_after(2020)?
    ///     .build()?;
    ///
    /// assert_eq!(query_string, "covid-19 2020:3000[pdat]");
    /// # Ok::<(), QueryError>(())
    /// ```
    pub fn build(&self) -> Result<String> {
        if self.fragments.is_empty() {
            return Err(QueryError::InvalidState(
                "no search terms provided".to_string(),
            ));
        }
        debug!(fragments = self.fragments.len(), "building query string");
        Ok(self.fragments.join(" "))
    }

    /// Append `value[field]`, skipping blank values like `term` does
    pub(crate) fn push_field<S: AsRef<str>>(mut self, value: S, field: &str) -> Self {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            debug!(field, "skipping blank filter value");
        } else {
            self.fragments.push(format!("{trimmed}[{field}]"));
        }
        self
    }

    /// Append a pre-formatted filter fragment
    pub(crate) fn push_fragment(mut self, fragment: &str) -> Self {
        self.fragments.push(fragment.to_string());
        self
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::new()
    }
}
