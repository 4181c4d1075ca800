//! Publication-date filters
//!
//! Date restrictions render through the `[pdat]` field tag as inclusive
//! year ranges. `3000` stands in for "no upper bound" and `1900` is the
//! conventional floor for upper-bounded searches.

use crate::error::{QueryError, Result};

use super::builder::SearchQuery;

/// Bounds accepted for any publication year
const MIN_YEAR: u32 = 1800;
const MAX_YEAR: u32 = 3000;

/// Fixed lower bound used by [`SearchQuery::published_before`]
const OPEN_LOWER_BOUND: u32 = 1900;

fn validate_year(year: u32) -> Result<()> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(QueryError::InvalidArgument(
            "year must be between 1800 and 3000".to_string(),
        ));
    }
    Ok(())
}

impl SearchQuery {
    /// Filter by publication date range (inclusive)
    ///
    /// With no end year the range stays open-ended, rendered with the
    /// `3000` sentinel.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidArgument`] when either bound falls
    /// outside 1800-3000 or the start year is greater than the end year.
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_query::{QueryError, SearchQuery};
    ///
    /// let query = SearchQuery::new()
    ///     .term("cancer")
    ///     .published_between(2020, 2023)?;
    /// assert_eq!(query.build()?, "cancer 2020:2023[pdat]");
    ///
    /// let query = SearchQuery::new()
    ///     .term("treatment")
    ///     .published_between(2020, None)?;
    /// assert_eq!(query.build()?, "treatment 2020:3000[pdat]");
    /// # Ok::<(), QueryError>(())
    /// ```
    pub fn published_between(
        mut self,
        start_year: u32,
        end_year: impl Into<Option<u32>>,
    ) -> Result<Self> {
        validate_year(start_year)?;
        let end_year = end_year.into().unwrap_or(MAX_YEAR);
        validate_year(end_year)?;
        if start_year > end_year {
            return Err(QueryError::InvalidArgument(
                "start year must not be greater than end year".to_string(),
            ));
        }
        self.fragments.push(format!("{start_year}:{end_year}[pdat]"));
        Ok(self)
    }

    /// Filter to articles published in `year` or later
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_query::{QueryError, SearchQuery};
    ///
    /// let query = SearchQuery::new().term("crispr").published_after(2020)?;
    /// assert_eq!(query.build()?, "crispr 2020:3000[pdat]");
    /// # Ok::<(), QueryError>(())
    /// ```
    pub fn published_after(self, year: u32) -> Result<Self> {
        self.published_between(year, None)
    }

    /// Filter to articles published in `year` or earlier
    ///
    /// The range floor is fixed at 1900, so years before 1900 are
    /// rejected by the range-ordering rule.
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_query::{QueryError, SearchQuery};
    ///
    /// let query = SearchQuery::new().term("genome").published_before(2020)?;
    /// assert_eq!(query.build()?, "genome 1900:2020[pdat]");
    /// # Ok::<(), QueryError>(())
    /// ```
    pub fn published_before(self, year: u32) -> Result<Self> {
        self.published_between(OPEN_LOWER_BOUND, year)
    }

    /// Filter to articles published in a specific year
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_query::{QueryError, SearchQuery};
    ///
    /// let query = SearchQuery::new().term("covid-19").published_in_year(2024)?;
    /// assert_eq!(query.build()?, "covid-19 2024[pdat]");
    /// # Ok::<(), QueryError>(())
    /// ```
    pub fn published_in_year(mut self, year: u32) -> Result<Self> {
        validate_year(year)?;
        self.fragments.push(format!("{year}[pdat]"));
        Ok(self)
    }
}
