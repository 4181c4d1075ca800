//! Advanced search methods for MeSH terms, authors, and specialized filtering
//!
//! These filters follow the same discipline as free-text terms: values
//! are stored trimmed, and blank values are skipped silently so no
//! fragment ever renders as a bare field tag.

use super::builder::SearchQuery;

impl SearchQuery {
    /// Filter by MeSH term
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_query::{QueryError, SearchQuery};
    ///
    /// let query = SearchQuery::new().mesh_term("Neoplasms");
    /// assert_eq!(query.build()?, "Neoplasms[MeSH Terms]");
    /// # Ok::<(), QueryError>(())
    /// ```
    pub fn mesh_term<S: AsRef<str>>(self, mesh_term: S) -> Self {
        self.push_field(mesh_term, "MeSH Terms")
    }

    /// Filter by multiple MeSH terms
    pub fn mesh_terms<S: AsRef<str>>(mut self, mesh_terms: &[S]) -> Self {
        for term in mesh_terms {
            self = self.mesh_term(term.as_ref());
        }
        self
    }

    /// Filter by MeSH major topic
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_query::{QueryError, SearchQuery};
    ///
    /// let query = SearchQuery::new().mesh_major_topic("Diabetes Mellitus, Type 2");
    /// assert_eq!(query.build()?, "Diabetes Mellitus, Type 2[MeSH Major Topic]");
    /// # Ok::<(), QueryError>(())
    /// ```
    pub fn mesh_major_topic<S: AsRef<str>>(self, mesh_term: S) -> Self {
        self.push_field(mesh_term, "MeSH Major Topic")
    }

    /// Filter by MeSH subheading
    pub fn mesh_subheading<S: AsRef<str>>(self, subheading: S) -> Self {
        self.push_field(subheading, "MeSH Subheading")
    }

    /// Filter by any author
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_query::{QueryError, SearchQuery};
    ///
    /// let query = SearchQuery::new().term("machine learning").author("Williams K");
    /// assert_eq!(query.build()?, "machine learning Williams K[Author]");
    /// # Ok::<(), QueryError>(())
    /// ```
    pub fn author<S: AsRef<str>>(self, author: S) -> Self {
        self.push_field(author, "Author")
    }

    /// Filter by first author
    pub fn first_author<S: AsRef<str>>(self, author: S) -> Self {
        self.push_field(author, "First Author")
    }

    /// Filter by last author
    pub fn last_author<S: AsRef<str>>(self, author: S) -> Self {
        self.push_field(author, "Last Author")
    }

    /// Filter by institution/affiliation
    pub fn affiliation<S: AsRef<str>>(self, institution: S) -> Self {
        self.push_field(institution, "Affiliation")
    }

    /// Filter by ORCID identifier
    pub fn orcid<S: AsRef<str>>(self, orcid_id: S) -> Self {
        self.push_field(orcid_id, "Author - Identifier")
    }

    /// Filter by organism (scientific or common name)
    pub fn organism<S: AsRef<str>>(self, organism: S) -> Self {
        self.push_field(organism, "Organism")
    }

    /// Filter to human studies only
    pub fn human_studies_only(self) -> Self {
        self.push_fragment("humans[mh]")
    }

    /// Filter to animal studies only
    pub fn animal_studies_only(self) -> Self {
        self.push_fragment("animals[mh]")
    }

    /// Filter by age group (e.g., "Child", "Adult", "Aged")
    pub fn age_group<S: AsRef<str>>(self, age_group: S) -> Self {
        self.push_field(age_group, "mh")
    }

    /// Filter to open access articles only
    pub fn open_access_only(self) -> Self {
        self.push_fragment("free full text[sb]")
    }

    /// Filter to articles with free full text
    pub fn free_full_text(self) -> Self {
        self.push_fragment("free full text[sb]")
    }

    /// Filter to articles with any full text, including subscription-based
    pub fn has_full_text(self) -> Self {
        self.push_fragment("full text[sb]")
    }

    /// Filter to articles with abstracts
    pub fn has_abstract(self) -> Self {
        self.push_fragment("hasabstract")
    }

    /// Add a custom filter in raw PubMed syntax
    ///
    /// The filter is appended verbatim (trimmed); blank filters are
    /// skipped like blank terms.
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_query::{QueryError, SearchQuery};
    ///
    /// let query = SearchQuery::new().term("genetics").custom_filter("humans[mh]");
    /// assert_eq!(query.build()?, "genetics humans[mh]");
    /// # Ok::<(), QueryError>(())
    /// ```
    pub fn custom_filter<S: AsRef<str>>(mut self, filter: S) -> Self {
        let trimmed = filter.as_ref().trim();
        if !trimmed.is_empty() {
            self.fragments.push(trimmed.to_string());
        }
        self
    }
}
