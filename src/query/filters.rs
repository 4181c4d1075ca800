//! Filter vocabularies and enums for PubMed query filtering

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{QueryError, Result};

use super::builder::SearchQuery;

/// Article types that can be filtered in PubMed searches
///
/// Input names resolve case-insensitively and include shorthand aliases
/// ("RCT", "meta analysis", "case report"); the rendered `[pt]` filter
/// always uses the canonical PubMed spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArticleType {
    /// Clinical trials
    ClinicalTrial,
    /// Review articles
    Review,
    /// Systematic reviews
    SystematicReview,
    /// Meta-analysis
    MetaAnalysis,
    /// Case reports
    CaseReport,
    /// Randomized controlled trials
    RandomizedControlledTrial,
    /// Observational studies
    ObservationalStudy,
}

impl ArticleType {
    /// All supported article types
    pub const ALL: [ArticleType; 7] = [
        ArticleType::ClinicalTrial,
        ArticleType::Review,
        ArticleType::SystematicReview,
        ArticleType::MetaAnalysis,
        ArticleType::CaseReport,
        ArticleType::RandomizedControlledTrial,
        ArticleType::ObservationalStudy,
    ];

    /// Canonical PubMed name for this publication type
    pub fn name(&self) -> &'static str {
        match self {
            ArticleType::ClinicalTrial => "Clinical Trial",
            ArticleType::Review => "Review",
            ArticleType::SystematicReview => "Systematic Review",
            ArticleType::MetaAnalysis => "Meta-Analysis",
            ArticleType::CaseReport => "Case Reports",
            ArticleType::RandomizedControlledTrial => "Randomized Controlled Trial",
            ArticleType::ObservationalStudy => "Observational Study",
        }
    }

    pub(crate) fn to_query_string(self) -> String {
        format!("{}[pt]", self.name())
    }
}

fn supported_type_names() -> String {
    let names: Vec<&str> = ArticleType::ALL.iter().map(|t| t.name()).collect();
    names.join(", ")
}

impl FromStr for ArticleType {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "clinical trial" => Ok(ArticleType::ClinicalTrial),
            "review" => Ok(ArticleType::Review),
            "systematic review" => Ok(ArticleType::SystematicReview),
            "meta-analysis" | "meta analysis" => Ok(ArticleType::MetaAnalysis),
            "case reports" | "case report" => Ok(ArticleType::CaseReport),
            "randomized controlled trial" | "rct" => Ok(ArticleType::RandomizedControlledTrial),
            "observational study" => Ok(ArticleType::ObservationalStudy),
            _ => Err(QueryError::InvalidArgument(format!(
                "unknown article type: '{s}'. Supported types: {}",
                supported_type_names()
            ))),
        }
    }
}

/// Language options for filtering articles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    English,
    Japanese,
    German,
    French,
    Spanish,
    Italian,
    Chinese,
    /// Any other language accepted by the `[lang]` field tag
    Other(String),
}

impl Language {
    pub(crate) fn to_query_string(&self) -> String {
        let name = match self {
            Language::English => "English",
            Language::Japanese => "Japanese",
            Language::German => "German",
            Language::French => "French",
            Language::Spanish => "Spanish",
            Language::Italian => "Italian",
            Language::Chinese => "Chinese",
            Language::Other(lang) => lang.as_str(),
        };
        format!("{name}[lang]")
    }
}

/// Sort order for search results
///
/// Carried alongside the query string as executor metadata; the value
/// maps onto the E-utilities `sort` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Best match first (the service default)
    Relevance,
    /// Newest first
    PublicationDate,
    /// First author name, alphabetical
    FirstAuthor,
    /// Journal name, alphabetical
    JournalName,
}

impl SortOrder {
    /// Value for the E-utilities `sort` query parameter
    pub fn as_param(&self) -> &'static str {
        match self {
            SortOrder::Relevance => "relevance",
            SortOrder::PublicationDate => "pub_date",
            SortOrder::FirstAuthor => "Author",
            SortOrder::JournalName => "JournalName",
        }
    }
}

impl SearchQuery {
    /// Filter by a single article type
    ///
    /// The name is resolved case-insensitively against the supported
    /// types, including shorthand aliases such as "RCT".
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidArgument`] naming the supported
    /// types when the name does not resolve.
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_query::{QueryError, SearchQuery};
    ///
    /// let query = SearchQuery::new().term("sepsis").article_type("RCT")?;
    /// assert_eq!(query.build()?, "sepsis Randomized Controlled Trial[pt]");
    /// # Ok::<(), QueryError>(())
    /// ```
    pub fn article_type<S: AsRef<str>>(mut self, name: S) -> Result<Self> {
        let article_type: ArticleType = name.as_ref().parse()?;
        self.fragments.push(article_type.to_query_string());
        Ok(self)
    }

    /// Filter by several article types combined into one OR group
    ///
    /// All names are resolved before anything is appended, so a failure
    /// leaves the query untouched. An empty list is a no-op. The group
    /// renders as a single fragment without surrounding parentheses;
    /// enclosing boolean grouping is the call site's concern.
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_query::{QueryError, SearchQuery};
    ///
    /// let query = SearchQuery::new()
    ///     .term("treatment")
    ///     .article_types(&["RCT", "Meta-Analysis"])?;
    /// assert_eq!(
    ///     query.build()?,
    ///     "treatment Randomized Controlled Trial[pt] OR Meta-Analysis[pt]"
    /// );
    /// # Ok::<(), QueryError>(())
    /// ```
    pub fn article_types<S: AsRef<str>>(mut self, names: &[S]) -> Result<Self> {
        if names.is_empty() {
            return Ok(self);
        }
        let tags = names
            .iter()
            .map(|name| {
                name.as_ref()
                    .parse::<ArticleType>()
                    .map(ArticleType::to_query_string)
            })
            .collect::<Result<Vec<_>>>()?;
        self.fragments.push(tags.join(" OR "));
        Ok(self)
    }

    /// Filter by language
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_query::{Language, QueryError, SearchQuery};
    ///
    /// let query = SearchQuery::new()
    ///     .term("stem cells")
    ///     .language(Language::English);
    /// assert_eq!(query.build()?, "stem cells English[lang]");
    /// # Ok::<(), QueryError>(())
    /// ```
    pub fn language(mut self, language: Language) -> Self {
        self.fragments.push(language.to_query_string());
        self
    }

    /// Filter to clinical trials only
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_query::{QueryError, SearchQuery};
    ///
    /// let query = SearchQuery::new()
    ///     .term("diabetes treatment")
    ///     .clinical_trials_only();
    /// assert_eq!(query.build()?, "diabetes treatment Clinical Trial[pt]");
    /// # Ok::<(), QueryError>(())
    /// ```
    pub fn clinical_trials_only(mut self) -> Self {
        self.fragments
            .push(ArticleType::ClinicalTrial.to_query_string());
        self
    }
}
