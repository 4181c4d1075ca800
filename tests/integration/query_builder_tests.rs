//! Integration tests for the search query builder
//!
//! Exercises the public API end-to-end: term accumulation and silent
//! blank filtering, eager filter validation, the rendered query grammar,
//! and the limit/sort metadata an executor reads alongside the string.

use pubmed_query::{ArticleType, Language, QueryError, SearchQuery, SortOrder};
use rstest::rstest;
use tracing_test::traced_test;

// ================================================================================================
// End-to-end construction
// ================================================================================================

#[test]
fn test_end_to_end_chained_query() {
    let query = SearchQuery::new()
        .term("covid-19")
        .term("vaccine")
        .published_between(2020, 2024)
        .unwrap()
        .limit(50)
        .unwrap();

    assert_eq!(query.build().unwrap(), "covid-19 vaccine 2020:2024[pdat]");
    assert_eq!(query.get_limit(), 50);
}

#[test]
fn test_fragments_render_in_call_order() {
    let query = SearchQuery::new()
        .term("influenza")
        .published_after(2015)
        .unwrap()
        .article_type("Review")
        .unwrap()
        .term("transmission")
        .mesh_term("Disease Outbreaks");

    assert_eq!(
        query.build().unwrap(),
        "influenza 2015:3000[pdat] Review[pt] transmission Disease Outbreaks[MeSH Terms]"
    );
}

#[test]
fn test_conditional_query_building() {
    let include_dates = true;
    let extra_terms: Vec<&str> = Vec::new();

    let mut query = SearchQuery::new().term("sepsis").terms(extra_terms);
    if include_dates {
        query = query.published_between(2018, None).unwrap();
    }

    assert_eq!(query.build().unwrap(), "sepsis 2018:3000[pdat]");
}

#[test]
fn test_build_twice_yields_identical_strings() {
    let query = SearchQuery::new()
        .terms(["covid-19", "vaccine"])
        .published_in_year(2024)
        .unwrap();

    assert_eq!(query.build().unwrap(), query.build().unwrap());
}

#[test]
fn test_rendered_string_has_clean_whitespace() {
    let query = SearchQuery::new()
        .term("  covid-19 ")
        .term("vaccine")
        .published_in_year(2024)
        .unwrap();
    let built = query.build().unwrap();

    assert_eq!(built, built.trim());
    assert!(!built.contains("  "));
}

// ================================================================================================
// Empty-state failures
// ================================================================================================

#[test]
fn test_empty_builder_fails_with_invalid_state() {
    let err = SearchQuery::new().build().unwrap_err();
    assert_eq!(
        err,
        QueryError::InvalidState("no search terms provided".to_string())
    );
    assert_eq!(
        err.to_string(),
        "cannot build query: no search terms provided"
    );
}

#[test]
fn test_only_blank_and_absent_terms_fail_with_invalid_state() {
    let query = SearchQuery::new()
        .opt_term(None::<&str>)
        .term("")
        .term("   ")
        .opt_terms(vec![None::<&str>, None]);

    assert!(matches!(query.build(), Err(QueryError::InvalidState(_))));
}

#[traced_test]
#[test]
fn test_blank_terms_are_skipped_silently() {
    let query = SearchQuery::new().term("   ").term("cancer");

    assert_eq!(query.build().unwrap(), "cancer");
    assert!(logs_contain("skipping blank or absent search term"));
}

// ================================================================================================
// Result-size hint
// ================================================================================================

#[rstest]
#[case::minimum(1)]
#[case::typical(50)]
#[case::maximum(10_000)]
fn test_limit_accepts_valid_values(#[case] limit: usize) {
    let query = SearchQuery::new().term("cancer").limit(limit).unwrap();
    assert_eq!(query.get_limit(), limit);
    // The limit is executor metadata, not part of the query grammar
    assert_eq!(query.build().unwrap(), "cancer");
}

#[rstest]
#[case::zero(0, "limit must be greater than 0")]
#[case::just_over(10_001, "limit should not exceed 10,000")]
#[case::far_over(20_000, "limit should not exceed 10,000")]
fn test_limit_rejects_out_of_range(#[case] limit: usize, #[case] message: &str) {
    let err = SearchQuery::new().term("cancer").limit(limit).unwrap_err();
    assert_eq!(err, QueryError::InvalidArgument(message.to_string()));
}

#[test]
fn test_unset_limit_defaults_to_20() {
    let query = SearchQuery::new().term("cancer");
    assert_eq!(query.get_limit(), 20);
}

#[test]
fn test_limit_none_reverts_to_default() {
    let query = SearchQuery::new()
        .term("cancer")
        .limit(500)
        .unwrap()
        .limit(None)
        .unwrap();
    assert_eq!(query.get_limit(), 20);
}

// ================================================================================================
// Date filtering
// ================================================================================================

#[test]
fn test_date_filter_grammar() {
    let query = SearchQuery::new()
        .term("cancer")
        .published_between(2020, 2023)
        .unwrap();
    assert_eq!(query.build().unwrap(), "cancer 2020:2023[pdat]");

    let query = SearchQuery::new()
        .term("diabetes")
        .published_between(2020, None)
        .unwrap();
    assert_eq!(query.build().unwrap(), "diabetes 2020:3000[pdat]");

    let query = SearchQuery::new().term("crispr").published_after(2020).unwrap();
    assert_eq!(query.build().unwrap(), "crispr 2020:3000[pdat]");

    let query = SearchQuery::new()
        .term("epidemiology")
        .published_before(2020)
        .unwrap();
    assert_eq!(query.build().unwrap(), "epidemiology 1900:2020[pdat]");

    let query = SearchQuery::new()
        .term("covid-19")
        .published_in_year(2024)
        .unwrap();
    assert_eq!(query.build().unwrap(), "covid-19 2024[pdat]");
}

#[rstest]
#[case::three_digits(999)]
#[case::below_floor(1799)]
#[case::above_ceiling(3001)]
#[case::far_future(5000)]
fn test_invalid_years_rejected(#[case] year: u32) {
    let err = SearchQuery::new()
        .term("topic")
        .published_in_year(year)
        .unwrap_err();
    assert_eq!(
        err,
        QueryError::InvalidArgument("year must be between 1800 and 3000".to_string())
    );
}

#[rstest]
#[case::floor(1800)]
#[case::ceiling(3000)]
fn test_boundary_years_accepted(#[case] year: u32) {
    let query = SearchQuery::new()
        .term("topic")
        .published_in_year(year)
        .unwrap();
    assert_eq!(query.build().unwrap(), format!("topic {year}[pdat]"));
}

#[test]
fn test_inverted_date_range_rejected() {
    let err = SearchQuery::new()
        .term("topic")
        .published_between(2024, 2020)
        .unwrap_err();
    assert_eq!(
        err,
        QueryError::InvalidArgument("start year must not be greater than end year".to_string())
    );
}

// ================================================================================================
// Article-type filtering
// ================================================================================================

#[rstest]
#[case("Clinical Trial", "Clinical Trial[pt]")]
#[case("Review", "Review[pt]")]
#[case("Systematic Review", "Systematic Review[pt]")]
#[case("Meta-Analysis", "Meta-Analysis[pt]")]
#[case("Case Reports", "Case Reports[pt]")]
#[case("Randomized Controlled Trial", "Randomized Controlled Trial[pt]")]
#[case("Observational Study", "Observational Study[pt]")]
fn test_all_supported_article_types(#[case] name: &str, #[case] tag: &str) {
    let query = SearchQuery::new().term("topic").article_type(name).unwrap();
    assert_eq!(query.build().unwrap(), format!("topic {tag}"));
}

#[rstest]
#[case("clinical trial")]
#[case("CLINICAL TRIAL")]
#[case("Clinical Trial")]
fn test_article_type_resolution_ignores_case(#[case] name: &str) {
    let query = SearchQuery::new().term("diabetes").article_type(name).unwrap();
    assert_eq!(query.build().unwrap(), "diabetes Clinical Trial[pt]");
}

#[test]
fn test_rct_shorthand_resolves_to_canonical_name() {
    let query = SearchQuery::new().term("sepsis").article_type("RCT").unwrap();
    assert_eq!(
        query.build().unwrap(),
        "sepsis Randomized Controlled Trial[pt]"
    );
}

#[test]
fn test_unknown_article_type_rejected_with_supported_list() {
    let err = SearchQuery::new()
        .term("topic")
        .article_type("Invalid Type")
        .unwrap_err();

    assert!(matches!(err, QueryError::InvalidArgument(_)));
    let message = err.to_string();
    assert!(message.contains("Invalid Type"));
    assert!(message.contains("Clinical Trial"));
    assert!(message.contains("Observational Study"));
}

#[test]
fn test_article_types_empty_list_appends_nothing() {
    let names: Vec<String> = Vec::new();
    let query = SearchQuery::new()
        .term("research")
        .article_types(&names)
        .unwrap();
    assert_eq!(query.build().unwrap(), "research");
}

#[test]
fn test_article_types_combine_into_one_or_fragment() {
    let query = SearchQuery::new()
        .term("treatment")
        .article_types(&["RCT", "Meta-Analysis"])
        .unwrap();
    assert_eq!(
        query.build().unwrap(),
        "treatment Randomized Controlled Trial[pt] OR Meta-Analysis[pt]"
    );
}

#[test]
fn test_article_types_group_stays_adjacent() {
    let query = SearchQuery::new()
        .article_types(&["Review", "Systematic Review"])
        .unwrap()
        .term("asthma");
    assert_eq!(
        query.build().unwrap(),
        "Review[pt] OR Systematic Review[pt] asthma"
    );
}

// ================================================================================================
// Supplemental filters
// ================================================================================================

#[test]
fn test_language_and_subset_filters() {
    let query = SearchQuery::new()
        .term("machine learning")
        .free_full_text()
        .language(Language::English);
    assert_eq!(
        query.build().unwrap(),
        "machine learning free full text[sb] English[lang]"
    );
}

#[test]
fn test_mesh_and_author_query() {
    let query = SearchQuery::new()
        .mesh_major_topic("COVID-19")
        .mesh_subheading("prevention & control")
        .first_author("Smith J")
        .published_after(2022)
        .unwrap();

    assert_eq!(
        query.build().unwrap(),
        "COVID-19[MeSH Major Topic] prevention & control[MeSH Subheading] Smith J[First Author] 2022:3000[pdat]"
    );
}

// ================================================================================================
// Executor metadata round-trip
// ================================================================================================

#[test]
fn test_query_survives_serialization_with_metadata() {
    let query = SearchQuery::new()
        .term("covid-19")
        .article_type("RCT")
        .unwrap()
        .limit(100)
        .unwrap()
        .sort(SortOrder::PublicationDate);

    let json = serde_json::to_string(&query).unwrap();
    let restored: SearchQuery = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.build().unwrap(), query.build().unwrap());
    assert_eq!(restored.get_limit(), 100);
    assert_eq!(restored.get_sort(), Some(&SortOrder::PublicationDate));
}

#[test]
fn test_article_type_vocabulary_deserializes_from_snake_case() {
    let types: Vec<ArticleType> =
        serde_json::from_str(r#"["randomized_controlled_trial", "meta_analysis"]"#).unwrap();
    assert_eq!(
        types,
        vec![
            ArticleType::RandomizedControlledTrial,
            ArticleType::MetaAnalysis
        ]
    );
}

#[test]
fn test_sort_order_maps_to_eutilities_params() {
    let query = SearchQuery::new()
        .term("asthma")
        .sort(SortOrder::PublicationDate);
    assert_eq!(query.get_sort().unwrap().as_param(), "pub_date");
}
