use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

use movie_locale::{MONTH_LABELS, WEEKDAY_LABELS};
use movie_model::{MovieRecord, NamedRef};
use movie_query::{QueryEngine, QueryError};
use movie_store::DatasetStore;

struct Movie<'a> {
    title: &'a str,
    date: (i32, u32, u32),
    budget: f64,
    revenue: f64,
    collection: Option<&'a str>,
    countries: &'a [&'a str],
    companies: &'a [&'a str],
}

fn record(movie: &Movie<'_>) -> MovieRecord {
    let release_date = NaiveDate::from_ymd_opt(movie.date.0, movie.date.1, movie.date.2).unwrap();
    MovieRecord {
        title: movie.title.to_string(),
        budget: movie.budget,
        revenue: movie.revenue,
        release_date,
        release_year: i16::try_from(release_date.year()).unwrap(),
        return_ratio: MovieRecord::compute_return(movie.revenue, movie.budget),
        collection: movie.collection.map(NamedRef::new),
        production_countries: movie.countries.iter().copied().map(NamedRef::new).collect(),
        production_companies: movie.companies.iter().copied().map(NamedRef::new).collect(),
        extra: Vec::new(),
    }
}

fn engine() -> QueryEngine {
    let movies = [
        Movie {
            title: "Toy Story",
            date: (1995, 10, 30),
            budget: 30_000_000.0,
            revenue: 373_554_033.0,
            collection: Some("Toy Story Collection"),
            countries: &["United States of America"],
            companies: &["Pixar Animation Studios"],
        },
        Movie {
            title: "Toy Story 2",
            date: (1999, 10, 30),
            budget: 90_000_000.0,
            revenue: 497_366_869.0,
            collection: Some("Toy Story Collection"),
            countries: &["United States of America"],
            companies: &["Pixar Animation Studios", "Walt Disney Pictures"],
        },
        Movie {
            title: "La Haine",
            date: (1995, 5, 31),
            budget: 0.0,
            revenue: 0.0,
            collection: None,
            countries: &["France"],
            companies: &["Canal+"],
        },
        Movie {
            title: "la haine",
            date: (2001, 1, 1),
            budget: 10.0,
            revenue: 40.0,
            collection: None,
            countries: &[],
            companies: &[],
        },
    ];
    let records = movies.iter().map(record).collect();
    QueryEngine::new(DatasetStore::load(records).expect("load store"))
}

#[test]
fn counts_by_localized_month_ignoring_case() {
    let engine = engine();
    assert_eq!(engine.count_by_month("octubre").count, 2);
    assert_eq!(engine.count_by_month("OCTUBRE").count, 2);
    assert_eq!(engine.count_by_month("Mayo").count, 1);
    assert_eq!(engine.count_by_month("October").count, 0);
    assert_eq!(engine.count_by_month("octubre").month, "octubre");
}

#[test]
fn counts_by_localized_weekday() {
    let engine = engine();
    // 1995-10-30 Monday, 1999-10-30 Saturday, 1995-05-31 Wednesday, 2001-01-01 Monday.
    assert_eq!(engine.count_by_weekday("lunes").count, 2);
    assert_eq!(engine.count_by_weekday("Sábado").count, 1);
    assert_eq!(engine.count_by_weekday("MIÉRCOLES").count, 1);
    assert_eq!(engine.count_by_weekday("Domingo").count, 0);
}

#[test]
fn franchise_stats_sum_and_average() {
    let stats = engine().franchise_stats("Toy Story Collection");
    assert_eq!(stats.count, 2);
    assert_eq!(stats.total_revenue, 870_920_902.0);
    assert_eq!(stats.average_revenue, 435_460_451.0);
}

#[test]
fn unknown_franchise_is_all_zeros() {
    let stats = engine().franchise_stats("No Such Series");
    assert_eq!(stats.count, 0);
    assert_eq!(stats.total_revenue, 0.0);
    assert_eq!(stats.average_revenue, 0.0);
    assert_eq!(stats.franchise, "No Such Series");
}

#[test]
fn franchise_match_is_exact() {
    assert_eq!(engine().franchise_stats("toy story collection").count, 0);
}

#[test]
fn country_membership() {
    let engine = engine();
    assert_eq!(engine.count_by_country("United States of America").count, 2);
    assert_eq!(engine.count_by_country("France").count, 1);
    assert_eq!(engine.count_by_country("Atlantis").count, 0);
}

#[test]
fn company_stats_aggregate_revenue() {
    let engine = engine();
    let pixar = engine.company_stats("Pixar Animation Studios");
    assert_eq!(pixar.count, 2);
    assert_eq!(pixar.total_revenue, 870_920_902.0);
    let disney = engine.company_stats("Walt Disney Pictures");
    assert_eq!(disney.count, 1);
    assert_eq!(disney.total_revenue, 497_366_869.0);
    let unknown = engine.company_stats("Nobody");
    assert_eq!((unknown.count, unknown.total_revenue), (0, 0.0));
}

#[test]
fn title_return_uses_first_match() {
    let engine = engine();
    let result = engine.title_return("LA HAINE").expect("found");
    assert_eq!(result.title, "LA HAINE");
    assert_eq!(result.year, 1995);
    assert_eq!(result.investment, 0.0);
    assert_eq!(result.return_ratio, 0.0);

    let toy_story = engine.title_return("toy story").expect("found");
    assert_eq!(toy_story.investment, 30_000_000.0);
    assert_eq!(toy_story.return_ratio, 373_554_033.0 / 30_000_000.0);
}

#[test]
fn missing_title_is_not_found() {
    let error = engine()
        .title_return("a movie that does not exist")
        .expect_err("no such movie");
    assert_eq!(
        error,
        QueryError::NotFound {
            title: "a movie that does not exist".to_string()
        }
    );
}

#[test]
fn company_stats_json_shape() {
    let stats = engine().company_stats("Canal+");
    insta::assert_snapshot!(serde_json::to_string_pretty(&stats).unwrap(), @r#"
    {
      "company": "Canal+",
      "total_revenue": 0.0,
      "count": 1
    }
    "#);
}

fn dated_records() -> impl Strategy<Value = Vec<MovieRecord>> {
    prop::collection::vec((1900i32..2030, 1u32..=12, 1u32..=28), 0..60).prop_map(|dates| {
        dates
            .into_iter()
            .map(|date| {
                record(&Movie {
                    title: "",
                    date,
                    budget: 0.0,
                    revenue: 0.0,
                    collection: None,
                    countries: &[],
                    companies: &[],
                })
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn month_and_weekday_counts_partition_the_dataset(records in dated_records()) {
        let total = records.len();
        let engine = QueryEngine::new(DatasetStore::load(records).expect("load store"));
        let by_month: usize = MONTH_LABELS
            .iter()
            .map(|(_, label)| engine.count_by_month(label).count)
            .sum();
        let by_weekday: usize = WEEKDAY_LABELS
            .iter()
            .map(|(_, label)| engine.count_by_weekday(label).count)
            .sum();
        prop_assert_eq!(by_month, total);
        prop_assert_eq!(by_weekday, total);
    }
}
