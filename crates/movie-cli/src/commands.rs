use anyhow::Result;
use tracing::info_span;

use movie_cli::pipeline::{
    QueryOutput, QueryRequest, build_options, default_output_path, normalize, open_engine,
    publish, run_query,
};
use movie_locale::{MONTH_LABELS, WEEKDAY_LABELS};

use crate::cli::{NormalizeArgs, QueryArgs, QueryCommand};
use crate::summary::{print_labels, print_normalize_summary, print_query_output};
use crate::types::NormalizeResult;

pub fn run_normalize(args: &NormalizeArgs) -> Result<NormalizeResult> {
    let span = info_span!("run_normalize", input = %args.input.display());
    let _guard = span.enter();
    let options = build_options(&args.drop_columns, &args.keep_columns);
    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));

    let outcome = normalize(&args.input, &options)?;
    let output = publish(&outcome, &output_path, args.dry_run)?;

    let result = NormalizeResult {
        input: args.input.clone(),
        output,
        report: outcome.report,
    };
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_normalize_summary(&result);
    }
    Ok(result)
}

pub fn run_query_command(args: &QueryArgs) -> Result<QueryOutput> {
    let span = info_span!("run_query", dataset = %args.dataset.display());
    let _guard = span.enter();
    let engine = open_engine(&args.dataset)?;
    let output = run_query(&engine, &query_request(&args.query))?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_query_output(&output);
    }
    Ok(output)
}

pub fn run_months() {
    print_labels("Month", &MONTH_LABELS);
}

pub fn run_weekdays() {
    print_labels("Weekday", &WEEKDAY_LABELS);
}

fn query_request(command: &QueryCommand) -> QueryRequest {
    match command {
        QueryCommand::Month(key) => QueryRequest::Month(key.name.clone()),
        QueryCommand::Weekday(key) => QueryRequest::Weekday(key.name.clone()),
        QueryCommand::Franchise(key) => QueryRequest::Franchise(key.name.clone()),
        QueryCommand::Country(key) => QueryRequest::Country(key.name.clone()),
        QueryCommand::Company(key) => QueryRequest::Company(key.name.clone()),
        QueryCommand::Return(key) => QueryRequest::Return(key.name.clone()),
    }
}
