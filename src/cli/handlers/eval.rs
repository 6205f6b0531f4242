use crate::cli::args::{EvalArgs, Metric};
use crate::{Assessments, CheapestPrecision, SellingPower};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;

#[derive(Serialize)]
struct EvalReport {
    metric: String,
    depth: usize,
    per_query: BTreeMap<String, f64>,
    mean: f64,
}

/// Parse a trec_eval run file into per-query ranked document lists.
///
/// Lines are `qid Q0 docid rank score tag`; ranking order is taken from the
/// file order, which is how run files are conventionally written.
fn parse_run(text: &str) -> Result<BTreeMap<String, Vec<String>>, Box<dyn std::error::Error>> {
    let mut runs: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (number, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let mut columns = line.split_whitespace();
        let (Some(query_id), Some(_q0), Some(document_id)) =
            (columns.next(), columns.next(), columns.next())
        else {
            return Err(format!("malformed run line {}: {:?}", number + 1, line).into());
        };
        runs.entry(query_id.to_string())
            .or_default()
            .push(document_id.to_string());
    }
    Ok(runs)
}

pub fn handle(args: EvalArgs) -> Result<(), Box<dyn std::error::Error>> {
    let assessments = Assessments::from_trec_qrels(&fs::read_to_string(&args.qrels)?)?;
    let prices = match &args.prices {
        Some(path) => Assessments::from_trec_qrels(&fs::read_to_string(path)?)?,
        None => Assessments::default(),
    };
    let runs = parse_run(&fs::read_to_string(&args.run)?)?;

    let mut per_query = BTreeMap::new();
    for (query_id, results) in &runs {
        let score = match args.metric {
            Metric::CheapestPrecision => {
                CheapestPrecision::new(&assessments).compute(query_id, results, args.depth)
            }
            Metric::SellingPower => {
                SellingPower::new(&prices, &assessments).compute(query_id, results, args.depth)
            }
        };
        per_query.insert(query_id.clone(), score);
    }

    let mean = if per_query.is_empty() {
        0.0
    } else {
        per_query.values().sum::<f64>() / per_query.len() as f64
    };

    let metric_name = match args.metric {
        Metric::CheapestPrecision => "cheapest-precision",
        Metric::SellingPower => "selling-power",
    };

    if args.json {
        let report = EvalReport {
            metric: metric_name.to_string(),
            depth: args.depth,
            per_query,
            mean,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for (query_id, score) in &per_query {
        println!("{} {} {:.4}", metric_name, query_id, score);
    }
    println!("{} mean {:.4}", metric_name, mean);
    Ok(())
}
