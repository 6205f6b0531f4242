//! Ranked-list evaluation with priced relevance judgments.
//!
//! Judgments arrive in trec_eval qrels format:
//!
//! ```text
//! 1 0 AP880212-0161 1
//! ```
//!
//! query id, an ignored column, document id, score. Item prices reuse the
//! same container under the pseudo-query `PRICE`, with the score column
//! holding the price. Any price is legal — 0 is "free" — and the unit is
//! irrelevant as long as it is consistent.

use serde::Serialize;

/// Pseudo-query id under which item prices are stored.
pub const PRICE_QUERY_ID: &str = "PRICE";

/// Errors raised while parsing assessment files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluateError {
    /// A qrels line did not have four whitespace-separated columns with a
    /// numeric final column.
    MalformedJudgment { line: usize, text: String },
}

impl std::fmt::Display for EvaluateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvaluateError::MalformedJudgment { line, text } => {
                write!(f, "malformed judgment on line {}: {:?}", line, text)
            }
        }
    }
}

impl std::error::Error for EvaluateError {}

/// One relevance (or price) judgment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Judgment {
    pub query_id: String,
    pub document_id: String,
    pub score: f64,
}

/// A sorted set of judgments, binary-searchable by `(query, document)`.
#[derive(Debug, Clone, Default)]
pub struct Assessments {
    judgments: Vec<Judgment>,
}

impl Assessments {
    /// Parse trec_eval qrels text. Blank lines are skipped; anything else
    /// malformed is an error.
    pub fn from_trec_qrels(text: &str) -> Result<Self, EvaluateError> {
        let mut judgments = Vec::new();

        for (number, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let mut columns = line.split_whitespace();
            let (Some(query_id), Some(_iteration), Some(document_id), Some(score)) = (
                columns.next(),
                columns.next(),
                columns.next(),
                columns.next(),
            ) else {
                return Err(EvaluateError::MalformedJudgment {
                    line: number + 1,
                    text: line.to_string(),
                });
            };
            let score: f64 = score.parse().map_err(|_| EvaluateError::MalformedJudgment {
                line: number + 1,
                text: line.to_string(),
            })?;

            judgments.push(Judgment {
                query_id: query_id.to_string(),
                document_id: document_id.to_string(),
                score,
            });
        }

        judgments.sort_by(|a, b| {
            (a.query_id.as_str(), a.document_id.as_str())
                .cmp(&(b.query_id.as_str(), b.document_id.as_str()))
        });
        Ok(Assessments { judgments })
    }

    /// Look up one judgment by query and document id.
    pub fn find(&self, query_id: &str, document_id: &str) -> Option<&Judgment> {
        self.judgments
            .binary_search_by(|judgment| {
                (judgment.query_id.as_str(), judgment.document_id.as_str())
                    .cmp(&(query_id, document_id))
            })
            .ok()
            .map(|at| &self.judgments[at])
    }

    /// All judgments for one query (a contiguous run of the sorted set).
    pub fn for_query(&self, query_id: &str) -> &[Judgment] {
        let start = self
            .judgments
            .partition_point(|judgment| judgment.query_id.as_str() < query_id);
        let end = start
            + self.judgments[start..]
                .partition_point(|judgment| judgment.query_id == query_id);
        &self.judgments[start..end]
    }

    pub fn len(&self) -> usize {
        self.judgments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.judgments.is_empty()
    }

    /// The price of one item, if listed.
    pub fn price(&self, document_id: &str) -> Option<f64> {
        self.find(PRICE_QUERY_ID, document_id)
            .map(|judgment| judgment.score)
    }
}

/// Precision against the k cheapest relevant items.
///
/// The effective depth is the smaller of `depth` and the number of relevant
/// items, so a query with a single relevant item is scored at depth 1. A
/// query with no relevant items scores a perfect 1.0.
pub struct CheapestPrecision<'a> {
    assessments: &'a Assessments,
}

impl<'a> CheapestPrecision<'a> {
    pub fn new(assessments: &'a Assessments) -> Self {
        CheapestPrecision { assessments }
    }

    pub fn compute(&self, query_id: &str, results: &[String], depth: usize) -> f64 {
        let relevant: Vec<&Judgment> = self
            .assessments
            .for_query(query_id)
            .iter()
            .filter(|judgment| judgment.score != 0.0)
            .collect();

        if relevant.is_empty() {
            return 1.0;
        }
        let query_depth = relevant.len().min(depth);

        let found = results
            .iter()
            .take(depth)
            .filter(|result| {
                relevant
                    .binary_search_by(|judgment| judgment.document_id.as_str().cmp(result))
                    .is_ok()
            })
            .count();

        found as f64 / query_depth as f64
    }
}

/// Selling power of a results list: how close the prices charged for the
/// relevant items found come to the ideal (cheapest-first) prices.
///
/// Shop-front model: the ideal gain vector is the relevant items' prices
/// sorted low to high, and k advances only when a relevant item is found.
/// At each found item the ratio of cumulative ideal cost to cumulative
/// charged cost is taken; the mean of those ratios is the metric. The
/// ideal cost of k items is the cheapest way to buy k relevant items, so
/// every ratio — and the metric — stays in [0, 1]. Non-relevant results
/// contribute nothing. No relevant items at all scores 1.0; none found in
/// the list scores 0.0.
pub struct SellingPower<'a> {
    prices: &'a Assessments,
    assessments: &'a Assessments,
}

impl<'a> SellingPower<'a> {
    pub fn new(prices: &'a Assessments, assessments: &'a Assessments) -> Self {
        SellingPower {
            prices,
            assessments,
        }
    }

    pub fn compute(&self, query_id: &str, results: &[String], depth: usize) -> f64 {
        let relevant: Vec<&Judgment> = self
            .assessments
            .for_query(query_id)
            .iter()
            .filter(|judgment| judgment.score != 0.0)
            .collect();

        if relevant.is_empty() {
            return 1.0;
        }

        let mut ideal_prices: Vec<f64> = relevant
            .iter()
            .map(|judgment| self.prices.price(&judgment.document_id).unwrap_or(0.0))
            .collect();
        ideal_prices.sort_by(|a, b| a.total_cmp(b));

        let mut sum = 0.0;
        let mut found = 0usize;
        let mut ideal_cost = 0.0;
        let mut charged_cost = 0.0;
        for result in results.iter().take(depth) {
            let is_relevant = relevant
                .binary_search_by(|judgment| judgment.document_id.as_str().cmp(result))
                .is_ok();
            if !is_relevant {
                continue;
            }

            ideal_cost += ideal_prices[found];
            charged_cost += self.prices.price(result).unwrap_or(0.0);
            // charged_cost == 0 means every item so far was free, and the
            // cheapest way to buy free items is free: a perfect ratio.
            sum += if charged_cost > 0.0 {
                ideal_cost / charged_cost
            } else {
                1.0
            };
            found += 1;
            if found == ideal_prices.len() {
                break;
            }
        }

        if found == 0 {
            return 0.0;
        }
        sum / found as f64
    }
}
