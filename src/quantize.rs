//! Uniform score quantization for impact-ordered indexes.
//!
//! Retrieval-status values (RSVs) are real numbers; an impact-ordered index
//! stores them as small integers so postings stay compressible. The
//! [`Quantizer`] runs in two passes over the whole index: pass one
//! ([`Quantizer::observe`]) records the global RSV bounds, pass two
//! ([`Quantizer::quantize`]) rewrites each term frequency as an impact in
//! `SMALLEST_IMPACT..=LARGEST_IMPACT`.

/// Lowest impact score a posting can carry (0 is reserved).
pub const SMALLEST_IMPACT: u16 = 1;

/// Highest impact score a posting can carry.
pub const LARGEST_IMPACT: u16 = 255;

const IMPACT_RANGE: f64 = (LARGEST_IMPACT - SMALLEST_IMPACT) as f64;

/// A term-document scoring strategy.
///
/// `prepare` is called once per postings list with the collection-wide
/// statistics; `score` is then called per posting with a 0-based document
/// index (document IDs count from 1 on the wire).
pub trait RankingFunction {
    fn prepare(&mut self, document_frequency: u32, documents_in_collection: u32);
    fn score(&self, document: u32, term_frequency: u16) -> f64;
}

/// ATIRE-flavored BM25: `idf = ln(N / df)`, no document-frequency
/// smoothing, length normalization against the mean document length.
#[derive(Debug, Clone)]
pub struct AtireBm25 {
    k1: f64,
    b: f64,
    idf: f64,
    mean_document_length: f64,
    document_lengths: Vec<u32>,
}

impl AtireBm25 {
    pub fn new(k1: f64, b: f64, document_lengths: Vec<u32>) -> Self {
        let total: u64 = document_lengths.iter().map(|&length| u64::from(length)).sum();
        let mean_document_length = if document_lengths.is_empty() {
            0.0
        } else {
            total as f64 / document_lengths.len() as f64
        };
        AtireBm25 {
            k1,
            b,
            idf: 0.0,
            mean_document_length,
            document_lengths,
        }
    }
}

impl RankingFunction for AtireBm25 {
    fn prepare(&mut self, document_frequency: u32, documents_in_collection: u32) {
        self.idf = (f64::from(documents_in_collection) / f64::from(document_frequency)).ln();
    }

    fn score(&self, document: u32, term_frequency: u16) -> f64 {
        let tf = f64::from(term_frequency);
        let length = f64::from(self.document_lengths[document as usize]);
        let normalizer = self.k1 * (1.0 - self.b + self.b * length / self.mean_document_length);
        self.idf * (tf * (self.k1 + 1.0)) / (tf + normalizer)
    }
}

/// Two-pass uniform quantizer over an index's postings lists.
#[derive(Debug)]
pub struct Quantizer<R: RankingFunction> {
    smallest_rsv: f64,
    largest_rsv: f64,
    ranker: R,
    documents_in_collection: u32,
}

impl<R: RankingFunction> Quantizer<R> {
    pub fn new(documents_in_collection: u32, ranker: R) -> Self {
        Quantizer {
            smallest_rsv: f64::MAX,
            largest_rsv: f64::MIN,
            ranker,
            documents_in_collection,
        }
    }

    /// Pass one: score one postings list and widen the global RSV bounds.
    ///
    /// `document_ids` count from 1; `term_frequencies` runs parallel to it.
    pub fn observe(&mut self, document_ids: &[u32], term_frequencies: &[u16]) {
        self.ranker
            .prepare(document_ids.len() as u32, self.documents_in_collection);

        for (&id, &frequency) in document_ids.iter().zip(term_frequencies) {
            let score = self.ranker.score(id - 1, frequency);
            if score < self.smallest_rsv {
                self.smallest_rsv = score;
            }
            if score > self.largest_rsv {
                self.largest_rsv = score;
            }
        }
    }

    /// The `(smallest, largest)` RSV seen so far. Meaningful only after the
    /// first pass has visited every postings list.
    pub fn bounds(&self) -> (f64, f64) {
        (self.smallest_rsv, self.largest_rsv)
    }

    /// Pass two: re-score one postings list and overwrite each term
    /// frequency with its impact.
    ///
    /// When every score in the collection is identical the range collapses;
    /// everything maps to [`SMALLEST_IMPACT`].
    pub fn quantize(&mut self, document_ids: &[u32], term_frequencies: &mut [u16]) {
        self.ranker
            .prepare(document_ids.len() as u32, self.documents_in_collection);

        let range = self.largest_rsv - self.smallest_rsv;
        for (&id, frequency) in document_ids.iter().zip(term_frequencies.iter_mut()) {
            let score = self.ranker.score(id - 1, *frequency);
            let scaled = if range > 0.0 {
                (score - self.smallest_rsv) / range * IMPACT_RANGE
            } else {
                0.0
            };
            *frequency = scaled as u16 + SMALLEST_IMPACT;
        }
    }
}
