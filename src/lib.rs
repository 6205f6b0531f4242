//! lanepack: postings-list compression for search engines.
//!
//! The core is a block-structured integer codec: 68-byte blocks of one
//! selector word plus sixteen bit-packed payload lanes, encoded at an
//! adaptive per-slice bit width and decoded 16 integers at a time with
//! vector operations (AVX2 when available, a bit-identical scalar loop
//! everywhere else).
//!
//! Around the codec sit the pieces an impact-ordered index needs:
//! postings-list accumulation during indexing, two-pass uniform score
//! quantization, and priced-relevance evaluation of ranked result lists.

mod bits;
mod codec;
mod evaluate;
mod masks;
mod postings;
mod quantize;
mod selector;
mod simd;

#[cfg(feature = "cli")]
pub mod cli;

pub use bits::{bits_needed, lowest_set_bit};
pub use codec::{
    BLOCK_BYTES, DecodeError, EncodeError, LANES, SELECTOR_BYTES, decode, decoded_capacity,
    encode, encoded_upper_bound,
};
pub use evaluate::{
    Assessments, CheapestPrecision, EvaluateError, Judgment, PRICE_QUERY_ID, SellingPower,
};
pub use postings::{Posting, Postings, PostingsList};
pub use quantize::{
    AtireBm25, LARGEST_IMPACT, Quantizer, RankingFunction, SMALLEST_IMPACT,
};
pub use selector::SelectorWidths;
