use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lanepack")]
#[command(version)]
#[command(
    about = "Block-packed postings compression: encode, decode, and inspect integer streams",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compress a stream of unsigned 32-bit integers into blocks
    Encode(EncodeArgs),
    /// Decompress blocks back into integers
    Decode(DecodeArgs),
    /// Render a compressed stream human-readably, block by block
    Dump(DumpArgs),
    /// Score a ranked results list against priced relevance judgments
    Eval(EvalArgs),
}

/// Arguments for compressing integers
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Read decimal integers, one per line, instead of little-endian u32s
    #[arg(short = 't', long)]
    pub text: bool,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for decompressing blocks
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Number of integers the stream encodes (tracked out of band)
    #[arg(short = 'n', long)]
    pub count: usize,

    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Write decimal integers, one per line, instead of little-endian u32s
    #[arg(short = 't', long)]
    pub text: bool,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for dumping a compressed stream
#[derive(Args, Debug)]
pub struct DumpArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Emit JSON instead of the human-readable rendering
    #[arg(short = 'j', long)]
    pub json: bool,
}

/// Which evaluation metric to compute
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Metric {
    /// Precision against the k cheapest relevant items
    CheapestPrecision,
    /// Cumulative ideal-price over charged-price ratio
    SellingPower,
}

/// Arguments for evaluating a results list
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Metric to compute
    #[arg(short = 'm', long, value_enum)]
    pub metric: Metric,

    /// Relevance assessments in trec_eval qrels format
    #[arg(long)]
    pub qrels: PathBuf,

    /// Item prices in qrels format under the PRICE pseudo-query
    #[arg(long)]
    pub prices: Option<PathBuf>,

    /// Results in trec_eval run format (qid Q0 docid rank score tag)
    #[arg(long)]
    pub run: PathBuf,

    /// How far down each results list to look
    #[arg(short = 'd', long, default_value_t = 1000)]
    pub depth: usize,

    /// Emit JSON instead of one line per query
    #[arg(short = 'j', long)]
    pub json: bool,
}
