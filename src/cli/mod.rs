//! Command-line surface: encode, decode, dump, eval.

mod args;
mod handlers;

use clap::Parser;

use args::{Cli, Command};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Encode(args) => handlers::encode::handle(args),
        Command::Decode(args) => handlers::decode::handle(args),
        Command::Dump(args) => handlers::dump::handle(args),
        Command::Eval(args) => handlers::eval::handle(args),
    }
}
