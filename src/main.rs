use clap::Parser;
use std::io::{self, BufWriter};
use unique_move_effects::app::{handle_fatal_error, init_logging};
use unique_move_effects::cli::Cli;

fn main() {
    let config = Cli::parse().into_config();
    init_logging(&config);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if let Err(e) = unique_move_effects::run(&config, &mut out) {
        handle_fatal_error(e, config.verbose);
    }
}
