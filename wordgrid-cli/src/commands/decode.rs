//! Address to coordinate.

use clap::Args;
use tracing::info;
use wordgrid::codec::WordTuple;
use wordgrid::converter::protocol::ReverseRequest;

use super::print_json;
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for `wordgrid decode`.
#[derive(Debug, Args)]
pub struct DecodeArgs {
    /// The address, as `word.word.word` or three separate words
    #[arg(required = true, num_args = 1..)]
    pub words: Vec<String>,

    /// Print the JSON response instead of `lat, lng`
    #[arg(long)]
    pub json: bool,
}

/// Run the decode command.
pub fn run(runner: &CliRunner, args: DecodeArgs) -> Result<(), CliError> {
    runner.log_startup("decode");

    let tuple: WordTuple = args
        .words
        .join(" ")
        .parse()
        .map_err(CliError::InvalidAddress)?;
    let converter = runner.create_converter()?;

    if args.json {
        let request = ReverseRequest {
            words: Vec::from(tuple.into_words()),
        };
        return match converter.handle_reverse(&request) {
            Ok(response) => print_json(&response),
            Err(payload) => {
                print_json(&payload)?;
                Err(CliError::Request(payload))
            }
        };
    }

    let center = converter.words_to_coords(&tuple)?;
    info!(words = %tuple, center = %center, "Decoded");
    println!("{}", center);
    Ok(())
}
