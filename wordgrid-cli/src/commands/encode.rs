//! Coordinate to address.

use clap::Args;
use tracing::info;
use wordgrid::converter::protocol::ForwardRequest;

use super::print_json;
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for `wordgrid encode`.
#[derive(Debug, Args)]
pub struct EncodeArgs {
    /// Latitude in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lng: f64,

    /// Print the JSON response instead of the dotted address
    #[arg(long)]
    pub json: bool,
}

/// Run the encode command.
pub fn run(runner: &CliRunner, args: EncodeArgs) -> Result<(), CliError> {
    runner.log_startup("encode");
    let converter = runner.create_converter()?;

    if args.json {
        let request = ForwardRequest {
            latitude: args.lat,
            longitude: args.lng,
        };
        return match converter.handle_forward(&request) {
            Ok(response) => print_json(&response),
            Err(payload) => {
                print_json(&payload)?;
                Err(CliError::Request(payload))
            }
        };
    }

    let words = converter.coords_to_words(args.lat, args.lng)?;
    info!(lat = args.lat, lng = args.lng, words = %words, "Encoded");
    println!("{}", words);
    Ok(())
}
