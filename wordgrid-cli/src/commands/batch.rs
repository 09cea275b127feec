//! JSON requests from stdin, one response per line on stdout.

use std::io::{self, BufRead, BufWriter, Write};

use tracing::{debug, info};
use wordgrid::converter::protocol::{ErrorPayload, Response};
use wordgrid::converter::CoordinateWordConverter;

use crate::error::CliError;
use crate::runner::CliRunner;

/// Run the batch command.
///
/// Blank lines are skipped. A bad request, including a line that is not
/// UTF-8, produces an error response on its own line and does not stop the
/// batch.
pub fn run(runner: &CliRunner) -> Result<(), CliError> {
    runner.log_startup("batch");
    let converter = runner.create_converter()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = BufWriter::new(stdout.lock());

    let mut buf = Vec::new();
    let mut requests = 0usize;
    let mut failures = 0usize;

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let Some(response) = answer(&converter, &buf) else {
            continue;
        };

        requests += 1;
        if let Response::Error(payload) = &response {
            failures += 1;
            debug!(request = requests, error = %payload.error, "Request failed");
        }

        serde_json::to_writer(&mut out, &response).map_err(io::Error::other)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;

    info!(requests, failures, "Batch complete");
    Ok(())
}

/// Answers one raw input line; `None` for a blank line.
fn answer(converter: &CoordinateWordConverter, raw: &[u8]) -> Option<Response> {
    match std::str::from_utf8(raw) {
        Ok(text) => {
            let line = text.trim();
            (!line.is_empty()).then(|| converter.handle_json(line))
        }
        Err(e) => Some(Response::Error(ErrorPayload::invalid_request(format!(
            "Request is not valid UTF-8: {}",
            e
        )))),
    }
}
