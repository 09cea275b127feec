//! Request and response payloads for callers of the converter.
//!
//! These mirror the JSON contracts used by front ends:
//!
//! ```text
//! {"latitude": 12.97, "longitude": 77.59}  ->  {"words": ["w0", "w1", "w2"]}
//! {"words": ["w0", "w1", "w2"]}            ->  {"coordinates": {"latitude": .., "longitude": ..}}
//! ```
//!
//! Failures become an [`ErrorPayload`]. Input errors carry enough detail to
//! correct the request; internal errors are logged and reported generically.

use serde::{Deserialize, Serialize};

use super::{ConvertError, CoordinateWordConverter, ErrorKind};
use crate::codec::{WordTuple, WORDS_PER_ADDRESS};
use crate::grid::{Coordinate, GridError, RangeError};

/// Coordinate to words.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForwardRequest {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForwardResponse {
    pub words: WordTuple,
}

/// Words to coordinate.
///
/// `words` is a plain list so that a wrong word count can be reported as a
/// payload error instead of a deserialization failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReverseRequest {
    pub words: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReverseResponse {
    pub coordinates: Coordinate,
}

/// Either kind of request, distinguished by its fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Request {
    Forward(ForwardRequest),
    Reverse(ReverseRequest),
}

/// Either kind of successful response, or an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    Forward(ForwardResponse),
    Reverse(ReverseResponse),
    Error(ErrorPayload),
}

/// Error body returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    /// Machine-readable error code
    pub error: String,
    /// Human-readable explanation
    pub message: String,
    /// Words that were not recognized, if any
    #[serde(
        rename = "invalidWords",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub invalid_words: Vec<String>,
}

impl ErrorPayload {
    pub fn new(error: &str, message: impl Into<String>) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
            invalid_words: Vec::new(),
        }
    }

    /// Error for a request that could not be parsed.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new("invalid_request", message)
    }
}

impl From<&ConvertError> for ErrorPayload {
    fn from(err: &ConvertError) -> Self {
        if err.kind() == ErrorKind::Internal {
            tracing::error!(error = %err, "Internal conversion failure");
            return Self::new("internal_error", "The address could not be computed");
        }

        match err {
            ConvertError::Grid(GridError::OutOfBounds { .. }) => {
                Self::new("out_of_bounds", err.to_string())
            }
            ConvertError::Grid(GridError::NotFinite { .. }) => {
                Self::new("invalid_coordinates", err.to_string())
            }
            ConvertError::UnknownWords { words } => Self {
                error: "unknown_words".to_string(),
                message: "Some words are not in the vocabulary".to_string(),
                invalid_words: words.clone(),
            },
            ConvertError::Range(RangeError::Index { .. }) => Self::new(
                "unaddressed_words",
                "These words do not name a location inside the region",
            ),
            ConvertError::Range(RangeError::Cell { .. }) | ConvertError::Codec(_) => {
                Self::new("internal_error", "The address could not be computed")
            }
        }
    }
}

impl CoordinateWordConverter {
    /// Handles a forward request.
    pub fn handle_forward(&self, request: &ForwardRequest) -> Result<ForwardResponse, ErrorPayload> {
        self.coords_to_words(request.latitude, request.longitude)
            .map(|words| ForwardResponse { words })
            .map_err(|e| ErrorPayload::from(&e))
    }

    /// Handles a reverse request. Exactly three words are required.
    pub fn handle_reverse(&self, request: &ReverseRequest) -> Result<ReverseResponse, ErrorPayload> {
        let tuple = WordTuple::from_slice(request.words.as_slice()).map_err(|_| {
            ErrorPayload::invalid_request(format!(
                "Words must be an array of exactly {} strings",
                WORDS_PER_ADDRESS
            ))
        })?;

        self.words_to_coords(&tuple)
            .map(|coordinates| ReverseResponse { coordinates })
            .map_err(|e| ErrorPayload::from(&e))
    }

    /// Handles either kind of request.
    pub fn handle(&self, request: &Request) -> Response {
        let result = match request {
            Request::Forward(forward) => self.handle_forward(forward).map(Response::Forward),
            Request::Reverse(reverse) => self.handle_reverse(reverse).map(Response::Reverse),
        };
        result.unwrap_or_else(Response::Error)
    }

    /// Parses a JSON request and returns the JSON response.
    ///
    /// Malformed JSON yields an `invalid_request` error payload.
    pub fn handle_json(&self, line: &str) -> Response {
        match serde_json::from_str::<Request>(line) {
            Ok(request) => self.handle(&request),
            Err(e) => Response::Error(ErrorPayload::invalid_request(format!(
                "Expected {{latitude, longitude}} or {{words}}: {}",
                e
            ))),
        }
    }
}
