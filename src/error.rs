//! Crate-level error types shared by the issuer, the client, and the view layer.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem; fatal for the calling process.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Token could not be signed or verified.
	#[error(transparent)]
	Signing(#[from] SigningError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// The API answered, but not with usable data.
	#[error(transparent)]
	Api(#[from] ApiError),
}

/// Configuration and validation failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// A required environment variable is unset or empty.
	#[error("Missing {name} environment variable.")]
	MissingEnv {
		/// Variable name.
		name: &'static str,
	},
	/// The signing secret was empty.
	#[error("Signing secret cannot be empty.")]
	MissingSigningSecret,
	/// Endpoint or origin URL cannot be parsed.
	#[error("Configured {field} is not a valid URL.")]
	InvalidUrl {
		/// Configuration field holding the URL.
		field: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// An identifier failed validation.
	#[error(transparent)]
	InvalidIdentifier(#[from] crate::auth::IdentifierError),
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Token signing and verification failures.
#[derive(Debug, ThisError)]
pub enum SigningError {
	/// The claim could not be encoded or signed.
	#[error("Token could not be signed.")]
	Encode {
		/// Underlying JWT failure.
		#[source]
		source: jsonwebtoken::errors::Error,
	},
	/// The token failed signature or expiry validation.
	#[error("Token failed validation: {source}.")]
	Verify {
		/// Underlying JWT failure.
		#[source]
		source: jsonwebtoken::errors::Error,
	},
	/// The issuance instant cannot be represented as a timestamp.
	#[error("Issuance instant is out of range.")]
	TimestampOutOfRange,
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the Blendbase API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Request body could not be serialized.
	#[error("GraphQL request could not be serialized.")]
	Serialize(#[source] serde_json::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Failures reported by, or derived from, the Blendbase API response.
#[derive(Debug, ThisError)]
pub enum ApiError {
	/// The endpoint answered with a non-success HTTP status.
	#[error("API responded with HTTP {status}: {message}")]
	Status {
		/// HTTP status code.
		status: u16,
		/// Server-supplied message or a truncated body preview.
		message: String,
	},
	/// The response carried GraphQL errors.
	#[error("{}", join_messages(.errors))]
	GraphQl {
		/// Errors in response order.
		errors: Vec<GraphQlErrorEntry>,
	},
	/// The response carried neither data nor errors.
	#[error("API response did not contain data.")]
	MissingData,
	/// The response body was not the expected JSON shape.
	#[error("API returned malformed JSON at `{}`.", .source.path())]
	ResponseParse {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code.
		status: u16,
	},
}

/// Single entry of a GraphQL `errors` array.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphQlErrorEntry {
	/// Human-readable message.
	pub message: String,
	/// Response path the error applies to, if any.
	#[serde(default)]
	pub path: Vec<serde_json::Value>,
}

fn join_messages(errors: &[GraphQlErrorEntry]) -> String {
	if errors.is_empty() {
		return "API returned an empty error list.".into();
	}

	errors.iter().map(|e| e.message.as_str()).collect::<Vec<_>>().join("; ")
}
