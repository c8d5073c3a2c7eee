//! Transport primitives for GraphQL requests.
//!
//! The module exposes [`GraphQlHttpClient`] so downstream crates can plug in their own HTTP
//! stack. The client layer builds a complete [`GraphQlHttpRequest`] (URL, headers, JSON body)
//! and only needs the transport to POST it and hand back the status and raw body.

// self
use crate::_prelude::*;

/// Boxed future returned by [`GraphQlHttpClient::post`].
pub type TransportFuture<'a, E> =
	Pin<Box<dyn Future<Output = Result<GraphQlHttpResponse, E>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of delivering GraphQL POST requests.
///
/// Implementations must be `Send + Sync + 'static` so a single transport can back every
/// per-request client the factory builds.
pub trait GraphQlHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Sends `request` and resolves to the raw response.
	fn post(&self, request: GraphQlHttpRequest) -> TransportFuture<'_, Self::TransportError>;
}

/// Fully prepared POST request.
#[derive(Clone, Debug)]
pub struct GraphQlHttpRequest {
	/// Endpoint URL.
	pub url: Url,
	/// Header name/value pairs in insertion order.
	pub headers: Vec<(String, String)>,
	/// Serialized JSON body.
	pub body: Vec<u8>,
}
impl GraphQlHttpRequest {
	/// Returns the first header value matching `name` (ASCII case-insensitive).
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers.iter().find(|(key, _)| key.eq_ignore_ascii_case(name)).map(|(_, v)| v.as_str())
	}
}

/// Raw response handed back by a transport.
#[derive(Clone, Debug)]
pub struct GraphQlHttpResponse {
	/// HTTP status code.
	pub status: u16,
	/// Response body bytes.
	pub body: Vec<u8>,
}
impl GraphQlHttpResponse {
	/// Returns `true` for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl GraphQlHttpClient for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn post(&self, request: GraphQlHttpRequest) -> TransportFuture<'_, Self::TransportError> {
		let client = self.0.clone();

		Box::pin(async move {
			let mut builder = client.post(request.url);

			for (name, value) in request.headers {
				builder = builder.header(name, value);
			}

			let response = builder.body(request.body).send().await?;
			let status = response.status().as_u16();
			let body = response.bytes().await?.to_vec();

			Ok(GraphQlHttpResponse { status, body })
		})
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn header_lookup_ignores_case() {
		let request = GraphQlHttpRequest {
			url: Url::parse("http://localhost:8080/omni/query").expect("URL should parse."),
			headers: vec![("Authorization".into(), "Bearer abc".into())],
			body: Vec::new(),
		};

		assert_eq!(request.header("authorization"), Some("Bearer abc"));
		assert_eq!(request.header("origin"), None);
	}

	#[test]
	fn success_range_is_2xx() {
		assert!(GraphQlHttpResponse { status: 200, body: Vec::new() }.is_success());
		assert!(!GraphQlHttpResponse { status: 422, body: Vec::new() }.is_success());
	}
}
