//! Shared fixtures for integration tests.

#![allow(dead_code)]

// std
use std::{
	collections::VecDeque,
	error::Error as StdError,
	fmt::{Display, Formatter, Result as FmtResult},
	sync::Arc,
};
// crates.io
use parking_lot::Mutex;
use serde_json::Value;
use url::Url;
// self
use blendbase_client::{
	auth::{ConsumerId, SigningSecret, TokenIssuer},
	client::{ClientFactory, ReqwestBlendbaseClient, ReqwestClientFactory},
	config::{DEFAULT_ENDPOINT, DEFAULT_ORIGIN},
	http::{GraphQlHttpClient, GraphQlHttpRequest, GraphQlHttpResponse, TransportFuture},
};

/// Signing secret shared by integration tests.
pub const TEST_SIGNING_SECRET: &str = "blendbase-test-secret";
/// Consumer identifier shared by integration tests.
pub const TEST_CONSUMER_ID: &str = "5c0bd4e6-3e43-4a6f-9f3e-0b6f4a7a9d11";

/// Builds a [`TokenIssuer`] keyed with [`TEST_SIGNING_SECRET`].
pub fn test_issuer() -> TokenIssuer {
	TokenIssuer::new(
		SigningSecret::new(TEST_SIGNING_SECRET).expect("Test signing secret should be accepted."),
	)
}

/// Returns the shared test consumer identifier.
pub fn test_consumer() -> ConsumerId {
	ConsumerId::new(TEST_CONSUMER_ID).expect("Test consumer identifier should be valid.")
}

/// Builds a reqwest-backed factory pointing at `endpoint`.
pub fn test_factory(endpoint: &str) -> ReqwestClientFactory {
	ReqwestClientFactory::new(
		Url::parse(endpoint).expect("Test endpoint should parse."),
		DEFAULT_ORIGIN,
	)
}

/// Constructs a [`ReqwestClientFactory`] pointing at `endpoint` and returns the client minted
/// for a fresh consumer-scoped token.
pub fn build_reqwest_test_client(
	endpoint: &str,
) -> (ReqwestClientFactory, Arc<ReqwestBlendbaseClient>) {
	let factory = test_factory(endpoint);
	let issued = test_issuer().issue(Some(&test_consumer())).expect("Test token should be issued.");
	let client = factory.client_for(&issued.token);

	(factory, client)
}

/// Error produced by [`ScriptedHttpClient`] when a scripted failure is replayed.
#[derive(Debug)]
pub struct FakeTransportError;
impl Display for FakeTransportError {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "Connection refused.")
	}
}
impl StdError for FakeTransportError {}

/// In-memory transport replaying scripted responses and recording every request.
#[derive(Default)]
pub struct ScriptedHttpClient {
	responses: Mutex<VecDeque<Result<GraphQlHttpResponse, FakeTransportError>>>,
	requests: Mutex<Vec<GraphQlHttpRequest>>,
}
impl ScriptedHttpClient {
	/// Queues a response with `status` and a JSON `body`.
	pub fn respond(&self, status: u16, body: Value) -> &Self {
		let body = serde_json::to_vec(&body).expect("Scripted body should serialize.");

		self.responses.lock().push_back(Ok(GraphQlHttpResponse { status, body }));

		self
	}

	/// Queues a `200` response carrying `data`.
	pub fn respond_data(&self, data: Value) -> &Self {
		self.respond(200, serde_json::json!({ "data": data }))
	}

	/// Queues a transport failure.
	pub fn fail(&self) -> &Self {
		self.responses.lock().push_back(Err(FakeTransportError));

		self
	}

	/// Requests observed so far.
	pub fn requests(&self) -> Vec<GraphQlHttpRequest> {
		self.requests.lock().clone()
	}

	/// JSON body of the request at `index`.
	pub fn request_body(&self, index: usize) -> Value {
		let requests = self.requests.lock();
		let request = requests.get(index).expect("Request should have been recorded.");

		serde_json::from_slice(&request.body).expect("Request body should be JSON.")
	}
}
impl GraphQlHttpClient for ScriptedHttpClient {
	type TransportError = FakeTransportError;

	fn post(&self, request: GraphQlHttpRequest) -> TransportFuture<'_, Self::TransportError> {
		self.requests.lock().push(request);

		let next = self.responses.lock().pop_front();

		Box::pin(async move { next.expect("A scripted response should be queued.") })
	}
}

/// Builds a factory on the default endpoint that shares `transport`.
pub fn scripted_factory(transport: &Arc<ScriptedHttpClient>) -> ClientFactory<ScriptedHttpClient> {
	ClientFactory::with_http_client(
		Url::parse(DEFAULT_ENDPOINT).expect("Default endpoint should parse."),
		DEFAULT_ORIGIN,
		Arc::clone(transport),
	)
}

/// Integration JSON as the API returns it.
pub fn integration_json(
	id: &str,
	service_code: &str,
	auth_type: &str,
	enabled: bool,
	metadata: Option<(bool, bool)>,
) -> Value {
	serde_json::json!({
		"id": id,
		"type": "crm",
		"serviceCode": service_code,
		"serviceName": service_code.to_uppercase(),
		"enabled": enabled,
		"description": null,
		"authType": auth_type,
		"loginURL": format!("http://localhost:8080/connect/{service_code}/login"),
		"callbackURL": null,
		"oauth2Metadata": metadata.map(|(client_credentials_set, tokens_set)| serde_json::json!({
			"clientCredentialsSet": client_credentials_set,
			"tokensSet": tokens_set,
		})),
	})
}
