//! Token-bound GraphQL client and the per-request client factory.
//!
//! A [`BlendbaseClient`] is bound to exactly one bearer token. [`ClientFactory::client_for`]
//! memoizes the most recent client on its token value, so repeated lookups during one page
//! request reuse a single instance while a new token (another request or consumer) always
//! gets a fresh client.

// std
use std::time::Instant;
// self
use crate::{
	_prelude::*,
	auth::{BearerToken, ConsumerId, IntegrationId, ServiceCode},
	catalog::{
		ConfigureIntegrationOAuth, ConfigureIntegrationOAuthVariables, Contact, CreateConsumer,
		EnableIntegration, EnableIntegrationVariables, Integration, ListContacts,
		ListIntegrations, NoVariables, OAuth2ConfigurationInput, Operation, SetIntegrationSecret,
		SetIntegrationSecretVariables,
	},
	error::{ApiError, GraphQlErrorEntry, TransportError},
	http::{GraphQlHttpClient, GraphQlHttpRequest, GraphQlHttpResponse},
	obs::{self, OperationOutcome, OperationSpan},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

const BODY_PREVIEW_LIMIT: usize = 256;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestBlendbaseClient = BlendbaseClient<ReqwestHttpClient>;
#[cfg(feature = "reqwest")]
/// Factory specialized for the crate's default reqwest transport.
pub type ReqwestClientFactory = ClientFactory<ReqwestHttpClient>;

#[derive(Serialize)]
struct GraphQlRequestBody<'a, V> {
	query: &'a str,
	#[serde(rename = "operationName", skip_serializing_if = "Option::is_none")]
	operation_name: Option<&'a str>,
	variables: &'a V,
}

#[derive(Deserialize)]
struct GraphQlResponseBody {
	data: Option<serde_json::Value>,
	#[serde(default)]
	errors: Vec<GraphQlErrorEntry>,
}

#[derive(Deserialize)]
struct StatusMessage {
	message: String,
}

/// GraphQL client bound to one endpoint and one bearer token.
pub struct BlendbaseClient<C>
where
	C: ?Sized + GraphQlHttpClient,
{
	endpoint: Url,
	origin: String,
	token: BearerToken,
	http_client: Arc<C>,
}
impl<C> BlendbaseClient<C>
where
	C: ?Sized + GraphQlHttpClient,
{
	/// Builds a client that authenticates every request with `token`.
	pub fn new(
		endpoint: Url,
		origin: impl Into<String>,
		token: BearerToken,
		http_client: impl Into<Arc<C>>,
	) -> Self {
		Self { endpoint, origin: origin.into(), token, http_client: http_client.into() }
	}

	/// Endpoint every request is posted to.
	pub fn endpoint(&self) -> &Url {
		&self.endpoint
	}

	/// Token this client authenticates with.
	pub fn token(&self) -> &BearerToken {
		&self.token
	}

	/// Builds the POST request for operation `O` without sending it.
	pub fn prepare<O>(&self, variables: &O::Variables) -> Result<GraphQlHttpRequest>
	where
		O: Operation,
	{
		let body = serde_json::to_vec(&GraphQlRequestBody {
			query: O::DOCUMENT,
			operation_name: O::NAME,
			variables,
		})
		.map_err(TransportError::Serialize)?;

		Ok(GraphQlHttpRequest {
			url: self.endpoint.clone(),
			headers: vec![
				("Authorization".into(), self.token.authorization_value()),
				("Origin".into(), self.origin.clone()),
				("Content-Type".into(), "application/json".into()),
			],
			body,
		})
	}

	/// Sends catalog operation `O` and decodes its `data` object.
	pub async fn execute<O>(&self, variables: &O::Variables) -> Result<O::Data>
	where
		O: Operation,
	{
		let span = OperationSpan::new(O::KIND, &self.endpoint);
		let started = Instant::now();

		obs::record_operation_outcome(O::KIND, OperationOutcome::Attempt);

		let result = span
			.instrument(async {
				let request = self.prepare::<O>(variables)?;
				let response = self
					.http_client
					.post(request)
					.await
					.map_err(TransportError::network)?;

				decode_response::<O::Data>(response)
			})
			.await;

		obs::record_operation_outcome(O::KIND, span.record_result(&result));
		obs::record_operation_latency(O::KIND, started.elapsed());

		result
	}

	/// Lists the consumer's integrations in API order.
	pub async fn list_integrations(&self) -> Result<Vec<Integration>> {
		let data = self.execute::<ListIntegrations>(&NoVariables {}).await?;

		Ok(data.connect.integrations)
	}

	/// Lists CRM contacts in API order.
	pub async fn list_contacts(&self) -> Result<Vec<Contact>> {
		let data = self.execute::<ListContacts>(&NoVariables {}).await?;

		Ok(data.crm.contacts.edges.into_iter().map(|edge| edge.node).collect())
	}

	/// Enables or disables the integration identified by `service_code`.
	pub async fn enable_integration(
		&self,
		service_code: &ServiceCode,
		enabled: bool,
	) -> Result<bool> {
		let variables = EnableIntegrationVariables { service_code: service_code.clone(), enabled };
		let data = self.execute::<EnableIntegration>(&variables).await?;

		Ok(data.enable_consumer_integration)
	}

	/// Stores OAuth 2.0 client credentials for an integration.
	pub async fn configure_integration_oauth(
		&self,
		integration_id: &IntegrationId,
		input: OAuth2ConfigurationInput,
	) -> Result<bool> {
		let variables = ConfigureIntegrationOAuthVariables {
			consumer_integration_id: integration_id.clone(),
			input,
		};
		let data = self.execute::<ConfigureIntegrationOAuth>(&variables).await?;

		Ok(data.configured)
	}

	/// Stores a static secret for an integration.
	pub async fn set_integration_secret(
		&self,
		integration_id: &IntegrationId,
		secret: impl Into<String>,
	) -> Result<bool> {
		let variables = SetIntegrationSecretVariables {
			consumer_integration_id: integration_id.clone(),
			secret: secret.into(),
		};
		let data = self.execute::<SetIntegrationSecret>(&variables).await?;

		Ok(data.updated)
	}

	/// Creates a new consumer and returns its ID. Call with an unscoped token.
	pub async fn create_consumer(&self) -> Result<ConsumerId> {
		let data = self.execute::<CreateConsumer>(&NoVariables {}).await?;

		Ok(data.create_consumer)
	}
}
impl<C> Debug for BlendbaseClient<C>
where
	C: ?Sized + GraphQlHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("BlendbaseClient")
			.field("endpoint", &self.endpoint.as_str())
			.field("origin", &self.origin)
			.field("token", &self.token)
			.finish()
	}
}

/// Builds token-bound clients, memoizing the most recent one on its token value.
pub struct ClientFactory<C>
where
	C: ?Sized + GraphQlHttpClient,
{
	endpoint: Url,
	origin: String,
	http_client: Arc<C>,
	memo: Mutex<Option<Arc<BlendbaseClient<C>>>>,
}
impl<C> ClientFactory<C>
where
	C: ?Sized + GraphQlHttpClient,
{
	/// Creates a factory that hands `http_client` to every client it builds.
	pub fn with_http_client(
		endpoint: Url,
		origin: impl Into<String>,
		http_client: impl Into<Arc<C>>,
	) -> Self {
		Self {
			endpoint,
			origin: origin.into(),
			http_client: http_client.into(),
			memo: Mutex::new(None),
		}
	}

	/// Returns the client bound to `token`, reusing the memoized one when the token matches.
	pub fn client_for(&self, token: &BearerToken) -> Arc<BlendbaseClient<C>> {
		let mut memo = self.memo.lock();

		if let Some(client) = memo.as_ref().filter(|client| client.token() == token) {
			return Arc::clone(client);
		}

		let client = Arc::new(BlendbaseClient::new(
			self.endpoint.clone(),
			self.origin.clone(),
			token.clone(),
			Arc::clone(&self.http_client),
		));

		*memo = Some(Arc::clone(&client));

		client
	}

	/// Endpoint handed to every client.
	pub fn endpoint(&self) -> &Url {
		&self.endpoint
	}
}
#[cfg(feature = "reqwest")]
impl ClientFactory<ReqwestHttpClient> {
	/// Creates a factory backed by a default reqwest transport.
	pub fn new(endpoint: Url, origin: impl Into<String>) -> Self {
		Self::with_http_client(endpoint, origin, ReqwestHttpClient::default())
	}
}
impl<C> Debug for ClientFactory<C>
where
	C: ?Sized + GraphQlHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ClientFactory")
			.field("endpoint", &self.endpoint.as_str())
			.field("origin", &self.origin)
			.field("memoized", &self.memo.lock().is_some())
			.finish()
	}
}

fn decode_response<D>(response: GraphQlHttpResponse) -> Result<D>
where
	D: DeserializeOwned,
{
	if !response.is_success() {
		return Err(ApiError::Status {
			status: response.status,
			message: status_message(&response.body),
		}
		.into());
	}

	let status = response.status;
	let de = &mut serde_json::Deserializer::from_slice(&response.body);
	let body: GraphQlResponseBody = serde_path_to_error::deserialize(de)
		.map_err(|source| ApiError::ResponseParse { source, status })?;

	// Partial data may accompany errors; the errors win.
	if !body.errors.is_empty() {
		return Err(ApiError::GraphQl { errors: body.errors }.into());
	}

	let data = body.data.ok_or(ApiError::MissingData)?;

	serde_path_to_error::deserialize(data)
		.map_err(|source| ApiError::ResponseParse { source, status }.into())
}

fn status_message(body: &[u8]) -> String {
	if let Ok(StatusMessage { message }) = serde_json::from_slice(body) {
		return message;
	}

	let text = String::from_utf8_lossy(body);
	let text = text.trim();

	match text.char_indices().nth(BODY_PREVIEW_LIMIT) {
		Some((cut, _)) => format!("{}…", &text[..cut]),
		None => text.to_owned(),
	}
}
