//! Environment-driven settings for the issuer and the client factory.

// self
use crate::{
	_prelude::*,
	auth::{ConsumerId, SigningSecret, TokenIssuer},
	error::ConfigError,
};

/// Environment variable holding the HMAC signing secret.
pub const ENV_AUTH_SECRET: &str = "BLENDBASE_AUTH_SECRET";
/// Environment variable holding the consumer scope for page requests.
pub const ENV_CONSUMER_ID: &str = "CONSUMER_ID";
/// Environment variable overriding the GraphQL endpoint.
pub const ENV_ENDPOINT: &str = "BLENDBASE_ENDPOINT";
/// Environment variable overriding the `Origin` header.
pub const ENV_ORIGIN: &str = "BLENDBASE_ORIGIN";

/// GraphQL endpoint of a local Blendbase API.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/omni/query";
/// `Origin` header sent with every request.
pub const DEFAULT_ORIGIN: &str = "http://localhost:3000";

/// Resolved process configuration.
#[derive(Clone, Debug)]
pub struct Config {
	/// Signing secret for consumer tokens.
	pub signing_secret: SigningSecret,
	/// Consumer scope used by page requests, if configured.
	pub consumer_id: Option<ConsumerId>,
	/// GraphQL endpoint.
	pub endpoint: Url,
	/// `Origin` header value.
	pub origin: String,
}
impl Config {
	/// Reads the configuration from the process environment.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|name| std::env::var(name).ok())
	}

	/// Reads the configuration through `lookup`; empty values count as unset.
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
		let get = |name: &str| lookup(name).filter(|value| !value.is_empty());
		let signing_secret = get(ENV_AUTH_SECRET)
			.ok_or(ConfigError::MissingEnv { name: ENV_AUTH_SECRET })
			.and_then(SigningSecret::new)?;
		let consumer_id = get(ENV_CONSUMER_ID).map(ConsumerId::new).transpose()?;
		let endpoint = get(ENV_ENDPOINT).unwrap_or_else(|| DEFAULT_ENDPOINT.to_owned());
		let endpoint = Url::parse(&endpoint)
			.map_err(|source| ConfigError::InvalidUrl { field: "endpoint", source })?;
		let origin = get(ENV_ORIGIN).unwrap_or_else(|| DEFAULT_ORIGIN.to_owned());

		Url::parse(&origin).map_err(|source| ConfigError::InvalidUrl { field: "origin", source })?;

		Ok(Self { signing_secret, consumer_id, endpoint, origin })
	}

	/// Builds the token issuer keyed with the configured secret.
	pub fn issuer(&self) -> TokenIssuer {
		TokenIssuer::new(self.signing_secret.clone())
	}

	/// Builds a reqwest-backed client factory for the configured endpoint.
	#[cfg(feature = "reqwest")]
	pub fn client_factory(&self) -> crate::client::ReqwestClientFactory {
		crate::client::ClientFactory::new(self.endpoint.clone(), self.origin.clone())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn lookup(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
		move |name| pairs.iter().find(|(key, _)| *key == name).map(|(_, value)| (*value).to_owned())
	}

	#[test]
	fn defaults_apply_when_only_secret_is_set() {
		let config = Config::from_lookup(lookup(&[(ENV_AUTH_SECRET, "secret")]))
			.expect("Secret alone should be enough.");

		assert_eq!(config.endpoint.as_str(), DEFAULT_ENDPOINT);
		assert_eq!(config.origin, DEFAULT_ORIGIN);
		assert!(config.consumer_id.is_none());
	}

	#[test]
	fn missing_or_empty_secret_is_fatal() {
		assert!(matches!(
			Config::from_lookup(lookup(&[])),
			Err(ConfigError::MissingEnv { name: ENV_AUTH_SECRET })
		));
		assert!(matches!(
			Config::from_lookup(lookup(&[(ENV_AUTH_SECRET, "")])),
			Err(ConfigError::MissingEnv { name: ENV_AUTH_SECRET })
		));
	}

	#[test]
	fn overrides_and_consumer_are_read() {
		let config = Config::from_lookup(lookup(&[
			(ENV_AUTH_SECRET, "secret"),
			(ENV_CONSUMER_ID, "5c0bd4e6-3e43-4a6f-9f3e-0b6f4a7a9d11"),
			(ENV_ENDPOINT, "https://api.blendbase.example/omni/query"),
			(ENV_ORIGIN, "https://app.example"),
		]))
		.expect("Full configuration should parse.");

		assert_eq!(config.endpoint.host_str(), Some("api.blendbase.example"));
		assert_eq!(config.origin, "https://app.example");
		assert_eq!(
			config.consumer_id.as_deref(),
			Some("5c0bd4e6-3e43-4a6f-9f3e-0b6f4a7a9d11")
		);
	}

	#[test]
	fn invalid_values_are_rejected() {
		assert!(matches!(
			Config::from_lookup(lookup(&[(ENV_AUTH_SECRET, "secret"), (ENV_ENDPOINT, "not a url")])),
			Err(ConfigError::InvalidUrl { field: "endpoint", .. })
		));
		assert!(matches!(
			Config::from_lookup(lookup(&[(ENV_AUTH_SECRET, "secret"), (ENV_CONSUMER_ID, "a b")])),
			Err(ConfigError::InvalidIdentifier(_))
		));
	}
}
