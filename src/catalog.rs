//! Fixed catalog of GraphQL operations the client is allowed to send.
//!
//! Every operation is a static document; caller-supplied values only ever travel as GraphQL
//! variables. [`Operation`] ties each document to its variable and result types so
//! [`BlendbaseClient::execute`](crate::client::BlendbaseClient::execute) can stay generic.

// self
use crate::{
	_prelude::*,
	auth::{ConsumerId, IntegrationId, ServiceCode},
	obs::OperationKind,
};

/// A catalog entry: static document plus typed variables and result.
pub trait Operation {
	/// Variables serialized into the request's `variables` object.
	type Variables: Serialize + Send + Sync;
	/// Shape of the response's `data` object.
	type Data: DeserializeOwned;

	/// Observability label for this operation.
	const KIND: OperationKind;
	/// `operationName` sent alongside named documents.
	const NAME: Option<&'static str>;
	/// GraphQL document text.
	const DOCUMENT: &'static str;
}

/// Empty variables object (`{}`) for operations without inputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NoVariables {}

/// Authentication scheme an integration uses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthType {
	/// Static secret supplied by the consumer.
	Secret,
	/// OAuth 2.0 client credentials plus an authorization-code login.
	#[serde(rename = "oauth2")]
	OAuth2,
	/// Scheme this crate does not know about.
	#[serde(other)]
	Other,
}
impl AuthType {
	/// Returns a stable label.
	pub const fn as_str(&self) -> &'static str {
		match self {
			AuthType::Secret => "secret",
			AuthType::OAuth2 => "oauth2",
			AuthType::Other => "other",
		}
	}
}
impl Display for AuthType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Credential flags reported for OAuth 2.0 integrations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuth2Metadata {
	/// Client ID and secret have been configured.
	pub client_credentials_set: bool,
	/// Access and refresh tokens have been obtained.
	pub tokens_set: bool,
}

/// Consumer integration as exposed by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Integration {
	/// Integration record ID.
	pub id: IntegrationId,
	/// Integration category, such as `crm`.
	#[serde(rename = "type")]
	pub kind: String,
	/// Service code, such as `crm_salesforce`.
	pub service_code: ServiceCode,
	/// Display name.
	pub service_name: String,
	/// Whether the consumer enabled the integration.
	pub enabled: bool,
	/// Human-readable description.
	#[serde(default)]
	pub description: Option<String>,
	/// Authentication scheme.
	pub auth_type: AuthType,
	/// URL that starts the OAuth 2.0 login.
	#[serde(rename = "loginURL", default)]
	pub login_url: Option<String>,
	/// Callback URL to register with the upstream service.
	#[serde(rename = "callbackURL", default)]
	pub callback_url: Option<String>,
	/// OAuth 2.0 credential flags.
	#[serde(default)]
	pub oauth2_metadata: Option<OAuth2Metadata>,
}

/// CRM contact.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
	/// Contact ID in the upstream CRM.
	pub id: String,
	/// Full name.
	#[serde(default)]
	pub name: Option<String>,
	/// Email address.
	#[serde(default)]
	pub email: Option<String>,
	/// Phone number.
	#[serde(default)]
	pub phone: Option<String>,
	/// Company the contact belongs to.
	#[serde(default)]
	pub company_name: Option<String>,
}

/// OAuth 2.0 client credentials for a consumer integration.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct OAuth2ConfigurationInput {
	/// OAuth client ID.
	#[serde(rename = "clientID")]
	pub client_id: String,
	/// OAuth client secret.
	#[serde(rename = "clientSecret")]
	pub client_secret: String,
	/// Salesforce instance subdomain; only meaningful for `crm_salesforce`.
	#[serde(rename = "salesforceInstanceSubdomain", skip_serializing_if = "Option::is_none")]
	pub salesforce_instance_subdomain: Option<String>,
}
impl Debug for OAuth2ConfigurationInput {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("OAuth2ConfigurationInput")
			.field("client_id", &self.client_id)
			.field("client_secret", &"<redacted>")
			.field("salesforce_instance_subdomain", &self.salesforce_instance_subdomain)
			.finish()
	}
}

/// `query { connect { integrations { .. } } }`
#[derive(Clone, Copy, Debug)]
pub struct ListIntegrations;
impl Operation for ListIntegrations {
	type Data = ListIntegrationsData;
	type Variables = NoVariables;

	const DOCUMENT: &'static str = r#"query {
  connect {
    integrations {
      id
      type
      serviceCode
      serviceName
      enabled
      description
      authType
      loginURL
      callbackURL
      oauth2Metadata {
        clientCredentialsSet
        tokensSet
      }
    }
  }
}"#;
	const KIND: OperationKind = OperationKind::ListIntegrations;
	const NAME: Option<&'static str> = None;
}

/// Data returned by [`ListIntegrations`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ListIntegrationsData {
	/// `connect` root field.
	pub connect: ConnectData,
}

/// `connect` root field.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ConnectData {
	/// Integrations in API order.
	pub integrations: Vec<Integration>,
}

/// `query { crm { contacts { edges { node { .. } } } } }`
#[derive(Clone, Copy, Debug)]
pub struct ListContacts;
impl Operation for ListContacts {
	type Data = ListContactsData;
	type Variables = NoVariables;

	const DOCUMENT: &'static str = r#"query {
  crm {
    contacts {
      edges {
        node {
          id
          name
          email
          phone
          companyName
        }
      }
    }
  }
}"#;
	const KIND: OperationKind = OperationKind::ListContacts;
	const NAME: Option<&'static str> = None;
}

/// Data returned by [`ListContacts`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ListContactsData {
	/// `crm` root field.
	pub crm: CrmData,
}

/// `crm` root field.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CrmData {
	/// Contacts connection.
	pub contacts: ContactConnection,
}

/// Relay-style contacts connection.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ContactConnection {
	/// Edges in API order.
	pub edges: Vec<ContactEdge>,
}

/// Connection edge.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ContactEdge {
	/// Contact at this edge.
	pub node: Contact,
}

/// `mutation enableIntegration($serviceCode, $enabled)`
#[derive(Clone, Copy, Debug)]
pub struct EnableIntegration;
impl Operation for EnableIntegration {
	type Data = EnableIntegrationData;
	type Variables = EnableIntegrationVariables;

	const DOCUMENT: &'static str = r#"mutation enableIntegration($serviceCode: String!, $enabled: Boolean!) {
  enableConsumerIntegration(serviceCode: $serviceCode, enabled: $enabled)
}"#;
	const KIND: OperationKind = OperationKind::EnableIntegration;
	const NAME: Option<&'static str> = Some("enableIntegration");
}

/// Variables for [`EnableIntegration`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnableIntegrationVariables {
	/// Service code of the integration to toggle.
	pub service_code: ServiceCode,
	/// Desired state.
	pub enabled: bool,
}

/// Data returned by [`EnableIntegration`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnableIntegrationData {
	/// `true` when the API applied the change.
	pub enable_consumer_integration: bool,
}

/// `mutation addIntegration($consumerIntegrationID, $input)`
#[derive(Clone, Copy, Debug)]
pub struct ConfigureIntegrationOAuth;
impl Operation for ConfigureIntegrationOAuth {
	type Data = ConfigureIntegrationOAuthData;
	type Variables = ConfigureIntegrationOAuthVariables;

	const DOCUMENT: &'static str = r#"mutation addIntegration($consumerIntegrationID: String!, $input: OAuth2ConfigurationInput!) {
  configureConsumerIntegrationOAuth(consumerIntegrationID: $consumerIntegrationID, input: $input)
}"#;
	const KIND: OperationKind = OperationKind::ConfigureIntegrationOAuth;
	const NAME: Option<&'static str> = Some("addIntegration");
}

/// Variables for [`ConfigureIntegrationOAuth`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConfigureIntegrationOAuthVariables {
	/// Integration to configure.
	#[serde(rename = "consumerIntegrationID")]
	pub consumer_integration_id: IntegrationId,
	/// Client credentials.
	pub input: OAuth2ConfigurationInput,
}

/// Data returned by [`ConfigureIntegrationOAuth`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigureIntegrationOAuthData {
	/// `true` when the API stored the credentials.
	#[serde(rename = "configureConsumerIntegrationOAuth")]
	pub configured: bool,
}

/// `mutation setIntegrationSecret($consumerIntegrationID, $secret)`
#[derive(Clone, Copy, Debug)]
pub struct SetIntegrationSecret;
impl Operation for SetIntegrationSecret {
	type Data = SetIntegrationSecretData;
	type Variables = SetIntegrationSecretVariables;

	const DOCUMENT: &'static str = r#"mutation setIntegrationSecret($consumerIntegrationID: String!, $secret: String!) {
  setConsumerIntegrationSecret(consumerIntegrationID: $consumerIntegrationID, secret: $secret)
}"#;
	const KIND: OperationKind = OperationKind::SetIntegrationSecret;
	const NAME: Option<&'static str> = Some("setIntegrationSecret");
}

/// Variables for [`SetIntegrationSecret`].
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct SetIntegrationSecretVariables {
	/// Integration to update.
	#[serde(rename = "consumerIntegrationID")]
	pub consumer_integration_id: IntegrationId,
	/// New static secret.
	pub secret: String,
}
impl Debug for SetIntegrationSecretVariables {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("SetIntegrationSecretVariables")
			.field("consumer_integration_id", &self.consumer_integration_id)
			.field("secret", &"<redacted>")
			.finish()
	}
}

/// Data returned by [`SetIntegrationSecret`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct SetIntegrationSecretData {
	/// `true` when the API stored the secret.
	#[serde(rename = "setConsumerIntegrationSecret")]
	pub updated: bool,
}

/// `mutation CreateConsumer`
#[derive(Clone, Copy, Debug)]
pub struct CreateConsumer;
impl Operation for CreateConsumer {
	type Data = CreateConsumerData;
	type Variables = NoVariables;

	const DOCUMENT: &'static str = r#"mutation CreateConsumer {
  createConsumer
}"#;
	const KIND: OperationKind = OperationKind::CreateConsumer;
	const NAME: Option<&'static str> = Some("CreateConsumer");
}

/// Data returned by [`CreateConsumer`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateConsumerData {
	/// ID of the newly created consumer.
	pub create_consumer: ConsumerId,
}
