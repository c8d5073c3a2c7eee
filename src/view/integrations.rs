//! Integration settings page and the per-integration widget state.

// self
use crate::{
	_prelude::*,
	catalog::{AuthType, Integration, OAuth2ConfigurationInput},
	client::BlendbaseClient,
	http::GraphQlHttpClient,
	view::PageState,
};

/// Query parameter carrying a page-level success callout.
pub const SUCCESS_MESSAGE_PARAM: &str = "blendbaseSuccessMessage";
/// Query parameter carrying a page-level error callout.
pub const ERROR_MESSAGE_PARAM: &str = "blendbaseErrorMessage";

/// Page-level callouts, typically set by a redirect back from an OAuth login.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Callouts {
	/// Success banner text.
	pub success: Option<String>,
	/// Error banner text.
	pub error: Option<String>,
}
impl Callouts {
	/// Picks the callouts out of query parameters; empty values are ignored.
	pub fn from_query<I, K, V>(params: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: Into<String>,
	{
		let mut callouts = Self::default();

		for (key, value) in params {
			let slot = match key.as_ref() {
				SUCCESS_MESSAGE_PARAM => &mut callouts.success,
				ERROR_MESSAGE_PARAM => &mut callouts.error,
				_ => continue,
			};
			let value = value.into();

			if !value.is_empty() {
				*slot = Some(value);
			}
		}

		callouts
	}
}

/// Integration settings page: one panel per integration in API order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntegrationsPage {
	/// Page-level callouts.
	pub callouts: Callouts,
	/// Panels in API order.
	pub panels: Vec<IntegrationPanel>,
}
impl IntegrationsPage {
	/// Builds the page from an already-fetched integration list.
	pub fn new(integrations: Vec<Integration>, callouts: Callouts) -> Self {
		Self { callouts, panels: integrations.into_iter().map(IntegrationPanel::new).collect() }
	}

	/// Fetches integrations through `client`.
	pub async fn load<C>(client: &BlendbaseClient<C>, callouts: Callouts) -> PageState<Self>
	where
		C: ?Sized + GraphQlHttpClient,
	{
		PageState::from_result(
			client.list_integrations().await.map(|integrations| Self::new(integrations, callouts)),
		)
	}
}

/// Which parts of an integration panel are visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelSections {
	/// Static secret form.
	pub secret_form: bool,
	/// OAuth client credentials form, or the "credentials set" marker.
	pub client_credentials: bool,
	/// Instance subdomain input inside the credentials form.
	pub instance_subdomain_field: bool,
	/// Access token status with the login link.
	pub access_token: bool,
}

/// Local state of one integration widget.
///
/// Each action clears the previous messages, sends at most one mutation, and records a
/// success or error message. Failed mutations are not retried.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntegrationPanel {
	/// Integration as last known to the page.
	pub integration: Integration,
	/// OAuth client credentials are stored.
	pub client_credentials_set: bool,
	/// OAuth tokens are stored.
	pub tokens_set: bool,
	/// Error text shown in the panel.
	pub error_message: Option<String>,
	/// Success text shown in the panel.
	pub success_message: Option<String>,
}
impl IntegrationPanel {
	/// Shown after a successful toggle.
	pub const TOGGLED: &str = "Integration successfully toggled";
	/// Shown when a toggle is rejected.
	pub const TOGGLE_FAILED: &str = "Error enabling integration";
	/// Shown when client credentials are incomplete.
	pub const CREDENTIALS_REQUIRED: &str = "Client ID and Client Secret are required";
	/// Shown after credentials are stored.
	pub const CREDENTIALS_UPDATED: &str = "Credentials updated successfully";
	/// Shown when credentials are rejected.
	pub const CREDENTIALS_FAILED: &str = "Error updating credentials";
	/// Shown when the secret input is empty.
	pub const SECRET_REQUIRED: &str = "Secret cannot be empty";
	/// Shown after the secret is stored.
	pub const SECRET_UPDATED: &str = "Secret was updated successfully";
	/// Shown when the secret is rejected.
	pub const SECRET_FAILED: &str = "Error updating secret";

	/// Creates the panel state for `integration`.
	pub fn new(integration: Integration) -> Self {
		let metadata = integration.oauth2_metadata.unwrap_or_default();

		Self {
			integration,
			client_credentials_set: metadata.client_credentials_set,
			tokens_set: metadata.tokens_set,
			error_message: None,
			success_message: None,
		}
	}

	/// Visible sections for the current state.
	pub fn sections(&self) -> PanelSections {
		let enabled = self.integration.enabled;
		let oauth2 = enabled && self.integration.auth_type == AuthType::OAuth2;

		PanelSections {
			secret_form: enabled && self.integration.auth_type == AuthType::Secret,
			client_credentials: oauth2,
			instance_subdomain_field: oauth2
				&& !self.client_credentials_set
				&& self.integration.service_code.is_salesforce(),
			access_token: oauth2,
		}
	}

	/// Reopens the credentials form after they were set.
	pub fn edit_credentials(&mut self) {
		self.client_credentials_set = false;
	}

	/// Enables or disables the integration.
	pub async fn toggle<C>(&mut self, client: &BlendbaseClient<C>, enabled: bool)
	where
		C: ?Sized + GraphQlHttpClient,
	{
		self.clear_messages();

		match client.enable_integration(&self.integration.service_code, enabled).await {
			Ok(true) => {
				self.integration.enabled = enabled;
				self.success(Self::TOGGLED);
			},
			Ok(false) | Err(_) => self.fail(Self::TOGGLE_FAILED),
		}
	}

	/// Stores OAuth client credentials; both values are required.
	///
	/// The subdomain is only forwarded for the Salesforce connector.
	pub async fn update_credentials<C>(
		&mut self,
		client: &BlendbaseClient<C>,
		client_id: &str,
		client_secret: &str,
		salesforce_instance_subdomain: Option<&str>,
	) where
		C: ?Sized + GraphQlHttpClient,
	{
		self.clear_messages();

		if client_id.is_empty() || client_secret.is_empty() {
			self.fail(Self::CREDENTIALS_REQUIRED);

			return;
		}

		let input = OAuth2ConfigurationInput {
			client_id: client_id.to_owned(),
			client_secret: client_secret.to_owned(),
			salesforce_instance_subdomain: salesforce_instance_subdomain
				.filter(|value| !value.is_empty() && self.integration.service_code.is_salesforce())
				.map(str::to_owned),
		};

		match client.configure_integration_oauth(&self.integration.id, input).await {
			Ok(true) => {
				self.client_credentials_set = true;
				self.success(Self::CREDENTIALS_UPDATED);
			},
			Ok(false) | Err(_) => self.fail(Self::CREDENTIALS_FAILED),
		}
	}

	/// Stores a static secret; the value must be non-empty.
	pub async fn update_secret<C>(&mut self, client: &BlendbaseClient<C>, secret: &str)
	where
		C: ?Sized + GraphQlHttpClient,
	{
		self.clear_messages();

		if secret.is_empty() {
			self.fail(Self::SECRET_REQUIRED);

			return;
		}

		match client.set_integration_secret(&self.integration.id, secret).await {
			Ok(true) => self.success(Self::SECRET_UPDATED),
			Ok(false) | Err(_) => self.fail(Self::SECRET_FAILED),
		}
	}

	fn clear_messages(&mut self) {
		self.error_message = None;
		self.success_message = None;
	}

	fn success(&mut self, message: &str) {
		self.success_message = Some(message.to_owned());
	}

	fn fail(&mut self, message: &str) {
		self.error_message = Some(message.to_owned());
	}
}
