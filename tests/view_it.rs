mod common;

// std
use std::sync::Arc;
// crates.io
use serde_json::json;
// self
use blendbase_client::{
	auth::Claim,
	view::{
		Callouts, ContactsPage, FETCH_ERROR_PREFIX, IntegrationPanel, IntegrationsPage,
		PageContext, PageState,
	},
};
use common::{
	ScriptedHttpClient, TEST_CONSUMER_ID, integration_json, scripted_factory, test_consumer,
	test_issuer,
};

fn prepared(transport: &Arc<ScriptedHttpClient>) -> PageContext<ScriptedHttpClient> {
	PageContext::prepare(&test_issuer(), &scripted_factory(transport), Some(&test_consumer()))
		.expect("Page context should be prepared.")
}

async fn load_panel(
	transport: &Arc<ScriptedHttpClient>,
	context: &PageContext<ScriptedHttpClient>,
	service_code: &str,
	auth_type: &str,
	enabled: bool,
) -> IntegrationPanel {
	transport.respond_data(json!({ "connect": { "integrations": [
		integration_json("int-1", service_code, auth_type, enabled, Some((false, false))),
	] } }));

	match IntegrationsPage::load(&context.client, Callouts::default()).await {
		PageState::Ready(mut page) => page.panels.remove(0),
		PageState::Failed(message) => panic!("Page should load: {message}."),
	}
}

#[test]
fn prepare_mints_a_consumer_scoped_token_for_the_client() {
	let transport = Arc::new(ScriptedHttpClient::default());
	let context = prepared(&transport);
	let claim: Claim =
		test_issuer().verify(context.issued.token.expose()).expect("Token should verify.");

	assert_eq!(claim.consumer_id.as_deref(), Some(TEST_CONSUMER_ID));
	assert_eq!(claim, context.issued.claim);
	assert_eq!(context.client.token(), &context.issued.token);
}

#[tokio::test]
async fn integrations_page_keeps_api_order_and_callouts() {
	let transport = Arc::new(ScriptedHttpClient::default());
	let context = prepared(&transport);

	transport.respond_data(json!({ "connect": { "integrations": [
		integration_json("int-2", "crm_hubspot", "oauth2", false, None),
		integration_json("int-1", "crm_salesforce", "oauth2", true, Some((true, true))),
		integration_json("int-3", "crm_pipedrive", "secret", true, None),
	] } }));

	let callouts = Callouts::from_query([("blendbaseSuccessMessage", "Connected")]);
	let state = IntegrationsPage::load(&context.client, callouts).await;
	let page = state.ready().expect("Integrations page should load.");
	let ids = page.panels.iter().map(|p| p.integration.id.as_ref()).collect::<Vec<_>>();

	assert_eq!(ids, ["int-2", "int-1", "int-3"]);
	assert_eq!(page.callouts.success.as_deref(), Some("Connected"));
	assert!(page.panels[1].client_credentials_set);
	assert!(page.panels[1].tokens_set);
	assert!(page.panels[2].sections().secret_form);
}

#[tokio::test]
async fn failed_loads_render_inline_error_text() {
	let transport = Arc::new(ScriptedHttpClient::default());
	let context = prepared(&transport);

	transport.respond(401, json!({ "message": "Invalid or missing JWT token" })).fail();

	let integrations = IntegrationsPage::load(&context.client, Callouts::default()).await;

	assert_eq!(
		integrations.failure(),
		Some(concat!(
			"Error fetching data from Blendbase: ",
			"API responded with HTTP 401: Invalid or missing JWT token"
		))
	);

	let contacts = ContactsPage::load(&context.client).await;

	assert!(contacts.failure().is_some_and(|text| text.starts_with(FETCH_ERROR_PREFIX)));
}

#[tokio::test]
async fn contacts_page_lists_rows_in_api_order() {
	let transport = Arc::new(ScriptedHttpClient::default());
	let context = prepared(&transport);

	transport.respond_data(json!({ "crm": { "contacts": { "edges": [
		{ "node": { "id": "c-9", "name": "Ada", "companyName": "AE" } },
		{ "node": { "id": "c-1", "email": "x@y.z", "phone": "1" } }
	] } } }));

	let state = ContactsPage::load(&context.client).await;
	let page = state.ready().expect("Contacts page should load.");

	assert_eq!(page.rows[0].cells(), ["c-9", "AE", "Ada", "", ""]);
	assert_eq!(page.rows[1].cells(), ["c-1", "", "", "x@y.z", "1"]);
}

#[tokio::test]
async fn toggle_updates_state_and_messages() {
	let transport = Arc::new(ScriptedHttpClient::default());
	let context = prepared(&transport);
	let mut panel = load_panel(&transport, &context, "crm_hubspot", "oauth2", false).await;

	transport.respond_data(json!({ "enableConsumerIntegration": true }));
	panel.toggle(&context.client, true).await;

	assert!(panel.integration.enabled);
	assert_eq!(panel.success_message.as_deref(), Some(IntegrationPanel::TOGGLED));
	assert!(panel.error_message.is_none());
	assert!(panel.sections().client_credentials);

	transport.respond_data(json!({ "enableConsumerIntegration": false }));
	panel.toggle(&context.client, false).await;

	assert!(panel.integration.enabled);
	assert!(panel.success_message.is_none());
	assert_eq!(panel.error_message.as_deref(), Some(IntegrationPanel::TOGGLE_FAILED));

	transport.fail();
	panel.toggle(&context.client, false).await;

	assert_eq!(panel.error_message.as_deref(), Some(IntegrationPanel::TOGGLE_FAILED));
	assert_eq!(transport.requests().len(), 4);
}

#[tokio::test]
async fn credentials_require_both_values_before_sending() {
	let transport = Arc::new(ScriptedHttpClient::default());
	let context = prepared(&transport);
	let mut panel = load_panel(&transport, &context, "crm_salesforce", "oauth2", true).await;

	panel.update_credentials(&context.client, "cid", "", Some("acme")).await;

	assert_eq!(panel.error_message.as_deref(), Some(IntegrationPanel::CREDENTIALS_REQUIRED));
	assert_eq!(transport.requests().len(), 1);

	transport.respond_data(json!({ "configureConsumerIntegrationOAuth": true }));
	panel.update_credentials(&context.client, "cid", "csecret", Some("acme")).await;

	assert!(panel.error_message.is_none());
	assert_eq!(panel.success_message.as_deref(), Some(IntegrationPanel::CREDENTIALS_UPDATED));
	assert!(panel.client_credentials_set);
	assert!(!panel.sections().instance_subdomain_field);
	assert_eq!(
		transport.request_body(1)["variables"]["input"],
		json!({
			"clientID": "cid",
			"clientSecret": "csecret",
			"salesforceInstanceSubdomain": "acme"
		})
	);

	transport.respond_data(json!({ "configureConsumerIntegrationOAuth": false }));
	panel.edit_credentials();
	panel.update_credentials(&context.client, "cid", "other", None).await;

	assert!(panel.success_message.is_none());
	assert_eq!(panel.error_message.as_deref(), Some(IntegrationPanel::CREDENTIALS_FAILED));
	assert!(!panel.client_credentials_set);
}

#[tokio::test]
async fn subdomain_is_dropped_for_other_connectors() {
	let transport = Arc::new(ScriptedHttpClient::default());
	let context = prepared(&transport);
	let mut panel = load_panel(&transport, &context, "crm_hubspot", "oauth2", true).await;

	transport.respond_data(json!({ "configureConsumerIntegrationOAuth": true }));
	panel.update_credentials(&context.client, "cid", "csecret", Some("acme")).await;

	assert_eq!(
		transport.request_body(1)["variables"]["input"],
		json!({ "clientID": "cid", "clientSecret": "csecret" })
	);
}

#[tokio::test]
async fn secret_updates_report_each_outcome() {
	let transport = Arc::new(ScriptedHttpClient::default());
	let context = prepared(&transport);
	let mut panel = load_panel(&transport, &context, "crm_pipedrive", "secret", true).await;

	panel.update_secret(&context.client, "").await;

	assert_eq!(panel.error_message.as_deref(), Some(IntegrationPanel::SECRET_REQUIRED));
	assert_eq!(transport.requests().len(), 1);

	transport.respond_data(json!({ "setConsumerIntegrationSecret": true }));
	panel.update_secret(&context.client, "s3cr3t").await;

	assert!(panel.error_message.is_none());
	assert_eq!(panel.success_message.as_deref(), Some(IntegrationPanel::SECRET_UPDATED));

	transport.respond(200, json!({ "data": null, "errors": [{ "message": "denied" }] }));
	panel.update_secret(&context.client, "s3cr3t").await;

	assert!(panel.success_message.is_none());
	assert_eq!(panel.error_message.as_deref(), Some(IntegrationPanel::SECRET_FAILED));
}

#[tokio::test]
async fn partial_data_errors_render_server_message() {
	let transport = Arc::new(ScriptedHttpClient::default());
	let context = prepared(&transport);

	transport.respond(
		200,
		json!({ "data": { "connect": null }, "errors": [{ "message": "missing consumer ID" }] }),
	);

	let state = IntegrationsPage::load(&context.client, Callouts::default()).await;

	assert_eq!(state.failure(), Some("Error fetching data from Blendbase: missing consumer ID"));
}
