//! Command-line companion for the Blendbase client: mint and inspect consumer tokens, create
//! consumers, and drive the query catalog for the configured consumer.

// crates.io
use clap::{Parser, Subcommand};
use color_eyre::{Result, eyre::eyre};
use tracing_subscriber::EnvFilter;
// self
use blendbase_client::{
	auth::{ConsumerId, IntegrationId, ServiceCode},
	catalog::OAuth2ConfigurationInput,
	config::{Config, ENV_CONSUMER_ID},
	view::{CONTACT_COLUMNS, ContactsPage, PageContext, PageState},
};

#[derive(Debug, Parser)]
#[command(name = "blendbase", about = "Blendbase consumer token and GraphQL client", version)]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
	/// Print a fresh token for `Authorization: Bearer $token`.
	GenAuthToken {
		/// Consumer scope; omit for an unscoped token.
		#[arg(long)]
		consumer_id: Option<ConsumerId>,
	},
	/// Verify a token and print its claim.
	InspectToken {
		/// Token to verify.
		token: String,
	},
	/// Create a new consumer.
	CreateConsumer,
	/// List integrations of the configured consumer.
	Integrations,
	/// List CRM contacts of the configured consumer.
	Contacts,
	/// Enable or disable an integration.
	Enable {
		/// Service code, such as `crm_salesforce`.
		service_code: ServiceCode,
		/// Desired state.
		#[arg(action = clap::ArgAction::Set)]
		enabled: bool,
	},
	/// Store a static secret for an integration.
	SetSecret {
		/// Integration ID.
		integration_id: IntegrationId,
		/// Secret value.
		secret: String,
	},
	/// Store OAuth client credentials for an integration.
	ConfigureOauth {
		/// Integration ID.
		integration_id: IntegrationId,
		/// OAuth client ID.
		#[arg(long)]
		client_id: String,
		/// OAuth client secret.
		#[arg(long, env = "BLENDBASE_OAUTH_CLIENT_SECRET", hide_env_values = true)]
		client_secret: String,
		/// Salesforce instance subdomain.
		#[arg(long)]
		salesforce_instance_subdomain: Option<String>,
	},
}

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;
	dotenvy::dotenv().ok();
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

	let cli = Cli::parse();
	let config = Config::from_env()?;
	let issuer = config.issuer();

	match cli.command {
		Command::GenAuthToken { consumer_id } => {
			let issued = issuer.issue(consumer_id.as_ref())?;

			println!("{}", issued.token.expose());
		},
		Command::InspectToken { token } => {
			let claim = issuer.verify(&token)?;
			let remaining = claim.remaining_at(time::OffsetDateTime::now_utc());

			println!("{}", serde_json::to_string_pretty(&claim)?);
			eprintln!("Expires in {}s.", remaining.whole_seconds());
		},
		Command::CreateConsumer => {
			let factory = config.client_factory();
			let page = PageContext::prepare(&issuer, &factory, None)?;
			let consumer_id = page.client.create_consumer().await?;

			println!(
				"Created new consumer for you.\nExecute the next command in console to update consumer ID:\n\necho \"{ENV_CONSUMER_ID}={consumer_id}\" >> .env\n"
			);
		},
		Command::Integrations => {
			let factory = config.client_factory();
			let page = PageContext::prepare(&issuer, &factory, scoped(&config)?)?;

			for integration in page.client.list_integrations().await? {
				println!(
					"{}\t{}\t{}\t{}\tenabled={}",
					integration.id,
					integration.service_code,
					integration.service_name,
					integration.auth_type,
					integration.enabled
				);
			}
		},
		Command::Contacts => {
			let factory = config.client_factory();
			let page = PageContext::prepare(&issuer, &factory, scoped(&config)?)?;

			match ContactsPage::load(&page.client).await {
				PageState::Ready(contacts) => {
					println!("{}", CONTACT_COLUMNS.join("\t"));

					for row in contacts.rows {
						println!("{}", row.cells().join("\t"));
					}
				},
				PageState::Failed(message) => return Err(eyre!(message)),
			}
		},
		Command::Enable { service_code, enabled } => {
			let factory = config.client_factory();
			let page = PageContext::prepare(&issuer, &factory, scoped(&config)?)?;

			report(page.client.enable_integration(&service_code, enabled).await?)?;
		},
		Command::SetSecret { integration_id, secret } => {
			let factory = config.client_factory();
			let page = PageContext::prepare(&issuer, &factory, scoped(&config)?)?;

			report(page.client.set_integration_secret(&integration_id, secret).await?)?;
		},
		Command::ConfigureOauth {
			integration_id,
			client_id,
			client_secret,
			salesforce_instance_subdomain,
		} => {
			let factory = config.client_factory();
			let page = PageContext::prepare(&issuer, &factory, scoped(&config)?)?;
			let input =
				OAuth2ConfigurationInput { client_id, client_secret, salesforce_instance_subdomain };

			report(page.client.configure_integration_oauth(&integration_id, input).await?)?;
		},
	}

	Ok(())
}

fn scoped(config: &Config) -> Result<Option<&ConsumerId>> {
	config
		.consumer_id
		.as_ref()
		.map(Some)
		.ok_or_else(|| eyre!("Missing {ENV_CONSUMER_ID}; run `blendbase create-consumer` first."))
}

fn report(applied: bool) -> Result<()> {
	if applied {
		println!("ok");

		Ok(())
	} else {
		Err(eyre!("Blendbase API did not apply the change."))
	}
}
