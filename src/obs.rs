//! Optional observability for catalog operations.
//!
//! # Feature Flags
//!
//! - `tracing`: every request runs inside a `blendbase.operation` span with `operation`,
//!   `host`, and `outcome` fields; failures add a `warn` event.
//! - `metrics`: `blendbase_operation_total{operation, outcome}` counts attempts and results,
//!   and `blendbase_operation_duration_seconds{operation}` records round-trip latency.
//!
//! Without the features every helper compiles to a no-op.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Catalog operations observed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
	/// `connect.integrations` query.
	ListIntegrations,
	/// `crm.contacts` query.
	ListContacts,
	/// `enableConsumerIntegration` mutation.
	EnableIntegration,
	/// `configureConsumerIntegrationOAuth` mutation.
	ConfigureIntegrationOAuth,
	/// `setConsumerIntegrationSecret` mutation.
	SetIntegrationSecret,
	/// `createConsumer` mutation.
	CreateConsumer,
}
impl OperationKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OperationKind::ListIntegrations => "list_integrations",
			OperationKind::ListContacts => "list_contacts",
			OperationKind::EnableIntegration => "enable_integration",
			OperationKind::ConfigureIntegrationOAuth => "configure_integration_oauth",
			OperationKind::SetIntegrationSecret => "set_integration_secret",
			OperationKind::CreateConsumer => "create_consumer",
		}
	}
}
impl Display for OperationKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationOutcome {
	/// Entry to a client helper.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl OperationOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OperationOutcome::Attempt => "attempt",
			OperationOutcome::Success => "success",
			OperationOutcome::Failure => "failure",
		}
	}
}
impl Display for OperationOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
