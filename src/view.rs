//! Per-request page models for the integrations and contacts screens.
//!
//! Every page request follows the same sequence: mint a token for the configured consumer,
//! build (or reuse) the client bound to it, fetch the initial data, and hand the same client
//! to the interactive widgets. Nothing here renders markup; the models carry exactly what a
//! front end needs to draw, and failures collapse into inline text.

pub mod contacts;
pub mod integrations;

pub use contacts::*;
pub use integrations::*;

// self
use crate::{
	_prelude::*,
	auth::{ConsumerId, IssuedToken, TokenIssuer},
	client::{BlendbaseClient, ClientFactory},
	http::GraphQlHttpClient,
};

/// Prefix of every inline fetch failure.
pub const FETCH_ERROR_PREFIX: &str = "Error fetching data from Blendbase: ";

/// Token and client prepared for one page request.
pub struct PageContext<C>
where
	C: ?Sized + GraphQlHttpClient,
{
	/// Token minted for this request.
	pub issued: IssuedToken,
	/// Client bound to [`PageContext::issued`].
	pub client: Arc<BlendbaseClient<C>>,
}
impl<C> PageContext<C>
where
	C: ?Sized + GraphQlHttpClient,
{
	/// Mints a fresh token for `consumer_id` and obtains the client bound to it.
	///
	/// Signing failures are configuration errors and propagate to the caller.
	pub fn prepare(
		issuer: &TokenIssuer,
		factory: &ClientFactory<C>,
		consumer_id: Option<&ConsumerId>,
	) -> Result<Self> {
		let issued = issuer.issue(consumer_id)?;
		let client = factory.client_for(&issued.token);

		Ok(Self { issued, client })
	}
}
impl<C> Debug for PageContext<C>
where
	C: ?Sized + GraphQlHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("PageContext")
			.field("issued", &self.issued)
			.field("client", &self.client)
			.finish()
	}
}

/// Outcome of loading a page's initial data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageState<T> {
	/// Data loaded.
	Ready(T),
	/// Fetch failed; the string is shown as-is.
	Failed(String),
}
impl<T> PageState<T> {
	/// Converts a fetch result, formatting failures as inline text.
	pub fn from_result(result: Result<T>) -> Self {
		match result {
			Ok(value) => Self::Ready(value),
			Err(e) => Self::Failed(format!("{FETCH_ERROR_PREFIX}{e}")),
		}
	}

	/// Returns the loaded data, if any.
	pub fn ready(&self) -> Option<&T> {
		match self {
			Self::Ready(value) => Some(value),
			Self::Failed(_) => None,
		}
	}

	/// Returns the failure text, if any.
	pub fn failure(&self) -> Option<&str> {
		match self {
			Self::Ready(_) => None,
			Self::Failed(message) => Some(message.as_str()),
		}
	}
}
