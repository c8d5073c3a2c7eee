//! `blendbase.operation` spans around catalog requests.

// self
use crate::{
	_prelude::*,
	obs::{OperationKind, OperationOutcome},
};

/// Future returned by [`OperationSpan::instrument`].
#[cfg(feature = "tracing")]
pub type InstrumentedOperation<F> = tracing::instrument::Instrumented<F>;
/// Future returned by [`OperationSpan::instrument`].
#[cfg(not(feature = "tracing"))]
pub type InstrumentedOperation<F> = F;

/// Span covering one GraphQL round trip.
///
/// Carries `operation` (catalog label) and `host` (endpoint host). `outcome` stays empty until
/// [`OperationSpan::record_result`] stamps it.
#[derive(Clone, Debug)]
pub struct OperationSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl OperationSpan {
	/// Opens a span for `kind` sent to `endpoint`.
	pub fn new(kind: OperationKind, endpoint: &Url) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"blendbase.operation",
				operation = kind.as_str(),
				host = endpoint.host_str().unwrap_or_default(),
				outcome = tracing::field::Empty,
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, endpoint);

			Self {}
		}
	}

	/// Runs `fut` inside the span without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedOperation<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}

	/// Stamps the outcome of `result` on the span and returns it; failures also emit a
	/// `warn` event carrying the error text.
	pub fn record_result<T>(&self, result: &Result<T>) -> OperationOutcome {
		let outcome = match result {
			Ok(_) => OperationOutcome::Success,
			Err(_) => OperationOutcome::Failure,
		};

		#[cfg(feature = "tracing")]
		{
			self.span.record("outcome", outcome.as_str());

			if let Err(e) = result {
				tracing::warn!(parent: &self.span, error = %e, "Blendbase operation failed.");
			}
		}

		outcome
	}
}
