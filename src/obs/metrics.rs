//! Counters and latency histograms for catalog operations.

// std
use std::time::Duration as StdDuration;
// self
use crate::obs::{OperationKind, OperationOutcome};

/// Counter name, labeled by `operation` and `outcome`.
pub const OPERATION_TOTAL: &str = "blendbase_operation_total";
/// Histogram name for round-trip latency in seconds, labeled by `operation`.
pub const OPERATION_DURATION_SECONDS: &str = "blendbase_operation_duration_seconds";

/// Increments [`OPERATION_TOTAL`] for `kind` and `outcome`.
pub fn record_operation_outcome(kind: OperationKind, outcome: OperationOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			OPERATION_TOTAL,
			"operation" => kind.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}
	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}

/// Records how long one round trip of `kind` took, failures included.
pub fn record_operation_latency(kind: OperationKind, elapsed: StdDuration) {
	#[cfg(feature = "metrics")]
	{
		metrics::histogram!(OPERATION_DURATION_SECONDS, "operation" => kind.as_str())
			.record(elapsed.as_secs_f64());
	}
	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, elapsed);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn recording_without_a_recorder_is_harmless() {
		record_operation_outcome(OperationKind::CreateConsumer, OperationOutcome::Attempt);
		record_operation_outcome(OperationKind::CreateConsumer, OperationOutcome::Failure);
		record_operation_latency(OperationKind::CreateConsumer, StdDuration::from_millis(12));
	}
}
