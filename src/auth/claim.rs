//! Claim set carried by consumer tokens.

// self
use crate::{_prelude::*, auth::ConsumerId, error::SigningError};

/// Lifetime of every issued token.
pub const TOKEN_TTL: Duration = Duration::hours(1);

/// Fields encoded into a signed consumer token.
///
/// `exp` is always `iat` plus [`TOKEN_TTL`]; `consumer_id` is omitted from the payload when
/// the token is not scoped to a consumer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
	/// Issued-at instant, whole seconds.
	#[serde(rename = "iat", with = "time::serde::timestamp")]
	pub issued_at: OffsetDateTime,
	/// Expiry instant, whole seconds.
	#[serde(rename = "exp", with = "time::serde::timestamp")]
	pub expires_at: OffsetDateTime,
	/// Consumer scope, present iff the caller supplied one.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub consumer_id: Option<ConsumerId>,
}
impl Claim {
	/// Builds a claim issued at `instant`, truncated to whole seconds.
	pub fn new(instant: OffsetDateTime, consumer_id: Option<&ConsumerId>) -> Result<Self> {
		let issued_at = OffsetDateTime::from_unix_timestamp(instant.unix_timestamp())
			.map_err(|_| SigningError::TimestampOutOfRange)?;
		let expires_at =
			issued_at.checked_add(TOKEN_TTL).ok_or(SigningError::TimestampOutOfRange)?;

		Ok(Self { issued_at, expires_at, consumer_id: consumer_id.cloned() })
	}

	/// Remaining validity at `instant`; zero once expired.
	pub fn remaining_at(&self, instant: OffsetDateTime) -> Duration {
		let remaining = self.expires_at - instant;

		if remaining.is_negative() { Duration::ZERO } else { remaining }
	}
}
