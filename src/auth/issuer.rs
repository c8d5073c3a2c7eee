//! HS256 token issuance and verification.
//!
//! A fresh token is minted for every page request and never cached: [`TokenIssuer::issue`]
//! stamps the current instant, while [`TokenIssuer::issue_at`] takes an explicit one so the
//! expiry window can be asserted deterministically.

// crates.io
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
// self
use crate::{
	_prelude::*,
	auth::{BearerToken, Claim, ConsumerId, SigningSecret},
	error::SigningError,
};

/// Signed token together with the claim it encodes.
#[derive(Clone, Debug)]
pub struct IssuedToken {
	/// Compact JWT ready for the `Authorization` header.
	pub token: BearerToken,
	/// Claim encoded into [`IssuedToken::token`].
	pub claim: Claim,
}

/// Mints consumer-scoped tokens with the process-wide signing secret.
#[derive(Clone)]
pub struct TokenIssuer {
	encoding_key: EncodingKey,
	decoding_key: DecodingKey,
}
impl TokenIssuer {
	const ALGORITHM: Algorithm = Algorithm::HS256;

	/// Creates an issuer keyed with `secret`.
	pub fn new(secret: SigningSecret) -> Self {
		Self {
			encoding_key: EncodingKey::from_secret(secret.expose()),
			decoding_key: DecodingKey::from_secret(secret.expose()),
		}
	}

	/// Issues a token valid for one hour from now.
	pub fn issue(&self, consumer_id: Option<&ConsumerId>) -> Result<IssuedToken> {
		self.issue_at(OffsetDateTime::now_utc(), consumer_id)
	}

	/// Issues a token whose validity window starts at `instant`.
	pub fn issue_at(
		&self,
		instant: OffsetDateTime,
		consumer_id: Option<&ConsumerId>,
	) -> Result<IssuedToken> {
		let claim = Claim::new(instant, consumer_id)?;
		let token =
			jsonwebtoken::encode(&Header::new(Self::ALGORITHM), &claim, &self.encoding_key)
				.map_err(|source| SigningError::Encode { source })?;

		Ok(IssuedToken { token: BearerToken::new(token), claim })
	}

	/// Verifies the signature and expiry of `token` and returns its claim.
	pub fn verify(&self, token: &str) -> Result<Claim> {
		let mut validation = Validation::new(Self::ALGORITHM);

		validation.set_required_spec_claims(&["exp", "iat"]);
		validation.leeway = 0;

		let data = jsonwebtoken::decode::<Claim>(token, &self.decoding_key, &validation)
			.map_err(|source| SigningError::Verify { source })?;

		Ok(data.claims)
	}
}
impl Debug for TokenIssuer {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenIssuer").field("algorithm", &Self::ALGORITHM).finish()
	}
}
