//! Consumer identifiers, redacted secrets, claims, and the HS256 token issuer.

pub mod claim;
pub mod id;
pub mod issuer;
pub mod secret;

pub use claim::*;
pub use id::*;
pub use issuer::*;
pub use secret::*;
