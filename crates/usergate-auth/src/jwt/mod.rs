//! Session token minting, verification, and claims.

pub mod bearer;
pub mod claims;
pub mod decoder;
pub mod encoder;

pub use bearer::bearer_token;
pub use claims::{Claims, TOKEN_TTL_HOURS};
pub use decoder::JwtDecoder;
pub use encoder::JwtEncoder;
