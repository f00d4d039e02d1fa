pub mod claims;
pub mod error;
pub mod jwt_validator;
pub mod password;
pub mod token_issuer;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_validator::{JwtValidator, extract_bearer};
pub use password::{hash_password, verify_password};
pub use token_issuer::{DEFAULT_LIFETIME_MINUTES, MIN_KEY_BYTES, TokenIssuer};
