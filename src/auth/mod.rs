mod claims;
pub(crate) mod extractors;
pub mod jwt;

pub use claims::Claims;
pub use extractors::AuthUser;
pub use jwt::JwtKeys;
