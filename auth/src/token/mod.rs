pub mod claims;
pub mod codec;
pub mod errors;

pub use claims::Claims;
pub use codec::AccessTokenCodec;
pub use errors::TokenError;
