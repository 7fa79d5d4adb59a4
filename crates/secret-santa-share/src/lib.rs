//! Secret Santa — Share context.
//!
//! Packs a roster, seed and optional viewed person into an opaque token that
//! survives a round trip through a link, reads the older multi-parameter
//! link form, and works out what a shared link asks for.

mod escape;

pub mod error;
pub mod legacy;
pub mod link;
pub mod query;
pub mod state;
pub mod token;

pub use error::DecodeError;
pub use state::ShareableState;
