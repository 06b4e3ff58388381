//! Template substitution engine.
//!
//! Templates are opaque text. The only structure recognized is the fixed set of
//! `{{TOKEN}}` markers in [`Token::ALL`]; everything else passes through as-is.

mod render;
mod token;

pub use render::{render, RenderError};
pub use token::{PlaceholderMap, Token};
