mod compiled;
mod compiler;
mod token;

pub use compiled::{WildcardPattern, has_wildcards};
pub use token::Token;
