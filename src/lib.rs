pub use crate::errors::{AstError, AstResult};

pub mod ast;
pub mod cli;
pub mod errors;
pub mod fixture;
pub mod token;
