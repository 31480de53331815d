/// Shared kernel - error types, exit codes and common validations
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
