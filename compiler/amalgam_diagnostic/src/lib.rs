//! Diagnostic and error reporting for the Amalgam compiler.
//!
//! Every checked failure in the pipeline converts into a `Diagnostic`:
//! an error code, a message, and (where available) the originating span,
//! rendered for the caller as `line:col: message`. Nothing here is
//! fatal; all failures are recoverable at the statement boundary.

mod diagnostic;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::{ErrorCode, UnknownErrorCode};
