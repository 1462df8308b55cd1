//! Error handling and exit codes.

use practica_core::clock::ClockError;
use practica_core::constants::exit_codes;

/// Map an application error to its process exit code.
///
/// Clock errors carry the only structured codes; everything else
/// (integer parse failures, I/O) exits with the generic code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ClockError>() {
        Some(ClockError::Format(_)) => exit_codes::ERROR_CONFIG,
        Some(ClockError::UndefinedNumeral(_)) => exit_codes::ERROR_LOOKUP,
        None => exit_codes::ERROR_GENERIC,
    }
}
