//! Shared constants: the u64 Fibonacci fast-path table and exit codes.

/// Maximum Fibonacci index that fits in a u64.
/// F(93) = 12200160415121876738
pub const MAX_FIB_U64: u64 = 93;

/// Precomputed Fibonacci values for n = 0..=93 (fast path).
///
/// F(93) = 12,200,160,415,121,876,738 is the largest Fibonacci number
/// that fits in `u64`; F(94) overflows `u64::MAX`.
pub const FIB_TABLE: [u64; 94] = {
    let mut table = [0u64; 94];
    table[1] = 1;
    let mut i = 2;
    while i < 94 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Process exit codes used by the `practica` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error (e.g. non-numeric input).
    pub const ERROR_GENERIC: i32 = 1;
    /// Numeral table lookup outside 1..=29.
    pub const ERROR_LOOKUP: i32 = 2;
    /// Malformed time string.
    pub const ERROR_CONFIG: i32 = 4;
}
