//! CLI result presenter.

use std::time::Duration;

use num_bigint::BigUint;
use practica_core::smallest_factor;

use crate::output::{format_duration, format_number, format_result};

/// Prints computation results to stdout.
///
/// Quiet mode emits the bare result line only; otherwise the input and
/// timing are echoed, and `details` adds per-command metadata.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print a clock phrase for `input`.
    pub fn present_phrase(&self, input: &str, phrase: &str, duration: Duration) {
        if self.quiet {
            println!("{phrase}");
            return;
        }

        println!("Time: {input}");
        println!("Duration: {}", format_duration(duration));
        println!("{phrase}");
    }

    /// Print F(n), with digit/bit counts under `details`.
    pub fn present_fibonacci(&self, n: u64, value: &BigUint, duration: Duration, details: bool) {
        if self.quiet {
            println!("{value}");
            return;
        }

        println!("N: {}", format_number(n));
        println!("Duration: {}", format_duration(duration));

        if details {
            println!("Result bits: {}", value.bits());
            println!("Result digits: {}", value.to_string().len());
        }

        println!(
            "F({}) = {}",
            format_number(n),
            format_result(value, self.verbose)
        );
    }

    /// Print the primality verdict, with the witness factor under `details`.
    pub fn present_prime(&self, n: u64, prime: bool, duration: Duration, details: bool) {
        if self.quiet {
            println!("{prime}");
            return;
        }

        println!("N: {}", format_number(n));
        println!("Duration: {}", format_duration(duration));

        if details {
            match smallest_factor(n) {
                Some(d) => println!("Smallest factor: {}", format_number(d)),
                None if prime => println!("No factor up to sqrt({})", format_number(n)),
                None => println!("Not prime by definition"),
            }
        }

        println!("{} is {}", format_number(n), if prime { "prime" } else { "not prime" });
    }

    /// Print an error to stderr.
    pub fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}
