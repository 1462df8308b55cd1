//! Application entry point and dispatch.

use std::io::{self, BufRead};
use std::time::Instant;

use anyhow::{Context, Result};

use practica_cli::presenter::CLIResultPresenter;
use practica_core::{fibonacci, is_prime, times};

use crate::config::{AppConfig, Command};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        practica_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    let Some(command) = &config.command else {
        <AppConfig as clap::CommandFactory>::command().print_help()?;
        return Ok(());
    };

    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
    match command {
        Command::Time { time } => run_time(&presenter, time.as_deref()),
        Command::Fib { n } => run_fib(config, &presenter, *n),
        Command::Prime { n } => run_prime(config, &presenter, *n),
    }
}

fn run_time(presenter: &CLIResultPresenter, arg: Option<&str>) -> Result<()> {
    let input = match arg {
        Some(s) => s.to_string(),
        None => read_stdin_line()?,
    };
    tracing::debug!(input, "formatting time");

    let start = Instant::now();
    let phrase = times(&input)?;
    let duration = start.elapsed();

    presenter.present_phrase(&input, &phrase, duration);
    Ok(())
}

fn run_fib(config: &AppConfig, presenter: &CLIResultPresenter, arg: Option<u64>) -> Result<()> {
    let n = match arg {
        Some(n) => n,
        None => parse_integer(&read_stdin_line()?)?,
    };
    tracing::debug!(n, "computing fibonacci");

    let start = Instant::now();
    let value = fibonacci(n);
    let duration = start.elapsed();

    presenter.present_fibonacci(n, &value, duration, config.details);
    Ok(())
}

fn run_prime(config: &AppConfig, presenter: &CLIResultPresenter, arg: Option<u64>) -> Result<()> {
    let n = match arg {
        Some(n) => n,
        None => parse_integer(&read_stdin_line()?)?,
    };
    tracing::debug!(n, "testing primality");

    let start = Instant::now();
    let prime = is_prime(n);
    let duration = start.elapsed();

    presenter.present_prime(n, prime, duration, config.details);
    Ok(())
}

/// Read one line from stdin, trimmed. Used when the argument is omitted,
/// matching the prompt-style invocation.
fn read_stdin_line() -> Result<String> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    Ok(line.trim().to_string())
}

fn parse_integer(s: &str) -> Result<u64> {
    s.parse()
        .with_context(|| format!("not a non-negative integer: {s:?}"))
}
