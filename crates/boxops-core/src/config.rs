use std::fmt::Display;
use std::str::FromStr;

use anyhow::{Context as _, anyhow};

/// Read a required environment variable.
pub fn required_var(name: &str) -> anyhow::Result<String> {
    std::env::var(name).with_context(|| format!("missing environment variable {name}"))
}

/// Read an optional environment variable, falling back to `default` when unset.
///
/// A value that is present but fails to parse is an error, not a silent fallback.
pub fn var_or<T>(name: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    parse_var(name, std::env::var(name).ok(), default)
}

/// Parse a raw variable value. Split from [`var_or`] so it can be tested
/// without touching the process environment.
pub fn parse_var<T>(name: &str, raw: Option<String>, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match raw {
        None => Ok(default),
        Some(v) if v.trim().is_empty() => Ok(default),
        Some(v) => v
            .trim()
            .parse()
            .map_err(|e| anyhow!("invalid value {v:?} for {name}: {e}")),
    }
}
