use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::warn;

/// Reads an environment variable and parses it into `T`, falling back to
/// `default` when the variable is missing or does not parse
///
/// # Arguments
/// * `env_var` - Name of the environment variable
/// * `default` - Value to use when the variable is absent or malformed
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(raw) => raw.parse::<T>().unwrap_or_else(|_| {
            warn!("could not parse {env_var}={raw}, falling back to default");
            default
        }),
        Err(_) => default,
    }
}

/// Reads and parses an environment variable, returning `None` when it is
/// missing or malformed
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    env::var(env_var).ok().and_then(|raw| raw.parse::<T>().ok())
}
