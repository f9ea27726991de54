use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

use crate::error::AppError;

pub struct Config {
    pub port: u16,
    pub templates_dir: String,
    pub static_dir: String,
    pub seed: Option<u64>,
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        Ok(Self {
            port: try_load("RUST_PORT", "8000")?,
            templates_dir: try_load("TEMPLATES_DIR", "templates")?,
            static_dir: try_load("STATIC_DIR", "static")?,
            seed: try_load_optional("RUST_SEED")?,
        })
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn parse<T: FromStr>(key: &str, value: &str) -> Result<T, AppError>
where
    T::Err: Display,
{
    value.parse::<T>().map_err(|e| {
        warn!("Invalid {key} value: {e}");

        AppError::Config {
            key: key.to_string(),
            reason: e.to_string(),
        }
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T, AppError>
where
    T::Err: Display,
{
    let value = var(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    parse(key, &value)
}

fn try_load_optional<T: FromStr>(key: &str) -> Result<Option<T>, AppError>
where
    T::Err: Display,
{
    match var(key) {
        Some(value) => parse(key, &value).map(Some),
        None => {
            info!("{key} not set, skipping");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse;
    use crate::error::AppError;

    #[test]
    fn test_parse_port() {
        let port: u16 = parse("RUST_PORT", "8080").unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let result: Result<u16, AppError> = parse("RUST_PORT", "eighty");

        match result {
            Err(AppError::Config { key, .. }) => assert_eq!(key, "RUST_PORT"),
            _ => panic!("expected config error"),
        }
    }

    #[test]
    fn test_parse_out_of_range() {
        assert!(parse::<u16>("RUST_PORT", "70000").is_err());
        assert!(parse::<u64>("RUST_SEED", "-1").is_err());
    }

    #[test]
    fn test_parse_strings() {
        let dir: String = parse("STATIC_DIR", "assets").unwrap();
        assert_eq!(dir, "assets");
    }
}
