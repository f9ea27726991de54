//! # Query Classification
//!
//! Labels a search query as an email address or a domain.
//!
//! - Email pattern is checked first
//! - Domain pattern second
//! - Anything else still falls back to **domain**, the classifier never rejects input
//!
//! Trimming is the caller's job, see [`crate::utils::parse_query`].
use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::Serialize;
use tracing::debug;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

static DOMAIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9]([a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?(\.[a-zA-Z0-9]([a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?)*\.[a-zA-Z]{2,}$",
    )
    .expect("valid domain regex")
});

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QueryType {
    Email,
    Domain,
}

impl QueryType {
    pub fn as_str(self) -> &'static str {
        match self {
            QueryType::Email => "email",
            QueryType::Domain => "domain",
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn classify(query: &str) -> QueryType {
    if EMAIL_PATTERN.is_match(query) {
        return QueryType::Email;
    }

    if !DOMAIN_PATTERN.is_match(query) {
        debug!("Query is neither an email nor a domain, defaulting to domain");
    }

    QueryType::Domain
}
