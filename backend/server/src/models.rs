use serde::{Deserialize, Serialize};

use crate::classify::QueryType;

pub const SERVICE_NAME: &str = "dsec-lab-dark-web-monitoring";

#[derive(Deserialize, Debug)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ExposureRecord {
    pub email: String,
    pub password: Option<String>,
    pub source: String,
    pub breach_date: String,
    pub exposed_data: Vec<String>,
}

#[derive(Serialize, Debug)]
pub struct SearchResult {
    pub query: String,
    pub query_type: QueryType,
    pub matches_found: usize,
    pub credentials: Vec<ExposureRecord>,
    pub timestamp: String,
}

impl SearchResult {
    pub fn new(query: String, query_type: QueryType, credentials: Vec<ExposureRecord>) -> Self {
        Self {
            query,
            query_type,
            matches_found: credentials.len(),
            credentials,
            timestamp: crate::utils::timestamp(),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: "healthy",
            service: SERVICE_NAME,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub detail: String,
}
