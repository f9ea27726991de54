//! # Mock Credentials
//!
//! Synthesizes fake breach matches for a classified query. Nothing here is looked up anywhere,
//! every record is drawn from the static [`Catalog`].
//!
//! ## Per Record
//! - Source: uniform pick from the breach labels
//! - Date: uniform pick from the dates, **independent** of the source
//! - Exposed data: random subset without repetition, size depends on the query type
//! - Email: the query itself for emails, `user<1..=1000>@<query>` for domains
//! - Password: masking token or nothing, probability depends on the query type
//!
//! Randomness is always passed in, so a seeded [`rand::rngs::StdRng`] reproduces a batch exactly.
use std::ops::RangeInclusive;

use rand::{Rng, seq::SliceRandom};

use crate::{classify::QueryType, models::ExposureRecord};

pub const RESULTS_PER_SEARCH: usize = 20;
pub const MASKED_PASSWORD: &str = "••••••••";

const SOURCES: [&str; 12] = [
    "LinkedIn 2012",
    "Adobe 2013",
    "Yahoo 2013",
    "Dropbox 2012",
    "MySpace 2008",
    "Equifax 2017",
    "Facebook 2019",
    "Marriott 2018",
    "Capital One 2019",
    "T-Mobile 2021",
    "SolarWinds 2020",
    "Colonial Pipeline 2021",
];

const DATES: [&str; 12] = [
    "2012-05-05",
    "2013-10-03",
    "2013-12-14",
    "2012-07-19",
    "2008-06-11",
    "2017-09-07",
    "2019-04-14",
    "2018-11-30",
    "2019-07-29",
    "2021-08-15",
    "2020-12-13",
    "2021-05-07",
];

const EMAIL_EXPOSURES: [&str; 13] = [
    "Email addresses",
    "Passwords",
    "Usernames",
    "Phone numbers",
    "Credit cards",
    "SSN",
    "Stealer logs",
    "Infostealer data",
    "Malware samples",
    "Phishing credentials",
    "RedLine stealer",
    "Raccoon stealer",
    "Lumma stealer",
];

const DOMAIN_EXPOSURES: [&str; 13] = [
    "Email addresses",
    "Passwords",
    "Usernames",
    "Phone numbers",
    "Names",
    "Credit cards",
    "Stealer logs",
    "Infostealer data",
    "Malware samples",
    "Phishing credentials",
    "RedLine stealer",
    "Raccoon stealer",
    "Lumma stealer",
];

/// Reference lists every record is drawn from. Built once at startup and shared.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub sources: Vec<String>,
    pub dates: Vec<String>,
    pub email_exposures: Vec<String>,
    pub domain_exposures: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            sources: owned(&SOURCES),
            dates: owned(&DATES),
            email_exposures: owned(&EMAIL_EXPOSURES),
            domain_exposures: owned(&DOMAIN_EXPOSURES),
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

struct Profile<'a> {
    exposures: &'a [String],
    exposure_count: RangeInclusive<usize>,
    password_chance: f64,
}

impl Catalog {
    fn profile(&self, query_type: QueryType) -> Profile<'_> {
        match query_type {
            QueryType::Email => Profile {
                exposures: &self.email_exposures,
                exposure_count: 2..=4,
                password_chance: 0.7,
            },
            QueryType::Domain => Profile {
                exposures: &self.domain_exposures,
                exposure_count: 1..=3,
                password_chance: 0.8,
            },
        }
    }
}

pub fn generate<R: Rng + ?Sized>(
    catalog: &Catalog,
    query: &str,
    query_type: QueryType,
    rng: &mut R,
) -> Vec<ExposureRecord> {
    let profile = catalog.profile(query_type);

    (0..RESULTS_PER_SEARCH)
        .map(|_| {
            let email = match query_type {
                QueryType::Email => query.to_string(),
                QueryType::Domain => format!("user{}@{}", rng.gen_range(1..=1000), query),
            };

            let source = pick(&catalog.sources, rng);
            let breach_date = pick(&catalog.dates, rng);

            let count = rng.gen_range(profile.exposure_count.clone());
            let exposed_data = profile
                .exposures
                .choose_multiple(rng, count)
                .cloned()
                .collect();

            let password = rng
                .gen_bool(profile.password_chance)
                .then(|| MASKED_PASSWORD.to_string());

            ExposureRecord {
                email,
                password,
                source,
                breach_date,
                exposed_data,
            }
        })
        .collect()
}

fn pick<R: Rng + ?Sized>(items: &[String], rng: &mut R) -> String {
    items.choose(rng).cloned().unwrap_or_default()
}
