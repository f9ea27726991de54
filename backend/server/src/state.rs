use std::sync::Arc;

use parking_lot::Mutex;
use rand::{SeedableRng, rngs::StdRng};
use tracing::info;

use crate::{
    classify::QueryType,
    config::Config,
    error::AppError,
    generator::{Catalog, generate},
    models::ExposureRecord,
};

/// Random source shared by every search request.
pub struct Entropy {
    rng: Mutex<StdRng>,
}

impl Entropy {
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => {
                info!("Seeding generator with {seed}");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };

        Self {
            rng: Mutex::new(rng),
        }
    }
}

pub struct AppState {
    pub config: Config,
    pub catalog: Catalog,
    pub entropy: Entropy,
}

impl AppState {
    pub fn new() -> Result<Arc<Self>, AppError> {
        let config = Config::load()?;

        Ok(Self::with_config(config))
    }

    pub fn with_config(config: Config) -> Arc<Self> {
        let entropy = Entropy::from_seed(config.seed);

        Arc::new(Self {
            config,
            catalog: Catalog::default(),
            entropy,
        })
    }

    pub fn generate(&self, query: &str, query_type: QueryType) -> Vec<ExposureRecord> {
        let mut rng = self.entropy.rng.lock();

        generate(&self.catalog, query, query_type, &mut *rng)
    }
}
