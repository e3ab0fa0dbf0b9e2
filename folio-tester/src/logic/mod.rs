pub mod checks;
pub mod reports;

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

pub use checks::{catalog_failures, filter_counts, filter_failures, load_catalog, routing_failures};

/// Outcome of one offline check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub passed: bool,
    pub checks_run: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub duration: Duration,
}

impl ScenarioResult {
    /// Time `check` and record whatever it reports as failures.
    pub fn run(name: &str, check: impl FnOnce() -> (usize, Vec<String>)) -> Self {
        let started = Instant::now();
        let (checks_run, failures) = check();
        Self {
            scenario_name: name.to_string(),
            passed: failures.is_empty(),
            checks_run,
            failures,
            duration: started.elapsed(),
        }
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}
