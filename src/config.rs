use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment prefix; sections are separated with `__`,
/// e.g. `STAFF_API__LISTEN_ADDR=127.0.0.1:9000`.
pub const ENV_PREFIX: &str = "STAFF_";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub basic: BasicConfig,
    pub ingest: IngestConfig,
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicConfig {
    pub loglevel: String,
    pub database_url: String,
}

impl Default for BasicConfig {
    fn default() -> Self {
        Self {
            loglevel: "info".to_string(),
            database_url: "sqlite:staff.db".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Directory holding the seven table snapshots.
    pub csv_dir: PathBuf,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            csv_dir: PathBuf::from("csv"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub listen_addr: String,
    pub artifacts: ArtifactPaths,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
            artifacts: ArtifactPaths::default(),
        }
    }
}

/// Locations of the pre-generated JSON report artifacts served by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactPaths {
    pub top_resources: PathBuf,
    pub average_salary: PathBuf,
    pub department_cost: PathBuf,
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        Self {
            top_resources: PathBuf::from("top_material_resources.json"),
            average_salary: PathBuf::from("average_salary_by_department.json"),
            department_cost: PathBuf::from("cost_by_department.json"),
        }
    }
}

impl Config {
    /// Defaults overlaid with `STAFF_*` environment variables.
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }
}
