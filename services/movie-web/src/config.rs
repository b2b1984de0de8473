use std::path::PathBuf;

use anyhow::{bail, Context, Result};

const DEFAULT_PORT: u16 = 5500;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub dataset_path: PathBuf,
    pub public_dir: PathBuf,
    pub site_author: String,
    pub site_author_id: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };
        let host = lookup("BIND_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let dataset_path = lookup("MOVIE_DATASET")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("movie-dataset-a2.json"));
        let public_dir = lookup("PUBLIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("public"));
        let site_author = lookup("SITE_AUTHOR").unwrap_or_else(|| "Movie Explorer".to_string());
        let site_author_id = lookup("SITE_AUTHOR_ID").filter(|v| !v.trim().is_empty());

        if host.trim().is_empty() {
            bail!("BIND_HOST must not be empty");
        }

        Ok(Self {
            host,
            port,
            dataset_path,
            public_dir,
            site_author,
            site_author_id,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
