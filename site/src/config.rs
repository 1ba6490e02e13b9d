use anyhow::{Context, Result};
use std::{env, path::PathBuf};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;

/// Where and what the static host serves. Read from `SITE_*` variables,
/// falling back to the workspace's `dist/` and `assets/` directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub dist_dir: PathBuf,
    pub assets_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok().filter(|v| !v.trim().is_empty()))
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let workspace = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(".."); // = site/..

        let port = match var("SITE_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("SITE_PORT must be a port number, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: var("SITE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            port,
            dist_dir: var("SITE_DIST")
                .map(PathBuf::from)
                .unwrap_or_else(|| workspace.join("dist")),
            assets_dir: var("SITE_ASSETS")
                .map(PathBuf::from)
                .unwrap_or_else(|| workspace.join("assets")),
        })
    }

    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}
