use anyhow::{Context, Result};
use ledgerlift_ingest::ScanOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "ledgerlift.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub scan: ScanSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSection {
    pub section_markers: Vec<String>,
    pub junk_markers: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        let opts = ScanOptions::default();
        Self {
            scan: ScanSection {
                section_markers: opts.section_markers,
                junk_markers: opts.junk_markers,
            },
        }
    }
}

impl Config {
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            section_markers: self.scan.section_markers.clone(),
            junk_markers: self.scan.junk_markers.clone(),
        }
    }
}

/// Load the scan config. An explicit path must exist and parse; with no path
/// given, `ledgerlift.toml` in the working directory is used when present,
/// the built-in defaults otherwise.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let default_path = Path::new(CONFIG_FILE);
    let path = match path {
        Some(p) => p,
        None if default_path.exists() => default_path,
        None => return Ok(Config::default()),
    };

    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", path.display()))
}

pub fn init_config() -> Result<()> {
    let p = Path::new(CONFIG_FILE);
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    let s = toml::to_string_pretty(&Config::default()).context("serialize config")?;
    fs::write(p, s).with_context(|| format!("write {}", p.display()))?;
    println!("Wrote {}", p.display());
    Ok(())
}
