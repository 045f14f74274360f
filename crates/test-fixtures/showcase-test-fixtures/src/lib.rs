use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    content: HashMap<String, String>,
    #[serde(rename = "event-scripts")]
    event_scripts: HashMap<String, ScriptEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ScriptEntry {
    Path(String),
    Detailed {
        script: String,
        #[serde(default)]
        content: Option<String>,
    },
}

impl ScriptEntry {
    fn as_path(&self) -> &str {
        match self {
            ScriptEntry::Path(path) => path,
            ScriptEntry::Detailed { script, .. } => script,
        }
    }

    fn content(&self) -> Option<&str> {
        match self {
            ScriptEntry::Path(_) => None,
            ScriptEntry::Detailed { content, .. } => content.as_deref(),
        }
    }
}

/// Content set used by scripts that don't name one.
pub const DEFAULT_CONTENT: &str = "portfolio";

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn resolve_path(rel: &str) -> PathBuf {
    fixtures_root().join(rel)
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = resolve_path(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn load_json<T: DeserializeOwned>(rel: &str) -> Result<T> {
    let text = read_to_string(rel)?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse JSON fixture {rel}"))
}

fn lookup<'a, T>(map: &'a HashMap<String, T>, kind: &str, name: &str) -> Result<&'a T> {
    map.get(name)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))
}

pub mod content {
    use super::*;

    pub fn json(name: &str) -> Result<String> {
        let rel = lookup(&MANIFEST.content, "content", name)?;
        read_to_string(rel)
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        let rel = lookup(&MANIFEST.content, "content", name)?;
        super::load_json(rel)
    }
}

pub mod event_scripts {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.event_scripts.keys().cloned().collect()
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        let entry = lookup(&MANIFEST.event_scripts, "event script", name)?;
        super::load_json(entry.as_path())
    }

    /// Name of the content fixture the script runs against.
    pub fn content_name(name: &str) -> Result<String> {
        let entry = lookup(&MANIFEST.event_scripts, "event script", name)?;
        Ok(entry.content().unwrap_or(DEFAULT_CONTENT).to_string())
    }
}
