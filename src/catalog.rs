use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_OUTPUT: &str = "assets/data/rings.json";

/// Default catalog location, anchored at the package root so the working
/// directory does not matter.
pub fn default_output() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_OUTPUT)
}

pub const DEFAULT_BADGE: &str = "Imported";
pub const DEFAULT_MODEL: i64 = 1;

/// One catalog entry. Field names and order are what the downstream app
/// reads; do not rename. `Deserialize` is for reading a written catalog back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub id: String,
    pub name: String,
    pub tagline: String,
    pub href: String,
    pub badge: String,
    pub model: i64,
}

/// Shipped instead of an empty catalog.
pub fn placeholder_records() -> Vec<OutputRecord> {
    vec![
        OutputRecord {
            id: "classic-solitaire".into(),
            name: "Classic Solitaire".into(),
            tagline: "A single brilliant stone on a slim band".into(),
            href: String::new(),
            badge: "Sample".into(),
            model: 1,
        },
        OutputRecord {
            id: "halo-ensemble".into(),
            name: "Halo Ensemble".into(),
            tagline: "A centre stone framed by a ring of pavé".into(),
            href: String::new(),
            badge: "Sample".into(),
            model: 2,
        },
    ]
}

/// Drop records whose id was already seen. First occurrence wins.
pub fn dedupe_by_id(records: Vec<OutputRecord>) -> Vec<OutputRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|r| seen.insert(r.id.clone()))
        .collect()
}

/// Overwrite `path` with the records as a 2-space indented JSON array and a
/// trailing newline, creating parent directories first.
pub fn write_catalog(path: &Path, records: &[OutputRecord]) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    let mut json = serde_json::to_string_pretty(records)?;
    json.push('\n');
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
