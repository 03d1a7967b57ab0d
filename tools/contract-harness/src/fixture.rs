//! Contract fixture format and loader.
//!
//! Each fixture file at `contracts/http/{service}/{id}.json` describes one HTTP
//! exchange: the request to send and the response the API must return.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
pub struct Fixture {
    /// Subdirectory under `contracts/http/`; `api` for the boxops API.
    pub service: String,
    /// Matches the filename stem. Fixtures run in `id` order, so stateful
    /// sequences are numbered.
    pub id: String,
    pub description: String,
    pub request: Request,
    pub expect: Expect,
}

impl Fixture {
    pub fn label(&self) -> String {
        format!("{}/{}", self.service, self.id)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    pub method: String,
    pub path: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    pub body: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Expect {
    pub status: u16,
    /// Subset match; extra response headers are allowed.
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Exact JSON match when present.
    pub body: Option<Value>,
}

/// Load every fixture under `{root}/contracts/http/`, optionally limited to
/// one service subdirectory.
pub fn load_all(root: &Path, service: Option<&str>) -> Result<Vec<Fixture>> {
    let http_dir = root.join("contracts/http");

    let service_dirs: Vec<_> = match service {
        Some(svc) => vec![http_dir.join(svc)],
        None => fs::read_dir(&http_dir)
            .with_context(|| format!("cannot open {}", http_dir.display()))?
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().map(|t| t.is_dir()).unwrap_or(false))
            .map(|e| e.path())
            .collect(),
    };

    let mut fixtures = Vec::new();
    for dir in service_dirs.iter().filter(|d| d.exists()) {
        for entry in fs::read_dir(dir)
            .with_context(|| format!("cannot read {}", dir.display()))?
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.extension().is_some_and(|e| e == "json") {
                fixtures.push(load_one(&path)?);
            }
        }
    }

    fixtures.sort_by(|a, b| a.service.cmp(&b.service).then(a.id.cmp(&b.id)));
    Ok(fixtures)
}

fn load_one(path: &Path) -> Result<Fixture> {
    let content =
        fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("invalid fixture JSON in {}", path.display()))
}
