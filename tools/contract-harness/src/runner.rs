//! Sends one fixture request and compares the response.

use std::collections::HashMap;

use reqwest::Client;
use reqwest::header::HeaderMap;
use serde_json::Value;

use crate::fixture::{Expect, Fixture};

pub struct RunResult {
    pub expected_status: u16,
    pub actual_status: Option<u16>,
    pub header_mismatches: Vec<String>,
    pub body_mismatch: Option<String>,
    /// Set when no response arrived (bad method, connection refused).
    pub error: Option<String>,
}

impl RunResult {
    fn unsent(expect: &Expect, error: String) -> Self {
        Self {
            expected_status: expect.status,
            actual_status: None,
            header_mismatches: Vec::new(),
            body_mismatch: None,
            error: Some(error),
        }
    }

    pub fn passed(&self) -> bool {
        self.error.is_none()
            && self.actual_status == Some(self.expected_status)
            && self.header_mismatches.is_empty()
            && self.body_mismatch.is_none()
    }
}

pub struct Runner {
    client: Client,
    base_url: String,
}

impl Runner {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    pub async fn run(&self, fixture: &Fixture) -> RunResult {
        let expect = &fixture.expect;
        let url = format!("{}{}", self.base_url, fixture.request.path);

        let method =
            match reqwest::Method::from_bytes(fixture.request.method.to_uppercase().as_bytes()) {
                Ok(m) => m,
                Err(_) => {
                    return RunResult::unsent(
                        expect,
                        format!("unknown HTTP method: {}", fixture.request.method),
                    );
                }
            };

        let mut req = self.client.request(method, &url);
        for (k, v) in &fixture.request.headers {
            req = req.header(k, v);
        }
        if let Some(body) = &fixture.request.body {
            req = req.json(body);
        }

        let resp = match req.send().await {
            Ok(resp) => resp,
            Err(e) => return RunResult::unsent(expect, e.to_string()),
        };

        let actual_status = resp.status().as_u16();
        let header_mismatches = header_mismatches(resp.headers(), &expect.headers);
        let body_mismatch = match &expect.body {
            Some(expected) => body_mismatch(expected, &resp.text().await.unwrap_or_default()),
            None => None,
        };

        RunResult {
            expected_status: expect.status,
            actual_status: Some(actual_status),
            header_mismatches,
            body_mismatch,
            error: None,
        }
    }
}

fn header_mismatches(actual: &HeaderMap, expected: &HashMap<String, String>) -> Vec<String> {
    let mut mismatches: Vec<String> = expected
        .iter()
        .filter_map(|(name, want)| match actual.get(name.as_str()) {
            Some(got) if got.to_str().unwrap_or("") == want => None,
            Some(got) => Some(format!(
                "{name}: expected {want:?}, got {:?}",
                got.to_str().unwrap_or("<non-utf8>")
            )),
            None => Some(format!("{name}: missing (expected {want:?})")),
        })
        .collect();
    mismatches.sort();
    mismatches
}

/// Non-JSON bodies compare as `null`.
fn body_mismatch(expected: &Value, actual_text: &str) -> Option<String> {
    let actual: Value = serde_json::from_str(actual_text).unwrap_or(Value::Null);
    (&actual != expected).then(|| format!("body: expected {expected}, got {actual}"))
}
