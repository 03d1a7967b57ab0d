//! PASS/FAIL lines and the closing tally.

use crate::{fixture::Fixture, runner::RunResult};

#[derive(Default)]
pub struct Reporter {
    passed: usize,
    failures: Vec<String>,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print the outcome of one fixture; returns whether it passed.
    pub fn record(&mut self, fixture: &Fixture, result: RunResult) -> bool {
        let label = fixture.label();
        if result.passed() {
            self.passed += 1;
            println!("PASS  [{label}] {}", fixture.description);
            return true;
        }

        println!("FAIL  [{label}] {}", fixture.description);
        for line in failure_details(fixture, &result) {
            println!("        {line}");
        }
        self.failures.push(label);
        false
    }

    /// `total` counts fixtures loaded, so skipped ones show up under fail-fast.
    pub fn print_summary(&self, total: usize) {
        let failed = self.failures.len();
        let skipped = total.saturating_sub(self.passed + failed);
        println!();
        println!("{} passed, {failed} failed, {skipped} skipped", self.passed);
        if !self.failures.is_empty() {
            println!("failed: {}", self.failures.join(", "));
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failures.is_empty()
    }
}

fn failure_details(fixture: &Fixture, result: &RunResult) -> Vec<String> {
    if let Some(err) = &result.error {
        return vec![format!("error: {err}")];
    }
    let mut lines = Vec::new();
    if let Some(actual) = result.actual_status.filter(|s| *s != result.expected_status) {
        lines.push(format!(
            "{} {}: status {actual}, want {}",
            fixture.request.method, fixture.request.path, result.expected_status
        ));
    }
    lines.extend(result.header_mismatches.iter().map(|m| format!("header {m}")));
    lines.extend(result.body_mismatch.clone());
    lines
}
