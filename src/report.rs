// Outcome of running a batch of demos.

use crate::console::Console;
use serde::Serialize;
use std::io;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "cause", rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Failure(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub name: String,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    entries: Vec<ReportEntry>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, name: impl Into<String>, outcome: Outcome) {
        self.entries.push(ReportEntry {
            name: name.into(),
            outcome,
        });
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn succeeded(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(|e| e.outcome.is_success())
    }

    pub fn failed(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(|e| !e.outcome.is_success())
    }

    pub fn is_success(&self) -> bool {
        self.failed().next().is_none()
    }

    pub fn outcome_of(&self, name: &str) -> Option<&Outcome> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| &e.outcome)
    }

    pub fn render(&self, console: &Console) -> io::Result<()> {
        console.heading("Report")?;
        for entry in &self.entries {
            match &entry.outcome {
                Outcome::Success => console.success(format!("  [ok]   {}", entry.name))?,
                Outcome::Failure(cause) => {
                    console.failure(format!("  [fail] {}: {cause}", entry.name))?
                }
            }
        }
        console.line(format!(
            "{} demos, {} passed, {} failed",
            self.len(),
            self.succeeded().count(),
            self.failed().count()
        ))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
