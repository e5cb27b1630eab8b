// Shared test helpers: an in-memory DNS zone implementing `TxtResolver`.

use std::collections::HashMap;
use std::sync::Mutex;

use mail_dns_check::{DnsLookupError, TxtResolver};

/// In-memory TXT zone that records every query it receives.
#[derive(Default)]
pub struct StaticZone {
    answers: HashMap<String, Result<Vec<String>, DnsLookupError>>,
    queries: Mutex<Vec<String>>,
}

#[allow(dead_code)] // Not every test file uses every helper
impl StaticZone {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes TXT values at `name`, in the order given.
    pub fn txt(mut self, name: &str, values: &[&str]) -> Self {
        self.answers.insert(
            name.to_string(),
            Ok(values.iter().map(|v| v.to_string()).collect()),
        );
        self
    }

    /// Makes every query for `name` fail with `err`.
    pub fn failing(mut self, name: &str, err: DnsLookupError) -> Self {
        self.answers.insert(name.to_string(), Err(err));
        self
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

impl TxtResolver for StaticZone {
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, DnsLookupError> {
        self.queries.lock().unwrap().push(name.to_string());
        self.answers.get(name).cloned().unwrap_or(Ok(Vec::new()))
    }
}
