//! HTTP client for the university's mobile schedule API.
//!
//! Both endpoints answer with a JSON object keyed by group number. The entry
//! for the requested group is used when present, otherwise the first entry.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::error::ScheduleError;
use crate::schedule::models::{parse_lenient_seq, Exam, Group, Schedule};
use crate::utils::logging::{log_timeout, log_upstream_error, log_upstream_request};

/// Upper bound for a single upstream request. There are no retries.
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct ScheduleGateway {
    client: Client,
    base_url: String,
}

impl ScheduleGateway {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ScheduleError> {
        let client = Client::builder().timeout(UPSTREAM_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch_json(&self, endpoint: &str, group: &Group) -> Result<Value, ScheduleError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        log_upstream_request(&url, group.as_str());

        let response = self
            .client
            .get(&url)
            .query(&[("groupNumber", group.as_str())])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    log_timeout(&format!("GET {url}"), UPSTREAM_TIMEOUT.as_secs(), Some(group.as_str()));
                }
                ScheduleError::from(e)
            })?;

        let body = response.error_for_status()?.json::<Value>().await?;
        Ok(body)
    }

    /// Weekly timetable for `group`.
    pub async fn fetch_schedule(&self, group: &Group) -> Result<Schedule, ScheduleError> {
        let result = self
            .fetch_json("schedule", group)
            .await
            .and_then(|body| select_group_entry(body, group.as_str()).ok_or(ScheduleError::EmptyPayload));

        match result {
            Ok(entry) => Ok(Schedule::from_value(entry)),
            Err(e) => {
                log_upstream_error("schedule", group.as_str(), &e.to_string());
                Err(e)
            }
        }
    }

    /// Exam list for `group`; every failure is logged and yields an empty list.
    pub async fn fetch_exams(&self, group: &Group) -> Vec<Exam> {
        match self.fetch_json("exam", group).await {
            Ok(body) => select_exam_entry(body, group.as_str())
                .map(parse_lenient_seq)
                .unwrap_or_default(),
            Err(e) => {
                log_upstream_error("exam", group.as_str(), &e.to_string());
                Vec::new()
            }
        }
    }

    /// A group exists iff its timetable can be fetched.
    pub async fn verify_group(&self, group: &Group) -> bool {
        self.fetch_schedule(group).await.is_ok()
    }
}

/// Entry for `group`, else the first entry; `None` for empty or non-object bodies.
pub fn select_group_entry(body: Value, group: &str) -> Option<Value> {
    select_entry(body, group, |entry| !entry.is_null())
}

/// Like [`select_group_entry`], but only array entries qualify.
pub fn select_exam_entry(body: Value, group: &str) -> Option<Value> {
    select_entry(body, group, Value::is_array)
}

fn select_entry(body: Value, group: &str, usable: fn(&Value) -> bool) -> Option<Value> {
    let Value::Object(entries) = body else {
        return None;
    };
    if let Some(entry) = entries.get(group).filter(|e| usable(e)) {
        return Some(entry.clone());
    }
    entries.into_iter().next().map(|(_, entry)| entry).filter(usable)
}
