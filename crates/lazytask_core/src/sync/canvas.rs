//! Canvas LMS client.
//!
//! # Responsibility
//! - Perform blocking authenticated reads against the Canvas REST API.
//! - Decode endpoint payloads into sync wire records.
//!
//! # Invariants
//! - The bearer credential and API root are caller-supplied; no default
//!   credential exists anywhere in this crate.

use crate::sync::source::{
    AssignmentRecord, AssignmentSource, CourseId, CourseSummary, SyncError, SyncResult, TermId,
};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct TermEnvelope {
    id: TermId,
}

/// Blocking Canvas API client.
pub struct CanvasClient {
    base_url: String,
    token: String,
    http: Client,
}

impl CanvasClient {
    /// Creates a client for one API root (e.g. `https://host/api/v1`) and
    /// bearer credential.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
            http: Client::new(),
        }
    }

    fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> SyncResult<T> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .map_err(|source| SyncError::Transport {
                endpoint: endpoint.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::Api {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<T>().map_err(|err| SyncError::Malformed {
            endpoint: endpoint.to_string(),
            message: err.to_string(),
        })
    }
}

impl AssignmentSource for CanvasClient {
    fn current_term(&self) -> SyncResult<TermId> {
        let term: TermEnvelope = self.get_json("accounts/self/terms/current")?;
        Ok(term.id)
    }

    fn active_courses(&self) -> SyncResult<Vec<CourseSummary>> {
        self.get_json("courses?enrollment_state=active&per_page=100")
    }

    fn course_assignments(&self, course_id: CourseId) -> SyncResult<Vec<AssignmentRecord>> {
        self.get_json(&format!("courses/{course_id}/assignments?per_page=100"))
    }
}

#[cfg(test)]
mod tests {
    use super::CanvasClient;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = CanvasClient::new("https://lms.example.edu/api/v1/", "secret");
        assert_eq!(client.base_url, "https://lms.example.edu/api/v1");
    }
}
