//! Revue records held by the stub.

use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use serde::Serialize;

/// Credentials the stub accepts and the token it hands out.
#[derive(Debug, Clone)]
pub struct StubConfig {
    pub email: String,
    pub password: String,
    pub access_token: String,
    /// Timeout for reading a request body in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            email: "vasko85@vasko.com".to_string(),
            password: "vasko85".to_string(),
            access_token: "stub-access-token".to_string(),
            request_timeout_ms: 5000,
        }
    }
}

/// A revue as the service returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredRevue {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Url")]
    pub url: String,
    #[serde(rename = "Description")]
    pub description: String,
}

/// Revues in insertion order plus the login counter.
#[derive(Debug)]
pub struct RevueStore {
    config: StubConfig,
    revues: Mutex<Vec<StoredRevue>>,
    auth_calls: AtomicUsize,
}

impl RevueStore {
    pub fn new(config: StubConfig) -> Self {
        Self {
            config,
            revues: Mutex::new(Vec::new()),
            auth_calls: AtomicUsize::new(0),
        }
    }

    pub fn config(&self) -> &StubConfig {
        &self.config
    }

    /// Counts the login attempt and returns the token on matching credentials.
    pub fn authenticate(&self, email: &str, password: &str) -> Option<&str> {
        self.auth_calls.fetch_add(1, Ordering::SeqCst);
        if email == self.config.email && password == self.config.password {
            Some(self.config.access_token.as_str())
        } else {
            None
        }
    }

    /// Number of login attempts received so far.
    pub fn auth_calls(&self) -> usize {
        self.auth_calls.load(Ordering::SeqCst)
    }

    /// Whether an `Authorization` header value carries the issued token.
    pub fn is_authorized(&self, header: Option<&str>) -> bool {
        header
            .and_then(|value| value.strip_prefix("Bearer "))
            .is_some_and(|token| token == self.config.access_token)
    }

    /// Appends a new revue with a fresh id.
    pub fn create(&self, title: String, url: String, description: String) -> StoredRevue {
        let revue = StoredRevue {
            id: uuid::Uuid::new_v4().to_string(),
            title,
            url,
            description,
        };
        self.revues.lock().push(revue.clone());
        revue
    }

    /// All revues, oldest first.
    pub fn all(&self) -> Vec<StoredRevue> {
        self.revues.lock().clone()
    }

    pub fn get(&self, id: &str) -> Option<StoredRevue> {
        self.revues.lock().iter().find(|r| r.id == id).cloned()
    }

    /// Replaces the members of `id`. Returns false when no such revue exists.
    pub fn edit(&self, id: &str, title: String, url: String, description: String) -> bool {
        let mut revues = self.revues.lock();
        match revues.iter_mut().find(|r| r.id == id) {
            Some(revue) => {
                revue.title = title;
                revue.url = url;
                revue.description = description;
                true
            }
            None => false,
        }
    }

    /// Removes `id`. Returns false when no such revue exists.
    pub fn delete(&self, id: &str) -> bool {
        let mut revues = self.revues.lock();
        let before = revues.len();
        revues.retain(|r| r.id != id);
        revues.len() != before
    }

    pub fn len(&self) -> usize {
        self.revues.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
