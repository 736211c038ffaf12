//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use guestdesk::api::{ApiError, UserApi};
use guestdesk::config::CacheConfig;
use guestdesk::detail::{DetailFetcher, FetchPolicy};
use guestdesk::record::UserRecord;
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

/// What the fake service does for the next call.
#[derive(Debug, Clone)]
pub enum Step {
    Succeed,
    Fail { status: u16, message: String },
    /// Wait before answering normally; used to trip the fetch timeout.
    Delay(Duration),
}

impl Step {
    pub fn fail(status: u16, message: &str) -> Self {
        Step::Fail {
            status,
            message: message.to_string(),
        }
    }
}

/// In-memory user service with scripted failures and call recording.
#[derive(Default)]
pub struct FakeApi {
    users: Mutex<HashMap<String, UserRecord>>,
    detail_steps: Mutex<VecDeque<Step>>,
    update_steps: Mutex<VecDeque<Step>>,
    detail_calls: Mutex<Vec<String>>,
    update_calls: Mutex<Vec<(String, UserRecord)>>,
}

impl FakeApi {
    pub fn with_users(users: impl IntoIterator<Item = UserRecord>) -> Arc<Self> {
        let api = Self::default();
        {
            let mut map = api.users.lock();
            for user in users {
                map.insert(user.id.clone(), user);
            }
        }
        Arc::new(api)
    }

    /// Serve `record` for `id`, whatever the record's own identifier is.
    pub fn insert_as(&self, id: &str, record: UserRecord) {
        self.users.lock().insert(id.to_string(), record);
    }

    pub fn script_detail(&self, steps: impl IntoIterator<Item = Step>) {
        self.detail_steps.lock().extend(steps);
    }

    pub fn script_update(&self, steps: impl IntoIterator<Item = Step>) {
        self.update_steps.lock().extend(steps);
    }

    pub fn detail_calls(&self) -> Vec<String> {
        self.detail_calls.lock().clone()
    }

    pub fn update_calls(&self) -> Vec<(String, UserRecord)> {
        self.update_calls.lock().clone()
    }

    pub fn stored(&self, id: &str) -> Option<UserRecord> {
        self.users.lock().get(id).cloned()
    }

    async fn run_step(steps: &Mutex<VecDeque<Step>>) -> Result<(), ApiError> {
        let step = steps.lock().pop_front().unwrap_or(Step::Succeed);
        match step {
            Step::Succeed => Ok(()),
            Step::Fail { status, message } => Err(ApiError::Status { status, message }),
            Step::Delay(duration) => {
                tokio::time::sleep(duration).await;
                Ok(())
            }
        }
    }
}

#[async_trait]
impl UserApi for FakeApi {
    async fn detail(&self, id: &str) -> Result<UserRecord, ApiError> {
        self.detail_calls.lock().push(id.to_string());
        Self::run_step(&self.detail_steps).await?;
        self.users
            .lock()
            .get(id)
            .cloned()
            .ok_or_else(|| ApiError::Status {
                status: 404,
                message: "User not found".to_string(),
            })
    }

    async fn update(&self, id: &str, body: &UserRecord) -> Result<(), ApiError> {
        self.update_calls.lock().push((id.to_string(), body.clone()));
        Self::run_step(&self.update_steps).await?;
        self.users.lock().insert(id.to_string(), body.clone());
        Ok(())
    }
}

/// A fully populated record.
pub fn sample_user(id: &str) -> UserRecord {
    UserRecord {
        id: id.to_string(),
        fullname: format!("Guest {}", id),
        phone: "0901234567".to_string(),
        email: format!("guest{}@example.com", id),
        nationality: "Vietnam".to_string(),
        last_booking: "2026-09-30 12:00".to_string(),
        nights: "4".to_string(),
        books: "2".to_string(),
        roles: "user".to_string(),
        create_at: "2025-01-01 08:00".to_string(),
        update_at: "2026-09-30 12:00".to_string(),
    }
}

pub fn default_policy() -> FetchPolicy {
    FetchPolicy {
        timeout: Duration::from_secs(10),
        max_retries: 1,
        retry_backoff: Duration::ZERO,
    }
}

pub fn fetcher(api: Arc<FakeApi>) -> DetailFetcher<FakeApi> {
    DetailFetcher::new(api, default_policy(), &CacheConfig::default())
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
