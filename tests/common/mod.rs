//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use blogstore::api::HttpApi;
use blogstore::config::ApiConfig;
use blogstore::posts::{Post, Reactions};
use chrono::{DateTime, TimeDelta, Utc};
use std::path::PathBuf;
use tempfile::TempDir;

/// Fixed reference instant so ordering assertions are deterministic.
pub fn base_time() -> DateTime<Utc> {
    "2024-03-01T12:00:00Z".parse().unwrap()
}

/// A post created `minutes` after [`base_time`].
pub fn post_at(id: u64, user_id: u64, minutes: i64) -> Post {
    Post {
        id,
        user_id,
        title: format!("Post {}", id),
        body: format!("Body of post {}", id),
        created_at: base_time() + TimeDelta::minutes(minutes),
        reactions: Reactions::default(),
    }
}

/// An HTTP client pointed at a mock server.
pub fn api_for(base_url: &str) -> HttpApi {
    let config = ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    };
    HttpApi::new(&config).expect("Failed to build API client")
}

/// Write a config file into a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// JSON array of posts shaped like the public mock REST service returns them.
pub fn posts_json(ids: &[u64]) -> String {
    let items: Vec<serde_json::Value> = ids
        .iter()
        .map(|id| {
            serde_json::json!({
                "userId": id % 3 + 1,
                "id": id,
                "title": format!("title {}", id),
                "body": format!("body {}", id),
            })
        })
        .collect();
    serde_json::Value::Array(items).to_string()
}
