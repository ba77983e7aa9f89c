//! Persisted demo settings.

use crate::core::config::DemoConfig;
use gloo::console;
use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};

pub(crate) const API_BASE_URL_KEY: &str = "hookbox.demo.api_base_url";

pub(crate) fn load_demo_config() -> DemoConfig {
    match LocalStorage::get::<String>(API_BASE_URL_KEY) {
        Ok(value) => DemoConfig::from_override(Some(&value)),
        Err(StorageError::KeyNotFound(_)) => DemoConfig::default(),
        Err(err) => {
            log_storage_error("get", API_BASE_URL_KEY, &err.to_string());
            DemoConfig::default()
        }
    }
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
