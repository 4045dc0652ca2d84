//! Flat-key persistence for the client shell, standing in for extension
//! local storage: the last quiz snapshot, the session token, and the config
//! collapse preference.
//!
//! Writes replace the whole backing file, so there are no read-modify-write
//! races to worry about, and they are fire-and-forget: a failed write is
//! logged and otherwise ignored, exactly like a lost storage callback.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::PathBuf;

pub const KEY_LAST_QUIZ: &str = "lastQuiz";
pub const KEY_SESSION_TOKEN: &str = "sessionToken";
pub const KEY_CONFIG_COLLAPSED: &str = "configCollapsed";

pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_map(&self) -> Map<String, Value> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str::<Value>(&raw)
                .ok()
                .and_then(|v| match v {
                    Value::Object(map) => Some(map),
                    _ => None,
                })
                .unwrap_or_default(),
            Err(_) => Map::new(),
        }
    }

    fn write_map(&self, map: &Map<String, Value>) {
        let serialized = match serde_json::to_string(map) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("Failed to serialize local store: {}", e);
                return;
            }
        };

        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                log::warn!("Failed to create store directory: {}", e);
                return;
            }
        }

        if let Err(e) = fs::write(&self.path, serialized) {
            log::warn!("Failed to write local store: {}", e);
        }
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let map = self.read_map();
        let value = map.get(key)?.clone();
        serde_json::from_value(value).ok()
    }

    pub fn set<T: Serialize>(&self, key: &str, value: &T) {
        let serialized = match serde_json::to_value(value) {
            Ok(v) => v,
            Err(e) => {
                log::warn!("Failed to serialize value for key {}: {}", key, e);
                return;
            }
        };

        let mut map = self.read_map();
        map.insert(key.to_string(), serialized);
        self.write_map(&map);
    }

    pub fn remove(&self, key: &str) {
        let mut map = self.read_map();
        if map.remove(key).is_some() {
            self.write_map(&map);
        }
    }
}
