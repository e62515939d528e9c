// Copyright (c) 2025 Gastos contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::data::seed_categories;
use crate::models::{AppSettings, Category, Transaction};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("dev.gastos", "Gastos", "gastos"));

pub const TRANSACTIONS_KEY: &str = "transactions";
pub const CATEGORIES_KEY: &str = "categories";
pub const SETTINGS_KEY: &str = "app-storage";

/// Key-value store holding each collection as one JSON blob under a
/// fixed key. A key that is absent or fails to parse yields the
/// collection default; the corrupt value is replaced on the next save,
/// not repaired.
pub struct Store {
    root: PathBuf,
}

impl Store {
    pub fn open_or_init() -> Result<Self> {
        let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
            .context("Could not determine platform-specific data dir")?;
        Self::open_at(proj.data_dir())
    }

    pub fn open_at(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir).context("Failed to create data dir")?;
        Ok(Store {
            root: dir.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn read_key<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = fs::read_to_string(self.key_path(key)).ok()?;
        serde_json::from_str(&raw).ok()
    }

    fn write_key<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.key_path(key);
        let raw = serde_json::to_string_pretty(value)?;
        fs::write(&path, raw).with_context(|| format!("Write {}", path.display()))?;
        Ok(())
    }

    pub fn load_transactions(&self) -> Vec<Transaction> {
        self.read_key(TRANSACTIONS_KEY).unwrap_or_default()
    }

    pub fn save_transactions(&self, transactions: &[Transaction]) -> Result<()> {
        self.write_key(TRANSACTIONS_KEY, &transactions)
    }

    pub fn load_categories(&self) -> Vec<Category> {
        self.read_key(CATEGORIES_KEY)
            .unwrap_or_else(seed_categories)
    }

    pub fn save_categories(&self, categories: &[Category]) -> Result<()> {
        self.write_key(CATEGORIES_KEY, &categories)
    }

    pub fn load_settings(&self) -> AppSettings {
        self.read_key(SETTINGS_KEY).unwrap_or_default()
    }

    pub fn save_settings(&self, settings: &AppSettings) -> Result<()> {
        self.write_key(SETTINGS_KEY, settings)
    }
}
