//! Append-only log of submitted budgets
//!
//! The log is kept apart from the analyzer: nothing reads it back for
//! analysis, it only records what was submitted and when.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A submitted budget document with its arrival time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredBudget {
    pub timestamp: DateTime<Utc>,
    pub data: serde_json::Value,
}

/// Append-only budget log
pub trait BudgetStore: Send + Sync {
    /// Record a document, returning the stored entry
    fn append(&self, data: serde_json::Value) -> Result<StoredBudget>;

    /// All entries in insertion order
    fn list(&self) -> Result<Vec<StoredBudget>>;
}

/// In-memory budget log (lost on restart)
#[derive(Default)]
pub struct MemoryBudgetStore {
    entries: Mutex<Vec<StoredBudget>>,
}

impl MemoryBudgetStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BudgetStore for MemoryBudgetStore {
    fn append(&self, data: serde_json::Value) -> Result<StoredBudget> {
        let entry = StoredBudget {
            timestamp: Utc::now(),
            data,
        };

        let mut entries = self
            .entries
            .lock()
            .map_err(|e| Error::Store(format!("budget log lock poisoned: {}", e)))?;
        entries.push(entry.clone());

        tracing::debug!(count = entries.len(), "Budget appended to log");
        Ok(entry)
    }

    fn list(&self) -> Result<Vec<StoredBudget>> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| Error::Store(format!("budget log lock poisoned: {}", e)))?;
        Ok(entries.clone())
    }
}
