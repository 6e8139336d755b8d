//! # skillwise-storage
//!
//! SQLite persistence for the Skillwise tracker. [`StorageEngine`] owns a
//! single serialized connection, runs schema migrations on open, and
//! implements [`skillwise_core::traits::ISkillStorage`].

pub mod connection;
pub mod engine;
pub mod migrations;
pub mod pragmas;
pub mod queries;

pub use engine::StorageEngine;

use skillwise_core::errors::{SkillwiseError, StorageError};

/// Wrap a SQLite failure message as a workspace error.
pub(crate) fn to_storage_err(message: impl Into<String>) -> SkillwiseError {
    SkillwiseError::StorageError(StorageError::SqliteError {
        message: message.into(),
    })
}

/// A stored row could not be turned back into a domain value.
pub(crate) fn corrupt_row(table: &str, reason: impl Into<String>) -> SkillwiseError {
    SkillwiseError::StorageError(StorageError::CorruptRow {
        table: table.to_string(),
        reason: reason.into(),
    })
}
