//! Collaborator trait for the external link store.

use async_trait::async_trait;

use crate::domain::entities::{NewLink, ResolvedLink};
use crate::error::AppError;

/// Narrow interface to the external store that owns URL records.
///
/// The core never mutates records directly; hit counting happens inside
/// [`Self::resolve_and_increment`], which the store must implement as a
/// single atomic operation.
///
/// # Implementations
///
/// Live outside this crate (the storage layer is an external collaborator).
/// Test mocks are generated with `cfg(test)`; integration tests use the
/// in-memory store under `tests/common`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Checks whether a code is free to assign.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the store is unreachable. A
    /// failure must never be interpreted as either answer.
    async fn is_available(&self, code: &str) -> Result<bool, AppError>;

    /// Atomically resolves a code to its destination and increments the
    /// record's hit counter in the same round trip.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(link))` when the code exists and is active
    /// - `Ok(None)` when the code is unknown or inactive
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn resolve_and_increment(&self, code: &str) -> Result<Option<ResolvedLink>, AppError>;

    /// Reserves a code by inserting a new URL record, returning its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] when the code is already taken and
    /// [`AppError::Internal`] on store errors.
    async fn insert_record(&self, new_link: NewLink) -> Result<i64, AppError>;
}
