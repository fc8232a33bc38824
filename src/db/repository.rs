//! Data-access contract for the `options` table.

use crate::models::{OptionContract, OptionRequest};
use async_trait::async_trait;
use thiserror::Error;

/// Storage error types.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The database rejected the statement or could not be reached.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence operations for option contracts.
///
/// Absence is reported through `Option`/`bool`, never as an error. Every
/// method touches one row or runs one equality-filtered scan.
#[async_trait]
pub trait OptionRepository: Send + Sync {
    /// Returns every stored contract, ordered by id.
    async fn find_all(&self) -> Result<Vec<OptionContract>, RepositoryError>;

    /// Returns the contract with the given id.
    async fn find_by_id(&self, id: i64) -> Result<Option<OptionContract>, RepositoryError>;

    /// Returns contracts whose symbol equals `symbol` (case-sensitive).
    async fn find_by_symbol(&self, symbol: &str) -> Result<Vec<OptionContract>, RepositoryError>;

    /// Returns contracts whose type equals `option_type`.
    async fn find_by_option_type(
        &self,
        option_type: &str,
    ) -> Result<Vec<OptionContract>, RepositoryError>;

    /// Returns contracts matching both `symbol` and `option_type`.
    async fn find_by_symbol_and_option_type(
        &self,
        symbol: &str,
        option_type: &str,
    ) -> Result<Vec<OptionContract>, RepositoryError>;

    /// Stores a new contract and returns it with id and timestamps assigned.
    async fn insert(&self, request: &OptionRequest) -> Result<OptionContract, RepositoryError>;

    /// Overwrites every mutable field of contract `id`.
    ///
    /// Returns `None` when no contract has that id.
    async fn update(
        &self,
        id: i64,
        request: &OptionRequest,
    ) -> Result<Option<OptionContract>, RepositoryError>;

    /// Removes contract `id`, returning whether a row was deleted.
    async fn delete_by_id(&self, id: i64) -> Result<bool, RepositoryError>;

    /// Checks that the storage backend is reachable.
    async fn ping(&self) -> Result<(), RepositoryError>;
}
