//! In-process option repository.
//!
//! Used when no database is configured and by the unit tests. Mirrors the
//! PostgreSQL repository: ids start at 1 and are never reused, lists are
//! ordered by id.

use super::{OptionRepository, RepositoryError};
use crate::models::{OptionContract, OptionRequest, now_timestamp};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;

#[derive(Debug)]
struct Table {
    rows: BTreeMap<i64, OptionContract>,
    next_id: i64,
}

/// Option repository backed by an in-memory table.
#[derive(Debug)]
pub struct InMemoryOptionRepository {
    table: RwLock<Table>,
}

impl InMemoryOptionRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Returns the number of stored contracts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.read().rows.len()
    }

    /// Returns true when nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn select<F>(&self, predicate: F) -> Vec<OptionContract>
    where
        F: Fn(&OptionContract) -> bool,
    {
        self.table
            .read()
            .rows
            .values()
            .filter(|row| predicate(row))
            .cloned()
            .collect()
    }
}

impl Default for InMemoryOptionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OptionRepository for InMemoryOptionRepository {
    async fn find_all(&self) -> Result<Vec<OptionContract>, RepositoryError> {
        Ok(self.select(|_| true))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<OptionContract>, RepositoryError> {
        Ok(self.table.read().rows.get(&id).cloned())
    }

    async fn find_by_symbol(&self, symbol: &str) -> Result<Vec<OptionContract>, RepositoryError> {
        Ok(self.select(|row| row.symbol == symbol))
    }

    async fn find_by_option_type(
        &self,
        option_type: &str,
    ) -> Result<Vec<OptionContract>, RepositoryError> {
        Ok(self.select(|row| row.option_type == option_type))
    }

    async fn find_by_symbol_and_option_type(
        &self,
        symbol: &str,
        option_type: &str,
    ) -> Result<Vec<OptionContract>, RepositoryError> {
        Ok(self.select(|row| row.symbol == symbol && row.option_type == option_type))
    }

    async fn insert(&self, request: &OptionRequest) -> Result<OptionContract, RepositoryError> {
        let mut table = self.table.write();
        let id = table.next_id;
        table.next_id += 1;

        let row = OptionContract::from_request(id, request, now_timestamp());
        table.rows.insert(id, row.clone());
        Ok(row)
    }

    async fn update(
        &self,
        id: i64,
        request: &OptionRequest,
    ) -> Result<Option<OptionContract>, RepositoryError> {
        let mut table = self.table.write();
        Ok(table.rows.get_mut(&id).map(|row| {
            row.overwrite(request, now_timestamp());
            row.clone()
        }))
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, RepositoryError> {
        Ok(self.table.write().rows.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn request(symbol: &str, option_type: &str) -> OptionRequest {
        OptionRequest {
            symbol: symbol.to_string(),
            option_type: option_type.to_string(),
            strike_price: 100.0,
            current_price: 101.0,
            expiration_date: NaiveDate::from_ymd_opt(2030, 1, 18)
                .unwrap()
                .and_hms_opt(16, 0, 0)
                .unwrap(),
            premium: Some(2.5),
            delta: None,
            gamma: None,
            theta: None,
            vega: None,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let repo = InMemoryOptionRepository::new();

        let first = repo.insert(&request("AAPL", "CALL")).await.unwrap();
        let second = repo.insert(&request("AAPL", "PUT")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryOptionRepository::new();

        let first = repo.insert(&request("AAPL", "CALL")).await.unwrap();
        assert!(repo.delete_by_id(first.id).await.unwrap());

        let second = repo.insert(&request("AAPL", "CALL")).await.unwrap();
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_find_by_symbol_is_case_sensitive() {
        let repo = InMemoryOptionRepository::new();
        repo.insert(&request("AAPL", "CALL")).await.unwrap();

        assert_eq!(repo.find_by_symbol("AAPL").await.unwrap().len(), 1);
        assert!(repo.find_by_symbol("aapl").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_symbol_and_option_type() {
        let repo = InMemoryOptionRepository::new();
        repo.insert(&request("AAPL", "CALL")).await.unwrap();
        let put = repo.insert(&request("AAPL", "PUT")).await.unwrap();
        repo.insert(&request("TSLA", "PUT")).await.unwrap();

        let rows = repo
            .find_by_symbol_and_option_type("AAPL", "PUT")
            .await
            .unwrap();
        assert_eq!(rows, vec![put]);
    }

    #[tokio::test]
    async fn test_update_missing_row_returns_none() {
        let repo = InMemoryOptionRepository::new();

        let updated = repo.update(42, &request("AAPL", "CALL")).await.unwrap();
        assert!(updated.is_none());
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn test_update_keeps_created_at() {
        let repo = InMemoryOptionRepository::new();
        let created = repo.insert(&request("AAPL", "CALL")).await.unwrap();

        let updated = repo
            .update(created.id, &request("MSFT", "PUT"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.symbol, "MSFT");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= updated.created_at);
    }

    #[tokio::test]
    async fn test_find_all_ordered_by_id() {
        let repo = InMemoryOptionRepository::new();
        for symbol in ["C", "A", "B"] {
            repo.insert(&request(symbol, "CALL")).await.unwrap();
        }

        let ids: Vec<i64> = repo
            .find_all()
            .await
            .unwrap()
            .iter()
            .map(|row| row.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
