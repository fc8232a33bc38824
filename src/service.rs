//! Option contract operations used by the HTTP handlers.

use crate::db::{OptionRepository, RepositoryError};
use crate::models::{OptionContract, OptionRequest};
use std::sync::Arc;
use tracing::{debug, info};

/// Business layer over an injected [`OptionRepository`].
///
/// No field of an incoming request is validated; whatever the client sends
/// is stored. A missing contract is a normal outcome reported as `None` or
/// `false`.
#[derive(Clone)]
pub struct OptionService {
    repository: Arc<dyn OptionRepository>,
}

impl OptionService {
    /// Creates a service over `repository`.
    #[must_use]
    pub fn new(repository: Arc<dyn OptionRepository>) -> Self {
        Self { repository }
    }

    /// Lists every contract.
    ///
    /// # Errors
    /// Returns error if the storage call fails.
    pub async fn list_all(&self) -> Result<Vec<OptionContract>, RepositoryError> {
        self.repository.find_all().await
    }

    /// Gets a contract by id.
    ///
    /// # Errors
    /// Returns error if the storage call fails.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<OptionContract>, RepositoryError> {
        self.repository.find_by_id(id).await
    }

    /// Lists contracts with exactly this symbol.
    ///
    /// # Errors
    /// Returns error if the storage call fails.
    pub async fn list_by_symbol(
        &self,
        symbol: &str,
    ) -> Result<Vec<OptionContract>, RepositoryError> {
        self.repository.find_by_symbol(symbol).await
    }

    /// Lists contracts with exactly this type.
    ///
    /// # Errors
    /// Returns error if the storage call fails.
    pub async fn list_by_type(
        &self,
        option_type: &str,
    ) -> Result<Vec<OptionContract>, RepositoryError> {
        self.repository.find_by_option_type(option_type).await
    }

    /// Lists contracts matching both symbol and type.
    ///
    /// # Errors
    /// Returns error if the storage call fails.
    pub async fn list_by_symbol_and_type(
        &self,
        symbol: &str,
        option_type: &str,
    ) -> Result<Vec<OptionContract>, RepositoryError> {
        self.repository
            .find_by_symbol_and_option_type(symbol, option_type)
            .await
    }

    /// Lists contracts using whichever filters are present.
    ///
    /// # Errors
    /// Returns error if the storage call fails.
    pub async fn search(
        &self,
        symbol: Option<&str>,
        option_type: Option<&str>,
    ) -> Result<Vec<OptionContract>, RepositoryError> {
        debug!(?symbol, ?option_type, "Listing options");
        match (symbol, option_type) {
            (Some(symbol), Some(option_type)) => {
                self.list_by_symbol_and_type(symbol, option_type).await
            }
            (Some(symbol), None) => self.list_by_symbol(symbol).await,
            (None, Some(option_type)) => self.list_by_type(option_type).await,
            (None, None) => self.list_all().await,
        }
    }

    /// Stores a new contract.
    ///
    /// # Errors
    /// Returns error if the storage call fails.
    pub async fn create(&self, request: &OptionRequest) -> Result<OptionContract, RepositoryError> {
        let created = self.repository.insert(request).await?;
        info!(
            id = created.id,
            symbol = %created.symbol,
            option_type = %created.option_type,
            "Created option"
        );
        Ok(created)
    }

    /// Replaces every mutable field of contract `id` with the request values.
    ///
    /// Optional fields absent from `request` end up null. Returns `None` when
    /// no contract has that id.
    ///
    /// # Errors
    /// Returns error if the storage call fails.
    pub async fn update(
        &self,
        id: i64,
        request: &OptionRequest,
    ) -> Result<Option<OptionContract>, RepositoryError> {
        let updated = self.repository.update(id, request).await?;
        match &updated {
            Some(option) => info!(id, symbol = %option.symbol, "Updated option"),
            None => debug!(id, "Update skipped, option not found"),
        }
        Ok(updated)
    }

    /// Deletes contract `id`. Returns `false` when it was already gone.
    ///
    /// # Errors
    /// Returns error if the storage call fails.
    pub async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let deleted = self.repository.delete_by_id(id).await?;
        if deleted {
            info!(id, "Deleted option");
        }
        Ok(deleted)
    }

    /// Checks storage reachability.
    ///
    /// # Errors
    /// Returns error if the storage backend does not answer.
    pub async fn check_storage(&self) -> Result<(), RepositoryError> {
        self.repository.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::InMemoryOptionRepository;
    use chrono::{NaiveDate, NaiveDateTime};

    fn create_test_service() -> OptionService {
        OptionService::new(Arc::new(InMemoryOptionRepository::new()))
    }

    fn expiration() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2030, 6, 21)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn request(symbol: &str, option_type: &str) -> OptionRequest {
        OptionRequest {
            symbol: symbol.to_string(),
            option_type: option_type.to_string(),
            strike_price: 150.0,
            current_price: 155.0,
            expiration_date: expiration(),
            premium: None,
            delta: None,
            gamma: None,
            theta: None,
            vega: None,
        }
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let service = create_test_service();

        let created = service.create(&request("AAPL", "CALL")).await.unwrap();
        assert!(created.id > 0);
        assert_eq!(created.created_at, created.updated_at);

        let fetched = service.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.symbol, "AAPL");
        assert_eq!(fetched.option_type, "CALL");
        assert_eq!(fetched.strike_price, 150.0);
        assert_eq!(fetched.current_price, 155.0);
        assert_eq!(fetched.expiration_date, expiration());
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let service = create_test_service();
        assert!(service.get_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_is_full_overwrite() {
        let service = create_test_service();

        let mut original = request("AAPL", "CALL");
        original.premium = Some(5.25);
        original.delta = Some(0.6);
        let created = service.create(&original).await.unwrap();

        let patch = request("AAPL", "CALL");
        let updated = service.update(created.id, &patch).await.unwrap().unwrap();

        assert!(updated.premium.is_none());
        assert!(updated.delta.is_none());
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);

        let stored = service.get_by_id(created.id).await.unwrap().unwrap();
        assert!(stored.premium.is_none());
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let service = create_test_service();
        let result = service.update(12345, &request("AAPL", "CALL")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let service = create_test_service();
        let created = service.create(&request("AAPL", "CALL")).await.unwrap();

        assert!(service.delete(created.id).await.unwrap());
        assert!(!service.delete(created.id).await.unwrap());
        assert!(service.get_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_filters() {
        let service = create_test_service();
        let a = service.create(&request("AAPL", "CALL")).await.unwrap();
        let b = service.create(&request("AAPL", "PUT")).await.unwrap();
        let c = service.create(&request("TSLA", "CALL")).await.unwrap();

        let by_symbol = service.list_by_symbol("AAPL").await.unwrap();
        assert_eq!(by_symbol, vec![a.clone(), b.clone()]);

        let by_type = service.list_by_type("CALL").await.unwrap();
        assert_eq!(by_type, vec![a.clone(), c.clone()]);

        let both = service.list_by_symbol_and_type("AAPL", "PUT").await.unwrap();
        assert_eq!(both, vec![b.clone()]);

        assert!(service.list_by_symbol("NVDA").await.unwrap().is_empty());
        assert_eq!(service.list_all().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_search_dispatch() {
        let service = create_test_service();
        service.create(&request("AAPL", "CALL")).await.unwrap();
        service.create(&request("AAPL", "PUT")).await.unwrap();
        service.create(&request("TSLA", "CALL")).await.unwrap();

        assert_eq!(service.search(None, None).await.unwrap().len(), 3);
        assert_eq!(service.search(Some("AAPL"), None).await.unwrap().len(), 2);
        assert_eq!(service.search(None, Some("CALL")).await.unwrap().len(), 2);
        assert_eq!(
            service.search(Some("TSLA"), Some("CALL")).await.unwrap().len(),
            1
        );
        assert!(service.search(Some("TSLA"), Some("PUT")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_accepts_unvalidated_values() {
        let service = create_test_service();

        let mut odd = request("", "STRADDLE");
        odd.strike_price = -10.0;
        odd.expiration_date = NaiveDateTime::default();
        let created = service.create(&odd).await.unwrap();

        assert_eq!(created.option_type, "STRADDLE");
        assert_eq!(created.strike_price, -10.0);
    }

    #[tokio::test]
    async fn test_check_storage_in_memory() {
        let service = create_test_service();
        assert!(service.check_storage().await.is_ok());
    }
}
