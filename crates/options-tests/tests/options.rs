//! Option contract CRUD tests.

use chrono::NaiveDate;
use options_client::{Error, OptionQuery, OptionRequest};
use options_tests::{create_test_client, sample_request, unique_symbol};

#[tokio::test]
async fn test_create_and_get_option() {
    let client = create_test_client().expect("Failed to create client");
    let symbol = unique_symbol("AAPL");

    let request = sample_request(&symbol, "CALL");
    let created = client
        .create_option(&request)
        .await
        .expect("Failed to create option");
    assert!(created.id > 0);
    assert_eq!(created.created_at, created.updated_at);

    let fetched = client
        .get_option(created.id)
        .await
        .expect("Failed to get option");
    assert_eq!(fetched.symbol, symbol);
    assert_eq!(fetched.option_type, "CALL");
    assert_eq!(fetched.strike_price, 150.0);
    assert_eq!(fetched.current_price, 155.0);
    assert_eq!(fetched.expiration_date, request.expiration_date);
    assert_eq!(fetched.created_at, fetched.updated_at);

    client
        .delete_option(created.id)
        .await
        .expect("Failed to delete option");
}

#[tokio::test]
async fn test_create_scenario_defaults_greeks_to_null() {
    let client = create_test_client().expect("Failed to create client");
    let symbol = unique_symbol("MSFT");
    let expiration = NaiveDate::from_ymd_opt(2025, 12, 19)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let created = client
        .create_option(&OptionRequest::new(&symbol, "PUT", 300.0, 295.0, expiration))
        .await
        .expect("Failed to create option");

    assert_eq!(created.created_at, created.updated_at);
    assert!(created.premium.is_none());
    assert!(created.delta.is_none());
    assert!(created.gamma.is_none());
    assert!(created.theta.is_none());
    assert!(created.vega.is_none());

    client.delete_option(created.id).await.ok();
}

#[tokio::test]
async fn test_update_is_full_overwrite() {
    let client = create_test_client().expect("Failed to create client");
    let symbol = unique_symbol("UPD");

    let created = client
        .create_option(
            &sample_request(&symbol, "CALL")
                .with_premium(6.25)
                .with_greeks(0.5, 0.02, -0.04, 0.15),
        )
        .await
        .expect("Failed to create option");
    assert_eq!(created.premium, Some(6.25));

    let updated = client
        .update_option(created.id, &sample_request(&symbol, "PUT"))
        .await
        .expect("Failed to update option");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.option_type, "PUT");
    assert!(updated.premium.is_none());
    assert!(updated.delta.is_none());
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= updated.created_at);

    client.delete_option(created.id).await.ok();
}

#[tokio::test]
async fn test_delete_twice_returns_not_found() {
    let client = create_test_client().expect("Failed to create client");
    let symbol = unique_symbol("DEL");

    let created = client
        .create_option(&sample_request(&symbol, "CALL"))
        .await
        .expect("Failed to create option");

    client
        .delete_option(created.id)
        .await
        .expect("First delete should succeed");

    let second = client.delete_option(created.id).await;
    assert!(matches!(second, Err(Error::NotFound(_))));
}

#[tokio::test]
async fn test_missing_id_is_not_found_everywhere() {
    let client = create_test_client().expect("Failed to create client");
    let missing = i64::MAX;

    assert!(matches!(
        client.get_option(missing).await,
        Err(Error::NotFound(_))
    ));
    assert!(matches!(
        client
            .update_option(missing, &sample_request("NONE", "CALL"))
            .await,
        Err(Error::NotFound(_))
    ));
    assert!(matches!(
        client.delete_option(missing).await,
        Err(Error::NotFound(_))
    ));
}

#[tokio::test]
async fn test_filters_by_symbol_and_type() {
    let client = create_test_client().expect("Failed to create client");
    let aapl = unique_symbol("AAPL");
    let tsla = unique_symbol("TSLA");

    let a = client
        .create_option(&sample_request(&aapl, "CALL"))
        .await
        .expect("Failed to create A");
    let b = client
        .create_option(&sample_request(&aapl, "PUT"))
        .await
        .expect("Failed to create B");
    let c = client
        .create_option(&sample_request(&tsla, "CALL"))
        .await
        .expect("Failed to create C");

    let by_symbol: Vec<i64> = client
        .list_options_by_symbol(&aapl)
        .await
        .expect("Failed to list by symbol")
        .iter()
        .map(|o| o.id)
        .collect();
    assert_eq!(by_symbol, vec![a.id, b.id]);

    // Other tests may have stored CALLs too, so only check membership.
    let by_type: Vec<i64> = client
        .list_options_by_type("CALL")
        .await
        .expect("Failed to list by type")
        .iter()
        .map(|o| o.id)
        .collect();
    assert!(by_type.contains(&a.id));
    assert!(by_type.contains(&c.id));
    assert!(!by_type.contains(&b.id));

    let both = client
        .search_options(&OptionQuery {
            symbol: Some(aapl.clone()),
            option_type: Some("PUT".to_string()),
        })
        .await
        .expect("Failed to search");
    assert_eq!(both.len(), 1);
    assert_eq!(both[0].id, b.id);

    for id in [a.id, b.id, c.id] {
        client.delete_option(id).await.ok();
    }
}

#[tokio::test]
async fn test_unknown_symbol_returns_empty_list() {
    let client = create_test_client().expect("Failed to create client");

    let options = client
        .list_options_by_symbol(&unique_symbol("NOPE"))
        .await
        .expect("Empty symbol list should still succeed");

    assert!(options.is_empty());
}

#[tokio::test]
async fn test_symbol_with_reserved_characters_is_one_segment() {
    let client = create_test_client().expect("Failed to create client");
    let base = unique_symbol("BRK");
    let plain = client
        .create_option(&sample_request(&base, "CALL"))
        .await
        .expect("Failed to create plain symbol");
    let slashed_symbol = format!("{}/B#1", base);
    let slashed = client
        .create_option(&sample_request(&slashed_symbol, "CALL"))
        .await
        .expect("Failed to create reserved-character symbol");

    let found = client
        .list_options_by_symbol(&slashed_symbol)
        .await
        .expect("Failed to list by symbol");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, slashed.id);
    assert_eq!(found[0].symbol, slashed_symbol);

    for id in [plain.id, slashed.id] {
        client.delete_option(id).await.expect("Failed to clean up");
    }
}
