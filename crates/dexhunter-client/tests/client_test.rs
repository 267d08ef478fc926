//! Integration tests for DexHunterClient against a mockito server.

use dexhunter_client::DexHunterClient;

#[tokio::test]
async fn test_trending_parses_pairs() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/swap/trending")
        .match_body(mockito::Matcher::PartialJson(serde_json::json!({
            "sort": "VOLUME_AMOUNT",
            "period": "5m"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
                {
                    "token_id": "750900e4999ebe0d58f19b634768ba25e525aaf12403bfe8fe130501424f4f4b",
                    "current_period_volume": 123456.78,
                    "volume_change_percentage": 12.5,
                    "price_change_percentage": -3.2,
                    "current_period_closing_price": 0.0042,
                    "amount_buys": 120,
                    "amount_sales": 80
                }
            ]"#,
        )
        .create_async()
        .await;

    let client = DexHunterClient::with_base_url(server.url());
    let pairs = client.trending("5m").await.expect("trending must parse");

    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].amount_buys, 120);
    assert_eq!(pairs[0].amount_sales, 80);
    assert!((pairs[0].current_period_volume - 123456.78).abs() < 1e-9);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_estimate_sends_blacklist_and_parses_response() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/swap/estimate")
        .match_body(mockito::Matcher::PartialJson(serde_json::json!({
            "amount_in": 100.0,
            "token_in": "ADA",
            "token_out": "BOOK",
            "blacklisted_dexes": ["CERRA", "MUESLISWAP", "GENIUS"]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "token_in_symbol": "ADA",
                "token_out_symbol": "BOOK",
                "amount_out": 2450.3,
                "price_impact": 0.8,
                "route_summary": "Minswap 60% > SundaeSwap 40%"
            }"#,
        )
        .create_async()
        .await;

    let client = DexHunterClient::with_base_url(server.url());
    let est = client
        .estimate(100.0, "ADA", "BOOK", 5.0)
        .await
        .expect("estimate must parse");

    assert_eq!(est.token_in_symbol.as_deref(), Some("ADA"));
    assert_eq!(est.token_out_symbol.as_deref(), Some("BOOK"));
    assert_eq!(est.amount_out, Some(2450.3));
    assert_eq!(
        est.route_summary.as_deref(),
        Some("Minswap 60% > SundaeSwap 40%")
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_global_stats_most_recent_first() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/stats/global")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
                {
                    "global_buy_volume": 2500000000.0,
                    "global_sell_volume": 750000.0,
                    "global_buy_count": 4021,
                    "global_sell_count": 1980,
                    "count": 6001
                },
                {
                    "global_buy_volume": 1.0,
                    "global_sell_volume": 1.0,
                    "global_buy_count": 1,
                    "global_sell_count": 1,
                    "count": 2
                }
            ]"#,
        )
        .create_async()
        .await;

    let client = DexHunterClient::with_base_url(server.url());
    let stats = client.global_stats().await.expect("stats must parse");

    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0].global_buy_count, 4021);
    assert_eq!(stats[0].count, 6001);
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/stats/global")
        .with_status(502)
        .create_async()
        .await;

    let client = DexHunterClient::with_base_url(server.url());
    let err = client.global_stats().await.unwrap_err();
    assert!(err.to_string().contains("error status"), "got: {err:#}");
}
