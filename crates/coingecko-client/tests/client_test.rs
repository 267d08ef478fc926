//! Integration tests for CoinGeckoClient against a mockito server.

use coingecko_client::CoinGeckoClient;

#[tokio::test]
async fn test_ada_price_parses_quote() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/simple/price")
        .match_query(mockito::Matcher::AllOf(vec![
            mockito::Matcher::UrlEncoded("ids".into(), "cardano".into()),
            mockito::Matcher::UrlEncoded("vs_currencies".into(), "usd".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "cardano": {
                    "usd": 0.4521,
                    "usd_24h_vol": 512345678.9,
                    "usd_market_cap": 16012345678.9
                }
            }"#,
        )
        .create_async()
        .await;

    let client = CoinGeckoClient::with_base_url(server.url());
    let price = client.ada_price().await.expect("price must parse");

    assert!((price.usd - 0.4521).abs() < 1e-9);
    assert!(price.usd_24h_vol.is_some());
    assert!(price.usd_market_cap.is_some());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_cardano_entry_is_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/simple/price")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create_async()
        .await;

    let client = CoinGeckoClient::with_base_url(server.url());
    assert!(client.ada_price().await.is_err());
}
