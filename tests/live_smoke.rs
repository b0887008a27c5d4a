use coinbase_api_client::auth::{ClientCredentials, TokenRefreshStrategy};
use coinbase_api_client::rest::CoinbaseClient;
use coinbase_api_client::types::PaginationParameters;

fn live_tests_enabled() -> bool {
    std::env::var("COINBASE_LIVE_TESTS").ok().as_deref() == Some("1")
}

#[tokio::test]
#[ignore]
async fn live_public_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let client = CoinbaseClient::new();
    let time = client.get_time().await?;
    assert!(time.epoch > 0.0);

    let price = client.get_spot_price("BTC", "USD", None).await?;
    assert_eq!(price.currency, "USD");

    Ok(())
}

#[tokio::test]
#[ignore]
async fn live_private_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let access_token = match std::env::var("COINBASE_ACCESS_TOKEN") {
        Ok(token) => token,
        Err(_) => return Ok(()),
    };
    let mut builder = CoinbaseClient::builder().access_token(access_token);
    if let (Some(credentials), Ok(refresh_token)) = (
        ClientCredentials::try_from_env(),
        std::env::var("COINBASE_REFRESH_TOKEN"),
    ) {
        builder = builder.refresh_strategy(TokenRefreshStrategy::refresh(credentials, refresh_token));
    }
    let client = builder.build();

    let user = client.get_current_user().await?;
    assert!(!user.id.is_empty());

    let accounts = client
        .list_accounts(&PaginationParameters::with_limit(5))
        .await?;
    assert!(accounts.data.len() <= 5);

    Ok(())
}
