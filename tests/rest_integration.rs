use rust_decimal::Decimal;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use coinbase_api_client::CoinbaseError;
use coinbase_api_client::auth::{ClientCredentials, TokenRefreshStrategy, TokenStore};
use coinbase_api_client::rest::CoinbaseClient;
use coinbase_api_client::rest::private::{
    PaymentMethodExpandOption, SendMoneyRequest, TransactionExpandOption, TransactionParty,
    UpdateUserRequest,
};
use coinbase_api_client::rest::trades::{
    Buy, BuySellParams, Deposit, DepositWithdrawalParams, TradeExpandOption,
};
use coinbase_api_client::types::{ListOrder, PaginationParameters};

fn build_client(server: &MockServer) -> CoinbaseClient {
    CoinbaseClient::builder()
        .base_url(server.uri())
        .access_token("test_token")
        .build()
}

fn account_json(id: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "primary": true,
        "type": "wallet",
        "currency": { "code": "BTC", "name": "Bitcoin", "exponent": 8, "type": "crypto" },
        "balance": { "amount": "39.59000000", "currency": "BTC" },
        "created_at": "2015-01-31T20:49:02Z",
        "updated_at": "2015-01-31T20:49:02Z",
        "resource": "account",
        "resource_path": format!("/v2/accounts/{}", id)
    })
}

#[tokio::test]
async fn test_get_current_user() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "data": {
            "id": "9da7a204-544e-5fd1-9a12-61176c5d4cd8",
            "name": "User One",
            "username": "user1",
            "resource": "user",
            "resource_path": "/v2/user",
            "email": "user1@example.com",
            "native_currency": "USD",
            "country": { "code": "US", "name": "United States", "is_in_europe": false },
            "created_at": "2015-01-31T20:49:02Z"
        }
    });

    Mock::given(method("GET"))
        .and(path("/v2/user"))
        .and(header("authorization", "Bearer test_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let user = client.get_current_user().await.unwrap();

    assert_eq!(user.name.as_deref(), Some("User One"));
    assert_eq!(user.country.unwrap().code.as_deref(), Some("US"));
}

#[tokio::test]
async fn test_missing_access_token_fails_before_sending() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/user"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = CoinbaseClient::builder().base_url(server.uri()).build();
    let error = client.get_current_user().await.unwrap_err();

    match error {
        CoinbaseError::EmptyAccessToken { path } => assert_eq!(path, "/user"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_get_auth_info() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "data": {
            "method": "oauth",
            "scopes": ["wallet:user:read", "wallet:user:email"],
            "oauth_meta": {}
        }
    });

    Mock::given(method("GET"))
        .and(path("/v2/user/auth"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let info = client.get_auth_info().await.unwrap();

    assert_eq!(info.method, "oauth");
    assert_eq!(info.scopes.len(), 2);
}

#[tokio::test]
async fn test_update_current_user() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "data": {
            "id": "u1",
            "name": "New Name",
            "resource": "user",
            "resource_path": "/v2/user",
            "time_zone": "Pacific Time (US & Canada)"
        }
    });

    Mock::given(method("PUT"))
        .and(path("/v2/user"))
        .and(body_partial_json(serde_json::json!({ "name": "New Name" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = UpdateUserRequest {
        name: Some("New Name".to_string()),
        ..Default::default()
    };
    let user = client.update_current_user(&request).await.unwrap();

    assert_eq!(user.name.as_deref(), Some("New Name"));
}

#[tokio::test]
async fn test_list_accounts_with_pagination() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "pagination": {
            "ending_before": null,
            "starting_after": null,
            "limit": 1,
            "order": "asc",
            "previous_uri": null,
            "next_uri": "/v2/accounts?limit=1&order=asc&starting_after=58542935-67b5-56e1-a3f9-42686e07fa40"
        },
        "data": [account_json("58542935-67b5-56e1-a3f9-42686e07fa40", "My Wallet")]
    });

    Mock::given(method("GET"))
        .and(path("/v2/accounts"))
        .and(query_param("limit", "1"))
        .and(query_param("order", "asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let page = PaginationParameters::with_limit(1).order(ListOrder::Asc);
    let accounts = client.list_accounts(&page).await.unwrap();

    assert_eq!(accounts.data.len(), 1);
    assert_eq!(
        accounts.data[0].balance.as_ref().unwrap().amount,
        Decimal::new(3959, 2)
    );

    let next = accounts.pagination.unwrap().next_page().unwrap();
    assert_eq!(next.limit, Some(1));
    assert_eq!(next.order, Some(ListOrder::Asc));
    assert_eq!(
        next.cursor,
        Some(coinbase_api_client::types::Cursor::StartingAfter(
            "58542935-67b5-56e1-a3f9-42686e07fa40".to_string()
        ))
    );
}

#[tokio::test]
async fn test_account_mutations() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/accounts/a1/primary"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "data": account_json("a1", "Main") })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/v2/accounts/a1"))
        .and(body_partial_json(serde_json::json!({ "name": "Savings" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "data": account_json("a1", "Savings") })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v2/accounts/a1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let account = client.set_primary_account("a1").await.unwrap();
    assert_eq!(account.primary, Some(true));

    let account = client.update_account("a1", "Savings").await.unwrap();
    assert_eq!(account.name.as_deref(), Some("Savings"));

    client.delete_account("a1").await.unwrap();
}

#[tokio::test]
async fn test_list_transactions_with_expand() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "pagination": { "limit": 25, "order": "desc" },
        "data": [{
            "id": "57ffb4ae-0c59-5430-bcd3-3f98f797a66c",
            "type": "send",
            "status": "completed",
            "amount": { "amount": "-0.00100000", "currency": "BTC" },
            "native_amount": { "amount": "-0.01", "currency": "USD" },
            "description": null,
            "created_at": "2015-03-11T13:13:35-07:00",
            "updated_at": "2015-03-26T15:55:43-07:00",
            "resource": "transaction",
            "resource_path": "/v2/accounts/a1/transactions/57ffb4ae",
            "network": { "status": "confirmed", "hash": "463397c87beddd9a61ade61359a13adc9efea26062191fe07147037bce7f33ed" },
            "to": { "resource": "email", "email": "someone@example.com" },
            "details": { "title": "Sent bitcoin", "subtitle": "to someone@example.com" }
        }]
    });

    Mock::given(method("GET"))
        .and(path("/v2/accounts/a1/transactions"))
        .and(query_param("expand[]", "all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let transactions = client
        .list_transactions(
            "a1",
            &[TransactionExpandOption::All],
            &PaginationParameters::default(),
        )
        .await
        .unwrap();

    let tx = &transactions.data[0];
    assert_eq!(tx.transaction_type.as_deref(), Some("send"));
    assert!(matches!(tx.to, Some(TransactionParty::Email(ref e)) if e.email == "someone@example.com"));
    assert_eq!(tx.details.as_ref().unwrap().title, "Sent bitcoin");
    assert!(transactions.pagination.unwrap().next_page().is_none());
}

#[tokio::test]
async fn test_send_money_with_two_factor_token() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "data": {
            "id": "3c04e35e-8e5a-5ff1-9155-00675db4ac02",
            "type": "send",
            "status": "pending",
            "amount": { "amount": "-0.10000000", "currency": "BTC" },
            "resource": "transaction",
            "resource_path": "/v2/accounts/a1/transactions/3c04e35e",
            "idem": "9316dd16-0c05"
        }
    });

    Mock::given(method("POST"))
        .and(path("/v2/accounts/a1/transactions"))
        .and(header("CB-2FA-Token", "1234567"))
        .and(body_partial_json(serde_json::json!({
            "type": "send",
            "to": "1AUJ8z5RuHRTqD1eikyfUUetzGmdWLGkpT",
            "amount": "0.1",
            "currency": "BTC",
            "idem": "9316dd16-0c05"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request =
        SendMoneyRequest::new("1AUJ8z5RuHRTqD1eikyfUUetzGmdWLGkpT", "0.1", "BTC").idem("9316dd16-0c05");
    let tx = client
        .send_money("a1", &request, Some("1234567"), &[])
        .await
        .unwrap();

    assert_eq!(tx.status.as_deref(), Some("pending"));
    assert_eq!(tx.idem.as_deref(), Some("9316dd16-0c05"));
}

#[tokio::test]
async fn test_send_money_two_factor_required() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "errors": [{ "id": "two_factor_required", "message": "Two-step verification code required" }]
    });

    Mock::given(method("POST"))
        .and(path("/v2/accounts/a1/transactions"))
        .respond_with(ResponseTemplate::new(402).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = SendMoneyRequest::new("user@example.com", "1", "BTC");
    let error = client.send_money("a1", &request, None, &[]).await.unwrap_err();

    match error {
        CoinbaseError::Api(api) => {
            assert!(api.has_error_id(coinbase_api_client::error::error_ids::TWO_FACTOR_REQUIRED))
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_cancel_request_allows_empty_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v2/accounts/a1/transactions/tx1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    client.cancel_request("a1", "tx1").await.unwrap();
}

#[tokio::test]
async fn test_create_address() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "data": {
            "id": "dd3183eb-af1d-5f5d-a90d-cbff946435ff",
            "address": "mswUGcPHp1YnkLCgF1TtoryqSc5E9Q8xFa",
            "name": "New receive address",
            "network": "bitcoin",
            "created_at": "2015-01-31T20:49:02Z",
            "resource": "address",
            "resource_path": "/v2/accounts/a1/addresses/dd3183eb"
        }
    });

    Mock::given(method("POST"))
        .and(path("/v2/accounts/a1/addresses"))
        .and(body_partial_json(serde_json::json!({ "name": "New receive address" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let address = client
        .create_address("a1", Some("New receive address"))
        .await
        .unwrap();

    assert_eq!(address.network.as_deref(), Some("bitcoin"));
}

#[tokio::test]
async fn test_get_payment_method_with_fiat_account() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "data": {
            "id": "83562370-3e5c-51db-87da-752af5ab9559",
            "type": "fiat_account",
            "name": "USD Wallet",
            "currency": "USD",
            "allow_buy": true,
            "allow_sell": true,
            "resource": "payment_method",
            "resource_path": "/v2/payment-methods/83562370",
            "fiat_account": account_json("f1", "USD Wallet"),
            "limits": {
                "type": "fiat_account",
                "name": "Coinbase Account",
                "buy": [{
                    "period_in_days": 7,
                    "total": { "amount": "3000.00", "currency": "USD" },
                    "remaining": { "amount": "3000.00", "currency": "USD" }
                }]
            }
        }
    });

    Mock::given(method("GET"))
        .and(path("/v2/payment-methods/83562370-3e5c-51db-87da-752af5ab9559"))
        .and(query_param("expand[]", "fiat_account"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let method = client
        .get_payment_method(
            "83562370-3e5c-51db-87da-752af5ab9559",
            &[PaymentMethodExpandOption::FiatAccount],
        )
        .await
        .unwrap();

    assert_eq!(method.method_type.as_deref(), Some("fiat_account"));
    assert_eq!(method.fiat_account.unwrap().id, "f1");
    let limits = method.limits.unwrap();
    assert_eq!(limits.buy.unwrap()[0].period_in_days, Some(7));
}

#[tokio::test]
async fn test_place_and_commit_buy() {
    let server = MockServer::start().await;
    let pending = serde_json::json!({
        "data": {
            "id": "b1",
            "status": "created",
            "resource": "buy",
            "resource_path": "/v2/accounts/a1/buys/b1",
            "committed": false,
            "amount": { "amount": "0.01000000", "currency": "BTC" },
            "total": { "amount": "10.25", "currency": "USD" }
        }
    });
    let committed = serde_json::json!({
        "data": {
            "id": "b1",
            "status": "completed",
            "resource": "buy",
            "resource_path": "/v2/accounts/a1/buys/b1",
            "committed": true,
            "transaction": { "id": "t1", "resource": "transaction", "resource_path": "/v2/accounts/a1/transactions/t1" }
        }
    });

    Mock::given(method("POST"))
        .and(path("/v2/accounts/a1/buys"))
        .and(body_partial_json(serde_json::json!({
            "amount": "0.01",
            "currency": "BTC",
            "commit": "false"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(pending))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v2/accounts/a1/buys/b1/commit"))
        .and(query_param("expand[]", "transaction"))
        .respond_with(ResponseTemplate::new(200).set_body_json(committed))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let params = BuySellParams::amount("0.01", "BTC").commit(false);
    let buy = client.place_trade::<Buy>("a1", &params, &[]).await.unwrap();
    assert_eq!(buy.base.committed, Some(false));
    assert_eq!(buy.total.unwrap().amount, Decimal::new(1025, 2));

    let buy = client
        .commit_trade::<Buy>("a1", "b1", &[TradeExpandOption::Transaction])
        .await
        .unwrap();
    assert_eq!(buy.base.status.as_deref(), Some("completed"));
    assert_eq!(buy.base.transaction.unwrap().id, "t1");
}

#[tokio::test]
async fn test_list_deposits() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "data": [{
            "id": "d1",
            "status": "completed",
            "resource": "deposit",
            "resource_path": "/v2/accounts/a1/deposits/d1",
            "amount": { "amount": "10.00", "currency": "USD" },
            "instant": true
        }]
    });

    Mock::given(method("GET"))
        .and(path("/v2/accounts/a1/deposits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let deposits = client
        .list_trades::<Deposit>("a1", &[], &PaginationParameters::default())
        .await
        .unwrap();

    assert_eq!(deposits.data.len(), 1);
    assert_eq!(deposits.data[0].instant, Some(true));
    let _ = DepositWithdrawalParams::new("10", "USD", "pm1");
}

#[tokio::test]
async fn test_exchange_code_stores_tokens() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "access_token": "at_code",
        "token_type": "bearer",
        "expires_in": 7200,
        "refresh_token": "rt_code",
        "scope": "wallet:user:read"
    });

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(body_partial_json(serde_json::json!({
            "grant_type": "authorization_code",
            "code": "abc",
            "client_id": "cid",
            "client_secret": "secret",
            "redirect_uri": "myapp://oauth"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let client = CoinbaseClient::builder()
        .base_url(server.uri())
        .refresh_strategy(TokenRefreshStrategy::refresh(
            ClientCredentials::new("cid", "secret"),
            "",
        ))
        .build();
    let token = client.exchange_code("abc", "myapp://oauth").await.unwrap();

    assert_eq!(token.scope, vec!["wallet:user:read"]);
    assert_eq!(client.access_token().as_deref(), Some("at_code"));
    assert_eq!(
        client.token_store().refresh_token().as_deref(),
        Some("rt_code")
    );
}

#[tokio::test]
async fn test_exchange_code_requires_credentials() {
    let client = CoinbaseClient::builder().base_url("http://127.0.0.1:1").build();
    let error = client.exchange_code("abc", "myapp://oauth").await.unwrap_err();
    assert!(matches!(error, CoinbaseError::MissingCredentials));
}

#[tokio::test]
async fn test_oauth_error_format() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "error": "invalid_grant",
        "error_description": "The provided authorization grant is invalid"
    });

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(response))
        .mount(&server)
        .await;

    let client = CoinbaseClient::builder()
        .base_url(server.uri())
        .refresh_strategy(TokenRefreshStrategy::refresh(
            ClientCredentials::new("cid", "secret"),
            "rt",
        ))
        .build();
    let error = client.exchange_code("bad", "myapp://oauth").await.unwrap_err();

    match error {
        CoinbaseError::OAuth(oauth) => {
            assert_eq!(oauth.status, 401);
            assert_eq!(oauth.error, "invalid_grant");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_revoke_token_clears_store() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/revoke"))
        .and(body_partial_json(serde_json::json!({ "token": "test_token" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    client.revoke_token().await.unwrap();

    assert!(client.access_token().is_none());
}
