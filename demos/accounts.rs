//! Example: Listing accounts and recent transactions.
//!
//! Run with: COINBASE_ACCESS_TOKEN=... cargo run --example accounts

use coinbase_api_client::rest::CoinbaseClient;
use coinbase_api_client::rest::private::TransactionExpandOption;
use coinbase_api_client::types::PaginationParameters;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt::init();

    let access_token = match std::env::var("COINBASE_ACCESS_TOKEN") {
        Ok(token) => token,
        Err(_) => {
            println!("Set COINBASE_ACCESS_TOKEN to run this example.");
            return Ok(());
        }
    };
    let client = CoinbaseClient::builder().access_token(access_token).build();

    let user = client.get_current_user().await?;
    println!("Signed in as {}", user.name.as_deref().unwrap_or(&user.id));

    // Walk all account pages
    let mut page = PaginationParameters::with_limit(25);
    loop {
        let accounts = client.list_accounts(&page).await?;
        for account in &accounts.data {
            let balance = account
                .balance
                .as_ref()
                .map(|b| format!("{} {}", b.amount, b.currency))
                .unwrap_or_default();
            println!(
                "{} {:<20} {}",
                account.id,
                account.name.as_deref().unwrap_or("-"),
                balance
            );
        }

        match accounts.pagination.and_then(|p| p.next_page()) {
            Some(next) => page = next,
            None => break,
        }
    }

    let primary = client
        .list_accounts(&PaginationParameters::default())
        .await?
        .data
        .into_iter()
        .find(|a| a.primary == Some(true));
    if let Some(account) = primary {
        println!("\n=== Recent transactions of {} ===", account.id);
        let transactions = client
            .list_transactions(
                &account.id,
                &[TransactionExpandOption::To],
                &PaginationParameters::with_limit(10),
            )
            .await?;
        for tx in &transactions.data {
            println!(
                "{} {:?} {:?} {:?}",
                tx.id,
                tx.transaction_type,
                tx.status,
                tx.amount.as_ref().map(|a| a.amount)
            );
        }
    }

    Ok(())
}
