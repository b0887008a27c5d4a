//! Authenticated wallet endpoints: users, accounts, transactions, addresses
//! and payment methods.
//!
//! All methods need an access token. List methods return the full
//! [`ResponseModel`] so callers can follow the pagination cursors.

mod types;

pub use types::*;

use crate::error::CoinbaseError;
use crate::rest::endpoints::{headers, private};
use crate::rest::{ApiRequest, CoinbaseClient};
use crate::types::{PaginationParameters, ResponseModel};

impl CoinbaseClient {
    // ========== Users ==========

    /// Get a user's public information.
    pub async fn get_user(&self, user_id: &str) -> Result<User, CoinbaseError> {
        self.fetch(ApiRequest::get(private::user(user_id))).await
    }

    /// Get the user owning the access token.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use coinbase_api_client::rest::CoinbaseClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = CoinbaseClient::builder().access_token("access_token").build();
    ///     let user = client.get_current_user().await?;
    ///     println!("{} ({:?})", user.id, user.native_currency);
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_current_user(&self) -> Result<User, CoinbaseError> {
        self.fetch(ApiRequest::get(private::USER)).await
    }

    /// Get the authorization information of the access token.
    pub async fn get_auth_info(&self) -> Result<AuthorizationInfo, CoinbaseError> {
        self.fetch(ApiRequest::get(private::USER_AUTH)).await
    }

    /// Update the current user.
    pub async fn update_current_user(
        &self,
        request: &UpdateUserRequest,
    ) -> Result<User, CoinbaseError> {
        self.fetch(ApiRequest::put(private::USER).json(request)?).await
    }

    // ========== Accounts ==========

    /// List the user's accounts.
    pub async fn list_accounts(
        &self,
        page: &PaginationParameters,
    ) -> Result<ResponseModel<Vec<Account>>, CoinbaseError> {
        self.fetch_page(ApiRequest::get(private::ACCOUNTS).page(page)).await
    }

    /// Get an account by ID.
    pub async fn get_account(&self, account_id: &str) -> Result<Account, CoinbaseError> {
        self.fetch(ApiRequest::get(private::account(account_id))).await
    }

    /// Make an account the user's primary account.
    pub async fn set_primary_account(&self, account_id: &str) -> Result<Account, CoinbaseError> {
        self.fetch(ApiRequest::post(private::account_primary(account_id))).await
    }

    /// Rename an account.
    pub async fn update_account(
        &self,
        account_id: &str,
        name: &str,
    ) -> Result<Account, CoinbaseError> {
        let body = serde_json::json!({ "name": name });
        self.fetch(ApiRequest::put(private::account(account_id)).json(&body)?).await
    }

    /// Delete an account. Primary accounts and accounts with a balance can't
    /// be deleted.
    pub async fn delete_account(&self, account_id: &str) -> Result<(), CoinbaseError> {
        self.send_empty(ApiRequest::delete(private::account(account_id))).await
    }

    // ========== Transactions ==========

    /// List transactions of an account.
    pub async fn list_transactions(
        &self,
        account_id: &str,
        expand: &[TransactionExpandOption],
        page: &PaginationParameters,
    ) -> Result<ResponseModel<Vec<Transaction>>, CoinbaseError> {
        let request = ApiRequest::get(private::transactions(account_id))
            .expand(expand)
            .page(page);
        self.fetch_page(request).await
    }

    /// Get a transaction of an account.
    pub async fn get_transaction(
        &self,
        account_id: &str,
        transaction_id: &str,
        expand: &[TransactionExpandOption],
    ) -> Result<Transaction, CoinbaseError> {
        let request =
            ApiRequest::get(private::transaction(account_id, transaction_id)).expand(expand);
        self.fetch(request).await
    }

    /// Send funds to an email or crypto address.
    ///
    /// Sends over the two-factor limit are rejected with `two_factor_required`;
    /// repeat the call with the code the user received as `two_factor_token`.
    pub async fn send_money(
        &self,
        account_id: &str,
        request: &SendMoneyRequest,
        two_factor_token: Option<&str>,
        expand: &[TransactionExpandOption],
    ) -> Result<Transaction, CoinbaseError> {
        let mut api_request = ApiRequest::post(private::transactions(account_id))
            .expand(expand)
            .json(request)?;
        if let Some(token) = two_factor_token {
            api_request = api_request.header(headers::CB_2FA_TOKEN, token);
        }
        self.fetch(api_request).await
    }

    /// Request money from an email address.
    pub async fn request_money(
        &self,
        account_id: &str,
        request: &RequestMoneyRequest,
        expand: &[TransactionExpandOption],
    ) -> Result<Transaction, CoinbaseError> {
        let api_request = ApiRequest::post(private::transactions(account_id))
            .expand(expand)
            .json(request)?;
        self.fetch(api_request).await
    }

    /// Complete a money request sent to the current user.
    pub async fn complete_request(
        &self,
        account_id: &str,
        transaction_id: &str,
    ) -> Result<Transaction, CoinbaseError> {
        let path = format!("{}/complete", private::transaction(account_id, transaction_id));
        self.fetch(ApiRequest::post(path)).await
    }

    /// Resend the notification email of a money request.
    pub async fn resend_request(
        &self,
        account_id: &str,
        transaction_id: &str,
    ) -> Result<Transaction, CoinbaseError> {
        let path = format!("{}/resend", private::transaction(account_id, transaction_id));
        self.fetch(ApiRequest::post(path)).await
    }

    /// Cancel a pending money request.
    pub async fn cancel_request(
        &self,
        account_id: &str,
        transaction_id: &str,
    ) -> Result<(), CoinbaseError> {
        self.send_empty(ApiRequest::delete(private::transaction(
            account_id,
            transaction_id,
        )))
        .await
    }

    // ========== Addresses ==========

    /// List the receive addresses of an account.
    pub async fn list_addresses(
        &self,
        account_id: &str,
        page: &PaginationParameters,
    ) -> Result<ResponseModel<Vec<Address>>, CoinbaseError> {
        self.fetch_page(ApiRequest::get(private::addresses(account_id)).page(page)).await
    }

    /// Get a receive address by ID or by the address itself.
    pub async fn get_address(
        &self,
        account_id: &str,
        address_id: &str,
    ) -> Result<Address, CoinbaseError> {
        self.fetch(ApiRequest::get(private::address(account_id, address_id))).await
    }

    /// List transactions received on an address.
    pub async fn list_address_transactions(
        &self,
        account_id: &str,
        address_id: &str,
        expand: &[TransactionExpandOption],
        page: &PaginationParameters,
    ) -> Result<ResponseModel<Vec<Transaction>>, CoinbaseError> {
        let request = ApiRequest::get(private::address_transactions(account_id, address_id))
            .expand(expand)
            .page(page);
        self.fetch_page(request).await
    }

    /// Create a new receive address for an account.
    pub async fn create_address(
        &self,
        account_id: &str,
        name: Option<&str>,
    ) -> Result<Address, CoinbaseError> {
        let mut request = ApiRequest::post(private::addresses(account_id));
        if let Some(name) = name {
            request = request.json(&serde_json::json!({ "name": name }))?;
        }
        self.fetch(request).await
    }

    // ========== Payment methods ==========

    /// List the user's payment methods.
    pub async fn list_payment_methods(
        &self,
        expand: &[PaymentMethodExpandOption],
        page: &PaginationParameters,
    ) -> Result<ResponseModel<Vec<PaymentMethod>>, CoinbaseError> {
        let request = ApiRequest::get(private::PAYMENT_METHODS)
            .expand(expand)
            .page(page);
        self.fetch_page(request).await
    }

    /// Get a payment method by ID.
    pub async fn get_payment_method(
        &self,
        payment_method_id: &str,
        expand: &[PaymentMethodExpandOption],
    ) -> Result<PaymentMethod, CoinbaseError> {
        let request = ApiRequest::get(private::payment_method(payment_method_id)).expand(expand);
        self.fetch(request).await
    }

    /// Remove a payment method.
    pub async fn delete_payment_method(&self, payment_method_id: &str) -> Result<(), CoinbaseError> {
        self.send_empty(ApiRequest::delete(private::payment_method(payment_method_id))).await
    }
}
