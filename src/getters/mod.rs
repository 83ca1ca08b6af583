//! Typed request builders for the TD Ameritrade account API.
//!
//! A getter is one configured, URL-addressable read request. It validates
//! every parameter when the parameter is supplied and keeps a fully encoded
//! URL cached; after any successful construction or setter call the cached
//! URL reflects the current field values exactly. Failed validation never
//! mutates a getter.
//!
//! Account-scoped getters (everything except [`UserPrincipalsGetter`])
//! additionally carry a non-empty account id and implement
//! [`AccountGetter`] on top of [`ApiGetter`].

/// Account-scoped getters: account info, preferences, transactions, orders
pub mod account;
/// The user-principals getter and its streaming convenience function
pub mod user_principals;

pub use account::{
    AccountInfoGetter, IndividualTransactionHistoryGetter, OrderGetter, OrdersGetter,
    PreferencesGetter, StreamerSubscriptionKeysGetter, TransactionHistoryGetter,
};
pub use user_principals::{UserPrincipalsGetter, get_user_principals_for_streaming};

use crate::config::Credentials;
use crate::error::AppError;
use crate::utils::parsing::is_valid_iso8601_datetime;
use std::sync::Arc;
use tracing::trace;

/// Capability shared by every request builder.
///
/// Implementors supply [`rebuild`](ApiGetter::rebuild), a pure function from
/// the current field values to the encoded URL, plus storage accessors; the
/// provided [`refresh`](ApiGetter::refresh) recomputes and caches the URL
/// and is invoked by constructors and by every successful setter.
pub trait ApiGetter {
    /// Credentials this request will be issued with
    fn credentials(&self) -> &Arc<Credentials>;

    /// The cached, fully encoded target URL for the current parameters
    fn url(&self) -> &str;

    /// Recomputes the target URL from the current field values
    fn rebuild(&self) -> String;

    #[doc(hidden)]
    fn store_url(&mut self, url: String);

    /// Rebuilds the URL and stores it in the cache
    fn refresh(&mut self) {
        let url = self.rebuild();
        trace!("rebuilt getter url: {url}");
        self.store_url(url);
    }
}

/// Extension for getters whose target path is rooted under an account.
///
/// The provided [`set_account_id`](AccountGetter::set_account_id) enforces
/// the validate-store-rebuild sequence; implementors only supply the field
/// accessors.
pub trait AccountGetter: ApiGetter {
    /// The account id this getter is scoped to
    fn account_id(&self) -> &str;

    #[doc(hidden)]
    fn store_account_id(&mut self, account_id: String);

    /// Replaces the account id, rejecting empty values and rebuilding the
    /// URL on success
    fn set_account_id(&mut self, account_id: &str) -> Result<(), AppError> {
        require_non_empty(account_id, "account_id")?;
        self.store_account_id(account_id.to_string());
        self.refresh();
        Ok(())
    }
}

/// Rejects empty required string parameters, naming the field
pub(crate) fn require_non_empty(value: &str, what: &str) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(AppError::invalid_value(format!("{what} is empty")));
    }
    Ok(())
}

/// Validates an optional date filter: empty is allowed, anything else must
/// be well-formed ISO-8601
pub(crate) fn require_valid_date(value: &str) -> Result<(), AppError> {
    if !value.is_empty() && !is_valid_iso8601_datetime(value) {
        return Err(AppError::invalid_value(format!(
            "invalid ISO-8601 date: {value}"
        )));
    }
    Ok(())
}

/// Validates a mandatory date/time filter
pub(crate) fn require_valid_datetime(value: &str) -> Result<(), AppError> {
    if !is_valid_iso8601_datetime(value) {
        return Err(AppError::invalid_value(format!(
            "invalid ISO-8601 date/time: {value}"
        )));
    }
    Ok(())
}
