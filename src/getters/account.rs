use crate::config::Credentials;
use crate::constants::{URL_ACCOUNTS, URL_BASE};
use crate::error::AppError;
use crate::getters::{
    ApiGetter, AccountGetter, require_non_empty, require_valid_date, require_valid_datetime,
};
use crate::model::{OrderStatusType, TransactionType};
use crate::utils::parsing::{build_encoded_query_str, url_encode};
use std::sync::Arc;

/// Fetches balances for one account, optionally embedding the positions
/// and/or orders sections in the response.
///
/// URL shape: `accounts/{account_id}[?fields=positions[,orders]]`, with
/// `?fields=orders` alone when only orders are requested and no `fields`
/// parameter when neither flag is set.
pub struct AccountInfoGetter {
    credentials: Arc<Credentials>,
    account_id: String,
    positions: bool,
    orders: bool,
    url: String,
}

impl AccountInfoGetter {
    /// Creates the getter, validating the account id and building the URL
    ///
    /// # Arguments
    /// * `credentials` - Shared authentication state
    /// * `account_id` - Account to query, must be non-empty
    /// * `positions` - Include the positions section in the response
    /// * `orders` - Include the orders section in the response
    pub fn new(
        credentials: Arc<Credentials>,
        account_id: &str,
        positions: bool,
        orders: bool,
    ) -> Result<Self, AppError> {
        require_non_empty(account_id, "account_id")?;
        let mut getter = Self {
            credentials,
            account_id: account_id.to_string(),
            positions,
            orders,
            url: String::new(),
        };
        getter.refresh();
        Ok(getter)
    }

    /// Whether the response will include the positions section
    pub fn returns_positions(&self) -> bool {
        self.positions
    }

    /// Whether the response will include the orders section
    pub fn returns_orders(&self) -> bool {
        self.orders
    }

    /// Toggles the positions section and rebuilds the URL
    pub fn return_positions(&mut self, positions: bool) {
        self.positions = positions;
        self.refresh();
    }

    /// Toggles the orders section and rebuilds the URL
    pub fn return_orders(&mut self, orders: bool) {
        self.orders = orders;
        self.refresh();
    }
}

impl ApiGetter for AccountInfoGetter {
    fn credentials(&self) -> &Arc<Credentials> {
        &self.credentials
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn rebuild(&self) -> String {
        let mut fields = String::new();
        if self.positions {
            fields.push_str("?fields=positions");
            if self.orders {
                fields.push_str(",orders");
            }
        } else if self.orders {
            fields.push_str("?fields=orders");
        }
        format!("{URL_ACCOUNTS}{}{fields}", url_encode(&self.account_id))
    }

    fn store_url(&mut self, url: String) {
        self.url = url;
    }
}

impl AccountGetter for AccountInfoGetter {
    fn account_id(&self) -> &str {
        &self.account_id
    }

    fn store_account_id(&mut self, account_id: String) {
        self.account_id = account_id;
    }
}

/// Fetches the preferences block of one account.
///
/// URL shape: `accounts/{account_id}/preferences`.
pub struct PreferencesGetter {
    credentials: Arc<Credentials>,
    account_id: String,
    url: String,
}

impl PreferencesGetter {
    /// Creates the getter, validating the account id and building the URL
    pub fn new(credentials: Arc<Credentials>, account_id: &str) -> Result<Self, AppError> {
        require_non_empty(account_id, "account_id")?;
        let mut getter = Self {
            credentials,
            account_id: account_id.to_string(),
            url: String::new(),
        };
        getter.refresh();
        Ok(getter)
    }
}

impl ApiGetter for PreferencesGetter {
    fn credentials(&self) -> &Arc<Credentials> {
        &self.credentials
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn rebuild(&self) -> String {
        format!("{URL_ACCOUNTS}{}/preferences", url_encode(&self.account_id))
    }

    fn store_url(&mut self, url: String) {
        self.url = url;
    }
}

impl AccountGetter for PreferencesGetter {
    fn account_id(&self) -> &str {
        &self.account_id
    }

    fn store_account_id(&mut self, account_id: String) {
        self.account_id = account_id;
    }
}

/// Fetches the streamer subscription keys for one account.
///
/// Account-scoped, but the endpoint lives under `userprincipals/` rather
/// than `accounts/`; the account id travels as the `accountIds` query
/// parameter.
pub struct StreamerSubscriptionKeysGetter {
    credentials: Arc<Credentials>,
    account_id: String,
    url: String,
}

impl StreamerSubscriptionKeysGetter {
    /// Creates the getter, validating the account id and building the URL
    pub fn new(credentials: Arc<Credentials>, account_id: &str) -> Result<Self, AppError> {
        require_non_empty(account_id, "account_id")?;
        let mut getter = Self {
            credentials,
            account_id: account_id.to_string(),
            url: String::new(),
        };
        getter.refresh();
        Ok(getter)
    }
}

impl ApiGetter for StreamerSubscriptionKeysGetter {
    fn credentials(&self) -> &Arc<Credentials> {
        &self.credentials
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn rebuild(&self) -> String {
        format!(
            "{URL_BASE}userprincipals/streamersubscriptionkeys?accountIds={}",
            url_encode(&self.account_id)
        )
    }

    fn store_url(&mut self, url: String) {
        self.url = url;
    }
}

impl AccountGetter for StreamerSubscriptionKeysGetter {
    fn account_id(&self) -> &str {
        &self.account_id
    }

    fn store_account_id(&mut self, account_id: String) {
        self.account_id = account_id;
    }
}

/// Fetches transactions for one account, filtered by category, symbol and
/// an optional date range.
///
/// URL shape:
/// `accounts/{account_id}/transactions?type=T[&symbol=S][&startDate=D][&endDate=D]`.
/// The `type` parameter is always present; the rest appear only when
/// non-empty, in that fixed order. Dates are optional here, unlike the
/// mandatory window on [`OrdersGetter`]; the upstream endpoints differ.
pub struct TransactionHistoryGetter {
    credentials: Arc<Credentials>,
    account_id: String,
    transaction_type: TransactionType,
    symbol: String,
    start_date: String,
    end_date: String,
    url: String,
}

impl TransactionHistoryGetter {
    /// Creates the getter.
    ///
    /// `symbol` may be empty and is stored upper-cased. `start_date` and
    /// `end_date` may be empty; non-empty values must be valid ISO-8601 or
    /// the constructor fails naming the offending value.
    pub fn new(
        credentials: Arc<Credentials>,
        account_id: &str,
        transaction_type: TransactionType,
        symbol: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<Self, AppError> {
        require_non_empty(account_id, "account_id")?;
        require_valid_date(start_date)?;
        require_valid_date(end_date)?;
        let mut getter = Self {
            credentials,
            account_id: account_id.to_string(),
            transaction_type,
            symbol: symbol.to_uppercase(),
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
            url: String::new(),
        };
        getter.refresh();
        Ok(getter)
    }

    /// Current transaction category filter
    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    /// Current symbol filter, upper-cased; empty means no filter
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Current start of the date range; empty means unbounded
    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    /// Current end of the date range; empty means unbounded
    pub fn end_date(&self) -> &str {
        &self.end_date
    }

    /// Replaces the category filter and rebuilds the URL
    pub fn set_transaction_type(&mut self, transaction_type: TransactionType) {
        self.transaction_type = transaction_type;
        self.refresh();
    }

    /// Replaces the symbol filter (stored upper-cased) and rebuilds the URL
    pub fn set_symbol(&mut self, symbol: &str) {
        self.symbol = symbol.to_uppercase();
        self.refresh();
    }

    /// Replaces the range start; a non-empty value must be valid ISO-8601
    pub fn set_start_date(&mut self, start_date: &str) -> Result<(), AppError> {
        require_valid_date(start_date)?;
        self.start_date = start_date.to_string();
        self.refresh();
        Ok(())
    }

    /// Replaces the range end; a non-empty value must be valid ISO-8601
    pub fn set_end_date(&mut self, end_date: &str) -> Result<(), AppError> {
        require_valid_date(end_date)?;
        self.end_date = end_date.to_string();
        self.refresh();
        Ok(())
    }
}

impl ApiGetter for TransactionHistoryGetter {
    fn credentials(&self) -> &Arc<Credentials> {
        &self.credentials
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn rebuild(&self) -> String {
        let mut params = vec![("type", self.transaction_type.to_string())];
        if !self.symbol.is_empty() {
            params.push(("symbol", self.symbol.clone()));
        }
        if !self.start_date.is_empty() {
            params.push(("startDate", self.start_date.clone()));
        }
        if !self.end_date.is_empty() {
            params.push(("endDate", self.end_date.clone()));
        }
        format!(
            "{URL_ACCOUNTS}{}/transactions?{}",
            url_encode(&self.account_id),
            build_encoded_query_str(&params)
        )
    }

    fn store_url(&mut self, url: String) {
        self.url = url;
    }
}

impl AccountGetter for TransactionHistoryGetter {
    fn account_id(&self) -> &str {
        &self.account_id
    }

    fn store_account_id(&mut self, account_id: String) {
        self.account_id = account_id;
    }
}

/// Fetches a single transaction by id.
///
/// URL shape: `accounts/{account_id}/transactions/{transaction_id}`.
pub struct IndividualTransactionHistoryGetter {
    credentials: Arc<Credentials>,
    account_id: String,
    transaction_id: String,
    url: String,
}

impl IndividualTransactionHistoryGetter {
    /// Creates the getter; both ids must be non-empty
    pub fn new(
        credentials: Arc<Credentials>,
        account_id: &str,
        transaction_id: &str,
    ) -> Result<Self, AppError> {
        require_non_empty(account_id, "account_id")?;
        require_non_empty(transaction_id, "transaction_id")?;
        let mut getter = Self {
            credentials,
            account_id: account_id.to_string(),
            transaction_id: transaction_id.to_string(),
            url: String::new(),
        };
        getter.refresh();
        Ok(getter)
    }

    /// The transaction being fetched
    pub fn transaction_id(&self) -> &str {
        &self.transaction_id
    }

    /// Replaces the transaction id, rejecting empty values
    pub fn set_transaction_id(&mut self, transaction_id: &str) -> Result<(), AppError> {
        require_non_empty(transaction_id, "transaction_id")?;
        self.transaction_id = transaction_id.to_string();
        self.refresh();
        Ok(())
    }
}

impl ApiGetter for IndividualTransactionHistoryGetter {
    fn credentials(&self) -> &Arc<Credentials> {
        &self.credentials
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn rebuild(&self) -> String {
        format!(
            "{URL_ACCOUNTS}{}/transactions/{}",
            url_encode(&self.account_id),
            url_encode(&self.transaction_id)
        )
    }

    fn store_url(&mut self, url: String) {
        self.url = url;
    }
}

impl AccountGetter for IndividualTransactionHistoryGetter {
    fn account_id(&self) -> &str {
        &self.account_id
    }

    fn store_account_id(&mut self, account_id: String) {
        self.account_id = account_id;
    }
}

/// Fetches a single order by id.
///
/// URL shape: `accounts/{account_id}/orders/{order_id}`.
pub struct OrderGetter {
    credentials: Arc<Credentials>,
    account_id: String,
    order_id: String,
    url: String,
}

impl OrderGetter {
    /// Creates the getter; both ids must be non-empty
    pub fn new(
        credentials: Arc<Credentials>,
        account_id: &str,
        order_id: &str,
    ) -> Result<Self, AppError> {
        require_non_empty(account_id, "account_id")?;
        require_non_empty(order_id, "order_id")?;
        let mut getter = Self {
            credentials,
            account_id: account_id.to_string(),
            order_id: order_id.to_string(),
            url: String::new(),
        };
        getter.refresh();
        Ok(getter)
    }

    /// The order being fetched
    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    /// Replaces the order id, rejecting empty values
    pub fn set_order_id(&mut self, order_id: &str) -> Result<(), AppError> {
        require_non_empty(order_id, "order_id")?;
        self.order_id = order_id.to_string();
        self.refresh();
        Ok(())
    }
}

impl ApiGetter for OrderGetter {
    fn credentials(&self) -> &Arc<Credentials> {
        &self.credentials
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn rebuild(&self) -> String {
        format!(
            "{URL_ACCOUNTS}{}/orders/{}",
            url_encode(&self.account_id),
            url_encode(&self.order_id)
        )
    }

    fn store_url(&mut self, url: String) {
        self.url = url;
    }
}

impl AccountGetter for OrderGetter {
    fn account_id(&self) -> &str {
        &self.account_id
    }

    fn store_account_id(&mut self, account_id: String) {
        self.account_id = account_id;
    }
}

/// Fetches orders for one account over a mandatory entered-time window.
///
/// URL shape:
/// `accounts/{account_id}/orders?maxResults=N&fromEnteredTime=F&toEnteredTime=T&status=S`.
/// All four query parameters are always present.
pub struct OrdersGetter {
    credentials: Arc<Credentials>,
    account_id: String,
    nmax_results: u32,
    from_entered_time: String,
    to_entered_time: String,
    order_status_type: OrderStatusType,
    url: String,
}

impl OrdersGetter {
    /// Creates the getter.
    ///
    /// `nmax_results` must be at least 1. Both entered-time bounds are
    /// required and must be valid ISO-8601 date/times.
    pub fn new(
        credentials: Arc<Credentials>,
        account_id: &str,
        nmax_results: u32,
        from_entered_time: &str,
        to_entered_time: &str,
        order_status_type: OrderStatusType,
    ) -> Result<Self, AppError> {
        require_non_empty(account_id, "account_id")?;
        if nmax_results < 1 {
            return Err(AppError::invalid_value("nmax_results < 1"));
        }
        require_valid_datetime(from_entered_time)?;
        require_valid_datetime(to_entered_time)?;
        let mut getter = Self {
            credentials,
            account_id: account_id.to_string(),
            nmax_results,
            from_entered_time: from_entered_time.to_string(),
            to_entered_time: to_entered_time.to_string(),
            order_status_type,
            url: String::new(),
        };
        getter.refresh();
        Ok(getter)
    }

    /// Maximum number of orders to return
    pub fn nmax_results(&self) -> u32 {
        self.nmax_results
    }

    /// Start of the entered-time window
    pub fn from_entered_time(&self) -> &str {
        &self.from_entered_time
    }

    /// End of the entered-time window
    pub fn to_entered_time(&self) -> &str {
        &self.to_entered_time
    }

    /// Current status filter
    pub fn order_status_type(&self) -> OrderStatusType {
        self.order_status_type
    }

    /// Replaces the result cap; must be at least 1
    pub fn set_nmax_results(&mut self, nmax_results: u32) -> Result<(), AppError> {
        if nmax_results < 1 {
            return Err(AppError::invalid_value("nmax_results < 1"));
        }
        self.nmax_results = nmax_results;
        self.refresh();
        Ok(())
    }

    /// Replaces the window start; must be a valid ISO-8601 date/time
    pub fn set_from_entered_time(&mut self, from_entered_time: &str) -> Result<(), AppError> {
        require_valid_datetime(from_entered_time)?;
        self.from_entered_time = from_entered_time.to_string();
        self.refresh();
        Ok(())
    }

    /// Replaces the window end; must be a valid ISO-8601 date/time
    pub fn set_to_entered_time(&mut self, to_entered_time: &str) -> Result<(), AppError> {
        require_valid_datetime(to_entered_time)?;
        self.to_entered_time = to_entered_time.to_string();
        self.refresh();
        Ok(())
    }

    /// Replaces the status filter and rebuilds the URL
    pub fn set_order_status_type(&mut self, order_status_type: OrderStatusType) {
        self.order_status_type = order_status_type;
        self.refresh();
    }
}

impl ApiGetter for OrdersGetter {
    fn credentials(&self) -> &Arc<Credentials> {
        &self.credentials
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn rebuild(&self) -> String {
        let params = vec![
            ("maxResults", self.nmax_results.to_string()),
            ("fromEnteredTime", self.from_entered_time.clone()),
            ("toEnteredTime", self.to_entered_time.clone()),
            ("status", self.order_status_type.to_string()),
        ];
        format!(
            "{URL_ACCOUNTS}{}/orders?{}",
            url_encode(&self.account_id),
            build_encoded_query_str(&params)
        )
    }

    fn store_url(&mut self, url: String) {
        self.url = url;
    }
}

impl AccountGetter for OrdersGetter {
    fn account_id(&self) -> &str {
        &self.account_id
    }

    fn store_account_id(&mut self, account_id: String) {
        self.account_id = account_id;
    }
}
