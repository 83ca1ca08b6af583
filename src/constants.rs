/// Base URL for the TD Ameritrade REST API (v1)
pub const URL_BASE: &str = "https://api.tdameritrade.com/v1/";
/// Root for every account-scoped endpoint: `URL_BASE` + `accounts/`
pub const URL_ACCOUNTS: &str = "https://api.tdameritrade.com/v1/accounts/";
/// User agent string used in HTTP requests to identify this client to the API
pub const USER_AGENT: &str = "tda-client/0.1.0";
/// Default timeout in seconds for REST API requests
pub const DEFAULT_REST_TIMEOUT: u64 = 30;
