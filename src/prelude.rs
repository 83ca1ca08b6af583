//! # TDA Client Prelude
//!
//! This module provides a convenient way to import the most commonly used
//! types and traits from the library. By importing this prelude you get
//! access to all the essential components needed for most TD Ameritrade API
//! interactions.
//!
//! ## Usage
//!
//! ```rust
//! use tda_client::prelude::*;
//!
//! let config = Config::new();
//! let credentials = config.shared_credentials();
//! let getter = UserPrincipalsGetter::new(credentials, true, true, false, false);
//! assert!(getter.url().starts_with("https://"));
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the TD Ameritrade API client
pub use crate::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, TdaResult};

// ============================================================================
// REQUEST BUILDERS
// ============================================================================

/// Capability traits implemented by every getter
pub use crate::getters::{AccountGetter, ApiGetter};

/// The concrete request builders
pub use crate::getters::{
    AccountInfoGetter, IndividualTransactionHistoryGetter, OrderGetter, OrdersGetter,
    PreferencesGetter, StreamerSubscriptionKeysGetter, TransactionHistoryGetter,
    UserPrincipalsGetter, get_user_principals_for_streaming,
};

// ============================================================================
// WIRE-FORMAT ENUMS
// ============================================================================

/// Enums rendered into query parameters
pub use crate::model::{OrderStatusType, TransactionType};

// ============================================================================
// TRANSPORT
// ============================================================================

/// HTTP transport trait and default implementation
pub use crate::transport::{TdHttpClient, TdHttpClientImpl};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logger setup helper
pub use crate::utils::logger::setup_logger;
