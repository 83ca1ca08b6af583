use crate::common::credentials;
use tda_client::prelude::*;

const ACCOUNTS: &str = "https://api.tdameritrade.com/v1/accounts/";

#[test]
fn test_account_info_no_fields() {
    let getter = AccountInfoGetter::new(credentials(), "123456789", false, false).unwrap();
    assert_eq!(getter.url(), format!("{ACCOUNTS}123456789"));
    assert!(!getter.returns_positions());
    assert!(!getter.returns_orders());
}

#[test]
fn test_account_info_positions_only() {
    let getter = AccountInfoGetter::new(credentials(), "123456789", true, false).unwrap();
    assert_eq!(getter.url(), format!("{ACCOUNTS}123456789?fields=positions"));
}

#[test]
fn test_account_info_orders_only() {
    let getter = AccountInfoGetter::new(credentials(), "123456789", false, true).unwrap();
    assert_eq!(getter.url(), format!("{ACCOUNTS}123456789?fields=orders"));
}

#[test]
fn test_account_info_both_fields() {
    let getter = AccountInfoGetter::new(credentials(), "123456789", true, true).unwrap();
    assert_eq!(
        getter.url(),
        format!("{ACCOUNTS}123456789?fields=positions,orders")
    );
}

#[test]
fn test_account_info_setters_rebuild() {
    let mut getter = AccountInfoGetter::new(credentials(), "123456789", false, false).unwrap();

    getter.return_positions(true);
    assert!(getter.returns_positions());
    assert_eq!(getter.url(), format!("{ACCOUNTS}123456789?fields=positions"));

    getter.return_orders(true);
    assert_eq!(
        getter.url(),
        format!("{ACCOUNTS}123456789?fields=positions,orders")
    );

    getter.return_positions(false);
    assert_eq!(getter.url(), format!("{ACCOUNTS}123456789?fields=orders"));
}

#[test]
fn test_account_info_empty_account_id_fails() {
    assert!(AccountInfoGetter::new(credentials(), "", true, true).is_err());
}

#[test]
fn test_account_id_is_percent_encoded() {
    let getter = AccountInfoGetter::new(credentials(), "AB C/1", false, false).unwrap();
    assert_eq!(getter.url(), format!("{ACCOUNTS}AB%20C%2F1"));
}

#[test]
fn test_preferences_url() {
    let getter = PreferencesGetter::new(credentials(), "123456789").unwrap();
    assert_eq!(getter.url(), format!("{ACCOUNTS}123456789/preferences"));
}

#[test]
fn test_preferences_empty_account_id_fails() {
    assert!(PreferencesGetter::new(credentials(), "").is_err());
}

#[test]
fn test_streamer_subscription_keys_url() {
    let getter = StreamerSubscriptionKeysGetter::new(credentials(), "123456789").unwrap();
    assert_eq!(
        getter.url(),
        "https://api.tdameritrade.com/v1/userprincipals/streamersubscriptionkeys?accountIds=123456789"
    );
}

#[test]
fn test_streamer_subscription_keys_set_account_id() {
    let mut getter = StreamerSubscriptionKeysGetter::new(credentials(), "111").unwrap();
    getter.set_account_id("222").unwrap();
    assert_eq!(
        getter.url(),
        "https://api.tdameritrade.com/v1/userprincipals/streamersubscriptionkeys?accountIds=222"
    );
}

#[test]
fn test_individual_transaction_url() {
    let getter =
        IndividualTransactionHistoryGetter::new(credentials(), "123456789", "TX-1001").unwrap();
    assert_eq!(
        getter.url(),
        format!("{ACCOUNTS}123456789/transactions/TX-1001")
    );
    assert_eq!(getter.transaction_id(), "TX-1001");
}

#[test]
fn test_individual_transaction_empty_id_fails() {
    assert!(IndividualTransactionHistoryGetter::new(credentials(), "123456789", "").is_err());

    let mut getter =
        IndividualTransactionHistoryGetter::new(credentials(), "123456789", "TX-1001").unwrap();
    let before = getter.url().to_string();
    assert!(getter.set_transaction_id("").is_err());
    assert_eq!(getter.transaction_id(), "TX-1001");
    assert_eq!(getter.url(), before);
}

#[test]
fn test_order_getter_url() {
    let getter = OrderGetter::new(credentials(), "123456789", "ORD-42").unwrap();
    assert_eq!(getter.url(), format!("{ACCOUNTS}123456789/orders/ORD-42"));
}

#[test]
fn test_order_getter_set_order_id() {
    let mut getter = OrderGetter::new(credentials(), "123456789", "ORD-42").unwrap();
    getter.set_order_id("ORD-43").unwrap();
    assert_eq!(getter.order_id(), "ORD-43");
    assert_eq!(getter.url(), format!("{ACCOUNTS}123456789/orders/ORD-43"));
}

#[test]
fn test_order_getter_empty_ids_fail() {
    assert!(OrderGetter::new(credentials(), "", "ORD-42").is_err());
    assert!(OrderGetter::new(credentials(), "123456789", "").is_err());

    let mut getter = OrderGetter::new(credentials(), "123456789", "ORD-42").unwrap();
    let before = getter.url().to_string();
    assert!(getter.set_order_id("").is_err());
    assert_eq!(getter.order_id(), "ORD-42");
    assert_eq!(getter.url(), before);
}

#[test]
fn test_setter_idempotence() {
    let mut getter = OrderGetter::new(credentials(), "123456789", "ORD-42").unwrap();
    let before = getter.url().to_string();
    getter.set_order_id("ORD-42").unwrap();
    assert_eq!(getter.url(), before);
}

#[test]
fn test_flag_setter_idempotence() {
    let mut getter = AccountInfoGetter::new(credentials(), "123456789", true, false).unwrap();
    let before = getter.url().to_string();
    getter.return_positions(true);
    getter.return_orders(false);
    assert_eq!(getter.url(), before);
}
