//! Operation-name normalization and schema binding
//!
//! Logical operation names arrive in loose formats (`wallet_balance`,
//! `connectPeer`, `open-channel-sync`). They normalize to a canonical
//! capitalized form before resolution. Most operations follow the
//! `<Name>Request` / `<Name>Response` naming convention; the exceptions
//! live in two independent tables below. An operation may override one
//! side, both, or neither.

/// Normalize a loose operation name: split on `-` and `_`, capitalize each
/// segment's first character, join with `join` (empty for schema lookups).
pub fn to_caps(value: &str, join: &str) -> String {
    value
        .split(['-', '_'])
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(join)
}

/// Resolve the request schema name for a canonical operation name.
pub fn request_schema(method: &str) -> String {
    match method {
        "AddInvoice" => "Invoice".to_string(),
        "DecodePayReq" => "PayReqString".to_string(),
        "ListInvoices" => "ListInvoiceRequest".to_string(),
        "SendPayment" => "SendRequest".to_string(),
        "SendPaymentSync" => "SendRequest".to_string(),
        "SendPaymentV2" => "SendRequest".to_string(),
        "SubscribeTransactions" => "GetTransactionsRequest".to_string(),
        "SubscribeInvoices" => "InvoiceSubscription".to_string(),
        "SubscribeChannelBackups" => "ChannelBackupSubscription".to_string(),
        "StopDaemon" => "StopRequest".to_string(),
        "TrackPayment" => "TrackPaymentRequest".to_string(),
        "OpenChannelSync" => "OpenChannelRequest".to_string(),
        _ => format!("{}Request", method),
    }
}

/// Resolve the response schema name for a canonical operation name.
pub fn response_schema(method: &str) -> String {
    match method {
        "DecodePayReq" => "PayReq".to_string(),
        "GetTransactions" => "TransactionDetails".to_string(),
        "ListInvoices" => "ListInvoiceResponse".to_string(),
        "SendPayment" => "SendResponse".to_string(),
        "SendPaymentSync" => "SendResponse".to_string(),
        "SendPaymentV2" => "SendResponse".to_string(),
        "OpenChannel" => "OpenStatusUpdate".to_string(),
        "CloseChannel" => "CloseStatusUpdate".to_string(),
        "SubscribeTransactions" => "Transaction".to_string(),
        "SubscribeInvoices" => "Invoice".to_string(),
        "SubscribeChannelBackups" => "ChanBackupSnapshot".to_string(),
        "StopDaemon" => "StopResponse".to_string(),
        "TrackPayment" => "TrackPaymentResponse".to_string(),
        "OpenChannelSync" => "ChannelPoint".to_string(),
        _ => format!("{}Response", method),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_caps_underscore() {
        assert_eq!(to_caps("wallet_balance", ""), "WalletBalance");
    }

    #[test]
    fn test_to_caps_dash_and_display_join() {
        assert_eq!(to_caps("open-channel-sync", ""), "OpenChannelSync");
        assert_eq!(to_caps("open-channel-sync", " "), "Open Channel Sync");
    }

    #[test]
    fn test_to_caps_preserves_inner_capitals() {
        assert_eq!(to_caps("newAddress", ""), "NewAddress");
        assert_eq!(to_caps("DecodePayReq", ""), "DecodePayReq");
    }

    #[test]
    fn test_default_suffix_rule() {
        assert_eq!(request_schema("WalletBalance"), "WalletBalanceRequest");
        assert_eq!(response_schema("WalletBalance"), "WalletBalanceResponse");
    }

    #[test]
    fn test_request_overrides_never_fall_back() {
        assert_eq!(request_schema("AddInvoice"), "Invoice");
        assert_eq!(request_schema("DecodePayReq"), "PayReqString");
        assert_eq!(request_schema("SendPaymentSync"), "SendRequest");
        assert_eq!(request_schema("OpenChannelSync"), "OpenChannelRequest");
    }

    #[test]
    fn test_response_overrides_never_fall_back() {
        assert_eq!(response_schema("DecodePayReq"), "PayReq");
        assert_eq!(response_schema("OpenChannelSync"), "ChannelPoint");
        assert_eq!(response_schema("SendPaymentSync"), "SendResponse");
    }

    #[test]
    fn test_tables_are_independent() {
        // AddInvoice overrides only the request side
        assert_eq!(request_schema("AddInvoice"), "Invoice");
        assert_eq!(response_schema("AddInvoice"), "AddInvoiceResponse");

        // OpenChannel overrides only the response side
        assert_eq!(request_schema("OpenChannel"), "OpenChannelRequest");
        assert_eq!(response_schema("OpenChannel"), "OpenStatusUpdate");
    }
}
