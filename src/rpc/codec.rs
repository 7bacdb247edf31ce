//! Wire codec
//!
//! Structured bodies cross the process boundary as binary messages armored
//! in base64 text. Both directions validate the schema name against the
//! fixed registry first; malformed armor or a payload that does not match
//! the schema fails the call. There is no partial decoding.

use crate::error::Error;
use crate::rpc::schema;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Encode a structured body against a named schema into a transport-safe
/// text message.
pub fn encode<B: Serialize>(schema_name: &str, body: &B) -> Result<String, Error> {
    if !schema::is_registered(schema_name) {
        return Err(Error::UnknownSchema(schema_name.to_string()));
    }

    let raw = bincode::serialize(body).map_err(|e| Error::Encode(e.to_string()))?;
    Ok(base64::encode(raw))
}

/// Decode a transport-safe text message against a named schema back into a
/// structured value.
pub fn decode<T: DeserializeOwned>(schema_name: &str, message: &str) -> Result<T, Error> {
    if !schema::is_registered(schema_name) {
        return Err(Error::UnknownSchema(schema_name.to_string()));
    }

    let raw = base64::decode(message).map_err(|e| Error::Decode(e.to_string()))?;
    bincode::deserialize(&raw).map_err(|e| Error::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc::schema::{OpenChannelRequest, WalletBalanceResponse};

    #[test]
    fn test_roundtrip_preserves_fields() {
        let request = OpenChannelRequest {
            node_pubkey_string: "abc".into(),
            local_funding_amount: 5000,
            push_sat: Some(250),
        };

        let message = encode("OpenChannelRequest", &request).unwrap();
        let decoded: OpenChannelRequest = decode("OpenChannelRequest", &message).unwrap();
        assert_eq!(decoded, request);
    }

    #[test]
    fn test_roundtrip_optional_fields() {
        let response = WalletBalanceResponse {
            total_balance: None,
            confirmed_balance: Some(100),
            unconfirmed_balance: None,
        };

        let message = encode("WalletBalanceResponse", &response).unwrap();
        let decoded: WalletBalanceResponse = decode("WalletBalanceResponse", &message).unwrap();
        assert_eq!(decoded, response);
    }

    #[test]
    fn test_unknown_schema_fails() {
        let err = encode("InvoiceSubscription", &OpenChannelRequest::default()).unwrap_err();
        assert_eq!(err, Error::UnknownSchema("InvoiceSubscription".to_string()));

        let err = decode::<WalletBalanceResponse>("NoSuchSchema", "AAAA").unwrap_err();
        assert_eq!(err, Error::UnknownSchema("NoSuchSchema".to_string()));
    }

    #[test]
    fn test_malformed_armor_fails() {
        let err = decode::<WalletBalanceResponse>("WalletBalanceResponse", "!not-base64!");
        assert!(matches!(err, Err(Error::Decode(_))));
    }

    #[test]
    fn test_malformed_payload_fails() {
        // Valid base64, but the bytes are not a WalletBalanceResponse
        let armor = base64::encode([0xffu8; 3]);
        let err = decode::<WalletBalanceResponse>("WalletBalanceResponse", &armor);
        assert!(matches!(err, Err(Error::Decode(_))));
    }
}
