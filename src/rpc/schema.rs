//! Wire message schemas
//!
//! Message definitions for the daemon's binary command channel, mirroring
//! the `lnrpc` message set the daemon speaks. The registry is fixed:
//! encode/decode refuse any schema name not listed in [`is_registered`].
//!
//! Response-side fields the daemon may omit are `Option`; the facade
//! applies its own defaulting when reshaping results. Streaming-only
//! schemas (subscriptions, payment tracking) are deliberately absent:
//! push delivery is not carried over the command channel.

use serde::{Deserialize, Serialize};

/// Whether a schema name is part of the wire registry.
pub fn is_registered(name: &str) -> bool {
    matches!(
        name,
        "GetInfoRequest"
            | "GetInfoResponse"
            | "NewAddressRequest"
            | "NewAddressResponse"
            | "WalletBalanceRequest"
            | "WalletBalanceResponse"
            | "ChannelBalanceRequest"
            | "ChannelBalanceResponse"
            | "SendCoinsRequest"
            | "SendCoinsResponse"
            | "ConnectPeerRequest"
            | "ConnectPeerResponse"
            | "ListPeersRequest"
            | "ListPeersResponse"
            | "ListChannelsRequest"
            | "ListChannelsResponse"
            | "OpenChannelRequest"
            | "ChannelPoint"
            | "Invoice"
            | "AddInvoiceResponse"
            | "ListInvoiceRequest"
            | "ListInvoiceResponse"
            | "PayReqString"
            | "PayReq"
            | "SendRequest"
            | "SendResponse"
            | "StopRequest"
            | "StopResponse"
    )
}

// ----------------------------------------------------------------------
// Node info
// ----------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GetInfoRequest {}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GetInfoResponse {
    pub identity_pubkey: Option<String>,
    pub alias: Option<String>,
    pub num_peers: Option<u32>,
    pub num_active_channels: Option<u32>,
    pub num_pending_channels: Option<u32>,
    pub block_height: Option<u32>,
    pub block_hash: Option<String>,
    pub synced_to_chain: Option<bool>,
    pub chains: Vec<String>,
}

// ----------------------------------------------------------------------
// Addresses and on-chain funds
// ----------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewAddressRequest {
    #[serde(rename = "type")]
    pub address_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewAddressResponse {
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct WalletBalanceRequest {}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WalletBalanceResponse {
    pub total_balance: Option<i64>,
    pub confirmed_balance: Option<i64>,
    pub unconfirmed_balance: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SendCoinsRequest {
    pub addr: String,
    pub amount: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SendCoinsResponse {
    pub txid: Option<String>,
}

// ----------------------------------------------------------------------
// Peers
// ----------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LightningAddress {
    pub pubkey: String,
    pub host: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConnectPeerRequest {
    pub addr: LightningAddress,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ConnectPeerResponse {}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ListPeersRequest {}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Peer {
    pub pub_key: Option<String>,
    pub address: Option<String>,
    pub inbound: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListPeersResponse {
    pub peers: Vec<Peer>,
}

// ----------------------------------------------------------------------
// Channels
// ----------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ChannelBalanceRequest {}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChannelBalanceResponse {
    pub balance: Option<i64>,
    pub pending_open_balance: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListChannelsRequest {}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub active: Option<bool>,
    pub remote_pubkey: Option<String>,
    pub channel_point: Option<String>,
    pub capacity: Option<i64>,
    pub local_balance: Option<i64>,
    pub remote_balance: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListChannelsResponse {
    pub channels: Vec<Channel>,
}

/// Request for a synchronous channel open.
///
/// `push_sat` stays `None` when nothing is pushed to the remote side; the
/// field is omitted from the wire message rather than sent as zero.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OpenChannelRequest {
    pub node_pubkey_string: String,
    pub local_funding_amount: i64,
    pub push_sat: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChannelPoint {
    pub funding_txid_str: Option<String>,
    pub output_index: Option<u32>,
}

// ----------------------------------------------------------------------
// Invoices and payments
// ----------------------------------------------------------------------

/// Invoice message: doubles as the add-invoice request and the invoice
/// listing element, matching the daemon's message set.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub memo: String,
    pub value: i64,
    pub payment_request: Option<String>,
    pub r_hash: Option<String>,
    pub settled: Option<bool>,
    pub creation_date: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddInvoiceResponse {
    pub r_hash: Option<String>,
    pub payment_request: Option<String>,
    pub add_index: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListInvoiceRequest {
    pub num_max_invoices: Option<u64>,
    pub pending_only: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListInvoiceResponse {
    pub invoices: Vec<Invoice>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PayReqString {
    pub pay_req: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PayReq {
    pub destination: Option<String>,
    pub payment_hash: Option<String>,
    pub num_satoshis: Option<i64>,
    pub timestamp: Option<i64>,
    pub expiry: Option<i64>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SendRequest {
    pub payment_request: String,
    pub amt: Option<i64>,
    pub fee_limit_sat: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SendResponse {
    pub payment_error: Option<String>,
    pub payment_preimage: Option<String>,
    pub payment_hash: Option<String>,
}

// ----------------------------------------------------------------------
// Daemon control
// ----------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StopRequest {}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StopResponse {}
