//! High-level wallet operations
//!
//! One Result-returning operation per wallet/channel/payment capability,
//! each following the same template: apply its readiness policy, dispatch
//! a fixed operation name with a typed body, reshape the decoded reply.
//!
//! Readiness policies are deliberately asymmetric: read-only queries
//! (`new_address`, `wallet_balance`) fail closed when the wallet is not
//! ready, while mutating and network operations call `ensure_ready` first
//! (a best-effort daemon start whose outcome is ignored) and then proceed
//! regardless.

use crate::error::Error;
use crate::node::config::Network;
use crate::node::manager::{NodeManager, WalletInit};
use crate::node::state::NodeStatus;
use crate::rpc::lnrpc_request;
use crate::rpc::schema::{
    AddInvoiceResponse, Channel, ChannelBalanceRequest, ChannelBalanceResponse, ChannelPoint,
    ConnectPeerRequest, ConnectPeerResponse, GetInfoRequest, GetInfoResponse, Invoice,
    LightningAddress, ListChannelsRequest, ListChannelsResponse, ListPeersRequest,
    ListPeersResponse, NewAddressRequest, NewAddressResponse, OpenChannelRequest, PayReq,
    PayReqString, Peer, SendCoinsRequest, SendCoinsResponse, SendRequest, SendResponse,
    WalletBalanceRequest, WalletBalanceResponse,
};
use serde::Serialize;
use std::collections::BTreeMap;

/// On-chain balance with missing fields defaulted to zero.
#[derive(Debug, Clone, Copy, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WalletBalance {
    pub total_balance: i64,
    pub confirmed_balance: i64,
    pub unconfirmed_balance: i64,
}

/// Channel balance with missing fields defaulted to zero.
#[derive(Debug, Clone, Copy, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChannelBalance {
    pub balance: i64,
    pub pending_open_balance: i64,
}

/// Public facade over the embedded LND daemon.
pub struct LndWallet {
    manager: NodeManager,
}

impl LndWallet {
    pub fn new(manager: NodeManager) -> Self {
        Self { manager }
    }

    /// The lifecycle controller backing this facade
    pub fn manager(&self) -> &NodeManager {
        &self.manager
    }

    /// Snapshot of the lifecycle flags
    pub fn status(&self) -> NodeStatus {
        self.manager.state().status()
    }

    // ========================================================================
    // Lifecycle operations (delegated to the manager)
    // ========================================================================

    /// Start the daemon with conf overrides; fails if already started
    pub async fn start(&self, overrides: &BTreeMap<String, String>) -> Result<(), Error> {
        self.manager.start(overrides).await
    }

    /// Generate a wallet seed phrase
    pub async fn gen_seed(&self) -> Result<String, Error> {
        self.manager.gen_seed().await
    }

    /// Generate a random wallet password
    pub async fn gen_password(&self) -> Result<String, Error> {
        self.manager.gen_password().await
    }

    /// Persist a seed phrase to the credential store
    pub async fn store_seed_to_keychain(&self, seed: &str) -> Result<(), Error> {
        self.manager.store_seed_to_keychain(seed).await
    }

    /// Read the stored seed phrase
    pub async fn get_seed_from_keychain(&self) -> Result<Option<String>, Error> {
        self.manager.get_seed_from_keychain().await
    }

    /// Persist the wallet password to the credential store
    pub async fn store_password_to_keychain(&self, password: &str) -> Result<(), Error> {
        self.manager.store_password_to_keychain(password).await
    }

    /// Read the stored wallet password
    pub async fn get_password_from_keychain(&self) -> Result<Option<String>, Error> {
        self.manager.get_password_from_keychain().await
    }

    /// Initialize a wallet with optional seed and password
    pub async fn init_wallet(
        &self,
        seed: Option<String>,
        password: Option<String>,
    ) -> Result<WalletInit, Error> {
        self.manager.init_wallet(seed, password).await
    }

    /// Whether a wallet exists for the network
    pub async fn wallet_exists(&self, network: Option<Network>) -> Result<bool, Error> {
        self.manager.wallet_exists(network).await
    }

    /// Unlock an existing wallet with the stored password
    pub async fn unlock_wallet(&self) -> Result<String, Error> {
        self.manager.unlock_wallet().await
    }

    // ========================================================================
    // Readiness policies
    // ========================================================================

    fn require_ready(&self) -> Result<(), Error> {
        if self.manager.state().wallet_ready() {
            Ok(())
        } else {
            Err(Error::NotReady)
        }
    }

    /// Best-effort readiness repair: when the wallet is not ready, attempt
    /// a daemon start and proceed regardless of its outcome.
    async fn ensure_ready(&self) {
        if !self.manager.state().wallet_ready() {
            if let Err(e) = self.manager.start(&BTreeMap::new()).await {
                log::debug!("Best-effort start before operation failed: {}", e);
            }
        }
    }

    // ========================================================================
    // Wallet operations
    // ========================================================================

    /// Generate a new on-chain address for the wallet
    pub async fn new_address(&self) -> Result<String, Error> {
        self.require_ready()?;

        let response: NewAddressResponse = lnrpc_request(
            self.manager.daemon(),
            "newAddress",
            &NewAddressRequest {
                address_type: "p2pkh".to_string(),
            },
        )
        .await?;

        match response.address {
            Some(address) if !address.is_empty() => Ok(address),
            _ => Err(Error::Other("Unable to generate address.".to_string())),
        }
    }

    /// Fetch the on-chain wallet balance
    pub async fn wallet_balance(&self) -> Result<WalletBalance, Error> {
        self.require_ready()?;

        let response: WalletBalanceResponse = lnrpc_request(
            self.manager.daemon(),
            "WalletBalance",
            &WalletBalanceRequest::default(),
        )
        .await?;

        Ok(WalletBalance {
            total_balance: response.total_balance.unwrap_or(0),
            confirmed_balance: response.confirmed_balance.unwrap_or(0),
            unconfirmed_balance: response.unconfirmed_balance.unwrap_or(0),
        })
    }

    /// Send coins to an on-chain address
    pub async fn send_coins(&self, addr: &str, amount: i64) -> Result<SendCoinsResponse, Error> {
        self.ensure_ready().await;

        lnrpc_request(
            self.manager.daemon(),
            "SendCoins",
            &SendCoinsRequest {
                addr: addr.to_string(),
                amount,
            },
        )
        .await
    }

    /// Node information query
    pub async fn get_info(&self) -> Result<GetInfoResponse, Error> {
        lnrpc_request(self.manager.daemon(), "getInfo", &GetInfoRequest::default()).await
    }

    // ========================================================================
    // Peer operations
    // ========================================================================

    /// Connect to a remote peer
    pub async fn connect_peer(&self, pubkey: &str, host: &str) -> Result<String, Error> {
        self.ensure_ready().await;

        let _: ConnectPeerResponse = lnrpc_request(
            self.manager.daemon(),
            "connectPeer",
            &ConnectPeerRequest {
                addr: LightningAddress {
                    pubkey: pubkey.to_string(),
                    host: host.to_string(),
                },
            },
        )
        .await?;

        Ok(format!("Connected to {}@{}", pubkey, host))
    }

    /// List connected peers
    pub async fn list_peers(&self) -> Result<Vec<Peer>, Error> {
        self.ensure_ready().await;

        let response: ListPeersResponse = lnrpc_request(
            self.manager.daemon(),
            "listPeers",
            &ListPeersRequest::default(),
        )
        .await?;
        Ok(response.peers)
    }

    // ========================================================================
    // Channel operations
    // ========================================================================

    /// Open a channel to a peer.
    ///
    /// A zero `push_amount` omits the push field from the request entirely
    /// rather than sending zero.
    pub async fn open_channel(
        &self,
        pubkey: &str,
        local_amount: i64,
        push_amount: i64,
    ) -> Result<ChannelPoint, Error> {
        self.ensure_ready().await;

        let request = OpenChannelRequest {
            node_pubkey_string: pubkey.to_string(),
            local_funding_amount: local_amount,
            push_sat: if push_amount != 0 {
                Some(push_amount)
            } else {
                None
            },
        };

        lnrpc_request(self.manager.daemon(), "OpenChannelSync", &request).await
    }

    /// List open channels
    pub async fn list_channels(&self) -> Result<Vec<Channel>, Error> {
        self.ensure_ready().await;

        let response: ListChannelsResponse = lnrpc_request(
            self.manager.daemon(),
            "ListChannels",
            &ListChannelsRequest::default(),
        )
        .await?;
        Ok(response.channels)
    }

    /// Fetch the channel balance
    pub async fn channel_balance(&self) -> Result<ChannelBalance, Error> {
        self.ensure_ready().await;

        let response: ChannelBalanceResponse = lnrpc_request(
            self.manager.daemon(),
            "ChannelBalance",
            &ChannelBalanceRequest::default(),
        )
        .await?;

        Ok(ChannelBalance {
            balance: response.balance.unwrap_or(0),
            pending_open_balance: response.pending_open_balance.unwrap_or(0),
        })
    }

    /// Combined on-chain and channel balance as one descriptive string
    pub async fn all_balance(&self) -> Result<String, Error> {
        let channel_balance = self.channel_balance().await;
        let wallet_balance = self.wallet_balance().await;

        let on_chain = match wallet_balance {
            Ok(balance) => serde_json::to_string(&balance).unwrap_or_default(),
            Err(e) => e.to_string(),
        };
        let channel = match channel_balance {
            Ok(balance) => serde_json::to_string(&balance).unwrap_or_default(),
            Err(e) => e.to_string(),
        };

        Ok(format!(
            "OnChain Balance: {} \n\n Channel Balance: {}",
            on_chain, channel
        ))
    }

    // ========================================================================
    // Payment operations
    // ========================================================================

    /// Create an invoice and return its payment request
    pub async fn add_invoice(&self, amount: i64, memo: &str) -> Result<String, Error> {
        self.ensure_ready().await;

        let response: AddInvoiceResponse = lnrpc_request(
            self.manager.daemon(),
            "addInvoice",
            &Invoice {
                value: amount,
                memo: memo.to_string(),
                ..Default::default()
            },
        )
        .await?;

        match response.payment_request {
            Some(payment_request) if !payment_request.is_empty() => Ok(payment_request),
            _ => Err(Error::Other(
                "Invoice response carried no payment request.".to_string(),
            )),
        }
    }

    /// Decode a payment request produced by `add_invoice`
    pub async fn decode_pay_req(&self, pay_req: &str) -> Result<PayReq, Error> {
        self.ensure_ready().await;

        lnrpc_request(
            self.manager.daemon(),
            "DecodePayReq",
            &PayReqString {
                pay_req: pay_req.to_string(),
            },
        )
        .await
    }

    /// Pay a payment request
    pub async fn send_payment(&self, pay_req: &str) -> Result<SendResponse, Error> {
        self.ensure_ready().await;

        lnrpc_request(
            self.manager.daemon(),
            "SendPaymentSync",
            &SendRequest {
                payment_request: pay_req.to_string(),
                ..Default::default()
            },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keychain::MemoryKeychain;
    use crate::rpc::codec;
    use crate::test_utils::MockLnd;
    use std::sync::Arc;

    fn wallet() -> (Arc<MockLnd>, LndWallet) {
        let daemon = Arc::new(MockLnd::new());
        let manager = NodeManager::new(daemon.clone(), Arc::new(MemoryKeychain::new()));
        (daemon, LndWallet::new(manager))
    }

    fn ready_wallet() -> (Arc<MockLnd>, LndWallet) {
        let (daemon, wallet) = wallet();
        wallet.manager().state().set_wallet_ready(true);
        (daemon, wallet)
    }

    #[tokio::test]
    async fn test_new_address_fails_closed_when_not_ready() {
        let (daemon, wallet) = wallet();

        let err = wallet.new_address().await.unwrap_err();

        assert_eq!(err, Error::NotReady);
        assert!(daemon.commands().is_empty());
        assert_eq!(daemon.start_calls(), 0);
    }

    #[tokio::test]
    async fn test_wallet_balance_fails_closed_when_not_ready() {
        let (daemon, wallet) = wallet();
        assert_eq!(wallet.wallet_balance().await.unwrap_err(), Error::NotReady);
        assert!(daemon.commands().is_empty());
    }

    #[tokio::test]
    async fn test_wallet_balance_defaults_missing_fields_to_zero() {
        let (daemon, wallet) = ready_wallet();
        daemon.stage_reply(
            "WalletBalance",
            codec::encode(
                "WalletBalanceResponse",
                &WalletBalanceResponse {
                    total_balance: None,
                    confirmed_balance: Some(100),
                    unconfirmed_balance: None,
                },
            )
            .unwrap(),
        );

        let balance = wallet.wallet_balance().await.unwrap();

        assert_eq!(
            balance,
            WalletBalance {
                total_balance: 0,
                confirmed_balance: 100,
                unconfirmed_balance: 0,
            }
        );
    }

    #[tokio::test]
    async fn test_new_address_returns_address() {
        let (daemon, wallet) = ready_wallet();
        daemon.stage_reply(
            "NewAddress",
            codec::encode(
                "NewAddressResponse",
                &NewAddressResponse {
                    address: Some("bcrt1qxyz".to_string()),
                },
            )
            .unwrap(),
        );

        assert_eq!(wallet.new_address().await.unwrap(), "bcrt1qxyz");
        // The daemon saw the canonical method name
        assert_eq!(daemon.commands()[0].0, "NewAddress");
    }

    #[tokio::test]
    async fn test_new_address_without_address_in_reply() {
        let (daemon, wallet) = ready_wallet();
        daemon.stage_reply(
            "NewAddress",
            codec::encode("NewAddressResponse", &NewAddressResponse::default()).unwrap(),
        );

        let err = wallet.new_address().await.unwrap_err();
        assert_eq!(err, Error::Other("Unable to generate address.".to_string()));
    }

    #[tokio::test]
    async fn test_fail_open_operation_attempts_start() {
        let (daemon, wallet) = wallet();
        daemon.stage_reply(
            "ListPeers",
            codec::encode("ListPeersResponse", &ListPeersResponse::default()).unwrap(),
        );

        let peers = wallet.list_peers().await.unwrap();

        assert!(peers.is_empty());
        // Not ready, so a best-effort start preceded the dispatch
        assert_eq!(daemon.start_calls(), 1);
    }

    #[tokio::test]
    async fn test_fail_open_proceeds_when_start_fails() {
        let (daemon, wallet) = wallet();
        daemon.fail_start("no binary");
        daemon.stage_reply(
            "ListChannels",
            codec::encode("ListChannelsResponse", &ListChannelsResponse::default()).unwrap(),
        );

        // Start failed, the operation still went through
        assert!(wallet.list_channels().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_open_channel_omits_zero_push_amount() {
        let (daemon, wallet) = ready_wallet();
        daemon.stage_reply(
            "OpenChannelSync",
            codec::encode("ChannelPoint", &ChannelPoint::default()).unwrap(),
        );

        wallet.open_channel("abc", 5000, 0).await.unwrap();

        let (method, payload) = daemon.commands().pop().unwrap();
        assert_eq!(method, "OpenChannelSync");
        let request: OpenChannelRequest = codec::decode("OpenChannelRequest", &payload).unwrap();
        assert_eq!(request.node_pubkey_string, "abc");
        assert_eq!(request.local_funding_amount, 5000);
        assert_eq!(request.push_sat, None);
    }

    #[tokio::test]
    async fn test_open_channel_includes_nonzero_push_amount() {
        let (daemon, wallet) = ready_wallet();
        daemon.stage_reply(
            "OpenChannelSync",
            codec::encode("ChannelPoint", &ChannelPoint::default()).unwrap(),
        );

        wallet.open_channel("abc", 5000, 250).await.unwrap();

        let (_, payload) = daemon.commands().pop().unwrap();
        let request: OpenChannelRequest = codec::decode("OpenChannelRequest", &payload).unwrap();
        assert_eq!(request.push_sat, Some(250));
    }

    #[tokio::test]
    async fn test_connect_peer_formats_message() {
        let (daemon, wallet) = ready_wallet();
        daemon.stage_reply(
            "ConnectPeer",
            codec::encode("ConnectPeerResponse", &ConnectPeerResponse::default()).unwrap(),
        );

        let message = wallet.connect_peer("02abc", "10.0.0.1:9735").await.unwrap();
        assert_eq!(message, "Connected to 02abc@10.0.0.1:9735");
    }

    #[tokio::test]
    async fn test_add_invoice_returns_payment_request() {
        let (daemon, wallet) = ready_wallet();
        daemon.stage_reply(
            "AddInvoice",
            codec::encode(
                "AddInvoiceResponse",
                &AddInvoiceResponse {
                    payment_request: Some("lnbcrt1invoice".to_string()),
                    ..Default::default()
                },
            )
            .unwrap(),
        );

        let invoice = wallet.add_invoice(42, "coffee").await.unwrap();
        assert_eq!(invoice, "lnbcrt1invoice");

        // Request side used the Invoice schema with the typed body
        let (method, payload) = daemon.commands().pop().unwrap();
        assert_eq!(method, "AddInvoice");
        let request: Invoice = codec::decode("Invoice", &payload).unwrap();
        assert_eq!(request.value, 42);
        assert_eq!(request.memo, "coffee");
    }

    #[tokio::test]
    async fn test_all_balance_concatenates_both_results() {
        let (daemon, wallet) = ready_wallet();
        daemon.stage_reply(
            "WalletBalance",
            codec::encode(
                "WalletBalanceResponse",
                &WalletBalanceResponse {
                    total_balance: Some(1500),
                    confirmed_balance: Some(1500),
                    unconfirmed_balance: None,
                },
            )
            .unwrap(),
        );
        daemon.stage_reply(
            "ChannelBalance",
            codec::encode(
                "ChannelBalanceResponse",
                &ChannelBalanceResponse {
                    balance: Some(700),
                    pending_open_balance: None,
                },
            )
            .unwrap(),
        );

        let text = wallet.all_balance().await.unwrap();

        assert!(text.starts_with("OnChain Balance: "));
        assert!(text.contains("\"totalBalance\":1500"));
        assert!(text.contains("Channel Balance: "));
        assert!(text.contains("\"balance\":700"));
    }

    #[tokio::test]
    async fn test_all_balance_reports_wallet_failure_inline() {
        // Wallet side fails closed when not ready; channel side is
        // fail-open but the dispatch itself errors with nothing staged.
        let (daemon, wallet) = wallet();
        daemon.fail_start("no binary");

        let text = wallet.all_balance().await.unwrap();
        assert!(text.contains("wallet is not ready"));
    }

    #[tokio::test]
    async fn test_transport_error_is_wrapped() {
        let (_, wallet) = ready_wallet();

        // No staged reply: the mock returns a string error
        let err = wallet.wallet_balance().await.unwrap_err();
        assert_eq!(
            err,
            Error::Daemon("no reply staged for WalletBalance".to_string())
        );
    }
}
