//! Generic RPC dispatch over the daemon's command channel
//!
//! Every high-level operation funnels through [`lnrpc_request`]: the
//! operation name is normalized, both schema names are resolved, the body
//! is encoded, the command is sent, and the reply is decoded against the
//! response schema. No facade operation talks to the command channel
//! directly.

pub mod codec;
pub mod resolver;
pub mod schema;

use crate::daemon::LndDaemon;
use crate::error::Error;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Dispatch one RPC call and decode the typed response.
///
/// String-typed transport failures are wrapped into [`Error::Daemon`];
/// codec failures carry their own variants.
pub async fn lnrpc_request<T, B>(
    daemon: &dyn LndDaemon,
    method: &str,
    body: &B,
) -> Result<T, Error>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let method = resolver::to_caps(method, "");
    let request_schema = resolver::request_schema(&method);
    let response_schema = resolver::response_schema(&method);

    let payload = codec::encode(&request_schema, body)?;
    log::debug!("lnrpc {} ({} -> {})", method, request_schema, response_schema);

    let reply = daemon
        .send_command(&method, &payload)
        .await
        .map_err(Error::Daemon)?;

    codec::decode(&response_schema, &reply.data)
}
