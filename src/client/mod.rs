//! Gateway client - Typed access to the REST gateway.
//!
//! Responses are normalized into presentation records and requests are
//! denormalized into storage payloads, so callers only ever see the
//! presentation model.

mod error;
mod gateway_client;

pub use error::{ClientError, ClientResult};
pub use gateway_client::{GatewayClient, Snapshot};
