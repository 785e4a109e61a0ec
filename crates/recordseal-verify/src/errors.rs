use thiserror::Error;

/// Errors raised by ledger client implementations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The transport reports a disconnected state.
    #[error("not connected to the verification network")]
    NotConnected,
    /// The query itself failed after the transport was reachable.
    #[error("ledger query failed: {0}")]
    Transport(String),
}
