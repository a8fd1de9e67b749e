use shared::HtlcError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SwapError {
    /// The escrow contract refused the call.
    #[error("escrow rejected the call: {}", .0.reason())]
    Rejected(HtlcError),
    /// The call failed outside the escrow's own checks (token contract, host).
    #[error("invocation failed: {0}")]
    Invocation(String),
    #[error("responder timelock {responder} must end at least {margin}s before initiator timelock {initiator}")]
    TimelockOrdering {
        initiator: u64,
        responder: u64,
        margin: u64,
    },
    #[error("counterparty leg does not match the agreed terms: {0}")]
    LegMismatch(&'static str),
    #[error("secret has not been revealed yet")]
    SecretNotRevealed,
    #[error("no escrow has been locked on this leg")]
    NotLocked,
    #[error("malformed secret: {0}")]
    MalformedSecret(String),
}
