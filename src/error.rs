//! Error types for the zdo library.

use thiserror::Error;

/// The main error type for ZDO frame building and parsing.
///
/// Every variant except [`Error::Frame`] is a caller/input error: the frame
/// description handed to the builder was incomplete or malformed. They are
/// raised before any payload is stored on the frame.
#[derive(Debug, Error)]
pub enum Error {
    /// The frame carries no cluster identifier.
    #[error("caller must provide a cluster id")]
    MissingClusterId,

    /// The cluster identifier could not be resolved to a number.
    #[error("unable to resolve cluster id '{input}'")]
    UnresolvedCluster { input: String },

    /// No encoder exists for the cluster.
    #[error("this library does not implement building the 0x{cluster:04x} frame type")]
    NotImplemented { cluster: u16 },

    /// The frame carries no cluster-specific payload to encode.
    #[error("frame has no payload to encode")]
    MissingPayload,

    /// The payload variant does not belong to the frame's cluster.
    #[error("payload for cluster 0x{payload:04x} does not match cluster 0x{cluster:04x}")]
    PayloadMismatch { cluster: u16, payload: u16 },

    /// A field required by the chosen variant is absent.
    #[error("cluster 0x{cluster:04x} requires field '{field}'")]
    MissingField { cluster: u16, field: &'static str },

    /// Bind destination address mode other than 1 (short) or 3 (extended).
    #[error("unsupported destination address mode {mode}")]
    InvalidAddrMode { mode: u8 },

    /// A field value has the wrong shape (e.g. an address of the wrong width).
    #[error("invalid field '{field}': {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// Hex string cannot be split into byte pairs.
    #[error("hex string has odd length {len}")]
    OddHexLength { len: usize },

    /// Hex string contains non-hex characters.
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// Frame encoding/decoding error.
    #[error("frame error: {0}")]
    Frame(#[from] FrameError),
}

/// Byte-level cursor errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrameError {
    /// Frame has no data to decode.
    #[error("frame has no data")]
    MissingData,

    /// Frame is too short to hold the sequence number.
    #[error("frame is empty: need at least 1 byte for the sequence number")]
    Empty,

    /// Payload ended inside a mandatory section.
    #[error("incomplete frame: expected {expected} more bytes, got {got}")]
    Incomplete { expected: usize, got: usize },

    /// Encoded payload exceeds the maximum ZDO payload.
    #[error("frame too large: {size} bytes exceeds maximum {max}")]
    TooLarge { size: usize, max: usize },
}

/// Result type alias for zdo operations.
pub type Result<T> = std::result::Result<T, Error>;
