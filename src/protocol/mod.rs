//! Wire-level definitions for ZDO frames.
//!
//! This module contains:
//! - Cluster identifiers and their descriptions
//! - Address byte-order helpers
//! - Bounds-checked payload readers and writers
//! - Per-cluster encoders and decoders
//! - ZDO status codes

pub mod address;
pub mod cluster;
pub mod encoder;
pub mod frame;
pub mod parser;
pub mod status;

pub use address::{hex16, reverse_byte_pairs};
pub use cluster::{
    ClusterId, ClusterRef, ProfileRef, ZDO_ENDPOINT, ZDO_PROFILE_ID, ZDO_PROFILE_ID_HEX,
    cluster_description,
};
pub use frame::{FrameReader, FrameWriter, MAX_ZDO_PAYLOAD};
pub use parser::{DecodeOutcome, decode, decode_with_lookup};
pub use status::ZdoStatus;
