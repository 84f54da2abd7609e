//! # zdo
//!
//! A frame builder and parser for the Zigbee Device Object (ZDO) protocol.
//!
//! The crate turns typed ZDO requests into the byte payload carried by an
//! explicit-addressing transmit frame, and turns received payloads back into
//! typed records. It performs no I/O: transport, retries and response
//! correlation belong to the caller.
//!
//! ## Features
//!
//! - Encoders for every ZDO request and the match descriptor response
//! - Decoders for every registered ZDO cluster, requests included
//! - Wrapping sequence counter with reuse for retransmissions
//! - One-line summaries of decoded frames for logging
//!
//! ## Quick Start
//!
//! ```
//! use zdo::{BuilderConfig, FrameBuilder, ZdoFrame, ZdoPayload};
//! use zdo::types::DescriptorRequest;
//!
//! let mut builder = FrameBuilder::new(|| 0x42, BuilderConfig::default());
//!
//! // Ask a node for its active endpoints; the address of interest
//! // defaults to the frame's short destination
//! let mut request = ZdoFrame::request(ZdoPayload::ActiveEndpointsRequest(
//!     DescriptorRequest::default(),
//! ))
//! .with_destination64("0013a20040a1b2c3")
//! .with_destination16("1234");
//! builder.build(&mut request)?;
//! assert_eq!(request.data.as_deref(), Some(&[0x01, 0x34, 0x12][..]));
//!
//! // Decode the reply
//! let mut reply = ZdoFrame::received(0x8005_u16, vec![0x01, 0x00, 0x34, 0x12, 0x01, 0x01]);
//! zdo::decode(&mut reply)?;
//! if let Some(ZdoPayload::ActiveEndpointsResponse(rsp)) = &reply.payload {
//!     assert_eq!(rsp.active_endpoints, vec![1]);
//! }
//! # Ok::<(), zdo::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`protocol`] - Wire format: cluster ids, byte order, encoders, decoders
//! - [`types`] - Typed payload records and the [`ZdoFrame`] descriptor
//! - [`builder`] - [`FrameBuilder`] for outgoing frames
//! - [`dump`] - Human-readable frame summaries
//! - [`lookup`] - Symbolic ZCL cluster names

pub mod builder;
pub mod dump;
pub mod error;
pub mod lookup;
pub mod protocol;
pub mod types;

// Re-exports for convenience
pub use builder::{BuilderConfig, FrameBuilder};
pub use dump::{dump_frame, log_frame};
pub use error::{Error, FrameError, Result};
pub use lookup::{ClusterLookup, NoLookup, ZclClusters};
pub use protocol::{
    ClusterId, ClusterRef, DecodeOutcome, ProfileRef, ZdoStatus, cluster_description, decode,
    decode_with_lookup, reverse_byte_pairs,
};
pub use types::{ZdoFrame, ZdoPayload};
