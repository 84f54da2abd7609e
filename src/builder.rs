//! Outgoing frame assembly.
//!
//! [`FrameBuilder`] owns the ZDO sequence counter and turns a [`ZdoFrame`]
//! carrying a typed payload into a ready-to-send frame: transport fields
//! stamped, sequence number assigned, `data` encoded.

use crate::error::{Error, Result};
use crate::lookup::{ClusterLookup, ZclClusters};
use crate::protocol::cluster::{ClusterId, ClusterRef, ProfileRef, ZDO_ENDPOINT, ZDO_PROFILE_ID};
use crate::protocol::encoder::{self, has_encoder};
use crate::protocol::frame::FrameWriter;
use crate::protocol::hex16;
use crate::types::ZdoFrame;

/// Transport frame type for explicit addressing transmit requests.
pub const DEFAULT_TX_FRAME_TYPE: u8 = 0x11;

/// Short address meaning "unknown, route by extended address".
pub const UNKNOWN_ADDR16: &str = "fffe";

/// Settings for a [`FrameBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Frame type stamped on every built frame.
    pub tx_frame_type: u8,
    /// Counter value before the first sequence number is handed out.
    pub initial_seq: u8,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            tx_frame_type: DEFAULT_TX_FRAME_TYPE,
            initial_seq: 0,
        }
    }
}

impl BuilderConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the transport frame type.
    #[must_use]
    pub const fn tx_frame_type(mut self, frame_type: u8) -> Self {
        self.tx_frame_type = frame_type;
        self
    }

    /// Sets the starting counter value; the first frame gets `seq + 1`.
    #[must_use]
    pub const fn initial_seq(mut self, seq: u8) -> Self {
        self.initial_seq = seq;
        self
    }
}

/// Builds outgoing ZDO frames.
///
/// `next_frame_id` supplies transport frame ids; `lookup` resolves symbolic
/// cluster names.
///
/// # Example
///
/// ```
/// use zdo::{BuilderConfig, FrameBuilder, ZdoFrame, ZdoPayload};
/// use zdo::types::TableRequest;
///
/// let mut builder = FrameBuilder::new(|| 1, BuilderConfig::default());
/// let mut frame = ZdoFrame::request(ZdoPayload::ManagementLqiRequest(TableRequest {
///     start_index: 0,
/// }));
/// builder.build(&mut frame)?;
/// assert_eq!(frame.data.as_deref(), Some(&[0x01, 0x00][..]));
/// assert_eq!(frame.destination16.as_deref(), Some("fffe"));
/// # Ok::<(), zdo::Error>(())
/// ```
#[derive(Debug)]
pub struct FrameBuilder<F, L = ZclClusters> {
    next_frame_id: F,
    tx_frame_type: u8,
    seq: u8,
    lookup: L,
}

impl<F: FnMut() -> u8> FrameBuilder<F> {
    /// Creates a builder using the built-in ZCL cluster names.
    pub fn new(next_frame_id: F, config: BuilderConfig) -> Self {
        Self::with_lookup(next_frame_id, config, ZclClusters)
    }
}

impl<F: FnMut() -> u8, L: ClusterLookup> FrameBuilder<F, L> {
    /// Creates a builder resolving cluster names through `lookup`.
    pub fn with_lookup(next_frame_id: F, config: BuilderConfig, lookup: L) -> Self {
        Self {
            next_frame_id,
            tx_frame_type: config.tx_frame_type,
            seq: config.initial_seq,
            lookup,
        }
    }

    /// The cluster lookup in use.
    pub const fn lookup(&self) -> &L {
        &self.lookup
    }

    /// The last sequence number handed out.
    #[must_use]
    pub const fn seq(&self) -> u8 {
        self.seq
    }

    /// Advances the counter and returns the new value, wrapping 255 to 0.
    pub const fn next_zdo_seq(&mut self) -> u8 {
        self.seq = self.seq.wrapping_add(1);
        self.seq
    }

    /// Completes `frame` for transmission.
    ///
    /// On success `frame.data` holds the sequence number followed by the
    /// encoded payload, and `frame.cluster_id` is normalized to its hex
    /// form. A frame that already carries `zdo_seq` keeps it, so a
    /// retransmission can be rebuilt without consuming a new number.
    ///
    /// Any `data` from an earlier build is cleared first, so a failed build
    /// never leaves stale bytes behind. Other fields may be partially
    /// updated on failure.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingClusterId`] if `frame.cluster_id` is unset.
    /// - [`Error::UnresolvedCluster`] if the id cannot be resolved.
    /// - [`Error::NotImplemented`] if the cluster has no encoder.
    /// - [`Error::MissingPayload`] or [`Error::PayloadMismatch`] if the
    ///   payload is absent or belongs to another cluster.
    /// - Field errors from the encoder.
    pub fn build(&mut self, frame: &mut ZdoFrame) -> Result<()> {
        frame.data = None;
        let cluster_ref = frame.cluster_id.as_ref().ok_or(Error::MissingClusterId)?;
        if frame.destination16.is_none() {
            frame.destination16 = Some(UNKNOWN_ADDR16.to_owned());
        }

        let id = cluster_ref.resolve(&self.lookup)?;
        frame.cluster_id = Some(ClusterRef::Hex(hex16(id)));
        let cluster = ClusterId::from_u16(id)
            .filter(|cluster| has_encoder(*cluster))
            .ok_or(Error::NotImplemented { cluster: id })?;

        let payload = frame.payload.as_ref().ok_or(Error::MissingPayload)?;
        if payload.cluster() != cluster {
            return Err(Error::PayloadMismatch {
                cluster: id,
                payload: payload.cluster().as_u16(),
            });
        }

        frame.id = Some((self.next_frame_id)());
        frame.frame_type = Some(self.tx_frame_type);
        frame.source_endpoint = Some(ZDO_ENDPOINT);
        frame.destination_endpoint = Some(ZDO_ENDPOINT);
        frame.profile_id = Some(ProfileRef::Id(ZDO_PROFILE_ID));

        let seq = match frame.zdo_seq {
            Some(seq) => seq,
            None => {
                let seq = self.next_zdo_seq();
                frame.zdo_seq = Some(seq);
                seq
            }
        };

        let mut writer = FrameWriter::new();
        writer.u8(seq);
        encoder::encode(
            payload,
            frame.destination16.as_deref(),
            &self.lookup,
            &mut writer,
        )?;
        let data = writer.finish()?;

        tracing::trace!(
            seq,
            cluster = id,
            len = data.len(),
            "built {}",
            cluster.description()
        );
        frame.data = Some(data);
        Ok(())
    }
}
