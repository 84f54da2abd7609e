//! Per-cluster request encoders.
//!
//! Each encoder appends its cluster's fields, in wire order, after the
//! sequence number the builder has already written. Multi-byte addresses
//! and identifiers go out least-significant byte first.

use crate::error::{Error, Result};
use crate::lookup::ClusterLookup;
use crate::protocol::address::{ADDR16_LEN, ADDR64_LEN};
use crate::protocol::cluster::ClusterId;
use crate::protocol::frame::FrameWriter;
use crate::types::management::{
    ADDR_MODE_EXTENDED, ADDR_MODE_SHORT, SCAN_DURATION_CHANNEL_CHANGE, SCAN_DURATION_MANAGER_CHANGE,
    SCAN_DURATION_MAX,
};
use crate::types::{Binding, MatchDescriptorRequest, NetworkUpdateRequest, ZdoPayload};

/// Width of a 32-bit channel mask in bytes.
const CHANNEL_MASK_LEN: usize = 4;

/// Returns true if frames of `cluster` can be built.
#[must_use]
pub const fn has_encoder(cluster: ClusterId) -> bool {
    matches!(
        cluster,
        ClusterId::NetworkAddressRequest
            | ClusterId::IeeeAddressRequest
            | ClusterId::NodeDescriptorRequest
            | ClusterId::SimpleDescriptorRequest
            | ClusterId::ActiveEndpointsRequest
            | ClusterId::MatchDescriptorRequest
            | ClusterId::MatchDescriptorResponse
            | ClusterId::EndDeviceAnnouncement
            | ClusterId::BindRequest
            | ClusterId::ManagementLqiRequest
            | ClusterId::ManagementRtgRequest
            | ClusterId::ManagementBindRequest
            | ClusterId::ManagementLeaveRequest
            | ClusterId::ManagementPermitJoinRequest
            | ClusterId::ManagementNetworkUpdateRequest
    )
}

/// Converts a list length to its count byte.
fn count(field: &'static str, len: usize) -> Result<u8> {
    u8::try_from(len).map_err(|_| Error::InvalidField {
        field,
        reason: format!("{len} entries do not fit a count byte"),
    })
}

/// Picks the descriptor request's own address, falling back to the frame's.
fn addr_of_interest<'a>(
    cluster: ClusterId,
    addr16: Option<&'a str>,
    destination16: Option<&'a str>,
) -> Result<&'a str> {
    addr16.or(destination16).ok_or(Error::MissingField {
        cluster: cluster.as_u16(),
        field: "addr16",
    })
}

/// Appends `payload` to `writer`.
///
/// `destination16` is the frame's short destination, used by descriptor
/// requests that carry no address of their own. `lookup` resolves symbolic
/// cluster names in bind requests.
pub fn encode<L: ClusterLookup + ?Sized>(
    payload: &ZdoPayload,
    destination16: Option<&str>,
    lookup: &L,
    writer: &mut FrameWriter,
) -> Result<()> {
    match payload {
        ZdoPayload::NetworkAddressRequest(req) => {
            writer.hex_reversed("addr64", &req.addr64, ADDR64_LEN)?;
            writer.u8(req.request_type);
            writer.u8(req.start_index);
        }
        ZdoPayload::IeeeAddressRequest(req) => {
            writer.hex_reversed("addr16", &req.addr16, ADDR16_LEN)?;
            writer.u8(req.request_type);
            writer.u8(req.start_index);
        }
        ZdoPayload::NodeDescriptorRequest(req) | ZdoPayload::ActiveEndpointsRequest(req) => {
            let addr16 = addr_of_interest(payload.cluster(), req.addr16.as_deref(), destination16)?;
            writer.hex_reversed("addr16", addr16, ADDR16_LEN)?;
        }
        ZdoPayload::SimpleDescriptorRequest(req) => {
            let addr16 = addr_of_interest(payload.cluster(), req.addr16.as_deref(), destination16)?;
            writer.hex_reversed("addr16", addr16, ADDR16_LEN)?;
            writer.u8(req.endpoint);
        }
        ZdoPayload::MatchDescriptorRequest(req) => encode_match_descriptor_request(req, writer)?,
        ZdoPayload::MatchDescriptorResponse(rsp) => {
            writer.u8(rsp.status);
            writer.hex_reversed("addr16", &rsp.addr16, ADDR16_LEN)?;
            writer.u8(count("endpoints", rsp.endpoints.len())?);
            for endpoint in &rsp.endpoints {
                writer.u8(*endpoint);
            }
        }
        ZdoPayload::EndDeviceAnnouncement(annce) => {
            writer.hex_reversed("addr16", &annce.addr16, ADDR16_LEN)?;
            writer.hex_reversed("addr64", &annce.addr64, ADDR64_LEN)?;
            writer.u8(annce.capability.as_byte());
        }
        ZdoPayload::BindRequest(binding) => encode_binding(binding, lookup, writer)?,
        ZdoPayload::ManagementLqiRequest(req)
        | ZdoPayload::ManagementRtgRequest(req)
        | ZdoPayload::ManagementBindRequest(req) => {
            writer.u8(req.start_index);
        }
        ZdoPayload::ManagementLeaveRequest(req) => {
            writer.hex_reversed("addr64", &req.addr64, ADDR64_LEN)?;
            writer.u8(req.options);
        }
        ZdoPayload::ManagementPermitJoinRequest(req) => {
            writer.u8(req.duration);
            writer.u8(req.trust_center_significance);
        }
        ZdoPayload::ManagementNetworkUpdateRequest(req) => {
            encode_network_update_request(req, writer)?;
        }
        other => {
            return Err(Error::NotImplemented {
                cluster: other.cluster().as_u16(),
            });
        }
    }
    Ok(())
}

fn encode_match_descriptor_request(
    req: &MatchDescriptorRequest,
    writer: &mut FrameWriter,
) -> Result<()> {
    writer.hex_reversed("addr16", &req.addr16, ADDR16_LEN)?;
    writer.hex_reversed("profile_id", &req.profile_id, 2)?;
    writer.u8(count("input_clusters", req.input_clusters.len())?);
    for cluster in &req.input_clusters {
        writer.hex_reversed("input_clusters", cluster, 2)?;
    }
    writer.u8(count("output_clusters", req.output_clusters.len())?);
    for cluster in &req.output_clusters {
        writer.hex_reversed("output_clusters", cluster, 2)?;
    }
    Ok(())
}

/// Validated bind destination.
enum Destination<'a> {
    Short(&'a str),
    Extended(&'a str, u8),
}

/// Encodes a bind request.
///
/// The destination is validated before any byte is written.
fn encode_binding<L: ClusterLookup + ?Sized>(
    binding: &Binding,
    lookup: &L,
    writer: &mut FrameWriter,
) -> Result<()> {
    let missing = |field| Error::MissingField {
        cluster: ClusterId::BindRequest.as_u16(),
        field,
    };

    let destination = match binding.dst_addr_mode {
        ADDR_MODE_SHORT => Destination::Short(
            binding
                .dst_addr16
                .as_deref()
                .ok_or_else(|| missing("dst_addr16"))?,
        ),
        ADDR_MODE_EXTENDED => Destination::Extended(
            binding
                .dst_addr64
                .as_deref()
                .ok_or_else(|| missing("dst_addr64"))?,
            binding.dst_endpoint.ok_or_else(|| missing("dst_endpoint"))?,
        ),
        mode => return Err(Error::InvalidAddrMode { mode }),
    };
    let cluster_id = binding.cluster_id.resolve(lookup)?;

    writer.hex_reversed("src_addr64", &binding.src_addr64, ADDR64_LEN)?;
    writer.u8(binding.src_endpoint);
    writer.u16_le(cluster_id);
    writer.u8(binding.dst_addr_mode);
    match destination {
        Destination::Short(addr16) => writer.hex_reversed("dst_addr16", addr16, ADDR16_LEN)?,
        Destination::Extended(addr64, endpoint) => {
            writer.hex_reversed("dst_addr64", addr64, ADDR64_LEN)?;
            writer.u8(endpoint);
        }
    }
    Ok(())
}

fn encode_network_update_request(
    req: &NetworkUpdateRequest,
    writer: &mut FrameWriter,
) -> Result<()> {
    let missing = |field| Error::MissingField {
        cluster: ClusterId::ManagementNetworkUpdateRequest.as_u16(),
        field,
    };

    writer.hex_reversed("scan_channels", &req.scan_channels, CHANNEL_MASK_LEN)?;
    writer.u8(req.scan_duration);
    match req.scan_duration {
        0..=SCAN_DURATION_MAX => {
            writer.u8(req.scan_count.ok_or_else(|| missing("scan_count"))?);
        }
        SCAN_DURATION_CHANNEL_CHANGE => {
            writer.u8(req.nwk_update_id.ok_or_else(|| missing("nwk_update_id"))?);
        }
        SCAN_DURATION_MANAGER_CHANGE => {
            writer.u8(req.nwk_update_id.ok_or_else(|| missing("nwk_update_id"))?);
            let manager = req
                .nwk_manager_addr16
                .as_deref()
                .ok_or_else(|| missing("nwk_manager_addr16"))?;
            writer.hex_reversed("nwk_manager_addr16", manager, ADDR16_LEN)?;
        }
        _ => {}
    }
    Ok(())
}
