//! Decoding of received ZDO payloads.
//!
//! [`decode`] reads the sequence number, dispatches on the frame's cluster
//! id and stores the typed result in [`ZdoFrame::payload`]. The per-cluster
//! parsers consume fields in wire order from a [`FrameReader`].

use crate::error::{Error, FrameError, Result};
use crate::lookup::{ClusterLookup, ZclClusters};
use crate::protocol::address::{ADDR16_LEN, ADDR64_LEN};
use crate::protocol::cluster::{ClusterId, ClusterRef};
use crate::protocol::frame::FrameReader;
use crate::types::management::{
    ADDR_MODE_EXTENDED, ADDR_MODE_SHORT, SCAN_DURATION_CHANNEL_CHANGE, SCAN_DURATION_MANAGER_CHANGE,
    SCAN_DURATION_MAX,
};
use crate::types::{
    ActiveEndpointsResponse, AddressResponse, Binding, BindingTableResponse, CapabilityFlags,
    DescriptorRequest, EndDeviceAnnouncement, IeeeAddressRequest, LeaveRequest,
    ManufacturerInfo, MatchDescriptorRequest, MatchDescriptorResponse, Neighbor,
    NeighborTableResponse, NetworkAddressRequest, NetworkUpdateNotify, NetworkUpdateRequest,
    NodeDescriptorResponse, PermitJoinRequest, Route, RoutingTableResponse, SimpleDescriptor,
    SimpleDescriptorRequest, SimpleDescriptorResponse, StatusResponse, TableRequest, ZdoFrame,
    ZdoPayload,
};

/// Result of a successful [`decode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeOutcome {
    /// The payload was decoded into [`ZdoFrame::payload`].
    Parsed {
        /// Trailing bytes left after the last known field.
        unread: usize,
    },
    /// The cluster has no decoder; only the sequence number was read.
    Unrecognized {
        /// The cluster id as supplied on the frame.
        cluster: ClusterRef,
    },
}

impl DecodeOutcome {
    /// Returns true if a payload was produced.
    #[must_use]
    pub const fn is_parsed(&self) -> bool {
        matches!(self, Self::Parsed { .. })
    }
}

/// Decodes `frame.data` according to `frame.cluster_id`.
///
/// Cluster names are resolved against the built-in ZCL table.
pub fn decode(frame: &mut ZdoFrame) -> Result<DecodeOutcome> {
    decode_with_lookup(frame, &ZclClusters)
}

/// Decodes `frame.data`, resolving symbolic cluster ids with `lookup`.
///
/// Any payload from an earlier decode is cleared first. The sequence
/// number is stored before the payload is examined, so it is set even when
/// the rest of the decode fails.
pub fn decode_with_lookup<L: ClusterLookup + ?Sized>(
    frame: &mut ZdoFrame,
    lookup: &L,
) -> Result<DecodeOutcome> {
    frame.payload = None;
    let data = frame.data.clone().ok_or(FrameError::MissingData)?;
    let cluster_ref = frame.cluster_id.clone().ok_or(Error::MissingClusterId)?;

    let mut reader = FrameReader::new(data.clone());
    let seq = reader.u8().map_err(|_| FrameError::Empty)?;
    frame.zdo_seq = Some(seq);

    let Some(cluster) = cluster_ref.as_int(lookup).and_then(ClusterId::from_u16) else {
        tracing::warn!(
            "unrecognized ZDO cluster {}: {}",
            cluster_ref.description(lookup),
            hex::encode(&data)
        );
        return Ok(DecodeOutcome::Unrecognized {
            cluster: cluster_ref,
        });
    };

    let payload = parse_payload(cluster, &mut reader)?;
    let unread = reader.remaining();
    if unread > 0 {
        tracing::debug!("{}: {} trailing bytes ignored", cluster, unread);
    }
    tracing::trace!(seq, cluster = cluster.as_u16(), "decoded ZDO frame");
    frame.payload = Some(payload);
    Ok(DecodeOutcome::Parsed { unread })
}

/// Parses the fields following the sequence number for `cluster`.
pub fn parse_payload(cluster: ClusterId, reader: &mut FrameReader) -> Result<ZdoPayload> {
    let payload = match cluster {
        ClusterId::NetworkAddressRequest => {
            ZdoPayload::NetworkAddressRequest(NetworkAddressRequest {
                addr64: reader.hex_reversed(ADDR64_LEN)?,
                request_type: reader.u8()?,
                start_index: reader.u8()?,
            })
        }
        ClusterId::NetworkAddressResponse => {
            ZdoPayload::NetworkAddressResponse(parse_address_response(reader)?)
        }
        ClusterId::IeeeAddressRequest => ZdoPayload::IeeeAddressRequest(IeeeAddressRequest {
            addr16: reader.hex_reversed(ADDR16_LEN)?,
            request_type: reader.u8()?,
            start_index: reader.u8()?,
        }),
        ClusterId::IeeeAddressResponse => {
            ZdoPayload::IeeeAddressResponse(parse_address_response(reader)?)
        }
        ClusterId::NodeDescriptorRequest => {
            ZdoPayload::NodeDescriptorRequest(parse_descriptor_request(reader)?)
        }
        ClusterId::NodeDescriptorResponse => {
            ZdoPayload::NodeDescriptorResponse(parse_node_descriptor_response(reader)?)
        }
        ClusterId::SimpleDescriptorRequest => {
            ZdoPayload::SimpleDescriptorRequest(SimpleDescriptorRequest {
                addr16: Some(reader.hex_reversed(ADDR16_LEN)?),
                endpoint: reader.u8()?,
            })
        }
        ClusterId::SimpleDescriptorResponse => {
            ZdoPayload::SimpleDescriptorResponse(parse_simple_descriptor_response(reader)?)
        }
        ClusterId::ActiveEndpointsRequest => {
            ZdoPayload::ActiveEndpointsRequest(parse_descriptor_request(reader)?)
        }
        ClusterId::ActiveEndpointsResponse => {
            ZdoPayload::ActiveEndpointsResponse(parse_active_endpoints_response(reader)?)
        }
        ClusterId::MatchDescriptorRequest => {
            ZdoPayload::MatchDescriptorRequest(parse_match_descriptor_request(reader)?)
        }
        ClusterId::MatchDescriptorResponse => {
            let status = reader.u8()?;
            let addr16 = reader.hex_reversed(ADDR16_LEN)?;
            let count = reader.u8()?;
            let endpoints = (0..count)
                .map(|_| reader.u8())
                .collect::<std::result::Result<Vec<_>, _>>()?;
            ZdoPayload::MatchDescriptorResponse(MatchDescriptorResponse {
                status,
                addr16,
                endpoints,
            })
        }
        ClusterId::EndDeviceAnnouncement => {
            ZdoPayload::EndDeviceAnnouncement(EndDeviceAnnouncement {
                addr16: reader.hex_reversed(ADDR16_LEN)?,
                addr64: reader.hex_reversed(ADDR64_LEN)?,
                capability: CapabilityFlags::from_byte(reader.u8()?),
            })
        }
        ClusterId::BindRequest => ZdoPayload::BindRequest(parse_binding(reader)?),
        ClusterId::BindResponse => ZdoPayload::BindResponse(parse_status(reader)?),
        ClusterId::ManagementLqiRequest => {
            ZdoPayload::ManagementLqiRequest(parse_table_request(reader)?)
        }
        ClusterId::ManagementLqiResponse => {
            ZdoPayload::ManagementLqiResponse(parse_neighbor_table(reader)?)
        }
        ClusterId::ManagementRtgRequest => {
            ZdoPayload::ManagementRtgRequest(parse_table_request(reader)?)
        }
        ClusterId::ManagementRtgResponse => {
            ZdoPayload::ManagementRtgResponse(parse_routing_table(reader)?)
        }
        ClusterId::ManagementBindRequest => {
            ZdoPayload::ManagementBindRequest(parse_table_request(reader)?)
        }
        ClusterId::ManagementBindResponse => {
            ZdoPayload::ManagementBindResponse(parse_binding_table(reader)?)
        }
        ClusterId::ManagementLeaveRequest => ZdoPayload::ManagementLeaveRequest(LeaveRequest {
            addr64: reader.hex_reversed(ADDR64_LEN)?,
            options: reader.u8()?,
        }),
        ClusterId::ManagementLeaveResponse => {
            ZdoPayload::ManagementLeaveResponse(parse_status(reader)?)
        }
        ClusterId::ManagementPermitJoinRequest => {
            ZdoPayload::ManagementPermitJoinRequest(PermitJoinRequest {
                duration: reader.u8()?,
                trust_center_significance: reader.u8()?,
            })
        }
        ClusterId::ManagementPermitJoinResponse => {
            ZdoPayload::ManagementPermitJoinResponse(parse_status(reader)?)
        }
        ClusterId::ManagementNetworkUpdateRequest => {
            ZdoPayload::ManagementNetworkUpdateRequest(parse_network_update_request(reader)?)
        }
        ClusterId::ManagementNetworkUpdateNotify => {
            ZdoPayload::ManagementNetworkUpdateNotify(parse_network_update_notify(reader)?)
        }
    };
    Ok(payload)
}

fn parse_status(reader: &mut FrameReader) -> Result<StatusResponse> {
    Ok(StatusResponse {
        status: reader.u8()?,
    })
}

fn parse_table_request(reader: &mut FrameReader) -> Result<TableRequest> {
    Ok(TableRequest {
        start_index: reader.u8()?,
    })
}

fn parse_descriptor_request(reader: &mut FrameReader) -> Result<DescriptorRequest> {
    Ok(DescriptorRequest {
        addr16: Some(reader.hex_reversed(ADDR16_LEN)?),
    })
}

/// Reads `count` 16-bit cluster ids.
fn parse_cluster_list(reader: &mut FrameReader, count: u8) -> Result<Vec<String>> {
    let mut clusters = Vec::with_capacity(usize::from(count));
    for _ in 0..count {
        clusters.push(reader.hex_reversed(2)?);
    }
    Ok(clusters)
}

/// Parses a network or IEEE address response.
///
/// Format:
/// ```text
/// [status:1] [addr64:8] [addr16:2]
/// ([num_assoc_dev:1] [start_index:1] [addr16:2 × num_assoc_dev])?
/// ```
///
/// The associated device block is optional; when absent the count and
/// start index are zero.
fn parse_address_response(reader: &mut FrameReader) -> Result<AddressResponse> {
    let status = reader.u8()?;
    let nwk_addr64 = reader.hex_reversed(ADDR64_LEN)?;
    let nwk_addr16 = reader.hex_reversed(ADDR16_LEN)?;

    let mut response = AddressResponse {
        status,
        nwk_addr64,
        nwk_addr16,
        num_assoc_dev: 0,
        start_index: 0,
        assoc_addr16: Vec::new(),
    };
    if reader.has_remaining() {
        response.num_assoc_dev = reader.u8()?;
        response.start_index = reader.u8()?;
        for _ in 0..response.num_assoc_dev {
            response.assoc_addr16.push(reader.hex_reversed(ADDR16_LEN)?);
        }
    }
    Ok(response)
}

/// Parses a node descriptor response.
///
/// Format:
/// ```text
/// [status:1] [addr16:2] [type_flags:1] [band:1] [mac_capability:1]
/// ([manufacturer:2] [max_buffer:1] [max_in:2LE] [server_mask:2LE]
///  [max_out:2LE] [descriptor_capability:1])?
/// ```
fn parse_node_descriptor_response(reader: &mut FrameReader) -> Result<NodeDescriptorResponse> {
    let status = reader.u8()?;
    let addr16 = reader.hex_reversed(ADDR16_LEN)?;
    let type_flags = reader.u8()?;
    let band = reader.u8()?;
    let mac_capability_flags = CapabilityFlags::from_byte(reader.u8()?);

    let manufacturer = if reader.has_remaining() {
        Some(ManufacturerInfo {
            manufacturer_code: reader.hex_reversed(2)?,
            max_buffer_size: reader.u8()?,
            max_incoming_transfer_size: reader.u16_le()?,
            server_mask: reader.u16_le()?,
            max_outgoing_transfer_size: reader.u16_le()?,
            descriptor_capabilities: reader.u8()?,
        })
    } else {
        None
    };

    Ok(NodeDescriptorResponse {
        status,
        addr16,
        logical_type: type_flags & 0x03,
        complex_descriptor_available: type_flags & 0x08 != 0,
        user_descriptor_available: type_flags & 0x10 != 0,
        frequency_band: (band >> 3) & 0x1f,
        mac_capability_flags,
        manufacturer,
    })
}

/// Parses a simple descriptor response.
///
/// Format:
/// ```text
/// [status:1] [addr16:2]
/// ([length:1] [endpoint:1] [profile:2] [device_id:2] [version:1]
///  [in_count:1] [in:2 × in_count] [out_count:1] [out:2 × out_count])?
/// ```
///
/// Error responses stop after the address or carry a zero length.
fn parse_simple_descriptor_response(
    reader: &mut FrameReader,
) -> Result<SimpleDescriptorResponse> {
    let status = reader.u8()?;
    let addr16 = reader.hex_reversed(ADDR16_LEN)?;

    let descriptor_length = if reader.has_remaining() {
        reader.u8()?
    } else {
        0
    };
    if descriptor_length == 0 {
        return Ok(SimpleDescriptorResponse {
            status,
            addr16,
            descriptor_length,
            descriptor: None,
        });
    }

    let endpoint = reader.u8()?;
    let app_profile_id = reader.hex_reversed(2)?;
    let app_device_id = reader.hex_reversed(2)?;
    let app_device_version = reader.u8()? & 0x0f;
    let input_count = reader.u8()?;
    let input_clusters = parse_cluster_list(reader, input_count)?;
    let output_count = reader.u8()?;
    let output_clusters = parse_cluster_list(reader, output_count)?;

    Ok(SimpleDescriptorResponse {
        status,
        addr16,
        descriptor_length,
        descriptor: Some(SimpleDescriptor {
            endpoint,
            app_profile_id,
            app_device_id,
            app_device_version,
            input_clusters,
            output_clusters,
        }),
    })
}

fn parse_active_endpoints_response(reader: &mut FrameReader) -> Result<ActiveEndpointsResponse> {
    let status = reader.u8()?;
    let addr16 = reader.hex_reversed(ADDR16_LEN)?;
    let mut active_endpoints = Vec::new();
    if reader.has_remaining() {
        let count = reader.u8()?;
        for _ in 0..count {
            active_endpoints.push(reader.u8()?);
        }
    }
    Ok(ActiveEndpointsResponse {
        status,
        addr16,
        active_endpoints,
    })
}

fn parse_match_descriptor_request(reader: &mut FrameReader) -> Result<MatchDescriptorRequest> {
    let addr16 = reader.hex_reversed(ADDR16_LEN)?;
    let profile_id = reader.hex_reversed(2)?;
    let input_count = reader.u8()?;
    let input_clusters = parse_cluster_list(reader, input_count)?;
    let output_count = reader.u8()?;
    let output_clusters = parse_cluster_list(reader, output_count)?;
    Ok(MatchDescriptorRequest {
        addr16,
        profile_id,
        input_clusters,
        output_clusters,
    })
}

/// Parses one binding, as found in a bind request or a binding table.
///
/// Format:
/// ```text
/// [src_addr64:8] [src_endpoint:1] [cluster:2] [mode:1]
/// mode 1: [dst_addr16:2]
/// mode 3: [dst_addr64:8] [dst_endpoint:1]
/// ```
///
/// Other modes carry no destination.
fn parse_binding(reader: &mut FrameReader) -> Result<Binding> {
    let src_addr64 = reader.hex_reversed(ADDR64_LEN)?;
    let src_endpoint = reader.u8()?;
    let cluster_id = ClusterRef::Hex(reader.hex_reversed(2)?);
    let dst_addr_mode = reader.u8()?;

    let mut binding = Binding {
        src_addr64,
        src_endpoint,
        cluster_id,
        dst_addr_mode,
        dst_addr16: None,
        dst_addr64: None,
        dst_endpoint: None,
    };
    match dst_addr_mode {
        ADDR_MODE_SHORT => binding.dst_addr16 = Some(reader.hex_reversed(ADDR16_LEN)?),
        ADDR_MODE_EXTENDED => {
            binding.dst_addr64 = Some(reader.hex_reversed(ADDR64_LEN)?);
            binding.dst_endpoint = Some(reader.u8()?);
        }
        _ => {}
    }
    Ok(binding)
}

fn parse_binding_table(reader: &mut FrameReader) -> Result<BindingTableResponse> {
    let status = reader.u8()?;
    let num_entries = reader.u8()?;
    let start_index = reader.u8()?;
    let count = reader.u8()?;
    let mut bindings = Vec::with_capacity(usize::from(count));
    for _ in 0..count {
        bindings.push(parse_binding(reader)?);
    }
    Ok(BindingTableResponse {
        status,
        num_entries,
        start_index,
        bindings,
    })
}

/// Parses a neighbor table response.
///
/// Each entry is 22 bytes:
/// ```text
/// [pan_id:8] [addr64:8] [addr16:2] [flags:1] [permit_join:1] [depth:1] [lqi:1]
/// ```
fn parse_neighbor_table(reader: &mut FrameReader) -> Result<NeighborTableResponse> {
    let status = reader.u8()?;
    let num_entries = reader.u8()?;
    let start_index = reader.u8()?;
    let count = reader.u8()?;

    let mut neighbors = Vec::with_capacity(usize::from(count));
    for _ in 0..count {
        let pan_id = reader.hex_reversed(ADDR64_LEN)?;
        let addr64 = reader.hex_reversed(ADDR64_LEN)?;
        let addr16 = reader.hex_reversed(ADDR16_LEN)?;
        let flags = reader.u8()?;
        let permit = reader.u8()?;
        neighbors.push(Neighbor {
            pan_id,
            addr64,
            addr16,
            device_type: flags & 0x03,
            rx_on_when_idle: (flags >> 2) & 0x03,
            relationship: (flags >> 4) & 0x07,
            permit_joining: permit & 0x03,
            depth: reader.u8()?,
            lqi: reader.u8()?,
        });
    }
    Ok(NeighborTableResponse {
        status,
        num_entries,
        start_index,
        neighbors,
    })
}

/// Parses a routing table response.
///
/// Each entry is 5 bytes: `[dst_addr16:2] [flags:1] [next_hop:2]`.
fn parse_routing_table(reader: &mut FrameReader) -> Result<RoutingTableResponse> {
    let status = reader.u8()?;
    let num_entries = reader.u8()?;
    let start_index = reader.u8()?;
    let count = reader.u8()?;

    let mut routes = Vec::with_capacity(usize::from(count));
    for _ in 0..count {
        let addr16 = reader.hex_reversed(ADDR16_LEN)?;
        let flags = reader.u8()?;
        routes.push(Route {
            addr16,
            status: flags & 0x07,
            memory_constrained: flags & 0x08 != 0,
            many_to_one: flags & 0x10 != 0,
            route_record_required: flags & 0x20 != 0,
            next_hop_addr16: reader.hex_reversed(ADDR16_LEN)?,
        });
    }
    Ok(RoutingTableResponse {
        status,
        num_entries,
        start_index,
        routes,
    })
}

fn parse_network_update_request(reader: &mut FrameReader) -> Result<NetworkUpdateRequest> {
    let scan_channels = reader.hex_reversed(4)?;
    let scan_duration = reader.u8()?;
    let mut request = NetworkUpdateRequest {
        scan_channels,
        scan_duration,
        scan_count: None,
        nwk_update_id: None,
        nwk_manager_addr16: None,
    };
    match scan_duration {
        0..=SCAN_DURATION_MAX => request.scan_count = Some(reader.u8()?),
        SCAN_DURATION_CHANNEL_CHANGE => request.nwk_update_id = Some(reader.u8()?),
        SCAN_DURATION_MANAGER_CHANGE => {
            request.nwk_update_id = Some(reader.u8()?);
            request.nwk_manager_addr16 = Some(reader.hex_reversed(ADDR16_LEN)?);
        }
        _ => {}
    }
    Ok(request)
}

/// Parses a network update notify.
///
/// Format:
/// ```text
/// [status:1] [channels:4] [total_tx:2LE] [tx_failures:2LE] [count:1] [energy:1 × count]
/// ```
fn parse_network_update_notify(reader: &mut FrameReader) -> Result<NetworkUpdateNotify> {
    let status = reader.u8()?;
    let scanned_channels = reader.hex_reversed(4)?;
    let total_transmissions = reader.u16_le()?;
    let transmission_failures = reader.u16_le()?;
    let count = reader.u8()?;
    let mut energy_values = Vec::with_capacity(usize::from(count));
    for _ in 0..count {
        energy_values.push(reader.u8()?);
    }
    Ok(NetworkUpdateNotify {
        status,
        scanned_channels,
        total_transmissions,
        transmission_failures,
        energy_values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn received(cluster: u16, data: &[u8]) -> ZdoFrame {
        ZdoFrame::received(cluster, data.to_vec())
    }

    #[test]
    fn test_decode_missing_data() {
        let mut frame = ZdoFrame {
            cluster_id: Some(ClusterRef::Id(0x8001)),
            ..ZdoFrame::default()
        };
        assert!(matches!(
            decode(&mut frame),
            Err(Error::Frame(FrameError::MissingData))
        ));
    }

    #[test]
    fn test_decode_empty() {
        let mut frame = received(0x8001, &[]);
        assert!(matches!(
            decode(&mut frame),
            Err(Error::Frame(FrameError::Empty))
        ));
        assert_eq!(frame.zdo_seq, None);
    }

    #[test]
    fn test_decode_truncated_keeps_seq() {
        let mut frame = received(0x8001, &[0x07, 0x00, 0x11]);
        assert!(matches!(
            decode(&mut frame),
            Err(Error::Frame(FrameError::Incomplete { .. }))
        ));
        assert_eq!(frame.zdo_seq, Some(0x07));
        assert!(frame.payload.is_none());
    }

    #[test]
    fn test_decode_unrecognized() {
        let mut frame = received(0xffff, &[0x42, 0x01, 0x02]);
        let outcome = decode(&mut frame).unwrap();
        assert_eq!(
            outcome,
            DecodeOutcome::Unrecognized {
                cluster: ClusterRef::Id(0xffff)
            }
        );
        assert!(!outcome.is_parsed());
        assert_eq!(frame.zdo_seq, Some(0x42));
        assert!(frame.payload.is_none());
    }

    #[test]
    fn test_redecode_clears_stale_payload() {
        let mut frame = received(0x8021, &[0x01, 0x00]);
        decode(&mut frame).unwrap();
        assert!(frame.payload.is_some());

        let next = received(0xffff, &[0x02, 0x01]);
        frame.cluster_id = next.cluster_id;
        frame.data = next.data;
        assert!(!decode(&mut frame).unwrap().is_parsed());
        assert_eq!(frame.zdo_seq, Some(0x02));
        assert!(frame.payload.is_none());

        let mut frame = received(0x8021, &[0x03, 0x00]);
        decode(&mut frame).unwrap();
        frame.cluster_id = Some(ClusterRef::Id(0x8001));
        frame.data = received(0x8001, &[0x04, 0x00, 0x11]).data;
        assert!(decode(&mut frame).is_err());
        assert_eq!(frame.zdo_seq, Some(0x04));
        assert!(frame.payload.is_none());
    }

    #[test]
    fn test_decode_hex_cluster_id() {
        let mut frame = ZdoFrame::received("8034", vec![0x01, 0x00]);
        assert!(decode(&mut frame).unwrap().is_parsed());
        assert_eq!(
            frame.payload,
            Some(ZdoPayload::ManagementLeaveResponse(StatusResponse {
                status: 0
            }))
        );
    }

    #[test]
    fn test_parse_active_endpoints() {
        let mut frame = received(0x8005, &[0x01, 0x00, 0x34, 0x12, 0x02, 0x01, 0xf2]);
        assert_eq!(
            decode(&mut frame).unwrap(),
            DecodeOutcome::Parsed { unread: 0 }
        );
        let Some(ZdoPayload::ActiveEndpointsResponse(rsp)) = frame.payload else {
            panic!("expected active endpoints response");
        };
        assert_eq!(rsp.addr16, "1234");
        assert_eq!(rsp.active_endpoints, vec![0x01, 0xf2]);
    }

    #[test]
    fn test_parse_active_endpoints_without_list() {
        let mut frame = received(0x8005, &[0x01, 0x81, 0x34, 0x12]);
        decode(&mut frame).unwrap();
        let Some(ZdoPayload::ActiveEndpointsResponse(rsp)) = frame.payload else {
            panic!("expected active endpoints response");
        };
        assert_eq!(rsp.status, 0x81);
        assert!(rsp.active_endpoints.is_empty());
    }

    #[test]
    fn test_parse_node_descriptor() {
        let data = [
            0x01, 0x00, 0x34, 0x12, 0x19, 0x40, 0x8e, 0x7c, 0x11, 0x52, 0x80, 0x00, 0x41, 0x2a,
            0x80, 0x00, 0x00,
        ];
        let mut frame = received(0x8002, &data);
        assert_eq!(
            decode(&mut frame).unwrap(),
            DecodeOutcome::Parsed { unread: 0 }
        );
        let Some(ZdoPayload::NodeDescriptorResponse(rsp)) = frame.payload else {
            panic!("expected node descriptor response");
        };
        assert_eq!(rsp.logical_type, 1);
        assert!(rsp.user_descriptor_available);
        assert!(rsp.complex_descriptor_available);
        assert_eq!(rsp.frequency_band, 0x08);
        assert!(rsp.mac_capability_flags.alloc_short_address());
        let mfr = rsp.manufacturer.unwrap();
        assert_eq!(mfr.manufacturer_code, "117c");
        assert_eq!(mfr.max_buffer_size, 0x52);
        assert_eq!(mfr.max_incoming_transfer_size, 0x0080);
        assert_eq!(mfr.server_mask, 0x2a41);
        assert_eq!(mfr.max_outgoing_transfer_size, 0x0080);
    }

    #[test]
    fn test_parse_node_descriptor_without_manufacturer() {
        let mut frame = received(0x8002, &[0x01, 0x00, 0x34, 0x12, 0x02, 0x40, 0x80]);
        decode(&mut frame).unwrap();
        let Some(ZdoPayload::NodeDescriptorResponse(rsp)) = frame.payload else {
            panic!("expected node descriptor response");
        };
        assert_eq!(rsp.logical_type, 2);
        assert!(rsp.manufacturer.is_none());
    }

    #[test]
    fn test_parse_simple_descriptor() {
        let data = [
            0x05, 0x00, 0x34, 0x12, 0x0e, 0x01, 0x04, 0x01, 0x02, 0x01, 0x01, 0x02, 0x00, 0x00,
            0x06, 0x00, 0x01, 0x19, 0x00,
        ];
        let mut frame = received(0x8004, &data);
        assert_eq!(
            decode(&mut frame).unwrap(),
            DecodeOutcome::Parsed { unread: 0 }
        );
        let Some(ZdoPayload::SimpleDescriptorResponse(rsp)) = frame.payload else {
            panic!("expected simple descriptor response");
        };
        assert_eq!(rsp.descriptor_length, 0x0e);
        assert_eq!(rsp.input_clusters(), ["0000", "0006"]);
        assert_eq!(rsp.output_clusters(), ["0019"]);
        let desc = rsp.descriptor.unwrap();
        assert_eq!(desc.endpoint, 1);
        assert_eq!(desc.app_profile_id, "0104");
        assert_eq!(desc.app_device_id, "0102");
        assert_eq!(desc.app_device_version, 1);
    }

    #[test]
    fn test_parse_simple_descriptor_zero_length() {
        let mut frame = received(0x8004, &[0x05, 0x89, 0x34, 0x12, 0x00]);
        decode(&mut frame).unwrap();
        let Some(ZdoPayload::SimpleDescriptorResponse(rsp)) = frame.payload else {
            panic!("expected simple descriptor response");
        };
        assert_eq!(rsp.status, 0x89);
        assert_eq!(rsp.descriptor_length, 0);
        assert!(rsp.descriptor.is_none());
        assert!(rsp.input_clusters().is_empty());
    }

    #[test]
    fn test_parse_simple_descriptor_without_length() {
        let mut frame = received(0x8004, &[0x05, 0x81, 0x34, 0x12]);
        assert_eq!(
            decode(&mut frame).unwrap(),
            DecodeOutcome::Parsed { unread: 0 }
        );
        let Some(ZdoPayload::SimpleDescriptorResponse(rsp)) = frame.payload else {
            panic!("expected simple descriptor response");
        };
        assert_eq!(rsp.status, 0x81);
        assert_eq!(rsp.addr16, "1234");
        assert_eq!(rsp.descriptor_length, 0);
        assert!(rsp.descriptor.is_none());
    }

    #[test]
    fn test_parse_neighbor_table() {
        let mut data = vec![0x09, 0x00, 0x05, 0x00, 0x01];
        data.extend_from_slice(&[0x88, 0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11]);
        data.extend_from_slice(&[0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);
        data.extend_from_slice(&[0xcd, 0xab, 0x25, 0x02, 0x01, 0xff]);
        let mut frame = received(0x8031, &data);
        assert_eq!(
            decode(&mut frame).unwrap(),
            DecodeOutcome::Parsed { unread: 0 }
        );
        let Some(ZdoPayload::ManagementLqiResponse(rsp)) = frame.payload else {
            panic!("expected neighbor table");
        };
        assert_eq!(rsp.num_entries, 5);
        let n = &rsp.neighbors[0];
        assert_eq!(n.pan_id, "1122334455667788");
        assert_eq!(n.addr64, "0102030405060708");
        assert_eq!(n.addr16, "abcd");
        assert_eq!(n.device_type, 1);
        assert_eq!(n.rx_on_when_idle, 1);
        assert_eq!(n.relationship, 2);
        assert_eq!(n.permit_joining, 2);
        assert_eq!(n.depth, 1);
        assert_eq!(n.lqi, 0xff);
    }

    #[test]
    fn test_parse_routing_table() {
        let data = [0x02, 0x00, 0x01, 0x00, 0x01, 0x34, 0x12, 0x38, 0x00, 0x00];
        let mut frame = received(0x8032, &data);
        assert_eq!(
            decode(&mut frame).unwrap(),
            DecodeOutcome::Parsed { unread: 0 }
        );
        let Some(ZdoPayload::ManagementRtgResponse(rsp)) = frame.payload else {
            panic!("expected routing table");
        };
        let route = &rsp.routes[0];
        assert_eq!(route.addr16, "1234");
        assert_eq!(route.status, 0);
        assert!(route.memory_constrained);
        assert!(route.many_to_one);
        assert!(route.route_record_required);
        assert_eq!(route.next_hop_addr16, "0000");
    }

    #[test]
    fn test_parse_binding_table_unknown_mode() {
        let data = [
            0x03, 0x00, 0x01, 0x00, 0x01, 0x88, 0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11, 0x01,
            0x06, 0x00, 0x02,
        ];
        let mut frame = received(0x8033, &data);
        assert_eq!(
            decode(&mut frame).unwrap(),
            DecodeOutcome::Parsed { unread: 0 }
        );
        let Some(ZdoPayload::ManagementBindResponse(rsp)) = frame.payload else {
            panic!("expected binding table");
        };
        let binding = &rsp.bindings[0];
        assert_eq!(binding.cluster_id, ClusterRef::Hex("0006".into()));
        assert_eq!(binding.dst_addr_mode, 2);
        assert_eq!(binding.dst_addr16, None);
        assert_eq!(binding.dst_addr64, None);
    }

    #[test]
    fn test_parse_network_update_notify() {
        let data = [
            0x04, 0x00, 0x00, 0xf8, 0xff, 0x07, 0x10, 0x00, 0x02, 0x00, 0x02, 0x1e, 0x2f,
        ];
        let mut frame = received(0x8038, &data);
        assert_eq!(
            decode(&mut frame).unwrap(),
            DecodeOutcome::Parsed { unread: 0 }
        );
        let Some(ZdoPayload::ManagementNetworkUpdateNotify(rsp)) = frame.payload else {
            panic!("expected network update notify");
        };
        assert_eq!(rsp.scanned_channels, "07fff800");
        assert_eq!(rsp.total_transmissions, 16);
        assert_eq!(rsp.transmission_failures, 2);
        assert_eq!(rsp.energy_values, vec![0x1e, 0x2f]);
    }

    #[test]
    fn test_trailing_bytes_reported() {
        let mut frame = received(0x8021, &[0x01, 0x00, 0xaa, 0xbb]);
        assert_eq!(
            decode(&mut frame).unwrap(),
            DecodeOutcome::Parsed { unread: 2 }
        );
    }
}
