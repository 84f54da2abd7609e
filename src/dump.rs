//! Human-readable summaries of decoded frames.
//!
//! [`dump_frame`] renders one or more lines per frame; [`log_frame`] emits
//! them through `tracing`. Clusters without a registered id produce nothing.

use crate::lookup::ClusterLookup;
use crate::protocol::cluster::{ClusterId, ClusterRef};
use crate::types::management::{ADDR_MODE_EXTENDED, ADDR_MODE_SHORT};
use crate::types::{Binding, Neighbor, ZdoFrame, ZdoPayload};

const DEVICE_TYPE: [&str; 4] = ["Coord ", "Router", "EndDev", "???   "];
const RELATIONSHIP: [&str; 5] = ["Parent  ", "Child   ", "Sibling ", "None    ", "Previous"];
const PERMIT_JOINS: [&str; 4] = ["Y", "N", "?", "?"];

/// Renders `frame` as summary lines.
///
/// Application cluster ids are annotated with their symbolic names from
/// `lookup`. Returns an empty list for unregistered clusters and frames
/// without a decoded payload.
#[must_use]
pub fn dump_frame<L: ClusterLookup + ?Sized>(frame: &ZdoFrame, lookup: &L) -> Vec<String> {
    let registered = frame
        .cluster_id
        .as_ref()
        .and_then(|c| c.as_int(lookup))
        .and_then(ClusterId::from_u16)
        .is_some();
    match &frame.payload {
        Some(payload) if registered => {
            dump_payload(payload, frame.destination16.as_deref(), lookup)
        }
        _ => Vec::new(),
    }
}

/// Logs the summary of `frame` at info level, one event per line.
pub fn log_frame<L: ClusterLookup + ?Sized>(label: &str, frame: &ZdoFrame, lookup: &L) {
    for line in dump_frame(frame, lookup) {
        tracing::info!("{} {}", label, line);
    }
}

fn flag(value: bool) -> u8 {
    u8::from(value)
}

/// `"0006-genOnOff"`, or the bare hex id when the name is unknown.
fn cluster_label<L: ClusterLookup + ?Sized>(hex: &str, lookup: &L) -> String {
    u16::from_str_radix(hex, 16)
        .ok()
        .and_then(|id| lookup.name_by_id(id))
        .map_or_else(|| hex.to_owned(), |name| format!("{hex}-{name}"))
}

fn cluster_ref_label<L: ClusterLookup + ?Sized>(cluster: &ClusterRef, lookup: &L) -> String {
    match cluster.as_int(lookup).and_then(|id| lookup.name_by_id(id)) {
        Some(name) => format!("{}-{name}", cluster.as_hex_string()),
        None => cluster.as_hex_string(),
    }
}

fn cluster_list<L: ClusterLookup + ?Sized>(clusters: &[String], lookup: &L) -> String {
    clusters
        .iter()
        .map(|c| cluster_label(c, lookup))
        .collect::<Vec<_>>()
        .join(",")
}

fn endpoint_list(endpoints: &[u8]) -> String {
    endpoints
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn binding_line<L: ClusterLookup + ?Sized>(binding: &Binding, lookup: &L) -> String {
    let mut line = format!(
        "Src:{}:{} C:{}",
        binding.src_addr64,
        binding.src_endpoint,
        cluster_ref_label(&binding.cluster_id, lookup)
    );
    match binding.dst_addr_mode {
        ADDR_MODE_SHORT => {
            line.push_str(&format!(" Dst:{}", binding.dst_addr16.as_deref().unwrap_or("")));
        }
        ADDR_MODE_EXTENDED => {
            line.push_str(&format!(
                " Dst:{}:{}",
                binding.dst_addr64.as_deref().unwrap_or(""),
                binding.dst_endpoint.map(|e| e.to_string()).unwrap_or_default()
            ));
        }
        _ => {}
    }
    line
}

fn neighbor_line(n: &Neighbor) -> String {
    let pick = |table: &[&'static str], index: u8, fallback: &'static str| {
        table.get(usize::from(index)).copied().unwrap_or(fallback)
    };
    let depth = format!("D:{}", n.depth);
    format!(
        "PAN:{} Addr:{} {} DT:{} R:{} PJ:{} {:<5.5}LQI:{}",
        n.pan_id,
        n.addr64,
        n.addr16,
        pick(&DEVICE_TYPE, n.device_type, "???   "),
        pick(&RELATIONSHIP, n.relationship, "???     "),
        pick(&PERMIT_JOINS, n.permit_joining, "?"),
        depth,
        n.lqi
    )
}

// Descriptor requests without their own address target the frame's destination.
fn addr_of_interest<'a>(addr16: Option<&'a str>, destination16: Option<&'a str>) -> &'a str {
    addr16.or(destination16).unwrap_or("")
}

fn dump_payload<L: ClusterLookup + ?Sized>(
    payload: &ZdoPayload,
    destination16: Option<&str>,
    lookup: &L,
) -> Vec<String> {
    match payload {
        ZdoPayload::NetworkAddressRequest(req) => vec![format!("Addr:{}", req.addr64)],
        ZdoPayload::IeeeAddressRequest(req) => vec![format!("Addr:{}", req.addr16)],
        ZdoPayload::NetworkAddressResponse(rsp) | ZdoPayload::IeeeAddressResponse(rsp) => {
            vec![format!(
                "Addr:{} {} si:{} [{}]",
                rsp.nwk_addr64,
                rsp.nwk_addr16,
                rsp.start_index,
                rsp.assoc_addr16.join(" ")
            )]
        }
        ZdoPayload::NodeDescriptorRequest(req) | ZdoPayload::ActiveEndpointsRequest(req) => {
            vec![format!("Dest: {}", addr_of_interest(req.addr16.as_deref(), destination16))]
        }
        ZdoPayload::NodeDescriptorResponse(rsp) => {
            let mut line = format!(
                "Status:{} Addr:{} Type:{}",
                rsp.status, rsp.addr16, rsp.logical_type
            );
            if let Some(mfr) = &rsp.manufacturer {
                line.push_str(&format!(" Mfr:{}", mfr.manufacturer_code));
            }
            vec![line]
        }
        ZdoPayload::SimpleDescriptorRequest(req) => {
            let addr16 = addr_of_interest(req.addr16.as_deref(), destination16);
            vec![format!("Addr:{}:{}", addr16, req.endpoint)]
        }
        ZdoPayload::SimpleDescriptorResponse(rsp) => {
            let Some(desc) = &rsp.descriptor else {
                return vec![format!("Status:{} Addr:{}", rsp.status, rsp.addr16)];
            };
            let mut lines = vec![format!(
                "Status:{} Addr:{} EP:{} Prof:{} DevId:{} DevVer:{}",
                rsp.status,
                rsp.addr16,
                desc.endpoint,
                desc.app_profile_id,
                desc.app_device_id,
                desc.app_device_version
            )];
            lines.extend(
                desc.input_clusters
                    .iter()
                    .map(|c| format!("In:  {}", cluster_label(c, lookup))),
            );
            lines.extend(
                desc.output_clusters
                    .iter()
                    .map(|c| format!("Out: {}", cluster_label(c, lookup))),
            );
            lines
        }
        ZdoPayload::ActiveEndpointsResponse(rsp) => vec![format!(
            "Status:{} Addr:{} EP:[{}]",
            rsp.status,
            rsp.addr16,
            endpoint_list(&rsp.active_endpoints)
        )],
        ZdoPayload::MatchDescriptorRequest(req) => {
            let mut line = format!("Addr:{} Prof:{}", req.addr16, req.profile_id);
            if !req.input_clusters.is_empty() {
                line.push_str(&format!(" In:[{}]", cluster_list(&req.input_clusters, lookup)));
            }
            if !req.output_clusters.is_empty() {
                line.push_str(&format!(
                    " Out:[{}]",
                    cluster_list(&req.output_clusters, lookup)
                ));
            }
            vec![line]
        }
        ZdoPayload::MatchDescriptorResponse(rsp) => vec![format!(
            "Status:{} Addr:{} EP:[{}]",
            rsp.status,
            rsp.addr16,
            endpoint_list(&rsp.endpoints)
        )],
        ZdoPayload::EndDeviceAnnouncement(annce) => vec![format!(
            "Addr:{} {} FFD:{} AC:{} rxOnWhenIdle:{}",
            annce.addr64,
            annce.addr16,
            flag(annce.capability.full_function_device()),
            flag(annce.capability.ac_power()),
            flag(annce.capability.rx_on_when_idle())
        )],
        ZdoPayload::BindRequest(binding) => vec![binding_line(binding, lookup)],
        ZdoPayload::BindResponse(rsp)
        | ZdoPayload::ManagementLeaveResponse(rsp)
        | ZdoPayload::ManagementPermitJoinResponse(rsp) => {
            vec![format!("Status:{}", rsp.status)]
        }
        ZdoPayload::ManagementLqiRequest(req)
        | ZdoPayload::ManagementRtgRequest(req)
        | ZdoPayload::ManagementBindRequest(req) => vec![format!("si:{}", req.start_index)],
        ZdoPayload::ManagementLqiResponse(rsp) => {
            let mut lines = vec![format!(
                "Status:{} si:{} this frame: {} total entries: {}",
                rsp.status,
                rsp.start_index,
                rsp.neighbors.len(),
                rsp.num_entries
            )];
            lines.extend(rsp.neighbors.iter().map(neighbor_line));
            lines
        }
        ZdoPayload::ManagementRtgResponse(rsp) => {
            let mut lines = vec![format!("Status:{} si:{}", rsp.status, rsp.start_index)];
            lines.extend(rsp.routes.iter().map(|r| {
                format!(
                    "Addr:{} nextHop:{} Status:{} MC:{} N-1:{} RRR:{}",
                    r.addr16,
                    r.next_hop_addr16,
                    r.status,
                    flag(r.memory_constrained),
                    flag(r.many_to_one),
                    flag(r.route_record_required)
                )
            }));
            lines
        }
        ZdoPayload::ManagementBindResponse(rsp) => {
            let mut lines = vec![format!("Status:{} si:{}", rsp.status, rsp.start_index)];
            lines.extend(rsp.bindings.iter().map(|b| binding_line(b, lookup)));
            lines
        }
        ZdoPayload::ManagementLeaveRequest(req) => vec![format!("Dst:{}", req.addr64)],
        ZdoPayload::ManagementPermitJoinRequest(req) => {
            vec![format!("Duration:{}", req.duration)]
        }
        ZdoPayload::ManagementNetworkUpdateRequest(req) => vec![format!(
            "Channels:{} Duration:{}",
            req.scan_channels, req.scan_duration
        )],
        ZdoPayload::ManagementNetworkUpdateNotify(rsp) => vec![
            format!(
                "Status:{} Channels:{} Transmissions:{} Failures:{}",
                rsp.status,
                rsp.scanned_channels,
                rsp.total_transmissions,
                rsp.transmission_failures
            ),
            format!("Energy:[{}]", endpoint_list(&rsp.energy_values)),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::{NoLookup, ZclClusters};
    use crate::types::{
        CapabilityFlags, DescriptorRequest, EndDeviceAnnouncement, MatchDescriptorRequest,
        NeighborTableResponse, PermitJoinRequest, SimpleDescriptorRequest,
    };

    fn frame(payload: ZdoPayload) -> ZdoFrame {
        ZdoFrame::request(payload)
    }

    #[test]
    fn test_dump_unknown_cluster_is_empty() {
        let mut f = frame(ZdoPayload::ManagementPermitJoinRequest(PermitJoinRequest {
            duration: 10,
            trust_center_significance: 0,
        }));
        assert_eq!(dump_frame(&f, &ZclClusters), vec!["Duration:10"]);

        f.cluster_id = Some(ClusterRef::Id(0x7777));
        assert!(dump_frame(&f, &ZclClusters).is_empty());
    }

    #[test]
    fn test_dump_descriptor_request_address() {
        let f = frame(ZdoPayload::NodeDescriptorRequest(DescriptorRequest::default()))
            .with_destination16("5a6b");
        assert_eq!(dump_frame(&f, &NoLookup), vec!["Dest: 5a6b"]);

        let f = frame(ZdoPayload::SimpleDescriptorRequest(SimpleDescriptorRequest {
            addr16: Some("1234".into()),
            endpoint: 1,
        }))
        .with_destination16("5a6b");
        assert_eq!(dump_frame(&f, &NoLookup), vec!["Addr:1234:1"]);
    }

    #[test]
    fn test_dump_announcement() {
        let f = frame(ZdoPayload::EndDeviceAnnouncement(EndDeviceAnnouncement {
            addr16: "1234".into(),
            addr64: "0011223344556677".into(),
            capability: CapabilityFlags::from_byte(0x0e),
        }));
        assert_eq!(
            dump_frame(&f, &NoLookup),
            vec!["Addr:0011223344556677 1234 FFD:1 AC:1 rxOnWhenIdle:1"]
        );
    }

    #[test]
    fn test_dump_neighbor_padding() {
        let f = frame(ZdoPayload::ManagementLqiResponse(NeighborTableResponse {
            status: 0,
            num_entries: 3,
            start_index: 0,
            neighbors: vec![Neighbor {
                pan_id: "1122334455667788".into(),
                addr64: "0102030405060708".into(),
                addr16: "abcd".into(),
                device_type: 1,
                rx_on_when_idle: 1,
                relationship: 7,
                permit_joining: 1,
                depth: 2,
                lqi: 200,
            }],
        }));
        let lines = dump_frame(&f, &NoLookup);
        assert_eq!(lines[0], "Status:0 si:0 this frame: 1 total entries: 3");
        assert_eq!(
            lines[1],
            "PAN:1122334455667788 Addr:0102030405060708 abcd DT:Router R:???      PJ:N D:2  LQI:200"
        );
    }

    #[test]
    fn test_dump_match_descriptor_request_names() {
        let f = frame(ZdoPayload::MatchDescriptorRequest(MatchDescriptorRequest {
            addr16: "fffd".into(),
            profile_id: "0104".into(),
            input_clusters: vec!["0006".into(), "fc00".into()],
            output_clusters: Vec::new(),
        }));
        assert_eq!(
            dump_frame(&f, &ZclClusters),
            vec!["Addr:fffd Prof:0104 In:[0006-genOnOff,fc00]"]
        );
    }

    #[test]
    fn test_dump_bind_request() {
        let binding =
            Binding::to_extended("1122334455667788", 1, 0x0006_u16, "8877665544332211", 2);
        let f = frame(ZdoPayload::BindRequest(binding));
        assert_eq!(
            dump_frame(&f, &ZclClusters),
            vec!["Src:1122334455667788:1 C:0006-genOnOff Dst:8877665544332211:2"]
        );
    }
}
