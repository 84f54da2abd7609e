//! Binding and network management records.

use crate::protocol::ClusterRef;

/// Destination address mode: 16-bit group or short address.
pub const ADDR_MODE_SHORT: u8 = 0x01;

/// Destination address mode: 64-bit address plus endpoint.
pub const ADDR_MODE_EXTENDED: u8 = 0x03;

/// A binding, as sent in a bind request (0x0021) or listed in a binding
/// table response (0x8033).
///
/// Which destination fields apply depends on `dst_addr_mode`: mode 1 uses
/// `dst_addr16`, mode 3 uses `dst_addr64` and `dst_endpoint`. Other modes
/// carry no destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub src_addr64: String,
    pub src_endpoint: u8,
    pub cluster_id: ClusterRef,
    pub dst_addr_mode: u8,
    pub dst_addr16: Option<String>,
    pub dst_addr64: Option<String>,
    pub dst_endpoint: Option<u8>,
}

impl Binding {
    /// Binding to a group or short address (mode 1).
    #[must_use]
    pub fn to_short(
        src_addr64: impl Into<String>,
        src_endpoint: u8,
        cluster_id: impl Into<ClusterRef>,
        dst_addr16: impl Into<String>,
    ) -> Self {
        Self {
            src_addr64: src_addr64.into(),
            src_endpoint,
            cluster_id: cluster_id.into(),
            dst_addr_mode: ADDR_MODE_SHORT,
            dst_addr16: Some(dst_addr16.into()),
            dst_addr64: None,
            dst_endpoint: None,
        }
    }

    /// Binding to an extended address and endpoint (mode 3).
    #[must_use]
    pub fn to_extended(
        src_addr64: impl Into<String>,
        src_endpoint: u8,
        cluster_id: impl Into<ClusterRef>,
        dst_addr64: impl Into<String>,
        dst_endpoint: u8,
    ) -> Self {
        Self {
            src_addr64: src_addr64.into(),
            src_endpoint,
            cluster_id: cluster_id.into(),
            dst_addr_mode: ADDR_MODE_EXTENDED,
            dst_addr16: None,
            dst_addr64: Some(dst_addr64.into()),
            dst_endpoint: Some(dst_endpoint),
        }
    }
}

/// Management table request (LQI 0x0031, RTG 0x0032, BIND 0x0033).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRequest {
    pub start_index: u8,
}

/// One neighbor table entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbor {
    /// Extended PAN id.
    pub pan_id: String,
    pub addr64: String,
    pub addr16: String,
    /// 0 = coordinator, 1 = router, 2 = end device, 3 = unknown.
    pub device_type: u8,
    /// 0 = off, 1 = on, 2 = unknown.
    pub rx_on_when_idle: u8,
    /// 0 = parent, 1 = child, 2 = sibling, 3 = none, 4 = previous child.
    pub relationship: u8,
    /// 0 = accepting joins, 1 = not accepting, 2 = unknown.
    pub permit_joining: u8,
    pub depth: u8,
    pub lqi: u8,
}

/// One routing table entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub addr16: String,
    /// 0 = active, 1 = discovery underway, 2 = discovery failed, 3 = inactive,
    /// 4 = validation underway.
    pub status: u8,
    pub memory_constrained: bool,
    pub many_to_one: bool,
    pub route_record_required: bool,
    pub next_hop_addr16: String,
}

/// Neighbor table response (0x8031).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborTableResponse {
    pub status: u8,
    /// Total entries in the remote table.
    pub num_entries: u8,
    pub start_index: u8,
    pub neighbors: Vec<Neighbor>,
}

/// Routing table response (0x8032).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingTableResponse {
    pub status: u8,
    pub num_entries: u8,
    pub start_index: u8,
    pub routes: Vec<Route>,
}

/// Binding table response (0x8033).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingTableResponse {
    pub status: u8,
    pub num_entries: u8,
    pub start_index: u8,
    pub bindings: Vec<Binding>,
}

/// Leave options: the device also removes its children.
pub const LEAVE_REMOVE_CHILDREN: u8 = 1 << 6;

/// Leave options: the device rejoins after leaving.
pub const LEAVE_REJOIN: u8 = 1 << 7;

/// Management leave request (0x0034).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveRequest {
    pub addr64: String,
    pub options: u8,
}

/// Management permit join request (0x0036).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermitJoinRequest {
    /// Seconds to permit joining; 0xff = indefinitely.
    pub duration: u8,
    pub trust_center_significance: u8,
}

/// Scan durations at or below this value request an energy scan.
pub const SCAN_DURATION_MAX: u8 = 0x05;

/// Scan duration value: change channel.
pub const SCAN_DURATION_CHANNEL_CHANGE: u8 = 0xfe;

/// Scan duration value: change channel mask and network manager.
pub const SCAN_DURATION_MANAGER_CHANGE: u8 = 0xff;

/// Management network update request (0x0038).
///
/// Trailing fields depend on `scan_duration`: `scan_count` for scans
/// (0x00-0x05), `nwk_update_id` for 0xfe and 0xff, `nwk_manager_addr16`
/// for 0xff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkUpdateRequest {
    /// 32-bit channel mask.
    pub scan_channels: String,
    pub scan_duration: u8,
    pub scan_count: Option<u8>,
    pub nwk_update_id: Option<u8>,
    pub nwk_manager_addr16: Option<String>,
}

/// Management network update notify (0x8038).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkUpdateNotify {
    pub status: u8,
    pub scanned_channels: String,
    pub total_transmissions: u16,
    pub transmission_failures: u16,
    pub energy_values: Vec<u8>,
}

/// Response carrying only a status byte (0x8021, 0x8034, 0x8036).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusResponse {
    pub status: u8,
}
