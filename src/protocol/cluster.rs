//! ZDO cluster identifiers and the identifier forms callers may use.
//!
//! Requests and their responses share the low 15 bits; responses have the
//! high bit set (`0x0021` bind request, `0x8021` bind response).

use std::fmt;

use crate::error::{Error, Result};
use crate::lookup::ClusterLookup;
use crate::protocol::address::hex16;

/// Profile identifier used by every ZDO frame.
pub const ZDO_PROFILE_ID: u16 = 0x0000;

/// Hex form of [`ZDO_PROFILE_ID`].
pub const ZDO_PROFILE_ID_HEX: &str = "0000";

/// Endpoint reserved for the ZDO.
pub const ZDO_ENDPOINT: u8 = 0;

/// Bit distinguishing responses from requests.
const RESPONSE_BIT: u16 = 0x8000;

/// Registered ZDO clusters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ClusterId {
    NetworkAddressRequest = 0x0000,
    NetworkAddressResponse = 0x8000,
    IeeeAddressRequest = 0x0001,
    IeeeAddressResponse = 0x8001,
    NodeDescriptorRequest = 0x0002,
    NodeDescriptorResponse = 0x8002,
    SimpleDescriptorRequest = 0x0004,
    SimpleDescriptorResponse = 0x8004,
    ActiveEndpointsRequest = 0x0005,
    ActiveEndpointsResponse = 0x8005,
    MatchDescriptorRequest = 0x0006,
    MatchDescriptorResponse = 0x8006,
    EndDeviceAnnouncement = 0x0013,
    BindRequest = 0x0021,
    BindResponse = 0x8021,
    ManagementLqiRequest = 0x0031,
    ManagementLqiResponse = 0x8031,
    ManagementRtgRequest = 0x0032,
    ManagementRtgResponse = 0x8032,
    ManagementBindRequest = 0x0033,
    ManagementBindResponse = 0x8033,
    ManagementLeaveRequest = 0x0034,
    ManagementLeaveResponse = 0x8034,
    ManagementPermitJoinRequest = 0x0036,
    ManagementPermitJoinResponse = 0x8036,
    ManagementNetworkUpdateRequest = 0x0038,
    ManagementNetworkUpdateNotify = 0x8038,
}

impl ClusterId {
    /// Every registered cluster, requests before responses.
    pub const ALL: [Self; 27] = [
        Self::NetworkAddressRequest,
        Self::IeeeAddressRequest,
        Self::NodeDescriptorRequest,
        Self::SimpleDescriptorRequest,
        Self::ActiveEndpointsRequest,
        Self::MatchDescriptorRequest,
        Self::EndDeviceAnnouncement,
        Self::BindRequest,
        Self::ManagementLqiRequest,
        Self::ManagementRtgRequest,
        Self::ManagementBindRequest,
        Self::ManagementLeaveRequest,
        Self::ManagementPermitJoinRequest,
        Self::ManagementNetworkUpdateRequest,
        Self::NetworkAddressResponse,
        Self::IeeeAddressResponse,
        Self::NodeDescriptorResponse,
        Self::SimpleDescriptorResponse,
        Self::ActiveEndpointsResponse,
        Self::MatchDescriptorResponse,
        Self::BindResponse,
        Self::ManagementLqiResponse,
        Self::ManagementRtgResponse,
        Self::ManagementBindResponse,
        Self::ManagementLeaveResponse,
        Self::ManagementPermitJoinResponse,
        Self::ManagementNetworkUpdateNotify,
    ];

    /// Looks up a registered cluster by its numeric id.
    #[must_use]
    pub const fn from_u16(value: u16) -> Option<Self> {
        match value {
            0x0000 => Some(Self::NetworkAddressRequest),
            0x8000 => Some(Self::NetworkAddressResponse),
            0x0001 => Some(Self::IeeeAddressRequest),
            0x8001 => Some(Self::IeeeAddressResponse),
            0x0002 => Some(Self::NodeDescriptorRequest),
            0x8002 => Some(Self::NodeDescriptorResponse),
            0x0004 => Some(Self::SimpleDescriptorRequest),
            0x8004 => Some(Self::SimpleDescriptorResponse),
            0x0005 => Some(Self::ActiveEndpointsRequest),
            0x8005 => Some(Self::ActiveEndpointsResponse),
            0x0006 => Some(Self::MatchDescriptorRequest),
            0x8006 => Some(Self::MatchDescriptorResponse),
            0x0013 => Some(Self::EndDeviceAnnouncement),
            0x0021 => Some(Self::BindRequest),
            0x8021 => Some(Self::BindResponse),
            0x0031 => Some(Self::ManagementLqiRequest),
            0x8031 => Some(Self::ManagementLqiResponse),
            0x0032 => Some(Self::ManagementRtgRequest),
            0x8032 => Some(Self::ManagementRtgResponse),
            0x0033 => Some(Self::ManagementBindRequest),
            0x8033 => Some(Self::ManagementBindResponse),
            0x0034 => Some(Self::ManagementLeaveRequest),
            0x8034 => Some(Self::ManagementLeaveResponse),
            0x0036 => Some(Self::ManagementPermitJoinRequest),
            0x8036 => Some(Self::ManagementPermitJoinResponse),
            0x0038 => Some(Self::ManagementNetworkUpdateRequest),
            0x8038 => Some(Self::ManagementNetworkUpdateNotify),
            _ => None,
        }
    }

    /// Returns the numeric cluster id.
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// Returns true for response and notification clusters.
    #[must_use]
    pub const fn is_response(self) -> bool {
        (self as u16) & RESPONSE_BIT != 0
    }

    /// Returns the response cluster paired with this request, if registered.
    #[must_use]
    pub const fn response(self) -> Option<Self> {
        if self.is_response() {
            return None;
        }
        Self::from_u16(self as u16 | RESPONSE_BIT)
    }

    /// Human-readable description, e.g. `"Bind Req (0x0021)"`.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::NetworkAddressRequest => "Network Address Req (0x0000)",
            Self::NetworkAddressResponse => "Network Address Resp (0x8000)",
            Self::IeeeAddressRequest => "IEEE Address Req (0x0001)",
            Self::IeeeAddressResponse => "IEEE Address Resp (0x8001)",
            Self::NodeDescriptorRequest => "Node Descriptor Req (0x0002)",
            Self::NodeDescriptorResponse => "Node Descriptor Resp (0x8002)",
            Self::SimpleDescriptorRequest => "Simple Descriptor Req (0x0004)",
            Self::SimpleDescriptorResponse => "Simple Descriptor Resp (0x8004)",
            Self::ActiveEndpointsRequest => "Active Endpoints Req (0x0005)",
            Self::ActiveEndpointsResponse => "Active Endpoints Resp (0x8005)",
            Self::MatchDescriptorRequest => "Match Descriptor Req (0x0006)",
            Self::MatchDescriptorResponse => "Match Descriptor Resp (0x8006)",
            Self::EndDeviceAnnouncement => "End Device Announcement (0x0013)",
            Self::BindRequest => "Bind Req (0x0021)",
            Self::BindResponse => "Bind Resp (0x8021)",
            Self::ManagementLqiRequest => "Mgmt LQI (Neighbor Table) Req (0x0031)",
            Self::ManagementLqiResponse => "Mgmt LQI (Neighbor Table) Resp (0x8031)",
            Self::ManagementRtgRequest => "Mgmt RTG (Routing Table) Req (0x0032)",
            Self::ManagementRtgResponse => "Mgmt RTG (Routing Table) Resp (0x8032)",
            Self::ManagementBindRequest => "Mgmt BIND (Binding Table) Req (0x0033)",
            Self::ManagementBindResponse => "Mgmt BIND (Binding Table) Resp (0x8033)",
            Self::ManagementLeaveRequest => "Mgmt Leave Req (0x0034)",
            Self::ManagementLeaveResponse => "Mgmt Leave Resp (0x8034)",
            Self::ManagementPermitJoinRequest => "Mgmt Permit Join Req (0x0036)",
            Self::ManagementPermitJoinResponse => "Mgmt Permit Join Resp (0x8036)",
            Self::ManagementNetworkUpdateRequest => "Mgmt Network Update Req (0x0038)",
            Self::ManagementNetworkUpdateNotify => "Mgmt Network Update Notify (0x8038)",
        }
    }
}

impl From<ClusterId> for u16 {
    fn from(cluster: ClusterId) -> Self {
        cluster as Self
    }
}

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Returns the description of a cluster, or a placeholder for unknown ids.
///
/// ```
/// assert_eq!(zdo::cluster_description(0x0021), "Bind Req (0x0021)");
/// assert_eq!(zdo::cluster_description(0x1234), "??? 0x1234 ???");
/// ```
#[must_use]
pub fn cluster_description(id: u16) -> String {
    ClusterId::from_u16(id).map_or_else(
        || format!("??? 0x{} ???", hex16(id)),
        |cluster| cluster.description().to_owned(),
    )
}

/// Returns true for a string of 2 or 4 hex digits.
fn is_hex_id(s: &str) -> bool {
    matches!(s.len(), 2 | 4) && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// A cluster identifier as supplied by a caller.
///
/// Callers may name a cluster by number, by hex string or by symbolic ZCL
/// name. [`ClusterRef::as_int`] normalizes all three to a `u16`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClusterRef {
    /// Numeric id.
    Id(u16),
    /// Hex string, most significant byte first (`"0021"`).
    Hex(String),
    /// Symbolic name resolved through a [`ClusterLookup`].
    Name(String),
}

impl ClusterRef {
    /// Classifies a string as a hex id or a symbolic name.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        if is_hex_id(s) {
            Self::Hex(s.to_owned())
        } else {
            Self::Name(s.to_owned())
        }
    }

    /// Integer form of the id, or `None` if it cannot be resolved.
    #[must_use]
    pub fn as_int<L: ClusterLookup + ?Sized>(&self, lookup: &L) -> Option<u16> {
        match self {
            Self::Id(id) => Some(*id),
            Self::Hex(s) if is_hex_id(s) => u16::from_str_radix(s, 16).ok(),
            Self::Hex(_) => None,
            Self::Name(name) => lookup.id_by_name(name),
        }
    }

    /// Integer form of the id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnresolvedCluster`] if the id cannot be resolved.
    pub fn resolve<L: ClusterLookup + ?Sized>(&self, lookup: &L) -> Result<u16> {
        self.as_int(lookup).ok_or_else(|| Error::UnresolvedCluster {
            input: self.to_string(),
        })
    }

    /// String form: numeric ids become 4 hex digits, strings pass through.
    #[must_use]
    pub fn as_hex_string(&self) -> String {
        match self {
            Self::Id(id) => hex16(*id),
            Self::Hex(s) | Self::Name(s) => s.clone(),
        }
    }

    /// Description of the referenced ZDO cluster.
    #[must_use]
    pub fn description<L: ClusterLookup + ?Sized>(&self, lookup: &L) -> String {
        match self.as_int(lookup) {
            Some(id) => cluster_description(id),
            None => format!("??? 0x{self} ???"),
        }
    }
}

impl fmt::Display for ClusterRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_hex_string())
    }
}

impl From<u16> for ClusterRef {
    fn from(id: u16) -> Self {
        Self::Id(id)
    }
}

impl From<ClusterId> for ClusterRef {
    fn from(cluster: ClusterId) -> Self {
        Self::Id(cluster.as_u16())
    }
}

impl From<&str> for ClusterRef {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

/// A transport profile identifier, numeric or hex string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProfileRef {
    /// Numeric id.
    Id(u16),
    /// Hex string (`"0000"`).
    Hex(String),
}

impl ProfileRef {
    /// Returns true if this is the ZDO profile (numeric 0 or `"0000"`).
    #[must_use]
    pub fn is_zdo(&self) -> bool {
        match self {
            Self::Id(id) => *id == ZDO_PROFILE_ID,
            Self::Hex(s) => s == ZDO_PROFILE_ID_HEX,
        }
    }
}

impl From<u16> for ProfileRef {
    fn from(id: u16) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for ProfileRef {
    fn from(s: &str) -> Self {
        Self::Hex(s.to_owned())
    }
}
