//! The frame descriptor shared by the builder and the parser.

use bytes::Bytes;

use crate::protocol::{ClusterId, ClusterRef, ProfileRef};
use crate::types::descriptor::{
    ActiveEndpointsResponse, DescriptorRequest, MatchDescriptorRequest, MatchDescriptorResponse,
    NodeDescriptorResponse, SimpleDescriptorRequest, SimpleDescriptorResponse,
};
use crate::types::device::{
    AddressResponse, EndDeviceAnnouncement, IeeeAddressRequest, NetworkAddressRequest,
};
use crate::types::management::{
    Binding, BindingTableResponse, LeaveRequest, NeighborTableResponse, NetworkUpdateNotify,
    NetworkUpdateRequest, PermitJoinRequest, RoutingTableResponse, StatusResponse, TableRequest,
};

/// Cluster-specific content of a ZDO frame, one variant per cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZdoPayload {
    NetworkAddressRequest(NetworkAddressRequest),
    NetworkAddressResponse(AddressResponse),
    IeeeAddressRequest(IeeeAddressRequest),
    IeeeAddressResponse(AddressResponse),
    NodeDescriptorRequest(DescriptorRequest),
    NodeDescriptorResponse(NodeDescriptorResponse),
    SimpleDescriptorRequest(SimpleDescriptorRequest),
    SimpleDescriptorResponse(SimpleDescriptorResponse),
    ActiveEndpointsRequest(DescriptorRequest),
    ActiveEndpointsResponse(ActiveEndpointsResponse),
    MatchDescriptorRequest(MatchDescriptorRequest),
    MatchDescriptorResponse(MatchDescriptorResponse),
    EndDeviceAnnouncement(EndDeviceAnnouncement),
    BindRequest(Binding),
    BindResponse(StatusResponse),
    ManagementLqiRequest(TableRequest),
    ManagementLqiResponse(NeighborTableResponse),
    ManagementRtgRequest(TableRequest),
    ManagementRtgResponse(RoutingTableResponse),
    ManagementBindRequest(TableRequest),
    ManagementBindResponse(BindingTableResponse),
    ManagementLeaveRequest(LeaveRequest),
    ManagementLeaveResponse(StatusResponse),
    ManagementPermitJoinRequest(PermitJoinRequest),
    ManagementPermitJoinResponse(StatusResponse),
    ManagementNetworkUpdateRequest(NetworkUpdateRequest),
    ManagementNetworkUpdateNotify(NetworkUpdateNotify),
}

impl ZdoPayload {
    /// The cluster this payload belongs to.
    #[must_use]
    pub const fn cluster(&self) -> ClusterId {
        match self {
            Self::NetworkAddressRequest(_) => ClusterId::NetworkAddressRequest,
            Self::NetworkAddressResponse(_) => ClusterId::NetworkAddressResponse,
            Self::IeeeAddressRequest(_) => ClusterId::IeeeAddressRequest,
            Self::IeeeAddressResponse(_) => ClusterId::IeeeAddressResponse,
            Self::NodeDescriptorRequest(_) => ClusterId::NodeDescriptorRequest,
            Self::NodeDescriptorResponse(_) => ClusterId::NodeDescriptorResponse,
            Self::SimpleDescriptorRequest(_) => ClusterId::SimpleDescriptorRequest,
            Self::SimpleDescriptorResponse(_) => ClusterId::SimpleDescriptorResponse,
            Self::ActiveEndpointsRequest(_) => ClusterId::ActiveEndpointsRequest,
            Self::ActiveEndpointsResponse(_) => ClusterId::ActiveEndpointsResponse,
            Self::MatchDescriptorRequest(_) => ClusterId::MatchDescriptorRequest,
            Self::MatchDescriptorResponse(_) => ClusterId::MatchDescriptorResponse,
            Self::EndDeviceAnnouncement(_) => ClusterId::EndDeviceAnnouncement,
            Self::BindRequest(_) => ClusterId::BindRequest,
            Self::BindResponse(_) => ClusterId::BindResponse,
            Self::ManagementLqiRequest(_) => ClusterId::ManagementLqiRequest,
            Self::ManagementLqiResponse(_) => ClusterId::ManagementLqiResponse,
            Self::ManagementRtgRequest(_) => ClusterId::ManagementRtgRequest,
            Self::ManagementRtgResponse(_) => ClusterId::ManagementRtgResponse,
            Self::ManagementBindRequest(_) => ClusterId::ManagementBindRequest,
            Self::ManagementBindResponse(_) => ClusterId::ManagementBindResponse,
            Self::ManagementLeaveRequest(_) => ClusterId::ManagementLeaveRequest,
            Self::ManagementLeaveResponse(_) => ClusterId::ManagementLeaveResponse,
            Self::ManagementPermitJoinRequest(_) => ClusterId::ManagementPermitJoinRequest,
            Self::ManagementPermitJoinResponse(_) => ClusterId::ManagementPermitJoinResponse,
            Self::ManagementNetworkUpdateRequest(_) => ClusterId::ManagementNetworkUpdateRequest,
            Self::ManagementNetworkUpdateNotify(_) => ClusterId::ManagementNetworkUpdateNotify,
        }
    }

    /// Status byte of a response payload; `None` for requests.
    ///
    /// Use [`crate::ZdoStatus::from_byte`] to classify it.
    #[must_use]
    pub const fn status(&self) -> Option<u8> {
        match self {
            Self::NetworkAddressResponse(r) | Self::IeeeAddressResponse(r) => Some(r.status),
            Self::NodeDescriptorResponse(r) => Some(r.status),
            Self::SimpleDescriptorResponse(r) => Some(r.status),
            Self::ActiveEndpointsResponse(r) => Some(r.status),
            Self::MatchDescriptorResponse(r) => Some(r.status),
            Self::BindResponse(r)
            | Self::ManagementLeaveResponse(r)
            | Self::ManagementPermitJoinResponse(r) => Some(r.status),
            Self::ManagementLqiResponse(r) => Some(r.status),
            Self::ManagementRtgResponse(r) => Some(r.status),
            Self::ManagementBindResponse(r) => Some(r.status),
            Self::ManagementNetworkUpdateNotify(r) => Some(r.status),
            _ => None,
        }
    }
}

/// A ZDO frame as handed to the builder or returned by the parser.
///
/// The transport-level fields (`id`, `frame_type`, endpoints, profile) are
/// stamped by [`crate::FrameBuilder`] for outgoing frames. For incoming
/// frames the caller supplies `cluster_id` and `data`, and
/// [`crate::decode`] fills in `zdo_seq` and `payload`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZdoFrame {
    /// Transport frame id.
    pub id: Option<u8>,
    /// Transport frame type tag.
    pub frame_type: Option<u8>,
    /// Destination extended address.
    pub destination64: Option<String>,
    /// Destination short address (`"fffe"` when unknown).
    pub destination16: Option<String>,
    pub source_endpoint: Option<u8>,
    pub destination_endpoint: Option<u8>,
    pub profile_id: Option<ProfileRef>,
    pub cluster_id: Option<ClusterRef>,
    /// ZDO transaction sequence number.
    pub zdo_seq: Option<u8>,
    /// Raw payload, sequence number included.
    pub data: Option<Bytes>,
    pub payload: Option<ZdoPayload>,
}

impl ZdoFrame {
    /// Creates an outgoing frame for `payload`, addressed by cluster id.
    #[must_use]
    pub fn request(payload: ZdoPayload) -> Self {
        Self {
            cluster_id: Some(payload.cluster().into()),
            payload: Some(payload),
            ..Self::default()
        }
    }

    /// Creates an incoming frame from a received payload.
    #[must_use]
    pub fn received(cluster_id: impl Into<ClusterRef>, data: impl Into<Bytes>) -> Self {
        Self {
            cluster_id: Some(cluster_id.into()),
            data: Some(data.into()),
            ..Self::default()
        }
    }

    /// Sets the destination extended address.
    #[must_use]
    pub fn with_destination64(mut self, addr: impl Into<String>) -> Self {
        self.destination64 = Some(addr.into());
        self
    }

    /// Sets the destination short address.
    #[must_use]
    pub fn with_destination16(mut self, addr: impl Into<String>) -> Self {
        self.destination16 = Some(addr.into());
        self
    }

    /// Sets the sequence number, so a rebuild reuses it.
    #[must_use]
    pub const fn with_zdo_seq(mut self, seq: u8) -> Self {
        self.zdo_seq = Some(seq);
        self
    }

    /// Returns true if the frame's profile id is the ZDO profile.
    #[must_use]
    pub fn is_zdo(&self) -> bool {
        self.profile_id.as_ref().is_some_and(ProfileRef::is_zdo)
    }
}
