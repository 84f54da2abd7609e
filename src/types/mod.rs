//! Typed ZDO payloads.
//!
//! This module contains the records carried by each cluster:
//! - Address discovery and device announcements
//! - Node, simple and active endpoint descriptors
//! - Bindings, management tables and network updates
//! - The [`ZdoFrame`] descriptor itself

pub mod descriptor;
pub mod device;
pub mod frame;
pub mod management;

pub use descriptor::{
    ActiveEndpointsResponse, DescriptorRequest, ManufacturerInfo, MatchDescriptorRequest,
    MatchDescriptorResponse, NodeDescriptorResponse, SimpleDescriptor, SimpleDescriptorRequest,
    SimpleDescriptorResponse,
};
pub use device::{
    AddressResponse, CapabilityFlags, EndDeviceAnnouncement, IeeeAddressRequest,
    NetworkAddressRequest,
};
pub use frame::{ZdoFrame, ZdoPayload};
pub use management::{
    Binding, BindingTableResponse, LeaveRequest, Neighbor, NeighborTableResponse,
    NetworkUpdateNotify, NetworkUpdateRequest, PermitJoinRequest, Route, RoutingTableResponse,
    StatusResponse, TableRequest,
};
