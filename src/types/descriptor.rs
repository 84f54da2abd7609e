//! Descriptor and endpoint discovery records.

use crate::types::device::CapabilityFlags;

/// Node descriptor (0x0002) or active endpoints (0x0005) request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptorRequest {
    /// Short address of interest; `None` uses the frame's `destination16`.
    pub addr16: Option<String>,
}

impl DescriptorRequest {
    /// Request about the node at `addr16`.
    #[must_use]
    pub fn new(addr16: impl Into<String>) -> Self {
        Self {
            addr16: Some(addr16.into()),
        }
    }
}

/// Simple descriptor request (0x0004).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleDescriptorRequest {
    /// Short address of interest; `None` uses the frame's `destination16`.
    pub addr16: Option<String>,
    pub endpoint: u8,
}

/// Manufacturer block trailing a node descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManufacturerInfo {
    pub manufacturer_code: String,
    pub max_buffer_size: u8,
    pub max_incoming_transfer_size: u16,
    pub server_mask: u16,
    pub max_outgoing_transfer_size: u16,
    pub descriptor_capabilities: u8,
}

/// Node descriptor response (0x8002).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDescriptorResponse {
    pub status: u8,
    pub addr16: String,
    /// 0 = coordinator, 1 = router, 2 = end device.
    pub logical_type: u8,
    pub complex_descriptor_available: bool,
    pub user_descriptor_available: bool,
    /// Bit mask of supported bands (bit 0 = 868 MHz, bit 2 = 902 MHz, bit 3 = 2.4 GHz).
    pub frequency_band: u8,
    pub mac_capability_flags: CapabilityFlags,
    /// Absent when the response stops after the capability byte.
    pub manufacturer: Option<ManufacturerInfo>,
}

/// Body of a simple descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleDescriptor {
    pub endpoint: u8,
    pub app_profile_id: String,
    pub app_device_id: String,
    pub app_device_version: u8,
    pub input_clusters: Vec<String>,
    pub output_clusters: Vec<String>,
}

/// Simple descriptor response (0x8004).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleDescriptorResponse {
    pub status: u8,
    pub addr16: String,
    /// Declared descriptor length, 0 if the response carries none.
    pub descriptor_length: u8,
    pub descriptor: Option<SimpleDescriptor>,
}

impl SimpleDescriptorResponse {
    /// Input clusters, empty when no descriptor was returned.
    #[must_use]
    pub fn input_clusters(&self) -> &[String] {
        self.descriptor
            .as_ref()
            .map(|d| d.input_clusters.as_slice())
            .unwrap_or_default()
    }

    /// Output clusters, empty when no descriptor was returned.
    #[must_use]
    pub fn output_clusters(&self) -> &[String] {
        self.descriptor
            .as_ref()
            .map(|d| d.output_clusters.as_slice())
            .unwrap_or_default()
    }
}

/// Active endpoints response (0x8005).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveEndpointsResponse {
    pub status: u8,
    pub addr16: String,
    pub active_endpoints: Vec<u8>,
}

/// Match descriptor request (0x0006).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchDescriptorRequest {
    pub addr16: String,
    pub profile_id: String,
    pub input_clusters: Vec<String>,
    pub output_clusters: Vec<String>,
}

/// Match descriptor response (0x8006).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchDescriptorResponse {
    pub status: u8,
    pub addr16: String,
    pub endpoints: Vec<u8>,
}
