//! Address discovery and device announcement records.

/// MAC capability flags, as carried by device announcements and node
/// descriptors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CapabilityFlags(u8);

impl CapabilityFlags {
    /// No flags set.
    pub const NONE: Self = Self(0);

    /// Device can act as an alternate PAN coordinator.
    pub const ALTERNATE_PAN_COORDINATOR: Self = Self(1 << 0);

    /// Full-function device (router capable).
    pub const FULL_FUNCTION_DEVICE: Self = Self(1 << 1);

    /// Mains powered.
    pub const AC_POWER: Self = Self(1 << 2);

    /// Receiver stays on when idle.
    pub const RX_ON_WHEN_IDLE: Self = Self(1 << 3);

    /// Device supports MAC security.
    pub const SECURITY_CAPABILITY: Self = Self(1 << 6);

    /// Device asks the parent to allocate a short address.
    pub const ALLOC_SHORT_ADDRESS: Self = Self(1 << 7);

    /// Creates flags from a raw byte.
    #[must_use]
    pub const fn from_byte(byte: u8) -> Self {
        Self(byte)
    }

    /// Returns the raw byte value.
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        self.0
    }

    /// Check if a flag is set.
    #[must_use]
    pub const fn contains(self, flag: Self) -> bool {
        (self.0 & flag.0) == flag.0
    }

    #[must_use]
    pub const fn alternate_pan_coordinator(self) -> bool {
        self.contains(Self::ALTERNATE_PAN_COORDINATOR)
    }

    #[must_use]
    pub const fn full_function_device(self) -> bool {
        self.contains(Self::FULL_FUNCTION_DEVICE)
    }

    #[must_use]
    pub const fn ac_power(self) -> bool {
        self.contains(Self::AC_POWER)
    }

    #[must_use]
    pub const fn rx_on_when_idle(self) -> bool {
        self.contains(Self::RX_ON_WHEN_IDLE)
    }

    #[must_use]
    pub const fn security_capability(self) -> bool {
        self.contains(Self::SECURITY_CAPABILITY)
    }

    #[must_use]
    pub const fn alloc_short_address(self) -> bool {
        self.contains(Self::ALLOC_SHORT_ADDRESS)
    }
}

/// Network address request (0x0000): find the short address of `addr64`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkAddressRequest {
    /// Extended address of interest.
    pub addr64: String,
    /// 0 = single device response, 1 = extended (with associated devices).
    pub request_type: u8,
    /// First associated device to report.
    pub start_index: u8,
}

/// IEEE address request (0x0001): find the extended address of `addr16`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IeeeAddressRequest {
    /// Short address of interest.
    pub addr16: String,
    /// 0 = single device response, 1 = extended (with associated devices).
    pub request_type: u8,
    /// First associated device to report.
    pub start_index: u8,
}

/// Network/IEEE address response (0x8000, 0x8001).
///
/// Short responses end after `nwk_addr16`; the associated-device section
/// then reads as zero devices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressResponse {
    pub status: u8,
    /// Extended address of the remote device.
    pub nwk_addr64: String,
    /// Short address of the remote device.
    pub nwk_addr16: String,
    /// Associated device count declared by the responder.
    pub num_assoc_dev: u8,
    pub start_index: u8,
    /// Short addresses of associated devices.
    pub assoc_addr16: Vec<String>,
}

/// End device announcement (0x0013).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndDeviceAnnouncement {
    pub addr16: String,
    pub addr64: String,
    pub capability: CapabilityFlags,
}
