//! ZDO response status codes.

/// Status byte carried by ZDO responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ZdoStatus {
    /// Request completed.
    Success = 0x00,
    /// Request type was not recognised.
    InvalidRequestType = 0x80,
    /// Addressed device is not known.
    DeviceNotFound = 0x81,
    /// Endpoint outside 0x01-0xf0.
    InvalidEndpoint = 0x82,
    /// Endpoint has no simple descriptor.
    NotActive = 0x83,
    /// Optional request not supported by the device.
    NotSupported = 0x84,
    /// Operation timed out.
    Timeout = 0x85,
    /// No descriptor matched the request.
    NoMatch = 0x86,
    /// Unbind found no matching entry.
    NoEntry = 0x88,
    /// Descriptor is not available.
    NoDescriptor = 0x89,
    /// Not enough space for the request.
    InsufficientSpace = 0x8a,
    /// Request not permitted.
    NotPermitted = 0x8b,
    /// Table is full.
    TableFull = 0x8c,
    /// Request not authorized.
    NotAuthorized = 0x8d,
}

impl ZdoStatus {
    /// Attempts to parse a status from a byte.
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x00 => Some(Self::Success),
            0x80 => Some(Self::InvalidRequestType),
            0x81 => Some(Self::DeviceNotFound),
            0x82 => Some(Self::InvalidEndpoint),
            0x83 => Some(Self::NotActive),
            0x84 => Some(Self::NotSupported),
            0x85 => Some(Self::Timeout),
            0x86 => Some(Self::NoMatch),
            0x88 => Some(Self::NoEntry),
            0x89 => Some(Self::NoDescriptor),
            0x8a => Some(Self::InsufficientSpace),
            0x8b => Some(Self::NotPermitted),
            0x8c => Some(Self::TableFull),
            0x8d => Some(Self::NotAuthorized),
            _ => None,
        }
    }

    /// Returns true for [`ZdoStatus::Success`].
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    /// Upper-case name as used in the Zigbee specification.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::InvalidRequestType => "INV_REQUESTTYPE",
            Self::DeviceNotFound => "DEVICE_NOT_FOUND",
            Self::InvalidEndpoint => "INVALID_EP",
            Self::NotActive => "NOT_ACTIVE",
            Self::NotSupported => "NOT_SUPPORTED",
            Self::Timeout => "TIMEOUT",
            Self::NoMatch => "NO_MATCH",
            Self::NoEntry => "NO_ENTRY",
            Self::NoDescriptor => "NO_DESCRIPTOR",
            Self::InsufficientSpace => "INSUFFICIENT_SPACE",
            Self::NotPermitted => "NOT_PERMITTED",
            Self::TableFull => "TABLE_FULL",
            Self::NotAuthorized => "NOT_AUTHORIZED",
        }
    }
}

impl From<ZdoStatus> for u8 {
    fn from(status: ZdoStatus) -> Self {
        status as Self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_byte() {
        assert_eq!(ZdoStatus::from_byte(0x00), Some(ZdoStatus::Success));
        assert_eq!(ZdoStatus::from_byte(0x84), Some(ZdoStatus::NotSupported));
        assert_eq!(ZdoStatus::from_byte(0x87), None);
        assert_eq!(ZdoStatus::from_byte(0xff), None);
    }

    #[test]
    fn test_status_values() {
        assert_eq!(u8::from(ZdoStatus::DeviceNotFound), 0x81);
        assert_eq!(u8::from(ZdoStatus::NotAuthorized), 0x8d);
        assert!(ZdoStatus::Success.is_success());
        assert!(!ZdoStatus::TableFull.is_success());
        assert_eq!(ZdoStatus::InvalidEndpoint.name(), "INVALID_EP");
    }
}
