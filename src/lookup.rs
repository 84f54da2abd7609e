//! Symbolic names for application-profile (ZCL) clusters.
//!
//! ZDO frames mention application clusters (bind requests, binding tables,
//! simple descriptors). Their human-readable names come from the cluster
//! library, which is outside this crate; [`ClusterLookup`] is the seam.

/// Maps ZCL cluster identifiers to symbolic names and back.
pub trait ClusterLookup {
    /// Returns the cluster id registered under `name`.
    fn id_by_name(&self, name: &str) -> Option<u16>;

    /// Returns the symbolic name of cluster `id`.
    fn name_by_id(&self, id: u16) -> Option<&str>;
}

/// A lookup that knows no clusters.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLookup;

impl ClusterLookup for NoLookup {
    fn id_by_name(&self, _name: &str) -> Option<u16> {
        None
    }

    fn name_by_id(&self, _id: u16) -> Option<&str> {
        None
    }
}

/// Common ZCL clusters keyed the way the cluster library names them.
const ZCL_CLUSTERS: &[(u16, &str)] = &[
    // General
    (0x0000, "genBasic"),
    (0x0001, "genPowerCfg"),
    (0x0002, "genDeviceTempCfg"),
    (0x0003, "genIdentify"),
    (0x0004, "genGroups"),
    (0x0005, "genScenes"),
    (0x0006, "genOnOff"),
    (0x0007, "genOnOffSwitchCfg"),
    (0x0008, "genLevelCtrl"),
    (0x0009, "genAlarms"),
    (0x000a, "genTime"),
    (0x000f, "genBinaryInput"),
    (0x0019, "genOta"),
    (0x0020, "genPollCtrl"),
    // Closures
    (0x0101, "closuresDoorLock"),
    (0x0102, "closuresWindowCovering"),
    // HVAC
    (0x0201, "hvacThermostat"),
    (0x0202, "hvacFanCtrl"),
    // Lighting
    (0x0300, "lightingColorCtrl"),
    (0x0301, "lightingBallastCfg"),
    // Measurement
    (0x0400, "msIlluminanceMeasurement"),
    (0x0401, "msIlluminanceLevelSensing"),
    (0x0402, "msTemperatureMeasurement"),
    (0x0403, "msPressureMeasurement"),
    (0x0404, "msFlowMeasurement"),
    (0x0405, "msRelativeHumidity"),
    (0x0406, "msOccupancySensing"),
    // Security
    (0x0500, "ssIasZone"),
    (0x0501, "ssIasAce"),
    (0x0502, "ssIasWd"),
    // Smart energy
    (0x0702, "seMetering"),
    (0x0b04, "haElectricalMeasurement"),
    (0x0b05, "haDiagnostic"),
];

/// Built-in table of the common ZCL clusters.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZclClusters;

impl ClusterLookup for ZclClusters {
    fn id_by_name(&self, name: &str) -> Option<u16> {
        ZCL_CLUSTERS
            .iter()
            .find(|(_, key)| *key == name)
            .map(|(id, _)| *id)
    }

    fn name_by_id(&self, id: u16) -> Option<&str> {
        ZCL_CLUSTERS
            .iter()
            .find(|(value, _)| *value == id)
            .map(|(_, key)| *key)
    }
}
