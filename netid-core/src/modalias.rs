//! PCI-bridge detection from a device's modalias string.

use once_cell::sync::Lazy;
use regex::Regex;

// PCI modalias with subclass 04 (bridge), e.g.
// pci:v00008086d000015F9sv000017AAsd0000505Bbc06sc04i00
static PCI_BRIDGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"pci:.*sc04").expect("pci bridge pattern"));

/// Whether a modalias string identifies a device attached via a PCI bridge.
pub fn is_pci_bridge(modalias: &str) -> bool {
    PCI_BRIDGE_RE.is_match(modalias)
}
