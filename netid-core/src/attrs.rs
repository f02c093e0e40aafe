//! Parsing of `udevadm test-builtin net_id` output into an attribute set.
//!
//! The builtin prints line-oriented `KEY=VALUE` text. Only four markers matter
//! for migration; each one is independently present or absent, and absence is
//! meaningful to the decision chain (see [`crate::decision`]).

/// Naming scheme being migrated away from.
pub const MIGRATED_SCHEME: &str = "v238";

/// `KEY` carrying the naming-scheme version token.
pub const NAMING_SCHEME_KEY: &str = "ID_NET_NAMING_SCHEME";
/// `KEY` carrying an onboard-derived name.
pub const NAME_ONBOARD_KEY: &str = "ID_NET_NAME_ONBOARD";
/// `KEY` carrying a slot-derived name.
pub const NAME_SLOT_KEY: &str = "ID_NET_NAME_SLOT";
/// `KEY` carrying a topology-path-derived name.
pub const NAME_PATH_KEY: &str = "ID_NET_NAME_PATH";

/// Naming attributes reported for one network device.
///
/// No field is guaranteed present: virtual devices report nothing useful, and
/// physical devices report whichever name forms the hardware topology allows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSet {
    pub naming_scheme: Option<String>,
    pub name_onboard: Option<String>,
    pub name_slot: Option<String>,
    pub name_path: Option<String>,
}

/// Parse `KEY=VALUE` attribute text into an [`AttributeSet`].
///
/// Unknown keys are ignored. A marker key with an empty value is treated as
/// absent; udev never emits empty name properties, but truncated output
/// should not masquerade as a usable name.
pub fn parse_attributes(text: &str) -> AttributeSet {
    let mut out = AttributeSet::default();
    for line in text.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        match key.trim() {
            NAMING_SCHEME_KEY => out.naming_scheme = Some(value.to_string()),
            NAME_ONBOARD_KEY => out.name_onboard = Some(value.to_string()),
            NAME_SLOT_KEY => out.name_slot = Some(value.to_string()),
            NAME_PATH_KEY => out.name_path = Some(value.to_string()),
            _ => {}
        }
    }
    out
}
