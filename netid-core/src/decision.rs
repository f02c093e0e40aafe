//! The migration decision chain.
//!
//! For each enumerated device the question is "does this interface need its
//! persisted name rewritten?". The answer is a strictly ordered exclusion
//! chain: the first rule that fires decides the outcome, and later rules are
//! never consulted. [`evaluate`] is pure over its inputs so the chain can be
//! exercised without sysfs or udevadm.

use serde::Serialize;
use thiserror::Error;

use crate::attrs::AttributeSet;
use crate::modalias::is_pci_bridge;

/// One enumerated network interface, before any attribute query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceCandidate {
    pub name: String,
    /// Presence of the `device` entry under the interface's sysfs directory.
    /// Physical interfaces link to their backing hardware device; virtual
    /// ones (bridges, bonds, vlans, loopback) do not.
    pub has_device_link: bool,
}

impl DeviceCandidate {
    pub fn new(name: impl Into<String>, has_device_link: bool) -> Self {
        Self {
            name: name.into(),
            has_device_link,
        }
    }
}

/// One accepted migration: rewrite `old_name` to `new_name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenamePair {
    pub old_name: String,
    pub new_name: String,
}

/// Outcome of the decision chain for one device, in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// No `device` link: virtual interface, nothing to migrate.
    NotPhysical,
    /// Device is not named under the scheme being migrated away from.
    SchemeMismatch,
    /// Onboard-named devices are exempt by policy.
    OnboardNamed,
    /// No slot name reported: nothing to migrate from.
    NoSlotName,
    /// Current name already equals the path name; migration already done.
    AlreadyPathNamed,
    /// Modalias lacks the PCI-bridge class signature.
    NotPciBridge,
    /// Accepted: rewrite the current name to the path name.
    NeedsMigration(RenamePair),
}

impl Decision {
    /// Stable outcome code for reports.
    pub fn code(&self) -> &'static str {
        match self {
            Decision::NotPhysical => "not_physical",
            Decision::SchemeMismatch => "scheme_mismatch",
            Decision::OnboardNamed => "onboard_named",
            Decision::NoSlotName => "no_slot_name",
            Decision::AlreadyPathNamed => "already_path_named",
            Decision::NotPciBridge => "not_pci_bridge",
            Decision::NeedsMigration(_) => "needs_migration",
        }
    }

    pub fn rename(&self) -> Option<&RenamePair> {
        match self {
            Decision::NeedsMigration(pair) => Some(pair),
            _ => None,
        }
    }
}

/// Malformed attribute sets the chain refuses to guess about.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecisionError {
    /// udev reported a slot name but no path name. The two are expected
    /// together for slot-named PCI devices; when the path name is missing
    /// there is no migration target and silently proceeding would be wrong.
    #[error("device {device}: slot name {slot} present but no path name reported")]
    MissingPathName { device: String, slot: String },
}

/// Run the ordered exclusion chain for one device.
///
/// `modalias` is the raw modalias text of the backing device, if readable; it
/// is only consulted once every cheaper rule has passed. `scheme` is the
/// naming-scheme token being migrated away from (normally
/// [`crate::attrs::MIGRATED_SCHEME`]).
pub fn evaluate(
    candidate: &DeviceCandidate,
    attrs: &AttributeSet,
    modalias: Option<&str>,
    scheme: &str,
) -> Result<Decision, DecisionError> {
    if !candidate.has_device_link {
        return Ok(Decision::NotPhysical);
    }
    if attrs.naming_scheme.as_deref() != Some(scheme) {
        return Ok(Decision::SchemeMismatch);
    }
    if attrs.name_onboard.is_some() {
        return Ok(Decision::OnboardNamed);
    }
    let Some(slot) = attrs.name_slot.as_deref() else {
        return Ok(Decision::NoSlotName);
    };
    let Some(path) = attrs.name_path.as_deref() else {
        return Err(DecisionError::MissingPathName {
            device: candidate.name.clone(),
            slot: slot.to_string(),
        });
    };
    if candidate.name == path {
        return Ok(Decision::AlreadyPathNamed);
    }
    if !modalias.map(is_pci_bridge).unwrap_or(false) {
        return Ok(Decision::NotPciBridge);
    }
    Ok(Decision::NeedsMigration(RenamePair {
        old_name: candidate.name.clone(),
        new_name: path.to_string(),
    }))
}
