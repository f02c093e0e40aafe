//! Build a migration plan by running the decision chain over every device.
//!
//! Per-device exclusions are expected outcomes, not errors. Query failures
//! and malformed attribute sets are also recorded per device and skipped;
//! only failure to enumerate the interface list aborts a run.

use anyhow::Result;
use netid_core::{evaluate, AttributeSet, Decision, DecisionError, RenamePair};
use serde::Serialize;

use crate::sysfs::SysfsNet;
use crate::udev::AttributeSource;

/// Outcome code for a device whose attribute query failed.
pub const QUERY_FAILED: &str = "query_failed";
/// Outcome code for a device with an inconsistent attribute set.
pub const MALFORMED_ATTRIBUTES: &str = "malformed_attributes";

#[derive(Debug, Clone, Serialize)]
pub struct DeviceOutcome {
    pub device: String,
    pub code: String,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rename: Option<RenamePair>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MigrationPlan {
    /// Naming-scheme token being migrated away from.
    pub scheme: String,
    pub devices: Vec<DeviceOutcome>,
    /// Accepted renames, in device order.
    pub renames: Vec<RenamePair>,
    pub query_failures: usize,
    pub malformed: usize,
}

impl MigrationPlan {
    fn new(scheme: &str) -> Self {
        Self {
            scheme: scheme.to_string(),
            devices: Vec::new(),
            renames: Vec::new(),
            query_failures: 0,
            malformed: 0,
        }
    }
}

/// Enumerate devices and evaluate each one against the decision chain.
pub fn build_plan(
    sysfs: &SysfsNet,
    source: &dyn AttributeSource,
    scheme: &str,
) -> Result<MigrationPlan> {
    let mut plan = MigrationPlan::new(scheme);

    for candidate in sysfs.list_candidates()? {
        // Virtual interfaces are decided without querying udev at all.
        if !candidate.has_device_link {
            record(&mut plan, &candidate.name, &Decision::NotPhysical, None);
            continue;
        }

        let attrs = match source.resolve(&candidate.name) {
            Ok(attrs) => attrs,
            Err(err) => {
                plan.query_failures += 1;
                plan.devices.push(DeviceOutcome {
                    device: candidate.name.clone(),
                    code: QUERY_FAILED.to_string(),
                    detail: err.to_string(),
                    rename: None,
                });
                continue;
            }
        };

        let modalias = sysfs.read_modalias(&candidate.name).ok();
        match evaluate(&candidate, &attrs, modalias.as_deref(), scheme) {
            Ok(decision) => record(&mut plan, &candidate.name, &decision, Some(&attrs)),
            Err(err @ DecisionError::MissingPathName { .. }) => {
                plan.malformed += 1;
                plan.devices.push(DeviceOutcome {
                    device: candidate.name.clone(),
                    code: MALFORMED_ATTRIBUTES.to_string(),
                    detail: err.to_string(),
                    rename: None,
                });
            }
        }
    }

    Ok(plan)
}

fn record(plan: &mut MigrationPlan, device: &str, decision: &Decision, attrs: Option<&AttributeSet>) {
    let detail = describe(decision, attrs, &plan.scheme);
    let rename = decision.rename().cloned();
    if let Some(pair) = &rename {
        plan.renames.push(pair.clone());
    }
    plan.devices.push(DeviceOutcome {
        device: device.to_string(),
        code: decision.code().to_string(),
        detail,
        rename,
    });
}

fn describe(decision: &Decision, attrs: Option<&AttributeSet>, scheme: &str) -> String {
    match decision {
        Decision::NotPhysical => "no device link; virtual interface".to_string(),
        Decision::SchemeMismatch => {
            let found = attrs
                .and_then(|a| a.naming_scheme.as_deref())
                .unwrap_or("none");
            format!("naming scheme {found} is not {scheme}")
        }
        Decision::OnboardNamed => {
            let name = attrs
                .and_then(|a| a.name_onboard.as_deref())
                .unwrap_or("unknown");
            format!("onboard name {name}; exempt by policy")
        }
        Decision::NoSlotName => "no slot name reported; nothing to migrate from".to_string(),
        Decision::AlreadyPathNamed => "already using the path name".to_string(),
        Decision::NotPciBridge => "modalias lacks the PCI bridge signature".to_string(),
        Decision::NeedsMigration(pair) => {
            format!("migrate {} to {}", pair.old_name, pair.new_name)
        }
    }
}
