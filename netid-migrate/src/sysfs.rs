//! Network-interface enumeration over a sysfs class directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use netid_core::DeviceCandidate;

/// Default listing location for network interfaces.
pub const DEFAULT_SYS_NET: &str = "/sys/class/net";

/// A `class/net` style directory: one subdirectory per interface, with
/// physical interfaces carrying a `device` link to their backing hardware.
#[derive(Debug, Clone)]
pub struct SysfsNet {
    root: PathBuf,
}

impl SysfsNet {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List every interface under the root, sorted by name.
    ///
    /// Directory order is whatever the kernel hands back; sorting makes the
    /// audit output stable across runs.
    pub fn list_candidates(&self) -> Result<Vec<DeviceCandidate>> {
        let entries = fs::read_dir(&self.root)
            .with_context(|| format!("failed to list {}", self.root.display()))?;

        let mut out = Vec::new();
        for entry in entries {
            let entry = entry
                .with_context(|| format!("failed to read entry under {}", self.root.display()))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            let has_device_link = entry.path().join("device").exists();
            out.push(DeviceCandidate::new(name, has_device_link));
        }
        out.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(out)
    }

    /// Read the modalias text of an interface's backing device.
    pub fn read_modalias(&self, device: &str) -> Result<String> {
        let path = self.root.join(device).join("device").join("modalias");
        fs::read_to_string(&path).with_context(|| format!("failed to read {}", path.display()))
    }

    /// Path handed to the attribute query tool for one interface.
    pub fn device_path(&self, device: &str) -> PathBuf {
        self.root.join(device)
    }
}
