//! Attribute queries via the udev `net_id` builtin.

use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

use netid_core::{parse_attributes, AttributeSet};
use thiserror::Error;

use crate::sysfs::SysfsNet;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("failed to run {program} for {device}: {source}")]
    Spawn {
        program: String,
        device: String,
        source: std::io::Error,
    },
    #[error("attribute query for {device} exited with {status}")]
    Failed { device: String, status: ExitStatus },
    #[error("attribute query for {device} produced non-UTF-8 output")]
    Encoding { device: String },
}

/// Capability seam for naming-attribute resolution, so the plan builder can
/// be driven by fixtures instead of a live udevadm.
pub trait AttributeSource {
    fn resolve(&self, device: &str) -> Result<AttributeSet, QueryError>;
}

/// Resolves attributes by invoking `udevadm test-builtin net_id` against the
/// interface's sysfs path. Stderr is discarded; only the builtin's stdout is
/// consumed.
#[derive(Debug, Clone)]
pub struct UdevAdm {
    program: PathBuf,
    sysfs: SysfsNet,
}

impl UdevAdm {
    pub fn new(program: impl Into<PathBuf>, sysfs: SysfsNet) -> Self {
        Self {
            program: program.into(),
            sysfs,
        }
    }
}

impl AttributeSource for UdevAdm {
    fn resolve(&self, device: &str) -> Result<AttributeSet, QueryError> {
        let output = Command::new(&self.program)
            .arg("test-builtin")
            .arg("net_id")
            .arg(self.sysfs.device_path(device))
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|source| QueryError::Spawn {
                program: self.program.display().to_string(),
                device: device.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(QueryError::Failed {
                device: device.to_string(),
                status: output.status,
            });
        }

        let text = String::from_utf8(output.stdout).map_err(|_| QueryError::Encoding {
            device: device.to_string(),
        })?;
        Ok(parse_attributes(&text))
    }
}
