//! Host-side plumbing for udev naming-scheme migration.
//!
//! The decision and rewrite logic lives in `netid-core`; this crate supplies
//! everything that touches the machine:
//!
//! - [`sysfs`] — enumerate network interfaces and read modalias text
//! - [`udev`] — query naming attributes via `udevadm test-builtin net_id`
//! - [`plan`] — run the decision chain over every device and collect outcomes
//! - [`report`] — terminal and JSON rendering of a migration plan
//! - [`backup`] — timestamped config backup taken before any write-back

pub mod backup;
pub mod plan;
pub mod report;
pub mod sysfs;
pub mod udev;
