//! udev `net_id` attribute parsing and rename-migration primitives used by
//! higher-level tools.

pub mod attrs;
pub mod decision;
pub mod modalias;
pub mod rewrite;

pub use attrs::{parse_attributes, AttributeSet, MIGRATED_SCHEME};
pub use decision::{evaluate, Decision, DecisionError, DeviceCandidate, RenamePair};
pub use modalias::is_pci_bridge;
pub use rewrite::{apply_rename, apply_renames, RewriteError};
