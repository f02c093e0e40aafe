//! Shared fixtures: a fake sysfs tree and a stub udevadm script.
#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;

pub const BRIDGE_MODALIAS: &str = "pci:v00008086d000015F9sv000017AAsd0000505Bbc06sc04i00\n";
pub const NIC_MODALIAS: &str = "pci:v00008086d00001533sv000015D9sd00001533bc02sc00i00\n";

/// Stub that answers like the net_id builtin for a fixed set of devices and
/// fails for everything else.
pub const STUB_UDEVADM: &str = r#"#!/bin/sh
# args: test-builtin net_id <sysfs path>
dev=$(basename "$3")
case "$dev" in
  eth0)
    printf 'ID_NET_NAMING_SCHEME=v238\n'
    printf 'ID_NET_NAME_SLOT=ens1f0\n'
    printf 'ID_NET_NAME_PATH=enp1s0f0\n'
    ;;
  eno1)
    printf 'ID_NET_NAMING_SCHEME=v238\n'
    printf 'ID_NET_NAME_ONBOARD=eno1\n'
    printf 'ID_NET_NAME_PATH=enp0s31f6\n'
    ;;
  ethlong0)
    printf 'ID_NET_NAMING_SCHEME=v238\n'
    printf 'ID_NET_NAME_SLOT=ens9\n'
    printf 'ID_NET_NAME_PATH=en9\n'
    ;;
  *)
    exit 1
    ;;
esac
"#;

pub fn netid_migrate() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("netid-migrate"))
}

pub fn add_physical(sys_net: &Path, name: &str, modalias: &str) {
    let device = sys_net.join(name).join("device");
    fs::create_dir_all(&device).expect("create device dir");
    fs::write(device.join("modalias"), modalias).expect("write modalias");
}

pub fn add_virtual(sys_net: &Path, name: &str) {
    fs::create_dir_all(sys_net.join(name)).expect("create interface dir");
}

pub fn write_stub_udevadm(dir: &Path) -> PathBuf {
    let path = dir.join("udevadm");
    fs::write(&path, STUB_UDEVADM).expect("write stub");
    let mut perms = fs::metadata(&path).expect("stat stub").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("chmod stub");
    path
}
