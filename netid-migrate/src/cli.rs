use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Default configuration document rewritten by `migrate`.
pub const DEFAULT_CONFIG: &str = "/oem/99_custom.yaml";

#[derive(Parser, Debug)]
#[command(name = "netid-migrate")]
#[command(about = "Migrate persisted interface names from udev slot names to path names")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Report the migration decision for every network device.
    Scan(ScanArgs),
    /// Rewrite interface references in the config document (dry run unless --commit).
    Migrate(MigrateArgs),
}

#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Network-interface listing directory.
    #[arg(long, default_value = netid_migrate::sysfs::DEFAULT_SYS_NET)]
    pub sys_net: PathBuf,
    /// Attribute query tool.
    #[arg(long, default_value = "udevadm")]
    pub udevadm: PathBuf,
    /// Naming-scheme token being migrated away from.
    #[arg(long, default_value = netid_core::MIGRATED_SCHEME)]
    pub scheme: String,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Configuration document to rewrite.
    #[arg(long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,
    /// Network-interface listing directory.
    #[arg(long, default_value = netid_migrate::sysfs::DEFAULT_SYS_NET)]
    pub sys_net: PathBuf,
    /// Attribute query tool.
    #[arg(long, default_value = "udevadm")]
    pub udevadm: PathBuf,
    /// Naming-scheme token being migrated away from.
    #[arg(long, default_value = netid_core::MIGRATED_SCHEME)]
    pub scheme: String,
    /// Write the rewritten document back after taking a timestamped backup.
    #[arg(long)]
    pub commit: bool,
    /// Do not print the rewritten document on dry run.
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
