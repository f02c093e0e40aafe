//! The migrate run controller: plan, rewrite in memory, then print (dry run)
//! or back up and persist (commit).

use std::fs::OpenOptions;
use std::io::{Read, Seek, SeekFrom, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use netid_core::apply_renames;
use netid_migrate::backup::backup_config;
use netid_migrate::plan::build_plan;
use netid_migrate::report::render_plan_text;
use netid_migrate::sysfs::SysfsNet;
use netid_migrate::udev::UdevAdm;

use crate::cli::MigrateArgs;

pub fn run_migrate(args: MigrateArgs) -> Result<()> {
    // Opening for write up front makes an unwritable document fatal before
    // any device is processed.
    let mut file = OpenOptions::new()
        .read(true)
        .write(args.commit)
        .open(&args.config)
        .with_context(|| format!("failed to open {}", args.config.display()))?;
    let mut origin = String::new();
    file.read_to_string(&mut origin)
        .with_context(|| format!("failed to read {}", args.config.display()))?;

    let sysfs = SysfsNet::new(&args.sys_net);
    let source = UdevAdm::new(&args.udevadm, sysfs.clone());
    let plan = build_plan(&sysfs, &source, &args.scheme)?;
    println!("{}", render_plan_text(&plan));

    // Every accepted rename lands in the buffer before anything is persisted.
    let rewritten = apply_renames(&origin, &plan.renames)?;

    if !args.commit {
        if !args.quiet {
            println!();
            println!("{rewritten}");
        }
        println!(
            "{}",
            format!(
                "dry run: {} rename(s) pending; re-run with --commit to apply",
                plan.renames.len()
            )
            .yellow()
        );
        return Ok(());
    }

    let backup = backup_config(&args.config)?;
    println!("backup {} to {}", args.config.display(), backup.display());

    file.seek(SeekFrom::Start(0))
        .with_context(|| format!("failed to rewind {}", args.config.display()))?;
    file.write_all(rewritten.as_bytes())
        .with_context(|| format!("failed to write {}", args.config.display()))?;
    file.set_len(rewritten.len() as u64)
        .with_context(|| format!("failed to truncate {}", args.config.display()))?;

    println!(
        "{}",
        format!(
            "applied {} rename(s) to {}",
            plan.renames.len(),
            args.config.display()
        )
        .green()
    );
    Ok(())
}
