use anyhow::Result;
use netid_migrate::plan::build_plan;
use netid_migrate::report::render_plan_text;
use netid_migrate::sysfs::SysfsNet;
use netid_migrate::udev::UdevAdm;

use crate::cli::{OutputFormat, ScanArgs};

pub fn run_scan(args: ScanArgs) -> Result<()> {
    let sysfs = SysfsNet::new(&args.sys_net);
    let source = UdevAdm::new(&args.udevadm, sysfs.clone());
    let plan = build_plan(&sysfs, &source, &args.scheme)?;

    match args.format {
        OutputFormat::Text => println!("{}", render_plan_text(&plan)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&plan)?),
    }
    Ok(())
}
