//! Install operation - fetch the toolchain through the OS package manager.

use std::path::Path;
use std::process::Command;

use eyre::{Result, WrapErr, bail};
use kiln_manifest::Manifest;

use crate::reports::InstallReport;

/// Execute the install operation.
///
/// Picks the package manager for the host OS (apt-get or yum on Linux,
/// brew on macOS) and installs the manifest's package list. Anything else
/// is unsupported; the packages must then be installed manually.
pub fn install(manifest: &Manifest) -> Result<InstallReport> {
    let packages = &manifest.packages;

    if cfg!(target_os = "linux") {
        let manager = if Path::new("/usr/bin/apt-get").exists() {
            "apt-get"
        } else {
            "yum"
        };
        run_checked(Command::new("sudo").args([manager, "update"]))?;
        run_checked(
            Command::new("sudo")
                .args([manager, "install", "-y"])
                .args(packages),
        )?;
        Ok(InstallReport {
            manager: manager.to_string(),
            packages: packages.clone(),
        })
    } else if cfg!(target_os = "macos") {
        run_checked(Command::new("brew").arg("install").args(packages))?;
        Ok(InstallReport {
            manager: "brew".to_string(),
            packages: packages.clone(),
        })
    } else {
        bail!("unsupported OS: install {} manually", packages.join(", "));
    }
}

/// Run a package-manager command to completion, inheriting the terminal,
/// and fail on a non-zero exit.
fn run_checked(command: &mut Command) -> Result<()> {
    let status = command
        .status()
        .wrap_err_with(|| format!("failed to run {:?}", command.get_program()))?;

    if !status.success() {
        bail!("{:?} exited with {status}", command.get_program());
    }
    Ok(())
}
