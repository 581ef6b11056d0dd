//! Install command report data structures.

use super::output::{Output, Report};

/// Report data from installing the toolchain packages.
#[derive(Debug)]
pub struct InstallReport {
    /// Package manager used.
    pub manager: String,
    /// Packages that were installed.
    pub packages: Vec<String>,
}

impl Report for InstallReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Installed via", &self.manager);
        for package in &self.packages {
            out.list_item(package);
        }
    }
}
