use std::io;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::Error;
use crate::Result;

/// Root schema for kiln.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Directory layout and artifact names
    pub project: ProjectConfig,

    /// External toolchain programs
    pub tools: Tools,

    /// Flag sets passed to the tools
    pub flags: Flags,

    /// OS packages the toolchain needs, for `kiln install`
    pub packages: Vec<String>,
}

impl Manifest {
    /// Load a manifest from disk.
    ///
    /// A missing file is not an error: the defaults apply. Anything else
    /// that goes wrong (unreadable file, invalid TOML, failed validation)
    /// is reported with source context.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => return Err(Error::io(path, err)),
        };

        let filename = path.display().to_string();
        Self::from_str_with_filename(&content, &filename)
    }

    /// Parse and validate manifest content, attributing errors to `filename`.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let manifest: Manifest =
            toml::from_str(content).map_err(|err| Error::parse(err, content, filename))?;
        manifest.validate(content, filename)?;
        Ok(manifest)
    }

    fn validate(&self, src: &str, filename: &str) -> Result<()> {
        if self.project.src_dir.is_empty() {
            return Err(Error::validation("project.src_dir must not be empty", src, filename));
        }
        if self.project.build_dir.is_empty() {
            return Err(Error::validation(
                "project.build_dir must not be empty",
                src,
                filename,
            ));
        }
        // clean removes build_dir recursively; aliasing it to src_dir would
        // delete the sources.
        if self.project.build_dir == self.project.src_dir {
            return Err(Error::validation(
                "project.build_dir must differ from project.src_dir",
                src,
                filename,
            ));
        }
        if self.project.source_ext.is_empty() || self.project.source_ext.starts_with('.') {
            return Err(Error::validation(
                "project.source_ext must be a bare extension, e.g. \"py\"",
                src,
                filename,
            ));
        }
        Ok(())
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            project: ProjectConfig::default(),
            tools: Tools::default(),
            flags: Flags::default(),
            packages: vec![
                "gcc".to_string(),
                "nasm".to_string(),
                "qemu-system-x86".to_string(),
                "python3".to_string(),
            ],
        }
    }
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "kiln.toml")
    }
}

/// The `[project]` section: where sources live and what the outputs are
/// called.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub src_dir: String,
    pub build_dir: String,
    pub binary: String,
    pub image: String,
    /// Extension of high-level sources, without the dot.
    pub source_ext: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            src_dir: "src".to_string(),
            build_dir: "build".to_string(),
            binary: "kernel.elf".to_string(),
            image: "kernel.iso".to_string(),
            source_ext: "py".to_string(),
        }
    }
}

/// The `[tools]` section: the external programs each stage invokes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Tools {
    pub transpiler: String,
    pub compiler: String,
    pub assembler: String,
    pub linker: String,
    pub image_builder: String,
    pub emulator: String,
}

impl Default for Tools {
    fn default() -> Self {
        Self {
            transpiler: "thirdparty/snek/snek.py".to_string(),
            compiler: "gcc".to_string(),
            assembler: "nasm".to_string(),
            linker: "ld".to_string(),
            image_builder: "scripts/make_image.py".to_string(),
            emulator: "qemu-system-x86_64".to_string(),
        }
    }
}

/// The `[flags]` section: fixed, ordered flag lists per tool.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Flags {
    pub compile: Vec<String>,
    pub assemble: Vec<String>,
    pub link: Vec<String>,
    pub emulator: Vec<String>,
}

impl Default for Flags {
    fn default() -> Self {
        Self {
            compile: [
                "-O2",
                "-Wall",
                "-I.",
                "-std=gnu11",
                "-ffreestanding",
                "-fno-stack-protector",
                "-fno-pic",
                "-mabi=sysv",
                "-mno-80387",
                "-mno-mmx",
                "-mno-3dnow",
                "-mno-sse",
                "-mno-sse2",
                "-mno-red-zone",
                "-mcmodel=kernel",
            ]
            .map(String::from)
            .to_vec(),
            assemble: vec!["-felf64".to_string()],
            link: [
                "-Tsrc/linker.ld",
                "-nostdlib",
                "-zmax-page-size=0x1000",
                "-static",
            ]
            .map(String::from)
            .to_vec(),
            emulator: ["-M", "q35", "-m", "2G"].map(String::from).to_vec(),
        }
    }
}
