//! Project conventions: directory layout, tool names, and flag sets.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use kiln_manifest::Manifest;

/// Filesystem conventions for one project.
///
/// All output paths are derived from these by pure transformation; nothing
/// here checks what actually exists on disk.
#[derive(Debug, Clone)]
pub struct Layout {
    /// Directory holding high-level and assembly sources.
    pub src_dir: PathBuf,
    /// Directory receiving generated C sources and object files.
    pub build_dir: PathBuf,
    /// Path of the linked kernel binary.
    pub binary: PathBuf,
    /// Path of the bootable disk image.
    pub image: PathBuf,
    /// Extension of high-level sources (e.g. "py").
    pub source_ext: String,
}

impl Layout {
    /// Output path for a transpiled source: the build directory plus the
    /// input's file name with the extension swapped for `.c`.
    ///
    /// `src/a.py` becomes `build/a.c`.
    pub fn transpiled_source(&self, input: &Path) -> PathBuf {
        let name = input.file_name().unwrap_or_default();
        self.build_dir.join(name).with_extension("c")
    }

    /// Output path for a compiled C source: `.o` appended to the full input
    /// path, suffix not replaced.
    ///
    /// `build/a.c` becomes `build/a.c.o`.
    pub fn compiled_object(&self, input: &Path) -> PathBuf {
        let mut path = OsString::from(input.as_os_str());
        path.push(".o");
        PathBuf::from(path)
    }

    /// Output path for an assembled source: the build directory plus the
    /// input's stem with a `.o` extension, directory stripped.
    ///
    /// `src/b.asm` becomes `build/b.o`.
    pub fn assembled_object(&self, input: &Path) -> PathBuf {
        let mut name = input.file_stem().unwrap_or_default().to_os_string();
        name.push(".o");
        self.build_dir.join(name)
    }

    /// Object path the linker expects for a C source: the build directory
    /// plus the input's base name with `.o` appended.
    ///
    /// `build/a.c` becomes `build/a.c.o`.
    pub fn link_object_for_c(&self, input: &Path) -> PathBuf {
        let mut name = input.file_name().unwrap_or_default().to_os_string();
        name.push(".o");
        self.build_dir.join(name)
    }

    /// Object path the linker expects for a transpiled source: the generated
    /// C path with `.o` appended. When the compile stage is skipped this is
    /// still the last-known path for the source, so `src/a.py` contributes
    /// `build/a.c.o`.
    pub fn link_object_for_transpiled(&self, input: &Path) -> PathBuf {
        self.compiled_object(&self.transpiled_source(input))
    }
}

/// Everything the planners need: layout plus tool names and flag sets,
/// resolved from the manifest once per invocation.
#[derive(Debug, Clone)]
pub struct Project {
    pub layout: Layout,
    pub transpiler: String,
    pub compiler: String,
    pub assembler: String,
    pub linker: String,
    pub image_builder: String,
    pub emulator: String,
    pub compile_flags: Vec<String>,
    pub assemble_flags: Vec<String>,
    pub link_flags: Vec<String>,
    pub emulator_flags: Vec<String>,
}

impl Project {
    /// Resolve a project from a manifest.
    pub fn from_manifest(manifest: &Manifest) -> Self {
        Self {
            layout: Layout {
                src_dir: PathBuf::from(&manifest.project.src_dir),
                build_dir: PathBuf::from(&manifest.project.build_dir),
                binary: PathBuf::from(&manifest.project.binary),
                image: PathBuf::from(&manifest.project.image),
                source_ext: manifest.project.source_ext.clone(),
            },
            transpiler: manifest.tools.transpiler.clone(),
            compiler: manifest.tools.compiler.clone(),
            assembler: manifest.tools.assembler.clone(),
            linker: manifest.tools.linker.clone(),
            image_builder: manifest.tools.image_builder.clone(),
            emulator: manifest.tools.emulator.clone(),
            compile_flags: manifest.flags.compile.clone(),
            assemble_flags: manifest.flags.assemble.clone(),
            link_flags: manifest.flags.link.clone(),
            emulator_flags: manifest.flags.emulator.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Layout {
        Layout {
            src_dir: PathBuf::from("src"),
            build_dir: PathBuf::from("build"),
            binary: PathBuf::from("kernel.elf"),
            image: PathBuf::from("kernel.iso"),
            source_ext: "py".to_string(),
        }
    }

    #[test]
    fn test_transpiled_source_swaps_dir_and_extension() {
        let layout = layout();
        assert_eq!(
            layout.transpiled_source(Path::new("src/a.py")),
            PathBuf::from("build/a.c")
        );
    }

    #[test]
    fn test_compiled_object_appends_suffix() {
        let layout = layout();
        // Suffix is appended, not replaced: a.c.o, never a.o.
        assert_eq!(
            layout.compiled_object(Path::new("build/a.c")),
            PathBuf::from("build/a.c.o")
        );
    }

    #[test]
    fn test_assembled_object_strips_directory() {
        let layout = layout();
        assert_eq!(
            layout.assembled_object(Path::new("src/b.asm")),
            PathBuf::from("build/b.o")
        );
    }

    #[test]
    fn test_link_object_for_c_uses_base_name() {
        let layout = layout();
        // A C file added from outside the build directory still links from
        // the build directory.
        assert_eq!(
            layout.link_object_for_c(Path::new("extra/x.c")),
            PathBuf::from("build/x.c.o")
        );
    }

    #[test]
    fn test_link_object_for_transpiled_is_last_known_path() {
        let layout = layout();
        assert_eq!(
            layout.link_object_for_transpiled(Path::new("src/a.py")),
            PathBuf::from("build/a.c.o")
        );
    }
}
