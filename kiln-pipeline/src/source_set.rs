//! Enumeration of the source files feeding the pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use crate::project::Layout;

/// The three kinds of input the pipeline consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// High-level sources to transpile to C (`src/*.py` by default).
    Transpile,
    /// C sources to compile (`build/*.c` by default).
    Compile,
    /// Assembly sources (`src/*.asm`).
    Assemble,
}

/// The ordered collections of input paths, partitioned by kind.
///
/// Seeded once per invocation by [`SourceSet::scan`], optionally extended
/// with [`SourceSet::add`], then consumed read-only by the planners. Paths
/// are not de-duplicated: adding a path twice plans the work twice.
#[derive(Debug, Clone, Default)]
pub struct SourceSet {
    transpile: Vec<PathBuf>,
    compile: Vec<PathBuf>,
    assemble: Vec<PathBuf>,
}

impl SourceSet {
    /// Scan the conventional directories for sources.
    ///
    /// A missing or unreadable directory contributes an empty list rather
    /// than an error. Entries are sorted lexically so plans are
    /// deterministic.
    pub fn scan(layout: &Layout) -> Self {
        Self {
            transpile: list_dir(&layout.src_dir, &layout.source_ext),
            compile: list_dir(&layout.build_dir, "c"),
            assemble: list_dir(&layout.src_dir, "asm"),
        }
    }

    /// Append a single path without re-scanning.
    pub fn add(&mut self, kind: SourceKind, path: PathBuf) {
        self.files_mut(kind).push(path);
    }

    /// The paths of one kind, in order.
    pub fn files(&self, kind: SourceKind) -> &[PathBuf] {
        match kind {
            SourceKind::Transpile => &self.transpile,
            SourceKind::Compile => &self.compile,
            SourceKind::Assemble => &self.assemble,
        }
    }

    /// Total number of paths across all kinds.
    pub fn len(&self) -> usize {
        self.transpile.len() + self.compile.len() + self.assemble.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Infer the kind of a path from its extension, using the layout's
    /// high-level source extension. Returns `None` for anything the
    /// pipeline has no stage for.
    pub fn kind_of(layout: &Layout, path: &Path) -> Option<SourceKind> {
        let ext = path.extension()?.to_str()?;
        if ext == layout.source_ext {
            Some(SourceKind::Transpile)
        } else if ext == "c" {
            Some(SourceKind::Compile)
        } else if ext == "asm" {
            Some(SourceKind::Assemble)
        } else {
            None
        }
    }

    fn files_mut(&mut self, kind: SourceKind) -> &mut Vec<PathBuf> {
        match kind {
            SourceKind::Transpile => &mut self.transpile,
            SourceKind::Compile => &mut self.compile,
            SourceKind::Assemble => &mut self.assemble,
        }
    }
}

/// List the files in `dir` with the given extension, sorted. Any read
/// failure (missing directory included) yields an empty list.
fn list_dir(dir: &Path, extension: &str) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some(extension))
        .collect();
    files.sort();
    files
}
