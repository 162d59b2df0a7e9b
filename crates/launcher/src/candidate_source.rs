// Chunk: docs/chunks/candidate_source - Executable discovery on the search path
//!
//! The candidate universe and the sources that produce it.
//!
//! A [`Universe`] is built once at startup and is read-only afterwards. Every
//! filtered view borrows from it; nothing downstream copies candidate strings.
//!
//! [`PathScanner`] lists the executables on `$PATH`. [`StaticSource`] serves a
//! fixed list, for tests and embedding.

use std::collections::BTreeSet;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// The immutable, sorted, deduplicated set of candidate names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Universe {
    candidates: Vec<String>,
}

impl Universe {
    /// Builds a universe, sorting ascending (case-sensitive) and removing duplicates.
    pub fn new<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: BTreeSet<String> = candidates.into_iter().map(Into::into).collect();
        Self {
            candidates: set.into_iter().collect(),
        }
    }

    /// Returns the candidates in ascending order.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Iterates the candidates as string slices.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.candidates.iter().map(String::as_str)
    }

    /// Returns the number of candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Returns true if there are no candidates.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Produces the candidate universe, once, before the launcher starts.
pub trait CandidateSource {
    /// Loads the candidates. Sources never fail; unreadable inputs are skipped.
    fn load(&self) -> Universe;
}

/// A fixed list of candidates.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    names: Vec<String>,
}

impl StaticSource {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl CandidateSource for StaticSource {
    fn load(&self) -> Universe {
        Universe::new(self.names.iter().cloned())
    }
}

/// Lists executable files in a set of search directories.
#[derive(Debug, Clone, Default)]
pub struct PathScanner {
    dirs: Vec<PathBuf>,
}

impl PathScanner {
    /// Scans the given directories, in order.
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }

    /// Scans the directories named by `$PATH`.
    ///
    /// An unset `PATH` yields a scanner with no directories.
    pub fn from_env() -> Self {
        match env::var_os("PATH") {
            Some(path) => Self::from_path_var(&path),
            None => {
                tracing::warn!("PATH is not set; no candidates will be offered");
                Self::default()
            }
        }
    }

    /// Scans the directories in a `PATH`-style list.
    pub fn from_path_var(path: &OsString) -> Self {
        let dirs = env::split_paths(path)
            .filter(|dir| !dir.as_os_str().is_empty())
            .collect();
        Self { dirs }
    }

    /// Returns the directories that will be scanned.
    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }
}

impl CandidateSource for PathScanner {
    fn load(&self) -> Universe {
        let mut names = BTreeSet::new();
        for dir in &self.dirs {
            scan_dir(dir, &mut names);
        }
        tracing::debug!(
            dirs = self.dirs.len(),
            candidates = names.len(),
            "scanned search path"
        );
        Universe {
            candidates: names.into_iter().collect(),
        }
    }
}

fn scan_dir(dir: &Path, names: &mut BTreeSet<String>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::debug!(dir = %dir.display(), %err, "skipping search path entry");
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !is_executable(&path) {
            continue;
        }
        // Names that are not valid UTF-8 cannot be typed into the query
        if let Some(name) = entry.file_name().to_str() {
            names.insert(name.to_owned());
        }
    }
}

/// Returns true for regular files (following symlinks) with an execute bit set.
#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    match fs::metadata(path) {
        Ok(meta) => meta.is_file() && meta.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    fs::metadata(path).map(|meta| meta.is_file()).unwrap_or(false)
}
