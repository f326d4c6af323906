//! Image path resolution.
//!
//! A raw `image_path` cell is turned into a file under the data directory by
//! trying an ordered list of [`ImageResolver`] strategies. Every candidate a
//! strategy proposes goes through the same containment check before it is
//! accepted, so no strategy can hand out a file outside the data directory.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One way of turning a raw dataset path into an existing file.
pub trait ImageResolver {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Propose an existing file for `raw`, or nothing.
    fn try_resolve(&self, raw: &str) -> Option<PathBuf>;
}

/// Why a row's image could not be resolved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("empty image path")]
    EmptyPath,

    #[error("image not found")]
    NotFound,

    #[error("outside the data directory: {0}")]
    OutsideBase(PathBuf),

    #[error("not under a '{0}' directory")]
    MissingSubdir(String),
}

impl Rejection {
    /// Reason without the offending path, for grouping.
    pub fn kind(&self) -> &'static str {
        match self {
            Rejection::EmptyPath => "empty path",
            Rejection::NotFound => "not found",
            Rejection::OutsideBase(_) => "outside data dir",
            Rejection::MissingSubdir(_) => "wrong subdirectory",
        }
    }
}

/// Strategies selectable from the configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    Joined,
    AsGiven,
    StrippedPrefix,
    BasenameSearch,
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Joined => "joined",
            StrategyKind::AsGiven => "as-given",
            StrategyKind::StrippedPrefix => "stripped-prefix",
            StrategyKind::BasenameSearch => "basename-search",
        }
    }

    pub fn build(self, base: &Path) -> Box<dyn ImageResolver> {
        match self {
            StrategyKind::Joined => Box::new(JoinedPath::new(base)),
            StrategyKind::AsGiven => Box::new(AsGiven),
            StrategyKind::StrippedPrefix => Box::new(StrippedPrefix::new(base)),
            StrategyKind::BasenameSearch => Box::new(BasenameSearch::new(base)),
        }
    }
}

/// Backslashes become slashes. Whitespace is part of the path.
fn normalize(raw: &str) -> String {
    raw.replace('\\', "/")
}

fn segments(normalized: &str) -> Vec<&str> {
    normalized.split('/').filter(|s| !s.is_empty()).collect()
}

fn existing_file(path: PathBuf) -> Option<PathBuf> {
    path.is_file().then_some(path)
}

/// `<base>/<raw>` with separators normalized and leading slashes stripped.
pub struct JoinedPath {
    base: PathBuf,
}

impl JoinedPath {
    pub fn new(base: &Path) -> Self {
        Self {
            base: base.to_path_buf(),
        }
    }
}

impl ImageResolver for JoinedPath {
    fn name(&self) -> &'static str {
        "joined"
    }

    fn try_resolve(&self, raw: &str) -> Option<PathBuf> {
        let normalized = normalize(raw);
        let rel = normalized.trim_start_matches('/');
        if rel.is_empty() {
            return None;
        }
        existing_file(self.base.join(rel))
    }
}

/// The raw path as written in the dataset, relative to the working directory.
pub struct AsGiven;

impl ImageResolver for AsGiven {
    fn name(&self) -> &'static str {
        "as-given"
    }

    fn try_resolve(&self, raw: &str) -> Option<PathBuf> {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            return None;
        }
        existing_file(PathBuf::from(normalized))
    }
}

/// Drops the first two segments of the raw path and re-roots the rest at base.
pub struct StrippedPrefix {
    base: PathBuf,
}

impl StrippedPrefix {
    pub fn new(base: &Path) -> Self {
        Self {
            base: base.to_path_buf(),
        }
    }
}

impl ImageResolver for StrippedPrefix {
    fn name(&self) -> &'static str {
        "stripped-prefix"
    }

    fn try_resolve(&self, raw: &str) -> Option<PathBuf> {
        let normalized = normalize(raw);
        let segs = segments(&normalized);
        if segs.len() <= 2 {
            return None;
        }
        existing_file(self.base.join(segs[2..].join("/")))
    }
}

/// Walks the base directory for a file with the raw basename whose parent
/// directory is named like the raw path's third segment.
pub struct BasenameSearch {
    base: PathBuf,
}

impl BasenameSearch {
    pub fn new(base: &Path) -> Self {
        Self {
            base: base.to_path_buf(),
        }
    }

    fn search(dir: &Path, file_name: &OsStr, parent_name: &OsStr) -> Option<PathBuf> {
        let mut entries: Vec<fs::DirEntry> = fs::read_dir(dir).ok()?.flatten().collect();
        entries.sort_by_key(|e| e.path());

        for entry in entries {
            // file_type() does not follow symlinks, so linked directories are never walked
            let Ok(ft) = entry.file_type() else {
                continue;
            };
            let path = entry.path();

            if ft.is_dir() {
                if let Some(found) = Self::search(&path, file_name, parent_name) {
                    return Some(found);
                }
            } else if path.file_name() == Some(file_name)
                && dir.file_name() == Some(parent_name)
                && path.is_file()
            {
                return Some(path);
            }
        }

        None
    }
}

impl ImageResolver for BasenameSearch {
    fn name(&self) -> &'static str {
        "basename-search"
    }

    fn try_resolve(&self, raw: &str) -> Option<PathBuf> {
        let normalized = normalize(raw);
        let segs = segments(&normalized);
        let parent_name = segs.get(2)?;
        let file_name = segs.last()?;
        Self::search(&self.base, OsStr::new(file_name), OsStr::new(parent_name))
    }
}

/// Acceptance rule applied to every candidate.
struct Containment {
    base: PathBuf,
    required_subdir: Option<String>,
}

impl Containment {
    fn check(&self, candidate: &Path) -> Result<PathBuf, Rejection> {
        let canon = candidate.canonicalize().map_err(|_| Rejection::NotFound)?;
        if !canon.is_file() {
            return Err(Rejection::NotFound);
        }

        let rel = canon
            .strip_prefix(&self.base)
            .map_err(|_| Rejection::OutsideBase(canon.clone()))?;

        if let Some(sub) = &self.required_subdir {
            let passes = rel
                .parent()
                .is_some_and(|dirs| dirs.components().any(|c| c.as_os_str() == sub.as_str()));
            if !passes {
                return Err(Rejection::MissingSubdir(sub.clone()));
            }
        }

        Ok(canon)
    }
}

/// Ordered strategies behind one containment check.
pub struct ResolverChain {
    strategies: Vec<Box<dyn ImageResolver>>,
    guard: Containment,
}

impl ResolverChain {
    /// Build the chain for `base`. The base directory must exist.
    pub fn new(
        base: &Path,
        kinds: &[StrategyKind],
        required_subdir: Option<&str>,
    ) -> AppResult<Self> {
        let canon = canonical_base(base)?;
        let strategies = kinds.iter().map(|k| k.build(&canon)).collect();
        Self::with_strategies(&canon, strategies, required_subdir)
    }

    /// Build a chain from already constructed strategies.
    pub fn with_strategies(
        base: &Path,
        strategies: Vec<Box<dyn ImageResolver>>,
        required_subdir: Option<&str>,
    ) -> AppResult<Self> {
        if strategies.is_empty() {
            return Err(AppError::Config(
                "no image resolution strategy configured".into(),
            ));
        }

        Ok(Self {
            strategies,
            guard: Containment {
                base: canonical_base(base)?,
                required_subdir: required_subdir
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string),
            },
        })
    }

    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// First candidate accepted by the containment check. When every
    /// candidate is refused, the first refusal is reported.
    pub fn resolve(&self, raw: &str) -> Result<PathBuf, Rejection> {
        if raw.trim().is_empty() {
            return Err(Rejection::EmptyPath);
        }

        let mut refused = None;
        for strategy in &self.strategies {
            if let Some(candidate) = strategy.try_resolve(raw) {
                match self.guard.check(&candidate) {
                    Ok(path) => return Ok(path),
                    Err(r) => {
                        refused.get_or_insert(r);
                    }
                }
            }
        }

        Err(refused.unwrap_or(Rejection::NotFound))
    }
}

fn canonical_base(base: &Path) -> AppResult<PathBuf> {
    match base.canonicalize() {
        Ok(p) if p.is_dir() => Ok(p),
        _ => Err(AppError::DataDir(base.to_path_buf())),
    }
}
