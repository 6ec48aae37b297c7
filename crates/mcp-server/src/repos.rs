//! Locations of the three local checkouts the tools operate on.

use std::env;
use std::path::{Path, PathBuf};

/// One of the known source trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepoKind {
    Js,
    Go,
    Spec,
}

impl RepoKind {
    /// Search order used everywhere results from several repositories are concatenated.
    pub const ALL: [RepoKind; 3] = [RepoKind::Js, RepoKind::Go, RepoKind::Spec];

    pub fn display_name(self) -> &'static str {
        match self {
            RepoKind::Js => "quickbase-js",
            RepoKind::Go => "quickbase-go",
            RepoKind::Spec => "quickbase-spec",
        }
    }

    fn home_segments(self) -> &'static [&'static str] {
        match self {
            RepoKind::Js => &["Projects", "Personal", "quickbase-js"],
            RepoKind::Go => &["Projects", "Personal", "quickbase-tree", "quickbase-go"],
            RepoKind::Spec => &["Projects", "Personal", "quickbase-spec"],
        }
    }
}

/// Resolved checkout paths, fixed for the lifetime of the process.
///
/// Nothing here checks that the directories exist; tools discover a missing checkout when they
/// touch it and report that in-band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoPaths {
    js: PathBuf,
    go: PathBuf,
    spec: PathBuf,
}

impl RepoPaths {
    pub fn from_env() -> Self {
        Self::under_home(&home_dir())
    }

    pub fn under_home(home: &Path) -> Self {
        let join = |kind: RepoKind| {
            kind.home_segments()
                .iter()
                .fold(home.to_path_buf(), |path, segment| path.join(segment))
        };
        Self {
            js: join(RepoKind::Js),
            go: join(RepoKind::Go),
            spec: join(RepoKind::Spec),
        }
    }

    pub fn path(&self, kind: RepoKind) -> &Path {
        match kind {
            RepoKind::Js => &self.js,
            RepoKind::Go => &self.go,
            RepoKind::Spec => &self.spec,
        }
    }
}

fn home_dir() -> PathBuf {
    env::var_os("HOME")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}
