//! Text search collaborator.
//!
//! The server never matches text itself. It hands the query and a directory to a searcher and
//! pastes back whatever line-numbered output comes out.

use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

#[async_trait]
pub trait CodeSearcher: Send + Sync {
    /// Search `root` for `query`.
    ///
    /// Returns `path:line:text` lines, or `None` when nothing matched. Failures of the
    /// underlying tool also count as "nothing matched".
    async fn search(&self, query: &str, root: &Path) -> Option<String>;
}

/// Shells out to `rg` on `PATH`.
#[derive(Debug, Clone)]
pub struct RipgrepSearcher {
    program: String,
}

impl RipgrepSearcher {
    pub fn new() -> Self {
        Self::with_program("rg")
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for RipgrepSearcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CodeSearcher for RipgrepSearcher {
    async fn search(&self, query: &str, root: &Path) -> Option<String> {
        let output = Command::new(&self.program)
            .args(["--no-heading", "--line-number", "--color", "never"])
            .arg("-e")
            .arg(query)
            .arg(root)
            .stdin(Stdio::null())
            .output()
            .await;

        let output = match output {
            Ok(output) => output,
            Err(err) => {
                log::warn!("Failed to run {}: {err}", self.program);
                return None;
            }
        };

        // rg: 0 = matches, 1 = no matches, 2 = error (missing dir, bad pattern, ...)
        if !output.status.success() {
            log::debug!(
                "{} exited with {} for {}",
                self.program,
                output.status,
                root.display()
            );
            return None;
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}
