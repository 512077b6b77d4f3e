// the shared status file the solver appends to
//
// the file is owned and written by the solver process; this side only ever
// scans it (and optionally deletes it at shutdown). only the most recent
// line matters - the viewer shows current state, it does not replay
// history, so anything the solver wrote between two polls is skipped.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// handle on the append-only status file
#[derive(Clone, Debug)]
pub struct StatusChannel {
    path: PathBuf,
}

impl StatusChannel {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// create an empty channel file if missing; truncate an existing one
    /// when `force_recreate` so a stale file from an earlier run never
    /// feeds the first frame. called once, before polling starts.
    pub fn ensure(&self, force_recreate: bool) -> io::Result<()> {
        if force_recreate || !self.path.exists() {
            fs::write(&self.path, b"")?;
        }
        Ok(())
    }

    /// non-destructive scan for the last non-empty line.
    ///
    /// returns None while the file is empty or not yet created (both are
    /// normal before the solver starts writing). a torn trailing write is
    /// returned as-is; it fails decoding and gets retried next poll.
    pub fn poll_latest_line(&self) -> io::Result<Option<String>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };
        Ok(contents
            .lines()
            .filter(|l| !l.trim().is_empty())
            .next_back()
            .map(str::to_owned))
    }

    /// delete the channel file (shutdown cleanup)
    pub fn remove(&self) -> io::Result<()> {
        fs::remove_file(&self.path)
    }
}
