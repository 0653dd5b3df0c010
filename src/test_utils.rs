//! Test doubles shared across modules.
//!
//! These stand in for the OS collaborators so tests never start real
//! programs or open native dialogs.

use crate::error::{DevdeckError, Result};
use crate::launcher::{CommandRunner, Invocation};
use crate::view::FolderPicker;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Records every invocation instead of running it.
///
/// Clones share the same log, so a test can hand one clone to the code
/// under test and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingRunner {
    calls: Arc<Mutex<Vec<Invocation>>>,
    fail: bool,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// A runner whose every spawn fails after being recorded.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn spawn(&self, invocation: &Invocation) -> Result<()> {
        self.calls.lock().unwrap().push(invocation.clone());
        if self.fail {
            return Err(DevdeckError::Launch {
                program: invocation.program.clone(),
                message: "No such file or directory".to_string(),
            });
        }
        Ok(())
    }
}

/// Answers every folder prompt with the same result.
#[derive(Debug, Clone, Default)]
pub struct StubFolderPicker {
    answer: Option<PathBuf>,
}

impl StubFolderPicker {
    /// `None` behaves like the user cancelling the dialog.
    pub fn new(answer: Option<&str>) -> Self {
        Self {
            answer: answer.map(PathBuf::from),
        }
    }
}

impl FolderPicker for StubFolderPicker {
    fn pick_folder(&self, _start: Option<&Path>) -> Option<PathBuf> {
        self.answer.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_runner_clones_share_calls() {
        let runner = RecordingRunner::new();
        let clone = runner.clone();
        clone.spawn(&Invocation::new("code").arg("/p")).unwrap();
        assert_eq!(runner.calls(), vec![Invocation::new("code").arg("/p")]);
    }

    #[test]
    fn test_failing_runner_still_records() {
        let runner = RecordingRunner::failing();
        assert!(runner.spawn(&Invocation::new("code")).is_err());
        assert_eq!(runner.calls().len(), 1);
    }
}
