//! Launching external programs: the editor for a project path and the
//! browser for a repository URL.
//!
//! Programs are always started from an argument vector. Nothing is ever
//! interpolated into a shell command line.

use crate::error::{DevdeckError, Result};
use crate::platform::{Environment, Platform};
use std::fmt;
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// A program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg:?}")?;
        }
        Ok(())
    }
}

/// Starts external programs.
pub trait CommandRunner {
    /// Start `invocation` without waiting for it to finish.
    fn spawn(&self, invocation: &Invocation) -> Result<()>;
}

/// Runs programs with [`std::process::Command`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn spawn(&self, invocation: &Invocation) -> Result<()> {
        let mut child = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| DevdeckError::Launch {
                program: invocation.program.clone(),
                message: e.to_string(),
            })?;

        // Reap the child so long-running sessions don't collect zombies.
        let program = invocation.program.clone();
        std::thread::spawn(move || match child.wait() {
            Ok(status) => debug!(%program, %status, "launched program exited"),
            Err(e) => debug!(%program, error = %e, "failed to wait for launched program"),
        });
        Ok(())
    }
}

/// Replace a leading `~` in `path` with the home directory.
///
/// Only `~` on its own or followed by a path separator is expanded;
/// `~name` and paths without a leading `~` are returned unchanged. The
/// home directory is read from the environment on every call.
pub fn expand_home(path: &str, env: &dyn Environment, platform: Platform) -> Result<String> {
    let Some(rest) = path.strip_prefix('~') else {
        return Ok(path.to_string());
    };
    if !(rest.is_empty() || rest.starts_with('/') || rest.starts_with('\\')) {
        return Ok(path.to_string());
    }

    let var = platform.home_var();
    let home = env
        .var(var)
        .ok_or(DevdeckError::HomeDirUnavailable(var))?;
    let home = match home.trim_end_matches(['/', '\\']) {
        "" => &home[..1],
        trimmed => trimmed,
    };
    if rest.is_empty() {
        return Ok(home.to_string());
    }
    Ok(format!("{home}{rest}"))
}

/// The editor a project is opened with: a program plus fixed leading arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl EditorCommand {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn invocation(&self, path: &str) -> Invocation {
        Invocation::new(&self.program)
            .args(self.args.iter().cloned())
            .arg(path)
    }
}

/// Opens projects and repositories through the OS collaborators.
pub struct Launcher {
    runner: Box<dyn CommandRunner>,
    env: Box<dyn Environment>,
    platform: Platform,
    editor: EditorCommand,
}

impl Launcher {
    pub fn new(
        runner: Box<dyn CommandRunner>,
        env: Box<dyn Environment>,
        platform: Platform,
        editor: EditorCommand,
    ) -> Self {
        Self {
            runner,
            env,
            platform,
            editor,
        }
    }

    pub fn editor(&self) -> &EditorCommand {
        &self.editor
    }

    /// Expand `path` and open it in the editor.
    pub fn open_project(&self, path: &str) -> Result<Invocation> {
        let expanded = expand_home(path, self.env.as_ref(), self.platform)?;
        let invocation = self.editor.invocation(&expanded);
        self.runner.spawn(&invocation)?;
        info!(path = %expanded, "opened project");
        Ok(invocation)
    }

    /// Open `url` in the default browser.
    pub fn open_url(&self, url: &str) -> Result<Invocation> {
        let invocation = self.platform.open_url_invocation(url);
        self.runner.spawn(&invocation)?;
        info!(%url, "opened repository");
        Ok(invocation)
    }
}
