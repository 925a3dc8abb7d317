//! External typesetting engine invocation
//!
//! The engine is a black box invoked as
//! `<program> -interaction=nonstopmode <file.tex>` with the working
//! directory set to the staging directory. It is expected to produce
//! `<basename>.pdf` on success and `<basename>.log` always; a non-zero
//! exit status signals compile failure. Diagnostics come from the log
//! artifact, so the child's stdout/stderr are drained and discarded
//! (draining keeps the pipe from blocking a chatty engine).

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::utils::error::{TableError, TableResult};

/// Configuration for the external typesetting engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Engine executable (searched on PATH or an absolute path)
    pub program: String,
    /// Upper bound on a single engine run; the process is killed past it
    pub timeout: Duration,
    /// Parent directory for per-request staging directories
    /// (`None` uses the system temp directory)
    pub temp_root: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            program: "pdflatex".to_string(),
            timeout: Duration::from_secs(60),
            temp_root: None,
        }
    }
}

impl EngineConfig {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_temp_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.temp_root = Some(root.into());
        self
    }
}

/// Run the engine on `tex_path` inside `workdir`, waiting at most the
/// configured timeout. Returns whether the engine exited successfully.
///
/// # Errors
/// - [`TableError::EngineSpawn`] when the executable cannot be launched
/// - [`TableError::EngineTimeout`] when the deadline passes (the child is
///   killed and reaped before returning)
pub(crate) fn run_engine(
    config: &EngineConfig,
    tex_path: &Path,
    workdir: &Path,
) -> TableResult<bool> {
    let mut child = Command::new(&config.program)
        .arg("-interaction=nonstopmode")
        .arg(tex_path)
        .current_dir(workdir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| TableError::spawn(&config.program, e.to_string()))?;

    // Drain the pipes so the child never blocks on a full buffer
    let stdout = child.stdout.take();
    let stderr = child.stderr.take();
    let drain_out = thread::spawn(move || drain(stdout));
    let drain_err = thread::spawn(move || drain(stderr));

    let deadline = Instant::now() + config.timeout;
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {
                if Instant::now() >= deadline {
                    let _ = child.kill();
                    let _ = child.wait();
                    // Do not join the drain threads here: a helper the
                    // engine forked can keep the pipe open long after the
                    // kill, and joining would block past the deadline.
                    // Dropped handles let the threads finish on their own.
                    drop(drain_out);
                    drop(drain_err);
                    return Err(TableError::timeout(config.timeout.as_secs()));
                }
                thread::sleep(Duration::from_millis(25));
            }
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                drop(drain_out);
                drop(drain_err);
                return Err(e.into());
            }
        }
    };

    let _ = drain_out.join();
    let _ = drain_err.join();
    Ok(status.success())
}

fn drain(pipe: Option<impl io::Read>) {
    if let Some(mut pipe) = pipe {
        let _ = io::copy(&mut pipe, &mut io::sink());
    }
}
