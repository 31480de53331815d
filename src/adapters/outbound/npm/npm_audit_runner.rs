use crate::ports::outbound::{AuditCommand, AuditRunner, ProcessOutput};
use crate::shared::error::AuditError;
use crate::shared::security::{validate_output_size, MAX_AUDIT_OUTPUT_SIZE};
use crate::shared::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;

/// npm executable looked up on PATH when none is given
#[cfg(windows)]
pub const DEFAULT_NPM: &str = "npm.cmd";
#[cfg(not(windows))]
pub const DEFAULT_NPM: &str = "npm";

/// NpmAuditRunner adapter that runs `npm audit --json` as a subprocess
///
/// stdout and stderr are captured regardless of exit status. At most
/// `max_output_size` bytes of each stream are kept in memory; anything
/// beyond that is drained and counted so the run can be rejected.
pub struct NpmAuditRunner {
    npm_path: PathBuf,
    max_output_size: usize,
}

impl NpmAuditRunner {
    pub fn new() -> Self {
        Self::with_executable(DEFAULT_NPM)
    }

    /// Uses a specific npm executable instead of the one on PATH
    pub fn with_executable(npm_path: impl Into<PathBuf>) -> Self {
        Self {
            npm_path: npm_path.into(),
            max_output_size: MAX_AUDIT_OUTPUT_SIZE,
        }
    }

    pub fn with_max_output_size(mut self, max_output_size: usize) -> Self {
        self.max_output_size = max_output_size;
        self
    }

    fn display_command(&self, command: &AuditCommand) -> String {
        format!("{} {}", self.npm_path.display(), command.args().join(" "))
    }
}

impl Default for NpmAuditRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuditRunner for NpmAuditRunner {
    async fn run(&self, command: &AuditCommand) -> Result<ProcessOutput> {
        let spawn_error = |details: String| AuditError::CommandSpawnFailed {
            command: self.display_command(command),
            details,
        };

        let mut child = Command::new(&self.npm_path)
            .args(command.args())
            .current_dir(&command.project_path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| spawn_error(e.to_string()))?;

        let (stdout, stderr) = tokio::try_join!(
            read_capped(child.stdout.take(), self.max_output_size),
            read_capped(child.stderr.take(), self.max_output_size),
        )
        .map_err(|e| spawn_error(format!("failed to read output: {}", e)))?;
        let status = child
            .wait()
            .await
            .map_err(|e| spawn_error(e.to_string()))?;

        validate_output_size(stdout.total, self.max_output_size)?;

        Ok(ProcessOutput::new(
            String::from_utf8_lossy(&stdout.kept).into_owned(),
            String::from_utf8_lossy(&stderr.kept).into_owned(),
            status.code(),
        ))
    }
}

/// Bytes kept from a stream and the stream's full length
struct CappedOutput {
    kept: Vec<u8>,
    total: usize,
}

/// Reads up to `max` bytes and drains the rest so the child never blocks
async fn read_capped<R>(stream: Option<R>, max: usize) -> std::io::Result<CappedOutput>
where
    R: AsyncRead + Unpin,
{
    let mut kept = Vec::new();
    let Some(mut stream) = stream else {
        return Ok(CappedOutput { kept, total: 0 });
    };

    (&mut stream).take(max as u64).read_to_end(&mut kept).await?;
    let rest = tokio::io::copy(&mut stream, &mut tokio::io::sink()).await?;
    let total = kept.len().saturating_add(usize::try_from(rest).unwrap_or(usize::MAX));

    Ok(CappedOutput { kept, total })
}
