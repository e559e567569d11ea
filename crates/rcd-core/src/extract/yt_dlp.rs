//! `yt-dlp` subprocess extractor.

use super::{ExtractError, VideoExtractor};
use crate::config::ExtractorConfig;
use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

/// Runs `<program> <args..> --paths <dir> -- <url>` and waits for it.
#[derive(Debug, Clone)]
pub struct YtDlpExtractor {
    program: String,
    args: Vec<String>,
}

impl YtDlpExtractor {
    pub fn new(config: &ExtractorConfig) -> Self {
        Self {
            program: config.program.clone(),
            args: config.args.clone(),
        }
    }

    fn command_args(&self, url: &str, dir: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = self.args.iter().map(OsString::from).collect();
        args.push("--paths".into());
        args.push(dir.as_os_str().to_owned());
        args.push("--".into());
        args.push(url.into());
        args
    }
}

/// Last non-empty stderr line, which is where yt-dlp puts its `ERROR:` message.
fn last_line(stderr: &[u8]) -> String {
    String::from_utf8_lossy(stderr)
        .lines()
        .rev()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or("unknown error")
        .to_string()
}

impl VideoExtractor for YtDlpExtractor {
    fn extract(&self, url: &str, dir: &Path) -> Result<(), ExtractError> {
        tracing::debug!(program = %self.program, url, "running video extractor");
        let output = Command::new(&self.program)
            .args(self.command_args(url, dir))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ExtractError::NotInstalled {
                        program: self.program.clone(),
                    }
                } else {
                    ExtractError::Spawn {
                        program: self.program.clone(),
                        source: e,
                    }
                }
            })?;

        if output.status.success() {
            Ok(())
        } else {
            Err(ExtractError::Failed {
                status: output.status.to_string(),
                message: last_line(&output.stderr),
            })
        }
    }
}
