use crate::adapters::storage::LocalStorage;
use crate::core::{DocumentSink, Storage};
use crate::utils::error::{MdError, Result};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

pub struct FileSink {
    storage: LocalStorage,
    path: String,
}

impl FileSink {
    pub fn new(storage: LocalStorage, path: impl Into<String>) -> Self {
        Self {
            storage,
            path: path.into(),
        }
    }
}

#[async_trait]
impl DocumentSink for FileSink {
    async fn deliver(&self, document: &str) -> Result<String> {
        self.storage
            .write_file(&self.path, document.as_bytes())
            .await?;
        Ok(self.storage.resolve(&self.path).display().to_string())
    }
}

pub struct StdoutSink;

#[async_trait]
impl DocumentSink for StdoutSink {
    async fn deliver(&self, document: &str) -> Result<String> {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(document.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
        Ok("stdout".to_string())
    }
}

/// Copy tools tried in order; the first one that can be spawned wins.
const CLIPBOARD_COMMANDS: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("clip", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

pub struct ClipboardSink {
    commands: Vec<(String, Vec<String>)>,
}

impl Default for ClipboardSink {
    fn default() -> Self {
        Self {
            commands: CLIPBOARD_COMMANDS
                .iter()
                .map(|(program, args)| {
                    (
                        program.to_string(),
                        args.iter().map(|a| a.to_string()).collect(),
                    )
                })
                .collect(),
        }
    }
}

impl ClipboardSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_commands(commands: Vec<(String, Vec<String>)>) -> Self {
        Self { commands }
    }

    async fn pipe_into(program: &str, args: &[String], document: &str) -> std::io::Result<bool> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        // stdin 關閉後複製工具才會結束；寫入失敗也要先回收子行程
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(document.as_bytes()).await,
            None => Ok(()),
        };

        let status = child.wait().await?;
        written?;
        Ok(status.success())
    }
}

#[async_trait]
impl DocumentSink for ClipboardSink {
    async fn deliver(&self, document: &str) -> Result<String> {
        let mut failures = Vec::new();

        for (program, args) in &self.commands {
            match Self::pipe_into(program, args, document).await {
                Ok(true) => {
                    tracing::debug!("Copied {} bytes with {}", document.len(), program);
                    return Ok(format!("clipboard ({})", program));
                }
                Ok(false) => failures.push(format!("{} exited with an error", program)),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    tracing::debug!("{} not available", program);
                }
                Err(e) => failures.push(format!("{}: {}", program, e)),
            }
        }

        let message = if failures.is_empty() {
            "no clipboard tool found".to_string()
        } else {
            failures.join("; ")
        };
        Err(MdError::ClipboardError { message })
    }
}
