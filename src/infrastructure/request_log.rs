use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

// Append-only request log: one "ISO8601 - METHOD PATH" line per request,
// written by a background task. Clones share a single writer.
#[derive(Debug, Clone)]
pub struct RequestLog {
    tx: UnboundedSender<String>,
}

impl RequestLog {
    // Spawns the writer task; requires a running tokio runtime.
    pub fn to_file(path: impl Into<PathBuf>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(append_lines(path.into(), rx));
        Self { tx }
    }

    // Fire-and-forget: never blocks and never fails the caller. The line is
    // stamped at dispatch time, not when the writer gets to it.
    pub fn record(&self, method: &str, path: &str) {
        let time = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let _ = self.tx.send(format!("{time} - {method} {path}"));
    }
}

async fn append_lines(path: PathBuf, mut rx: UnboundedReceiver<String>) {
    while let Some(line) = rx.recv().await {
        // A failed append is an operator problem, not a request problem.
        if let Err(err) = append_line(&path, &line).await {
            tracing::error!(path = %path.display(), error = %err, "could not append request log entry");
        }
    }
}

async fn append_line(path: &Path, line: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path).await?;
    file.write_all(line.as_bytes()).await?;
    file.write_all(b"\n").await
}
