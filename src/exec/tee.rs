// src/exec/tee.rs

//! Fan-out of child-process output to the terminal and the attempt log.
//!
//! A human watching the live run and a postmortem reader of `output.log`
//! must see the same stream, so every line of the child's stdout and stderr
//! is written to both sinks as it arrives.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWriteExt, BufReader};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::errors::Result;

/// Shared handle to one attempt's log file.
///
/// Both of the child's streams write through the same handle, so the log
/// holds the combined output.
pub type LogSink = Arc<Mutex<File>>;

/// Create the log file for an attempt.
pub async fn open_log(path: &Path) -> Result<LogSink> {
    let file = File::create(path)
        .await
        .with_context(|| format!("creating log file {}", path.display()))?;
    Ok(Arc::new(Mutex::new(file)))
}

/// Spawn a reader that copies each line of `stream` to stdout and the log.
///
/// Always consuming the stream also keeps the child's pipe buffers from
/// filling up.
pub fn spawn_tee<R>(stream: R, sink: LogSink) -> JoinHandle<()>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let reader = BufReader::new(stream);
        let mut lines = reader.lines();

        while let Ok(Some(line)) = lines.next_line().await {
            println!("{line}");
            let mut file = sink.lock().await;
            let _ = file.write_all(line.as_bytes()).await;
            let _ = file.write_all(b"\n").await;
        }
    })
}

/// Flush the log once both readers are done.
pub async fn finish_log(sink: LogSink) {
    let mut file = sink.lock().await;
    let _ = file.flush().await;
}
