// src/mcp/stdio.rs
//! Newline-delimited JSON-RPC over a byte stream pair.
//!
//! Every request line is handled on its own task, so a slow tool call never
//! holds up the next line. Responses travel over a channel to one writer task
//! that owns the output; whole lines are written, never interleaved. Response
//! order follows completion order, clients match on `id`.

use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::{
    mcp::{
        handler::handle_mcp_request,
        protocol::{error_codes, Request, Response},
    },
    AppState,
};

const RESPONSE_BUFFER: usize = 64;

/// Serves until `reader` hits EOF, then waits for in-flight requests to
/// answer before returning.
pub async fn serve<R, W>(reader: R, writer: W, state: AppState)
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin + Send + 'static,
{
    let (tx, rx) = mpsc::channel::<String>(RESPONSE_BUFFER);
    let writer_task = tokio::spawn(write_lines(rx, writer));

    let mut lines = reader.lines();
    loop {
        match lines.next_line().await {
            Ok(None) => {
                info!("EOF received, shutting down MCP server");
                break;
            }
            Ok(Some(line)) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                debug!("Received: {}", line);

                match serde_json::from_str::<Request>(line) {
                    Ok(request) => {
                        let state = state.clone();
                        let tx = tx.clone();
                        tokio::spawn(async move {
                            if let Some(response) = handle_mcp_request(request, state).await {
                                send(&tx, &response).await;
                            }
                        });
                    }
                    Err(parse_error) => {
                        error!("JSON parse error: {}", parse_error);
                        let response = Response::error(
                            Value::Null,
                            error_codes::PARSE_ERROR,
                            format!("Parse error: {}", parse_error),
                        );
                        send(&tx, &response).await;
                    }
                }
            }
            Err(e) => {
                error!("Failed to read from stdin: {}", e);
                break;
            }
        }
    }

    // The writer finishes once every spawned request has dropped its sender.
    drop(tx);
    if let Err(e) = writer_task.await {
        error!("Response writer task failed: {}", e);
    }
    info!("MCP server shutting down");
}

async fn send(tx: &mpsc::Sender<String>, response: &Response) {
    match serde_json::to_string(response) {
        Ok(json) => {
            if tx.send(json).await.is_err() {
                error!("Response writer closed, dropping response");
            }
        }
        Err(e) => error!("Failed to serialize response: {}", e),
    }
}

async fn write_lines<W>(mut rx: mpsc::Receiver<String>, mut writer: W)
where
    W: AsyncWrite + Unpin,
{
    while let Some(json) = rx.recv().await {
        debug!("Sending: {}", json);
        let written = async {
            writer.write_all(json.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await
        };
        if let Err(e) = written.await {
            error!("Failed to write response: {}", e);
            break;
        }
    }
}
