//! Newline-delimited JSON-RPC over stdio.
//!
//! Each request is one line on the input; each response is written as one
//! line on the output. Requests are handled strictly in arrival order.

use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::mcp::rpc::{OutboundResponse, RpcRequest};
use crate::mcp::service::McpService;

/// What one input line turned into.
#[derive(Debug)]
enum Frame {
    Blank,
    Request(RpcRequest),
    Rejected(OutboundResponse),
}

/// Decode one raw line. Undecodable input is answered with an error response
/// and never ends the session.
fn decode_frame(raw: &[u8]) -> Frame {
    let line = match std::str::from_utf8(raw) {
        Ok(line) => line.trim(),
        Err(err) => {
            log::warn!("request line is not valid UTF-8: {}", err);
            return Frame::Rejected(OutboundResponse::parse_error(format!(
                "Parse error: {}",
                err
            )));
        }
    };
    if line.is_empty() {
        return Frame::Blank;
    }

    let value: Value = match serde_json::from_str(line) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("failed to parse request line: {}", err);
            return Frame::Rejected(OutboundResponse::parse_error(format!(
                "Parse error: {}",
                err
            )));
        }
    };

    let id = value.get("id").filter(|id| !id.is_null()).cloned();
    match serde_json::from_value::<RpcRequest>(value) {
        Ok(request) => Frame::Request(request),
        Err(err) => {
            log::warn!("line is JSON but not a request: {}", err);
            Frame::Rejected(OutboundResponse::invalid_request(
                id,
                format!("Invalid Request: {}", err),
            ))
        }
    }
}

/// Serve requests from `reader` until end of input. Only I/O errors stop the
/// loop early.
pub async fn serve<R, W>(service: &McpService, mut reader: R, mut writer: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }

        let response = match decode_frame(&buf) {
            Frame::Blank => continue,
            Frame::Request(request) => {
                log::debug!("received request: {}", request.method);
                service.handle_request(request).await
            }
            Frame::Rejected(response) => Some(response),
        };

        if let Some(response) = response {
            if response.is_error() {
                log::debug!("answering with error: {:?}", response.error);
            }
            let mut frame = serde_json::to_vec(&response)?;
            frame.push(b'\n');
            writer.write_all(&frame).await?;
            writer.flush().await?;
        }
    }

    log::info!("input closed, stopping transport");
    Ok(())
}

/// Serve on the process's stdin/stdout.
pub async fn serve_stdio(service: &McpService) -> std::io::Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    serve(service, stdin, stdout).await
}
