use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::config::ServerConfig;
use crate::handlers;
use crate::protocol::{self, JsonRpcResponse};
use crate::tools::ToolRegistry;

/// Stream-level failures. These end the session; per-record problems never do.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("input record exceeds {limit} bytes")]
    RecordTooLarge { limit: usize },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// MCP server that communicates over stdio using newline-delimited JSON-RPC 2.0.
pub struct McpServer {
    config: ServerConfig,
    registry: ToolRegistry,
}

impl McpServer {
    pub fn new(config: ServerConfig, registry: ToolRegistry) -> Self {
        Self { config, registry }
    }

    /// Serve stdin/stdout until stdin is exhausted.
    pub async fn run(&self) -> Result<(), SessionError> {
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.serve(stdin, stdout).await
    }

    /// Serve one session over an arbitrary line reader and writer.
    ///
    /// Each response is written and flushed before the next record is read,
    /// so responses leave in request order.
    pub async fn serve<R, W>(&self, mut reader: R, mut writer: W) -> Result<(), SessionError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let limit = self.config.max_message_bytes;
        tracing::info!(tools = self.registry.len(), max_message_bytes = limit, "session started");

        let mut raw = Vec::new();
        loop {
            raw.clear();
            // One byte of headroom lets an over-long record show itself.
            let n = (&mut reader)
                .take((limit as u64).saturating_add(1))
                .read_until(b'\n', &mut raw)
                .await?;
            if n == 0 {
                break;
            }

            let record = raw.strip_suffix(b"\n").unwrap_or(&raw[..]);
            if record.len() > limit {
                tracing::error!(limit, "input record too large, closing session");
                return Err(SessionError::RecordTooLarge { limit });
            }

            let req = match protocol::decode(record) {
                Ok(r) => r,
                Err(protocol::DecodeError::Empty) => continue,
                Err(e) => {
                    tracing::warn!("Skipping undecodable record: {e}");
                    continue;
                }
            };

            let resp = handlers::dispatch(&req, &self.registry);
            write_response(&mut writer, &resp).await?;
        }

        tracing::info!("input closed, session ended");
        Ok(())
    }
}

async fn write_response<W>(writer: &mut W, resp: &JsonRpcResponse) -> Result<(), SessionError>
where
    W: AsyncWrite + Unpin,
{
    let out = protocol::encode(resp);
    writer.write_all(out.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}
