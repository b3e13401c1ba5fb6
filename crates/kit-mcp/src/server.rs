//! MCP server over stdio.
//!
//! Newline-delimited JSON-RPC 2.0: one message per line in, one response per
//! line out. Every request runs as its own task, so a slow Kit call never
//! blocks the others; responses go out in completion order through a single
//! writer task.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::dispatch::ToolDispatcher;
use crate::error::{McpError, Result};
use crate::protocol::{
    CallToolParams, CallToolResult, InitializeParams, InitializeResult, JsonRpcError,
    JsonRpcMessage, JsonRpcResponse, ListToolsResult, RequestId, ServerCapabilities, ServerInfo,
    ToolsCapability,
};

/// MCP server exposing the Kit tool catalogue.
#[derive(Debug, Clone)]
pub struct McpServer {
    dispatcher: ToolDispatcher,
    info: ServerInfo,
}

impl McpServer {
    /// Create a server around a dispatcher.
    pub fn new(dispatcher: ToolDispatcher) -> Self {
        Self {
            dispatcher,
            info: ServerInfo::default(),
        }
    }

    /// Override the name and version reported to hosts.
    pub fn with_info(mut self, info: ServerInfo) -> Self {
        self.info = info;
        self
    }

    /// The dispatcher tool calls go through.
    pub fn dispatcher(&self) -> &ToolDispatcher {
        &self.dispatcher
    }

    /// Serve on the process's stdin and stdout until stdin closes.
    pub async fn serve_stdio(self) -> Result<()> {
        tracing::info!(
            server = %self.info.name,
            tools = self.dispatcher.registry().len(),
            "MCP server listening on stdio"
        );
        self.serve(tokio::io::stdin(), tokio::io::stdout()).await
    }

    /// Serve on an arbitrary byte stream pair until the reader hits EOF.
    ///
    /// Requests still in flight at EOF, or when reading fails, are answered
    /// before returning.
    pub async fn serve<R, W>(self, reader: R, writer: W) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let writer_task = tokio::spawn(write_responses(writer, rx));

        let server = Arc::new(self);
        let mut in_flight = JoinSet::new();
        let mut reader = BufReader::new(reader);
        let mut buf = Vec::new();

        let read_result = loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf).await {
                Ok(0) => break Ok(()),
                Ok(_) => {}
                Err(e) => break Err(e),
            }

            let line = buf.trim_ascii();
            if line.is_empty() {
                continue;
            }

            let message = match decode(line) {
                Ok(message) => message,
                Err(response) => {
                    let _ = tx.send(*response);
                    continue;
                }
            };

            let server = Arc::clone(&server);
            let tx = tx.clone();
            in_flight.spawn(async move {
                if let Some(response) = server.handle(message).await {
                    let _ = tx.send(response);
                }
            });

            while in_flight.try_join_next().is_some() {}
        };

        if let Err(e) = &read_result {
            tracing::error!(error = %e, "failed to read input");
        }
        tracing::debug!(pending = in_flight.len(), "input closed, draining requests");
        while in_flight.join_next().await.is_some() {}
        drop(tx);

        let written = writer_task
            .await
            .map_err(|e| McpError::transport(format!("writer task failed: {}", e)))?;
        read_result?;
        written
    }

    /// Handle one message. Notifications produce no response.
    pub async fn handle(&self, message: JsonRpcMessage) -> Option<JsonRpcResponse> {
        let Some(id) = message.id else {
            tracing::debug!(method = %message.method, "notification");
            return None;
        };

        tracing::debug!(method = %message.method, id = ?id, "request");
        let outcome = match message.method.as_str() {
            "initialize" => self.initialize(message.params),
            "ping" => Ok(Value::Object(Default::default())),
            "tools/list" => to_result(&ListToolsResult {
                tools: self.dispatcher.tools(),
            }),
            "tools/call" => self.call_tool(message.params).await,
            other => Err((
                JsonRpcError::METHOD_NOT_FOUND,
                format!("Method not found: {}", other),
            )),
        };

        Some(match outcome {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err((code, msg)) => JsonRpcResponse::error(Some(id), code, msg),
        })
    }

    fn initialize(&self, params: Option<Value>) -> MethodResult {
        let params: InitializeParams = params.map(parse_params).transpose()?.unwrap_or_default();
        if let Some(client) = &params.client_info {
            tracing::info!(client = %client.name, version = %client.version, "host connected");
        }

        to_result(&InitializeResult {
            protocol_version: params.negotiated_version().to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
            },
            server_info: self.info.clone(),
        })
    }

    async fn call_tool(&self, params: Option<Value>) -> MethodResult {
        let CallToolParams { name, arguments } = parse_params(params.unwrap_or(Value::Null))?;

        // A panicking tool must not take the connection down with it
        let dispatcher = self.dispatcher.clone();
        let tool = name.clone();
        let result = match tokio::spawn(async move { dispatcher.invoke(&tool, arguments).await })
            .await
        {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(tool = %name, error = %e, "tool task failed");
                CallToolResult::error(format!("tool '{}' failed unexpectedly", name))
            }
        };

        to_result(&result)
    }
}

type MethodResult = std::result::Result<Value, (i64, String)>;

fn parse_params<T: serde::de::DeserializeOwned>(params: Value) -> std::result::Result<T, (i64, String)> {
    serde_json::from_value(params)
        .map_err(|e| (JsonRpcError::INVALID_PARAMS, format!("Invalid params: {}", e)))
}

fn to_result<T: Serialize>(value: &T) -> MethodResult {
    serde_json::to_value(value).map_err(|e| (JsonRpcError::INTERNAL_ERROR, e.to_string()))
}

/// Decode one line into a message, or the error response to send back.
fn decode(line: &[u8]) -> std::result::Result<JsonRpcMessage, Box<JsonRpcResponse>> {
    let value: Value = serde_json::from_slice(line).map_err(|e| {
        tracing::warn!(error = %e, "unparseable message");
        Box::new(JsonRpcResponse::error(
            None,
            JsonRpcError::PARSE_ERROR,
            format!("Parse error: {}", e),
        ))
    })?;

    let id = value
        .get("id")
        .cloned()
        .and_then(|id| serde_json::from_value::<RequestId>(id).ok());

    serde_json::from_value(value).map_err(|e| {
        tracing::warn!(error = %e, "invalid request");
        Box::new(JsonRpcResponse::error(
            id,
            JsonRpcError::INVALID_REQUEST,
            format!("Invalid request: {}", e),
        ))
    })
}

async fn write_responses<W>(mut writer: W, mut rx: mpsc::UnboundedReceiver<JsonRpcResponse>) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(response) = rx.recv().await {
        let mut line = serde_json::to_vec(&response)?;
        line.push(b'\n');
        writer.write_all(&line).await?;
        writer.flush().await?;
    }
    Ok(())
}
