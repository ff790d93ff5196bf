//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the format check over stdio so editors and assistants can ask for
//! diagnostics on a buffer without a file on disk.
//!
//! # Architecture
//!
//! The server is a presentation layer over `format-lint-core`. Tool methods
//! validate input, delegate to the core, and serialize the result; they hold
//! no per-document state.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use format_lint_core::diagnostics::{self, AllowList};
use format_lint_core::lint;

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `check_formats` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CheckFormatsParams {
    /// The document text to scan.
    pub text: String,
    /// Accepted values. Omit to use the server's configured allow-list.
    pub allowed_values: Option<Vec<String>>,
}

/// MCP server exposing the format check.
#[derive(Clone)]
pub struct FormatServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    allow_list: AllowList,
    max_input_bytes: Option<usize>,
}

impl Default for FormatServer {
    fn default() -> Self {
        Self::new(AllowList::default(), Some(format_lint_core::DEFAULT_MAX_INPUT_BYTES))
    }
}

#[tool_router]
impl FormatServer {
    /// Create a server that checks against `allow_list` unless a call overrides it.
    pub fn new(allow_list: AllowList, max_input_bytes: Option<usize>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            allow_list,
            max_input_bytes,
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "allowed_values": self.allow_list.values(),
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}\nAllowed formats: {}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
                self.allow_list,
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Report `format` literals whose value is not allowed.
    #[tool(
        description = "Scan text for `format: '<value>'` literals and return a warning diagnostic (with 0-based line/character range) for each value not in the allow-list."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn check_formats(
        &self,
        Parameters(params): Parameters<CheckFormatsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "check_formats",
            text_len = params.text.len(),
            custom_allow = params.allowed_values.is_some(),
            "executing MCP tool"
        );

        lint::check_input_size(params.text.len(), self.max_input_bytes)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        let custom;
        let allow_list = match params.allowed_values {
            Some(values) => {
                custom = AllowList::new(values);
                &custom
            }
            None => &self.allow_list,
        };

        let diagnostics = diagnostics::check_text(&params.text, allow_list)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        let json = serde_json::to_string_pretty(&diagnostics)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(
            tool = "check_formats",
            count = diagnostics.len(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for FormatServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use check_formats to find disallowed `format` values in text.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
