//! MCP tool definitions for the note store and weather lookup.

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};

use devnotes_core::config::SERVER_NAME;
use devnotes_core::Config;
use devnotes_vault::NoteStore;
use devnotes_weather::WeatherClient;

use crate::envelope::{respond, ToolOutcome};
use crate::params::{ReadNoteRequest, SaveNoteRequest, WeatherRequest};

/// dev-notes MCP server. Stateless between calls; the note files are the
/// only persistent state.
#[derive(Debug, Clone)]
pub struct DevNotesService {
    store: NoteStore,
    weather: WeatherClient,
    tool_router: ToolRouter<Self>,
}

impl DevNotesService {
    /// Create a server for the given store directory and weather endpoint.
    pub fn new(config: &Config) -> Self {
        Self {
            store: NoteStore::new(config.notes_dir.clone()),
            weather: WeatherClient::from_config(config),
            tool_router: Self::tool_router(),
        }
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    pub async fn run_save_note(
        &self,
        req: SaveNoteRequest,
    ) -> devnotes_core::Result<ToolOutcome> {
        let saved = self
            .store
            .save(&req.title, &req.content)
            .await
            .map(|path| format!("Saved note \"{}\" to {}", req.title, path.display()));
        ToolOutcome::recover(saved)
    }

    pub async fn run_list_notes(&self) -> devnotes_core::Result<ToolOutcome> {
        let lines = self.store.list_lines().await.map(|lines| lines.join("\n"));
        ToolOutcome::recover(lines)
    }

    pub async fn run_read_note(
        &self,
        req: ReadNoteRequest,
    ) -> devnotes_core::Result<ToolOutcome> {
        ToolOutcome::recover(self.store.read(&req.title).await)
    }

    pub async fn run_get_weather(
        &self,
        req: WeatherRequest,
    ) -> devnotes_core::Result<ToolOutcome> {
        let report = self
            .weather
            .current(&req.location)
            .await
            .map(|report| report.to_string());
        ToolOutcome::recover(report)
    }
}

#[tool_router]
impl DevNotesService {
    /// Save a markdown note, overwriting any note whose title has the same slug.
    #[tool(description = "Save a markdown note to ~/dev-notes/")]
    async fn save_note(
        &self,
        Parameters(req): Parameters<SaveNoteRequest>,
    ) -> Result<CallToolResult, McpError> {
        respond(self.run_save_note(req).await)
    }

    /// List every `.md` file in the store with its last-modified time.
    #[tool(description = "List all saved notes in ~/dev-notes/")]
    async fn list_notes(&self) -> Result<CallToolResult, McpError> {
        respond(self.run_list_notes().await)
    }

    /// Read a note by title.
    #[tool(description = "Read a saved note from ~/dev-notes/")]
    async fn read_note(
        &self,
        Parameters(req): Parameters<ReadNoteRequest>,
    ) -> Result<CallToolResult, McpError> {
        respond(self.run_read_note(req).await)
    }

    /// Current conditions from the weather endpoint.
    #[tool(description = "Get current weather for a location")]
    async fn get_weather(
        &self,
        Parameters(req): Parameters<WeatherRequest>,
    ) -> Result<CallToolResult, McpError> {
        respond(self.run_get_weather(req).await)
    }
}

#[tool_handler]
impl ServerHandler for DevNotesService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(
                "Dev notes server. Save, list, and read markdown notes kept in a local \
                 directory, and look up current weather for a location."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
