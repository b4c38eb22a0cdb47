use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_router};

use schemars::JsonSchema;
use serde::Deserialize;

use crate::doctor;
use crate::models::repo::RepoRecord;
use crate::service::{AppService, ProfileOverrides};

// ---------------------------------------------------------------------------
// Tool parameter structs
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, JsonSchema)]
pub struct PersonaProfileParams {
    /// Path to a bundle file with {profile, owned, starred, as_of}
    pub path: String,
    /// Activation threshold 0-100 (default: 45)
    #[serde(default)]
    pub threshold: Option<u8>,
    /// Reference time, RFC 3339 or YYYY-MM-DD (default: bundle, then now)
    #[serde(default)]
    pub as_of: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct RepoScoreParams {
    /// Repository "owner/name"
    pub full_name: String,
    /// Primary language as reported by GitHub
    #[serde(default)]
    pub language: Option<String>,
    /// Repository topics
    #[serde(default)]
    pub topics: Vec<String>,
    /// Repository description
    #[serde(default)]
    pub description: Option<String>,
    /// Include categories below the evidence floor
    #[serde(default)]
    pub all: bool,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct TaxonomyListParams {
    /// Only categories in this group (e.g. "language", "ai-ml")
    #[serde(default)]
    pub group: Option<String>,
}

// ---------------------------------------------------------------------------
// MCP Server
// ---------------------------------------------------------------------------

#[derive(Clone)]
#[allow(dead_code)]
pub struct PersonaServer {
    tool_router: ToolRouter<Self>,
    service: std::sync::Arc<AppService>,
}

#[tool_router]
impl PersonaServer {
    pub fn new(service: AppService) -> Self {
        Self {
            tool_router: Self::tool_router(),
            service: std::sync::Arc::new(service),
        }
    }

    #[tool(
        name = "persona_profile",
        description = "Classify a GitHub account from a repo bundle: personas, projects, radar, star interests and top-10 aggregates"
    )]
    async fn persona_profile(
        &self,
        params: Parameters<PersonaProfileParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let overrides = ProfileOverrides {
            threshold: p.threshold,
            as_of: p.as_of,
        };
        Self::to_tool_result(self.service.profile_from_file(&p.path, &overrides))
    }

    #[tool(
        name = "repo_score",
        description = "Score one repository against every taxonomy category"
    )]
    async fn repo_score(
        &self,
        params: Parameters<RepoScoreParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let repo = RepoRecord {
            full_name: p.full_name,
            language: p.language,
            topics: p.topics,
            description: p.description,
            ..RepoRecord::default()
        };
        Self::to_tool_result(Ok(self.service.score_repo(&repo, p.all)))
    }

    #[tool(
        name = "taxonomy_list",
        description = "List taxonomy categories, optionally filtered by group"
    )]
    async fn taxonomy_list(
        &self,
        params: Parameters<TaxonomyListParams>,
    ) -> Result<CallToolResult, McpError> {
        Self::to_tool_result(self.service.list_taxonomy(params.0.group.as_deref()))
    }

    #[tool(
        name = "doctor",
        description = "Check taxonomy integrity and persona coverage"
    )]
    async fn doctor_tool(&self) -> Result<CallToolResult, McpError> {
        let report = doctor::run_doctor(self.service.taxonomy());
        let json = serde_json::to_string(&report)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

// ---------------------------------------------------------------------------
// Helper
// ---------------------------------------------------------------------------

impl PersonaServer {
    fn to_tool_result<T: serde::Serialize>(
        result: anyhow::Result<T>,
    ) -> Result<CallToolResult, McpError> {
        match result {
            Ok(value) => {
                let json = serde_json::to_string(&value)
                    .map_err(|e| McpError::internal_error(e.to_string(), None))?;
                Ok(CallToolResult::success(vec![Content::text(json)]))
            }
            Err(e) => Err(McpError::internal_error(e.to_string(), None)),
        }
    }
}

// ---------------------------------------------------------------------------
// ServerHandler implementation
// ---------------------------------------------------------------------------

impl ServerHandler for PersonaServer {
    fn get_info(&self) -> ServerInfo {
        let mut capabilities = ServerCapabilities::default();
        capabilities.tools = Some(ToolsCapability::default());
        let mut server_info = Implementation::default();
        server_info.name = "repo-persona".into();
        server_info.version = env!("CARGO_PKG_VERSION").into();
        let mut info = ServerInfo::default();
        info.protocol_version = ProtocolVersion::V_2024_11_05;
        info.capabilities = capabilities;
        info.server_info = server_info;
        info
    }
}
