//! NutriPlan MCP Server Implementation
//!
//! Implements the MCP server with all planning tools.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::catalog::Catalog;
use crate::models::{ActivityLevel, BodyProfile, Goal, Sex};
use crate::tools::advisor;
use crate::tools::planning;
use crate::tools::status::StatusTracker;

/// Default calorie tolerance window in kcal
fn default_tolerance() -> f64 {
    150.0
}

/// NutriPlan MCP Service
#[derive(Clone)]
pub struct PlannerService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    catalog_path: PathBuf,
    /// Current catalog snapshot; reload swaps the inner Arc so in-flight
    /// tool calls keep computing on the snapshot they started with
    catalog: Arc<RwLock<Arc<Catalog>>>,
    tool_router: ToolRouter<PlannerService>,
}

impl PlannerService {
    pub fn new(catalog_path: PathBuf, catalog: Catalog) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(catalog_path.clone()))),
            catalog_path,
            catalog: Arc::new(RwLock::new(Arc::new(catalog))),
            tool_router: Self::tool_router(),
        }
    }

    /// Clone out the current catalog snapshot
    fn snapshot(&self) -> Arc<Catalog> {
        self.catalog.read().unwrap().clone()
    }

    /// Parse the string profile parameters into typed values
    fn parse_profile(
        weight_kg: f64,
        height_cm: f64,
        age_years: u32,
        sex: &str,
        activity_level: &str,
        goal: &str,
    ) -> Result<(BodyProfile, ActivityLevel, Goal), McpError> {
        let sex = Sex::parse(sex).map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        let activity = ActivityLevel::parse(activity_level)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        let goal = Goal::parse(goal).map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        Ok((BodyProfile::new(weight_kg, height_cm, age_years, sex), activity, goal))
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DailyCaloriesParams {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in whole years
    pub age_years: u32,
    /// Biological sex: male or female
    pub sex: String,
    /// Activity level: sedentary, light, moderate, active, very_active
    pub activity_level: String,
    /// Goal: maintenance, bulking, cutting
    pub goal: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SplitCaloriesParams {
    /// Daily calorie total to split across meal times
    pub total_calories: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RecommendMealsParams {
    /// Calorie target for one meal
    pub calorie_target: f64,
    /// Inclusive tolerance window in kcal (default 150)
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Optional category filter, matched case-insensitively
    pub category: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PlanMealsParams {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in whole years
    pub age_years: u32,
    /// Biological sex: male or female
    pub sex: String,
    /// Activity level: sedentary, light, moderate, active, very_active
    pub activity_level: String,
    /// Goal: maintenance, bulking, cutting
    pub goal: String,
    /// Inclusive tolerance window in kcal (default 150)
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Optional category filter, matched case-insensitively
    pub category: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AskAdvisorParams {
    /// Free-text question for the advisory chat endpoint
    pub question: String,
    /// Optional calorie target; when set, matching catalog rows are sent
    /// to the endpoint as context
    pub calorie_target: Option<f64>,
    /// Inclusive tolerance window in kcal (default 150)
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Optional category filter for the context rows
    pub category: Option<String>,
}

// ============================================================================
// Response Structs
// ============================================================================

#[derive(Debug, Serialize)]
struct ReloadCatalogResponse {
    path: String,
    rows: usize,
    columns: Vec<String>,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl PlannerService {
    // --- Status ---

    #[tool(description = "Get the current status of the NutriPlan service including build info, catalog stats, and process information")]
    async fn planner_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status(&self.snapshot());
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Planning ---

    #[tool(description = "Compute the basal metabolic rate and total daily calorie target for a body profile, activity level, and goal")]
    fn daily_calories(&self, Parameters(p): Parameters<DailyCaloriesParams>) -> Result<CallToolResult, McpError> {
        let (profile, activity, goal) =
            Self::parse_profile(p.weight_kg, p.height_cm, p.age_years, &p.sex, &p.activity_level, &p.goal)?;
        let result = planning::daily_calories(&profile, activity, goal)
            .map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Split a daily calorie total into breakfast/lunch/dinner/snack budgets (25/35/30/10 percent, rounded per slot)")]
    fn split_calories(&self, Parameters(p): Parameters<SplitCaloriesParams>) -> Result<CallToolResult, McpError> {
        let result = planning::split_calories(p.total_calories)
            .map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "List catalog items whose calories fall within a tolerance window of a target, optionally filtered by category, ordered by calories")]
    fn recommend_meals(&self, Parameters(p): Parameters<RecommendMealsParams>) -> Result<CallToolResult, McpError> {
        let catalog = self.snapshot();
        let result = planning::recommend_meals(&catalog, p.calorie_target, p.tolerance, p.category.as_deref())
            .map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Build a full daily meal plan: calorie target, per-meal budgets, and catalog recommendations for every meal time")]
    fn plan_meals(&self, Parameters(p): Parameters<PlanMealsParams>) -> Result<CallToolResult, McpError> {
        let (profile, activity, goal) =
            Self::parse_profile(p.weight_kg, p.height_cm, p.age_years, &p.sex, &p.activity_level, &p.goal)?;
        let catalog = self.snapshot();
        let result = planning::plan_meals(&catalog, &profile, activity, goal, p.tolerance, p.category.as_deref())
            .map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Advisory ---

    #[tool(description = "Ask the advisory chat endpoint a free-text question, grounded in catalog recommendations for an optional calorie target")]
    async fn ask_advisor(&self, Parameters(p): Parameters<AskAdvisorParams>) -> Result<CallToolResult, McpError> {
        let recommendations = match p.calorie_target {
            Some(target) => {
                let catalog = self.snapshot();
                planning::recommend_meals(&catalog, target, p.tolerance, p.category.as_deref())
                    .map_err(|e| McpError::internal_error(e, None))?
                    .matches
            }
            None => Vec::new(),
        };

        // The chat client is blocking; keep it off the async worker threads
        let question = p.question;
        let result = tokio::task::spawn_blocking(move || {
            advisor::ask_advisor(&question, &recommendations)
        })
        .await
        .map_err(|e| McpError::internal_error(e.to_string(), None))?
        .map_err(|e| McpError::internal_error(e, None))?;

        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Catalog ---

    #[tool(description = "Reload the food catalog from its JSON file and swap in the new snapshot")]
    fn reload_catalog(&self) -> Result<CallToolResult, McpError> {
        let catalog = Catalog::load(&self.catalog_path)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        let response = ReloadCatalogResponse {
            path: self.catalog_path.display().to_string(),
            rows: catalog.len(),
            columns: catalog.columns().iter().cloned().collect(),
        };
        tracing::info!(rows = response.rows, "catalog reloaded");

        *self.catalog.write().unwrap() = Arc::new(catalog);

        let json = serde_json::to_string_pretty(&response).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for PlannerService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "nutriplan".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("NutriPlan Meal Planner".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "NutriPlan - Daily calorie planning and meal recommendations. \
                 daily_calories computes BMR/TDEE from weight_kg, height_cm, age_years, sex \
                 (male/female), activity_level (sedentary/light/moderate/active/very_active), \
                 and goal (maintenance/bulking/cutting). \
                 split_calories divides a total into breakfast/lunch/dinner/snack budgets. \
                 recommend_meals matches catalog items within a calorie tolerance window. \
                 plan_meals runs the whole pipeline in one call. \
                 ask_advisor forwards a free-text question to the advisory chat endpoint with \
                 matching catalog rows as context. \
                 reload_catalog re-reads the catalog JSON; planner_status reports service health."
                    .into(),
            ),
        }
    }
}
