//! NutriPlan
//!
//! An MCP server for daily calorie planning and meal recommendations.

use std::path::PathBuf;
use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

mod build_info;
mod catalog;
mod mcp;
mod models;
mod planner;
mod tools;

use catalog::Catalog;
use mcp::PlannerService;

/// Get the catalog path from environment or use default
fn get_catalog_path() -> PathBuf {
    std::env::var("NUTRIPLAN_CATALOG_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let mut path = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()))
                .unwrap_or_else(|| PathBuf::from("."));

            // Go up from target/release or target/debug to project root
            if path.ends_with("release") || path.ends_with("debug") {
                if let Some(parent) = path.parent() {
                    if let Some(grandparent) = parent.parent() {
                        path = grandparent.to_path_buf();
                    }
                }
            }

            path.push("data");
            path.push("catalog.json");
            path
        })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("nutriplan=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    // Print startup banner to stderr
    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    // Get catalog path
    let catalog_path = get_catalog_path();
    eprintln!("Catalog path: {}", catalog_path.display());

    // Load the catalog snapshot. A missing file is tolerated (the server can
    // still compute budgets and reload later); a malformed file is not.
    let catalog = if catalog_path.exists() {
        let catalog = Catalog::load(&catalog_path)?;
        eprintln!("Catalog loaded: {} rows", catalog.len());
        catalog
    } else {
        tracing::warn!(path = %catalog_path.display(), "catalog file not found, starting empty");
        Catalog::default()
    };

    // Create the planner service
    let service = PlannerService::new(catalog_path, catalog);

    // Create stdio transport
    let transport = (stdin(), stdout());

    // Start the MCP server
    let server = service.serve(transport).await?;

    // Wait for the server to complete
    server.waiting().await?;

    Ok(())
}
