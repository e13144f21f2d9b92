use std::sync::Arc;

use log::info;
use symptom_analyzer::config::ServiceConfig;
use symptom_analyzer::context::AnalyzerContext;
use symptom_analyzer::{Result, http};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServiceConfig::from_env();
    info!(
        "loading artifacts from {} and medicines from {}",
        config.artifact_dir.display(),
        config.medicine_path.display()
    );

    // Startup-fatal: every artifact must load and validate before we bind.
    let context = AnalyzerContext::load(&config)?;
    let app = http::router(Arc::new(context));

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!("listening on {}", config.listen_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
