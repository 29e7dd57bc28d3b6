//! # ETU Schedule Bot Main Entry Point
//!
//! Initializes logging, loads configuration, and runs the Telegram bot
//! alongside the liveness HTTP server.

use anyhow::Result;
use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use etu_schedule_bot::bot::handlers::{BotContext, BotHandler};
use etu_schedule_bot::bot::state::ChatState;
use etu_schedule_bot::config::Config;
use etu_schedule_bot::schedule::WeekCalendar;
use etu_schedule_bot::services::gateway::ScheduleGateway;
use etu_schedule_bot::services::health::HealthService;
use etu_schedule_bot::utils::logging::log_system_event;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "etu_schedule_bot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    let offset = config.offset()?;

    info!("Starting ETU Schedule Bot v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded - API: {}, HTTP Port: {}, UTC offset: {}h, semester start: {}",
        config.api_base,
        config.http_port,
        config.utc_offset_hours,
        config
            .semester_start
            .map(|d| d.to_string())
            .unwrap_or_else(|| "ISO weeks".to_string())
    );

    let gateway = ScheduleGateway::new(config.api_base.clone())?;
    let context = BotContext::new(gateway, WeekCalendar::new(config.semester_start), offset);

    info!("Initializing Telegram bot...");
    let bot = Bot::new(&config.telegram_bot_token);
    let handler = BotHandler::new(context);

    let health_service = HealthService::new();
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    info!("Liveness server starting on port {}", config.http_port);

    // Run both the bot and the liveness server concurrently
    let bot_task = tokio::spawn(async move {
        let storage = InMemStorage::<ChatState>::new();
        Dispatcher::builder(bot, handler.schema())
            .dependencies(dptree::deps![storage])
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    });

    let health_task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, health_service.router).await {
            tracing::error!("Liveness server error: {}", e);
        }
    });

    // Wait for either task to complete (which would indicate shutdown)
    tokio::select! {
        result1 = bot_task => {
            if let Err(e) = result1 {
                tracing::error!("Bot task error: {}", e);
            }
        }
        result2 = health_task => {
            if let Err(e) = result2 {
                tracing::error!("Liveness task error: {}", e);
            }
        }
    }

    log_system_event("Application stopped", None);
    Ok(())
}
