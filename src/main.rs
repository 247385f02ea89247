#![recursion_limit = "512"]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use axum::Router;
    use inkfinity::app::*;
    use inkfinity::core::config::Config;
    use inkfinity::core::db::{DbConfig, WaitlistRepository, create_pool, create_pool_with_migrations, health_check};
    use inkfinity::core::waitlist::{MemoryWaitlistStore, WaitlistService, waitlist_router};
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::compression::{CompressionLayer, CompressionLevel};
    use tower_http::services::ServeDir;

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    tracing::info!(
        "Config loaded: database={}, run_migrations={}, db_max_connections={}",
        config.has_database(),
        config.run_migrations,
        config.db_max_connections
    );
    config.warn_missing_links();

    // Postgres when configured, otherwise signups only live as long as the process
    let waitlist_api = match config.database_url.as_deref() {
        Some(url) => {
            let db_config = DbConfig::new(url).max_connections(config.db_max_connections);
            let pool = if config.run_migrations {
                create_pool_with_migrations(&db_config).await?
            } else {
                create_pool(&db_config).await?
            };
            health_check(&pool).await?;
            tracing::info!("Waitlist stored in PostgreSQL");
            waitlist_router(WaitlistService::new(WaitlistRepository::new(pool)))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, waitlist signups are kept in memory");
            waitlist_router(WaitlistService::new(MemoryWaitlistStore::new()))
        }
    };

    // Can be overridden via LEPTOS_SITE_ADDR env var
    let conf = get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let routes = generate_route_list(App);

    // Serves .br and .gz variants of /pkg assets when present
    let pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root))
        .precompressed_br()
        .precompressed_gzip();

    let leptos_router = Router::new()
        .nest_service("/pkg", pkg_service)
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    let app = Router::new()
        .merge(waitlist_api)
        .merge(leptos_router)
        .layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        );

    tracing::info!("listening on http://{}", &addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
