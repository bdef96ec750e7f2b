use std::error::Error;

use pushkind_offers::db::{establish_connection_pool, run_migrations};
use pushkind_offers::models::config::ServerConfig;
use pushkind_offers::repository::DieselRepository;
use pushkind_offers::services::categories::get_all_categories;
use pushkind_offers::services::offers::get_all_offers;

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::load()?;

    let pool = establish_connection_pool(&config.database_url).map_err(|e| {
        log::error!("Failed to open database {}: {e}", config.database_url);
        e
    })?;

    let applied = run_migrations(&pool)?;
    if applied > 0 {
        log::info!("Applied {applied} pending migration(s)");
    }

    let repo = DieselRepository::new(pool);
    let categories = get_all_categories(&repo)?;
    let offers = get_all_offers(&repo)?;

    log::info!(
        "Database {} ready: {} categories, {} offers",
        config.database_url,
        categories.len(),
        offers.len()
    );

    Ok(())
}
