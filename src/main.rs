use dotenvy::dotenv;
use shiftbook::errors::Result;
use shiftbook::store::Stores;
use shiftbook::{cli, config};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();

    // 3. Load the application configuration
    let app_config = config::load_app_configuration()?;
    info!("Successfully processed application configuration.");

    // 4. Bind the record stores to the configured paths
    let stores = Stores::from_config(&app_config);

    // 5. Run the interactive session controller until the user exits
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = cli::Console::new(stdin.lock(), stdout.lock());
    cli::run(&app_config, &stores, &mut console)
}
