use restaurant_db::{
    cli::{self, Invocation, Mode},
    config::Settings,
    db::Db,
    errors::BootstrapError,
    handlers,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Connects once, then either serves or runs a one-shot command.
///
/// Any failure before the server is up is fatal: it is logged and the
/// process exits with status 1.
#[rocket::main]
async fn main() {
    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();

    let invocation = Invocation::parse();

    if let Err(e) = run(invocation).await {
        tracing::error!(error = %e, "fatal");
        eprintln!("fatal: {e}");
        std::process::exit(1);
    }
}

async fn run(invocation: Invocation) -> Result<(), BootstrapError> {
    let settings = invocation.apply(Settings::load()?).validate()?;
    let db = Db::connect(&settings).await?;

    match invocation.mode {
        Mode::Collection(name) => cli::print_collection(&db, &name),
        Mode::Serve => {
            handlers::build(db).launch().await.map_err(Box::new)?;
        }
    }

    Ok(())
}
