//! # Database connection module
//!
//! Brings up the MongoDB client once at startup and hands out collection
//! handles afterwards.
//!
//! The client is connected exactly once. There is no reconnect and no later
//! liveness check: if the server goes away after startup, the failure surfaces
//! on whatever operation next touches the collection.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mongodb::bson::Document;
//! use restaurant_db::{config::Settings, db::Db};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Db::connect(&Settings::load()?).await?;
//! let foods = db.collection::<Document>("foods");
//! # Ok(())
//! # }
//! ```

use std::io::{self, Write};

use mongodb::{Client, Collection, bson::doc, options::ClientOptions};

use crate::config::{DEFAULT_DATABASE, Settings};
use crate::errors::ConnectError;

/// Line written to the trace once the server has answered.
pub const CONNECTED_LINE: &str = "connected to mongodb";

/// Connects to the configured address, writing bootstrap progress to stdout.
pub async fn acquire_client(settings: &Settings) -> Result<Client, ConnectError> {
    acquire_client_with_trace(settings, &mut io::stdout()).await
}

/// Connects to the configured address, writing bootstrap progress to `trace`.
///
/// The address is written before anything else is attempted. [`CONNECTED_LINE`]
/// is written only after the server has answered a `ping` within
/// [`Settings::timeout`].
pub async fn acquire_client_with_trace<W: Write>(
    settings: &Settings,
    trace: &mut W,
) -> Result<Client, ConnectError> {
    let address = settings.address.clone();
    let timeout = settings.timeout();

    writeln!(trace, "{address}")?;
    trace.flush()?;

    tracing::debug!(%address, ?timeout, "connecting to mongodb");

    let mut options = ClientOptions::parse(&address)
        .await
        .map_err(|source| ConnectError::InvalidAddress {
            address: address.clone(),
            source,
        })?;
    options.connect_timeout = Some(timeout);
    options.server_selection_timeout = Some(timeout);

    let client =
        Client::with_options(options).map_err(|source| ConnectError::InvalidAddress {
            address: address.clone(),
            source,
        })?;

    let admin = client.database("admin");
    let ping = admin.run_command(doc! { "ping": 1 });
    match tokio::time::timeout(timeout, ping).await {
        Ok(Ok(_)) => {}
        Ok(Err(source)) => return Err(ConnectError::Unreachable { address, source }),
        Err(_) => return Err(ConnectError::Timeout { address, timeout }),
    }

    writeln!(trace, "{CONNECTED_LINE}")?;
    trace.flush()?;

    tracing::info!(%address, "connected to mongodb");

    Ok(client)
}

/// Resolves `name` inside the default `restaurant` database.
///
/// Never touches the network and performs no validation on `name`.
pub fn resolve_collection<T: Send + Sync>(client: &Client, name: &str) -> Collection<T> {
    client.database(DEFAULT_DATABASE).collection(name)
}

/// The connected client plus the database every lookup is scoped to.
///
/// Built once in `main` and passed to whatever needs collection access.
/// Cloning is cheap: the driver client is reference counted internally.
#[derive(Clone, Debug)]
pub struct Db {
    client: Client,
    database: String,
}

impl Db {
    pub fn new(client: Client, database: impl Into<String>) -> Self {
        Self {
            client,
            database: database.into(),
        }
    }

    pub async fn connect(settings: &Settings) -> Result<Self, ConnectError> {
        let client = acquire_client(settings).await?;
        Ok(Self::new(client, settings.database.clone()))
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.client.database(&self.database).collection(name)
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn database_name(&self) -> &str {
        &self.database
    }
}
