use clap::{Arg, ArgMatches, Command, value_parser};

use crate::config::Settings;
use crate::db::Db;

pub fn cli() -> Command {
    Command::new("restaurant")
        .about("Restaurant data service backed by MongoDB")
        .arg(
            Arg::new("address")
                .long("address")
                .global(true)
                .help("MongoDB connection string (overrides RESTAURANT_ADDRESS / DATABASE_URL)")
                .value_name("URI"),
        )
        .arg(
            Arg::new("database")
                .long("database")
                .global(true)
                .help("Database that collections are resolved in")
                .value_name("NAME"),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .global(true)
                .help("Seconds to wait for the initial connection")
                .value_name("SECS")
                .value_parser(value_parser!(u64).range(1..)),
        )
        .subcommand(Command::new("serve").about("Connect and serve the HTTP API (default)"))
        .subcommand(
            Command::new("collection")
                .about("Connect, resolve a collection and print its namespace")
                .arg(
                    Arg::new("name")
                        .required(true)
                        .help("Collection name, e.g. foods")
                        .value_name("NAME"),
                ),
        )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Serve,
    Collection(String),
}

/// What the user asked for on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub address: Option<String>,
    pub database: Option<String>,
    pub timeout: Option<u64>,
    pub mode: Mode,
}

impl Invocation {
    pub fn parse() -> Self {
        Self::from_matches(&cli().get_matches())
    }

    pub fn try_parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Ok(Self::from_matches(&cli().try_get_matches_from(args)?))
    }

    fn from_matches(matches: &ArgMatches) -> Self {
        let mode = match matches.subcommand() {
            Some(("collection", sub_matches)) => Mode::Collection(
                sub_matches
                    .get_one::<String>("name")
                    .cloned()
                    .unwrap_or_default(),
            ),
            _ => Mode::Serve,
        };

        Self {
            address: matches.get_one::<String>("address").cloned(),
            database: matches.get_one::<String>("database").cloned(),
            timeout: matches.get_one::<u64>("timeout").copied(),
            mode,
        }
    }

    /// Layers the flags given on the command line over `settings`.
    pub fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(address) = &self.address {
            settings.address = address.clone();
        }
        if let Some(database) = &self.database {
            settings.database = database.clone();
        }
        if let Some(timeout) = self.timeout {
            settings.connect_timeout = timeout;
        }
        settings
    }
}

/// Prints `<database>.<collection>` for the resolved handle.
pub fn print_collection(db: &Db, name: &str) {
    let namespace = db.collection::<mongodb::bson::Document>(name).namespace();
    println!("{}.{}", namespace.db, namespace.coll);
}
