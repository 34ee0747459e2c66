use crate::{
    args,
    db::DatabaseEnvironment,
    error::PetstoreError,
    pet,
};
use clap::Parser;
use log::{
    info,
    warn,
};
use std::path::Path;

#[derive(Debug, PartialEq)]
pub enum ReleaseEnvironment {
    Development,
    Production,
}

impl ReleaseEnvironment {
    pub fn value(&self) -> String {
        match *self {
            ReleaseEnvironment::Development => String::from("development"),
            ReleaseEnvironment::Production => String::from("production"),
        }
    }
}

/// Helper for separation of dev and prod concerns
pub fn get_release_env() -> ReleaseEnvironment {
    let args = args::Args::parse();
    release_env_from(&args.release_env)
}

fn release_env_from(env: &str) -> ReleaseEnvironment {
    if env == "prod" {
        ReleaseEnvironment::Production
    } else {
        ReleaseEnvironment::Development
    }
}

/// app port
pub fn get_app_port() -> u16 {
    let args = args::Args::parse();
    args.port
}

/// lmdb directory
pub fn get_db_path() -> String {
    let args = args::Args::parse();
    args.db_path
}

/// wipe pets on startup?
pub fn is_clear_pets() -> bool {
    let args = args::Args::parse();
    args.clear_pets
}

/// Rocket configuration for the release environment and port
pub fn rocket_config(env: &ReleaseEnvironment, port: u16) -> rocket::Config {
    let base = match env {
        ReleaseEnvironment::Production => rocket::Config::release_default(),
        ReleaseEnvironment::Development => rocket::Config::debug_default(),
    };
    rocket::Config { port, ..base }
}

/// Open the database and run startup chores
pub fn start_up(db_path: &str, clear_pets: bool) -> Result<DatabaseEnvironment, PetstoreError> {
    info!("petstore is starting up");
    let env = get_release_env();
    info!("{} - petstore is running", env.value());
    let db = DatabaseEnvironment::open(Path::new(db_path), None)?;
    if clear_pets {
        let removed = pet::clear(&db)?;
        warn!("cleared {} pets from the database", removed);
    }
    Ok(db)
}
