#![deny(missing_docs)]

//! Logic for interfacing with LMDB.

extern crate kn0sys_lmdb_rs as lmdb;

use crate::error::PetstoreError;
use lmdb::*;
use log::{
    debug,
    error,
    info,
};
use std::path::Path;
use sysinfo::System;

/// Ratio of map size to available memory is 20 percent
const MAP_SIZE_MEMORY_RATIO: f32 = 0.2;

/// The database environment for handling primary database operations.
///
/// It is opened once at start-up and passed to whoever needs storage,
///
/// there is no process-wide instance.
pub struct DatabaseEnvironment {
    /// LMDB environment backing the store
    pub env: Environment,
    /// Handle to the default database of `env`
    pub handle: DbHandle,
}

impl DatabaseEnvironment {
    /// Opens environment in specified path, creating the directory if needed.
    ///
    /// When `map_size` is `None` it is read from `LMDB_MAP_SIZE` and falls back
    ///
    /// to 20 percent of available memory.
    pub fn open(path: &Path, map_size: Option<u64>) -> Result<Self, PetstoreError> {
        let env_map_size = map_size.unwrap_or_else(default_map_size);
        info!("setting lmdb map size to: {}", env_map_size);
        std::fs::create_dir_all(path)?;
        info!("excecuting lmdb open at {}", path.display());
        let env: Environment = EnvBuilder::new().map_size(env_map_size).open(path, 0o777)?;
        let handle: DbHandle = env.get_default_db(DbFlags::empty())?;
        Ok(DatabaseEnvironment { env, handle })
    }
    /// Run `f` inside a single write transaction.
    ///
    /// The transaction is committed when `f` returns `Ok` and aborted otherwise,
    ///
    /// so a multi-key mutation is either fully applied or not at all.
    pub fn transact<T, F>(&self, f: F) -> Result<T, PetstoreError>
    where
        F: FnOnce(&Database) -> Result<T, PetstoreError>,
    {
        let txn = self.env.new_transaction()?;
        let result = {
            let db: Database = txn.bind(&self.handle);
            f(&db)?
        };
        txn.commit()?;
        debug!("lmdb transaction committed");
        Ok(result)
    }
    /// Run `f` inside a read-only transaction.
    pub fn view<T, F>(&self, f: F) -> Result<T, PetstoreError>
    where
        F: FnOnce(&Database) -> Result<T, PetstoreError>,
    {
        let reader: ReadonlyTransaction = self.env.get_reader()?;
        let db: Database = reader.bind(&self.handle);
        f(&db)
    }
}

fn default_map_size() -> u64 {
    let mut s = System::new();
    s.refresh_memory();
    let from_memory: u64 = (s.available_memory() as f32 * MAP_SIZE_MEMORY_RATIO).floor() as u64;
    match std::env::var(crate::LMDB_MAP_SIZE) {
        Err(_) => from_memory,
        Ok(size) => size.parse::<u64>().unwrap_or(from_memory),
    }
}

/// Look up `k` within an open transaction. Missing keys are `None`.
pub fn get(db: &Database, k: &[u8]) -> Result<Option<Vec<u8>>, PetstoreError> {
    // don't try and read empty keys
    if k.is_empty() {
        error!("can't read empty key");
        return Err(PetstoreError::Database(MdbError::NotFound));
    }
    match db.get::<Vec<u8>>(&k.to_vec()) {
        Ok(v) => Ok(Some(v)),
        Err(MdbError::NotFound) => Ok(None),
        Err(e) => Err(PetstoreError::Database(e)),
    }
}

/// Set `k` to `v` within an open write transaction.
pub fn put(db: &Database, k: &[u8], v: &[u8]) -> Result<(), PetstoreError> {
    if k.is_empty() {
        error!("can't write empty key");
        return Err(PetstoreError::Database(MdbError::NotFound));
    }
    db.set(&k.to_vec(), &v.to_vec())?;
    Ok(())
}

/// Remove `k` within an open write transaction.
///
/// Returns whether the key existed.
pub fn del(db: &Database, k: &[u8]) -> Result<bool, PetstoreError> {
    if k.is_empty() {
        error!("can't delete empty key");
        return Err(PetstoreError::Database(MdbError::NotFound));
    }
    match db.del(&k.to_vec()) {
        Ok(()) => Ok(true),
        Err(MdbError::NotFound) => Ok(false),
        Err(e) => Err(PetstoreError::Database(e)),
    }
}
