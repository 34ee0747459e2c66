pub mod args;
pub mod db;
pub mod error;
pub mod models;
pub mod pet;
pub mod reqres;
pub mod utils;

pub const APP_NAME: &str = "petstore";

// LMDB Keys
pub const PET_DB_KEY:           &str = "p";
pub const PET_LIST_DB_KEY:      &str = "pl";
pub const PET_SEQUENCE_DB_KEY:  &str = "ps";
// End LMDB Keys

/// Environment variable for overriding the LMDB map size in bytes
pub const LMDB_MAP_SIZE: &str = "LMDB_MAP_SIZE";

/// Default app port
pub const DEFAULT_APP_PORT: u16 = 5555;
/// Default LMDB environment directory
pub const DEFAULT_DB_PATH: &str = ".petstore/lmdb";

// Fixed response bodies
pub const PET_NOT_FOUND: &str = "Pet not found";
pub const PET_FIELDS_REQUIRED: &str = "Name and species are required";
pub const PET_FIELDS_NOT_NULL: &str = "Name and species cannot be null";
pub const PET_DELETED: &str = "Pet deleted";
pub const INVALID_JSON_BODY: &str = "Invalid JSON body";
pub const RESOURCE_NOT_FOUND: &str = "Resource does not exist";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";
// DO NOT EDIT BELOW THIS LINE
