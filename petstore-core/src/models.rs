//! Custom object relational mapping (ORM) for structs into LMBD

use crate::reqres::PetPatch;
use rocket::serde::{
    Deserialize,
    Serialize,
};

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct Pet {
    pub id: u64,
    pub name: String,
    pub species: String,
}

impl Pet {
    /// Apply the fields present in `patch`, leaving the rest untouched.
    ///
    /// The id is never modified. Explicit nulls must be rejected before this.
    pub fn update(p: Pet, patch: &PetPatch) -> Pet {
        Pet {
            id: p.id,
            name: match &patch.name {
                Some(Some(name)) => String::from(name),
                _ => p.name,
            },
            species: match &patch.species {
                Some(Some(species)) => String::from(species),
                _ => p.species,
            },
        }
    }
    /// LMDB key the record is stored under
    pub fn db_key(id: u64) -> String {
        format!("{}{}", crate::PET_DB_KEY, id)
    }
}

// Tests
//-------------------------------------------------------------------------------
