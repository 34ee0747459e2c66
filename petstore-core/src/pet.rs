// Pet repo/service layer
use crate::{
    db::{
        self,
        DatabaseEnvironment,
    },
    error::PetstoreError,
    models::*,
    reqres::{
        PetPatch,
        PetRequest,
    },
};
use kn0sys_lmdb_rs::Database;
use log::{
    debug,
    error,
    info,
};

/// Create a new pet with the next id in the sequence
pub fn create(db: &DatabaseEnvironment, req: &PetRequest) -> Result<Pet, PetstoreError> {
    let Some((name, species)) = validate_pet(req) else {
        error!("invalid pet");
        return Err(PetstoreError::Validation(String::from(crate::PET_FIELDS_REQUIRED)));
    };
    db.transact(|t| {
        let id = next_id(t)?;
        let new_pet = Pet { id, name, species };
        debug!("insert pet: {:?}", &new_pet);
        let v = bincode::serialize(&new_pet)?;
        db::put(t, Pet::db_key(id).as_bytes(), &v)?;
        // in order to retrieve all pets, write ids to pl
        let mut pet_list = read_index(t)?;
        if pet_list.is_empty() {
            debug!("creating pet index");
        }
        pet_list.push(id);
        debug!(
            "writing pet index {:?} for id: {}",
            pet_list,
            crate::PET_LIST_DB_KEY
        );
        write_index(t, &pet_list)?;
        Ok(new_pet)
    })
}

/// Single pet lookup
pub fn find(db: &DatabaseEnvironment, id: u64) -> Result<Pet, PetstoreError> {
    info!("find pet: {}", id);
    db.view(|t| find_in(t, id))
}

/// Pet lookup for all, in the order they were created
pub fn find_all(db: &DatabaseEnvironment) -> Result<Vec<Pet>, PetstoreError> {
    db.view(|t| {
        let pet_list = read_index(t)?;
        if pet_list.is_empty() {
            debug!("pet index is empty");
        }
        let mut pets: Vec<Pet> = Vec::with_capacity(pet_list.len());
        for id in pet_list {
            match db::get(t, Pet::db_key(id).as_bytes())? {
                Some(r) => pets.push(bincode::deserialize(&r[..])?),
                None => error!("indexed pet {} is missing", id),
            }
        }
        Ok(pets)
    })
}

/// Modify pet. Only fields present in `patch` are written.
pub fn modify(db: &DatabaseEnvironment, id: u64, patch: &PetPatch) -> Result<Pet, PetstoreError> {
    info!("modify pet: {}", id);
    db.transact(|t| {
        let f_pet = find_in(t, id)?;
        if patch.has_null() {
            error!("null field in update for pet: {}", id);
            return Err(PetstoreError::Validation(String::from(crate::PET_FIELDS_NOT_NULL)));
        }
        let u_pet = Pet::update(f_pet, patch);
        let v = bincode::serialize(&u_pet)?;
        db::put(t, Pet::db_key(id).as_bytes(), &v)?;
        Ok(u_pet)
    })
}

/// Pet deletion. The id is not handed out again.
pub fn delete(db: &DatabaseEnvironment, id: u64) -> Result<(), PetstoreError> {
    info!("delete pet: {}", id);
    db.transact(|t| {
        if !db::del(t, Pet::db_key(id).as_bytes())? {
            error!("pet not found");
            return Err(PetstoreError::NotFound);
        }
        let pet_list: Vec<u64> = read_index(t)?.into_iter().filter(|p| *p != id).collect();
        debug!(
            "writing pet index {:?} for id: {}",
            pet_list,
            crate::PET_LIST_DB_KEY
        );
        write_index(t, &pet_list)
    })
}

/// Remove every pet along with the index and id sequence.
///
/// Returns the number of pets removed.
pub fn clear(db: &DatabaseEnvironment) -> Result<usize, PetstoreError> {
    info!("clearing all pets");
    db.transact(|t| {
        let pet_list = read_index(t)?;
        for id in &pet_list {
            db::del(t, Pet::db_key(*id).as_bytes())?;
        }
        db::del(t, crate::PET_LIST_DB_KEY.as_bytes())?;
        db::del(t, crate::PET_SEQUENCE_DB_KEY.as_bytes())?;
        Ok(pet_list.len())
    })
}

/// name and species must both be present and non-empty
fn validate_pet(req: &PetRequest) -> Option<(String, String)> {
    match (&req.name, &req.species) {
        (Some(name), Some(species)) if !name.is_empty() && !species.is_empty() => {
            Some((String::from(name), String::from(species)))
        }
        _ => None,
    }
}

fn find_in(t: &Database, id: u64) -> Result<Pet, PetstoreError> {
    match db::get(t, Pet::db_key(id).as_bytes())? {
        Some(r) => Ok(bincode::deserialize(&r[..])?),
        None => {
            error!("pet not found");
            Err(PetstoreError::NotFound)
        }
    }
}

/// Bump the persisted id sequence and return the new value
fn next_id(t: &Database) -> Result<u64, PetstoreError> {
    let last: u64 = match db::get(t, crate::PET_SEQUENCE_DB_KEY.as_bytes())? {
        Some(r) => bincode::deserialize(&r[..])?,
        None => 0,
    };
    let id = last + 1;
    db::put(t, crate::PET_SEQUENCE_DB_KEY.as_bytes(), &bincode::serialize(&id)?)?;
    Ok(id)
}

fn read_index(t: &Database) -> Result<Vec<u64>, PetstoreError> {
    match db::get(t, crate::PET_LIST_DB_KEY.as_bytes())? {
        Some(r) => Ok(bincode::deserialize(&r[..])?),
        None => Ok(Vec::new()),
    }
}

fn write_index(t: &Database, pet_list: &[u64]) -> Result<(), PetstoreError> {
    db::put(t, crate::PET_LIST_DB_KEY.as_bytes(), &bincode::serialize(pet_list)?)
}

// Tests
//-------------------------------------------------------------------------------
