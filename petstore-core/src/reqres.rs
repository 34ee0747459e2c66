//! Request and response bodies for the pet API

use rocket::serde::{
    Deserialize,
    Deserializer,
    Serialize,
};

/// Body of `POST /pets`. Both fields are required, but they are
///
/// optional here so that a missing field is a validation error
///
/// instead of a deserialization failure.
#[derive(Debug, Default, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct PetRequest {
    pub name: Option<String>,
    pub species: Option<String>,
}

/// Body of `PATCH /pets/<id>`.
///
/// `None` means the key was absent, `Some(None)` means it was sent as `null`.
#[derive(Debug, Default, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct PetPatch {
    #[serde(default, deserialize_with = "deserialize_present")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub species: Option<Option<String>>,
}

impl PetPatch {
    /// true if any present field was sent as `null`
    pub fn has_null(&self) -> bool {
        matches!(self.name, Some(None)) || matches!(self.species, Some(None))
    }
}

/// Any key that reaches the deserializer was present in the body
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct MessageResponse {
    pub message: String,
}

// Tests
//-------------------------------------------------------------------------------
