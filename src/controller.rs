use rocket::{
    catch,
    delete,
    get,
    http::Status,
    patch,
    post,
    response::status::Custom,
    serde::json::{
        self,
        Json,
    },
    State,
};

use petstore_core::{
    db::DatabaseEnvironment,
    error::PetstoreError,
    models::Pet,
    pet,
    reqres::{
        ErrorResponse,
        MessageResponse,
        PetPatch,
        PetRequest,
    },
};

type ApiError = Custom<Json<ErrorResponse>>;

// JSON APIs

/// Return all pets in the order they were created
#[get("/")]
pub async fn get_pets(db: &State<DatabaseEnvironment>) -> Result<Custom<Json<Vec<Pet>>>, ApiError> {
    let pets = pet::find_all(db).map_err(error_response)?;
    Ok(Custom(Status::Ok, Json(pets)))
}

/// Get a pet by passing id
#[get("/<id>")]
pub async fn get_pet(id: u64, db: &State<DatabaseEnvironment>) -> Result<Custom<Json<Pet>>, ApiError> {
    let m_pet = pet::find(db, id).map_err(error_response)?;
    Ok(Custom(Status::Ok, Json(m_pet)))
}

/// Create a pet by passing json with name and species
#[post("/", data = "<req_pet>")]
pub async fn create_pet(
    req_pet: Result<Json<PetRequest>, json::Error<'_>>,
    db: &State<DatabaseEnvironment>,
) -> Result<Custom<Json<Pet>>, ApiError> {
    let req_pet = req_pet.map_err(invalid_body)?;
    let m_pet = pet::create(db, &req_pet).map_err(error_response)?;
    Ok(Custom(Status::Created, Json(m_pet)))
}

/// Update only the pet fields present in the body
#[patch("/<id>", data = "<patch>")]
pub async fn update_pet(
    id: u64,
    patch: Result<Json<PetPatch>, json::Error<'_>>,
    db: &State<DatabaseEnvironment>,
) -> Result<Custom<Json<Pet>>, ApiError> {
    let patch = match patch {
        Ok(p) => p,
        Err(e) => {
            // a missing pet wins over a bad body
            pet::find(db, id).map_err(error_response)?;
            return Err(invalid_body(e));
        }
    };
    let m_pet = pet::modify(db, id, &patch).map_err(error_response)?;
    Ok(Custom(Status::Ok, Json(m_pet)))
}

/// Delete a pet by id
#[delete("/<id>")]
pub async fn delete_pet(
    id: u64,
    db: &State<DatabaseEnvironment>,
) -> Result<Custom<Json<MessageResponse>>, ApiError> {
    pet::delete(db, id).map_err(error_response)?;
    Ok(Custom(
        Status::Ok,
        Json(MessageResponse {
            message: String::from(petstore_core::PET_DELETED),
        }),
    ))
}

fn error_body(status: Status, error: &str) -> ApiError {
    Custom(
        status,
        Json(ErrorResponse {
            error: String::from(error),
        }),
    )
}

/// Map service errors to their fixed response
fn error_response(e: PetstoreError) -> ApiError {
    match e {
        PetstoreError::NotFound => error_body(Status::NotFound, petstore_core::PET_NOT_FOUND),
        PetstoreError::Validation(msg) => error_body(Status::BadRequest, &msg),
        e => {
            log::error!("request failed: {}", e);
            error_body(Status::InternalServerError, petstore_core::INTERNAL_SERVER_ERROR)
        }
    }
}

fn invalid_body(e: json::Error<'_>) -> ApiError {
    log::error!("invalid json body: {:?}", e);
    error_body(Status::BadRequest, petstore_core::INVALID_JSON_BODY)
}

// Catchers
//----------------------------------------------------------------

#[catch(400)]
pub fn bad_request() -> ApiError {
    error_body(Status::BadRequest, "Bad request")
}

#[catch(404)]
pub fn not_found() -> ApiError {
    error_body(Status::NotFound, petstore_core::RESOURCE_NOT_FOUND)
}

/// Rocket forwards with 422 when a path guard such as `id: u64` fails to
///
/// parse. JSON bodies are taken as `Result` guards, so only the path is left:
///
/// `/pets/abc` is a route that does not exist.
#[catch(422)]
pub fn unparsable_path() -> ApiError {
    error_body(Status::NotFound, petstore_core::RESOURCE_NOT_FOUND)
}

#[catch(500)]
pub fn internal_error() -> ApiError {
    error_body(Status::InternalServerError, petstore_core::INTERNAL_SERVER_ERROR)
}
