pub mod controller;

use petstore_core::db::DatabaseEnvironment;
use rocket::{
    catchers,
    routes,
    Build,
    Rocket,
};

/// Mount the pet controller methods on a rocket that manages `db`
pub fn build(config: rocket::Config, db: DatabaseEnvironment) -> Rocket<Build> {
    rocket::custom(config)
        .manage(db)
        .mount(
            "/pets",
            routes![
                controller::get_pets,
                controller::get_pet,
                controller::create_pet,
                controller::update_pet,
                controller::delete_pet
            ],
        )
        .register(
            "/",
            catchers![
                controller::bad_request,
                controller::not_found,
                controller::unparsable_path,
                controller::internal_error
            ],
        )
}

// Tests
//-------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rocket::{
        config::LogLevel,
        http::{
            ContentType,
            Status,
        },
        local::blocking::Client,
        serde::json::{
            json,
            Value,
        },
    };
    use tempfile::TempDir;

    fn test_client() -> (TempDir, Client) {
        let dir = tempfile::tempdir().expect("temp dir");
        let db = DatabaseEnvironment::open(dir.path(), Some(10 * 1024 * 1024)).expect("test db");
        let config = rocket::Config {
            log_level: LogLevel::Off,
            ..rocket::Config::debug_default()
        };
        let client = Client::tracked(build(config, db)).expect("valid rocket instance");
        (dir, client)
    }

    fn create(client: &Client, name: &str, species: &str) -> u64 {
        let response = client
            .post("/pets")
            .json(&json!({ "name": name, "species": species }))
            .dispatch();
        assert_eq!(response.status(), Status::Created);
        let body: Value = response.into_json().expect("pet body");
        body["id"].as_u64().expect("assigned id")
    }

    fn pet_not_found() -> Value {
        json!({ "error": "Pet not found" })
    }

    #[test]
    fn get_pets_empty_test() {
        let (_dir, client) = test_client();
        let response = client.get("/pets").dispatch();
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(response.into_json::<Value>(), Some(json!([])));
    }

    #[test]
    fn create_pet_test() {
        let (_dir, client) = test_client();
        let response = client
            .post("/pets")
            .json(&json!({ "name": "Fluffy", "species": "Cat" }))
            .dispatch();
        assert_eq!(response.status(), Status::Created);
        let body: Value = response.into_json().expect("pet body");
        assert_eq!(body["name"], "Fluffy");
        assert_eq!(body["species"], "Cat");
        assert!(body["id"].is_u64());
    }

    #[test]
    fn get_pets_after_create_test() {
        let (_dir, client) = test_client();
        create(&client, "Fluffy", "Cat");
        create(&client, "Rex", "Dog");
        let response = client.get("/pets").dispatch();
        assert_eq!(response.status(), Status::Ok);
        let body: Value = response.into_json().expect("pet list");
        let pets = body.as_array().expect("array");
        assert_eq!(pets.len(), 2);
        assert_eq!(pets[0]["name"], "Fluffy");
        assert_eq!(pets[1]["name"], "Rex");
    }

    #[test]
    fn get_pet_by_id_test() {
        let (_dir, client) = test_client();
        let id = create(&client, "Fluffy", "Cat");
        let response = client.get(format!("/pets/{}", id)).dispatch();
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(
            response.into_json::<Value>(),
            Some(json!({ "id": id, "name": "Fluffy", "species": "Cat" }))
        );
    }

    #[test]
    fn get_pet_by_id_not_found_test() {
        let (_dir, client) = test_client();
        let response = client.get("/pets/999").dispatch();
        assert_eq!(response.status(), Status::NotFound);
        assert_eq!(response.into_json::<Value>(), Some(pet_not_found()));
    }

    #[test]
    fn update_pet_test() {
        let (_dir, client) = test_client();
        let id = create(&client, "Fluffy", "Cat");
        let response = client
            .patch(format!("/pets/{}", id))
            .json(&json!({ "name": "Fluffball" }))
            .dispatch();
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(
            response.into_json::<Value>(),
            Some(json!({ "id": id, "name": "Fluffball", "species": "Cat" }))
        );
        let response = client.get(format!("/pets/{}", id)).dispatch();
        let body: Value = response.into_json().expect("pet body");
        assert_eq!(body["name"], "Fluffball");
    }

    #[test]
    fn update_pet_pass_through_test() {
        let (_dir, client) = test_client();
        let id = create(&client, "Fluffy", "Cat");
        let response = client
            .patch(format!("/pets/{}", id))
            .json(&json!({}))
            .dispatch();
        assert_eq!(response.status(), Status::Ok);
        let response = client
            .patch(format!("/pets/{}", id))
            .json(&json!({ "species": "" }))
            .dispatch();
        assert_eq!(response.status(), Status::Ok);
        let body: Value = response.into_json().expect("pet body");
        assert_eq!(body["name"], "Fluffy");
        assert_eq!(body["species"], "");
    }

    #[test]
    fn update_pet_null_field_test() {
        let (_dir, client) = test_client();
        let id = create(&client, "Fluffy", "Cat");
        let response = client
            .patch(format!("/pets/{}", id))
            .json(&json!({ "name": null }))
            .dispatch();
        assert_eq!(response.status(), Status::BadRequest);
        assert_eq!(
            response.into_json::<Value>(),
            Some(json!({ "error": "Name and species cannot be null" }))
        );
    }

    #[test]
    fn update_pet_not_found_test() {
        let (_dir, client) = test_client();
        let response = client
            .patch("/pets/999")
            .json(&json!({ "name": "New Name" }))
            .dispatch();
        assert_eq!(response.status(), Status::NotFound);
        assert_eq!(response.into_json::<Value>(), Some(pet_not_found()));
    }

    #[test]
    fn update_pet_malformed_body_test() {
        let (_dir, client) = test_client();
        let response = client
            .patch("/pets/999")
            .header(ContentType::JSON)
            .body("{not json")
            .dispatch();
        assert_eq!(response.status(), Status::NotFound);
        let id = create(&client, "Fluffy", "Cat");
        let response = client
            .patch(format!("/pets/{}", id))
            .header(ContentType::JSON)
            .body("{not json")
            .dispatch();
        assert_eq!(response.status(), Status::BadRequest);
        assert_eq!(
            response.into_json::<Value>(),
            Some(json!({ "error": "Invalid JSON body" }))
        );
    }

    #[test]
    fn delete_pet_test() {
        let (_dir, client) = test_client();
        let id = create(&client, "Fluffy", "Cat");
        let response = client.delete(format!("/pets/{}", id)).dispatch();
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(
            response.into_json::<Value>(),
            Some(json!({ "message": "Pet deleted" }))
        );
        let response = client.get(format!("/pets/{}", id)).dispatch();
        assert_eq!(response.status(), Status::NotFound);
        // ids are not reused
        let next = create(&client, "Rex", "Dog");
        assert!(next > id);
    }

    #[test]
    fn delete_pet_not_found_test() {
        let (_dir, client) = test_client();
        let response = client.delete("/pets/999").dispatch();
        assert_eq!(response.status(), Status::NotFound);
        assert_eq!(response.into_json::<Value>(), Some(pet_not_found()));
    }

    #[test]
    fn create_pet_missing_fields_test() {
        let (_dir, client) = test_client();
        let required = json!({ "error": "Name and species are required" });
        for body in [
            json!({ "name": "Fluffy" }),
            json!({ "species": "Cat" }),
            json!({ "name": "", "species": "Cat" }),
            json!({ "name": null, "species": "Cat" }),
        ] {
            let response = client.post("/pets").json(&body).dispatch();
            assert_eq!(response.status(), Status::BadRequest);
            assert_eq!(response.into_json::<Value>(), Some(required.clone()));
        }
        let response = client.get("/pets").dispatch();
        assert_eq!(response.into_json::<Value>(), Some(json!([])));
    }

    #[test]
    fn create_pet_malformed_body_test() {
        let (_dir, client) = test_client();
        let response = client
            .post("/pets")
            .header(ContentType::JSON)
            .body("[1, 2")
            .dispatch();
        assert_eq!(response.status(), Status::BadRequest);
        assert_eq!(
            response.into_json::<Value>(),
            Some(json!({ "error": "Invalid JSON body" }))
        );
    }

    #[test]
    fn non_integer_id_test() {
        let (_dir, client) = test_client();
        let not_found = json!({ "error": "Resource does not exist" });
        for uri in ["/pets/abc", "/pets/-1", "/pets/99999999999999999999999"] {
            let response = client.get(uri).dispatch();
            assert_eq!(response.status(), Status::NotFound);
            assert_eq!(response.into_json::<Value>(), Some(not_found.clone()));
            let response = client
                .patch(uri)
                .json(&json!({ "name": "Fluffball" }))
                .dispatch();
            assert_eq!(response.status(), Status::NotFound);
            assert_eq!(response.into_json::<Value>(), Some(not_found.clone()));
            let response = client.delete(uri).dispatch();
            assert_eq!(response.status(), Status::NotFound);
            assert_eq!(response.into_json::<Value>(), Some(not_found.clone()));
        }
    }

    #[test]
    fn unknown_route_test() {
        let (_dir, client) = test_client();
        let response = client.get("/owners").dispatch();
        assert_eq!(response.status(), Status::NotFound);
        assert_eq!(
            response.into_json::<Value>(),
            Some(json!({ "error": "Resource does not exist" }))
        );
    }
}
