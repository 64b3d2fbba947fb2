//! # HTTP surface
//!
//! Rocket routes that sit on top of the injected [`Db`]. The client is
//! connected before Rocket is built; handlers only ever resolve collections
//! from it.

use rocket::{Build, Request, Rocket, State, catch, catchers, get, routes, serde::json::Json};
use serde::Serialize;
use serde_json::{Value, json};

use crate::db::Db;

pub mod collections;

#[derive(Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub database: String,
}

#[get("/")]
pub fn index(db: &State<Db>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: "restaurant",
        database: db.database_name().to_string(),
    })
}

fn error_body(message: &str, status: u16) -> Json<Value> {
    Json(json!({
        "error": message,
        "status": status
    }))
}

#[catch(404)]
pub fn catch404(_: &Request) -> Json<Value> {
    error_body("Not found", 404)
}

#[catch(500)]
pub fn catch500(_: &Request) -> Json<Value> {
    error_body("Internal server error", 500)
}

/// Builds the Rocket instance around an already connected [`Db`].
pub fn build(db: Db) -> Rocket<Build> {
    rocket::build()
        .manage(db)
        .register("/", catchers![catch404, catch500])
        .mount("/", routes![index])
        .mount("/collections", collections::routes())
}
