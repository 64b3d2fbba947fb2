use mongodb::bson::Document;
use rocket::{State, get, routes as rocket_routes, serde::json::Json};
use serde::{Deserialize, Serialize};

use crate::db::Db;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CollectionInfo {
    pub database: String,
    pub collection: String,
}

/// Resolves `name` against the injected database. No round trip to the server.
#[get("/<name>")]
pub fn resolve(db: &State<Db>, name: &str) -> Json<CollectionInfo> {
    let namespace = db.collection::<Document>(name).namespace();

    Json(CollectionInfo {
        database: namespace.db,
        collection: namespace.coll,
    })
}

pub fn routes() -> Vec<rocket::Route> {
    rocket_routes![resolve]
}
