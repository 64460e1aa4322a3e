mod common;
mod harvests;
mod pages;
mod plants;

pub use harvests::insert_harvest;
pub use pages::{about, health_check};
pub use plants::{
    create_form, delete_plant, edit_form, edit_plant, insert_plant, list_plants, plant_detail,
};

use crate::error::AppError;
use crate::store::RecordStore;
use actix_web::web;

/// Registers every page and form endpoint for a store of type `S`. The store
/// itself must be provided as `web::Data<S>` app data.
pub fn configure<S: RecordStore + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::FormConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .route("/", web::get().to(list_plants::<S>))
    .route("/about", web::get().to(about))
    .route("/health_check", web::get().to(health_check))
    .service(
        web::resource("/create")
            .route(web::get().to(create_form))
            .route(web::post().to(insert_plant::<S>)),
    )
    .route("/plant/{plant_id}", web::get().to(plant_detail::<S>))
    .route("/harvest/{plant_id}", web::post().to(insert_harvest::<S>))
    .service(
        web::resource("/edit/{plant_id}")
            .route(web::get().to(edit_form::<S>))
            .route(web::post().to(edit_plant::<S>)),
    )
    .route("/delete/{plant_id}", web::post().to(delete_plant::<S>));
}
