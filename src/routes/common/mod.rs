use crate::domain::{Plant, PlantId};
use crate::error::AppError;
use crate::store::RecordStore;
use actix_web::HttpResponse;
use actix_web::http::header::{ContentType, LOCATION};
use askama_actix::Template;

/// 302 to `location`.
pub fn redirect_to(location: impl Into<String>) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((LOCATION, location.into()))
        .finish()
}

pub fn plant_location(id: PlantId) -> String {
    format!("/plant/{id}")
}

pub fn render<T: Template>(template: &T) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(template.render()?))
}

/// A path segment that does not parse can never name a stored plant, so it is
/// reported the same way as an unknown id.
pub fn parse_plant_id(raw: &str) -> Result<PlantId, AppError> {
    PlantId::parse(raw).ok_or_else(|| {
        tracing::warn!(plant_id = raw, "Malformed plant id");
        AppError::NotFound(raw.to_owned())
    })
}

pub async fn find_plant<S: RecordStore>(store: &S, raw: &str) -> Result<Plant, AppError> {
    let id = parse_plant_id(raw)?;
    match store.plant(id).await? {
        Some(plant) => Ok(plant),
        None => {
            tracing::warn!(plant_id = %id, "Plant not found");
            Err(AppError::NotFound(id.to_string()))
        }
    }
}
