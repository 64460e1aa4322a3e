use actix_web::HttpResponse;
use askama_actix::{Template, TemplateToResponse};

#[derive(Template)]
#[template(path = "about.html")]
struct AboutHtml;

pub async fn about() -> HttpResponse {
    AboutHtml.to_response()
}

pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}
