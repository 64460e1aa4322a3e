#![allow(dead_code)]

use actix_web::dev::ServiceResponse;
use actix_web::http::header::LOCATION;
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use garden_journal::routes;
use garden_journal::store::InMemoryStore;

/// Runs one request through the full router, backed by `store`.
pub async fn send(store: &InMemoryStore, request: TestRequest) -> ServiceResponse {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(store.clone()))
            .configure(routes::configure::<InMemoryStore>),
    )
    .await;

    test::call_service(&app, request.to_request()).await
}

pub async fn body_of(response: ServiceResponse) -> String {
    let bytes = test::read_body(response).await;
    String::from_utf8(bytes.to_vec()).expect("body is not utf-8")
}

pub async fn get(store: &InMemoryStore, uri: &str) -> ServiceResponse {
    send(store, TestRequest::get().uri(uri)).await
}

pub async fn post_form(store: &InMemoryStore, uri: &str, form: &[(&str, &str)]) -> ServiceResponse {
    send(store, TestRequest::post().uri(uri).set_form(form)).await
}

pub fn location(response: &ServiceResponse) -> String {
    response
        .headers()
        .get(LOCATION)
        .expect("no Location header")
        .to_str()
        .expect("Location is not ascii")
        .to_owned()
}

pub fn plant_form<'a>(
    name: &'a str,
    variety: &'a str,
    photo: &'a str,
    date_planted: &'a str,
) -> [(&'static str, &'a str); 4] {
    [
        ("plant_name", name),
        ("variety", variety),
        ("photo", photo),
        ("date_planted", date_planted),
    ]
}

/// Creates the tomato plant through `POST /create` and returns its detail path.
pub async fn create_tomato(store: &InMemoryStore) -> String {
    let response = post_form(
        store,
        "/create",
        &plant_form("Tomato", "Roma", "http://x/1.jpg", "2024-01-01"),
    )
    .await;
    assert_eq!(response.status().as_u16(), 302);
    location(&response)
}

pub fn id_from_location(location: &str) -> String {
    location
        .rsplit('/')
        .next()
        .expect("empty location")
        .to_owned()
}

pub const UNKNOWN_ID: &str = "00000000-0000-4000-8000-000000000000";
