use rocket::http::{Header, Method, Status};

use crate::model::response::ErrorMessage;
use crate::test::*;

#[test]
fn index() {
    refresh_db();
    let client = client();
    let res = client.get(uri!("/")).dispatch();
    assert_eq!(res.status(), Status::Ok);
    assert_eq!(res.into_string().unwrap(), "Hello, world!");
    cleanup();
}

#[test]
fn unknown_route_has_json_body() {
    refresh_db();
    let client = client();
    let res = client.get(uri!("/api/unknown")).dispatch();
    assert_eq!(res.status(), Status::NotFound);
    let body: ErrorMessage = res.into_json().unwrap();
    assert_eq!(body, ErrorMessage::from("Not found"));
    cleanup();
}

#[test]
fn wrong_field_type_has_json_body() {
    refresh_db();
    let client = client();
    let res = client
        .post(uri!("/api/folders"))
        .body(r#"{"name":5}"#)
        .dispatch();
    assert_eq!(res.status(), Status::UnprocessableEntity);
    let body: ErrorMessage = res.into_json().unwrap();
    assert_eq!(body, ErrorMessage::from("Unprocessable request"));
    cleanup();
}

#[test]
fn responses_allow_any_origin() {
    refresh_db();
    let client = client();
    let res = client
        .get(uri!("/api/folders"))
        .header(Header::new("Origin", "http://localhost:3000"))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    assert_eq!(
        res.headers().get_one("Access-Control-Allow-Origin"),
        Some("*")
    );
    cleanup();
}

#[test]
fn preflight() {
    refresh_db();
    let client = client();
    let res = client
        .req(Method::Options, uri!("/api/notes/1"))
        .header(Header::new("Origin", "http://localhost:3000"))
        .header(Header::new("Access-Control-Request-Method", "PATCH"))
        .dispatch();
    assert_eq!(res.status(), Status::NoContent);
    let methods = res
        .headers()
        .get_one("Access-Control-Allow-Methods")
        .unwrap();
    assert!(methods.contains("PATCH"));
    assert!(methods.contains("DELETE"));
    cleanup();
}
