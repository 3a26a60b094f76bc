use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::Request;

use crate::model::response::ErrorMessage;

#[get("/")]
pub fn index() -> &'static str {
    "Hello, world!"
}

/// answers CORS preflight requests for any path; the headers themselves come from [`crate::fairing::cors`]
#[options("/<_..>")]
pub fn preflight() -> Status {
    Status::NoContent
}

// rocket's own errors (bad json, unknown routes, etc.) get the same body shape as ours

#[catch(400)]
pub fn bad_request() -> Json<ErrorMessage> {
    ErrorMessage::new("Malformed request body")
}

#[catch(404)]
pub fn not_found(req: &Request) -> Json<ErrorMessage> {
    log::debug!("No route for {} {}", req.method(), req.uri());
    ErrorMessage::new("Not found")
}

#[catch(422)]
pub fn unprocessable_entity() -> Json<ErrorMessage> {
    ErrorMessage::new("Unprocessable request")
}

#[catch(500)]
pub fn internal_error() -> Json<ErrorMessage> {
    ErrorMessage::new("Server error")
}
