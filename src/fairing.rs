use rocket::fairing::AdHoc;
use rocket::http::Header;

use crate::repository::Database;

/// sets up the database on ignite and hands it to rocket as managed state. Launch is aborted if that fails
pub fn database(db: Database) -> AdHoc {
    AdHoc::try_on_ignite("Database", move |rocket| async move {
        match db.initialize() {
            Ok(()) => Ok(rocket.manage(db)),
            Err(e) => {
                log::error!(
                    "Failed to initialize the database at {}: {e:?}",
                    db.location().display()
                );
                Err(rocket)
            }
        }
    })
}

/// lets any origin call the api
pub fn cors() -> AdHoc {
    AdHoc::on_response("CORS", |_req, res| {
        Box::pin(async move {
            res.set_header(Header::new("Access-Control-Allow-Origin", "*"));
            res.set_header(Header::new(
                "Access-Control-Allow-Methods",
                "GET, POST, PATCH, DELETE, OPTIONS",
            ));
            res.set_header(Header::new("Access-Control-Allow-Headers", "Content-Type"));
        })
    })
}

/// one line per request, after the response is ready
pub fn request_logger() -> AdHoc {
    AdHoc::on_response("Request Logger", |req, res| {
        Box::pin(async move {
            log::info!("{} {} {}", req.method(), req.uri(), res.status());
        })
    })
}
