#[macro_use]
extern crate rocket;

use std::time::SystemTime;

use log::LevelFilter;
use rocket::{Build, Rocket};

use handler::{
    api_handler::{bad_request, index, internal_error, not_found, preflight, unprocessable_entity},
    folder_handler::{create_folder, delete_folder, get_folder, get_folders, update_folder},
    note_handler::{create_note, delete_note, get_note, get_notes, update_note},
};

use crate::config::{LogConfig, NOTEFUL_CONFIG};
use crate::repository::Database;

mod config;
mod fairing;
mod handler;
mod model;
mod repository;
mod service;
#[cfg(test)]
mod test;
mod util;

#[launch]
fn rocket() -> Rocket<Build> {
    if let Err(e) = setup_logger(&NOTEFUL_CONFIG.log) {
        panic!("Failed to set up logging. Exception is {e}");
    }
    build_rocket(Database::new(NOTEFUL_CONFIG.database.location.as_str()))
}

/// wires every route, catcher, and fairing around the passed database
pub fn build_rocket(db: Database) -> Rocket<Build> {
    rocket::build()
        .attach(fairing::database(db))
        .attach(fairing::cors())
        .attach(fairing::request_logger())
        .mount("/", routes![index, preflight])
        .mount(
            "/api/folders",
            routes![
                get_folders,
                get_folder,
                create_folder,
                update_folder,
                delete_folder
            ],
        )
        .mount(
            "/api/notes",
            routes![get_notes, get_note, create_note, update_note, delete_note],
        )
        .register(
            "/",
            catchers![bad_request, not_found, unprocessable_entity, internal_error],
        )
}

/// logs to stdout, and to `log.file` too if it's set. Rocket's own logs go through here as well
fn setup_logger(config: &LogConfig) -> Result<(), fern::InitError> {
    let level = config.level.parse::<LevelFilter>().unwrap_or_else(|_| {
        eprintln!("Unknown log level {}, defaulting to info", config.level);
        LevelFilter::Info
    });
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout());
    if let Some(file) = &config.file {
        dispatch = dispatch.chain(fern::log_file(file)?);
    }
    dispatch.apply()?;
    Ok(())
}

#[cfg(test)]
mod logger_tests {
    use crate::config::LogConfig;
    use crate::setup_logger;

    #[test]
    fn setup_logger_fails_when_log_file_cannot_be_opened() {
        let config = LogConfig {
            level: "info".to_string(),
            file: Some("./missing_log_dir/nested/noteful.log".to_string()),
        };
        let res = setup_logger(&config);
        assert!(matches!(res, Err(fern::InitError::Io(_))));
    }
}
