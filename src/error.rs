use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MockDataError {
    #[error("Could not access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not serialize or parse {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Seed {0:?} is not an unsigned 64-bit integer")]
    InvalidSeed(String),

    #[error("Found {routes} routes but {fares} fares")]
    LengthMismatch { routes: usize, fares: usize },

    #[error("Fare at position {index} belongs to {fare_route_id:?} instead of {route_id:?}")]
    MisalignedRecords {
        index: usize,
        route_id: String,
        fare_route_id: String,
    },
}
