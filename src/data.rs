use crate::consts::{FARES_FILE_NAME, ROUTES_FILE_NAME};
use crate::error::MockDataError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Route {
    pub route_id: String,
    pub origin: String,
    pub destination: String,
    // Comma-joined origin, intermediates and destination
    pub stages: String,
    pub is_verified: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Fare {
    pub route_id: String,
    pub standard_fare: u32,
    pub peak_multiplier: f64,
    pub peak_hours_starts: String,
    pub peak_hours_end: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MockData {
    pub routes: Vec<Route>,
    pub fares: Vec<Fare>,
}

impl MockData {
    /// Checks that every fare sits at the same position as the route it
    /// prices.
    pub fn check_alignment(&self) -> Result<(), MockDataError> {
        if self.routes.len() != self.fares.len() {
            return Err(MockDataError::LengthMismatch {
                routes: self.routes.len(),
                fares: self.fares.len(),
            });
        }

        let misaligned = self
            .routes
            .iter()
            .zip(self.fares.iter())
            .position(|(route, fare)| route.route_id != fare.route_id);

        match misaligned {
            Some(index) => Err(MockDataError::MisalignedRecords {
                index,
                route_id: self.routes[index].route_id.clone(),
                fare_route_id: self.fares[index].route_id.clone(),
            }),
            None => Ok(()),
        }
    }
}

fn write_json_file<T: Serialize>(data: &T, path: &Path) -> Result<(), MockDataError> {
    let io_error = |source| MockDataError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, data).map_err(|source| MockDataError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(io_error)?;

    info!("Wrote {}", path.display());
    Ok(())
}

fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, MockDataError> {
    let file = File::open(path).map_err(|source| MockDataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|source| MockDataError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes `routes.json` and `fares.json` into `dir`, creating it if needed.
pub fn write_mock_data(data: &MockData, dir: &Path) -> Result<(), MockDataError> {
    fs::create_dir_all(dir).map_err(|source| MockDataError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    write_json_file(&data.routes, &dir.join(ROUTES_FILE_NAME))?;
    write_json_file(&data.fares, &dir.join(FARES_FILE_NAME))?;

    Ok(())
}

/// Loads a previously generated pair of files and rejects it if the routes
/// and fares do not line up.
pub fn read_mock_data(dir: &Path) -> Result<MockData, MockDataError> {
    let routes: Vec<Route> = read_json_file(&dir.join(ROUTES_FILE_NAME))?;
    let fares: Vec<Fare> = read_json_file(&dir.join(FARES_FILE_NAME))?;

    let data = MockData { routes, fares };
    data.check_alignment()?;

    Ok(data)
}
