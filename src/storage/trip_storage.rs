use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

const TRIP_FILE: &str = "trip.json";

// Returns the directory where the stored trip lives.
// Defaults to a relative "./data" directory.
pub fn get_db_location() -> String {
    env::var("DB_LOCATION").unwrap_or("./data".to_string())
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("storage JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub trait TripStore: Send + Sync {
    fn save(&self, trip_id: &str) -> Result<(), StorageError>;
    fn get(&self) -> Result<Option<String>, StorageError>;
    fn remove(&self) -> Result<(), StorageError>;
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredTrip {
    #[serde(rename = "tripId")]
    trip_id: String,
}

/// Keeps the id of the last created trip in `trip.json`.
#[derive(Debug, Clone)]
pub struct FileTripStorage {
    dir: PathBuf,
}

impl FileTripStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(TRIP_FILE)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl TripStore for FileTripStorage {
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    fn save(&self, trip_id: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        let body = serde_json::to_string_pretty(&StoredTrip {
            trip_id: trip_id.to_string(),
        })?;
        fs::write(self.path(), body)?;
        debug!("Saved trip id");
        Ok(())
    }

    fn get(&self) -> Result<Option<String>, StorageError> {
        let content = match fs::read_to_string(self.path()) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let stored: StoredTrip = serde_json::from_str(&content)?;
        Ok(Some(stored.trip_id))
    }

    fn remove(&self) -> Result<(), StorageError> {
        match fs::remove_file(self.path()) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
