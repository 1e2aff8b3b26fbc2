use std::env;
use std::fs;

use tripPlanner::storage::trip_storage::{FileTripStorage, StorageError, TripStore};

fn temp_storage() -> FileTripStorage {
    let dir = env::temp_dir().join(format!("trip_planner_it_{}", uuid::Uuid::new_v4()));
    FileTripStorage::new(dir)
}

#[test]
fn empty_storage_has_no_trip() {
    let storage = temp_storage();
    assert_eq!(storage.get().unwrap(), None);
    storage.remove().expect("removing nothing should succeed");
}

#[test]
fn save_then_get_and_remove() {
    let storage = temp_storage();
    storage.save("trip-1").unwrap();
    storage.save("trip-2").unwrap();
    assert_eq!(storage.get().unwrap().as_deref(), Some("trip-2"));

    let raw = fs::read_to_string(storage.path()).unwrap();
    assert!(raw.contains("\"tripId\""));

    storage.remove().unwrap();
    assert_eq!(storage.get().unwrap(), None);
    let _ = fs::remove_dir_all(storage.dir());
}

#[test]
fn corrupt_file_is_reported() {
    let storage = temp_storage();
    fs::create_dir_all(storage.dir()).unwrap();
    fs::write(storage.path(), "not json").unwrap();

    let err = storage.get().unwrap_err();
    assert!(matches!(err, StorageError::Json(_)));
    let _ = fs::remove_dir_all(storage.dir());
}
