pub mod trip_storage;
