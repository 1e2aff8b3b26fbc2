pub mod trip_client;
