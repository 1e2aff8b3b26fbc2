pub mod calendar_service;
pub mod trip_api;
pub mod trip_form;
pub mod trip_service;
pub mod validation;
