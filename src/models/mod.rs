pub mod calendar;
pub mod trip;
