use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TripDetails {
    pub id: String,
    pub destination: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub is_confirmed: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CreateTrip {
    pub destination: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub emails_to_invite: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct TripOwner {
    pub name: String,
    pub email: String,
}

// Request body for POST /trips.
#[derive(Debug, Serialize)]
pub(crate) struct CreateTripBody<'a> {
    #[serde(flatten)]
    pub trip: &'a CreateTrip,
    pub owner_name: &'a str,
    pub owner_email: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TripEnvelope {
    pub trip: TripDetails,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CreatedTrip {
    #[serde(rename = "tripId")]
    pub trip_id: String,
}

impl CreatedTrip {
    /// Route the app navigates to after creating the trip.
    pub fn path(&self) -> String {
        format!("/trip/{}", self.trip_id)
    }
}
