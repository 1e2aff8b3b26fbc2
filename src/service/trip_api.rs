use async_trait::async_trait;

use crate::clients::trip_client::{TripApiError, TripClient};
use crate::models::trip::{CreateTrip, CreatedTrip, TripDetails};

#[async_trait]
pub trait TripApi: Send + Sync {
    async fn get_by_id(&self, id: &str) -> Result<TripDetails, TripApiError>;

    async fn create(&self, trip: &CreateTrip) -> Result<CreatedTrip, TripApiError>;
}

#[async_trait]
impl TripApi for TripClient {
    async fn get_by_id(&self, id: &str) -> Result<TripDetails, TripApiError> {
        TripClient::get_by_id(self, id).await
    }

    async fn create(&self, trip: &CreateTrip) -> Result<CreatedTrip, TripApiError> {
        TripClient::create(self, trip).await
    }
}
