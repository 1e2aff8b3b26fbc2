use chrono::{DateTime, NaiveTime, Utc};
use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::clients::trip_client::TripApiError;
use crate::models::calendar::{CalendarDay, SelectedRange};
use crate::models::trip::{CreateTrip, CreatedTrip, TripDetails};
use crate::service::trip_api::TripApi;
use crate::service::trip_form::TripForm;
use crate::storage::trip_storage::{StorageError, TripStore};

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("a trip is already being created")]
    InFlight,

    #[error("trip details are incomplete")]
    Incomplete,

    #[error("failed to create trip: {0}")]
    Api(#[from] TripApiError),

    /// The remote trip exists; only the local copy of its id is missing.
    #[error("trip {} was created but could not be saved: {source}", .created.trip_id)]
    Storage {
        created: CreatedTrip,
        #[source]
        source: StorageError,
    },

    #[error("failed to load stored trip: {0}")]
    Load(#[from] StorageError),
}

impl SubmitError {
    /// The trip created remotely, if the failure happened after creation.
    pub fn created_trip(&self) -> Option<&CreatedTrip> {
        match self {
            Self::Storage { created, .. } => Some(created),
            _ => None,
        }
    }
}

pub struct TripService;

impl TripService {
    /// Submits the form: creates the trip remotely, stores its id and resets
    /// the form. If the create call fails the form is left as it was so the
    /// user can retry. Once the trip exists remotely the form is reset even
    /// when saving the id fails, so it is never created twice.
    #[instrument(skip_all, fields(destination = %form.destination))]
    pub async fn create_trip(
        form: &mut TripForm,
        api: &dyn TripApi,
        store: &dyn TripStore,
    ) -> Result<CreatedTrip, SubmitError> {
        if form.is_creating_trip {
            return Err(SubmitError::InFlight);
        }
        let request = Self::build_request(form).ok_or(SubmitError::Incomplete)?;

        form.is_creating_trip = true;
        let result = api.create(&request).await;
        form.is_creating_trip = false;

        let created = result.inspect_err(|err| warn!("Trip creation failed: {}", err))?;
        info!(trip_id = %created.trip_id, "Trip created");
        form.reset();

        if let Err(source) = store.save(&created.trip_id) {
            warn!(trip_id = %created.trip_id, "Saving trip id failed: {}", source);
            return Err(SubmitError::Storage { created, source });
        }
        Ok(created)
    }

    pub fn build_request(form: &TripForm) -> Option<CreateTrip> {
        if !form.is_ready_to_submit() {
            return None;
        }
        let SelectedRange::Complete { start, end } = form.selected else {
            return None;
        };
        Some(CreateTrip {
            destination: form.destination.trim().to_string(),
            starts_at: midnight_utc(start),
            ends_at: midnight_utc(end),
            emails_to_invite: form.emails_to_invite.clone(),
        })
    }

    /// Fetches the trip whose id was stored by the last successful creation.
    pub async fn current_trip(
        api: &dyn TripApi,
        store: &dyn TripStore,
    ) -> Result<Option<TripDetails>, SubmitError> {
        let Some(trip_id) = store.get()? else {
            return Ok(None);
        };
        Ok(Some(api.get_by_id(&trip_id).await?))
    }
}

fn midnight_utc(day: CalendarDay) -> DateTime<Utc> {
    day.date().and_time(NaiveTime::MIN).and_utc()
}
