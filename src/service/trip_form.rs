use chrono::NaiveDate;

use crate::models::calendar::{CalendarDay, MarkedDates, SelectedRange};
use crate::service::calendar_service::{select_next_range, to_display_label, to_marked_dates};
use crate::service::validation::{
    MIN_DESTINATION_LEN, is_destination_filled, is_destination_long_enough, is_valid_email,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepForm {
    TripDetails,
    AddEmail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    None,
    Calendar,
    Guests,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    SetDestination(String),
    OpenCalendar,
    OpenGuests,
    CloseModal,
    SelectDay(CalendarDay),
    SetEmailInput(String),
    AddEmail,
    RemoveEmail(String),
    NextStep,
    EditDetails,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: &'static str,
    pub message: String,
}

impl Alert {
    fn trip_details(message: impl Into<String>) -> Self {
        Self {
            title: "Trip details",
            message: message.into(),
        }
    }

    fn invite(message: impl Into<String>) -> Self {
        Self {
            title: "Invite friends",
            message: message.into(),
        }
    }
}

/// What the shell has to do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEffect {
    None,
    Alert(Alert),
    /// Details and guests are complete; ask the user to confirm, then submit.
    ConfirmTrip,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripForm {
    pub step: StepForm,
    pub modal: Modal,
    pub destination: String,
    pub selected: SelectedRange,
    pub email_input: String,
    pub emails_to_invite: Vec<String>,
    pub is_creating_trip: bool,
    pub min_date: NaiveDate,
}

impl TripForm {
    pub fn new(min_date: NaiveDate) -> Self {
        Self {
            step: StepForm::TripDetails,
            modal: Modal::None,
            destination: String::new(),
            selected: SelectedRange::Empty,
            email_input: String::new(),
            emails_to_invite: Vec::new(),
            is_creating_trip: false,
            min_date,
        }
    }

    pub fn update(&mut self, action: FormAction) -> FormEffect {
        match action {
            FormAction::SetDestination(value) => {
                if self.step == StepForm::TripDetails {
                    self.destination = value;
                }
                FormEffect::None
            }
            FormAction::OpenCalendar => {
                if self.step == StepForm::TripDetails {
                    self.modal = Modal::Calendar;
                }
                FormEffect::None
            }
            FormAction::OpenGuests => {
                if self.step == StepForm::AddEmail {
                    self.modal = Modal::Guests;
                }
                FormEffect::None
            }
            FormAction::CloseModal => {
                self.modal = Modal::None;
                FormEffect::None
            }
            FormAction::SelectDay(day) => self.select_day(day),
            FormAction::SetEmailInput(value) => {
                self.email_input = value.to_lowercase();
                FormEffect::None
            }
            FormAction::AddEmail => self.add_email(),
            FormAction::RemoveEmail(email) => {
                self.emails_to_invite.retain(|e| *e != email);
                FormEffect::None
            }
            FormAction::NextStep => self.next_step(),
            FormAction::EditDetails => {
                self.step = StepForm::TripDetails;
                FormEffect::None
            }
        }
    }

    fn select_day(&mut self, day: CalendarDay) -> FormEffect {
        if self.step != StepForm::TripDetails {
            return FormEffect::None;
        }
        if day.date() < self.min_date {
            return FormEffect::Alert(Alert::trip_details(format!(
                "Pick a day from {} onwards.",
                self.min_date.format("%Y-%m-%d")
            )));
        }
        self.selected = select_next_range(self.selected, day);
        FormEffect::None
    }

    fn add_email(&mut self) -> FormEffect {
        if !is_valid_email(&self.email_input) {
            return FormEffect::Alert(Alert::invite("Enter a valid email to invite."));
        }
        if self.emails_to_invite.contains(&self.email_input) {
            return FormEffect::Alert(Alert::invite("This email has already been invited."));
        }
        let email = std::mem::take(&mut self.email_input);
        self.emails_to_invite.push(email);
        FormEffect::None
    }

    fn next_step(&mut self) -> FormEffect {
        if let Some(alert) = self.details_problem() {
            return FormEffect::Alert(alert);
        }
        match self.step {
            StepForm::TripDetails => {
                self.step = StepForm::AddEmail;
                self.modal = Modal::None;
                FormEffect::None
            }
            StepForm::AddEmail => FormEffect::ConfirmTrip,
        }
    }

    fn details_problem(&self) -> Option<Alert> {
        if !is_destination_filled(&self.destination) || !self.selected.is_complete() {
            return Some(Alert::trip_details("Fill in all the trip details to continue."));
        }
        if !is_destination_long_enough(&self.destination) {
            return Some(Alert::trip_details(format!(
                "Enter at least {MIN_DESTINATION_LEN} letters to continue."
            )));
        }
        None
    }

    /// True once the form may be handed to the trip service.
    pub fn is_ready_to_submit(&self) -> bool {
        self.step == StepForm::AddEmail && self.details_problem().is_none()
    }

    pub fn date_label(&self) -> String {
        to_display_label(&self.selected)
    }

    pub fn marked_dates(&self) -> MarkedDates {
        to_marked_dates(&self.selected)
    }

    pub fn guests_summary(&self) -> String {
        match self.emails_to_invite.len() {
            0 => String::new(),
            n => format!("{n} person(s) invited"),
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.step {
            StepForm::TripDetails => "Continue",
            StepForm::AddEmail => "Confirm trip",
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.min_date);
    }
}
