use std::fmt;

use chrono::Local;
use clap::{Parser, Subcommand};
use inquire::{Confirm, Select, Text};

use tripPlanner::clients::trip_client::TripClient;
use tripPlanner::config::AppConfig;
use tripPlanner::models::calendar::{CalendarDay, SelectedRange};
use tripPlanner::models::trip::TripDetails;
use tripPlanner::service::calendar_service::to_display_label;
use tripPlanner::service::trip_api::TripApi;
use tripPlanner::service::trip_form::{FormAction, FormEffect, StepForm, TripForm};
use tripPlanner::service::trip_service::{SubmitError, TripService};
use tripPlanner::storage::trip_storage::{FileTripStorage, TripStore, get_db_location};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "trip-planner")]
#[command(about = "Plan a trip and invite your friends", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan a new trip step by step
    Plan {},
    /// Create a trip without prompts
    Create {
        #[arg(long)]
        destination: String,
        /// First day, YYYY-MM-DD
        #[arg(long)]
        starts_at: CalendarDay,
        /// Last day, YYYY-MM-DD
        #[arg(long)]
        ends_at: CalendarDay,
        /// Guest email, repeat for several guests
        #[arg(long = "invite")]
        invites: Vec<String>,
    },
    /// Show a trip by id
    Get { id: String },
    /// Show the last trip created from this machine
    Current {},
    /// Forget the stored trip
    Forget {},
}

#[derive(Debug, Clone, Copy)]
enum GuestMenu {
    Invite,
    Remove,
    ChangeDetails,
    Confirm,
}

impl fmt::Display for GuestMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GuestMenu::Invite => "Invite a guest",
            GuestMenu::Remove => "Remove a guest",
            GuestMenu::ChangeDetails => "Change place/dates",
            GuestMenu::Confirm => "Confirm trip",
        };
        write!(f, "{}", label)
    }
}

pub async fn cli(config: AppConfig) {
    // Fine to panic here
    let cli = Cli::parse();
    let store = FileTripStorage::new(config.db_location().unwrap_or_else(get_db_location));

    let result = match cli.command {
        Commands::Plan {} => match writable_client(&config) {
            Ok(client) => plan_trip(&client, &store).await,
            Err(e) => Err(e.into()),
        },
        Commands::Create {
            destination,
            starts_at,
            ends_at,
            invites,
        } => match writable_client(&config) {
            Ok(client) => {
                create_trip(&client, &store, destination, starts_at, ends_at, invites).await
            }
            Err(e) => Err(e.into()),
        },
        Commands::Get { id } => show_trip(&read_only_client(&config), &id).await,
        Commands::Current {} => show_current_trip(&read_only_client(&config), &store).await,
        Commands::Forget {} => store
            .remove()
            .map(|_| println!("Stored trip forgotten."))
            .map_err(Into::into),
    };

    if let Err(e) = result {
        println!("Oops: {}", e);
    }
}

fn writable_client(config: &AppConfig) -> Result<TripClient, String> {
    Ok(TripClient::new(config.api_url(), config.owner()?))
}

fn read_only_client(config: &AppConfig) -> TripClient {
    TripClient::new(config.api_url(), config.owner().unwrap_or_default())
}

async fn plan_trip(api: &dyn TripApi, store: &dyn TripStore) -> CliResult<()> {
    let mut form = TripForm::new(Local::now().date_naive());
    println!("Invite your friends and plan your next trip.");

    loop {
        match form.step {
            StepForm::TripDetails => {
                let destination = Text::new("Where to?")
                    .with_initial_value(&form.destination)
                    .prompt()?;
                form.update(FormAction::SetDestination(destination));
                pick_dates(&mut form)?;
                show_effect(form.update(FormAction::NextStep));
            }
            StepForm::AddEmail => {
                print_summary(&form);
                let choice = Select::new(
                    "What next?",
                    vec![
                        GuestMenu::Invite,
                        GuestMenu::Remove,
                        GuestMenu::ChangeDetails,
                        GuestMenu::Confirm,
                    ],
                )
                .prompt()?;
                match choice {
                    GuestMenu::Invite => invite_guest(&mut form)?,
                    GuestMenu::Remove => remove_guest(&mut form)?,
                    GuestMenu::ChangeDetails => {
                        form.update(FormAction::EditDetails);
                    }
                    GuestMenu::Confirm => {
                        if form.update(FormAction::NextStep) != FormEffect::ConfirmTrip {
                            continue;
                        }
                        if !Confirm::new("Confirm trip?").with_default(true).prompt()? {
                            continue;
                        }
                        match TripService::create_trip(&mut form, api, store).await {
                            Ok(created) => {
                                println!("Trip created! Open it at {}", created.path());
                                return Ok(());
                            }
                            Err(e) if e.created_trip().is_some() => {
                                report_unsaved_trip(&e);
                                return Ok(());
                            }
                            Err(e) => {
                                println!("Oops, the trip could not be created. Try again later. ({})", e);
                            }
                        }
                    }
                }
            }
        }
    }
}

fn pick_dates(form: &mut TripForm) -> CliResult<()> {
    form.update(FormAction::OpenCalendar);
    println!("Select the departure and return days of your trip.");
    loop {
        let label = form.date_label();
        let help = if label.is_empty() {
            "No dates selected".to_string()
        } else {
            label
        };
        let input = Text::new("Day (YYYY-MM-DD), empty to confirm:")
            .with_help_message(&help)
            .prompt()?;
        if input.trim().is_empty() {
            break;
        }
        match input.parse::<CalendarDay>() {
            Ok(day) => show_effect(form.update(FormAction::SelectDay(day))),
            Err(e) => println!("{}", e),
        }
    }
    form.update(FormAction::CloseModal);
    Ok(())
}

fn invite_guest(form: &mut TripForm) -> CliResult<()> {
    form.update(FormAction::OpenGuests);
    let email = Text::new("Guest email:").prompt()?;
    form.update(FormAction::SetEmailInput(email));
    show_effect(form.update(FormAction::AddEmail));
    form.update(FormAction::CloseModal);
    Ok(())
}

fn remove_guest(form: &mut TripForm) -> CliResult<()> {
    if form.emails_to_invite.is_empty() {
        println!("No guests added");
        return Ok(());
    }
    let email = Select::new("Remove which guest?", form.emails_to_invite.clone()).prompt()?;
    form.update(FormAction::RemoveEmail(email));
    Ok(())
}

fn show_effect(effect: FormEffect) {
    if let FormEffect::Alert(alert) = effect {
        println!("{}: {}", alert.title, alert.message);
    }
}

fn print_summary(form: &TripForm) {
    println!("Destination: {}", form.destination.trim());
    println!("When: {}", form.date_label());
    let guests = form.guests_summary();
    if guests.is_empty() {
        println!("Guests: none yet");
    } else {
        println!("Guests: {} ({})", guests, form.emails_to_invite.join(", "));
    }
}

async fn create_trip(
    api: &dyn TripApi,
    store: &dyn TripStore,
    destination: String,
    starts_at: CalendarDay,
    ends_at: CalendarDay,
    invites: Vec<String>,
) -> CliResult<()> {
    let mut form = TripForm::new(Local::now().date_naive());
    let mut actions = vec![
        FormAction::SetDestination(destination),
        FormAction::SelectDay(starts_at),
        FormAction::SelectDay(ends_at),
        FormAction::NextStep,
    ];
    for email in invites {
        actions.push(FormAction::SetEmailInput(email));
        actions.push(FormAction::AddEmail);
    }
    actions.push(FormAction::NextStep);

    for action in actions {
        if let FormEffect::Alert(alert) = form.update(action) {
            return Err(format!("{}: {}", alert.title, alert.message).into());
        }
    }

    match TripService::create_trip(&mut form, api, store).await {
        Ok(created) => println!("Trip created! Open it at {}", created.path()),
        Err(e) if e.created_trip().is_some() => report_unsaved_trip(&e),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn report_unsaved_trip(err: &SubmitError) {
    if let Some(created) = err.created_trip() {
        println!("Trip created! Open it at {}", created.path());
        println!("It could not be remembered on this machine: {}", err);
    }
}

async fn show_trip(api: &dyn TripApi, id: &str) -> CliResult<()> {
    let trip = api.get_by_id(id).await?;
    println!("{}", render_trip(&trip));
    Ok(())
}

async fn show_current_trip(api: &dyn TripApi, store: &dyn TripStore) -> CliResult<()> {
    match TripService::current_trip(api, store).await? {
        Some(trip) => println!("{}", render_trip(&trip)),
        None => println!("No trip stored yet."),
    }
    Ok(())
}

fn render_trip(trip: &TripDetails) -> String {
    let range = SelectedRange::between(
        trip.starts_at.date_naive().into(),
        trip.ends_at.date_naive().into(),
    );
    let status = if trip.is_confirmed {
        "confirmed"
    } else {
        "awaiting confirmation"
    };
    format!(
        "{}\n{}\n{} ({})",
        trip.id,
        trip.destination,
        to_display_label(&range),
        status
    )
}
