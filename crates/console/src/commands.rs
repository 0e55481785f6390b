// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::cli::{Args, Command, ListArgs, RequestAction};
use crate::render::{
    Column, INVENTORY_COLUMNS, LOCATION_COLUMNS, RECEIVER_COLUMNS, REGISTRATION_COLUMNS,
    REQUEST_COLUMNS, SCHEDULE_COLUMNS, USER_COLUMNS, controls_from, render_table,
};
use blood_bank::{
    DashboardStats, GuardDecision, ListController, ListItem, ListSpec, RouteTable, donors_spec,
    inventory_spec, locations_spec, receivers_spec, requests_spec, schedules_spec, users_spec,
};
use blood_bank_client::services::{admin, medical_center, schedule, staff};
use blood_bank_client::{
    ApiClient, ApiError, ClientStorage, FileStorage, SessionEvent, SessionEvents, SessionStore,
};
use blood_bank_domain::{BloodType, Credentials, InventoryItem, Role, SignUp, User};
use color_eyre::Result;
use color_eyre::eyre::{Report, bail, eyre};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, info};

/// Runs one console command against the saved session.
pub async fn run(args: Args) -> Result<()> {
    let config = args.client_config()?;
    let storage: Arc<dyn ClientStorage> = Arc::new(FileStorage::open(args.state_dir.clone())?);
    let events: SessionEvents = SessionEvents::new();
    let mut invalidations: broadcast::Receiver<SessionEvent> = events.subscribe();
    let client: ApiClient = ApiClient::new(&config, storage, events)?;

    debug!(base_url = config.base_url(), state_dir = %args.state_dir.display(), "Starting console");

    let mut console: Console = Console {
        store: SessionStore::restore(client)?,
        routes: RouteTable::standard(),
    };
    let outcome: Result<()> = console.execute(args.command).await;

    while let Ok(event) = invalidations.try_recv() {
        console.store.handle_event(&event)?;
    }
    if let Some(path) = console.store.take_redirect() {
        info!(path, "Session ended");
    }

    outcome
}

fn user_facing(error: ApiError) -> Report {
    debug!(error = %error, "API call failed");
    eyre!("{}", error.user_message())
}

struct Console {
    store: SessionStore,
    routes: RouteTable,
}

impl Console {
    fn role(&self) -> Option<Role> {
        self.store.session().role()
    }

    fn user_id(&self) -> Result<i64> {
        self.store
            .session()
            .user()
            .map(|user| user.id)
            .ok_or_else(|| eyre!("Not logged in"))
    }

    /// Guards `path` for the current session.
    fn require(&self, path: &str) -> Result<()> {
        match self.routes.decide(path, self.store.session()) {
            Some(GuardDecision::Allow) => Ok(()),
            Some(GuardDecision::RedirectToLogin { return_to }) => {
                bail!("Log in to open {return_to}: blood-bank-console login --email <EMAIL>")
            }
            Some(GuardDecision::RedirectToHome) => {
                let home: &str = self.role().map_or("/", |role| role.home_path());
                bail!("Your account cannot open {path}; your dashboard is {home}")
            }
            Some(GuardDecision::Pending) => bail!("The session is still loading"),
            None => bail!("Unknown page {path}"),
        }
    }

    /// Picks the page for the current role: `admin_path` for administrators,
    /// `other_path` for everyone else.
    fn page(&self, admin_path: &'static str, other_path: &'static str) -> (bool, &'static str) {
        if self.role() == Some(Role::Admin) {
            (true, admin_path)
        } else {
            (false, other_path)
        }
    }

    async fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Login { email, password } => {
                let user: User = self
                    .store
                    .login(&Credentials { email, password })
                    .await
                    .map_err(user_facing)?;
                println!("Logged in as {} ({})", user.full_name, user.role);
                println!("Dashboard: {}", user.role.home_path());
                Ok(())
            }
            Command::Register {
                full_name,
                email,
                password,
                phone,
                dob,
                address,
                gender,
            } => {
                let sign_up: SignUp = SignUp {
                    full_name,
                    email,
                    password,
                    phone,
                    dob,
                    address,
                    gender,
                };
                let user: User = self.store.register(&sign_up).await.map_err(user_facing)?;
                println!("Welcome, {}. Your account id is {}.", user.full_name, user.id);
                Ok(())
            }
            Command::Logout => {
                self.store.logout().await?;
                println!("Logged out");
                Ok(())
            }
            Command::Whoami => {
                match self.store.session().user() {
                    Some(user) => {
                        println!("{} <{}>", user.full_name, user.email);
                        println!("Role: {}", user.role);
                        if let Some(blood_type) = user.blood_type {
                            println!("Blood type: {blood_type}");
                        }
                        println!("Dashboard: {}", user.role.home_path());
                    }
                    None => println!("Not logged in"),
                }
                Ok(())
            }
            Command::Dashboard => self.dashboard().await,
            Command::Users { list } => {
                self.require("/admin/users")?;
                let users: Result<Vec<User>, ApiError> =
                    admin::get_all_users(self.store.client()).await;
                show(users, users_spec(), &USER_COLUMNS, &list)
            }
            Command::Requests { list } => self.requests(&list).await,
            Command::RequestAction { id, action } => self.request_action(id, action).await,
            Command::Inventory { list } => {
                let (as_admin, path) = self.page("/admin/inventory", "/staff/inventory");
                self.require(path)?;
                let client: &ApiClient = self.store.client();
                let items: Result<Vec<InventoryItem>, ApiError> = if as_admin {
                    admin::get_blood_inventory(client).await
                } else {
                    staff::get_blood_inventory(client).await
                };
                show(items, inventory_spec(), &INVENTORY_COLUMNS, &list)
            }
            Command::SetStock {
                id,
                blood_type,
                quantity,
            } => self.set_stock(id, blood_type, quantity).await,
            Command::Schedules { list } => {
                self.require("/schedule")?;
                let schedules = schedule::get_all_schedules(self.store.client()).await;
                show(schedules, schedules_spec(), &SCHEDULE_COLUMNS, &list)
            }
            Command::Locations { list } => {
                let (as_admin, path) = self.page("/admin/locations", "/staff/locations");
                self.require(path)?;
                let client: &ApiClient = self.store.client();
                let locations = if as_admin {
                    admin::get_all_locations(client).await
                } else {
                    staff::get_all_locations(client).await
                };
                show(locations, locations_spec(), &LOCATION_COLUMNS, &list)
            }
            Command::Donors { list } => {
                let (as_admin, path) = self.page("/admin/donors", "/staff/donors");
                self.require(path)?;
                let client: &ApiClient = self.store.client();
                let registrations = if as_admin {
                    admin::get_pending_registrations(client).await
                } else {
                    staff::get_pending_registrations(client).await
                };
                show(registrations, donors_spec(), &REGISTRATION_COLUMNS, &list)
            }
            Command::Receivers { list } => {
                self.require("/medical-center/receivers")?;
                let center_id: i64 = self.user_id()?;
                let receivers =
                    medical_center::get_all_receivers(self.store.client(), center_id).await;
                show(receivers, receivers_spec(), &RECEIVER_COLUMNS, &list)
            }
        }
    }

    async fn requests(&self, list: &ListArgs) -> Result<()> {
        let client: &ApiClient = self.store.client();
        let requests = match self.role() {
            Some(Role::Admin) => {
                self.require("/admin/blood-requests")?;
                admin::get_all_blood_requests(client).await
            }
            Some(Role::MedicalCenter) => {
                self.require("/medical-center/blood-requests")?;
                medical_center::get_all_blood_requests(client, self.user_id()?).await
            }
            _ => {
                self.require("/staff/blood-requests")?;
                staff::get_all_blood_requests(client).await
            }
        };
        show(requests, requests_spec(), &REQUEST_COLUMNS, list)
    }

    async fn request_action(&self, id: i64, action: RequestAction) -> Result<()> {
        let (as_admin, path) = self.page("/admin/blood-requests", "/staff/blood-requests");
        self.require(path)?;
        let client: &ApiClient = self.store.client();

        let message: String = match (as_admin, action) {
            (true, RequestAction::Confirm) => admin::confirm_blood_request(client, id).await,
            (true, RequestAction::Priority) => admin::mark_priority(client, id).await,
            (true, RequestAction::OutOfStock) => admin::mark_out_of_stock(client, id).await,
            (false, RequestAction::Confirm) => staff::confirm_blood_request(client, id).await,
            (false, RequestAction::Priority) => staff::mark_priority(client, id).await,
            (false, RequestAction::OutOfStock) => staff::mark_out_of_stock(client, id).await,
        }
        .map_err(user_facing)?;

        if message.is_empty() {
            println!("Blood request {id} updated");
        } else {
            println!("{message}");
        }
        Ok(())
    }

    async fn set_stock(&self, id: i64, blood_type: BloodType, quantity: i64) -> Result<()> {
        let (as_admin, path) = self.page("/admin/inventory", "/staff/inventory");
        self.require(path)?;
        let client: &ApiClient = self.store.client();

        let item: InventoryItem = if as_admin {
            admin::update_blood_inventory(client, id, blood_type, quantity).await
        } else {
            staff::update_blood_inventory(client, id, blood_type, quantity).await
        }
        .map_err(user_facing)?;

        println!(
            "{} now has {} units ({})",
            item.blood_type,
            item.quantity,
            item.stock_level()
        );
        Ok(())
    }

    async fn dashboard(&self) -> Result<()> {
        let (as_admin, path) = self.page("/admin/dashboard", "/staff/dashboard");
        self.require(path)?;
        let client: &ApiClient = self.store.client();

        let (donors, requests, inventory) = if as_admin {
            tokio::try_join!(
                admin::get_donors(client),
                admin::get_all_blood_requests(client),
                admin::get_blood_inventory(client),
            )
        } else {
            tokio::try_join!(
                staff::get_all_donors(client),
                staff::get_all_blood_requests(client),
                staff::get_blood_inventory(client),
            )
        }
        .map_err(user_facing)?;

        let stats: DashboardStats = DashboardStats::compute(&donors, &requests, &inventory);
        println!("Donors:           {}", stats.total_donors);
        println!(
            "Blood requests:   {} ({} pending, {} open)",
            stats.total_requests, stats.pending_requests, stats.open_requests
        );
        for (urgency, count) in &stats.open_by_urgency {
            println!("  open {:<10} {count}", urgency.as_str());
        }
        println!("Units in stock:   {}", stats.total_units);
        println!(
            "Low stock types:  {} ({} critical)",
            stats.low_stock, stats.critical_stock
        );
        Ok(())
    }
}

/// Loads a list page through a [`ListController`] and prints its view.
fn show<T: ListItem>(
    outcome: Result<Vec<T>, ApiError>,
    spec: ListSpec<T::Field>,
    columns: &[Column<T::Field>],
    list: &ListArgs,
) -> Result<()> {
    let controls = controls_from(list, &spec, columns).map_err(|message| eyre!(message))?;

    let mut controller: ListController<T> = ListController::new(spec);
    controller.begin_load();
    controller.finish_load(outcome.map_err(|error| {
        debug!(error = %error, "List load failed");
        error.user_message()
    }));
    if let Some(message) = controller.error() {
        bail!("{message}");
    }
    *controller.controls_mut() = controls;

    let rows: Vec<&T> = controller.view();
    print!("{}", render_table(&rows, columns));
    println!("{} of {} shown", rows.len(), controller.items().len());
    Ok(())
}
