//! Interactive host/guest session.
//!
//! The session owns the active account as explicit state and drives the two
//! menu loops. Every handler reports recoverable errors (validation,
//! not-found, lost windows) through [`OperationStatus`] and returns to the
//! menu; only infrastructure failures abort the session.

use std::fmt::Write as _;

use anyhow::Result;
use snakebnb_core::{
    display::{BookResult, BookingSummaries, Cages, CreateResult, Matches, OperationStatus, Snakes},
    models::Owner,
    params::{
        AddAvailability, AddSnake, AvailabilitySearch, BookCage, CreateAccount, Id, RegisterCage,
    },
    Bnb,
};

use crate::{
    args::StartMode,
    command::{GuestCommand, HostCommand},
    prompt,
    renderer::TerminalRenderer,
};

/// Which menu the session is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Host,
    Guest,
}

impl From<StartMode> for Mode {
    fn from(mode: StartMode) -> Self {
        match mode {
            StartMode::Host => Mode::Host,
            StartMode::Guest => Mode::Guest,
        }
    }
}

/// Outcome of one dispatched command.
enum Flow {
    Continue,
    SwitchMode,
    Exit,
}

/// An interactive console session over the booking store.
pub struct Session {
    bnb: Bnb,
    renderer: TerminalRenderer,
    account: Option<Owner>,
    mode: Mode,
}

impl Session {
    /// Create a session starting in the given mode with no account logged in.
    pub fn new(bnb: Bnb, renderer: TerminalRenderer, mode: Mode) -> Self {
        Self {
            bnb,
            renderer,
            account: None,
            mode,
        }
    }

    /// Run the menu loop until the user exits or stdin closes.
    pub async fn run(&mut self) -> Result<()> {
        self.show_welcome()?;
        self.show_commands()?;

        loop {
            let Some(input) = prompt::raw_line(&self.prompt_text())? else {
                break;
            };

            let flow = match self.mode {
                Mode::Host => self.dispatch_host(&input).await?,
                Mode::Guest => self.dispatch_guest(&input).await?,
            };

            match flow {
                Flow::Continue => {}
                Flow::SwitchMode => {
                    self.mode = match self.mode {
                        Mode::Host => Mode::Guest,
                        Mode::Guest => Mode::Host,
                    };
                    self.show_welcome()?;
                    self.show_commands()?;
                }
                Flow::Exit => break,
            }
        }

        println!("bye");
        Ok(())
    }

    async fn dispatch_host(&mut self, input: &str) -> Result<Flow> {
        let command = match input.parse::<HostCommand>() {
            Ok(command) => command,
            Err(unknown) => {
                self.report_failure(&format!("Unknown command '{unknown}'."))?;
                return Ok(Flow::Continue);
            }
        };

        match command {
            HostCommand::CreateAccount => self.create_account().await?,
            HostCommand::Login => self.login().await?,
            HostCommand::ListCages => self.list_cages().await?,
            HostCommand::RegisterCage => self.register_cage().await?,
            HostCommand::UpdateAvailability => self.update_availability().await?,
            HostCommand::ViewBookings => self.host_bookings().await?,
            HostCommand::Help => self.show_commands()?,
            HostCommand::SwitchMode => return Ok(Flow::SwitchMode),
            HostCommand::Exit => return Ok(Flow::Exit),
            HostCommand::Noop => {}
        }

        Ok(Flow::Continue)
    }

    async fn dispatch_guest(&mut self, input: &str) -> Result<Flow> {
        let command = match input.parse::<GuestCommand>() {
            Ok(command) => command,
            Err(unknown) => {
                self.report_failure(&format!("Unknown command '{unknown}'."))?;
                return Ok(Flow::Continue);
            }
        };

        match command {
            GuestCommand::CreateAccount => self.create_account().await?,
            GuestCommand::Login => self.login().await?,
            GuestCommand::AddSnake => self.add_snake().await?,
            GuestCommand::ViewSnakes => self.view_snakes().await?,
            GuestCommand::BookCage => self.book_cage().await?,
            GuestCommand::ViewBookings => self.guest_bookings().await?,
            GuestCommand::Help => self.show_commands()?,
            GuestCommand::SwitchMode => return Ok(Flow::SwitchMode),
            GuestCommand::Exit => return Ok(Flow::Exit),
            GuestCommand::Noop => {}
        }

        Ok(Flow::Continue)
    }

    // ------------------------------------------------------------------
    // Shared account handlers
    // ------------------------------------------------------------------

    async fn create_account(&mut self) -> Result<()> {
        self.renderer.render("# Register\n")?;

        let Some(name) = prompt::line("What is your name? ")? else {
            return self.canceled();
        };
        let Some(email) = prompt::line("What is your email? ")? else {
            return self.canceled();
        };

        let result = self.bnb.create_account(&CreateAccount { name, email }).await;
        if let Some(owner) = self.recover(result)? {
            self.renderer
                .render(&CreateResult::new(owner.clone()).to_string())?;
            self.account = Some(owner);
        }
        Ok(())
    }

    async fn login(&mut self) -> Result<()> {
        self.renderer.render("# Login\n")?;

        let Some(email) = prompt::line("What is your email? ")? else {
            return self.canceled();
        };

        match self.bnb.find_account_by_email(&email).await? {
            Some(owner) => {
                self.report_success(&format!("Logged in as {}.", owner.name))?;
                self.account = Some(owner);
            }
            None => {
                self.report_failure(&format!("The email {email} is not registered."))?;
            }
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Host handlers
    // ------------------------------------------------------------------

    async fn list_cages(&mut self) -> Result<()> {
        self.renderer.render("# Your cages\n")?;
        let Some(account) = self.require_login("list your cages")? else {
            return Ok(());
        };

        let cages = self.bnb.cages_for_owner(&Id { id: account.id }).await?;
        self.renderer
            .render(&format!("You have {} cages.\n", cages.len()))?;
        self.renderer.render(&Cages(cages).to_string())?;
        Ok(())
    }

    async fn register_cage(&mut self) -> Result<()> {
        self.renderer.render("# Register a cage\n")?;
        let Some(account) = self.require_login("register a cage")? else {
            return Ok(());
        };

        let Some(name) = prompt::line("Give your cage a name: ")? else {
            return self.canceled();
        };
        let Some(square_meters) = prompt::positive_f64("How many square meters? ")? else {
            return self.canceled();
        };
        let is_carpeted = prompt::yes_no("Is it carpeted? [y/n] ")?;
        let has_toys = prompt::yes_no("Does it have snake toys? [y/n] ")?;
        let allow_dangerous = prompt::yes_no("Allow venomous snakes? [y/n] ")?;
        let Some(price) = prompt::positive_f64("Price per night: ")? else {
            return self.canceled();
        };

        let result = self
            .bnb
            .register_cage(&RegisterCage {
                owner_id: account.id,
                name,
                square_meters,
                is_carpeted,
                has_toys,
                allow_dangerous,
                price,
            })
            .await;
        if let Some(cage) = self.recover(result)? {
            self.renderer.render(&CreateResult::new(cage).to_string())?;
        }
        Ok(())
    }

    async fn update_availability(&mut self) -> Result<()> {
        self.renderer.render("# Add available date\n")?;
        let Some(account) = self.require_login("update availability")? else {
            return Ok(());
        };

        let cages = self.bnb.cages_for_owner(&Id { id: account.id }).await?;
        if cages.is_empty() {
            return self.report_failure("You have no cages. [R]egister one first.");
        }

        let mut listing = String::new();
        for (idx, cage) in cages.iter().enumerate() {
            let _ = writeln!(
                listing,
                "{}. **{}** is {} square meters",
                idx + 1,
                cage.name,
                cage.square_meters
            );
        }
        self.renderer.render(&listing)?;

        let Some(choice) = prompt::selection("Enter cage number: ", cages.len())? else {
            return self.canceled();
        };
        let cage = &cages[choice];

        let Some(start) = prompt::date("Start date [yyyy-mm-dd]: ")? else {
            return self.canceled();
        };
        let Some(days) = prompt::positive_i64("How many days is this block of time? ")? else {
            return self.canceled();
        };

        let result = self
            .bnb
            .add_availability(&AddAvailability {
                owner_id: account.id,
                cage_id: cage.id,
                start,
                days,
            })
            .await;
        if let Some(cage) = self.recover(result)? {
            self.report_success(&format!("Date added to cage {}.", cage.name))?;
        }
        Ok(())
    }

    async fn host_bookings(&mut self) -> Result<()> {
        self.renderer.render("# Your bookings\n")?;
        let Some(account) = self.require_login("view your bookings")? else {
            return Ok(());
        };

        let cages = self.bnb.cages_for_owner(&Id { id: account.id }).await?;
        let booked: Vec<(String, &snakebnb_core::Booking)> = cages
            .iter()
            .flat_map(|cage| {
                cage.bookings
                    .iter()
                    .filter(|b| b.is_booked())
                    .map(move |b| (cage.name.clone(), b))
            })
            .collect();

        self.renderer
            .render(&format!("You have {} bookings.\n", booked.len()))?;
        let mut listing = String::new();
        for (cage_name, booking) in booked {
            let _ = writeln!(
                listing,
                "- Cage **{}** is booked from {} for {} days",
                cage_name,
                booking.check_in,
                booking.nights()
            );
        }
        self.renderer.render(&listing)?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Guest handlers
    // ------------------------------------------------------------------

    async fn add_snake(&mut self) -> Result<()> {
        self.renderer.render("# Add a snake\n")?;
        let Some(account) = self.require_login("add a snake")? else {
            return Ok(());
        };

        let Some(name) = prompt::line("What is the snake's name? ")? else {
            return self.canceled();
        };
        let Some(length_m) = prompt::positive_f64("What is its length in meters? ")? else {
            return self.canceled();
        };
        let Some(species) = prompt::line("Species: ")? else {
            return self.canceled();
        };
        let is_venomous = prompt::yes_no("Venomous? [y/n] ")?;

        let result = self
            .bnb
            .add_snake(&AddSnake {
                owner_id: account.id,
                name,
                length_m,
                species,
                is_venomous,
            })
            .await;
        if let Some(snake) = self.recover(result)? {
            self.renderer.render(&CreateResult::new(snake).to_string())?;
        }
        Ok(())
    }

    async fn view_snakes(&mut self) -> Result<()> {
        self.renderer.render("# Your snakes\n")?;
        let Some(account) = self.require_login("view your snakes")? else {
            return Ok(());
        };

        let snakes = self.bnb.snakes_for_owner(&Id { id: account.id }).await?;
        self.renderer
            .render(&format!("You have {} snakes.\n", snakes.len()))?;
        self.renderer.render(&Snakes(snakes).to_string())?;
        Ok(())
    }

    async fn book_cage(&mut self) -> Result<()> {
        self.renderer.render("# Book a cage\n")?;
        let Some(account) = self.require_login("book a cage")? else {
            return Ok(());
        };

        let snakes = self.bnb.snakes_for_owner(&Id { id: account.id }).await?;
        if snakes.is_empty() {
            return self.report_failure("You must first [a]dd a snake before you can book a cage.");
        }

        let Some(check_in) = prompt::date("Check-in date [yyyy-mm-dd]: ")? else {
            return self.canceled();
        };
        let Some(check_out) = prompt::date("Check-out date [yyyy-mm-dd]: ")? else {
            return self.canceled();
        };
        // Rejected here, before any availability query is issued
        if check_out <= check_in {
            return self.report_failure("Check-out date must be after check-in date.");
        }

        let snakes = Snakes(snakes);
        self.renderer.render(&snakes.to_string())?;
        let Some(choice) = prompt::selection("Which snake would you like to book? ", snakes.len())?
        else {
            return self.canceled();
        };
        let Some(snake) = snakes.get(choice).cloned() else {
            return Ok(());
        };

        let result = self
            .bnb
            .available_cages(&AvailabilitySearch {
                check_in,
                check_out,
                snake_id: snake.id,
            })
            .await;
        let Some(matches) = self.recover(result)? else {
            return Ok(());
        };

        self.renderer
            .render(&format!("There are {} cages available.\n", matches.len()))?;
        if matches.is_empty() {
            return self.report_failure("No available cages.");
        }
        let matches = Matches(matches);
        self.renderer.render(&matches.to_string())?;

        let Some(choice) = prompt::selection("Which cage would you like to book? ", matches.len())?
        else {
            return self.canceled();
        };
        let Some(chosen) = matches.get(choice).cloned() else {
            return Ok(());
        };

        let result = self
            .bnb
            .book_cage(&BookCage {
                owner_id: account.id,
                snake_id: snake.id,
                cage_id: chosen.cage.id,
                check_in,
                check_out,
            })
            .await;
        if let Some(booking) = self.recover(result)? {
            self.renderer.render(
                &BookResult {
                    cage_name: chosen.cage.name,
                    snake_name: snake.name,
                    price: chosen.cage.price,
                    booking,
                }
                .to_string(),
            )?;
        }
        Ok(())
    }

    async fn guest_bookings(&mut self) -> Result<()> {
        self.renderer.render("# Your bookings\n")?;
        let Some(account) = self.require_login("view your bookings")? else {
            return Ok(());
        };

        let bookings = self.bnb.bookings_for_guest(&Id { id: account.id }).await?;
        self.renderer
            .render(&format!("You have {} bookings.\n", bookings.len()))?;
        self.renderer.render(&BookingSummaries(bookings).to_string())?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    fn prompt_text(&self) -> String {
        match &self.account {
            Some(owner) => format!("{}> ", owner.name),
            None => "> ".to_string(),
        }
    }

    fn show_welcome(&self) -> Result<()> {
        match self.mode {
            Mode::Host => self.renderer.render("# Welcome host\n"),
            Mode::Guest => self.renderer.render("# Welcome guest\n"),
        }
    }

    fn show_commands(&self) -> Result<()> {
        let commands = match self.mode {
            Mode::Host => {
                "What action would you like to take?\n\
                 [C]reate an account\n\
                 Log into your [a]ccount\n\
                 [L]ist your cages\n\
                 [R]egister a cage\n\
                 [U]pdate cage availability\n\
                 [V]iew your bookings\n\
                 Change [M]ode (guest or host)\n\
                 e[X]it app\n\
                 [?] Help (this info)\n"
            }
            Mode::Guest => {
                "What action would you like to take?\n\
                 [C]reate an account\n\
                 [L]ogin to your account\n\
                 [B]ook a cage\n\
                 [A]dd a snake\n\
                 View [y]our snakes\n\
                 [V]iew your bookings\n\
                 Change [M]ode (guest or host)\n\
                 e[X]it app\n\
                 [?] Help (this info)\n"
            }
        };
        self.renderer.render(commands)
    }

    /// Returns a clone of the active account, or reports why the action
    /// needs a login.
    fn require_login(&self, action: &str) -> Result<Option<Owner>> {
        match &self.account {
            Some(owner) => Ok(Some(owner.clone())),
            None => {
                self.report_failure(&format!("You must be logged in to {action}."))?;
                Ok(None)
            }
        }
    }

    /// Unwraps an operation result, reporting recoverable errors to the
    /// user and passing infrastructure errors up.
    fn recover<T>(&self, result: snakebnb_core::Result<T>) -> Result<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_recoverable() => {
                self.report_failure(&e.to_string())?;
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn canceled(&self) -> Result<()> {
        self.report_failure("Canceled.")
    }

    fn report_success(&self, message: &str) -> Result<()> {
        self.renderer
            .render(&OperationStatus::success(message.to_string()).to_string())
    }

    fn report_failure(&self, message: &str) -> Result<()> {
        self.renderer
            .render(&OperationStatus::failure(message.to_string()).to_string())
    }
}
