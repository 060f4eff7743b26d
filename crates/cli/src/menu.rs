//! The numbered menu loop.
//!
//! ```text
//! Prompting ──valid choice──▶ Dispatching(choice) ──▶ Prompting
//!                                    │
//!                                  Exit / end of input
//!                                    ▼
//!                                 Exiting
//! ```

use std::io::{self, BufRead, Write};

use stockroom_core::DomainError;
use stockroom_infra::{InventoryRepository, LoadOutcome};
use stockroom_inventory::{InventoryStore, Item, ItemName, Price, Quantity};

use crate::render;

/// One of the five menu entries.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Remove,
    List,
    Total,
    Exit,
}

impl MenuChoice {
    /// Parse the number typed at the menu prompt.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<i64>().ok()? {
            1 => Some(Self::Add),
            2 => Some(Self::Remove),
            3 => Some(Self::List),
            4 => Some(Self::Total),
            5 => Some(Self::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum State {
    Prompting,
    Dispatching(MenuChoice),
    Exiting,
}

/// How an interactive session ended.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// The inventory was written back on exit.
    Saved,
    /// Exit was reached but writing the inventory failed.
    SaveFailed,
    /// The data file could not be opened for writing at startup; no menu was shown.
    WriterUnavailable,
}

/// Drives the menu over any line-oriented input and any output.
pub struct MenuController<P, R, W> {
    repository: P,
    store: InventoryStore,
    input: R,
    output: W,
}

impl<P, R, W> MenuController<P, R, W>
where
    P: InventoryRepository,
    R: BufRead,
    W: Write,
{
    /// The store starts empty; [`run`](Self::run) fills it from `repository`.
    pub fn new(repository: P, capacity: usize, input: R, output: W) -> Self {
        Self {
            repository,
            store: InventoryStore::with_capacity(capacity),
            input,
            output,
        }
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    /// Load, loop until Exit (or end of input), save.
    ///
    /// Only failures to talk to the console itself are returned as errors.
    pub fn run(&mut self) -> io::Result<SessionEnd> {
        self.restore()?;

        if let Err(err) = self.repository.check_writable() {
            tracing::warn!(error = %err, "data file not writable; skipping menu");
            writeln!(
                self.output,
                "The data writer failed to open. Please run the program again."
            )?;
            return Ok(SessionEnd::WriterUnavailable);
        }

        let mut state = State::Prompting;
        loop {
            state = match state {
                State::Prompting => match self.prompt_choice()? {
                    Some(choice) => State::Dispatching(choice),
                    None => State::Dispatching(MenuChoice::Exit),
                },
                State::Dispatching(choice) => self.dispatch(choice)?,
                State::Exiting => {
                    let end = self.save()?;
                    self.output.flush()?;
                    return Ok(end);
                }
            };
        }
    }

    fn restore(&mut self) -> io::Result<()> {
        let outcome = self.repository.load();
        if outcome.is_missing() {
            writeln!(self.output, "There is no pre-existing data in your inventory.")?;
        }
        if let LoadOutcome::Loaded(decoded) = &outcome {
            if let Some(record) = decoded.stopped_at {
                tracing::warn!(record, kept = decoded.items.len(), "persisted inventory was cut short");
            }
        }

        let (store, dropped) = InventoryStore::from_items(outcome.into_items(), self.store.capacity());
        self.store = store;
        if dropped > 0 {
            writeln!(
                self.output,
                "Only the first {} saved items were loaded; {dropped} more were ignored.",
                self.store.capacity()
            )?;
        }
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<State> {
        tracing::debug!(?choice, "menu choice");
        let finished = match choice {
            MenuChoice::Add => self.add_item()?,
            MenuChoice::Remove => self.remove_item()?,
            MenuChoice::List => self.show_list()?,
            MenuChoice::Total => self.show_total()?,
            MenuChoice::Exit => return Ok(State::Exiting),
        };
        // Input ran out mid-action: behave as if Exit had been chosen.
        Ok(match finished {
            Some(()) => State::Prompting,
            None => State::Dispatching(MenuChoice::Exit),
        })
    }

    fn prompt_choice(&mut self) -> io::Result<Option<MenuChoice>> {
        write!(self.output, "{}", render::MENU)?;
        self.prompt("\nEnter your preferred action: ")?;
        loop {
            let Some(line) = self.read_token()? else {
                return Ok(None);
            };
            if let Some(choice) = MenuChoice::parse(&line) {
                return Ok(Some(choice));
            }
            self.prompt("Error! Enter a valid choice input (Must be 1 through 5): ")?;
        }
    }

    fn add_item(&mut self) -> io::Result<Option<()>> {
        if self.store.is_full() {
            self.report(&DomainError::capacity_exceeded(self.store.capacity()))?;
            return Ok(Some(()));
        }

        self.prompt("\nEnter the name of the item (No spaces, use underscores): ")?;
        let Some(name) = self.read_valid(ItemName::new, "Error! Enter a shorter name for the item: ")?
        else {
            return Ok(None);
        };

        self.prompt("Enter the quantity of the item (integer from 1-1000): ")?;
        let Some(quantity) = self.read_valid(
            |s| Quantity::parse(&s),
            "Error! Enter a quantity value that is in the valid range of 1 through 1000: ",
        )?
        else {
            return Ok(None);
        };

        self.prompt("Enter the price of the item ($0.00-$10,000.00): $")?;
        let Some(price) = self.read_valid(
            |s| Price::parse(&s),
            "Error! Enter a price value that is in the valid range of 0 through 10000: $",
        )?
        else {
            return Ok(None);
        };

        let item = Item::new(name, quantity, price);
        let label = item.name().to_string();
        match self.store.add(item) {
            Ok(()) => writeln!(self.output, "Successfully added {label} to inventory.\n")?,
            Err(err) => self.report(&err)?,
        }
        Ok(Some(()))
    }

    fn remove_item(&mut self) -> io::Result<Option<()>> {
        if !self.store.is_empty() {
            writeln!(self.output, "\nYour current items in your inventory are:")?;
            writeln!(self.output, "{}", render::numbered_names(self.store.names()))?;
        }

        self.prompt("Enter the number of the item you would like to remove from inventory: ")?;
        let position = loop {
            let Some(token) = self.read_token()? else {
                return Ok(None);
            };
            if is_integer(&token) {
                break token;
            }
            self.prompt("Error! Enter the number shown next to the item: ")?;
        };

        // Negative or oversized positions never name an item; report them as typed.
        match position.parse::<usize>().map(|n| self.store.remove(n)) {
            Ok(Ok(item)) => writeln!(self.output, "Removed {} from inventory.\n", item.name())?,
            _ => writeln!(
                self.output,
                "Error! There is no item at position {position}.\n"
            )?,
        }
        Ok(Some(()))
    }

    fn show_list(&mut self) -> io::Result<Option<()>> {
        write!(self.output, "\n{}", render::inventory_table(self.store.list()))?;
        self.acknowledge()
    }

    fn show_total(&mut self) -> io::Result<Option<()>> {
        writeln!(self.output, "\n{}", render::total_value(self.store.total_value()))?;
        self.acknowledge()
    }

    fn save(&mut self) -> io::Result<SessionEnd> {
        match self.repository.save(self.store.list()) {
            Ok(()) => {
                writeln!(self.output, "\nThe inventory data was successfully saved.")?;
                Ok(SessionEnd::Saved)
            }
            Err(err) => {
                tracing::warn!(error = %err, "saving inventory failed");
                writeln!(self.output, "\nThe inventory data could not be saved: {err}")?;
                Ok(SessionEnd::SaveFailed)
            }
        }
    }

    fn report(&mut self, err: &DomainError) -> io::Result<()> {
        match err {
            DomainError::CapacityExceeded { .. } => writeln!(
                self.output,
                "\nYou have reached the maximum number of items to be stored in the tracker.\n\
                 Remove an item to be able to add to inventory.\n"
            ),
            DomainError::IndexOutOfRange { position, .. } => {
                writeln!(self.output, "Error! There is no item at position {position}.\n")
            }
            DomainError::Validation(msg) => writeln!(self.output, "Error! {msg}.\n"),
        }
    }

    /// Pause until the user presses ENTER (or input ends).
    fn acknowledge(&mut self) -> io::Result<Option<()>> {
        self.prompt("\nPress ENTER to continue.\n")?;
        Ok(self.read_line()?.map(|_| ()))
    }

    /// Keep reading tokens until `parse` accepts one, printing `retry` after each miss.
    fn read_valid<T>(
        &mut self,
        parse: impl Fn(String) -> Result<T, DomainError>,
        retry: &str,
    ) -> io::Result<Option<T>> {
        loop {
            let Some(token) = self.read_token()? else {
                return Ok(None);
            };
            match parse(token) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => {
                    tracing::debug!(error = %err, "input rejected");
                    self.prompt(retry)?;
                }
            }
        }
    }

    /// First whitespace-separated token of the next non-blank line.
    fn read_token(&mut self) -> io::Result<Option<String>> {
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if let Some(token) = line.split_whitespace().next() {
                return Ok(Some(token.to_string()));
            }
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()
    }
}

/// Decimal digits with an optional leading sign.
fn is_integer(token: &str) -> bool {
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
