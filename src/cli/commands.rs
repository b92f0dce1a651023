//! CLI command implementations
//!
//! The interactive menu is a `Session` over a `Console`. It owns the
//! inventory, calls its operations and renders their results. The inventory
//! itself never prints.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::CliResult;
use super::io::{Console, Input};
use super::render;
use crate::inventory::{Inventory, InventoryError, Product};
use crate::observability::{log_event, log_event_with_fields, Event, Logger};
use crate::persistence;

/// Whether the menu loop keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Main CLI entry point
///
/// Parses arguments, resolves configuration and dispatches.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    let config = Config::resolve(&cli)?;
    Logger::set_min_severity(config.severity()?);

    let data_file = config.data_file.display().to_string();
    log_event_with_fields(Event::ConfigLoaded, &[("data_file", data_file.as_str())]);

    run_command(cli.command(), &config)
}

/// Run the appropriate command
pub fn run_command(cmd: Command, config: &Config) -> CliResult<()> {
    match cmd {
        Command::Menu => menu(config),
        Command::List => list(config),
        Command::Search { term } => search(config, &term),
    }
}

/// Interactive menu on stdin/stdout
pub fn menu(config: &Config) -> CliResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock());

    let mut session = Session::open(config.clone(), console)?;
    session.run()?;
    Ok(())
}

/// Print the full listing of the configured file
pub fn list(config: &Config) -> CliResult<()> {
    let outcome = persistence::load(&config.data_file);
    print_lines(&render::listing(&outcome.inventory))
}

/// Print name matches from the configured file
pub fn search(config: &Config, term: &str) -> CliResult<()> {
    let outcome = persistence::load(&config.data_file);
    print_lines(&render::search_results(outcome.inventory.find_by_name(term)))
}

fn print_lines(lines: &[String]) -> CliResult<()> {
    let mut stdout = io::stdout().lock();
    for line in lines {
        writeln!(stdout, "{}", line)?;
    }
    stdout.flush()?;
    Ok(())
}

/// One interactive menu session
pub struct Session<R, W> {
    console: Console<R, W>,
    inventory: Inventory,
    config: Config,
    input_closed: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Starts a session with the inventory loaded from the configured file.
    pub fn open(config: Config, console: Console<R, W>) -> io::Result<Self> {
        let mut session = Self::with_inventory(config, Inventory::new(), console);
        session.load()?;
        Ok(session)
    }

    /// Starts a session over an existing inventory without touching disk.
    pub fn with_inventory(config: Config, inventory: Inventory, console: Console<R, W>) -> Self {
        Self {
            console,
            inventory,
            config,
            input_closed: false,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn into_parts(self) -> (Inventory, W) {
        (self.inventory, self.console.into_writer())
    }

    /// Shows the menu and handles options until exit or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        log_event(Event::SessionStart);

        loop {
            self.say_all(render::menu())?;
            let option = match self.console.prompt("Seleccione una opción: ")? {
                Some(option) => option,
                None => break,
            };
            if self.dispatch(option.trim())? == Flow::Exit {
                log_event(Event::SessionEnd);
                return Ok(());
            }
            if self.input_closed {
                break;
            }
        }

        self.exit()?;
        log_event(Event::SessionEnd);
        Ok(())
    }

    /// Handles a single menu option.
    pub fn dispatch(&mut self, option: &str) -> io::Result<Flow> {
        match option {
            "1" => self.add()?,
            "2" => self.remove()?,
            "3" => self.update_quantity()?,
            "4" => self.update_price()?,
            "5" => self.search_by_name()?,
            "6" => self.search_by_id()?,
            "7" => self.say_all(render::listing(&self.inventory))?,
            "8" => self.save()?,
            "9" => self.load()?,
            "0" => {
                self.exit()?;
                return Ok(Flow::Exit);
            }
            _ => self.console.say("Opción inválida")?,
        }
        Ok(Flow::Continue)
    }

    fn add(&mut self) -> io::Result<()> {
        self.console.say("\n--- AGREGAR PRODUCTO ---")?;
        let Some(name) = self.console.prompt("Nombre del producto: ")? else {
            self.input_closed = true;
            return Ok(());
        };
        let Some(quantity) = self.ask::<i64>("Cantidad: ")? else {
            return Ok(());
        };
        let Some(price) = self.ask_price("Precio: ")? else {
            return Ok(());
        };

        let id = self.inventory.next_available_id();
        let product = Product::new(id, name, quantity, price);
        let message = format!("Producto '{}' añadido correctamente", product.name());

        match self.inventory.insert(product) {
            Ok(()) => {
                log_event_with_fields(Event::ProductAdded, &[("id", id.to_string().as_str())]);
                self.console.say(message)
            }
            Err(e) => self.reject(&e),
        }
    }

    fn remove(&mut self) -> io::Result<()> {
        let Some(id) = self.ask::<u64>("\nID del producto a eliminar: ")? else {
            return Ok(());
        };

        match self.inventory.remove(id) {
            Ok(name) => {
                log_event_with_fields(Event::ProductRemoved, &[("id", id.to_string().as_str())]);
                self.console.say(format!("Producto '{}' eliminado", name))
            }
            Err(e) => self.reject(&e),
        }
    }

    fn update_quantity(&mut self) -> io::Result<()> {
        let Some(id) = self.ask::<u64>("\nID del producto: ")? else {
            return Ok(());
        };
        if self.inventory.find_by_id(id).is_none() {
            return self.reject(&InventoryError::NotFound(id));
        }
        let Some(quantity) = self.ask::<i64>("Nueva cantidad: ")? else {
            return Ok(());
        };

        match self.inventory.update_quantity(id, quantity) {
            Ok(()) => {
                log_event_with_fields(
                    Event::ProductUpdated,
                    &[("field", "quantity"), ("id", id.to_string().as_str())],
                );
                self.console.say("Cantidad actualizada")
            }
            Err(e) => self.reject(&e),
        }
    }

    fn update_price(&mut self) -> io::Result<()> {
        let Some(id) = self.ask::<u64>("\nID del producto: ")? else {
            return Ok(());
        };
        if self.inventory.find_by_id(id).is_none() {
            return self.reject(&InventoryError::NotFound(id));
        }
        let Some(price) = self.ask_price("Nuevo precio: ")? else {
            return Ok(());
        };

        match self.inventory.update_price(id, price) {
            Ok(()) => {
                log_event_with_fields(
                    Event::ProductUpdated,
                    &[("field", "price"), ("id", id.to_string().as_str())],
                );
                self.console.say("Precio actualizado")
            }
            Err(e) => self.reject(&e),
        }
    }

    fn search_by_name(&mut self) -> io::Result<()> {
        let Some(needle) = self.console.prompt("\nNombre a buscar: ")? else {
            self.input_closed = true;
            return Ok(());
        };
        let lines = render::search_results(self.inventory.find_by_name(&needle));
        self.say_all(lines)
    }

    fn search_by_id(&mut self) -> io::Result<()> {
        let Some(id) = self.ask::<u64>("\nID a buscar: ")? else {
            return Ok(());
        };
        let lines = render::found(self.inventory.find_by_id(id));
        self.say_all(lines)
    }

    fn save(&mut self) -> io::Result<()> {
        let path = self.config.data_file.clone();
        let message = match persistence::save(&self.inventory, &path) {
            Ok(()) => render::saved(&path.display().to_string()),
            Err(e) => render::save_failed(&e),
        };
        self.console.say(message)
    }

    /// Replaces the in-memory inventory with the file contents.
    fn load(&mut self) -> io::Result<()> {
        let path = self.config.data_file.clone();
        let outcome = persistence::load(&path);
        let message = render::load_outcome(&outcome, &path.display().to_string());
        self.inventory = outcome.inventory;
        self.console.say(message)
    }

    fn exit(&mut self) -> io::Result<()> {
        self.console.say("\n¡Gracias por usar el sistema!")?;
        if self.config.autosave_on_exit {
            self.save()?;
        }
        Ok(())
    }

    /// Prompts for a number. `None` when the answer is unusable; a message
    /// has already been shown, or input is closed.
    fn ask<T: FromStr>(&mut self, label: &str) -> io::Result<Option<T>> {
        match self.console.prompt_parse(label)? {
            Input::Value(value) => Ok(Some(value)),
            Input::Invalid(_) => {
                self.console.say("Entrada inválida")?;
                Ok(None)
            }
            Input::Eof => {
                self.input_closed = true;
                Ok(None)
            }
        }
    }

    /// Like `ask`, but `inf` and `NaN` count as unusable input.
    fn ask_price(&mut self, label: &str) -> io::Result<Option<f64>> {
        match self.ask::<f64>(label)? {
            Some(price) if !price.is_finite() => {
                self.console.say("Entrada inválida")?;
                Ok(None)
            }
            price => Ok(price),
        }
    }

    fn reject(&mut self, error: &InventoryError) -> io::Result<()> {
        log_event_with_fields(Event::OperationRejected, &[("code", error.code())]);
        self.console.say(render::inventory_error(error))
    }

    fn say_all(&mut self, lines: Vec<String>) -> io::Result<()> {
        for line in lines {
            self.console.say(line)?;
        }
        Ok(())
    }
}
