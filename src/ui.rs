// UI layer: the interactive menu loop.
//
// The shell cycles through three states: waiting at the menu, processing
// one choice, and terminated. Every `CatalogError` raised while processing
// is reported to the user and logged here; none of them ends the loop.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, info, warn};

use crate::api::Fetcher;
use crate::catalog::Catalog;
use crate::error::{CatalogError, CatalogResult};
use crate::render::{render_catalog, render_product};

/// Source of user input lines.
pub trait Prompt {
    /// Show `prompt` and read one trimmed line. `None` means input is closed.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Terminal prompt backed by `dialoguer`.
pub struct TermPrompt;

impl Prompt for TermPrompt {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        match Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
        {
            Ok(line) => Ok(Some(line.trim().to_string())),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// One menu entry as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    ListAll,
    FetchById,
    Exit,
    Invalid(String),
}

impl MenuChoice {
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => MenuChoice::ListAll,
            "2" => MenuChoice::FetchById,
            "3" => MenuChoice::Exit,
            other => MenuChoice::Invalid(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellState {
    MenuWait,
    Processing(MenuChoice),
    Terminated,
}

pub struct Shell<F, P, W> {
    catalog: Catalog<F>,
    prompt: P,
    out: W,
    spinner: bool,
}

impl<F: Fetcher, P: Prompt, W: Write> Shell<F, P, W> {
    pub fn new(catalog: Catalog<F>, prompt: P, out: W) -> Self {
        Shell {
            catalog,
            prompt,
            out,
            spinner: true,
        }
    }

    /// Disable the progress spinner (for non-interactive output).
    pub fn without_spinner(mut self) -> Self {
        self.spinner = false;
        self
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Run until the user exits or input is closed.
    pub fn run(&mut self) -> Result<()> {
        let mut state = ShellState::MenuWait;
        loop {
            state = match state {
                ShellState::MenuWait => self.wait_for_choice()?,
                ShellState::Processing(choice) => self.process(choice)?,
                ShellState::Terminated => return Ok(()),
            };
        }
    }

    fn wait_for_choice(&mut self) -> Result<ShellState> {
        self.print_menu()?;
        Ok(match self.prompt.read_line("Select an option (1-3)")? {
            Some(line) => ShellState::Processing(MenuChoice::parse(&line)),
            None => ShellState::Processing(MenuChoice::Exit),
        })
    }

    /// Execute one choice. Catalog errors are reported and swallowed; only
    /// console I/O failures escape.
    fn process(&mut self, choice: MenuChoice) -> Result<ShellState> {
        let outcome = match choice {
            MenuChoice::ListAll => {
                info!("user chose: list all products");
                self.list_all()
            }
            MenuChoice::FetchById => {
                info!("user chose: look up by id");
                self.fetch_by_id()
            }
            MenuChoice::Exit => {
                writeln!(self.out, "\nGoodbye!\n")?;
                info!("user closed the application");
                return Ok(ShellState::Terminated);
            }
            MenuChoice::Invalid(input) => {
                writeln!(self.out, "Invalid option. Choose 1, 2 or 3.\n")?;
                warn!(input = %input, "invalid menu option");
                Ok(Ok(()))
            }
        }?;

        if let Err(e) = outcome {
            self.report(&e)?;
        }
        Ok(ShellState::MenuWait)
    }

    fn list_all(&mut self) -> Result<CatalogResult<()>> {
        let records = match self.with_spinner("Fetching products...", |c| c.fetch_all()) {
            Ok(records) => records,
            Err(e) => return Ok(Err(e)),
        };
        write!(self.out, "\n{}\n", render_catalog(&records))?;

        let id = self
            .prompt
            .read_line("Enter a product ID to see its details (or press Enter to go back)")?
            .unwrap_or_default();
        if id.is_empty() {
            return Ok(Ok(()));
        }
        self.show_product(&id)
    }

    fn fetch_by_id(&mut self) -> Result<CatalogResult<()>> {
        let id = self
            .prompt
            .read_line("Enter the ID of the product to show")?
            .unwrap_or_default();
        if id.is_empty() {
            return Ok(Err(CatalogError::InvalidArgument("ID cannot be empty".into())));
        }
        self.show_product(&id)
    }

    fn show_product(&mut self, id: &str) -> Result<CatalogResult<()>> {
        match self.with_spinner("Fetching product...", |c| c.fetch_by_id(id)) {
            Ok(product) => {
                write!(self.out, "\n{}\n", render_product(&product))?;
                info!(id, "product displayed");
                Ok(Ok(()))
            }
            Err(e) => Ok(Err(e)),
        }
    }

    fn report(&mut self, e: &CatalogError) -> io::Result<()> {
        writeln!(self.out, "Error: {}\n", e.user_message())?;
        if e.is_validation() {
            warn!(error = %e, "validation error");
        } else {
            error!(error = %e, "request failed");
        }
        Ok(())
    }

    fn print_menu(&mut self) -> io::Result<()> {
        let rule = "=".repeat(40);
        writeln!(self.out, "\n{rule}")?;
        writeln!(self.out, "FAKE STORE - MAIN MENU")?;
        writeln!(self.out, "{rule}")?;
        writeln!(self.out, "1. List all products")?;
        writeln!(self.out, "2. Look up a product by ID")?;
        writeln!(self.out, "3. Exit")?;
        writeln!(self.out, "{rule}")?;
        self.out.flush()
    }

    fn with_spinner<T>(&self, msg: &'static str, op: impl FnOnce(&Catalog<F>) -> T) -> T {
        if !self.spinner {
            return op(&self.catalog);
        }
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(msg);
        spinner.enable_steady_tick(Duration::from_millis(100));
        let result = op(&self.catalog);
        spinner.finish_and_clear();
        result
    }
}
