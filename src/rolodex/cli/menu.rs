//! The interactive menu loop.
//!
//! `Session` is generic over its input and output so the whole loop can be driven from
//! tests with byte buffers. End of input behaves like choosing quit.

use super::print::{print_customer, print_customers, print_error, print_messages};
use colored::*;
use rolodex::api::{CmdResult, RolodexApi};
use rolodex::store::DataStore;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Add,
    List,
    Search,
    Delete,
    Save,
    Quit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 6] = [
        MenuAction::Add,
        MenuAction::List,
        MenuAction::Search,
        MenuAction::Delete,
        MenuAction::Save,
        MenuAction::Quit,
    ];

    pub fn number(self) -> usize {
        match self {
            MenuAction::Add => 1,
            MenuAction::List => 2,
            MenuAction::Search => 3,
            MenuAction::Delete => 4,
            MenuAction::Save => 5,
            MenuAction::Quit => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::Add => "Add customer",
            MenuAction::List => "List customers",
            MenuAction::Search => "Search customers",
            MenuAction::Delete => "Delete customer",
            MenuAction::Save => "Save",
            MenuAction::Quit => "Quit",
        }
    }
}

impl FromStr for MenuAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: usize = s.trim().parse().map_err(|_| s.trim().to_string())?;
        MenuAction::ALL
            .into_iter()
            .find(|a| a.number() == n)
            .ok_or_else(|| s.trim().to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// "y", "yes", "j" and "ja" in any case confirm; anything else declines.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "j" | "ja"
    )
}

pub struct Session<S: DataStore, R: BufRead, W: Write> {
    api: RolodexApi<S>,
    input: R,
    out: W,
}

impl<S: DataStore, R: BufRead, W: Write> Session<S, R, W> {
    pub fn new(api: RolodexApi<S>, input: R, out: W) -> Self {
        Self { api, input, out }
    }

    pub fn report(&mut self, result: &CmdResult) -> io::Result<()> {
        print_customers(&mut self.out, &result.listed_customers)?;
        print_messages(&mut self.out, &result.messages)
    }

    /// Runs until the user quits or input ends. Returns the API so callers can inspect
    /// the final state.
    pub fn run(mut self) -> io::Result<RolodexApi<S>> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Choose an action [1-6]: ")? else {
                if self.quit()? == Flow::Quit {
                    break;
                }
                continue;
            };

            let flow = match choice.parse::<MenuAction>() {
                Ok(action) => {
                    debug!(?action, "menu selection");
                    self.dispatch(action)?
                }
                Err(bad) => {
                    writeln!(
                        self.out,
                        "{}",
                        format!("Invalid selection '{}'. Please choose 1-6.", bad).yellow()
                    )?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                break;
            }
        }
        Ok(self.api)
    }

    fn dispatch(&mut self, action: MenuAction) -> io::Result<Flow> {
        match action {
            MenuAction::Add => self.handle_add(),
            MenuAction::List => self.handle_list(),
            MenuAction::Search => self.handle_search(),
            MenuAction::Delete => self.handle_delete(),
            MenuAction::Save => self.handle_save(),
            MenuAction::Quit => self.quit(),
        }
    }

    fn handle_add(&mut self) -> io::Result<Flow> {
        let Some(name) = self.prompt("Name: ")? else {
            return self.quit();
        };
        let Some(email) = self.prompt("Email: ")? else {
            return self.quit();
        };
        let Some(phone) = self.prompt("Phone: ")? else {
            return self.quit();
        };

        let result = self.api.add_customer(&name, &email, &phone);
        self.show(result)?;
        Ok(Flow::Continue)
    }

    fn handle_list(&mut self) -> io::Result<Flow> {
        let result = self.api.list_customers();
        self.show(result)?;
        Ok(Flow::Continue)
    }

    fn handle_search(&mut self) -> io::Result<Flow> {
        let Some(term) = self.prompt("Search term: ")? else {
            return self.quit();
        };
        let result = self.api.search_customers(&term);
        self.show(result)?;
        Ok(Flow::Continue)
    }

    fn handle_delete(&mut self) -> io::Result<Flow> {
        let Some(name) = self.prompt("Name to delete: ")? else {
            return self.quit();
        };

        let confirmed = match self.api.get_customer(&name).cloned() {
            // Unknown names go straight to the command, which reports NotFound.
            None => false,
            Some(customer) => {
                print_customer(&mut self.out, &customer)?;
                match self.prompt(&format!("Really delete '{}'? [y/N]: ", name))? {
                    Some(answer) => is_affirmative(&answer),
                    None => {
                        let result = self.api.delete_customer(&name, false);
                        self.show(result)?;
                        return self.quit();
                    }
                }
            }
        };

        let result = self.api.delete_customer(&name, confirmed);
        self.show(result)?;
        Ok(Flow::Continue)
    }

    fn handle_save(&mut self) -> io::Result<Flow> {
        let result = self.api.save();
        self.show(result)?;
        Ok(Flow::Continue)
    }

    /// Saves and ends the session. If the save fails the user may stay in the menu.
    fn quit(&mut self) -> io::Result<Flow> {
        let dirty = self.api.has_unsaved_changes();
        match self.api.save() {
            Ok(result) => {
                self.report(&result)?;
                info!(had_changes = dirty, "session ended");
                writeln!(self.out, "Goodbye.")?;
                Ok(Flow::Quit)
            }
            Err(e) => {
                print_error(&mut self.out, &e)?;
                let answer = self.prompt("Quit anyway? Unsaved changes will be lost [y/N]: ")?;
                match answer {
                    Some(a) if !is_affirmative(&a) => Ok(Flow::Continue),
                    _ => {
                        writeln!(self.out, "Goodbye.")?;
                        Ok(Flow::Quit)
                    }
                }
            }
        }
    }

    fn show(&mut self, result: rolodex::error::Result<CmdResult>) -> io::Result<()> {
        match result {
            Ok(result) => self.report(&result),
            Err(e) => print_error(&mut self.out, &e),
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", "--- Customer Management ---".bold())?;
        for action in MenuAction::ALL {
            writeln!(self.out, "  {}. {}", action.number(), action.label())?;
        }
        Ok(())
    }

    /// Writes `label` and reads one line. `None` means end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
