//! The interactive menu loop.

use super::actions::{Action, ActionOutcome};
use super::printer::ContactPrinter;
use super::prompt::{is_end_of_input, is_unreadable_line, Prompt};
use crate::error::PhoneBookResult;
use crate::observability::{MetricsTracker, Timer};
use crate::phone_book::PhoneBook;
use std::io::{BufRead, Write};
use tracing::{error, info};

/// Drives a [`PhoneBook`] from a numbered menu.
///
/// Menu choices are 1-based positions in the action list. An unknown
/// choice or a failed action is logged and reported, and the loop goes on;
/// it ends on [`Action::Exit`] or when the input runs out.
pub struct PhoneBookController<R, W> {
    phone_book: PhoneBook,
    prompt: Prompt<R, W>,
    printer: ContactPrinter,
    actions: Vec<Action>,
    metrics: MetricsTracker,
}

impl<R: BufRead, W: Write> PhoneBookController<R, W> {
    /// Create a controller with the full menu and a default printer.
    pub fn new(phone_book: PhoneBook, input: R, output: W) -> Self {
        let metrics = phone_book.metrics().clone();
        Self {
            phone_book,
            prompt: Prompt::new(input, output),
            printer: ContactPrinter::default(),
            actions: Action::ALL.to_vec(),
            metrics,
        }
    }

    /// Replace the menu.
    pub fn with_actions(mut self, actions: impl IntoIterator<Item = Action>) -> Self {
        self.actions = actions.into_iter().collect();
        self
    }

    pub fn with_printer(mut self, printer: ContactPrinter) -> Self {
        self.printer = printer;
        self
    }

    pub fn phone_book(&self) -> &PhoneBook {
        &self.phone_book
    }

    pub fn metrics(&self) -> &MetricsTracker {
        &self.metrics
    }

    /// Consume the controller, returning the phone book and the output stream.
    pub fn into_parts(self) -> (PhoneBook, W) {
        (self.phone_book, self.prompt.into_output())
    }

    /// Print the numbered menu.
    pub fn show_actions(&mut self) -> PhoneBookResult<()> {
        self.prompt.say("\nActions:")?;
        for (index, action) in self.actions.iter().enumerate() {
            self.prompt.say(format!("{} - {}", index + 1, action))?;
        }
        Ok(())
    }

    fn action_for(&self, choice: &str) -> Option<Action> {
        let index = choice.trim().parse::<usize>().ok()?.checked_sub(1)?;
        self.actions.get(index).copied()
    }

    /// Run the menu loop until the user exits or the input ends.
    ///
    /// # Errors
    ///
    /// Only terminal I/O failures end the loop with an error. Action errors
    /// and unreadable input lines are reported to the user.
    pub fn run(&mut self) -> PhoneBookResult<()> {
        info!(contacts = self.phone_book.len(), "Session started");

        loop {
            self.show_actions()?;
            let choice = match self.prompt.ask("Select an action: ") {
                Ok(choice) => choice,
                Err(e) if is_end_of_input(&e) => break,
                Err(e) if is_unreadable_line(&e) => {
                    error!(error = %e, "Unreadable choice. Please select a valid action.");
                    self.prompt.say("Invalid choice")?;
                    continue;
                }
                Err(e) => return Err(e),
            };

            let Some(action) = self.action_for(&choice) else {
                error!(choice = %choice, "Invalid choice. Please select a valid action.");
                self.prompt
                    .say(format!("Invalid choice '{}'", choice.trim()))?;
                continue;
            };

            let timer = Timer::new(action.name());
            let result = action.execute(&mut self.phone_book, &mut self.prompt, &self.printer);
            timer.finish_with_status(result.is_ok());
            self.metrics.track_action(action.name(), result.is_ok());

            match result {
                Ok(ActionOutcome::Continue) => {}
                Ok(ActionOutcome::Exit) => {
                    info!("Exiting");
                    break;
                }
                Err(e) if is_end_of_input(&e) => break,
                Err(e) => {
                    error!(action = action.name(), error = %e, "Action failed");
                    self.prompt.say(format!("Error: {}", e))?;
                }
            }
        }

        info!(contacts = self.phone_book.len(), "Session ended");
        Ok(())
    }
}
