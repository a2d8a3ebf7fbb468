//! Interactive shell
//!
//! A four-choice text menu (add, remove, view, exit) prompting for further
//! input line by line. Every operation's error is caught here, printed as a
//! human-readable message, and the loop continues; only "exit" or end of
//! input ends the session.
//!
//! The loop is generic over `BufRead`/`Write` so scripted sessions can drive
//! it in tests.

use std::io::{BufRead, Write};

use crate::display::format_expense_report;
use crate::error::{SpendlogError, SpendlogResult};
use crate::models::DateFilter;
use crate::services::ExpenseService;

/// Interactive menu loop over an expense service
pub struct Shell<R, W> {
    service: ExpenseService,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a new shell reading from `input` and writing to `output`
    pub fn new(service: ExpenseService, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    /// Run the menu loop until the user exits or input ends
    pub fn run(&mut self) -> SpendlogResult<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "Expense Tracker")?;
            writeln!(self.output, "1. Add Expense")?;
            writeln!(self.output, "2. Remove Expense")?;
            writeln!(self.output, "3. View Expenses")?;
            writeln!(self.output, "4. Exit")?;
            write!(self.output, "Enter your choice: ")?;
            self.output.flush()?;

            let Some(choice) = self.read_line()? else {
                // End of input behaves like exit
                break;
            };

            let result = match choice.trim() {
                "1" => self.add_expense(),
                "2" => self.remove_expense(),
                "3" => self.view_expenses(),
                "4" => {
                    writeln!(self.output, "Exiting...")?;
                    break;
                }
                _ => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    Ok(())
                }
            };

            if let Err(err) = result {
                writeln!(self.output, "Error: {}", err)?;
            }
        }

        Ok(())
    }

    /// Prompt for the add inputs and record an expense
    fn add_expense(&mut self) -> SpendlogResult<()> {
        let amount = self.prompt("Enter amount: ")?;
        let date = self.prompt("Enter date (YYYY-MM-DD): ")?;
        let description = self.prompt("Enter description: ")?;

        let expense = self.service.add(&amount, &date, &description)?;
        writeln!(
            self.output,
            "Expense added successfully (id {}).",
            expense.id
        )?;
        Ok(())
    }

    /// Prompt for an id and remove the matching expense
    fn remove_expense(&mut self) -> SpendlogResult<()> {
        let id = self.prompt("Enter the expense ID to remove: ")?;

        if self.service.remove(&id)? > 0 {
            writeln!(self.output, "Expense removed successfully.")?;
        } else {
            writeln!(self.output, "No expense found with the given ID.")?;
        }
        Ok(())
    }

    /// Prompt for a filter and print the matching expenses with their total
    fn view_expenses(&mut self) -> SpendlogResult<()> {
        let kind = self.prompt("View by (date/month/year): ")?;

        let filter = match kind.trim().to_lowercase().as_str() {
            "date" => DateFilter::exact(&self.prompt("Enter date (YYYY-MM-DD): ")?)?,
            "month" => DateFilter::month(&self.prompt("Enter month (YYYY-MM): ")?)?,
            "year" => DateFilter::year(&self.prompt("Enter year (YYYY): ")?)?,
            other => {
                return Err(SpendlogError::Validation(format!(
                    "Invalid filter type: '{}'. Use date, month, or year",
                    other
                )))
            }
        };

        let report = self.service.report(&filter)?;
        write!(self.output, "{}", format_expense_report(&report, &filter))?;
        Ok(())
    }

    /// Write a prompt and read one line; end of input is an error here
    /// because it interrupts an operation mid-dialog
    fn prompt(&mut self, label: &str) -> SpendlogResult<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        self.read_line()?
            .ok_or_else(|| SpendlogError::Io("unexpected end of input".into()))
    }

    /// Read one line, returning None at end of input
    fn read_line(&mut self) -> SpendlogResult<Option<String>> {
        let mut line = String::new();
        let bytes = self.input.read_line(&mut line)?;
        if bytes == 0 {
            Ok(None)
        } else {
            Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
        }
    }
}
