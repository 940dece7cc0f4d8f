//! Interactive menu shell
//!
//! A numbered menu loop over any line reader and writer. Choosing exit, or
//! reaching the end of input, saves once more and stops.

use std::io::{self, BufRead, Write};

use crate::display::{format_category_totals, format_expense_list, format_month_list};
use crate::models::numeric::{parse_leading_float, parse_leading_int};
use crate::models::ExpenseId;
use crate::services::{ExpenseInput, ExpenseManager};

const MENU: &str = "\n=== ExpenseTracker ===\n\
1. List all expenses\n\
2. Add expense\n\
3. Remove expense\n\
4. Edit expense\n\
5. List by month (YYYY-MM)\n\
6. Report: totals per category for month\n\
7. Save\n\
8. Exit\n\
Choose: ";

/// Whether the loop should keep going after a menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopControl {
    Continue,
    Exit,
}

/// Interactive session over a manager
pub struct Shell<'a, R, W> {
    manager: &'a mut ExpenseManager,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    /// Create a shell reading choices from `input` and writing to `output`
    pub fn new(manager: &'a mut ExpenseManager, input: R, output: W) -> Self {
        Self {
            manager,
            input,
            output,
        }
    }

    /// Run the menu loop until exit or end of input
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.output.write_all(MENU.as_bytes())?;
            self.output.flush()?;

            let Some(choice) = self.read_line()? else {
                writeln!(self.output)?;
                self.exit()?;
                return Ok(());
            };

            if self.dispatch(&choice)? == LoopControl::Exit {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, choice: &str) -> io::Result<LoopControl> {
        if choice.is_empty() {
            writeln!(self.output, "Please choose an option.")?;
            return Ok(LoopControl::Continue);
        }

        let Some(option) = parse_leading_int(choice) else {
            writeln!(self.output, "Invalid selection.")?;
            return Ok(LoopControl::Continue);
        };

        match option {
            1 => {
                let all = self.manager.list_all();
                write!(self.output, "{}", format_expense_list(&all))?;
            }
            2 => self.add()?,
            3 => self.remove()?,
            4 => self.edit()?,
            5 => {
                let year_month = self.prompt("Year-month (YYYY-MM): ")?;
                let expenses = self.manager.find_by_month(&year_month);
                write!(self.output, "{}", format_month_list(&year_month, &expenses))?;
            }
            6 => {
                let year_month = self.prompt("Year-month (YYYY-MM): ")?;
                let totals = self.manager.total_per_category(&year_month);
                let total = self.manager.total_for_month(&year_month);
                write!(
                    self.output,
                    "{}",
                    format_category_totals(&year_month, &totals, total)
                )?;
            }
            7 => {
                if self.manager.persist() {
                    writeln!(self.output, "Saved.")?;
                } else {
                    writeln!(self.output, "Failed to save.")?;
                }
            }
            8 => {
                self.exit()?;
                return Ok(LoopControl::Exit);
            }
            _ => writeln!(self.output, "Unknown option.")?,
        }

        Ok(LoopControl::Continue)
    }

    fn add(&mut self) -> io::Result<()> {
        let date = self.prompt("Date (YYYY-MM-DD): ")?;
        let category = self.prompt("Category: ")?;
        let Some(amount) = self.prompt_amount("Amount: ")? else {
            return writeln!(self.output, "Invalid amount.");
        };
        let note = self.prompt("Note (optional): ")?;

        let expense = self
            .manager
            .add(ExpenseInput::new(date, category, amount, note));
        writeln!(self.output, "Added expense id={}", expense.id)
    }

    fn remove(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt_id("ID to remove: ")? else {
            return writeln!(self.output, "Invalid id.");
        };

        if self.manager.remove(id) {
            writeln!(self.output, "Removed.")
        } else {
            writeln!(self.output, "Not found.")
        }
    }

    fn edit(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt_id("ID to edit: ")? else {
            return writeln!(self.output, "Invalid id.");
        };
        let date = self.prompt("New Date (YYYY-MM-DD): ")?;
        let category = self.prompt("New Category: ")?;
        let Some(amount) = self.prompt_amount("New Amount: ")? else {
            return writeln!(self.output, "Invalid amount.");
        };
        let note = self.prompt("New Note: ")?;

        if self
            .manager
            .edit(id, ExpenseInput::new(date, category, amount, note))
        {
            writeln!(self.output, "Edited.")
        } else {
            writeln!(self.output, "Not found.")
        }
    }

    fn exit(&mut self) -> io::Result<()> {
        if !self.manager.persist() {
            writeln!(self.output, "Failed to save.")?;
        }
        writeln!(self.output, "Goodbye.")
    }

    /// Print a prompt and read the answer; end of input reads as empty
    fn prompt(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        Ok(self.read_line()?.unwrap_or_default())
    }

    fn prompt_amount(&mut self, prompt: &str) -> io::Result<Option<f64>> {
        Ok(parse_leading_float(&self.prompt(prompt)?))
    }

    fn prompt_id(&mut self, prompt: &str) -> io::Result<Option<ExpenseId>> {
        Ok(parse_leading_int(&self.prompt(prompt)?).map(ExpenseId::new))
    }

    /// Read one line without its terminator; `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}
