//! Console front end for the shop
//!
//! Draws the service screen and reads the operator's choice from any
//! `BufRead`, so tests can script input with a `Cursor`.

use anyhow::{bail, Result};
use std::io::{BufRead, Write};

use crate::simulation::{Decision, Ledger, Operator, ServiceView, TurnEvent};

/// Input that refuses the current client
pub const COMMAND_REFUSE: i64 = 0;

/// Operator that talks to a human through text streams
pub struct ConsoleOperator<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleOperator<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output stream, e.g. to inspect what was printed
    pub fn into_output(self) -> W {
        self.output
    }

    fn draw_screen(&mut self, view: &ServiceView) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Money on account: {}", view.money)?;
        writeln!(self.output, "Clients in queue: {}", view.clients_waiting)?;
        writeln!(self.output, "Parts in storage: {}", view.storage_count)?;
        let stock: Vec<String> = view
            .storage_stock
            .iter()
            .map(|(name, count)| format!("{}={}", name, count))
            .collect();
        writeln!(self.output, "  Stock: {}", stock.join(", "))?;
        writeln!(self.output)?;

        writeln!(self.output, "Work order {}:", view.client_number)?;
        for (index, part) in view.parts.iter().enumerate() {
            writeln!(self.output, "{} {}", index + 1, part)?;
        }

        writeln!(self.output)?;
        writeln!(self.output, "Current refusal penalty: {}", view.penalty)?;
        writeln!(
            self.output,
            "Enter a part number to look for it in storage."
        )?;
        writeln!(
            self.output,
            "Enter {} to refuse the repair.",
            COMMAND_REFUSE
        )?;
        Ok(())
    }

    fn write_install(&mut self, slot: usize, part_name: &str, income: i64) -> Result<()> {
        if income > 0 {
            writeln!(
                self.output,
                "Installed {} in slot {}. Earned {}.",
                part_name, slot, income
            )?;
        } else {
            writeln!(
                self.output,
                "Installed {} in slot {}. It was not broken, nothing earned.",
                part_name, slot
            )?;
        }
        Ok(())
    }

    /// Read until the operator types an integer in `[0, max]`
    fn read_choice(&mut self, max: usize) -> Result<usize> {
        loop {
            write!(self.output, "Your choice: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("Operator input closed");
            }

            if let Ok(value) = line.trim().parse::<i64>() {
                if value >= 0 && value as u64 <= max as u64 {
                    return Ok(value as usize);
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> Operator for ConsoleOperator<R, W> {
    fn choose(&mut self, view: &ServiceView) -> Result<Decision> {
        self.draw_screen(view)?;
        let choice = self.read_choice(view.parts.len())?;
        if choice as i64 == COMMAND_REFUSE {
            Ok(Decision::Refuse)
        } else {
            Ok(Decision::Repair(choice))
        }
    }

    fn report(&mut self, event: &TurnEvent) -> Result<()> {
        match event {
            TurnEvent::Installed {
                slot,
                part_name,
                income,
            } => {
                self.write_install(*slot, part_name, *income)?;
            }
            TurnEvent::PartMissing { part_name, .. } => {
                writeln!(
                    self.output,
                    "No {} in storage. Try repairing another part to lower the penalty.",
                    part_name
                )?;
            }
            TurnEvent::Refused { penalty } => {
                writeln!(self.output, "Refused. Penalty paid: {}", penalty)?;
            }
            TurnEvent::Resolved {
                slot,
                part_name,
                income,
            } => {
                self.write_install(*slot, part_name, *income)?;
                writeln!(self.output, "Car fully repaired.")?;
            }
        }
        Ok(())
    }

    fn finish(&mut self, ledger: &Ledger) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "The workday is over.")?;
        writeln!(self.output, "{}", ledger.summary())?;
        self.output.flush()?;
        Ok(())
    }
}
