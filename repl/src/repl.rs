//! Core REPL state and execution.

use std::io::{self, BufRead, Write};

use evman_ledger::{EventLedger, LedgerError};
use tracing::{debug, warn};

use crate::command::{parse_command, Command};
use crate::format::{format_categories, format_event, usage_text};

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// REPL state. The ledger is the only thing it owns.
pub struct Repl {
    ledger: EventLedger,
}

impl Repl {
    /// Create a new REPL over a loaded ledger.
    pub fn new(ledger: EventLedger) -> Self {
        Self { ledger }
    }

    /// Get the ledger.
    pub fn ledger(&self) -> &EventLedger {
        &self.ledger
    }

    /// Run the loop until `exit`/`quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> io::Result<()> {
        loop {
            let Some(line) = prompt(input, output, "Command> ")? else {
                debug!("end of input at command prompt");
                writeln!(output)?;
                return Ok(());
            };

            if self.execute(&line, input, output)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Execute one command line, reading follow-up lines from `input` when
    /// the command needs them.
    pub fn execute<R: BufRead, W: Write>(
        &mut self,
        line: &str,
        input: &mut R,
        output: &mut W,
    ) -> io::Result<Flow> {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(e) => {
                warn!(line, error = %e, "rejected command");
                writeln!(output, "{}", e)?;
                return Ok(Flow::Continue);
            }
        };

        debug!(?command, "dispatching command");

        match command {
            Command::Head(n) => writeln!(output, "{}", self.ledger.head(n))?,
            Command::Tail(n) => writeln!(output, "{}", self.ledger.tail(n))?,
            Command::Insert => self.insert(input, output)?,
            Command::Next { from, category } => {
                match self.ledger.next(&from, category.as_deref()) {
                    Some(row) => writeln!(output, "{}", format_event(row))?,
                    None => writeln!(output, "No event found.")?,
                }
            }
            Command::Categories => {
                writeln!(output, "{}", format_categories(self.ledger.registry()))?
            }
            Command::Exit => return Ok(Flow::Exit),
            Command::Usage => writeln!(output, "{}", usage_text())?,
        }

        Ok(Flow::Continue)
    }

    /// The interactive insert flow: four field prompts, an echo, a
    /// confirmation line, then the insert itself.
    ///
    /// The confirmation answer is read but not inspected; every answer,
    /// including end of input, proceeds to the insert.
    fn insert<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> io::Result<()> {
        let Some(fields) = read_fields(input, output)? else {
            writeln!(output, "Couldn't read input correctly.")?;
            return Ok(());
        };
        let [category, title, description, date] = fields;

        writeln!(
            output,
            "Category: {}\nTitle: {}\nDescription: {}\nDate: {}",
            category, title, description, date
        )?;
        let _confirm = prompt(input, output, "Confirm> ")?;

        write!(output, "Inserting new event... ")?;
        match self.ledger.insert(&category, &title, &description, &date) {
            Ok(()) => writeln!(output, "OK")?,
            Err(LedgerError::UnknownCategory(_)) => writeln!(output, "Fail: Invalid category.")?,
            Err(e) => writeln!(output, "Fail: {}", e)?,
        }
        Ok(())
    }
}

/// Prompt for the four insert fields. `None` if input ends first.
fn read_fields<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<[String; 4]>> {
    let mut fields: [String; 4] = Default::default();
    for (field, label) in fields
        .iter_mut()
        .zip(["Category> ", "Title> ", "Description> ", "Date> "])
    {
        match prompt(input, output, label)? {
            Some(line) => *field = line,
            None => return Ok(None),
        }
    }
    Ok(Some(fields))
}

/// Print `label`, then read one line without its line terminator.
/// `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", label)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;

    use evman_registry::Registry;
    use tempfile::TempDir;

    fn repl_with(contents: &str) -> (TempDir, Repl) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.csv");
        fs::write(&path, contents).unwrap();
        let ledger = EventLedger::load(&path, Registry::builtin().unwrap()).unwrap();
        (dir, Repl::new(ledger))
    }

    fn run_script(repl: &mut Repl, script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        repl.run(&mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn prompt_strips_line_terminators() {
        let mut input = Cursor::new(b"one\r\ntwo\n".to_vec());
        let mut output = Vec::new();

        assert_eq!(
            prompt(&mut input, &mut output, "> ").unwrap(),
            Some("one".to_string())
        );
        assert_eq!(
            prompt(&mut input, &mut output, "> ").unwrap(),
            Some("two".to_string())
        );
        assert_eq!(prompt(&mut input, &mut output, "> ").unwrap(), None);
        assert_eq!(output, b"> > > ");
    }

    #[test]
    fn prompt_keeps_inner_whitespace() {
        let mut input = Cursor::new(b"  Grand Prix  \n".to_vec());
        let mut output = Vec::new();

        let line = prompt(&mut input, &mut output, "> ").unwrap();

        assert_eq!(line, Some("  Grand Prix  ".to_string()));
    }

    #[test]
    fn exit_stops_before_remaining_input() {
        let (_dir, mut repl) = repl_with("");

        let out = run_script(&mut repl, "exit\nhead 1\n");

        assert_eq!(out, "Command> ");
    }

    #[test]
    fn end_of_input_stops_loop() {
        let (_dir, mut repl) = repl_with("");

        let out = run_script(&mut repl, "");

        assert_eq!(out, "Command> \n");
    }

    #[test]
    fn bad_arguments_continue_loop() {
        let (_dir, mut repl) = repl_with("");

        let out = run_script(&mut repl, "head\nhead x\nquit\n");

        assert!(out.contains("Wrong syntax.\n"));
        assert!(out.contains("Wrong lines format.\n"));
        assert_eq!(out.matches("Command> ").count(), 3);
    }

    #[test]
    fn insert_with_confirmation_of_any_text() {
        let (_dir, mut repl) = repl_with("");

        let out = run_script(&mut repl, "new\n[NASA]\nArtemis\nLaunch\n2025-01-01\nno\nquit\n");

        assert!(out.contains("Inserting new event... OK\n"));
        assert_eq!(repl.ledger().len(), 1);
    }

    #[test]
    fn insert_proceeds_when_input_ends_at_confirmation() {
        let (_dir, mut repl) = repl_with("");

        let out = run_script(&mut repl, "insert\n[NASA]\nArtemis\nLaunch\n2025-01-01\n");

        assert!(out.contains("Date: 2025-01-01\nConfirm> Inserting new event... OK\n"));
        assert_eq!(repl.ledger().len(), 1);
        assert_eq!(repl.ledger().rows()[0].title, "Artemis");
    }

    #[test]
    fn insert_interrupted_by_end_of_input() {
        let (_dir, mut repl) = repl_with("");

        let out = run_script(&mut repl, "insert\n[NASA]\nArtemis\n");

        assert!(out.contains("Couldn't read input correctly.\n"));
        assert!(!out.contains("Confirm> "));
        assert!(repl.ledger().is_empty());
    }
}
