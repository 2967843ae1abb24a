//! Command-line parsing for the interactive prompt.

use thiserror::Error;

/// A command typed at the `Command>` prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `head <n>`
    Head(i64),
    /// `tail <n>`
    Tail(i64),
    /// `insert` or `new`
    Insert,
    /// `next <date> [category]`
    Next {
        from: String,
        category: Option<String>,
    },
    /// `categories`
    Categories,
    /// `exit` or `quit`
    Exit,
    /// Anything else, including `help` and blank lines.
    Usage,
}

/// Errors for a recognised command with bad arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Wrong syntax.")]
    WrongSyntax,

    #[error("Wrong lines format.")]
    WrongLinesFormat,
}

/// Parse one line of operator input. Command names are case-sensitive.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, args)) = tokens.split_first() else {
        return Ok(Command::Usage);
    };

    match name {
        "head" => Ok(Command::Head(parse_lines(args)?)),
        "tail" => Ok(Command::Tail(parse_lines(args)?)),
        "insert" | "new" => Ok(Command::Insert),
        "next" => match args {
            [from] => Ok(Command::Next {
                from: from.to_string(),
                category: None,
            }),
            [from, category] => Ok(Command::Next {
                from: from.to_string(),
                category: Some(category.to_string()),
            }),
            _ => Err(CommandError::WrongSyntax),
        },
        "categories" => Ok(Command::Categories),
        "exit" | "quit" => Ok(Command::Exit),
        _ => Ok(Command::Usage),
    }
}

/// The single integer argument of `head`/`tail`.
fn parse_lines(args: &[&str]) -> Result<i64, CommandError> {
    match args {
        [n] => n.parse().map_err(|_| CommandError::WrongLinesFormat),
        _ => Err(CommandError::WrongSyntax),
    }
}
