//! # Input Parsing
//!
//! Turns one line typed at the prompt into a [`Command`].
//!
//! A line is matched case-insensitively against the keyword table, in order,
//! as a prefix of the trimmed line. Whatever follows the keyword is the
//! argument string. Two-argument commands split it on whitespace and need
//! exactly two tokens. Lines that match no keyword parse to
//! [`Command::Unknown`], which is not an error.

use crate::error::{CbookError, Result};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Change { name: String, phone: String },
    ShowAll,
    Search(String),
    Remove(String),
    Birthday { name: String, date: String },
    DaysToBirthday(String),
    Exit,
    Unknown,
}

impl Command {
    /// Whether running the command can change the directory.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Command::Add { .. }
                | Command::Change { .. }
                | Command::Birthday { .. }
                | Command::Remove(_)
        )
    }
}

#[derive(Debug, Clone, Copy)]
enum Keyword {
    Hello,
    Add,
    Change,
    ShowAll,
    Phone,
    Remove,
    Exit,
    Birthday,
    DaysToBirthday,
}

const KEYWORDS: [(&str, Keyword); 11] = [
    ("hello", Keyword::Hello),
    ("add", Keyword::Add),
    ("change", Keyword::Change),
    ("show all", Keyword::ShowAll),
    ("phone", Keyword::Phone),
    ("remove", Keyword::Remove),
    ("exit", Keyword::Exit),
    ("close", Keyword::Exit),
    ("good bye", Keyword::Exit),
    ("birthday", Keyword::Birthday),
    ("days to birthday", Keyword::DaysToBirthday),
];

impl FromStr for Command {
    type Err = CbookError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let Some((keyword, rest)) = split_keyword(line) else {
            return Ok(Command::Unknown);
        };
        let args = rest.trim();

        let command = match keyword {
            Keyword::Hello => no_args(args, Command::Hello)?,
            Keyword::ShowAll => no_args(args, Command::ShowAll)?,
            Keyword::Exit => no_args(args, Command::Exit)?,
            Keyword::Add => {
                let (name, phone) = two_args(args, "name and number")?;
                Command::Add { name, phone }
            }
            Keyword::Change => {
                let (name, phone) = two_args(args, "name and number")?;
                Command::Change { name, phone }
            }
            Keyword::Birthday => {
                let (name, date) = two_args(args, "name and date")?;
                Command::Birthday { name, date }
            }
            Keyword::Phone => Command::Search(one_arg(args, "name or phone")?),
            Keyword::Remove => Command::Remove(one_arg(args, "name")?),
            Keyword::DaysToBirthday => Command::DaysToBirthday(one_arg(args, "name")?),
        };
        Ok(command)
    }
}

fn split_keyword(line: &str) -> Option<(Keyword, &str)> {
    KEYWORDS.iter().find_map(|(word, keyword)| {
        line.get(..word.len())
            .filter(|prefix| prefix.eq_ignore_ascii_case(word))
            .map(|_| (*keyword, &line[word.len()..]))
    })
}

fn no_args(args: &str, command: Command) -> Result<Command> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(CbookError::WrongCommand)
    }
}

fn one_arg(args: &str, expected: &'static str) -> Result<String> {
    if args.is_empty() {
        return Err(CbookError::MissingArguments(expected));
    }
    Ok(args.to_string())
}

fn two_args(args: &str, expected: &'static str) -> Result<(String, String)> {
    let mut tokens = args.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(first), Some(second), None) => Ok((first.to_string(), second.to_string())),
        _ => Err(CbookError::MissingArguments(expected)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Command> {
        line.parse()
    }

    #[test]
    fn parses_two_argument_commands() {
        assert_eq!(
            parse("add Ann 12345").unwrap(),
            Command::Add {
                name: "Ann".into(),
                phone: "12345".into()
            }
        );
        assert_eq!(
            parse("  CHANGE   Ann    777 ").unwrap(),
            Command::Change {
                name: "Ann".into(),
                phone: "777".into()
            }
        );
        assert_eq!(
            parse("birthday Ann 2000-01-01").unwrap(),
            Command::Birthday {
                name: "Ann".into(),
                date: "2000-01-01".into()
            }
        );
    }

    #[test]
    fn wrong_token_count_is_an_input_error() {
        for line in ["add Ann", "add", "add Ann 1 2", "change Ann"] {
            let err = parse(line).unwrap_err();
            assert_eq!(err.to_string(), "Enter: name and number", "{line}");
        }
        let err = parse("birthday Ann").unwrap_err();
        assert_eq!(err.to_string(), "Enter: name and date");
    }

    #[test]
    fn parses_single_argument_commands() {
        assert_eq!(parse("phone 12345").unwrap(), Command::Search("12345".into()));
        assert_eq!(parse("remove Ann").unwrap(), Command::Remove("Ann".into()));
        assert_eq!(
            parse("days to birthday Ann").unwrap(),
            Command::DaysToBirthday("Ann".into())
        );
        assert!(matches!(
            parse("phone"),
            Err(CbookError::MissingArguments(_))
        ));
    }

    #[test]
    fn exit_family_is_case_insensitive() {
        for line in ["exit", "CLOSE", "Good Bye", "  good bye  "] {
            assert_eq!(parse(line).unwrap(), Command::Exit, "{line}");
        }
        assert_eq!(parse("goodbye").unwrap(), Command::Unknown);
    }

    #[test]
    fn no_argument_commands_reject_arguments() {
        assert_eq!(parse("hello").unwrap(), Command::Hello);
        assert_eq!(parse("show all").unwrap(), Command::ShowAll);
        assert!(matches!(parse("hello there"), Err(CbookError::WrongCommand)));
        assert!(matches!(parse("exit now"), Err(CbookError::WrongCommand)));
    }

    #[test]
    fn only_editing_commands_mutate() {
        let mutating: Vec<bool> = [
            "add Ann 1",
            "change Ann 1",
            "birthday Ann 2000-01-01",
            "remove Ann",
            "hello",
            "show all",
            "phone 1",
            "days to birthday Ann",
            "exit",
            "fly",
        ]
        .iter()
        .map(|line| parse(line).unwrap().is_mutating())
        .collect();
        assert_eq!(
            mutating,
            vec![true, true, true, true, false, false, false, false, false, false]
        );
    }

    #[test]
    fn unmatched_lines_are_unknown() {
        assert_eq!(parse("").unwrap(), Command::Unknown);
        assert_eq!(parse("delete Ann").unwrap(), Command::Unknown);
        assert_eq!(parse("show").unwrap(), Command::Unknown);
    }

    #[test]
    fn non_ascii_input_does_not_panic() {
        assert_eq!(parse("дякую").unwrap(), Command::Unknown);
        assert_eq!(parse("ad€").unwrap(), Command::Unknown);
        assert_eq!(
            parse("add Олена 123").unwrap(),
            Command::Add {
                name: "Олена".into(),
                phone: "123".into()
            }
        );
    }
}
