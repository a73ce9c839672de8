// File: src/model/parser.rs
use crate::error::{EchoError, EchoResult};

const BY: &str = " /by ";
const FROM: &str = " /from ";
const TO: &str = " /to ";
const REPEAT: &str = " /repeat ";

/// A fully validated user command. Task numbers are still 1-based here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Todo {
        description: String,
    },
    Deadline {
        description: String,
        due: String,
    },
    Event(EventParts),
    List,
    Find {
        keyword: String,
    },
    Mark(usize),
    Unmark(usize),
    Delete(usize),
    Clear,
    Bye,
    /// Blank input.
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventParts {
    pub description: String,
    pub from: String,
    pub to: String,
    /// Whatever followed `/repeat`, unvalidated.
    pub repeat: Option<String>,
}

/// First whitespace-delimited token, or "" for blank input.
pub fn command_word(input: &str) -> &str {
    input.split_whitespace().next().unwrap_or("")
}

/// Everything after the command word, trimmed.
pub fn argument_text<'a>(input: &'a str, word: &str) -> &'a str {
    input
        .trim_start()
        .strip_prefix(word)
        .unwrap_or("")
        .trim()
}

// Delimiters are matched with their surrounding spaces. Padding the argument
// text lets a delimiter at either end still match, so "/by Sunday" reads as
// an empty description rather than a missing "/by".
fn padded(args: &str) -> String {
    format!(" {} ", args)
}

/// `<description> /by <due>` -> (description, due).
pub fn parse_deadline(args: &str) -> EchoResult<(String, String)> {
    let padded = padded(args);
    let Some((description, due)) = padded.split_once(BY) else {
        return Err(EchoError::user(
            "Deadlines need a date! Use: deadline <task> /by <date>",
        ));
    };
    let (description, due) = (description.trim(), due.trim());
    if description.is_empty() {
        return Err(EchoError::user(
            "The deadline is missing a description. Use: deadline <task> /by <date>",
        ));
    }
    if due.is_empty() {
        return Err(EchoError::user(
            "The deadline is missing a date after /by. Use: deadline <task> /by <date>",
        ));
    }
    Ok((description.to_string(), due.to_string()))
}

/// Splits a trailing `/repeat <value>` off event arguments.
/// The value is passed through as typed.
pub fn split_repeat(args: &str) -> EchoResult<(String, Option<String>)> {
    let padded = padded(args);
    let Some((rest, value)) = padded.rsplit_once(REPEAT) else {
        return Ok((args.to_string(), None));
    };
    let value = value.trim();
    if value.is_empty() {
        return Err(EchoError::user(
            "Please say how often the event repeats, e.g. /repeat weekly",
        ));
    }
    Ok((rest.trim().to_string(), Some(value.to_string())))
}

/// `<description> /from <start> /to <end> [/repeat <value>]`.
pub fn parse_event(args: &str) -> EchoResult<EventParts> {
    const USAGE: &str = "Use: event <task> /from <time> /to <time>";

    let (args, repeat) = split_repeat(args)?;
    let padded = padded(&args);

    // Checked separately so the message names what is actually missing
    if !padded.contains(FROM) {
        return Err(EchoError::user(format!(
            "The event is missing its start time (/from). {}",
            USAGE
        )));
    }
    if !padded.contains(TO) {
        return Err(EchoError::user(format!(
            "The event is missing its end time (/to). {}",
            USAGE
        )));
    }

    let parts = split_on_any(&padded, &[FROM, TO]);
    let [(_, description), (FROM, from), (TO, to)] = parts.as_slice() else {
        return Err(EchoError::user(format!(
            "Events take exactly one /from followed by one /to. {}",
            USAGE
        )));
    };

    let (description, from, to) = (description.trim(), from.trim(), to.trim());
    if description.is_empty() || from.is_empty() || to.is_empty() {
        return Err(EchoError::user(
            "Please provide event description, start time, and end time.",
        ));
    }

    Ok(EventParts {
        description: description.to_string(),
        from: from.to_string(),
        to: to.to_string(),
        repeat,
    })
}

/// Splits `s` at every occurrence of any delimiter, scanning left to right.
/// Each piece is paired with the delimiter that preceded it ("" for the first).
fn split_on_any<'a>(s: &'a str, delimiters: &[&'static str]) -> Vec<(&'static str, &'a str)> {
    let mut pieces = Vec::new();
    let mut preceding = "";
    let mut rest = s;
    loop {
        let next = delimiters
            .iter()
            .filter_map(|d| rest.find(d).map(|pos| (pos, *d)))
            .min_by_key(|(pos, _)| *pos);
        match next {
            Some((pos, delim)) => {
                pieces.push((preceding, &rest[..pos]));
                preceding = delim;
                rest = &rest[pos + delim.len()..];
            }
            None => {
                pieces.push((preceding, rest));
                return pieces;
            }
        }
    }
}

/// Reads the task number from `mark 2` style input. 1-based.
pub fn parse_task_number(input: &str) -> EchoResult<usize> {
    let Some(token) = input.split_whitespace().nth(1) else {
        return Err(EchoError::user("Please provide a task number."));
    };
    let number: i64 = token
        .parse()
        .map_err(|_| EchoError::user(format!("'{}' is not a valid number.", token)))?;
    if number <= 0 {
        return Err(EchoError::user("Task number must be a positive number."));
    }
    usize::try_from(number)
        .map_err(|_| EchoError::user(format!("'{}' is not a valid number.", token)))
}

fn require_task_number(input: &str, word: &str, missing: &str) -> EchoResult<usize> {
    if argument_text(input, word).is_empty() {
        return Err(EchoError::user(missing));
    }
    parse_task_number(input)
}

impl Command {
    pub fn parse(input: &str) -> EchoResult<Command> {
        let word = command_word(input);
        let args = argument_text(input, word);

        match word {
            "" => Ok(Command::Empty),
            "bye" => Ok(Command::Bye),
            "list" => Ok(Command::List),
            "clear" => Ok(Command::Clear),
            "todo" => {
                if args.is_empty() {
                    return Err(EchoError::user(
                        "Hmm, you forgot to tell me what the todo is! Try: todo <description>",
                    ));
                }
                Ok(Command::Todo {
                    description: args.to_string(),
                })
            }
            "deadline" => {
                let (description, due) = parse_deadline(args)?;
                Ok(Command::Deadline { description, due })
            }
            "event" => Ok(Command::Event(parse_event(args)?)),
            "find" => {
                if args.is_empty() {
                    return Err(EchoError::user(
                        "What should I look for? Use: find <keyword>",
                    ));
                }
                Ok(Command::Find {
                    keyword: args.to_string(),
                })
            }
            "mark" => Ok(Command::Mark(require_task_number(
                input,
                word,
                "Which task should I mark? Use: mark <task number>",
            )?)),
            "unmark" => Ok(Command::Unmark(require_task_number(
                input,
                word,
                "Which task should I unmark? Use: unmark <task number>",
            )?)),
            "delete" => Ok(Command::Delete(require_task_number(
                input,
                word,
                "Please specify which task to delete. Use: delete <task number>",
            )?)),
            _ => Err(EchoError::user(format!(
                "I don't understand '{}'. Try: todo, deadline, event, list, find, mark, unmark, delete, or clear.",
                input.trim()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_msg(r: EchoResult<impl std::fmt::Debug>) -> String {
        match r {
            Err(EchoError::UserInput(msg)) => msg,
            other => panic!("expected user input error, got {:?}", other),
        }
    }

    #[test]
    fn test_command_word() {
        assert_eq!(command_word("todo"), "todo");
        assert_eq!(command_word("todo buy milk"), "todo");
        assert_eq!(command_word("event     meeting /from Mon /to Tue"), "event");
        assert_eq!(command_word("   "), "");
    }

    #[test]
    fn test_argument_text() {
        assert_eq!(argument_text("todo buy milk", "todo"), "buy milk");
        assert_eq!(argument_text("todo    buy milk  ", "todo"), "buy milk");
        assert_eq!(argument_text("todo", "todo"), "");
        assert_eq!(argument_text("  todo read  ", "todo"), "read");
    }

    #[test]
    fn test_parse_deadline() {
        assert_eq!(
            parse_deadline("homework /by Sunday").unwrap(),
            ("homework".to_string(), "Sunday".to_string())
        );
        // Only the first /by splits
        assert_eq!(
            parse_deadline("a /by b /by c").unwrap(),
            ("a".to_string(), "b /by c".to_string())
        );
    }

    #[test]
    fn test_parse_deadline_errors() {
        assert!(user_msg(parse_deadline("homework")).contains("/by"));
        assert!(user_msg(parse_deadline("/by Sunday")).contains("description"));
        assert!(user_msg(parse_deadline("homework /by")).contains("date"));
        assert!(user_msg(parse_deadline("homework /by   ")).contains("date"));
    }

    #[test]
    fn test_parse_event() {
        let parts = parse_event("meeting /from Mon 2pm /to 4pm").unwrap();
        assert_eq!(
            parts,
            EventParts {
                description: "meeting".to_string(),
                from: "Mon 2pm".to_string(),
                to: "4pm".to_string(),
                repeat: None,
            }
        );
    }

    #[test]
    fn test_parse_event_names_missing_delimiter() {
        let msg = user_msg(parse_event("meeting /to 4pm"));
        assert!(msg.contains("/from"), "{}", msg);
        assert!(!msg.contains("(/to)"), "{}", msg);

        let msg = user_msg(parse_event("meeting /from Mon 2pm"));
        assert!(msg.contains("/to"), "{}", msg);
        assert!(!msg.contains("(/from)"), "{}", msg);
    }

    #[test]
    fn test_parse_event_order_and_count() {
        assert!(user_msg(parse_event("meeting /to 4pm /from 2pm")).contains("exactly one"));
        assert!(user_msg(parse_event("meeting /from 2pm /to 4pm /to 5pm")).contains("exactly one"));
        assert!(user_msg(parse_event("/from 2pm /to 4pm")).contains("description"));
    }

    #[test]
    fn test_parse_event_with_repeat() {
        let parts = parse_event("standup /from 2024-12-16 0900 /to 2024-12-16 0915 /repeat daily")
            .unwrap();
        assert_eq!(parts.description, "standup");
        assert_eq!(parts.from, "2024-12-16 0900");
        assert_eq!(parts.to, "2024-12-16 0915");
        assert_eq!(parts.repeat.as_deref(), Some("daily"));
    }

    #[test]
    fn test_repeat_value_is_not_validated() {
        let parts = parse_event("gym /from Mon /to Tue /repeat every other week").unwrap();
        assert_eq!(parts.repeat.as_deref(), Some("every other week"));
        assert!(user_msg(parse_event("gym /from Mon /to Tue /repeat")).contains("repeats"));
    }

    #[test]
    fn test_parse_task_number() {
        assert_eq!(parse_task_number("mark 2").unwrap(), 2);
        assert_eq!(parse_task_number("mark   7  extra").unwrap(), 7);
        let missing = user_msg(parse_task_number("mark"));
        let invalid = user_msg(parse_task_number("mark two"));
        assert!(missing.contains("provide a task number"));
        assert!(invalid.contains("not a valid number"));
        assert_ne!(missing, invalid);
        assert!(user_msg(parse_task_number("mark 0")).contains("positive"));
        assert!(user_msg(parse_task_number("mark -3")).contains("positive"));
    }

    #[test]
    fn test_command_parse_dispatch() {
        assert_eq!(Command::parse("").unwrap(), Command::Empty);
        assert_eq!(Command::parse("  ").unwrap(), Command::Empty);
        assert_eq!(Command::parse("bye").unwrap(), Command::Bye);
        assert_eq!(Command::parse("list").unwrap(), Command::List);
        assert_eq!(Command::parse("clear").unwrap(), Command::Clear);
        assert_eq!(Command::parse("mark 3").unwrap(), Command::Mark(3));
        assert_eq!(Command::parse("unmark 1").unwrap(), Command::Unmark(1));
        assert_eq!(Command::parse("delete 2").unwrap(), Command::Delete(2));
        assert_eq!(
            Command::parse("todo read book").unwrap(),
            Command::Todo {
                description: "read book".to_string()
            }
        );
        assert_eq!(
            Command::parse("find book").unwrap(),
            Command::Find {
                keyword: "book".to_string()
            }
        );
        assert_eq!(
            Command::parse("deadline return book /by Sunday").unwrap(),
            Command::Deadline {
                description: "return book".to_string(),
                due: "Sunday".to_string()
            }
        );
    }

    #[test]
    fn test_command_parse_errors() {
        assert!(user_msg(Command::parse("todo")).contains("todo"));
        assert!(user_msg(Command::parse("todo    ")).contains("todo"));
        assert!(user_msg(Command::parse("mark")).contains("Which task should I mark"));
        assert!(user_msg(Command::parse("delete")).contains("delete"));
        assert!(user_msg(Command::parse("find")).contains("find <keyword>"));
        assert!(user_msg(Command::parse("dance now")).contains("I don't understand 'dance now'"));
        // Command words are matched whole
        assert!(user_msg(Command::parse("todos x")).contains("I don't understand"));
    }
}
