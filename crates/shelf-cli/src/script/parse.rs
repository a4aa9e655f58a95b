//! Script parsing.
//!
//! A script is one command per line. Tokens are separated by whitespace and
//! may be double-quoted to include spaces (`\"` and `\\` escape inside
//! quotes). Blank lines and lines starting with `#` are skipped.

use shelf_core::Edition;

use crate::errors::CliError;

/// One parsed script command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Buy { label: String, edition: Edition },
    Checkout(String),
    Checkin(String),
    Lose(String),
    Damage(String),
    Repair(String),
    Available(String),
    Copies(Edition),
    Find(String),
    Check,
}

impl Step {
    /// Script keyword for this step.
    pub fn name(&self) -> &'static str {
        match self {
            Step::Buy { .. } => "buy",
            Step::Checkout(_) => "checkout",
            Step::Checkin(_) => "checkin",
            Step::Lose(_) => "lose",
            Step::Damage(_) => "damage",
            Step::Repair(_) => "repair",
            Step::Available(_) => "available",
            Step::Copies(_) => "copies",
            Step::Find(_) => "find",
            Step::Check => "check",
        }
    }
}

/// A step together with its 1-based source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub number: usize,
    pub step: Step,
}

const USAGE: &str = "Hint: commands are buy <label> <year> <title> <author>..., \
checkout|checkin|lose|damage|repair|available <label>, \
copies <year> <title> <author>..., find <query>, check";

/// Parse a whole script, failing on the first malformed line.
pub fn parse_script(text: &str) -> Result<Vec<ScriptLine>, CliError> {
    let mut lines = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let number = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let step = tokenize(trimmed)
            .and_then(|tokens| parse_step(&tokens))
            .map_err(|message| CliError::invalid_input(format!("line {}: {}", number, message)))?;
        lines.push(ScriptLine { number, step });
    }
    Ok(lines)
}

/// Split a line into tokens, honoring double quotes.
pub fn tokenize(line: &str) -> Result<Vec<String>, String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                in_token = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(escaped) => current.push(escaped),
                            None => return Err("unterminated quote".to_string()),
                        },
                        Some(other) => current.push(other),
                        None => return Err("unterminated quote".to_string()),
                    }
                }
            }
            c if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            other => {
                in_token = true;
                current.push(other);
            }
        }
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

fn parse_step(tokens: &[String]) -> Result<Step, String> {
    let Some((command, args)) = tokens.split_first() else {
        return Err("empty command".to_string());
    };

    match command.as_str() {
        "buy" => {
            let (label, rest) = args
                .split_first()
                .ok_or_else(|| format!("buy needs a label\n{}", USAGE))?;
            Ok(Step::Buy {
                label: label.clone(),
                edition: parse_edition(rest)?,
            })
        }
        "checkout" => Ok(Step::Checkout(single_label(command, args)?)),
        "checkin" => Ok(Step::Checkin(single_label(command, args)?)),
        "lose" => Ok(Step::Lose(single_label(command, args)?)),
        "damage" => Ok(Step::Damage(single_label(command, args)?)),
        "repair" => Ok(Step::Repair(single_label(command, args)?)),
        "available" => Ok(Step::Available(single_label(command, args)?)),
        "copies" => Ok(Step::Copies(parse_edition(args)?)),
        "find" => match args {
            [query] => Ok(Step::Find(query.clone())),
            _ => Err(format!(
                "find takes exactly one query (quote it if it has spaces)\n{}",
                USAGE
            )),
        },
        "check" if args.is_empty() => Ok(Step::Check),
        "check" => Err("check takes no arguments".to_string()),
        other => Err(format!("unknown command `{}`\n{}", other, USAGE)),
    }
}

fn single_label(command: &str, args: &[String]) -> Result<String, String> {
    match args {
        [label] => Ok(label.clone()),
        _ => Err(format!("{} takes exactly one copy label", command)),
    }
}

/// Parse `<year> <title> <author>...` into a validated edition.
fn parse_edition(args: &[String]) -> Result<Edition, String> {
    let [year, title, authors @ ..] = args else {
        return Err(format!("expected <year> <title> <author>...\n{}", USAGE));
    };
    let year: i32 = year
        .parse()
        .map_err(|_| format!("invalid year `{}`", year))?;
    Edition::new(title.as_str(), authors.iter().map(String::as_str), year)
        .map_err(|e| e.to_string())
}
