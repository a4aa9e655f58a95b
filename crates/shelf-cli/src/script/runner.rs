//! Script execution against an in-memory library.

use std::collections::HashMap;

use shelf_core::{BookCopy, Condition, Library};

use super::{ScriptLine, Step};
use crate::errors::CliError;
use crate::output::Outcome;

/// Executes parsed script lines, keeping track of copy labels.
///
/// Labels stay bound after `lose`, so later steps can still refer to a lost
/// copy (every operation on it is then a no-op).
pub struct ScriptRunner {
    library: Box<dyn Library>,
    labels: HashMap<String, BookCopy>,
}

impl ScriptRunner {
    pub fn new(library: Box<dyn Library>) -> Self {
        Self {
            library,
            labels: HashMap::new(),
        }
    }

    pub fn library(&self) -> &dyn Library {
        self.library.as_ref()
    }

    /// Execute one line.
    ///
    /// # Errors
    ///
    /// Returns a `CliError` tagged with the line number for unknown or reused
    /// labels, strict-policy rejections, and integrity failures.
    pub fn execute(&mut self, line: &ScriptLine) -> Result<Outcome, CliError> {
        tracing::debug!(line = line.number, step = line.step.name(), "Executing step");
        self.step(&line.step).map_err(|err| at_line(line.number, err))
    }

    fn step(&mut self, step: &Step) -> Result<Outcome, CliError> {
        match step {
            Step::Buy { label, edition } => {
                if self.labels.contains_key(label) {
                    return Err(CliError::invalid_input(format!(
                        "label `{}` is already bound to a copy",
                        label
                    )));
                }
                let copy = self.library.buy(edition);
                self.labels.insert(label.clone(), copy.clone());
                Ok(Outcome::Bought {
                    label: label.clone(),
                    copy: copy.id(),
                    edition: edition.clone(),
                })
            }
            Step::Checkout(label) => {
                let copy = self.copy(label)?;
                self.library.checkout(&copy)?;
                Ok(self.moved("checkout", label, &copy))
            }
            Step::Checkin(label) => {
                let copy = self.copy(label)?;
                self.library.checkin(&copy)?;
                Ok(self.moved("checkin", label, &copy))
            }
            Step::Lose(label) => {
                let copy = self.copy(label)?;
                self.library.lose(&copy);
                Ok(Outcome::Lost {
                    label: label.clone(),
                })
            }
            Step::Damage(label) => self.set_condition(label, Condition::Damaged),
            Step::Repair(label) => self.set_condition(label, Condition::Good),
            Step::Available(label) => {
                let copy = self.copy(label)?;
                Ok(Outcome::Availability {
                    label: label.clone(),
                    available: self.library.is_available(&copy),
                })
            }
            Step::Copies(edition) => Ok(Outcome::Copies {
                edition: edition.clone(),
                all: self.library.all_copies(edition).len(),
                available: self.library.available_copies(edition).len(),
            }),
            Step::Find(query) => Ok(Outcome::Found {
                query: query.clone(),
                editions: self.library.find(query),
            }),
            Step::Check => {
                self.library.check_integrity()?;
                Ok(Outcome::Checked {
                    copies: self.library.len(),
                })
            }
        }
    }

    fn copy(&self, label: &str) -> Result<BookCopy, CliError> {
        self.labels.get(label).cloned().ok_or_else(|| {
            CliError::not_found(
                format!("no copy labelled `{}`", label),
                format!("Hint: bind it first with `buy {} <year> <title> <author>...`", label),
            )
        })
    }

    fn moved(&self, operation: &'static str, label: &str, copy: &BookCopy) -> Outcome {
        Outcome::Moved {
            operation,
            label: label.to_string(),
            available: self.library.is_available(copy),
        }
    }

    fn set_condition(&mut self, label: &str, condition: Condition) -> Result<Outcome, CliError> {
        let copy = self.copy(label)?;
        copy.set_condition(condition);
        Ok(Outcome::Condition {
            label: label.to_string(),
            condition: copy.condition(),
        })
    }
}

fn at_line(number: usize, err: CliError) -> CliError {
    match err {
        CliError::NotFound { message, hint } => CliError::NotFound {
            message: format!("line {}: {}", number, message),
            hint,
        },
        CliError::InvalidInput(message) => {
            CliError::InvalidInput(format!("line {}: {}", number, message))
        }
        CliError::InvalidTransition(message) => {
            CliError::InvalidTransition(format!("line {}: {}", number, message))
        }
        CliError::IntegrityFailed(message) => {
            CliError::IntegrityFailed(format!("line {}: {}", number, message))
        }
    }
}
