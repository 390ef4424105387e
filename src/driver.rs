//! Line-oriented command driver for the Lanai Hash Table.
//!
//! Each input line names one table operation:
//!
//! ```text
//! put <key> <value...>
//! search <key>
//! remove <key>
//! contains <key>
//! keys | values | stats | len
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. The value of `put`
//! is the rest of the line, so it may contain spaces.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::data_structures::lanai_hash_table::{LanaiHashTable, LanaiHashTableConfig, TableStats};
use crate::error::command::CommandError;
use crate::error::LanaiResult;

/// A parsed table operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Store a value under a key
    Put {
        /// Key to store under
        key: i32,
        /// Value to store
        value: String,
    },
    /// Look up a key
    Search(i32),
    /// Remove a key
    Remove(i32),
    /// Test membership of a key
    Contains(i32),
    /// List every key
    Keys,
    /// List every value
    Values,
    /// Report occupancy figures
    Stats,
    /// Report the number of stored keys
    Len,
}

impl Command {
    /// Parses one input line.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(command))` for an operation line
    /// * `Ok(None)` for a blank or comment line
    /// * `Err(CommandError)` if the line is malformed
    pub fn parse_line(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (operation, rest) = split_word(line);
        let command = match operation {
            "put" => {
                let (key, value) = split_word(rest);
                let key = parse_key(operation, key)?;
                if value.is_empty() {
                    return Err(missing(operation, "value"));
                }
                Command::Put {
                    key,
                    value: value.to_string(),
                }
            }
            "search" => Command::Search(parse_only_key(operation, rest)?),
            "remove" => Command::Remove(parse_only_key(operation, rest)?),
            "contains" => Command::Contains(parse_only_key(operation, rest)?),
            "keys" | "values" | "stats" | "len" if !rest.is_empty() => {
                return Err(CommandError::UnexpectedArgument(operation.to_string()))
            }
            "keys" => Command::Keys,
            "values" => Command::Values,
            "stats" => Command::Stats,
            "len" => Command::Len,
            other => return Err(CommandError::UnknownOperation(other.to_string())),
        };

        Ok(Some(command))
    }
}

/// Splits off the first whitespace-delimited word; the remainder is trimmed.
fn split_word(text: &str) -> (&str, &str) {
    match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (text, ""),
    }
}

fn missing(operation: &str, argument: &'static str) -> CommandError {
    CommandError::MissingArgument {
        operation: operation.to_string(),
        argument,
    }
}

fn parse_key(operation: &str, key: &str) -> Result<i32, CommandError> {
    if key.is_empty() {
        return Err(missing(operation, "key"));
    }
    key.parse()
        .map_err(|_| CommandError::InvalidKey(key.to_string()))
}

fn parse_only_key(operation: &str, rest: &str) -> Result<i32, CommandError> {
    let (key, extra) = split_word(rest);
    if !extra.is_empty() {
        return Err(CommandError::UnexpectedArgument(operation.to_string()));
    }
    parse_key(operation, key)
}

/// Result of applying a [`Command`].
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A put completed
    Stored,
    /// Result of a search
    Found(Option<String>),
    /// Result of a removal
    Removed(Option<String>),
    /// Result of a membership test
    Contains(bool),
    /// Stored keys in ascending order
    Keys(Vec<i32>),
    /// Stored values in traversal order
    Values(Vec<String>),
    /// Occupancy snapshot
    Stats(TableStats),
    /// Number of stored keys
    Len(usize),
}

impl Outcome {
    /// Renders the outcome as one output line.
    ///
    /// Values and stats are written as JSON, keys as a space-separated list.
    ///
    /// # Errors
    ///
    /// Returns [`LanaiError::Serialization`](crate::error::LanaiError::Serialization) if JSON encoding fails.
    pub fn render(&self) -> LanaiResult<String> {
        let line = match self {
            Outcome::Stored => "OK".to_string(),
            Outcome::Found(Some(value)) | Outcome::Removed(Some(value)) => value.clone(),
            Outcome::Found(None) | Outcome::Removed(None) => "(absent)".to_string(),
            Outcome::Contains(present) => present.to_string(),
            Outcome::Keys(keys) => keys
                .iter()
                .map(i32::to_string)
                .collect::<Vec<_>>()
                .join(" "),
            Outcome::Values(values) => serde_json::to_string(values)?,
            Outcome::Stats(stats) => serde_json::to_string(stats)?,
            Outcome::Len(len) => len.to_string(),
        };

        Ok(line)
    }
}

/// Owns a table and applies commands to it.
#[derive(Debug)]
pub struct Driver {
    table: LanaiHashTable,
}

impl Driver {
    /// Creates a driver around a new table built from `config`.
    pub fn new(config: LanaiHashTableConfig) -> LanaiResult<Self> {
        Ok(Self {
            table: LanaiHashTable::with_config(config)?,
        })
    }

    /// Returns the table the driver operates on.
    pub fn table(&self) -> &LanaiHashTable {
        &self.table
    }

    /// Applies a command to the table.
    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::Put { key, value } => {
                self.table.put(key, value);
                Outcome::Stored
            }
            Command::Search(key) => Outcome::Found(self.table.search(key).map(str::to_string)),
            Command::Remove(key) => Outcome::Removed(self.table.remove(key)),
            Command::Contains(key) => Outcome::Contains(self.table.contains_key(key)),
            Command::Keys => {
                let mut keys: Vec<i32> = self.table.keys().into_iter().collect();
                keys.sort_unstable();
                Outcome::Keys(keys)
            }
            Command::Values => Outcome::Values(self.table.values()),
            Command::Stats => Outcome::Stats(self.table.stats()),
            Command::Len => Outcome::Len(self.table.len()),
        }
    }

    /// Parses and applies one line.
    ///
    /// # Returns
    ///
    /// `Ok(None)` for blank and comment lines.
    pub fn execute_line(&mut self, line: &str) -> LanaiResult<Option<Outcome>> {
        Ok(Command::parse_line(line)?.map(|command| self.apply(command)))
    }

    /// Executes every line of `input`, writing one output line per command.
    ///
    /// Malformed lines are reported as `error: ...` in the output and do not
    /// stop the run.
    ///
    /// # Returns
    ///
    /// The number of commands applied.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> LanaiResult<usize> {
        let mut applied = 0;

        for (number, line) in input.lines().enumerate() {
            let line = line?;
            match Command::parse_line(&line) {
                Ok(Some(command)) => {
                    let line = self.apply(command).render()?;
                    writeln!(output, "{line}")?;
                    applied += 1;
                }
                Ok(None) => {}
                Err(e) => {
                    warn!(line = number + 1, error = %e, "Skipping malformed command");
                    writeln!(output, "error: line {}: {e}", number + 1)?;
                }
            }
        }

        output.flush()?;
        debug!(applied, "Command run finished");

        Ok(applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::lanai_hash_table::HashStrategy;
    use crate::error::LanaiError;
    use test_case::test_case;

    fn driver() -> Driver {
        let config = LanaiHashTableConfig::new()
            .with_initial_capacity(4)
            .with_load_factor(0.75)
            .with_hash_strategy(HashStrategy::Modulo);
        Driver::new(config).unwrap()
    }

    #[test_case("put 1 one", Command::Put { key: 1, value: "one".to_string() } ; "put")]
    #[test_case("put -7   hello  world ", Command::Put { key: -7, value: "hello  world".to_string() } ; "put with spaces")]
    #[test_case("search 3", Command::Search(3) ; "search")]
    #[test_case("  remove\t4", Command::Remove(4) ; "remove with tab")]
    #[test_case("contains 2147483647", Command::Contains(i32::MAX) ; "contains max key")]
    #[test_case("keys", Command::Keys ; "keys")]
    #[test_case("values", Command::Values ; "values")]
    #[test_case("stats", Command::Stats ; "stats")]
    #[test_case("len", Command::Len ; "len")]
    fn test_parse_valid(line: &str, expected: Command) {
        assert_eq!(Command::parse_line(line), Ok(Some(expected)));
    }

    #[test_case("" ; "empty")]
    #[test_case("   " ; "whitespace")]
    #[test_case("# a comment" ; "comment")]
    fn test_parse_skipped(line: &str) {
        assert_eq!(Command::parse_line(line), Ok(None));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Command::parse_line("drop 1"),
            Err(CommandError::UnknownOperation("drop".to_string()))
        );
        assert_eq!(
            Command::parse_line("put 1"),
            Err(CommandError::MissingArgument {
                operation: "put".to_string(),
                argument: "value",
            })
        );
        assert_eq!(
            Command::parse_line("search"),
            Err(CommandError::MissingArgument {
                operation: "search".to_string(),
                argument: "key",
            })
        );
        assert_eq!(
            Command::parse_line("remove ten"),
            Err(CommandError::InvalidKey("ten".to_string()))
        );
        assert_eq!(
            Command::parse_line("search 99999999999"),
            Err(CommandError::InvalidKey("99999999999".to_string()))
        );
        assert_eq!(
            Command::parse_line("len 3"),
            Err(CommandError::UnexpectedArgument("len".to_string()))
        );
        assert_eq!(
            Command::parse_line("contains 1 2"),
            Err(CommandError::UnexpectedArgument("contains".to_string()))
        );
    }

    #[test]
    fn test_apply_sequence() {
        let mut driver = driver();

        assert_eq!(
            driver.apply(Command::Put { key: 3, value: "c".to_string() }),
            Outcome::Stored
        );
        driver.apply(Command::Put { key: 1, value: "a".to_string() });
        driver.apply(Command::Put { key: 2, value: "b".to_string() });

        assert_eq!(driver.table().capacity(), 8);
        assert_eq!(driver.apply(Command::Keys), Outcome::Keys(vec![1, 2, 3]));
        assert_eq!(
            driver.apply(Command::Search(2)),
            Outcome::Found(Some("b".to_string()))
        );
        assert_eq!(
            driver.apply(Command::Remove(2)),
            Outcome::Removed(Some("b".to_string()))
        );
        assert_eq!(driver.apply(Command::Contains(2)), Outcome::Contains(false));
        assert_eq!(driver.apply(Command::Len), Outcome::Len(2));
    }

    #[test]
    fn test_outcome_render() {
        assert_eq!(Outcome::Stored.render().unwrap(), "OK");
        assert_eq!(Outcome::Found(None).render().unwrap(), "(absent)");
        assert_eq!(Outcome::Removed(Some("x".to_string())).render().unwrap(), "x");
        assert_eq!(Outcome::Contains(true).render().unwrap(), "true");
        assert_eq!(Outcome::Keys(vec![-1, 4]).render().unwrap(), "-1 4");
        assert_eq!(
            Outcome::Values(vec!["a b".to_string(), "c".to_string()])
                .render()
                .unwrap(),
            r#"["a b","c"]"#
        );
    }

    #[test]
    fn test_stats_render_as_json() {
        let mut driver = driver();
        driver.apply(Command::Put { key: 1, value: "one".to_string() });

        let line = driver.apply(Command::Stats).render().unwrap();
        let json: serde_json::Value = serde_json::from_str(&line).unwrap();

        assert_eq!(json["len"], 1);
        assert_eq!(json["capacity"], 4);
        assert_eq!(json["load_factor"], 0.75);
        assert_eq!(json["current_load"], 0.25);
        assert_eq!(json["empty_buckets"], 3);
        assert_eq!(json["longest_bucket"], 1);
    }

    #[test]
    fn test_json_failure_is_a_serialization_error() {
        let json_error = serde_json::from_str::<Vec<String>>("[1").unwrap_err();
        let err: LanaiError = json_error.into();

        assert!(matches!(err, LanaiError::Serialization(_)));
        assert!(err.to_string().starts_with("Serialization error: "));
    }

    #[test]
    fn test_run_script() {
        let script = "\
# seed the table
put 1 one
put 2 two
put 1 uno
search 1
bogus
remove 2
search 2
len
";
        let mut driver = driver();
        let mut output = Vec::new();

        let applied = driver.run(script.as_bytes(), &mut output).unwrap();
        assert_eq!(applied, 7);

        let output = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "OK",
                "OK",
                "OK",
                "uno",
                "error: line 6: Unknown operation: bogus",
                "two",
                "(absent)",
                "1",
            ]
        );
    }
}
