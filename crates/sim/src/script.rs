//! Line-oriented hand scripts.
//!
//! Each non-empty line is one command; `#` starts a comment. A line that
//! fails to parse or execute is logged and skipped.

use std::io::Write;

use hands_core::{
    BoundAction, GameError, HandError, HandId, HandInput, HandSet, HandsSnapshot, InputOutcome,
    ItemHandle, MemoryInventory,
};
use serde::Serialize;

/// One script command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Add(HandId),
    Remove(HandId),
    Active(HandId),
    Cycle,
    Place {
        item: ItemHandle,
        hand: Option<HandId>,
        fallback: bool,
    },
    Take(HandId),
    Input(HandInput),
    Snapshot,
}

/// Errors raised while parsing a script line.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{command}' expects {expected}")]
    MissingArgument {
        line: usize,
        command: &'static str,
        expected: &'static str,
    },

    #[error("line {line}: unexpected argument '{argument}'")]
    UnexpectedArgument { line: usize, argument: String },

    #[error("line {line}: invalid item '{value}'")]
    InvalidItem { line: usize, value: String },

    #[error("line {line}: unknown input binding '{binding}'")]
    UnknownBinding { line: usize, binding: String },
}

/// Parses one line. Blank lines and comments yield `None`.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<Command>, ScriptError> {
    let line = line.split('#').next().unwrap_or_default();
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(None);
    };

    let hand = |words: &mut std::str::SplitWhitespace<'_>, command: &'static str| {
        words
            .next()
            .map(HandId::from)
            .ok_or(ScriptError::MissingArgument {
                line: line_no,
                command,
                expected: "a hand name",
            })
    };

    let parsed = match command {
        "add" => Command::Add(hand(&mut words, "add")?),
        "remove" => Command::Remove(hand(&mut words, "remove")?),
        "active" => Command::Active(hand(&mut words, "active")?),
        "take" => Command::Take(hand(&mut words, "take")?),
        "cycle" => Command::Cycle,
        "snapshot" => Command::Snapshot,
        "place" => {
            let value = words.next().ok_or(ScriptError::MissingArgument {
                line: line_no,
                command: "place",
                expected: "an item id",
            })?;
            let item = value
                .parse::<u32>()
                .map(ItemHandle)
                .map_err(|_| ScriptError::InvalidItem {
                    line: line_no,
                    value: value.to_owned(),
                })?;
            let hand = words.next().map(HandId::from);
            let fallback = match words.next() {
                None => false,
                Some("fallback") => true,
                Some(other) => {
                    return Err(ScriptError::UnexpectedArgument {
                        line: line_no,
                        argument: other.to_owned(),
                    });
                }
            };
            Command::Place {
                item,
                hand,
                fallback,
            }
        }
        "input" => {
            let binding = words.next().ok_or(ScriptError::MissingArgument {
                line: line_no,
                command: "input",
                expected: "a binding",
            })?;
            if binding == "set_active" {
                Command::Input(HandInput::RemoteSetActive(hand(&mut words, "input set_active")?))
            } else {
                let action =
                    binding
                        .parse::<BoundAction>()
                        .map_err(|_| ScriptError::UnknownBinding {
                            line: line_no,
                            binding: binding.to_owned(),
                        })?;
                Command::Input(action.into())
            }
        }
        other => {
            return Err(ScriptError::UnknownCommand {
                line: line_no,
                command: other.to_owned(),
            });
        }
    };

    if let Some(extra) = words.next() {
        return Err(ScriptError::UnexpectedArgument {
            line: line_no,
            argument: extra.to_owned(),
        });
    }
    Ok(Some(parsed))
}

/// Snapshot line written to the output, with its hex digest.
#[derive(Serialize)]
struct SnapshotReport<'a> {
    #[serde(flatten)]
    snapshot: &'a HandsSnapshot,
    digest: String,
}

/// Counts reported after a script run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub executed: usize,
    pub failed: usize,
}

/// Owns one actor's hands and inventory while a script runs.
pub struct Simulator {
    hands: HandSet,
    inventory: MemoryInventory,
}

impl Simulator {
    pub fn new(hands: HandSet, inventory: MemoryInventory) -> Self {
        Self { hands, inventory }
    }

    /// Runs every line of `script`, writing snapshots to `out` as JSON lines.
    ///
    /// Parse and hand errors are logged and counted; only output failures abort.
    pub fn run(&mut self, script: &str, out: &mut impl Write) -> anyhow::Result<RunSummary> {
        let mut summary = RunSummary::default();

        for (index, line) in script.lines().enumerate() {
            let command = match parse_line(index + 1, line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(error) => {
                    tracing::warn!("{}", error);
                    summary.failed += 1;
                    continue;
                }
            };

            summary.executed += 1;
            match self.execute(command) {
                Ok(Some(snapshot)) => {
                    let report = SnapshotReport {
                        digest: hex::encode(snapshot.digest()),
                        snapshot: &snapshot,
                    };
                    serde_json::to_writer(&mut *out, &report)?;
                    writeln!(out)?;
                }
                Ok(None) => {}
                Err(error) => {
                    let severity = error.severity();
                    if severity.is_internal() {
                        tracing::error!(
                            "line {}: {} [{}, {}]",
                            index + 1,
                            error,
                            error.error_code(),
                            severity.as_str()
                        );
                    } else {
                        tracing::warn!(
                            "line {}: {} [{}, {}]",
                            index + 1,
                            error,
                            error.error_code(),
                            severity.as_str()
                        );
                    }
                    summary.failed += 1;
                }
            }
        }

        Ok(summary)
    }

    /// Executes one command; returns a snapshot for `snapshot` commands.
    pub fn execute(&mut self, command: Command) -> Result<Option<HandsSnapshot>, HandError> {
        let inventory = &mut self.inventory;
        match command {
            Command::Add(hand) => self.hands.add_hand(inventory, hand)?,
            Command::Remove(hand) => self.hands.remove_hand(inventory, hand.as_str())?,
            Command::Active(hand) => self.hands.set_active(hand.as_str())?,
            Command::Cycle => {
                let active = self.hands.cycle_active()?;
                tracing::info!("Active hand is now '{}'", active);
            }
            Command::Place {
                item,
                hand,
                fallback,
            } => {
                let placed = match hand {
                    Some(hand) => self.hands.place(inventory, item, hand.as_str(), fallback)?,
                    None => self.hands.place_any(inventory, item)?,
                };
                match placed {
                    Some(hand) => tracing::info!("Placed {} in '{}'", item, hand),
                    None => tracing::info!("No hand accepted {}", item),
                }
            }
            Command::Take(hand) => match self.hands.take(inventory, hand.as_str())? {
                Some(item) => tracing::info!("Took {} from '{}'", item, hand),
                None => tracing::info!("Hand '{}' has nothing it can let go of", hand),
            },
            Command::Input(input) => match self.hands.handle_input(inventory, input) {
                InputOutcome::ActiveChanged(hand) => tracing::info!("Active hand is now '{}'", hand),
                InputOutcome::Dropped(hand, item) => {
                    tracing::info!("Dropped {} from '{}'", item, hand)
                }
                InputOutcome::Ignored => tracing::info!("Input ignored"),
            },
            Command::Snapshot => return Ok(Some(self.hands.snapshot(&self.inventory))),
        }
        Ok(None)
    }

    pub fn hands(&self) -> &HandSet {
        &self.hands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hands_core::{HandLayout, HandsConfig, ItemDefinition};

    fn simulator() -> Simulator {
        let mut inventory = MemoryInventory::with_items(
            &HandsConfig::default(),
            [
                ItemDefinition::new(ItemHandle(1), 1),
                ItemDefinition::new(ItemHandle(2), 1).anchored(),
            ],
        );
        let hands = HandSet::from_layout(&HandLayout::humanoid(), &mut inventory).unwrap();
        Simulator::new(hands, inventory)
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_line(1, "   # comment").unwrap(), None);
        assert_eq!(parse_line(1, "cycle").unwrap(), Some(Command::Cycle));
        assert_eq!(
            parse_line(1, "place 4 left fallback").unwrap(),
            Some(Command::Place {
                item: ItemHandle(4),
                hand: Some(HandId::from("left")),
                fallback: true,
            })
        );
        assert_eq!(
            parse_line(1, "input set_active right").unwrap(),
            Some(Command::Input(HandInput::RemoteSetActive(HandId::from("right"))))
        );
        assert_eq!(
            parse_line(1, "input switch_hands").unwrap(),
            Some(Command::Input(HandInput::SwitchHands))
        );
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(matches!(
            parse_line(3, "juggle"),
            Err(ScriptError::UnknownCommand { line: 3, .. })
        ));
        assert!(matches!(
            parse_line(1, "place apple"),
            Err(ScriptError::InvalidItem { .. })
        ));
        assert!(matches!(
            parse_line(1, "take"),
            Err(ScriptError::MissingArgument { command: "take", .. })
        ));
        assert!(matches!(
            parse_line(1, "cycle twice"),
            Err(ScriptError::UnexpectedArgument { .. })
        ));
        assert!(matches!(
            parse_line(1, "input jump"),
            Err(ScriptError::UnknownBinding { .. })
        ));
    }

    #[test]
    fn run_writes_snapshot_lines_and_counts_failures() {
        let mut sim = simulator();
        let mut out = Vec::new();
        let summary = sim
            .run(
                "place 1\nplace 2 left\ntake right\nremove tail\nbogus\nsnapshot\n",
                &mut out,
            )
            .unwrap();

        assert_eq!(summary, RunSummary { executed: 5, failed: 2 });
        let output = String::from_utf8(out).unwrap();
        let report: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
        assert_eq!(report["held"]["left"], 1);
        assert_eq!(report["active"], "left");
        assert_eq!(report["digest"].as_str().unwrap().len(), 64);
    }

    #[test]
    fn anchored_item_survives_drop_input() {
        let mut sim = simulator();
        sim.execute(Command::Place {
            item: ItemHandle(2),
            hand: None,
            fallback: false,
        })
        .unwrap();
        sim.execute(Command::Input(HandInput::Drop)).unwrap();

        let snapshot = sim.execute(Command::Snapshot).unwrap().unwrap();
        assert_eq!(snapshot.item_in("left"), Some(ItemHandle(2)));
        assert_eq!(sim.hands().len(), 2);
    }
}
