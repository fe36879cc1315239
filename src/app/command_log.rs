//! Verlauf der ausgeführten Commands mit fortlaufender Nummer.
//!
//! Der Host liest darüber nach, welche Commands ein Intent ausgelöst hat
//! (z.B. die Schritte eines vollständigen Resets).

use super::AppCommand;

/// Ausgeführter Command mit Sequenznummer
#[derive(Debug, Clone)]
pub struct LoggedCommand {
    /// Fortlaufende Nummer seit Start der Sitzung
    pub seq: u64,
    pub command: AppCommand,
}

/// Begrenzter Command-Verlauf.
#[derive(Debug, Clone, Default)]
pub struct CommandLog {
    entries: Vec<LoggedCommand>,
    next_seq: u64,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt einen Command an; beim Erreichen der Grenze fällt die ältere Hälfte weg.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(LoggedCommand {
            seq: self.next_seq,
            command: command.clone(),
        });
        self.next_seq += 1;
    }

    /// Marke für [`Self::since`]: Nummer des nächsten Commands.
    pub fn mark(&self) -> u64 {
        self.next_seq
    }

    /// Commands, die seit `mark` aufgezeichnet wurden (soweit noch im Verlauf).
    pub fn since(&self, mark: u64) -> impl Iterator<Item = &AppCommand> {
        self.entries
            .iter()
            .filter(move |entry| entry.seq >= mark)
            .map(|entry| &entry.command)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[LoggedCommand] {
        &self.entries
    }

    /// Zuletzt ausgeführter Command
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.last().map(|entry| &entry.command)
    }
}
