//! Contains [`FrequencyTable`], the mapping from each distinct symbol of a
//! message to its relative frequency.
//!
//! Entries keep the order in which the symbols first appeared. That order
//! carries no meaning for the code itself, but the decoder scans the table in
//! this order, so it has to be stable for encodings to be reproducible.

use alloc::vec::Vec;
use core::iter::FromIterator;

/// Options for deriving a [`FrequencyTable`] from a message.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelOptions {
    /// Symbol that is always part of the table, even if the message never
    /// contains it. This keeps later messages containing it encodable.
    pub whitespace: Option<char>,
    /// Frequency given to `whitespace` when it has to be inserted.
    pub whitespace_frequency: f64,
}

impl Default for ModelOptions {
    fn default() -> Self {
        ModelOptions {
            whitespace: Some(' '),
            whitespace_frequency: 0.001,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    entries: Vec<(char, f64)>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        FrequencyTable {
            entries: Vec::new(),
        }
    }

    /// Counts every symbol of `message` with the default [`ModelOptions`].
    pub fn from_message(message: &str) -> Self {
        Self::from_message_with(message, &ModelOptions::default())
    }

    pub fn from_message_with(message: &str, options: &ModelOptions) -> Self {
        let mut counts: Vec<(char, usize)> = Vec::new();
        let mut total = 0usize;
        for symbol in message.chars() {
            total += 1;
            match counts.iter_mut().find(|(s, _)| *s == symbol) {
                Some((_, count)) => *count += 1,
                None => counts.push((symbol, 1)),
            }
        }

        let mut table = FrequencyTable {
            entries: counts
                .into_iter()
                .map(|(symbol, count)| (symbol, count as f64 / total as f64))
                .collect(),
        };

        if let Some(whitespace) = options.whitespace {
            if table.get(whitespace).is_none() {
                table.insert(whitespace, options.whitespace_frequency);
            }
        }

        table
    }

    /// Sets the frequency of `symbol`. An existing entry keeps its position.
    pub fn insert(&mut self, symbol: char, frequency: f64) {
        match self.entries.iter_mut().find(|(s, _)| *s == symbol) {
            Some(entry) => entry.1 = frequency,
            None => self.entries.push((symbol, frequency)),
        }
    }

    pub fn get(&self, symbol: char) -> Option<f64> {
        self.entries
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|(_, frequency)| *frequency)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(symbol, frequency)` in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.iter().map(|(symbol, _)| *symbol)
    }
}

impl FromIterator<(char, f64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (char, f64)>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        for (symbol, frequency) in iter {
            table.insert(symbol, frequency);
        }
        table
    }
}
