//! Scripted collaborators for driving rounds without a terminal.
//! Enabled by the `testing` feature.

use std::collections::VecDeque;

use crate::table_io::{DecisionSource, HandView, TableDisplay, TableEvent};
use crate::Hand;

/// Answers hit decisions from a fixed script, standing once it runs out
#[derive(Debug, Clone, Default)]
pub struct ScriptedDecisions {
    answers: VecDeque<bool>,
    asked: Vec<String>,
}

impl ScriptedDecisions {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    /// Always stand
    pub fn standing() -> Self {
        Self::default()
    }

    /// Names in the order they were asked
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl DecisionSource for ScriptedDecisions {
    fn wants_hit(&mut self, name: &str, _hand: &Hand) -> bool {
        self.asked.push(name.to_string());
        self.answers.pop_front().unwrap_or(false)
    }
}

/// Keeps everything it was shown, in order
#[derive(Debug, Clone, Default)]
pub struct RecordingDisplay {
    pub hands: Vec<HandView>,
    pub events: Vec<TableEvent>,
    pub lines: Vec<String>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count_events(&self, pred: impl Fn(&TableEvent) -> bool) -> usize {
        self.events.iter().filter(|&e| pred(e)).count()
    }
}

impl TableDisplay for RecordingDisplay {
    fn show_hand(&mut self, view: &HandView) {
        self.lines.push(view.to_string());
        self.hands.push(view.clone());
    }

    fn announce(&mut self, event: &TableEvent) {
        self.lines.push(event.to_string());
        self.events.push(event.clone());
    }
}
