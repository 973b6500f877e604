use pyprune::prelude::*;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Mock Console replaying scripted answers
///
/// Once the answers run out every prompt reads as end of input.
#[derive(Default, Clone)]
pub struct MockConsole {
    answers: Arc<Mutex<VecDeque<String>>>,
    pub output: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockConsole {
    pub fn with_answers(answers: &[&str]) -> Self {
        Self {
            answers: Arc::new(Mutex::new(
                answers.iter().map(|a| a.to_string()).collect(),
            )),
            output: Arc::default(),
        }
    }

    pub fn get_output(&self) -> Vec<String> {
        self.output.lock().unwrap().clone()
    }

    pub fn printed(&self, needle: &str) -> bool {
        self.get_output().iter().any(|l| l.contains(needle))
    }

    pub fn remaining_answers(&self) -> usize {
        self.answers.lock().unwrap().len()
    }
}

impl Console for MockConsole {
    fn print_line(&self, line: &str) {
        self.output.lock().unwrap().push(line.to_string());
    }

    fn prompt(&self, message: &str) -> Result<Option<String>> {
        self.output.lock().unwrap().push(message.to_string());
        Ok(self.answers.lock().unwrap().pop_front())
    }
}
