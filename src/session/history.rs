use std::collections::VecDeque;

/// Every raw line submitted to a session, oldest first.
#[derive(Debug, Default)]
pub struct CommandHistory {
    entries: VecDeque<String>,
    limit: Option<usize>,
}

impl CommandHistory {
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            entries: VecDeque::new(),
            limit,
        }
    }

    pub fn record(&mut self, line: &str) {
        self.entries.push_back(line.to_string());
        if let Some(limit) = self.limit {
            while self.entries.len() > limit {
                self.entries.pop_front();
            }
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
