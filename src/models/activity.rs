use serde::Serialize;

// One extracurricular activity. The name is the registry key, not a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    /// Signup order; no duplicates.
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(description: &str, schedule: &str, max_participants: usize) -> Self {
        Self {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants(mut self, participants: &[&str]) -> Self {
        self.participants = participants.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn spots_left(&self) -> usize {
        self.max_participants.saturating_sub(self.participants.len())
    }

    pub fn is_full(&self) -> bool {
        self.spots_left() == 0
    }
}
