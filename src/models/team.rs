use serde::{Deserialize, Serialize};

/// A competing team and its running score.
///
/// Scores are signed: a wrong answer subtracts the question's points and
/// there is no floor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    #[serde(default)]
    pub score: i64,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
        }
    }

    /// Label used when the user leaves a team name blank.
    pub fn default_name(index: usize) -> String {
        format!("Team {}", index + 1)
    }
}
