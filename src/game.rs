//! Game session: the board, the open question and scoring.
//!
//! A session is created from a [`SetupExport`] when the game starts and is
//! thrown away on restart. Answered cells stay answered; they cannot be
//! reopened.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::error::{GameError, SetupError};
use crate::models::{Question, QuestionMap, SetupExport, Team};

/// The question currently shown in the modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentQuestion {
    pub category: usize,
    pub question: usize,
    pub data: Question,
    pub answer_revealed: bool,
}

/// Final result, produced once when the last cell is closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub winner_index: usize,
    pub winner: Team,
}

/// Result of an effective `score_team` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreUpdate {
    pub team_index: usize,
    pub delta: i64,
    pub score: i64,
    /// Set when scoring closed the last open cell.
    pub game_over: Option<GameOutcome>,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    teams: Vec<Team>,
    categories: Vec<String>,
    questions: QuestionMap,
    answered: HashSet<(usize, usize)>,
    current: Option<CurrentQuestion>,
    outcome: Option<GameOutcome>,
    close_on_score: bool,
}

impl GameSession {
    pub fn new(setup: SetupExport, close_on_score: bool) -> Result<Self, SetupError> {
        if setup.teams.is_empty() {
            return Err(SetupError::NoTeams);
        }
        if setup.question_count() == 0 {
            return Err(SetupError::NoQuestions);
        }

        info!(
            teams = setup.teams.len(),
            categories = setup.categories_count,
            questions = setup.question_count(),
            "game started"
        );

        Ok(Self {
            teams: setup.teams.into_iter().map(|team| Team::new(team.name)).collect(),
            categories: setup.categories,
            questions: setup.questions,
            answered: HashSet::new(),
            current: None,
            outcome: None,
            close_on_score,
        })
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn categories_count(&self) -> usize {
        self.categories.len()
    }

    pub fn question(&self, category: usize, index: usize) -> Option<&Question> {
        self.questions.get(&category)?.get(&index)
    }

    /// Height of the board: the longest category's question count.
    pub fn rows(&self) -> usize {
        self.questions.values().map(|c| c.len()).max().unwrap_or(0)
    }

    pub fn total_questions(&self) -> usize {
        self.questions.values().map(|c| c.len()).sum()
    }

    pub fn answered_count(&self) -> usize {
        self.answered.len()
    }

    pub fn is_answered(&self, category: usize, index: usize) -> bool {
        self.answered.contains(&(category, index))
    }

    pub fn current(&self) -> Option<&CurrentQuestion> {
        self.current.as_ref()
    }

    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn open_question(&mut self, category: usize, index: usize) -> Result<&CurrentQuestion, GameError> {
        if self.outcome.is_some() {
            return Err(GameError::Finished);
        }
        if self.current.is_some() {
            return Err(GameError::QuestionOpen);
        }
        let data = self
            .question(category, index)
            .cloned()
            .ok_or(GameError::NoSuchQuestion {
                category,
                question: index,
            })?;
        if self.is_answered(category, index) {
            return Err(GameError::AlreadyAnswered);
        }

        debug!(category, index, points = data.points, "question opened");
        Ok(self.current.insert(CurrentQuestion {
            category,
            question: index,
            data,
            answer_revealed: false,
        }))
    }

    /// Returns false when there is no open question.
    pub fn reveal_answer(&mut self) -> bool {
        match self.current.as_mut() {
            Some(current) => {
                current.answer_revealed = true;
                true
            }
            None => false,
        }
    }

    /// Add or subtract the open question's points. Without an open question,
    /// or for an unknown team, nothing happens.
    pub fn score_team(&mut self, team_index: usize, is_correct: bool) -> Option<ScoreUpdate> {
        let points = self.current.as_ref()?.data.points;
        let team = self.teams.get_mut(team_index)?;

        let delta = if is_correct { points } else { -points };
        team.score += delta;
        let score = team.score;
        debug!(team = %team.name, delta, score, "scored");

        let game_over = if self.close_on_score {
            self.close_question()
        } else {
            None
        };

        Some(ScoreUpdate {
            team_index,
            delta,
            score,
            game_over,
        })
    }

    /// Close the modal and record the cell as answered. Returns the outcome
    /// only on the close that completes the board.
    pub fn close_question(&mut self) -> Option<GameOutcome> {
        let current = self.current.take()?;
        self.answered.insert((current.category, current.question));
        debug!(
            category = current.category,
            index = current.question,
            answered = self.answered.len(),
            "question closed"
        );

        if self.outcome.is_some() || self.answered.len() < self.total_questions() {
            return None;
        }

        let (winner_index, winner) = self.leader()?;
        let outcome = GameOutcome {
            winner_index,
            winner: winner.clone(),
        };
        info!(winner = %winner.name, score = winner.score, "game over");
        self.outcome = Some(outcome.clone());
        Some(outcome)
    }

    /// Team with the highest score; the earliest team wins a tie.
    pub fn leader(&self) -> Option<(usize, &Team)> {
        self.teams
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, &Team)>, (i, team)| match best {
                Some((_, leader)) if leader.score >= team.score => best,
                _ => Some((i, team)),
            })
    }
}
