//! Setup form model.
//!
//! Holds what the user has typed on the setup screen. Blank names are kept
//! blank here and only replaced by their defaults when a [`SetupExport`] is
//! built, so clearing a field and retyping behaves as expected.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::SetupError;
use crate::models::{Media, MediaSide, Question, QuestionMap, SetupExport, Team};

pub const DEFAULT_TEAM_COUNT: usize = 2;
pub const DEFAULT_CATEGORIES_COUNT: usize = 5;
pub const DEFAULT_QUESTIONS_PER_CATEGORY: usize = 5;

const UNDEFINED_QUESTION: &str = "Question not defined";
const UNDEFINED_ANSWER: &str = "Answer not defined";

pub fn default_category_name(index: usize) -> String {
    format!("Category {}", index + 1)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupForm {
    teams: Vec<Team>,
    categories: Vec<String>,
    questions: Vec<Vec<Question>>,
    questions_per_category: usize,
}

impl SetupForm {
    pub fn new(team_count: usize, categories_count: usize, questions_per_category: usize) -> Self {
        let mut form = Self {
            teams: Vec::new(),
            categories: Vec::new(),
            questions: Vec::new(),
            questions_per_category,
        };
        form.resize_teams(team_count);
        form.resize_categories(categories_count.max(1));
        form
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    pub fn categories_count(&self) -> usize {
        self.categories.len()
    }

    pub fn questions_per_category(&self) -> usize {
        self.questions_per_category
    }

    pub fn question_count(&self, category: usize) -> usize {
        self.questions.get(category).map_or(0, Vec::len)
    }

    pub fn team_name(&self, index: usize) -> Option<&str> {
        self.teams.get(index).map(|t| t.name.as_str())
    }

    pub fn category_name(&self, index: usize) -> Option<&str> {
        self.categories.get(index).map(String::as_str)
    }

    /// Name shown for a category, substituting the default for a blank one.
    pub fn category_display_name(&self, index: usize) -> String {
        match self.category_name(index).map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => default_category_name(index),
        }
    }

    pub fn question(&self, category: usize, index: usize) -> Option<&Question> {
        self.questions.get(category)?.get(index)
    }

    pub fn questions_in(&self, category: usize) -> &[Question] {
        self.questions.get(category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn set_team_count(&mut self, count: usize) {
        debug!(count, "team count changed");
        self.resize_teams(count);
    }

    pub fn set_categories_count(&mut self, count: usize) -> Result<(), SetupError> {
        if count == 0 {
            return Err(SetupError::NoCategories);
        }
        debug!(count, "category count changed");
        self.resize_categories(count);
        Ok(())
    }

    pub fn set_team_name(&mut self, index: usize, name: &str) -> bool {
        match self.teams.get_mut(index) {
            Some(team) => {
                team.name = name.to_string();
                true
            }
            None => false,
        }
    }

    pub fn set_category_name(&mut self, index: usize, name: &str) -> bool {
        match self.categories.get_mut(index) {
            Some(category) => {
                *category = name.to_string();
                true
            }
            None => false,
        }
    }

    pub fn set_question_text(&mut self, category: usize, index: usize, text: &str) -> Result<(), SetupError> {
        self.slot_mut(category, index)?.question = text.to_string();
        Ok(())
    }

    pub fn set_answer_text(&mut self, category: usize, index: usize, text: &str) -> Result<(), SetupError> {
        self.slot_mut(category, index)?.answer = text.to_string();
        Ok(())
    }

    /// Parse and store a point value. The slot is left unchanged on bad input.
    pub fn set_points(&mut self, category: usize, index: usize, input: &str) -> Result<i64, SetupError> {
        let points: i64 = input
            .trim()
            .parse()
            .map_err(|_| SetupError::InvalidPoints(input.to_string()))?;
        self.slot_mut(category, index)?.points = points;
        Ok(points)
    }

    /// Attach media to one side of a slot, replacing whatever was there.
    pub fn attach_media(
        &mut self,
        category: usize,
        index: usize,
        side: MediaSide,
        media: Media,
    ) -> Result<(), SetupError> {
        *self.slot_mut(category, index)?.media_mut(side) = Some(media);
        Ok(())
    }

    pub fn detach_media(&mut self, category: usize, index: usize, side: MediaSide) -> Result<Option<Media>, SetupError> {
        Ok(self.slot_mut(category, index)?.media_mut(side).take())
    }

    /// Append an empty slot and return its index.
    pub fn add_question(&mut self, category: usize) -> Result<usize, SetupError> {
        let slots = self
            .questions
            .get_mut(category)
            .ok_or(SetupError::NoSuchCategory(category))?;
        let index = slots.len();
        slots.push(Question::blank(index));
        Ok(index)
    }

    /// Delete a slot. Later slots move down one and every slot in the
    /// category gets its default point value back.
    pub fn remove_question(&mut self, category: usize, index: usize) -> Result<Question, SetupError> {
        let slots = self
            .questions
            .get_mut(category)
            .ok_or(SetupError::NoSuchCategory(category))?;
        if index >= slots.len() {
            return Err(SetupError::NoSuchQuestion {
                category,
                question: index,
            });
        }

        let removed = slots.remove(index);
        for (i, slot) in slots.iter_mut().enumerate() {
            slot.points = Question::default_points(i);
        }
        debug!(category, index, remaining = slots.len(), "removed question slot");
        Ok(removed)
    }

    pub fn validate_for_start(&self) -> Result<(), SetupError> {
        if self.teams.is_empty() {
            return Err(SetupError::NoTeams);
        }
        if self.categories.is_empty() {
            return Err(SetupError::NoCategories);
        }
        if self.questions.iter().all(Vec::is_empty) {
            return Err(SetupError::NoQuestions);
        }
        Ok(())
    }

    /// Snapshot the form, substituting defaults for blank fields.
    pub fn build_setup(&self) -> SetupExport {
        let teams = self
            .teams
            .iter()
            .enumerate()
            .map(|(i, team)| {
                Team::new(non_blank(&team.name).unwrap_or_else(|| Team::default_name(i)))
            })
            .collect();

        let categories = (0..self.categories.len())
            .map(|i| self.category_display_name(i))
            .collect();

        let questions: QuestionMap = self
            .questions
            .iter()
            .enumerate()
            .map(|(c, slots)| {
                let records: BTreeMap<usize, Question> = slots
                    .iter()
                    .enumerate()
                    .map(|(q, slot)| {
                        let record = Question {
                            question: non_blank(&slot.question)
                                .unwrap_or_else(|| UNDEFINED_QUESTION.to_string()),
                            answer: non_blank(&slot.answer)
                                .unwrap_or_else(|| UNDEFINED_ANSWER.to_string()),
                            ..slot.clone()
                        };
                        (q, record)
                    })
                    .collect();
                (c, records)
            })
            .collect();

        SetupExport {
            categories_count: self.categories.len(),
            teams,
            categories,
            questions,
        }
    }

    /// Replace the whole form with an imported setup, media included.
    pub fn apply_setup(&mut self, setup: SetupExport) {
        let SetupExport {
            categories_count,
            teams,
            categories,
            mut questions,
        } = setup;
        let categories_count = categories_count.max(1);

        // Scores belong to a played game, not to the form.
        self.teams = teams.into_iter().map(|team| Team::new(team.name)).collect();
        self.categories = categories;
        self.categories.resize(categories_count, String::new());
        self.questions = (0..categories_count)
            .map(|c| {
                questions
                    .remove(&c)
                    .map(|slots| slots.into_values().collect())
                    .unwrap_or_default()
            })
            .collect();

        debug!(
            teams = self.teams.len(),
            categories = categories_count,
            "applied setup to form"
        );
    }

    fn slot_mut(&mut self, category: usize, index: usize) -> Result<&mut Question, SetupError> {
        self.questions
            .get_mut(category)
            .and_then(|slots| slots.get_mut(index))
            .ok_or(SetupError::NoSuchQuestion {
                category,
                question: index,
            })
    }

    fn resize_teams(&mut self, count: usize) {
        self.teams.resize_with(count, || Team::new(""));
    }

    fn resize_categories(&mut self, count: usize) {
        let per_category = self.questions_per_category;
        self.categories.resize(count, String::new());
        self.questions
            .resize_with(count, || (0..per_category).map(Question::blank).collect());
    }
}

impl Default for SetupForm {
    fn default() -> Self {
        Self::new(
            DEFAULT_TEAM_COUNT,
            DEFAULT_CATEGORIES_COUNT,
            DEFAULT_QUESTIONS_PER_CATEGORY,
        )
    }
}

fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
