//! The exportable game setup.
//!
//! `SetupExport` is what gets written to and read from a setup file.
//! Deserialization goes through a lenient raw form so that hand-edited or
//! older files still load: missing media becomes `null`, missing points
//! fall back to the slot default, and the flat `qMediaType`/`qMediaSrc`
//! layout is folded into the nested media objects.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::question::{Media, MediaKind, Question};
use super::team::Team;

/// Category index -> question index -> record.
pub type QuestionMap = BTreeMap<usize, BTreeMap<usize, Question>>;

/// Serializable snapshot of everything the setup screen holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawSetupExport")]
pub struct SetupExport {
    pub categories_count: usize,
    pub teams: Vec<Team>,
    pub categories: Vec<String>,
    pub questions: QuestionMap,
}

impl SetupExport {
    /// Total number of question records across all categories.
    pub fn question_count(&self) -> usize {
        self.questions.values().map(BTreeMap::len).sum()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSetupExport {
    #[serde(default)]
    categories_count: Option<usize>,
    #[serde(default)]
    teams: Vec<RawTeam>,
    #[serde(default)]
    categories: Vec<Option<String>>,
    #[serde(default)]
    questions: BTreeMap<usize, BTreeMap<usize, RawQuestion>>,
}

#[derive(Deserialize)]
struct RawTeam {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    score: Option<i64>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct RawQuestion {
    question: Option<String>,
    answer: Option<String>,
    points: Option<i64>,
    question_media: Option<Media>,
    answer_media: Option<Media>,
    #[serde(rename = "qMediaType")]
    q_media_type: Option<MediaKind>,
    #[serde(rename = "qMediaSrc")]
    q_media_src: Option<String>,
    #[serde(rename = "aMediaType")]
    a_media_type: Option<MediaKind>,
    #[serde(rename = "aMediaSrc")]
    a_media_src: Option<String>,
}

impl RawQuestion {
    fn into_question(self, index: usize) -> Question {
        Question {
            question: self.question.unwrap_or_default(),
            answer: self.answer.unwrap_or_default(),
            points: self.points.unwrap_or_else(|| Question::default_points(index)),
            question_media: self
                .question_media
                .or_else(|| flat_media(self.q_media_type, self.q_media_src)),
            answer_media: self
                .answer_media
                .or_else(|| flat_media(self.a_media_type, self.a_media_src)),
        }
    }
}

fn flat_media(kind: Option<MediaKind>, src: Option<String>) -> Option<Media> {
    let source_data = src.filter(|s| !s.is_empty())?;
    Some(Media {
        kind: kind.unwrap_or(MediaKind::Unknown),
        source_data,
    })
}

impl TryFrom<RawSetupExport> for SetupExport {
    type Error = String;

    fn try_from(raw: RawSetupExport) -> Result<Self, Self::Error> {
        let highest_key = raw.questions.keys().next_back().map(|k| k + 1).unwrap_or(0);
        let categories_count = raw
            .categories_count
            .unwrap_or_else(|| raw.categories.len().max(highest_key));

        if categories_count == 0 {
            return Err("setup has no categories".to_string());
        }
        if highest_key > categories_count {
            return Err(format!(
                "question category {} is outside categoriesCount {}",
                highest_key - 1,
                categories_count
            ));
        }

        let teams = raw
            .teams
            .into_iter()
            .map(|t| Team {
                name: t.name.unwrap_or_default(),
                score: t.score.unwrap_or(0),
            })
            .collect();

        let mut categories: Vec<String> = raw
            .categories
            .into_iter()
            .take(categories_count)
            .map(Option::unwrap_or_default)
            .collect();
        categories.resize(categories_count, String::new());

        let mut questions = QuestionMap::new();
        let mut raw_questions = raw.questions;
        for category in 0..categories_count {
            let slots = raw_questions.remove(&category).unwrap_or_default();
            let mut records = BTreeMap::new();
            for (expected, (index, raw_question)) in slots.into_iter().enumerate() {
                if index != expected {
                    return Err(format!(
                        "category {category} skips question slot {expected}"
                    ));
                }
                records.insert(index, raw_question.into_question(index));
            }
            questions.insert(category, records);
        }

        Ok(Self {
            categories_count,
            teams,
            categories,
            questions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_document_is_filled_in() {
        let json = r#"{
            "categoriesCount": 2,
            "teams": [{"name": "Red"}],
            "questions": {"0": {"0": {"question": "Q", "answer": "A"}}}
        }"#;
        let setup: SetupExport = serde_json::from_str(json).unwrap();

        assert_eq!(setup.categories, vec![String::new(), String::new()]);
        assert_eq!(setup.teams[0].score, 0);
        assert_eq!(setup.questions[&0][&0].points, 100);
        assert_eq!(setup.questions[&0][&0].question_media, None);
        assert!(setup.questions[&1].is_empty());
    }

    #[test]
    fn test_flat_media_fields_are_folded() {
        let json = r#"{
            "categoriesCount": 1,
            "teams": [],
            "categories": ["Music"],
            "questions": {"0": {"0": {
                "question": "Name it", "answer": "Song", "points": 200,
                "qMediaType": "audio", "qMediaSrc": "data:audio/mpeg;base64,AAAA",
                "aMediaType": null, "aMediaSrc": null
            }}}
        }"#;
        let setup: SetupExport = serde_json::from_str(json).unwrap();
        let question = &setup.questions[&0][&0];

        assert_eq!(question.question_media.as_ref().unwrap().kind, MediaKind::Audio);
        assert_eq!(question.answer_media, None);
        assert_eq!(question.points, 200);
    }

    #[test]
    fn test_null_points_fall_back_to_slot_default() {
        let json = r#"{"categoriesCount":1,"categories":["C"],
            "questions":{"0":{"0":{"points":null},"1":{}}}}"#;
        let setup: SetupExport = serde_json::from_str(json).unwrap();
        assert_eq!(setup.questions[&0][&0].points, 100);
        assert_eq!(setup.questions[&0][&1].points, 200);
    }

    #[test]
    fn test_category_outside_count_is_rejected() {
        let json = r#"{"categoriesCount":1,"questions":{"3":{"0":{}}}}"#;
        assert!(serde_json::from_str::<SetupExport>(json).is_err());
    }

    #[test]
    fn test_gap_in_question_slots_is_rejected() {
        let json = r#"{"categoriesCount":1,"questions":{"0":{"0":{},"2":{}}}}"#;
        assert!(serde_json::from_str::<SetupExport>(json).is_err());
    }

    #[test]
    fn test_missing_count_is_inferred() {
        let json = r#"{"categories":["A","B","C"]}"#;
        let setup: SetupExport = serde_json::from_str(json).unwrap();
        assert_eq!(setup.categories_count, 3);
        assert_eq!(setup.questions.len(), 3);
    }

    #[test]
    fn test_serialized_keys_are_camel_case() {
        let json = r#"{"categoriesCount":1,"categories":["A"],"questions":{"0":{"0":{}}}}"#;
        let setup: SetupExport = serde_json::from_str(json).unwrap();
        let out = serde_json::to_string(&setup).unwrap();

        assert!(out.contains("\"categoriesCount\":1"));
        assert!(out.contains("\"questions\":{\"0\":{\"0\":"));
        assert_eq!(serde_json::from_str::<SetupExport>(&out).unwrap(), setup);
    }
}
