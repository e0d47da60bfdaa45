use serde::{Deserialize, Serialize};

/// Broad media class derived from a MIME type prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Audio,
    Video,
    #[serde(other)]
    Unknown,
}

impl MediaKind {
    pub fn label(self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Audio => "audio",
            MediaKind::Video => "video",
            MediaKind::Unknown => "unknown",
        }
    }
}

/// An uploaded file embedded inline as a data URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub source_data: String,
}

/// Which half of a question a media attachment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaSide {
    Question,
    Answer,
}

/// One board cell's content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question: String,
    pub answer: String,
    pub points: i64,
    pub question_media: Option<Media>,
    pub answer_media: Option<Media>,
}

impl Question {
    /// Empty question in slot `index` with the default point value.
    pub fn blank(index: usize) -> Self {
        Self {
            question: String::new(),
            answer: String::new(),
            points: Self::default_points(index),
            question_media: None,
            answer_media: None,
        }
    }

    /// `(index + 1) * 100`
    pub fn default_points(index: usize) -> i64 {
        (index as i64 + 1) * 100
    }

    pub fn media(&self, side: MediaSide) -> Option<&Media> {
        match side {
            MediaSide::Question => self.question_media.as_ref(),
            MediaSide::Answer => self.answer_media.as_ref(),
        }
    }

    pub fn media_mut(&mut self, side: MediaSide) -> &mut Option<Media> {
        match side {
            MediaSide::Question => &mut self.question_media,
            MediaSide::Answer => &mut self.answer_media,
        }
    }
}
