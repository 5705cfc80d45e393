use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Token marking a single blank inside a fill-in-the-blank sentence.
pub const BLANK_TOKEN: &str = "_____";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Copy)]
#[serde(rename_all = "snake_case")]
pub enum ActivityStatus {
    Draft,
    Published,
}

impl ActivityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityStatus::Draft => "draft",
            ActivityStatus::Published => "published",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Activity {
    pub id: String,
    pub course_id: String,
    pub title: String,
    pub order_index: i32,
    pub status: ActivityStatus,
    pub content: ActivityContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

impl Activity {
    pub fn new(
        course_id: &str,
        title: &str,
        order_index: i32,
        status: ActivityStatus,
        content: ActivityContent,
    ) -> Self {
        Activity {
            id: Uuid::new_v4().to_string(),
            course_id: course_id.to_string(),
            title: title.to_string(),
            order_index,
            status,
            content,
            created_at: Some(Utc::now()),
            modified_at: Some(Utc::now()),
        }
    }

    pub fn is_published(&self) -> bool {
        self.status == ActivityStatus::Published
    }
}

/// Answer-key payload for one activity, one variant per activity type.
///
/// The variant shapes mirror the content documents the admin dashboards
/// produce: choice-based activities store the expected option under the
/// `correctAnswer` key, except video activities which historically use
/// `correct`; pairing activities share a stable pair id between the term
/// and its match.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActivityContent {
    Reading {
        text: String,
        questions: Vec<ChoiceQuestion>,
    },
    Listening {
        transcript: String,
        questions: Vec<ChoiceQuestion>,
    },
    Quiz {
        questions: Vec<ChoiceQuestion>,
    },
    FillBlank {
        sentences: Vec<BlankSentence>,
    },
    Video {
        url: String,
        questions: Vec<VideoQuestion>,
    },
    DragDrop {
        pairs: Vec<MatchPair>,
    },
    MatchLines {
        pairs: Vec<MatchPair>,
    },
    FlipCards {
        pairs: Vec<MatchPair>,
    },
}

impl ActivityContent {
    pub fn kind(&self) -> &'static str {
        match self {
            ActivityContent::Reading { .. } => "reading",
            ActivityContent::Listening { .. } => "listening",
            ActivityContent::Quiz { .. } => "quiz",
            ActivityContent::FillBlank { .. } => "fill_blank",
            ActivityContent::Video { .. } => "video",
            ActivityContent::DragDrop { .. } => "drag_drop",
            ActivityContent::MatchLines { .. } => "match_lines",
            ActivityContent::FlipCards { .. } => "flip_cards",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChoiceQuestion {
    pub prompt: String,
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: String,
}

/// Video comprehension question. Keeps the `correct` key of the original
/// content format rather than `correctAnswer`; same semantics.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct VideoQuestion {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct BlankSentence {
    pub text: String,
    pub answer: BlankAnswer,
}

impl BlankSentence {
    /// Number of blanks embedded in the sentence text.
    pub fn blank_count(&self) -> usize {
        self.text.matches(BLANK_TOKEN).count()
    }
}

/// Expected blank values, one per blank in sentence order. Authored either
/// as a JSON array or as a single comma-separated string.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum BlankAnswer {
    List(Vec<String>),
    Csv(String),
}

impl BlankAnswer {
    pub fn values(&self) -> Vec<String> {
        match self {
            BlankAnswer::List(values) => values.clone(),
            BlankAnswer::Csv(csv) => csv.split(',').map(|v| v.to_string()).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct MatchPair {
    pub id: String,
    pub term: String,
    #[serde(rename = "match")]
    pub match_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_round_trips_with_type_tag() {
        let content = ActivityContent::Quiz {
            questions: vec![ChoiceQuestion {
                prompt: "Pick A".to_string(),
                options: vec!["A".to_string(), "B".to_string()],
                correct_answer: "A".to_string(),
            }],
        };

        let json = serde_json::to_string(&content).expect("content should serialize");
        assert!(json.contains("\"type\":\"quiz\""));
        assert!(json.contains("\"correctAnswer\":\"A\""));

        let parsed: ActivityContent =
            serde_json::from_str(&json).expect("content should deserialize");
        assert_eq!(parsed, content);
        assert_eq!(parsed.kind(), "quiz");
    }

    #[test]
    fn video_questions_use_the_correct_key() {
        let json = r#"{
            "type": "video",
            "url": "https://example.com/v.mp4",
            "questions": [
                { "prompt": "What happened?", "options": ["x", "y"], "correct": "x" }
            ]
        }"#;

        let parsed: ActivityContent =
            serde_json::from_str(json).expect("video content should deserialize");
        match parsed {
            ActivityContent::Video { questions, .. } => {
                assert_eq!(questions[0].correct, "x");
            }
            other => panic!("expected video content, got {:?}", other.kind()),
        }
    }

    #[test]
    fn blank_answer_accepts_array_or_csv() {
        let from_list: BlankAnswer =
            serde_json::from_str(r#"["cat", "dog"]"#).expect("array form");
        let from_csv: BlankAnswer = serde_json::from_str(r#""cat, dog""#).expect("csv form");

        assert_eq!(from_list.values(), vec!["cat", "dog"]);
        assert_eq!(from_csv.values(), vec!["cat", " dog"]);
    }

    #[test]
    fn blank_count_counts_tokens() {
        let sentence = BlankSentence {
            text: format!("The {} sat on the {}.", BLANK_TOKEN, BLANK_TOKEN),
            answer: BlankAnswer::Csv("cat,mat".to_string()),
        };
        assert_eq!(sentence.blank_count(), 2);
    }
}
