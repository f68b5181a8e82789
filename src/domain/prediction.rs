use serde::{Deserialize, Serialize};

pub const AUDIO_TARGET: &str = "audio";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Textarea,
    Choices,
    Number,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResultValue {
    Text { text: Vec<String> },
    Choices { choices: Vec<String> },
    Number { number: f64 },
}

/// One control value in the annotation tool's result schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
    pub value: ResultValue,
    pub from_name: String,
    pub to_name: String,
    #[serde(rename = "type")]
    pub kind: ResultKind,
}

impl ResultItem {
    pub fn text(from_name: &str, text: impl Into<String>) -> Self {
        Self {
            value: ResultValue::Text {
                text: vec![text.into()],
            },
            from_name: from_name.to_string(),
            to_name: AUDIO_TARGET.to_string(),
            kind: ResultKind::Textarea,
        }
    }

    pub fn choice(from_name: &str, choice: impl Into<String>) -> Self {
        Self {
            value: ResultValue::Choices {
                choices: vec![choice.into()],
            },
            from_name: from_name.to_string(),
            to_name: AUDIO_TARGET.to_string(),
            kind: ResultKind::Choices,
        }
    }

    pub fn number(from_name: &str, number: f64) -> Self {
        Self {
            value: ResultValue::Number { number },
            from_name: from_name.to_string(),
            to_name: AUDIO_TARGET.to_string(),
            kind: ResultKind::Number,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub result: Vec<ResultItem>,
    pub score: f64,
}

impl Prediction {
    pub fn find(&self, from_name: &str) -> Option<&ResultItem> {
        self.result.iter().find(|item| item.from_name == from_name)
    }
}

/// Formats a float the way the annotation tool has always received it:
/// whole numbers keep one decimal (`95.0`), others print as-is (`128.46`).
pub fn format_decimal(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
