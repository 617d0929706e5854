use serde::{Deserialize, Serialize};

/// Review outcome reported by the homework API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// Map an API status code onto the closed set of known verdicts.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "approved" => Some(HomeworkStatus::Approved),
            "reviewing" => Some(HomeworkStatus::Reviewing),
            "rejected" => Some(HomeworkStatus::Rejected),
            _ => None,
        }
    }

    /// Human-readable verdict sent to the chat.
    pub fn verdict(self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
            HomeworkStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl std::fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HomeworkStatus::Approved => write!(f, "approved"),
            HomeworkStatus::Reviewing => write!(f, "reviewing"),
            HomeworkStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// The homework entry the bot reports on.
///
/// Only the fields the formatter reads are modelled; everything else in the
/// record is ignored. `status` stays raw so that a non-string value is
/// reported as an unknown verdict rather than a shape error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeworkRecord {
    pub homework_name: Option<String>,
    pub status: Option<serde_json::Value>,
}

/// Validated body of a homework status response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiAnswer {
    /// First (most recent) entry of `homeworks`, if any
    pub latest: Option<HomeworkRecord>,
    /// Number of entries in `homeworks`
    pub homework_count: usize,
    /// Server time to use as the next cursor
    pub current_date: Option<u64>,
}
