//! Validation of the homework API body and formatting of status messages.

use serde::Deserialize;
use serde_json::Value;

use herald_common::BotError;
use herald_common::types::{ApiAnswer, HomeworkRecord, HomeworkStatus};

/// Check that `body` has the documented shape and convert it to [`ApiAnswer`].
///
/// The checks run in a fixed order: the body must be a mapping, it must
/// contain `homeworks`, and `homeworks` must be a list. Beyond that only
/// what the bot reads is typed: the first homework must be a mapping with a
/// string `homework_name` (if present), and `current_date` must be a
/// non-negative integer (if present). Other entries and fields are not
/// inspected.
pub fn check_response(body: &Value) -> Result<ApiAnswer, BotError> {
    let map = body
        .as_object()
        .ok_or_else(|| BotError::Shape(format!("ответ API не словарь, а {}", json_kind(body))))?;

    let homeworks = map
        .get("homeworks")
        .ok_or(BotError::MissingKey("homeworks"))?
        .as_array()
        .ok_or_else(|| {
            BotError::Shape(format!(
                "response[\"homeworks\"] не список, а {}",
                json_kind(&map["homeworks"])
            ))
        })?;

    let latest = match homeworks.first() {
        None => None,
        Some(first) if !first.is_object() => {
            return Err(BotError::Shape(format!(
                "домашняя работа не словарь, а {}",
                json_kind(first)
            )));
        }
        Some(first) => Some(
            HomeworkRecord::deserialize(first).map_err(|e| BotError::Shape(e.to_string()))?,
        ),
    };

    let current_date = match map.get("current_date") {
        None | Some(Value::Null) => None,
        Some(value) => Some(value.as_u64().ok_or_else(|| {
            BotError::Shape(format!("current_date не целое неотрицательное число: {value}"))
        })?),
    };

    Ok(ApiAnswer {
        latest,
        homework_count: homeworks.len(),
        current_date,
    })
}

/// Format the chat message for a single homework record.
///
/// Any `status` other than the three known string codes, including a
/// non-string value, is an [`BotError::UnknownVerdict`].
pub fn parse_status(homework: &HomeworkRecord) -> Result<String, BotError> {
    let name = homework
        .homework_name
        .as_deref()
        .ok_or(BotError::MissingKey("homework_name"))?;
    let raw = homework.status.as_ref().ok_or(BotError::MissingKey("status"))?;
    let status = raw
        .as_str()
        .and_then(HomeworkStatus::from_code)
        .ok_or_else(|| BotError::UnknownVerdict(match raw {
            Value::String(code) => code.clone(),
            other => other.to_string(),
        }))?;

    tracing::debug!(homework = name, %status, "Parsed homework status");
    Ok(format!(
        "Изменился статус проверки работы \"{name}\". {}",
        status.verdict()
    ))
}

/// Chat text relayed when a polling iteration fails.
pub fn failure_message(error: &BotError) -> String {
    format!("Сбой в работе программы: {error}")
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "булево значение",
        Value::Number(_) => "число",
        Value::String(_) => "строка",
        Value::Array(_) => "список",
        Value::Object(_) => "словарь",
    }
}
