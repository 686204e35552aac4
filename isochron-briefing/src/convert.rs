use serde_json::{Value, json};

use crate::error::BriefingError;
use crate::types::{BriefingRequest, MeetingBrief};

const SYSTEM_PROMPT: &str = "You are a scheduling assistant. Respond with a single JSON object \
     containing two string fields: \"agenda\", a markdown list of agenda items, and \
     \"etiquetteTip\", a friendly note on the suitability of the meeting time. No other text.";

/// Renders the user prompt for a briefing request.
fn build_prompt(request: &BriefingRequest) -> String {
    format!(
        "I am scheduling a meeting.\n\
         Topic: {}\n\
         Duration: {} minutes.\n\
         \n\
         My Time: {} ({})\n\
         Counterpart Time: {} ({})\n\
         \n\
         Please provide:\n\
         1. A concise, professional meeting agenda with 3-5 bullet points suitable for this duration.\n\
         2. A brief etiquette tip checking if this is a socially acceptable time for the counterpart \
         (e.g. is it too early/late?).",
        request.topic,
        request.duration_minutes,
        request.user_time,
        request.user_zone,
        request.counterpart_time,
        request.counterpart_zone,
    )
}

/// Builds the full chat-completions request body.
pub fn build_request_body(model: &str, request: &BriefingRequest) -> Value {
    json!({
        "model": model,
        "messages": [
            { "role": "system", "content": SYSTEM_PROMPT },
            { "role": "user", "content": build_prompt(request) }
        ],
        "response_format": { "type": "json_object" }
    })
}

/// Parses a chat-completions response into a brief.
///
/// Some models wrap the JSON in a markdown code fence despite the response
/// format hint; tolerate that.
pub fn parse_brief(response: &Value) -> Result<MeetingBrief, BriefingError> {
    let content = response
        .get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|c| c.as_str())
        .ok_or_else(|| BriefingError::MalformedResponse("no message content".to_string()))?;

    serde_json::from_str(strip_code_fence(content))
        .map_err(|e| BriefingError::MalformedResponse(e.to_string()))
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> BriefingRequest {
        BriefingRequest {
            topic: "Q3 roadmap".to_string(),
            duration_minutes: 30,
            user_time: "7:00 PM Sat, Jun 1".to_string(),
            user_zone: "Asia/Kolkata".to_string(),
            counterpart_time: "9:30 AM Sat, Jun 1".to_string(),
            counterpart_zone: "America/New_York".to_string(),
        }
    }

    #[test]
    fn test_request_body_shape() {
        let body = build_request_body("google/gemini-2.5-flash", &request());
        assert_eq!(body["model"], "google/gemini-2.5-flash");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["response_format"]["type"], "json_object");

        let prompt = body["messages"][1]["content"].as_str().unwrap();
        assert!(prompt.contains("Q3 roadmap"));
        assert!(prompt.contains("30 minutes"));
        assert!(prompt.contains("9:30 AM Sat, Jun 1 (America/New_York)"));
    }

    #[test]
    fn test_parse_plain_json_content() {
        let response = json!({
            "choices": [{
                "message": {
                    "content": "{\"agenda\": \"- intro\\n- demo\", \"etiquetteTip\": \"Fine for both.\"}"
                }
            }]
        });
        let brief = parse_brief(&response).unwrap();
        assert_eq!(brief.agenda, "- intro\n- demo");
        assert_eq!(brief.etiquette_tip, "Fine for both.");
    }

    #[test]
    fn test_parse_fenced_json_content() {
        let response = json!({
            "choices": [{
                "message": {
                    "content": "```json\n{\"agenda\": \"- intro\", \"etiquetteTip\": \"ok\"}\n```"
                }
            }]
        });
        let brief = parse_brief(&response).unwrap();
        assert_eq!(brief.agenda, "- intro");
    }

    #[test]
    fn test_parse_rejects_missing_content() {
        let response = json!({ "choices": [] });
        assert!(matches!(
            parse_brief(&response),
            Err(BriefingError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_parse_rejects_non_json_content() {
        let response = json!({
            "choices": [{ "message": { "content": "Sure! Here is your agenda." } }]
        });
        assert!(parse_brief(&response).is_err());
    }
}
