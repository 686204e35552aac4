use serde::Deserialize;

/// Inputs for a meeting brief. The time strings arrive preformatted; the
/// collaborator reasons about them as text and never does zone math.
#[derive(Debug, Clone)]
pub struct BriefingRequest {
    pub topic: String,
    pub duration_minutes: u32,
    /// Requesting participant's view, e.g. `7:00 PM Sat, Jun 1`.
    pub user_time: String,
    pub user_zone: String,
    /// Counterpart's view of the same instant.
    pub counterpart_time: String,
    pub counterpart_zone: String,
}

/// Generated meeting content.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MeetingBrief {
    /// Markdown-style list of agenda items.
    pub agenda: String,
    /// Note on whether the hour suits the counterpart.
    #[serde(rename = "etiquetteTip", alias = "etiquette_tip")]
    pub etiquette_tip: String,
}

impl MeetingBrief {
    /// Fixed substitute shown when generation fails. Callers that must not
    /// crash display this instead of surfacing the error.
    pub fn fallback() -> MeetingBrief {
        MeetingBrief {
            agenda: "Could not generate agenda. Please try again.".to_string(),
            etiquette_tip: "Could not analyze time settings.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brief_accepts_both_field_spellings() {
        let camel: MeetingBrief =
            serde_json::from_str(r#"{"agenda": "- intro", "etiquetteTip": "fine"}"#).unwrap();
        let snake: MeetingBrief =
            serde_json::from_str(r#"{"agenda": "- intro", "etiquette_tip": "fine"}"#).unwrap();
        assert_eq!(camel, snake);
    }

    #[test]
    fn test_fallback_carries_the_fixed_pair() {
        let brief = MeetingBrief::fallback();
        assert_eq!(brief.agenda, "Could not generate agenda. Please try again.");
        assert_eq!(brief.etiquette_tip, "Could not analyze time settings.");
    }
}
