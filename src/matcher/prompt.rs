//! Prompt templates for the compatibility reading.

use super::types::{MatchRequest, PartnerProfile};
use crate::reading::{or_unknown, PromptPair};

const SYSTEM_PROMPT: &str = r#"You are a cosmic compatibility analyst specializing in Bazi (Four Pillars) and Western Synastry.

Analyze the compatibility between two people based on their birth data. Consider:

BAZI ANALYSIS:
- Day Master compatibility between the two
- Elemental balance (Wood, Fire, Earth, Metal, Water)
- Missing elements that the other person provides
- Earthly Branch clashes vs combinations

WESTERN SYNASTRY:
- Sun/Moon aspects
- Venus/Mars interplay for romantic compatibility
- Saturn aspects for karmic connections

Return a JSON object with this EXACT structure (no markdown, just JSON):
{
  "resonanceScore": <number 0-100>,
  "connectionType": "<one of: Twin Flame, Soulmate, Karmic Teacher, Divine Complement>",
  "connectionDescription": "<brief mystical description of this connection type>",
  "elementalAlchemy": {
    "userAElement": "<primary element>",
    "userBElement": "<primary element>",
    "alchemyDescription": "<how their elements interact, e.g. 'Your Fire warms their Water'>"
  },
  "theGift": "<what userA gives to userB>",
  "theLesson": "<what userB teaches userA>",
  "theFriction": "<where they might clash>",
  "harmonyAreas": ["<area1>", "<area2>", "<area3>"],
  "growthAreas": ["<area1>", "<area2>"]
}"#;

fn describe(role: &str, profile: Option<&PartnerProfile>) -> String {
    let empty = PartnerProfile::default();
    let p = profile.unwrap_or(&empty);
    format!(
        "{role}:\n- Name: {}\n- Birth Date: {}\n- Birth Time: {}\n- Location: {}",
        or_unknown(p.name.as_ref()),
        or_unknown(p.birth_date.as_ref()),
        or_unknown(p.birth_time.as_ref()),
        or_unknown(p.birth_location.as_ref()),
    )
}

pub fn build_prompts(request: &MatchRequest) -> PromptPair {
    let user = format!(
        "Analyze the cosmic compatibility between:\n\n{}\n\n{}\n\n\
         Provide a mystical but insightful analysis in the specified JSON format.",
        describe("Person A (The Seeker)", request.user_a.as_ref()),
        describe("Person B (The Partner)", request.user_b.as_ref()),
    );
    PromptPair::new(SYSTEM_PROMPT, user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_prompt_lists_both_people() {
        let request = MatchRequest {
            user_a: Some(PartnerProfile {
                name: Some(json!("You")),
                birth_date: Some(json!("1990-01-15")),
                birth_time: Some(json!("14:30")),
                birth_location: Some(json!("New York, USA")),
            }),
            user_b: Some(PartnerProfile {
                name: Some(json!("Sam")),
                birth_date: Some(json!("1988-05-02")),
                ..Default::default()
            }),
        };
        let prompts = build_prompts(&request);
        assert!(prompts.user.contains("Person A (The Seeker):\n- Name: You\n- Birth Date: 1990-01-15\n- Birth Time: 14:30\n- Location: New York, USA"));
        assert!(prompts.user.contains("Person B (The Partner):\n- Name: Sam\n- Birth Date: 1988-05-02\n- Birth Time: Unknown\n- Location: Unknown"));
        assert!(prompts.system.contains("\"resonanceScore\": <number 0-100>"));
    }

    #[test]
    fn test_numeric_birth_date_is_rendered() {
        let request = MatchRequest {
            user_a: Some(PartnerProfile {
                name: Some(json!("You")),
                birth_date: Some(json!(19900115)),
                ..Default::default()
            }),
            user_b: None,
        };
        let prompts = build_prompts(&request);
        assert!(prompts.user.contains("- Name: You\n- Birth Date: 19900115\n- Birth Time: Unknown"));
    }

    #[test]
    fn test_missing_partner_renders_unknown() {
        let prompts = build_prompts(&MatchRequest::default());
        assert!(prompts.user.contains("Person B (The Partner):\n- Name: Unknown"));
    }
}
