//! Prompt templates for the Qimen oracle.

use chrono::{DateTime, SecondsFormat, Utc};

use super::types::OracleRequest;
use crate::reading::{field_text, or_unknown, PromptPair};

const SYSTEM_PROMPT: &str = r#"You are a master of Qimen Dun Jia (奇门遁甲), the ancient Chinese strategic oracle system.

Generate a Qimen Dun Jia reading based on the question asked. The chart should include:

1. The 9 Palaces (arranged as Luo Shu magic square):
   - Palace 4 (SE), Palace 9 (S), Palace 2 (SW)
   - Palace 3 (E), Palace 5 (Center), Palace 7 (W)
   - Palace 8 (NE), Palace 1 (N), Palace 6 (NW)

2. Each palace contains:
   - Deity (神): Chief (值符), Serpent (螣蛇), Moon (太陰), Six Harmony (六合), Hook (勾陳), Zhu Que (朱雀), Nine Earth (九地), Nine Heaven (九天)
   - Star (星): Tian Peng (天蓬), Tian Ren (天任), Tian Chong (天沖), Tian Fu (天輔), Tian Qin (天禽), Tian Xin (天心), Tian Zhu (天柱), Tian Ying (天英)
   - Door (門): Open (開), Rest (休), Life (生), Harm (傷), Delusion (杜), View (景), Death (死), Fear (驚)
   - Element: Water, Fire, Wood, Metal, Earth

3. Key analysis points:
   - Day Palace (where the querent's energy is)
   - Hour Palace (where the outcome energy is)
   - Answer Palace (the focal point for the question)
   - Any special formations (Fu Yin, Fan Yin, etc.)

Return a JSON object with this EXACT structure (no markdown):
{
  "palaces": [
    {
      "position": 1,
      "direction": "N",
      "element": "Water",
      "deity": "Nine Earth",
      "deityMeaning": "Hidden resources, patience",
      "star": "Tian Peng",
      "starMeaning": "Ambition, strategy",
      "door": "Rest",
      "doorMeaning": "Recuperation, planning",
      "isAnswerPalace": false,
      "isDayPalace": false,
      "isHourPalace": false,
      "isVoid": false,
      "strength": "strong"
    }
  ],
  "verdict": "<Favorable | Challenging | Wait>",
  "verdictExplanation": "<brief mystical explanation of the overall reading>",
  "answerPalaceNumber": <1-9>,
  "tacticalAdvice": "<specific directional and timing advice>",
  "bestDirection": "<N|NE|E|SE|S|SW|W|NW>",
  "bestHour": "<specific time recommendation>",
  "specialFormation": "<name of any special formation or null>",
  "specialFormationMeaning": "<explanation if formation exists>",
  "deepInsight": "<profound strategic wisdom for the querent>"
}

Make the reading mystical yet practical, focusing on actionable strategic advice."#;

/// Build the prompt pair; `now` stands in for a missing timestamp.
pub fn build_prompts(request: &OracleRequest, now: DateTime<Utc>) -> PromptPair {
    let time_of_inquiry = field_text(request.timestamp.as_ref())
        .unwrap_or_else(|| now.to_rfc3339_opts(SecondsFormat::Millis, true));

    let mut user = format!(
        "Cast a Qimen Dun Jia chart for the following:\n\n\
         Mode: {}\n\
         Question: {}\n\
         Time of Inquiry: {}\n",
        request.mode().describe(),
        or_unknown(request.question.as_ref()),
        time_of_inquiry,
    );
    if let Some(location) = field_text(request.location.as_ref()) {
        user.push_str(&format!("Location: {}\n", location));
    }
    user.push_str(
        "\nProvide a complete QMDJ reading with all 9 palaces populated and strategic interpretation.",
    );

    PromptPair::new(SYSTEM_PROMPT, user)
}
