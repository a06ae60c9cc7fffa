//! Mood classification values

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mood {
    #[default]
    Neutral,
    Happy,
    Sad,
    Angry,
    Stressed,
    Bored,
    Tired,
    Energetic,
    Focused,
    Distracted,
    Fearful,
    Adrenalized,
    Critical,
    Numb,
}

impl Mood {
    /// Moods that only lift back to neutral once the character has recovered
    pub fn is_sticky(&self) -> bool {
        !matches!(
            self,
            Mood::Neutral | Mood::Happy | Mood::Energetic | Mood::Focused
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Neutral => "neutral",
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Angry => "angry",
            Mood::Stressed => "stressed",
            Mood::Bored => "bored",
            Mood::Tired => "tired",
            Mood::Energetic => "energetic",
            Mood::Focused => "focused",
            Mood::Distracted => "distracted",
            Mood::Fearful => "fearful",
            Mood::Adrenalized => "adrenalized",
            Mood::Critical => "critical",
            Mood::Numb => "numb",
        }
    }
}
