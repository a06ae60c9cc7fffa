//! Mood classification
//!
//! Overriding conditions win first, then the ordered emotional rules. When
//! nothing matches, a negative or sticky mood only lifts back to neutral once
//! the character has genuinely recovered.

use crate::core::scale::{health_ratio, pct_ratio};
use crate::entity::{CharacterState, Mood, Stat};

const HYPOTHERMIC: i32 = 30;
const HYPERTHERMIC: i32 = 42;

/// Classify the character's current mood and store it
pub fn update_mood(state: &mut CharacterState) {
    let mood = classify(state);
    if mood != state.mood() {
        tracing::debug!(
            "{}: mood {} -> {}",
            state.name(),
            state.mood().label(),
            mood.label()
        );
    }
    state.set_mood(mood);
}

pub fn classify(state: &CharacterState) -> Mood {
    let ratio = |stat| pct_ratio(state.get(stat));
    let temperature = state.get(Stat::BodyTemperature);

    if state.is_experiencing_seizure()
        || !state.is_conscious()
        || health_ratio(state.health()) < 0.10
        || temperature < HYPOTHERMIC
        || temperature > HYPERTHERMIC
    {
        return Mood::Critical;
    }
    if state.has_adrenaline() {
        return Mood::Adrenalized;
    }
    if ratio(Stat::Hunger) < 0.05 || ratio(Stat::Thirst) < 0.05 {
        return Mood::Stressed;
    }
    if ratio(Stat::Sleep) < 0.10 && ratio(Stat::Fatigue) > 0.90 {
        return Mood::Tired;
    }

    let happiness = ratio(Stat::Happiness);
    let stress = ratio(Stat::Stress);
    let fatigue = ratio(Stat::Fatigue);

    if ratio(Stat::Confidence) < 0.15 {
        Mood::Fearful
    } else if stress > 0.80 {
        Mood::Stressed
    } else if happiness < 0.20 {
        Mood::Sad
    } else if ratio(Stat::Boredom) > 0.80 {
        Mood::Bored
    } else if happiness > 0.80 && stress < 0.20 && fatigue < 0.30 {
        Mood::Energetic
    } else if happiness > 0.70 {
        Mood::Happy
    } else if pct_ratio(state.effective_focus()) > 0.70 && stress < 0.40 {
        Mood::Focused
    } else if fatigue > 0.65 {
        Mood::Tired
    } else if state.mood().is_sticky() && !has_recovered(state) {
        state.mood()
    } else {
        Mood::Neutral
    }
}

/// All recovery conditions must hold for a sticky mood to lift
pub fn has_recovered(state: &CharacterState) -> bool {
    pct_ratio(state.get(Stat::Happiness)) > 0.40
        && pct_ratio(state.get(Stat::Stress)) < 0.50
        && pct_ratio(state.get(Stat::Fatigue)) < 0.50
        && health_ratio(state.health()) > 0.50
        && !state.is_experiencing_seizure()
        && state.is_conscious()
}
