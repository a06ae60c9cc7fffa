//! The single simulated character
//!
//! `CharacterState` owns every attribute and enforces its range at the point
//! of mutation. Out-of-range writes are clamped, never rejected, so engine
//! arithmetic and UI sliders can overshoot freely.
//!
//! Status flags cascade inside their setters:
//! - health reaching 0 kills (alive, conscious and awake all drop)
//! - losing consciousness drops wakefulness
//! - waking implies consciousness, which implies life while health remains

use crate::core::scale::{
    HEALTH_MAX, MIN_LARGE, NORMAL_BODY_TEMPERATURE, PCT_MAX, PCT_MIN,
};
use crate::entity::identity::{BodyType, Identity, Sex};
use crate::entity::inventory::Inventory;
use crate::entity::modifiers::{TempModifier, TempModifiers};
use crate::entity::mood::Mood;
use crate::entity::stat::{Stat, StatAccessor};
use serde::{Deserialize, Serialize};

const DEFAULT_APTITUDE: i32 = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterState {
    identity: Identity,

    // Natural aptitudes
    luck: i32,
    beauty: i32,
    intelligence: i32,
    upper_body_strength: i32,
    lower_body_strength: i32,
    endurance: i32,
    agility: i32,
    speed: i32,
    dexterity: i32,

    // Vital signs
    health: i32,
    body_temperature: i32,
    blood_pressure: i32,
    heart_rate: i32,

    // Organ integrity
    cardiovascular: i32,
    respiratory: i32,
    neural: i32,
    digestive: i32,
    immune: i32,

    // Senses
    sight: i32,
    hearing: i32,
    smell_taste: i32,

    // Needs: higher is better except fatigue and bladder
    hunger: i32,
    thirst: i32,
    fatigue: i32,
    sleep: i32,
    hygiene: i32,
    bladder: i32,
    comfort: i32,

    // Cognitive
    memory: i32,
    focus: i32,
    willpower: i32,
    verbal: i32,
    maths: i32,
    knowledge: i32,

    // Emotional
    happiness: i32,
    social: i32,
    stress: i32,
    boredom: i32,
    confidence: i32,

    mood: Mood,
    alive: bool,
    conscious: bool,
    awake: bool,

    adrenaline_turns: u32,
    concussion_count: u32,
    inventory: Inventory,

    /// Derived every cycle; never persisted
    #[serde(skip)]
    modifiers: TempModifiers,
    #[serde(skip)]
    seizure: bool,
}

impl CharacterState {
    /// Create a character with the full default profile
    pub fn new(name: &str, sex: Sex, body_type: BodyType) -> Self {
        Self::with_identity(Identity::new(name, sex, body_type))
    }

    pub fn with_identity(identity: Identity) -> Self {
        Self {
            identity,
            luck: DEFAULT_APTITUDE,
            beauty: DEFAULT_APTITUDE,
            intelligence: DEFAULT_APTITUDE,
            upper_body_strength: DEFAULT_APTITUDE,
            lower_body_strength: DEFAULT_APTITUDE,
            endurance: DEFAULT_APTITUDE,
            agility: DEFAULT_APTITUDE,
            speed: DEFAULT_APTITUDE,
            dexterity: DEFAULT_APTITUDE,
            health: HEALTH_MAX,
            body_temperature: NORMAL_BODY_TEMPERATURE,
            blood_pressure: 120,
            heart_rate: 70,
            cardiovascular: PCT_MAX,
            respiratory: PCT_MAX,
            neural: PCT_MAX,
            digestive: PCT_MAX,
            immune: PCT_MAX,
            sight: PCT_MAX,
            hearing: PCT_MAX,
            smell_taste: PCT_MAX,
            hunger: PCT_MAX * 4 / 5,
            thirst: PCT_MAX * 4 / 5,
            fatigue: PCT_MIN,
            sleep: PCT_MAX,
            hygiene: PCT_MAX,
            bladder: PCT_MIN,
            comfort: PCT_MAX,
            memory: PCT_MAX / 2,
            focus: PCT_MAX / 2,
            willpower: PCT_MAX / 2,
            verbal: PCT_MAX / 2,
            maths: PCT_MAX / 2,
            knowledge: PCT_MAX / 5,
            happiness: PCT_MAX * 7 / 10,
            social: PCT_MAX / 2,
            stress: PCT_MIN,
            boredom: PCT_MIN,
            confidence: PCT_MAX / 2,
            mood: Mood::Neutral,
            alive: true,
            conscious: true,
            awake: true,
            adrenaline_turns: 0,
            concussion_count: 0,
            inventory: Inventory::new(),
            modifiers: TempModifiers::default(),
            seizure: false,
        }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn name(&self) -> &str {
        self.identity.name()
    }

    // === Attributes ===

    pub fn get(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Luck => self.luck,
            Stat::Beauty => self.beauty,
            Stat::Intelligence => self.intelligence,
            Stat::UpperBodyStrength => self.upper_body_strength,
            Stat::LowerBodyStrength => self.lower_body_strength,
            Stat::Endurance => self.endurance,
            Stat::Agility => self.agility,
            Stat::Speed => self.speed,
            Stat::Dexterity => self.dexterity,
            Stat::Health => self.health,
            Stat::BodyTemperature => self.body_temperature,
            Stat::BloodPressure => self.blood_pressure,
            Stat::HeartRate => self.heart_rate,
            Stat::Cardiovascular => self.cardiovascular,
            Stat::Respiratory => self.respiratory,
            Stat::Neural => self.neural,
            Stat::Digestive => self.digestive,
            Stat::Immune => self.immune,
            Stat::Sight => self.sight,
            Stat::Hearing => self.hearing,
            Stat::SmellTaste => self.smell_taste,
            Stat::Hunger => self.hunger,
            Stat::Thirst => self.thirst,
            Stat::Fatigue => self.fatigue,
            Stat::Sleep => self.sleep,
            Stat::Hygiene => self.hygiene,
            Stat::Bladder => self.bladder,
            Stat::Comfort => self.comfort,
            Stat::Memory => self.memory,
            Stat::Focus => self.focus,
            Stat::Willpower => self.willpower,
            Stat::Verbal => self.verbal,
            Stat::Maths => self.maths,
            Stat::Knowledge => self.knowledge,
            Stat::Happiness => self.happiness,
            Stat::Social => self.social,
            Stat::Stress => self.stress,
            Stat::Boredom => self.boredom,
            Stat::Confidence => self.confidence,
        }
    }

    fn slot(&mut self, stat: Stat) -> &mut i32 {
        match stat {
            Stat::Luck => &mut self.luck,
            Stat::Beauty => &mut self.beauty,
            Stat::Intelligence => &mut self.intelligence,
            Stat::UpperBodyStrength => &mut self.upper_body_strength,
            Stat::LowerBodyStrength => &mut self.lower_body_strength,
            Stat::Endurance => &mut self.endurance,
            Stat::Agility => &mut self.agility,
            Stat::Speed => &mut self.speed,
            Stat::Dexterity => &mut self.dexterity,
            Stat::Health => &mut self.health,
            Stat::BodyTemperature => &mut self.body_temperature,
            Stat::BloodPressure => &mut self.blood_pressure,
            Stat::HeartRate => &mut self.heart_rate,
            Stat::Cardiovascular => &mut self.cardiovascular,
            Stat::Respiratory => &mut self.respiratory,
            Stat::Neural => &mut self.neural,
            Stat::Digestive => &mut self.digestive,
            Stat::Immune => &mut self.immune,
            Stat::Sight => &mut self.sight,
            Stat::Hearing => &mut self.hearing,
            Stat::SmellTaste => &mut self.smell_taste,
            Stat::Hunger => &mut self.hunger,
            Stat::Thirst => &mut self.thirst,
            Stat::Fatigue => &mut self.fatigue,
            Stat::Sleep => &mut self.sleep,
            Stat::Hygiene => &mut self.hygiene,
            Stat::Bladder => &mut self.bladder,
            Stat::Comfort => &mut self.comfort,
            Stat::Memory => &mut self.memory,
            Stat::Focus => &mut self.focus,
            Stat::Willpower => &mut self.willpower,
            Stat::Verbal => &mut self.verbal,
            Stat::Maths => &mut self.maths,
            Stat::Knowledge => &mut self.knowledge,
            Stat::Happiness => &mut self.happiness,
            Stat::Social => &mut self.social,
            Stat::Stress => &mut self.stress,
            Stat::Boredom => &mut self.boredom,
            Stat::Confidence => &mut self.confidence,
        }
    }

    /// Store `value` clamped to the stat's range
    ///
    /// Health at or below zero kills the character in the same call.
    pub fn set(&mut self, stat: Stat, value: i32) {
        *self.slot(stat) = stat.clamp(value);

        if stat == Stat::Health && self.health <= 0 {
            self.health = 0;
            self.alive = false;
            self.conscious = false;
            self.awake = false;
        }
    }

    pub fn adjust(&mut self, stat: Stat, delta: i32) {
        self.set(stat, self.get(stat).saturating_add(delta));
    }

    /// Multiply by `1 + fraction`, truncating toward zero
    pub fn scale(&mut self, stat: Stat, fraction: f64) {
        let product = self.get(stat) as f64 * (1.0 + fraction);
        // Snap float noise (34.999999..) before truncating
        let scaled = ((product * 1e6).round() / 1e6) as i32;
        self.set(stat, scaled);
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    // === Status flags ===

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn is_conscious(&self) -> bool {
        self.conscious
    }

    pub fn is_awake(&self) -> bool {
        self.awake
    }

    /// Asleep in the ordinary sense: conscious but not awake
    pub fn is_asleep(&self) -> bool {
        self.conscious && !self.awake
    }

    /// Kill or revive; reviving requires remaining health
    pub fn set_alive(&mut self, alive: bool) {
        if alive {
            if self.health > 0 {
                self.alive = true;
            } else {
                tracing::warn!("{} cannot be revived with no health", self.name());
            }
            return;
        }
        self.alive = false;
        self.conscious = false;
        self.awake = false;
        self.health = 0;
    }

    pub fn set_conscious(&mut self, conscious: bool) {
        if !conscious {
            self.conscious = false;
            self.awake = false;
            return;
        }
        if self.health <= 0 {
            return;
        }
        self.conscious = true;
        self.alive = true;
    }

    pub fn set_awake(&mut self, awake: bool) {
        if !awake {
            self.awake = false;
            return;
        }
        self.set_conscious(true);
        if self.conscious {
            self.awake = true;
        }
    }

    // === Derived state ===

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn set_mood(&mut self, mood: Mood) {
        self.mood = mood;
    }

    pub fn is_experiencing_seizure(&self) -> bool {
        self.seizure
    }

    pub fn set_experiencing_seizure(&mut self, seizure: bool) {
        self.seizure = seizure;
    }

    // === Timed conditions ===

    pub fn adrenaline_turns(&self) -> u32 {
        self.adrenaline_turns
    }

    pub fn set_adrenaline_turns(&mut self, turns: u32) {
        self.adrenaline_turns = turns;
    }

    pub fn has_adrenaline(&self) -> bool {
        self.adrenaline_turns > 0
    }

    pub fn concussion_count(&self) -> u32 {
        self.concussion_count
    }

    pub fn add_concussion(&mut self) {
        self.concussion_count += 1;
    }

    pub fn set_concussion_count(&mut self, count: u32) {
        self.concussion_count = count;
    }

    // === Temporary modifiers ===

    pub fn modifiers(&self) -> &TempModifiers {
        &self.modifiers
    }

    pub fn temp(&self, modifier: TempModifier) -> i32 {
        self.modifiers.get(modifier)
    }

    pub fn set_temp(&mut self, modifier: TempModifier, value: i32) {
        self.modifiers.set(modifier, value);
    }

    pub fn add_temp(&mut self, modifier: TempModifier, delta: i32) {
        self.modifiers.add(modifier, delta);
    }

    /// Zero every offset and clear the seizure flag
    ///
    /// The adrenaline counter is left alone; the engine owns it.
    pub fn reset_temporary_modifiers(&mut self) {
        self.modifiers.clear();
        self.seizure = false;
    }

    // === Effective stats ===

    pub fn effective_upper_body_strength(&self) -> i32 {
        effective_large(self.upper_body_strength, self.modifiers.get(TempModifier::Strength))
    }

    pub fn effective_lower_body_strength(&self) -> i32 {
        effective_large(self.lower_body_strength, self.modifiers.get(TempModifier::Strength))
    }

    pub fn effective_agility(&self) -> i32 {
        effective_large(self.agility, self.modifiers.get(TempModifier::Agility))
    }

    pub fn effective_speed(&self) -> i32 {
        effective_large(self.speed, self.modifiers.get(TempModifier::Speed))
    }

    pub fn effective_dexterity(&self) -> i32 {
        effective_large(self.dexterity, self.modifiers.get(TempModifier::Dexterity))
    }

    pub fn effective_intelligence(&self) -> i32 {
        effective_large(self.intelligence, self.modifiers.get(TempModifier::Intelligence))
    }

    pub fn effective_focus(&self) -> i32 {
        effective_pct(self.focus, self.modifiers.get(TempModifier::Focus))
    }

    pub fn effective_sight(&self) -> i32 {
        effective_pct(self.sight, self.modifiers.get(TempModifier::Perception))
    }

    pub fn effective_hearing(&self) -> i32 {
        effective_pct(self.hearing, self.modifiers.get(TempModifier::Perception))
    }

    pub fn effective_memory(&self) -> i32 {
        effective_pct(self.memory, self.modifiers.get(TempModifier::Memory))
    }

    /// Willpower carries no temporary modifier
    pub fn effective_willpower(&self) -> i32 {
        self.willpower
    }

    // === Inventory ===

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    // === Persistence ===

    /// Prepare a freshly deserialized state for use
    ///
    /// Clears transient modifiers, re-clamps every attribute and re-applies
    /// the flag cascades, since a snapshot bypasses the setters.
    pub fn rehydrate(&mut self) {
        self.reset_temporary_modifiers();
        for stat in Stat::ALL {
            self.set(stat, self.get(stat));
        }
        if !self.alive {
            self.set_alive(false);
        }
        if !self.conscious {
            self.set_conscious(false);
        }
        if self.awake && !self.conscious {
            self.awake = false;
        }
    }
}

impl Default for CharacterState {
    fn default() -> Self {
        Self::with_identity(Identity::default())
    }
}

impl StatAccessor for CharacterState {
    fn get_value(&self, field_name: &str) -> Option<i32> {
        Stat::from_name(field_name).map(|stat| self.get(stat))
    }

    fn set_value(&mut self, field_name: &str, value: i32) -> bool {
        match Stat::from_name(field_name) {
            Some(stat) => {
                self.set(stat, value);
                true
            }
            None => false,
        }
    }

    fn field_names() -> Vec<&'static str> {
        Stat::ALL.iter().map(|s| s.name()).collect()
    }
}

fn effective_large(base: i32, modifier: i32) -> i32 {
    base.saturating_add(modifier).max(MIN_LARGE)
}

fn effective_pct(base: i32, modifier: i32) -> i32 {
    base.saturating_add(modifier).clamp(PCT_MIN, PCT_MAX)
}
