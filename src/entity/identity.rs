//! Who the character is; fixed at creation

use serde::{Deserialize, Serialize};

pub const DEFAULT_NAME: &str = "Player";
pub const DEFAULT_AGE: i32 = 22;
pub const DEFAULT_ETHNICITY: &str = "Caucasian";
pub const DEFAULT_HEIGHT_M: f64 = 1.75;
pub const DEFAULT_WEIGHT_KG: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyType {
    Ectomorph,
    Mesomorph,
    Endomorph,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BloodType {
    OPositive,
    ONegative,
    APositive,
    ANegative,
    BPositive,
    BNegative,
    AbPositive,
    AbNegative,
    Unknown,
}

/// Identity attributes, clamped on construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    name: String,
    age: i32,
    sex: Sex,
    ethnicity: String,
    height_m: f64,
    weight_kg: f64,
    blood_type: BloodType,
    body_type: BodyType,
}

impl Identity {
    pub fn new(name: &str, sex: Sex, body_type: BodyType) -> Self {
        Self {
            name: Self::clean_name(name),
            sex,
            body_type,
            ..Self::default()
        }
    }

    pub fn with_age(mut self, age: i32) -> Self {
        self.age = age.clamp(0, 200);
        self
    }

    pub fn with_ethnicity(mut self, ethnicity: &str) -> Self {
        self.ethnicity = ethnicity.trim().to_string();
        self
    }

    pub fn with_height(mut self, height_m: f64) -> Self {
        self.height_m = height_m.clamp(0.5, 3.0);
        self
    }

    pub fn with_weight(mut self, weight_kg: f64) -> Self {
        self.weight_kg = weight_kg.clamp(10.0, 500.0);
        self
    }

    pub fn with_blood_type(mut self, blood_type: BloodType) -> Self {
        self.blood_type = blood_type;
        self
    }

    fn clean_name(name: &str) -> String {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            DEFAULT_NAME.to_string()
        } else {
            trimmed.to_string()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn ethnicity(&self) -> &str {
        &self.ethnicity
    }

    pub fn height_m(&self) -> f64 {
        self.height_m
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn blood_type(&self) -> BloodType {
        self.blood_type
    }

    pub fn body_type(&self) -> BodyType {
        self.body_type
    }
}

impl Default for Identity {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            age: DEFAULT_AGE,
            sex: Sex::Male,
            ethnicity: DEFAULT_ETHNICITY.to_string(),
            height_m: DEFAULT_HEIGHT_M,
            weight_kg: DEFAULT_WEIGHT_KG,
            blood_type: BloodType::OPositive,
            body_type: BodyType::Mesomorph,
        }
    }
}
