//! Rule-based diet recommendations
//!
//! Maps a profile (age, gender, goal, dietary preference, allergies) to a
//! sorted, deduplicated, allergen-filtered list of foods and nutrients drawn
//! from compiled-in tables.
//!
//! Unknown goal, preference or gender strings never fail. An unknown goal or
//! preference selects the maintenance/default base list (not the default list
//! of the matched goal), and an unknown gender contributes nothing.

use crate::errors::UnknownVariant;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

// ============================================================================
// Profile Types
// ============================================================================

/// Fitness goal driving the base food table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    WeightLoss,
    WeightGain,
    Maintenance,
}

impl Goal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "weight_loss",
            Goal::WeightGain => "weight_gain",
            Goal::Maintenance => "maintenance",
        }
    }
}

/// Dietary style nested under a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Preference {
    #[default]
    Default,
    Vegan,
    Keto,
}

impl Preference {
    pub fn as_str(&self) -> &'static str {
        match self {
            Preference::Default => "default",
            Preference::Vegan => "vegan",
            Preference::Keto => "keto",
        }
    }
}

/// Gender used for nutrient focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Nonbinary,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Nonbinary => "nonbinary",
        }
    }

    /// Nutrient focus for this gender
    pub fn focus(&self) -> &'static [&'static str] {
        match self {
            Gender::Male => &["More protein", "Iron", "Whole grains"],
            Gender::Female => &["Folic acid", "Iron", "Calcium"],
            Gender::Nonbinary => &["Balanced macros", "Plant-based proteins", "Vitamin D"],
        }
    }
}

/// Coarse age-derived category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeBracket {
    Child,
    Teen,
    Adult,
    Senior,
}

impl AgeBracket {
    /// Bracket for an age in years
    pub fn from_age(age: u32) -> Self {
        match age {
            0..=12 => AgeBracket::Child,
            13..=17 => AgeBracket::Teen,
            18..=59 => AgeBracket::Adult,
            _ => AgeBracket::Senior,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeBracket::Child => "child",
            AgeBracket::Teen => "teen",
            AgeBracket::Adult => "adult",
            AgeBracket::Senior => "senior",
        }
    }

    /// Nutrient guidance for this bracket
    pub fn nutrients(&self) -> &'static [&'static str] {
        match self {
            AgeBracket::Child => &["Calcium", "Iron-rich foods", "Milk", "Eggs"],
            AgeBracket::Teen => &["Protein", "Zinc", "Dairy", "Iron"],
            AgeBracket::Adult => &["Fiber", "Lean protein", "Omega-3"],
            AgeBracket::Senior => &["Calcium", "Vitamin D", "Low-sodium", "High-fiber foods"],
        }
    }
}

/// Goal and preference keys are matched exactly, as stored in the tables
impl FromStr for Goal {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weight_loss" => Ok(Goal::WeightLoss),
            "weight_gain" => Ok(Goal::WeightGain),
            "maintenance" => Ok(Goal::Maintenance),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

impl FromStr for Preference {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Preference::Default),
            "vegan" => Ok(Preference::Vegan),
            "keto" => Ok(Preference::Keto),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

/// Gender is matched case-insensitively
impl FromStr for Gender {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "nonbinary" => Ok(Gender::Nonbinary),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for Preference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Food Tables
// ============================================================================

/// Base food list for a goal and preference
pub fn base_foods(goal: Goal, preference: Preference) -> &'static [&'static str] {
    match (goal, preference) {
        (Goal::WeightLoss, Preference::Default) => &[
            "Leafy greens",
            "Lean protein (chicken, tofu)",
            "Whole grains",
            "Low-fat dairy",
        ],
        (Goal::WeightLoss, Preference::Vegan) => {
            &["Tofu", "Chickpeas", "Quinoa", "Almond milk", "Vegetables"]
        }
        (Goal::WeightLoss, Preference::Keto) => {
            &["Avocados", "Eggs", "Cheese", "Olive oil", "Leafy greens"]
        }
        (Goal::WeightGain, Preference::Default) => {
            &["Nut butters", "Red meat", "Whole milk", "Rice", "Bananas"]
        }
        (Goal::WeightGain, Preference::Vegan) => {
            &["Nuts", "Lentils", "Avocados", "Oats", "Soy milk"]
        }
        (Goal::WeightGain, Preference::Keto) => {
            &["Fatty fish", "Cheese", "Coconut oil", "Nuts", "Eggs"]
        }
        (Goal::Maintenance, Preference::Default) => &[
            "Balanced plate (protein, carb, veg)",
            "Fruits",
            "Lean meat",
            "Whole grains",
        ],
        (Goal::Maintenance, Preference::Vegan) => {
            &["Legumes", "Grains", "Vegetables", "Fruits"]
        }
        (Goal::Maintenance, Preference::Keto) => {
            &["Moderate fats", "Non-starchy vegetables", "Fish", "Cheese"]
        }
    }
}

/// Resolve the base list from raw goal and preference names
///
/// Any unrecognized name selects maintenance/default.
fn resolve_base_foods(goal: &str, preference: &str) -> &'static [&'static str] {
    match (goal.parse::<Goal>(), preference.parse::<Preference>()) {
        (Ok(goal), Ok(preference)) => base_foods(goal, preference),
        _ => base_foods(Goal::Maintenance, Preference::Default),
    }
}

// ============================================================================
// Recommendation
// ============================================================================

/// Compute a diet recommendation
///
/// The result is sorted ascending by byte order and contains no duplicates.
/// Any item containing an allergy (trimmed, case-insensitive) as a substring
/// is dropped; blank allergy entries are ignored.
pub fn recommend_diet<S: AsRef<str>>(
    age: u32,
    gender: &str,
    goal: &str,
    preference: &str,
    allergies: &[S],
) -> Vec<String> {
    let gender_focus: &[&str] = gender.parse::<Gender>().map(|g| g.focus()).unwrap_or(&[]);

    let allergens: Vec<String> = allergies
        .iter()
        .map(|a| a.as_ref().trim().to_lowercase())
        .filter(|a| !a.is_empty())
        .collect();

    let plan: BTreeSet<&str> = resolve_base_foods(goal, preference)
        .iter()
        .chain(AgeBracket::from_age(age).nutrients())
        .chain(gender_focus)
        .copied()
        .filter(|item| {
            let item = item.to_lowercase();
            !allergens.iter().any(|allergen| item.contains(allergen.as_str()))
        })
        .collect();

    plan.into_iter().map(str::to_string).collect()
}

/// Diet profile as supplied by a presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietProfile {
    pub age: u32,
    pub gender: String,
    pub goal: String,
    #[serde(default = "default_preference")]
    pub preference: String,
    #[serde(default)]
    pub allergies: Vec<String>,
}

fn default_preference() -> String {
    Preference::Default.as_str().to_string()
}

impl DietProfile {
    /// Profile with the default preference and no allergies
    pub fn new(age: u32, gender: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            age,
            gender: gender.into(),
            goal: goal.into(),
            preference: default_preference(),
            allergies: Vec::new(),
        }
    }

    pub fn with_preference(mut self, preference: impl Into<String>) -> Self {
        self.preference = preference.into();
        self
    }

    pub fn with_allergies(mut self, allergies: Vec<String>) -> Self {
        self.allergies = allergies;
        self
    }

    pub fn age_bracket(&self) -> AgeBracket {
        AgeBracket::from_age(self.age)
    }

    /// Compute the recommendation for this profile
    pub fn recommend(&self) -> Vec<String> {
        recommend_diet(
            self.age,
            &self.gender,
            &self.goal,
            &self.preference,
            self.allergies.as_slice(),
        )
    }
}
