use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use sqlx::prelude::FromRow;
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Closed difficulty scale. The discriminant is the stored value and the
/// sort rank.
#[derive(
    EnumString,
    Display,
    AsRefStr,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    sqlx::Type,
)]
#[strum(ascii_case_insensitive)]
#[repr(i32)]
pub enum Difficulty {
    Easy = 1,
    #[strum(to_string = "Medium", serialize = "Intermediate")]
    Medium = 2,
    Advanced = 3,
}

impl Difficulty {
    pub fn rank(self) -> i32 {
        self as i32
    }
}

impl Serialize for Difficulty {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid minutes format")]
pub struct InvalidMinutes;

/// Whole minutes. Travels as `"<n> mins"` in JSON.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, sqlx::Type)]
#[sqlx(transparent)]
pub struct Minutes(pub u32);

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mins", self.0)
    }
}

impl FromStr for Minutes {
    type Err = InvalidMinutes;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s.split(' ').collect::<Vec<_>>();
        let [value, "mins"] = parts.as_slice() else {
            return Err(InvalidMinutes);
        };

        value.parse().map(Minutes).map_err(|_| InvalidMinutes)
    }
}

impl Serialize for Minutes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Minutes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(rename = "ingredient_name")]
    pub name: String,
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    pub instructions: String,
    #[serde(rename = "prep_time")]
    pub preparation_time: Minutes,
    #[serde(rename = "cook_time")]
    pub cooking_time: Minutes,
    pub difficulty: Difficulty,
    pub cuisine_name: String,
    pub ingredients: Vec<Ingredient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_link: Option<String>,
}

/// Caller-supplied recipe fields for insert and update. `difficulty` stays
/// free text until validation so a bad label is reported per field.
/// `ingredients: None` on update keeps the stored list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RecipeInput {
    pub title: String,
    pub instructions: String,
    #[serde(alias = "prep_time")]
    pub preparation_time: Minutes,
    #[serde(alias = "cook_time")]
    pub cooking_time: Minutes,
    pub difficulty: String,
    pub cuisine_name: String,
    pub ingredients: Option<Vec<Ingredient>>,
    pub image_link: Option<String>,
}

impl RecipeInput {
    /// The recipe this input describes once stored under `id`.
    pub fn into_recipe(self, id: i64) -> crate::Result<Recipe> {
        let Ok(difficulty) = self.difficulty.parse::<Difficulty>() else {
            crate::bail!("unknown difficulty {}", self.difficulty);
        };

        Ok(Recipe {
            id,
            title: self.title,
            instructions: self.instructions,
            preparation_time: self.preparation_time,
            cooking_time: self.cooking_time,
            difficulty,
            cuisine_name: self.cuisine_name,
            ingredients: self.ingredients.unwrap_or_default(),
            image_link: self.image_link,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Cuisine {
    pub id: i64,
    pub name: String,
}
