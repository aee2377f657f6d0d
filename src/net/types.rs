//! Wire DTOs for the recipe REST API.
//!
//! DESIGN
//! ======
//! Response types are lenient: optional fields default, and decimal prices
//! are accepted either as JSON numbers or as the strings the backend emits.
//! Request bodies use the backend's snake_case field names.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Sign-in form input. Lives only for one submit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Sign-up form input. Lives only for one submit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Successful response of the token endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthToken {
    pub token: String,
}

impl AuthToken {
    /// Value sent in (and persisted for) the `Authorization` header.
    pub fn authorization(&self) -> String {
        authorization_header(&self.token)
    }
}

/// Format a raw token the way the backend's token authentication expects.
pub fn authorization_header(token: &str) -> String {
    format!("Token {token}")
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RecipeImage {
    #[serde(default)]
    pub id: Option<u64>,
    pub image: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Tag {
    pub id: u64,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Ingredient {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub images: Vec<RecipeImage>,
}

/// Recipe as listed by `GET /api/recipe/recipes/`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Recipe {
    pub id: u64,
    pub title: String,
    #[serde(deserialize_with = "deserialize_price")]
    pub price: f64,
    pub time_minutes: u32,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub images: Vec<RecipeImage>,
}

impl Recipe {
    /// First image is the canonical thumbnail; empty string when there is none.
    pub fn thumbnail(&self) -> &str {
        thumbnail_of(&self.images)
    }

    pub fn time_label(&self) -> String {
        format!("Time: {} mins", self.time_minutes)
    }

    pub fn price_label(&self) -> String {
        format!("Price: ${:.2}", self.price)
    }
}

/// Full recipe from `GET /api/recipe/recipes/{id}/`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RecipeDetail {
    #[serde(flatten)]
    pub summary: Recipe,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

/// Current user from `GET /api/users/me/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl UserProfile {
    /// Full name, falling back to the email address.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() { self.email.clone() } else { full.to_owned() }
    }

    pub fn avatar(&self) -> Option<&str> {
        self.image.as_deref().filter(|url| !url.is_empty())
    }
}

fn thumbnail_of(images: &[RecipeImage]) -> &str {
    images.first().map_or("", |img| img.image.as_str())
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let parsed = match &value {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(raw) => raw.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(price) if price.is_finite() => Ok(price),
        _ => Err(D::Error::custom(format!("invalid price value: {value}"))),
    }
}
