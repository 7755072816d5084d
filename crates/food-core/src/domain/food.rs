//! Food Entity
//!
//! A dish on the menu, plus the payloads the add/edit forms produce.

use serde::{Deserialize, Deserializer, Serialize};
use super::entity::{DomainError, DomainResult, Entity};

/// Backend-assigned identifier
///
/// Always a string on our side; json-server style backends hand out integers,
/// so decoding accepts both.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FoodId(String);

impl FoodId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FoodId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FoodId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for FoodId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl<'de> Deserialize<'de> for FoodId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Int(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => FoodId(s),
            RawId::Int(n) => FoodId(n.to_string()),
        })
    }
}

/// Price as number or numeric string ("19.90")
fn deserialize_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Number(f64),
        Text(String),
    }

    match RawPrice::deserialize(deserializer)? {
        RawPrice::Number(n) => Ok(n),
        RawPrice::Text(s) => parse_price(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid price: {:?}", s))),
    }
}

/// Parse user or wire price text. Accepts a comma decimal separator.
fn parse_price(text: &str) -> Option<f64> {
    let normalized = text.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Some(price),
        _ => None,
    }
}

/// Render a price the way the menu cards show it
pub fn format_price(price: f64) -> String {
    format!("R$ {:.2}", price)
}

/// A dish as the backend returns it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: FoodId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(deserialize_with = "deserialize_price")]
    pub price: f64,
    /// Image URL
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub available: bool,
}

impl FoodItem {
    /// Create an available dish with no description or image
    pub fn new(id: impl Into<FoodId>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            image: String::new(),
            available: true,
        }
    }

    /// Same record with availability flipped
    pub fn with_availability_toggled(&self) -> Self {
        Self {
            available: !self.available,
            ..self.clone()
        }
    }
}

impl Entity for FoodItem {
    type Id = FoodId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Body of `POST /foods`: a dish without id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFood {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub available: bool,
}

fn validated_name(name: &str) -> DomainResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::InvalidInput("name must not be empty".to_string()));
    }
    Ok(name.to_string())
}

fn validated_price(price_text: &str) -> DomainResult<f64> {
    parse_price(price_text).ok_or_else(|| {
        DomainError::InvalidInput(format!("price must be a non-negative number, got {:?}", price_text.trim()))
    })
}

/// Add-form payload
#[derive(Debug, Clone, PartialEq)]
pub struct FoodDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
}

impl FoodDraft {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            price,
            image: String::new(),
        }
    }

    /// Validate raw form fields
    pub fn from_form(image: &str, name: &str, price_text: &str, description: &str) -> DomainResult<Self> {
        Ok(Self {
            name: validated_name(name)?,
            description: description.trim().to_string(),
            price: validated_price(price_text)?,
            image: image.trim().to_string(),
        })
    }

    /// New dishes always start out available
    pub fn into_new_food(self) -> NewFood {
        NewFood {
            name: self.name,
            description: self.description,
            price: self.price,
            image: self.image,
            available: true,
        }
    }
}

/// Partial update; present fields win over the record being edited
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub available: Option<bool>,
}

impl FoodPatch {
    /// Validate raw edit-form fields. All four form fields end up set.
    pub fn from_form(image: &str, name: &str, price_text: &str, description: &str) -> DomainResult<Self> {
        let draft = FoodDraft::from_form(image, name, price_text, description)?;
        Ok(Self {
            name: Some(draft.name),
            description: Some(draft.description),
            price: Some(draft.price),
            image: Some(draft.image),
            available: None,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_available(mut self, available: bool) -> Self {
        self.available = Some(available);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge onto `base`. The id is never patched.
    pub fn apply_to(&self, base: &FoodItem) -> FoodItem {
        FoodItem {
            id: base.id.clone(),
            name: self.name.clone().unwrap_or_else(|| base.name.clone()),
            description: self.description.clone().unwrap_or_else(|| base.description.clone()),
            price: self.price.unwrap_or(base.price),
            image: self.image.clone().unwrap_or_else(|| base.image.clone()),
            available: self.available.unwrap_or(base.available),
        }
    }
}
