//! Loosely-typed upstream payload as returned by the scraping collaborator.
//!
//! The upstream service is inconsistent about shapes: nested collections arrive either as a
//! single object or as an array, and identifiers and quantities arrive as numbers or strings.
//! These types absorb that variance so the normalizer only sees one shape.

use serde::Deserialize;

/// A field that upstream sends either as a single object or as an array of objects.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(item) => vec![item],
            Self::Many(items) => items,
        }
    }
}

/// A number that upstream sends as an integer, a float or a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FlexNumber {
    Int(i64),
    Float(f64),
    Text(String),
}

impl FlexNumber {
    /// Integer value, if the number is integral.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            Self::Float(value) if value.fract() == 0.0 => Some(*value as i64),
            Self::Float(_) => None,
            Self::Text(text) => {
                let text = text.trim();
                text.parse::<i64>().ok().or_else(|| {
                    text.parse::<f64>()
                        .ok()
                        .filter(|value| value.fract() == 0.0)
                        .map(|value| value as i64)
                })
            }
        }
    }
}

/// One series-level availability item.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSeries {
    pub item_id: FlexNumber,
    pub item_id2: Option<FlexNumber>,
    #[serde(default)]
    pub item_name: String,
    pub type_name: Option<String>,
    pub subject: Option<String>,
    pub is_private: Option<bool>,
    #[serde(rename = "reservation")]
    pub reservations: Option<OneOrMany<RawReservation>>,
}

impl RawSeries {
    pub fn reservation_count(&self) -> usize {
        self.reservations.as_ref().map_or(0, OneOrMany::len)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReservation {
    pub reservation_id: Option<FlexNumber>,
    pub reservation_start_dt: Option<String>,
    pub reservation_end_dt: Option<String>,
    #[serde(rename = "space")]
    pub spaces: Option<OneOrMany<RawSpace>>,
    #[serde(rename = "resource")]
    pub resources: Option<OneOrMany<RawResource>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSpace {
    pub space_id: Option<FlexNumber>,
    pub space_name: Option<String>,
    pub formal_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawResource {
    #[serde(default)]
    pub resource_name: String,
    pub quantity: Option<FlexNumber>,
    pub instructions: Option<String>,
}
