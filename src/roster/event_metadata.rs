//! Static description of the event.

use serde::{Deserialize, Deserializer};

/// Description of the event printed at the top of every roster.
///
/// Loaded once from the `event` section of the configuration and never mutated.
/// Every field is free text; missing fields fall back to a placeholder. Values
/// written as numbers or booleans (`capacity: 12`) are kept as their text.
///
/// # YAML Section
///
/// ```yaml
/// event:
///   date: "Saturday 12 October"
///   time: "19:00"
///   place: "Central park"
///   capacity: "12"
///   price: "5 EUR"
///   description: "Friendly match, bring water."
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EventMetadata {
    /// Day of the event
    #[serde(default = "not_specified", deserialize_with = "free_text")]
    pub date: String,
    /// Start time
    #[serde(default = "not_specified", deserialize_with = "free_text")]
    pub time: String,
    /// Venue
    #[serde(default = "not_specified", deserialize_with = "free_text")]
    pub place: String,
    /// Number of players wanted
    #[serde(default = "not_specified", deserialize_with = "free_text")]
    pub capacity: String,
    /// Participation fee
    #[serde(default = "not_specified", deserialize_with = "free_text")]
    pub price: String,
    /// Free text shown under the details block
    #[serde(default = "no_description", deserialize_with = "free_text")]
    pub description: String,
}

impl Default for EventMetadata {
    fn default() -> Self {
        EventMetadata {
            date: not_specified(),
            time: not_specified(),
            place: not_specified(),
            capacity: not_specified(),
            price: not_specified(),
            description: no_description(),
        }
    }
}

/// Scalar accepted where free text is expected.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Bool(bool),
}

fn free_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Scalar::deserialize(deserializer)? {
        Scalar::Text(text) => text,
        Scalar::Unsigned(number) => number.to_string(),
        Scalar::Signed(number) => number.to_string(),
        Scalar::Float(number) => number.to_string(),
        Scalar::Bool(value) => value.to_string(),
    };
    Ok(text)
}

fn not_specified() -> String {
    "Not specified".to_owned()
}

fn no_description() -> String {
    "No event description.".to_owned()
}
