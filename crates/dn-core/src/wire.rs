//! Lenient field decoders for API payloads.
//!
//! The API sends `null` for scalars it has no value for. Decoding replaces an
//! entity wholesale, so a `null` has to land on the field's default instead of
//! failing the whole response.

use serde::{Deserialize, Deserializer};

/// Decodes `null` as `T::default()`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decodes a string or a number into text; `null` becomes empty.
pub fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Text {
        Str(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Option::<Text>::deserialize(deserializer)? {
        None => String::new(),
        Some(Text::Str(s)) => s,
        Some(Text::Int(n)) => n.to_string(),
        Some(Text::Float(n)) => n.to_string(),
    })
}

/// Decodes an optional id, treating `0` and `null` as absent.
pub fn optional_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = Option::<u64>::deserialize(deserializer)?;
    Ok(id.filter(|id| *id != 0))
}
