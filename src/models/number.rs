//! Lenient numeric fields: `null` reads as zero, integers accept any JSON number

use serde::{Deserialize, Deserializer};

pub(crate) fn zero_if_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn rounded_or_zero<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?
        .map(|v| v.round() as i32)
        .unwrap_or_default())
}
