use serde::{Deserialize, Serialize};

use super::number::zero_if_null;
use super::RawTimestamp;

/// One stored reading in the tank history
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<RawTimestamp>,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub fill_percentage: f64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub gallons: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mixed_timestamp_shapes() {
        let json = r#"[
            {"id": "c", "timestamp": "Tue, 14 Nov 2023 22:13:20 GMT", "fill_percentage": 50.0, "gallons": 250},
            {"id": "b", "timestamp": {"seconds": 1699990000}, "fill_percentage": 55.0, "gallons": 275},
            {"id": "a", "timestamp": {"_seconds": 1699980000, "_nanoseconds": 0}, "fill_percentage": 60.0, "gallons": 300}
        ]"#;

        let points: Vec<HistoryPoint> = serde_json::from_str(json).unwrap();
        assert_eq!(points.len(), 3);
        assert!(points.iter().all(|p| p.timestamp.is_some()));
        assert!(matches!(
            points[1].timestamp,
            Some(RawTimestamp::EpochSeconds { .. })
        ));
        assert!(matches!(
            points[2].timestamp,
            Some(RawTimestamp::DateLike { .. })
        ));
    }

    #[test]
    fn tolerates_missing_values() {
        let point: HistoryPoint = serde_json::from_str(r#"{"timestamp": null}"#).unwrap();
        assert!(point.timestamp.is_none());
        assert_eq!(point.fill_percentage, 0.0);
        assert_eq!(point.gallons, 0.0);
    }

    #[test]
    fn null_values_read_as_zero() {
        let point: HistoryPoint =
            serde_json::from_str(r#"{"fill_percentage": null, "gallons": null}"#).unwrap();
        assert_eq!(point.fill_percentage, 0.0);
        assert_eq!(point.gallons, 0.0);
    }
}
