//! History list and fill-level chart

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::timestamp::{format_date_time, format_time_of_day, normalize};
use crate::models::HistoryPoint;

use super::alerts::one_decimal;

pub const NO_HISTORY: &str = "No history data available";
pub const CHART_UNAVAILABLE: &str = "Charts are not available in this browser. Please refresh the page.";
pub const CHART_FAILED: &str = "Error creating chart. Please try again.";

/// Upper bound of the y axis
pub const Y_MAX: f64 = 100.0;
const Y_TICK_STEP: f64 = 20.0;

/// One line of the history list
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub time: String,
    pub gallons: String,
    pub fill: String,
}

impl HistoryRow {
    pub fn from_point(point: &HistoryPoint) -> Self {
        Self {
            time: format_date_time(point.timestamp.as_ref()),
            gallons: format!("{:.0} gallons", point.gallons),
            fill: format!("{}%", one_decimal(Some(point.fill_percentage))),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("no points to plot")]
    Empty,
    #[error("non-finite fill value at point {0}")]
    NonFinite(usize),
}

/// Axis tick at a relative position (0.0 = start of the axis, 1.0 = end)
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub position: f64,
    pub label: String,
}

/// Line chart of fill percentage over time, oldest point first
#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
}

impl ChartModel {
    /// Build from points in fetch order (newest first). Points without a usable
    /// timestamp are labelled with `now`.
    pub fn build(
        points: &[HistoryPoint],
        max_x_ticks: usize,
        now: DateTime<Utc>,
    ) -> Result<Self, ChartError> {
        if points.is_empty() {
            return Err(ChartError::Empty);
        }

        let chronological: Vec<&HistoryPoint> = points.iter().rev().collect();

        if let Some(index) = chronological
            .iter()
            .position(|p| !p.fill_percentage.is_finite())
        {
            return Err(ChartError::NonFinite(index));
        }

        let labels: Vec<String> = chronological
            .iter()
            .map(|p| format_time_of_day(normalize(p.timestamp.as_ref()).unwrap_or(now)))
            .collect();
        let values: Vec<f64> = chronological.iter().map(|p| p.fill_percentage).collect();

        let x_ticks = tick_indices(labels.len(), max_x_ticks)
            .into_iter()
            .map(|i| AxisTick {
                position: x_position(i, labels.len()),
                label: labels[i].clone(),
            })
            .collect();

        Ok(Self {
            labels,
            values,
            x_ticks,
            y_ticks: y_ticks(),
        })
    }

    /// SVG polyline `points` attribute for a plot area of the given size
    pub fn polyline(&self, width: f64, height: f64) -> String {
        self.values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let x = x_position(i, self.values.len()) * width;
                let y = height - (v.clamp(0.0, Y_MAX) / Y_MAX) * height;
                format!("{:.1},{:.1}", x, y)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn x_position(index: usize, len: usize) -> f64 {
    if len <= 1 {
        0.5
    } else {
        index as f64 / (len - 1) as f64
    }
}

/// Evenly spaced label indices, always including the first and last point
fn tick_indices(len: usize, max_ticks: usize) -> Vec<usize> {
    let max_ticks = max_ticks.max(1);
    if len <= max_ticks {
        return (0..len).collect();
    }
    if max_ticks == 1 {
        return vec![0];
    }

    let mut indices: Vec<usize> = (0..max_ticks)
        .map(|i| ((i * (len - 1)) as f64 / (max_ticks - 1) as f64).round() as usize)
        .collect();
    indices.dedup();
    indices
}

fn y_ticks() -> Vec<AxisTick> {
    let steps = (Y_MAX / Y_TICK_STEP) as usize;
    (0..=steps)
        .map(|i| {
            let value = i as f64 * Y_TICK_STEP;
            AxisTick {
                position: value / Y_MAX,
                label: format!("{}%", value),
            }
        })
        .collect()
}

/// A built chart; each rebuild gets a new id
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryChart {
    pub id: u64,
    pub model: ChartModel,
}

/// Holds at most one live chart
#[derive(Debug, Default)]
pub struct ChartSlot {
    current: Option<HistoryChart>,
    next_id: u64,
}

impl ChartSlot {
    /// Dispose the current chart (if any) and install a new one
    pub fn replace(&mut self, model: ChartModel) -> HistoryChart {
        self.dispose();
        self.next_id += 1;
        let chart = HistoryChart {
            id: self.next_id,
            model,
        };
        self.current = Some(chart.clone());
        chart
    }

    pub fn dispose(&mut self) {
        if let Some(old) = self.current.take() {
            log::debug!("Disposing history chart #{}", old.id);
        }
    }

    pub fn current(&self) -> Option<&HistoryChart> {
        self.current.as_ref()
    }
}

/// Chart half of the history panel
#[derive(Debug, Clone, PartialEq)]
pub enum ChartState {
    Ready(HistoryChart),
    Unavailable,
    Failed,
}

impl ChartState {
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            ChartState::Ready(_) => None,
            ChartState::Unavailable => Some(CHART_UNAVAILABLE),
            ChartState::Failed => Some(CHART_FAILED),
        }
    }
}

/// Contents of the history modal
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryPanel {
    Empty,
    Loaded {
        /// Newest first, as fetched
        rows: Vec<HistoryRow>,
        chart: ChartState,
    },
}

impl HistoryPanel {
    pub fn build(
        points: &[HistoryPoint],
        charts_supported: bool,
        slot: &mut ChartSlot,
        max_x_ticks: usize,
        now: DateTime<Utc>,
    ) -> Self {
        if points.is_empty() {
            slot.dispose();
            return HistoryPanel::Empty;
        }

        let rows = points.iter().map(HistoryRow::from_point).collect();

        let chart = if !charts_supported {
            log::warn!("Chart rendering not supported, showing history list only");
            slot.dispose();
            ChartState::Unavailable
        } else {
            match ChartModel::build(points, max_x_ticks, now) {
                Ok(model) => ChartState::Ready(slot.replace(model)),
                Err(e) => {
                    log::error!("Error creating chart: {}", e);
                    slot.dispose();
                    ChartState::Failed
                }
            }
        };

        HistoryPanel::Loaded { rows, chart }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawTimestamp;

    fn point(seconds: i64, fill: f64, gallons: f64) -> HistoryPoint {
        HistoryPoint {
            id: None,
            timestamp: Some(RawTimestamp::EpochSeconds {
                seconds: seconds as f64,
                nanoseconds: 0,
            }),
            fill_percentage: fill,
            gallons,
        }
    }

    fn newest_first() -> Vec<HistoryPoint> {
        vec![
            point(1_700_000_600, 40.0, 200.0),
            point(1_700_000_300, 45.0, 225.0),
            point(1_700_000_000, 50.0, 250.0),
        ]
    }

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_001_000, 0).unwrap()
    }

    #[test]
    fn row_formatting() {
        let row = HistoryRow::from_point(&point(1_700_000_000, 62.345, 311.6));
        assert_eq!(row.gallons, "312 gallons");
        assert_eq!(row.fill, "62.3%");
        assert_ne!(row.time, "Unknown");

        let row = HistoryRow::from_point(&HistoryPoint::default());
        assert_eq!(row.time, "Unknown");
        assert_eq!(row.fill, "0%");
    }

    #[test]
    fn chart_is_chronological() {
        let model = ChartModel::build(&newest_first(), 8, now()).unwrap();
        assert_eq!(model.values, vec![50.0, 45.0, 40.0]);
        let first = format_time_of_day(DateTime::from_timestamp(1_700_000_000, 0).unwrap());
        let last = format_time_of_day(DateTime::from_timestamp(1_700_000_600, 0).unwrap());
        assert_eq!(model.labels.first(), Some(&first));
        assert_eq!(model.labels.last(), Some(&last));
    }

    #[test]
    fn list_stays_newest_first_while_chart_reverses() {
        let points = newest_first();
        let mut slot = ChartSlot::default();
        let panel = HistoryPanel::build(&points, true, &mut slot, 8, now());

        let HistoryPanel::Loaded { rows, chart } = panel else {
            panic!("expected loaded panel");
        };
        assert_eq!(rows[0].fill, "40.0%");
        assert_eq!(rows[2].fill, "50.0%");
        let ChartState::Ready(chart) = chart else {
            panic!("expected chart");
        };
        assert_eq!(chart.model.values.first(), Some(&50.0));
        assert_eq!(chart.model.values.last(), Some(&40.0));
    }

    #[test]
    fn y_axis_is_fixed_percent_scale() {
        let model = ChartModel::build(&newest_first(), 8, now()).unwrap();
        let labels: Vec<&str> = model.y_ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["0%", "20%", "40%", "60%", "80%", "100%"]);
        assert_eq!(model.y_ticks.last().unwrap().position, 1.0);
    }

    #[test]
    fn x_ticks_are_capped() {
        let points: Vec<HistoryPoint> = (0..100)
            .map(|i| point(1_700_000_000 + i * 60, 50.0, 250.0))
            .collect();
        let model = ChartModel::build(&points, 8, now()).unwrap();
        assert_eq!(model.x_ticks.len(), 8);
        assert_eq!(model.x_ticks.first().unwrap().position, 0.0);
        assert_eq!(model.x_ticks.last().unwrap().position, 1.0);
        assert_eq!(&model.x_ticks[0].label, model.labels.first().unwrap());
        assert_eq!(&model.x_ticks[7].label, model.labels.last().unwrap());
    }

    #[test]
    fn tick_indices_small_series() {
        assert_eq!(tick_indices(3, 8), vec![0, 1, 2]);
        assert_eq!(tick_indices(0, 8), Vec::<usize>::new());
        assert_eq!(tick_indices(5, 1), vec![0]);
        assert_eq!(tick_indices(10, 2), vec![0, 9]);
    }

    #[test]
    fn missing_timestamp_labelled_with_now() {
        let points = vec![HistoryPoint {
            fill_percentage: 30.0,
            ..Default::default()
        }];
        let model = ChartModel::build(&points, 8, now()).unwrap();
        assert_eq!(model.labels, vec![format_time_of_day(now())]);
        assert_eq!(model.x_ticks[0].position, 0.5);
    }

    #[test]
    fn polyline_maps_values_to_plot_area() {
        let points = vec![point(2, 100.0, 0.0), point(1, 0.0, 0.0)];
        let model = ChartModel::build(&points, 8, now()).unwrap();
        assert_eq!(model.polyline(200.0, 100.0), "0.0,100.0 200.0,0.0");
    }

    #[test]
    fn non_finite_values_fail() {
        let points = vec![point(1, f64::NAN, 0.0)];
        assert_eq!(
            ChartModel::build(&points, 8, now()),
            Err(ChartError::NonFinite(0))
        );

        let mut slot = ChartSlot::default();
        let panel = HistoryPanel::build(&points, true, &mut slot, 8, now());
        let HistoryPanel::Loaded { chart, .. } = panel else {
            panic!("expected loaded panel");
        };
        assert_eq!(chart.placeholder(), Some(CHART_FAILED));
    }

    #[test]
    fn slot_disposes_previous_chart() {
        let mut slot = ChartSlot::default();
        let first = slot.replace(ChartModel::build(&newest_first(), 8, now()).unwrap());
        let second = slot.replace(ChartModel::build(&newest_first(), 8, now()).unwrap());
        assert_ne!(first.id, second.id);
        assert_eq!(slot.current().map(|c| c.id), Some(second.id));

        slot.dispose();
        assert!(slot.current().is_none());
    }

    #[test]
    fn degrades_to_list_without_chart_support() {
        let mut slot = ChartSlot::default();
        let panel = HistoryPanel::build(&newest_first(), false, &mut slot, 8, now());
        let HistoryPanel::Loaded { rows, chart } = panel else {
            panic!("expected loaded panel");
        };
        assert_eq!(rows.len(), 3);
        assert_eq!(chart, ChartState::Unavailable);
        assert_eq!(chart.placeholder(), Some(CHART_UNAVAILABLE));
        assert!(slot.current().is_none());
    }

    #[test]
    fn empty_history() {
        let mut slot = ChartSlot::default();
        slot.replace(ChartModel::build(&newest_first(), 8, now()).unwrap());
        let panel = HistoryPanel::build(&[], true, &mut slot, 8, now());
        assert_eq!(panel, HistoryPanel::Empty);
        assert!(slot.current().is_none());
    }
}
