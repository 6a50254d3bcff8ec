//! Mocked dashboard preview data and its line chart geometry

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewMetric {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewContent {
    pub metrics: Vec<PreviewMetric>,
    pub series: Vec<SeriesPoint>,
    pub statuses: Vec<String>,
}

/// Drawing area of the chart in SVG user units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartBox {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl ChartBox {
    pub fn new(width: f64, height: f64, padding: f64) -> Self {
        Self { width, height, padding }
    }

    fn inner_width(&self) -> f64 {
        (self.width - 2.0 * self.padding).max(0.0)
    }

    fn inner_height(&self) -> f64 {
        (self.height - 2.0 * self.padding).max(0.0)
    }
}

impl PreviewContent {
    /// Lowest and highest value in the series
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut values = self.series.iter().map(|p| p.value);
        let first = values.next()?;
        Some(values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }

    /// Project the series into `chart`, evenly spaced on x with the maximum
    /// at the top edge. A flat series sits at mid-height.
    pub fn chart_points(&self, chart: &ChartBox) -> Vec<(f64, f64)> {
        let Some((lo, hi)) = self.value_range() else {
            return Vec::new();
        };
        let n = self.series.len();
        let step = if n > 1 {
            chart.inner_width() / (n - 1) as f64
        } else {
            0.0
        };

        self.series
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let x = if n > 1 {
                    chart.padding + step * i as f64
                } else {
                    chart.width / 2.0
                };
                let y = if hi > lo {
                    chart.padding + (hi - point.value) / (hi - lo) * chart.inner_height()
                } else {
                    chart.height / 2.0
                };
                (x, y)
            })
            .collect()
    }

    /// `points` attribute for an SVG polyline
    pub fn polyline(&self, chart: &ChartBox) -> String {
        self.chart_points(chart)
            .iter()
            .map(|(x, y)| format!("{:.1},{:.1}", x, y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> PreviewContent {
        PreviewContent {
            metrics: Vec::new(),
            series: values
                .iter()
                .enumerate()
                .map(|(i, v)| SeriesPoint { label: format!("t{}", i), value: *v })
                .collect(),
            statuses: Vec::new(),
        }
    }

    #[test]
    fn test_value_range() {
        assert_eq!(series(&[85.0, 95.0, 88.0]).value_range(), Some((85.0, 95.0)));
        assert_eq!(series(&[]).value_range(), None);
    }

    #[test]
    fn test_points_span_box() {
        let chart = ChartBox::new(600.0, 240.0, 20.0);
        let points = series(&[85.0, 95.0, 90.0]).chart_points(&chart);

        assert_eq!(points[0], (20.0, 220.0));
        assert_eq!(points[1], (300.0, 20.0));
        assert_eq!(points[2], (580.0, 120.0));
    }

    #[test]
    fn test_points_stay_inside_box() {
        let chart = ChartBox::new(400.0, 200.0, 10.0);
        for (x, y) in series(&[85.0, 88.0, 95.0, 92.0, 87.0, 89.0, 91.0]).chart_points(&chart) {
            assert!((10.0..=390.0).contains(&x));
            assert!((10.0..=190.0).contains(&y));
        }
    }

    #[test]
    fn test_flat_and_single_series() {
        let chart = ChartBox::new(100.0, 50.0, 5.0);
        let flat = series(&[7.0, 7.0]).chart_points(&chart);
        assert!(flat.iter().all(|(_, y)| *y == 25.0));

        let single = series(&[3.0]).chart_points(&chart);
        assert_eq!(single, vec![(50.0, 25.0)]);
    }

    #[test]
    fn test_polyline_format() {
        let chart = ChartBox::new(100.0, 50.0, 0.0);
        assert_eq!(series(&[0.0, 1.0]).polyline(&chart), "0.0,50.0 100.0,0.0");
        assert_eq!(series(&[]).polyline(&chart), "");
    }
}
