//! Contains utilities for holding & presenting measurements

use std::{
    fmt::Display,
    time::Duration,
};
use once_cell::sync::Lazy;

/// := (threshold, scale, unit, format)
type AutoScaleEntry = (f64, f64, &'static str, &'static str);

/// Holds and present measurements with auto-scaling units
pub struct PresentableMeasurement {
    pub(crate) value: f64,
    /// the quantity's own unit, placed before the auto-scaled suffix -- "ops" in "ops/s"
    custom_unit: &'static str,
    auto_scale: &'static [AutoScaleEntry],
}

impl Display for PresentableMeasurement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (scaled_value, suffix, format) = self.auto_scale.iter()
            .find(|&&(threshold, _, _, _)| self.value >= threshold)
            .map_or(
                (self.value, "<missing_unit_suffix_please_fix>", ":.2"),
                |&(_threshold, rate, suffix, format)| (self.value / rate, suffix, format));
        let unit = self.custom_unit;
        match format {
            ":.0"  => write!(f, "{:.0}{unit}{suffix}",  scaled_value),
            ":.2"  => write!(f, "{:.2}{unit}{suffix}",  scaled_value),
            ":.3e" => write!(f, "{:.3e}{unit}{suffix}", scaled_value),
            _ => panic!("Unknown format '{format}'. Please update this code")
        }
    }
}

/// Builds a [PresentableMeasurement] able to display & auto-scale
/// quantities representing "a duration".
pub fn duration_measurement(duration: Duration) -> PresentableMeasurement {
    static AUTO_SCALE_DATA: Lazy<Vec<AutoScaleEntry>> = Lazy::new(|| {
        [
            (1.0,  "s",  ":.2"),
            (1e-3, "ms", ":.2"),
            (1e-6, "µs", ":.2"),
            (1e-9, "ns", ":.0"),
            (0.0,  "ns", ":.0"),
        ]
        .into_iter()
        .map(|(threshold, suffix, format)| (
            threshold,
            if threshold != 0.0 { threshold } else { 1e-9 },
            suffix,
            format
        ))
        .collect()
    });

    PresentableMeasurement {
        value: duration.as_secs_f64(),
        custom_unit: "",
        auto_scale: AUTO_SCALE_DATA.as_slice(),
    }
}

/// Builds a [PresentableMeasurement] able to display & auto-scale
/// quantities representing "a rate of `custom_unit` quantities per second".
pub fn rate_measurement(value: f64, custom_unit: &'static str) -> PresentableMeasurement {
    static AUTO_SCALE_DATA: Lazy<Vec<AutoScaleEntry>> = Lazy::new(|| {
        vec![
            (100_000.0,  1.0,        "/s",   ":.3e"),
            (       1.0, 1.0,        "/s",   ":.2"),
            (  1.0/60.0, 1.0/60.0,   "/min", ":.2"),
            (1.0/3600.0, 1.0/3600.0, "/hr",  ":.2"),
            (       0.0, 1.0,        "/s",   ":.0"),
        ]
    });

    PresentableMeasurement {
        value,
        custom_unit,
        auto_scale: AUTO_SCALE_DATA.as_slice(),
    }
}
