//! Pressure sweep generation.
//!
//! A sweep is the pressure axis of a boiling curve: the pressures at which a
//! molecule's boiling point is evaluated for plotting or tabulation.

use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SweepError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Type of sweep progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum SweepType {
    /// Uniformly spaced points
    #[default]
    Linear,
    /// Logarithmically spaced points
    Logarithmic,
}

/// Pressures from `start_torr` to `end_torr`, both included.
#[derive(Debug, Clone, PartialEq)]
pub struct PressureSweep {
    start_torr: f64,
    end_torr: f64,
    num_points: usize,
    sweep_type: SweepType,
}

impl PressureSweep {
    pub fn new(
        start_torr: f64,
        end_torr: f64,
        num_points: usize,
        sweep_type: SweepType,
    ) -> Result<Self, SweepError> {
        for (label, value) in [("start", start_torr), ("end", end_torr)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SweepError::InvalidConfiguration(format!(
                    "Sweep {} pressure must be positive and finite, got {}",
                    label, value
                )));
            }
        }

        if num_points < 2 {
            return Err(SweepError::InvalidConfiguration(
                "Sweep must have at least 2 points".to_string(),
            ));
        }

        if (start_torr - end_torr).abs() < 1e-12 {
            return Err(SweepError::InvalidConfiguration(
                "Start and end values must be different".to_string(),
            ));
        }

        Ok(Self {
            start_torr,
            end_torr,
            num_points,
            sweep_type,
        })
    }

    pub fn start_torr(&self) -> f64 {
        self.start_torr
    }

    pub fn end_torr(&self) -> f64 {
        self.end_torr
    }

    pub fn num_points(&self) -> usize {
        self.num_points
    }

    pub fn sweep_type(&self) -> SweepType {
        self.sweep_type
    }

    /// Generate all points in the sweep.
    pub fn generate_points(&self) -> Vec<f64> {
        match self.sweep_type {
            SweepType::Linear => self.generate_linear(),
            SweepType::Logarithmic => self.generate_logarithmic(),
        }
    }

    fn generate_linear(&self) -> Vec<f64> {
        let delta = (self.end_torr - self.start_torr) / (self.num_points - 1) as f64;
        let mut points: Vec<f64> = (0..self.num_points)
            .map(|i| self.start_torr + i as f64 * delta)
            .collect();

        // Ensure exact endpoint
        points[self.num_points - 1] = self.end_torr;
        points
    }

    fn generate_logarithmic(&self) -> Vec<f64> {
        let log_start = self.start_torr.ln();
        let log_delta = (self.end_torr.ln() - log_start) / (self.num_points - 1) as f64;
        let mut points: Vec<f64> = (0..self.num_points)
            .map(|i| (log_start + i as f64 * log_delta).exp())
            .collect();

        points[0] = self.start_torr;
        points[self.num_points - 1] = self.end_torr;
        points
    }
}

impl fmt::Display for SweepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::Logarithmic => write!(f, "Logarithmic"),
        }
    }
}

impl fmt::Display for PressureSweep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sweep pressure from {} to {} Torr ({} points, {})",
            self.start_torr, self.end_torr, self.num_points, self.sweep_type
        )
    }
}
