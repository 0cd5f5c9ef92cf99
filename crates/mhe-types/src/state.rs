// ─────────────────────────────────────────────────────────────────────
// SCPN MHE — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Contracts with the simulation model that feeds the window.
//!
//! The model is external: the buffer only needs its metadata once at
//! initialization and a read-only view of time, controls and sensor data
//! on every step.

use crate::error::{MheError, MheResult};
use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

/// Static model metadata the buffer derives its channel widths from.
pub trait ModelDescription {
    /// Number of control actuators (`nu`).
    fn n_ctrl(&self) -> usize;

    /// Total number of sensor scalars (`nsensordata`).
    fn n_sensor_data(&self) -> usize;

    /// Number of discrete sensor channels (`nsensor`).
    fn n_sensor(&self) -> usize;

    /// Per-channel scalar counts, if the model exposes its sensor layout.
    fn sensor_dims(&self) -> Option<&[usize]> {
        None
    }
}

/// One step's worth of model output. Views may have any stride.
pub trait ModelState {
    fn time(&self) -> f64;
    fn ctrl(&self) -> ArrayView1<'_, f64>;
    fn sensor_data(&self) -> ArrayView1<'_, f64>;
}

/// Plain model metadata. Maps 1:1 to the `model` block of a buffer config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDims {
    pub n_ctrl: usize,
    pub n_sensor_data: usize,
    pub n_sensor: usize,
    /// Optional sensor layout; when present it must have `n_sensor` entries
    /// summing to `n_sensor_data`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensor_dims: Option<Vec<usize>>,
}

impl ModelDims {
    pub fn new(n_ctrl: usize, n_sensor_data: usize, n_sensor: usize) -> Self {
        ModelDims {
            n_ctrl,
            n_sensor_data,
            n_sensor,
            sensor_dims: None,
        }
    }

    /// Build from an explicit per-channel sensor layout.
    pub fn with_sensor_layout(n_ctrl: usize, sensor_dims: Vec<usize>) -> Self {
        ModelDims {
            n_ctrl,
            n_sensor_data: sensor_dims.iter().sum(),
            n_sensor: sensor_dims.len(),
            sensor_dims: Some(sensor_dims),
        }
    }

    /// Copy the metadata out of any model description.
    pub fn from_model<M: ModelDescription + ?Sized>(model: &M) -> Self {
        ModelDims {
            n_ctrl: model.n_ctrl(),
            n_sensor_data: model.n_sensor_data(),
            n_sensor: model.n_sensor(),
            sensor_dims: model.sensor_dims().map(<[usize]>::to_vec),
        }
    }

    pub fn validate(&self) -> MheResult<()> {
        if self.n_ctrl == 0 {
            return Err(MheError::InvalidDimension(
                "n_ctrl must be >= 1".to_string(),
            ));
        }
        if self.n_sensor_data == 0 {
            return Err(MheError::InvalidDimension(
                "n_sensor_data must be >= 1".to_string(),
            ));
        }
        if self.n_sensor == 0 {
            return Err(MheError::InvalidDimension(
                "n_sensor must be >= 1".to_string(),
            ));
        }
        // every sensor channel contributes at least one scalar
        if self.n_sensor > self.n_sensor_data {
            return Err(MheError::InvalidDimension(format!(
                "n_sensor ({}) exceeds n_sensor_data ({})",
                self.n_sensor, self.n_sensor_data
            )));
        }
        if let Some(dims) = &self.sensor_dims {
            if dims.len() != self.n_sensor {
                return Err(MheError::InvalidDimension(format!(
                    "sensor layout has {} channels, model declares {}",
                    dims.len(),
                    self.n_sensor
                )));
            }
            if let Some(i) = dims.iter().position(|&d| d == 0) {
                return Err(MheError::InvalidDimension(format!(
                    "sensor channel {i} has zero width"
                )));
            }
            let total: usize = dims.iter().sum();
            if total != self.n_sensor_data {
                return Err(MheError::InvalidDimension(format!(
                    "sensor layout sums to {}, model declares n_sensor_data={}",
                    total, self.n_sensor_data
                )));
            }
        }
        Ok(())
    }
}

impl ModelDescription for ModelDims {
    fn n_ctrl(&self) -> usize {
        self.n_ctrl
    }

    fn n_sensor_data(&self) -> usize {
        self.n_sensor_data
    }

    fn n_sensor(&self) -> usize {
        self.n_sensor
    }

    fn sensor_dims(&self) -> Option<&[usize]> {
        self.sensor_dims.as_deref()
    }
}

/// Owned snapshot of one simulation step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepState {
    pub time: f64,
    pub ctrl: Array1<f64>,       // [n_ctrl]
    pub sensordata: Array1<f64>, // [n_sensor_data]
}

impl StepState {
    pub fn new(time: f64, ctrl: Array1<f64>, sensordata: Array1<f64>) -> Self {
        StepState {
            time,
            ctrl,
            sensordata,
        }
    }

    /// Zero-valued state sized for `dims`.
    pub fn zeros(dims: &ModelDims) -> Self {
        StepState {
            time: 0.0,
            ctrl: Array1::zeros(dims.n_ctrl),
            sensordata: Array1::zeros(dims.n_sensor_data),
        }
    }
}

impl ModelState for StepState {
    fn time(&self) -> f64 {
        self.time
    }

    fn ctrl(&self) -> ArrayView1<'_, f64> {
        self.ctrl.view()
    }

    fn sensor_data(&self) -> ArrayView1<'_, f64> {
        self.sensordata.view()
    }
}
