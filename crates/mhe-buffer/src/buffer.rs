// ─────────────────────────────────────────────────────────────────────
// SCPN MHE — Sliding Window Buffer
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Fixed-capacity history of (time, ctrl, sensor, mask) tuples for
//! moving-horizon estimation.
//!
//! Four channels share one length. While the window is filling, each
//! update appends; once it holds `max_length` entries, each update drops
//! the oldest entry from every channel and writes the new tuple into the
//! freed tail slot. Capacity is exactly `max_length`.
//!
//! All mutation goes through [`SlidingWindowBuffer`]; callers only get
//! shared references to the channels, so lengths cannot drift apart.

use crate::channel::TimeSeriesChannel;
use crate::mask::{MaskPolicy, SensorMask};
use log::{debug, trace, warn};
use mhe_types::config::BufferConfig;
use mhe_types::constants::TIME_DIM;
use mhe_types::error::{MheError, MheResult};
use mhe_types::state::{ModelDescription, ModelDims, ModelState};
use ndarray::ArrayView1;

/// Fill state of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferPhase {
    /// `len() < max_length`: updates append.
    Filling,
    /// `len() == max_length`: updates evict the oldest entry.
    Full,
}

/// Borrowed view of one synchronized tuple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowEntry<'a> {
    pub time: f64,
    pub ctrl: &'a [f64],
    pub sensor: &'a [f64],
    pub mask: &'a [u8],
}

/// Sliding window of estimator inputs.
#[derive(Debug, Clone)]
pub struct SlidingWindowBuffer {
    time: TimeSeriesChannel<f64>,
    ctrl: TimeSeriesChannel<f64>,
    sensor: TimeSeriesChannel<f64>,
    sensor_mask: TimeSeriesChannel<u8>,
    mask: SensorMask,
    dims: ModelDims,
    /// Start offset of each sensor channel within a sensor entry.
    sensor_offsets: Option<Vec<usize>>,
    max_length: usize,
}

impl SlidingWindowBuffer {
    /// Size every channel from the model metadata.
    pub fn new<M: ModelDescription + ?Sized>(model: &M, max_length: usize) -> MheResult<Self> {
        if max_length == 0 {
            return Err(MheError::InvalidCapacity { max_length });
        }
        let dims = ModelDims::from_model(model);
        dims.validate()?;

        let sensor_offsets = dims.sensor_dims.as_ref().map(|widths| {
            widths
                .iter()
                .scan(0, |acc, &w| {
                    let start = *acc;
                    *acc += w;
                    Some(start)
                })
                .collect::<Vec<usize>>()
        });

        debug!(
            "sliding window: max_length={}, nu={}, nsensordata={}, nsensor={}",
            max_length, dims.n_ctrl, dims.n_sensor_data, dims.n_sensor
        );

        Ok(Self {
            time: TimeSeriesChannel::new(TIME_DIM, max_length)?,
            ctrl: TimeSeriesChannel::new(dims.n_ctrl, max_length)?,
            sensor: TimeSeriesChannel::new(dims.n_sensor_data, max_length)?,
            sensor_mask: TimeSeriesChannel::new(dims.n_sensor, max_length)?,
            mask: SensorMask::all_valid(dims.n_sensor),
            dims,
            sensor_offsets,
            max_length,
        })
    }

    pub fn from_config(config: &BufferConfig) -> MheResult<Self> {
        Self::new(&config.model, config.max_length)
    }

    /// Empty every channel and mark all sensors valid again.
    pub fn reset(&mut self) {
        debug!("sliding window reset (dropping {} entries)", self.len());
        self.time.reset();
        self.ctrl.reset();
        self.sensor.reset();
        self.sensor_mask.reset();
        self.mask.fill_valid();
    }

    /// Record one step. Appends while filling, evicts the oldest entry
    /// once full. A state with the wrong dimensions is rejected and the
    /// window is left untouched.
    pub fn update<S: ModelState + ?Sized>(&mut self, state: &S) -> MheResult<()> {
        let ctrl = state.ctrl();
        let sensordata = state.sensor_data();
        if let Err(e) = self.check_state(ctrl.len(), sensordata.len()) {
            warn!("sliding window rejected update at t={:.4}: {e}", state.time());
            return Err(e);
        }
        let time = [state.time()];

        match self.phase() {
            BufferPhase::Filling => {
                self.time.push(&time)?;
                self.ctrl.push_view(ctrl)?;
                self.sensor.push_view(sensordata)?;
                self.sensor_mask.push(self.mask.as_slice())?;
                if self.is_full() {
                    debug!(
                        "sliding window full at t={:.4}; switching to shift mode",
                        time[0]
                    );
                }
            }
            BufferPhase::Full => {
                let tail = self.max_length - 1;
                self.time.shift_head(1)?;
                self.time.set(&time, tail)?;
                self.ctrl.shift_head(1)?;
                self.ctrl.set_view(ctrl, tail)?;
                self.sensor.shift_head(1)?;
                self.sensor.set_view(sensordata, tail)?;
                self.sensor_mask.shift_head(1)?;
                self.sensor_mask.set(self.mask.as_slice(), tail)?;
            }
        }

        trace!("sliding window update: t={:.4}, length={}", time[0], self.len());
        Ok(())
    }

    /// Let the estimator's policy recompute the mask applied to the next
    /// update. Entries already in the window keep their masks.
    pub fn update_mask<P: MaskPolicy + ?Sized>(&mut self, policy: &mut P) -> MheResult<()> {
        policy.update_mask(&mut self.mask)?;
        trace!(
            "sensor mask updated: {}/{} valid",
            self.mask.count_valid(),
            self.mask.len()
        );
        Ok(())
    }

    /// Replace the mask applied to the next update.
    pub fn set_mask(&mut self, flags: &[u8]) -> MheResult<()> {
        self.mask.assign(flags)
    }

    /// Number of valid entries. The time channel is the reference.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.time.len() == self.max_length
    }

    pub fn phase(&self) -> BufferPhase {
        if self.is_full() {
            BufferPhase::Full
        } else {
            BufferPhase::Filling
        }
    }

    pub fn capacity(&self) -> usize {
        self.max_length
    }

    pub fn dims(&self) -> &ModelDims {
        &self.dims
    }

    pub fn current_mask(&self) -> &SensorMask {
        &self.mask
    }

    pub fn time(&self, index: usize) -> MheResult<f64> {
        Ok(self.time.entry(index)?[0])
    }

    pub fn ctrl(&self, index: usize) -> MheResult<ArrayView1<'_, f64>> {
        self.ctrl.get(index)
    }

    pub fn sensor(&self, index: usize) -> MheResult<ArrayView1<'_, f64>> {
        self.sensor.get(index)
    }

    pub fn sensor_mask(&self, index: usize) -> MheResult<ArrayView1<'_, u8>> {
        self.sensor_mask.get(index)
    }

    /// Scalars of one sensor channel at entry `index`. Needs the model's
    /// sensor layout; without it every channel's width is unknown.
    pub fn sensor_block(&self, index: usize, channel: usize) -> MheResult<&[f64]> {
        let (offsets, widths) = match (&self.sensor_offsets, &self.dims.sensor_dims) {
            (Some(offsets), Some(widths)) => (offsets, widths),
            _ => {
                return Err(MheError::ConfigError(
                    "model does not expose a sensor layout".to_string(),
                ))
            }
        };
        if channel >= widths.len() {
            return Err(MheError::OutOfRange {
                index: channel,
                length: widths.len(),
            });
        }
        let entry = self.sensor.entry(index)?;
        let start = offsets[channel];
        Ok(&entry[start..start + widths[channel]])
    }

    pub fn entry(&self, index: usize) -> MheResult<WindowEntry<'_>> {
        Ok(WindowEntry {
            time: self.time.entry(index)?[0],
            ctrl: self.ctrl.entry(index)?,
            sensor: self.sensor.entry(index)?,
            mask: self.sensor_mask.entry(index)?,
        })
    }

    /// Newest entry, if any.
    pub fn latest(&self) -> Option<WindowEntry<'_>> {
        self.len()
            .checked_sub(1)
            .and_then(|last| self.entry(last).ok())
    }

    /// Entries oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = WindowEntry<'_>> + '_ {
        self.time
            .iter()
            .zip(self.ctrl.iter())
            .zip(self.sensor.iter())
            .zip(self.sensor_mask.iter())
            .map(|(((t, ctrl), sensor), mask)| WindowEntry {
                time: t[0],
                ctrl,
                sensor,
                mask,
            })
    }

    /// Newest time minus oldest time; zero for fewer than two entries.
    pub fn time_span(&self) -> f64 {
        match (self.time.as_slice().first(), self.time.as_slice().last()) {
            (Some(first), Some(last)) => last - first,
            _ => 0.0,
        }
    }

    pub fn time_channel(&self) -> &TimeSeriesChannel<f64> {
        &self.time
    }

    pub fn ctrl_channel(&self) -> &TimeSeriesChannel<f64> {
        &self.ctrl
    }

    pub fn sensor_channel(&self) -> &TimeSeriesChannel<f64> {
        &self.sensor
    }

    pub fn sensor_mask_channel(&self) -> &TimeSeriesChannel<u8> {
        &self.sensor_mask
    }

    fn check_state(&self, n_ctrl: usize, n_sensor_data: usize) -> MheResult<()> {
        if n_ctrl != self.dims.n_ctrl {
            return Err(MheError::DimensionMismatch {
                what: "ctrl",
                expected: self.dims.n_ctrl,
                got: n_ctrl,
            });
        }
        if n_sensor_data != self.dims.n_sensor_data {
            return Err(MheError::DimensionMismatch {
                what: "sensordata",
                expected: self.dims.n_sensor_data,
                got: n_sensor_data,
            });
        }
        Ok(())
    }
}
