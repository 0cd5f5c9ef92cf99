// ─────────────────────────────────────────────────────────────────────
// SCPN MHE — MHE Buffer
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Sliding window history for moving-horizon estimation.
//!
//! Time, control, sensor and sensor-mask channels under one capacity and
//! one fill/evict policy.

pub mod buffer;
pub mod channel;
pub mod dump;
pub mod mask;

pub use buffer::{BufferPhase, SlidingWindowBuffer, WindowEntry};
pub use channel::TimeSeriesChannel;
pub use mask::{MaskPolicy, SensorMask};
