//! One-dimensional space distribution.
//!
//! Every element starts at its minimum. Space left over is handed out in
//! rounds according to the [`DistributionPolicy`]; whatever a maximum clips
//! off is redistributed in the next round among elements that can still
//! grow. Each round either consumes the whole surplus or pins at least one
//! more element at its maximum, so a pass over `n` elements takes at most
//! `n` rounds.

use framelayout_core::Bounds;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::policy::{DistributionPolicy, Rounding};

/// Surplus below this is treated as fully consumed.
pub const EPSILON: f32 = 1e-4;

/// One participant of a distribution: bounds plus optional weight.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Track {
    /// Size bounds along the distributed axis
    pub bounds: Bounds,
    /// Explicit proportional weight
    pub weight: Option<f32>,
}

impl Track {
    /// Create a track without an explicit weight.
    #[must_use]
    pub const fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            weight: None,
        }
    }

    /// Set the explicit weight.
    #[must_use]
    pub const fn weight(mut self, weight: f32) -> Self {
        self.weight = Some(weight);
        self
    }
}

/// Whether the minimums fit the usable space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum ConstraintStatus {
    /// Every element fits inside its bounds
    #[default]
    Satisfied,
    /// Summed minimums exceed the usable space; elements are pinned at their
    /// minimum and overflow the container
    Unsatisfiable {
        /// Space the minimums need
        required: f32,
        /// Space that was available
        available: f32,
    },
}

impl ConstraintStatus {
    /// Check for the satisfied state.
    #[must_use]
    pub const fn is_satisfied(&self) -> bool {
        matches!(self, Self::Satisfied)
    }

    /// Space missing to satisfy every minimum.
    #[must_use]
    pub fn overflow(&self) -> f32 {
        match self {
            Self::Satisfied => 0.0,
            Self::Unsatisfiable {
                required,
                available,
            } => required - available,
        }
    }
}

/// Result of distributing space over a list of tracks.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Distribution {
    /// Size per track, in input order
    pub sizes: Vec<f32>,
    /// Fit of the minimums
    pub status: ConstraintStatus,
    /// Usable space left unconsumed
    pub unused: f32,
    /// Growth rounds performed
    pub rounds: usize,
}

impl Distribution {
    /// Total of all sizes.
    #[must_use]
    pub fn total(&self) -> f32 {
        self.sizes.iter().sum()
    }
}

/// Distribute `usable` space over `tracks`.
///
/// Sizes always respect each track's bounds (snapped to whole units under
/// [`Rounding::Pixel`] as far as the minimums allow). When the minimums
/// exceed `usable` every track is pinned at its minimum and the status
/// reports the shortfall.
#[must_use]
pub fn distribute(
    tracks: &[Track],
    usable: f32,
    policy: DistributionPolicy,
    rounding: Rounding,
) -> Distribution {
    let usable = f64::from(usable.max(0.0));
    let raw: Vec<Span> = tracks.iter().map(|t| Span::from(t.bounds)).collect();
    let required: f64 = raw.iter().map(|s| s.min).sum();

    if usable - required < -TOLERANCE {
        return Distribution {
            sizes: raw.iter().map(|s| s.min as f32).collect(),
            status: ConstraintStatus::Unsatisfiable {
                required: required as f32,
                available: usable as f32,
            },
            unused: 0.0,
            rounds: 0,
        };
    }

    let spans: Vec<Span> = match rounding {
        Rounding::Pixel => {
            let mut spans: Vec<Span> = tracks
                .iter()
                .map(|t| Span::from(t.bounds.snapped()))
                .collect();
            fit_snapped_minimums(&mut spans, &raw, usable);
            spans
        }
        Rounding::Fractional => raw,
    };

    let mut sizes: Vec<f64> = spans.iter().map(|s| s.min).collect();
    let surplus = usable - sizes.iter().sum::<f64>();

    let mut rounds = 0;
    if surplus > TOLERANCE && policy != DistributionPolicy::PackMinimum {
        let weights: Vec<Option<f64>> = tracks.iter().map(|t| t.weight.map(f64::from)).collect();
        rounds = grow(&mut sizes, &spans, &weights, surplus, policy);
        if rounding == Rounding::Pixel {
            snap_to_units(&mut sizes, &spans);
        }
    }

    let used: f64 = sizes.iter().sum();
    Distribution {
        sizes: narrow(&sizes),
        status: ConstraintStatus::Satisfied,
        unused: (usable - used).max(0.0) as f32,
        rounds,
    }
}

const TOLERANCE: f64 = EPSILON as f64;

/// Working copy of a track's bounds in double precision.
#[derive(Debug, Clone, Copy)]
struct Span {
    min: f64,
    max: f64,
}

impl Span {
    fn room(self, size: f64) -> f64 {
        (self.max - size).max(0.0)
    }
}

impl From<Bounds> for Span {
    fn from(bounds: Bounds) -> Self {
        Self {
            min: f64::from(bounds.min()),
            max: f64::from(bounds.max()),
        }
    }
}

/// Undo the upward snap of minimums that no longer fit together.
///
/// Tracks are pinned at their fractional minimum from the last one backwards
/// until the minimums fit `usable` again, so leading tracks keep whole units.
fn fit_snapped_minimums(spans: &mut [Span], raw: &[Span], usable: f64) {
    let mut excess = spans.iter().map(|s| s.min).sum::<f64>() - usable;
    for (span, raw) in spans.iter_mut().zip(raw).rev() {
        if excess <= TOLERANCE {
            break;
        }
        let lift = span.min - raw.min;
        if lift > 0.0 {
            *span = Span {
                min: raw.min,
                max: raw.min,
            };
            excess -= lift;
        }
    }
}

fn narrow(sizes: &[f64]) -> Vec<f32> {
    sizes.iter().map(|&s| s as f32).collect()
}

/// Hand `surplus` out in rounds, clamping at each maximum.
fn grow(
    sizes: &mut [f64],
    spans: &[Span],
    weights: &[Option<f64>],
    mut surplus: f64,
    policy: DistributionPolicy,
) -> usize {
    let mut active: Vec<usize> = (0..sizes.len())
        .filter(|&i| spans[i].room(sizes[i]) > TOLERANCE)
        .filter(|&i| policy != DistributionPolicy::Proportional || weights[i] != Some(0.0))
        .collect();
    let mut rounds = 0;

    while surplus > TOLERANCE && !active.is_empty() {
        rounds += 1;
        let shares = shares(policy, &active, sizes, weights, surplus);
        let mut consumed = 0.0;
        let mut clamped = false;

        for (&i, share) in active.iter().zip(shares) {
            let room = spans[i].room(sizes[i]);
            if share >= room {
                sizes[i] = spans[i].max;
                consumed += room;
                clamped = true;
            } else {
                sizes[i] += share;
                consumed += share;
            }
        }

        surplus -= consumed;
        active.retain(|&i| spans[i].room(sizes[i]) > TOLERANCE);
        trace!(
            round = rounds,
            consumed,
            surplus,
            growing = active.len(),
            "distribution round"
        );

        // Nothing clipped: the whole surplus went out this round.
        if !clamped {
            break;
        }
    }

    rounds
}

fn shares(
    policy: DistributionPolicy,
    active: &[usize],
    sizes: &[f64],
    weights: &[Option<f64>],
    surplus: f64,
) -> Vec<f64> {
    let equal = || vec![surplus / active.len() as f64; active.len()];
    match policy {
        DistributionPolicy::Proportional => {
            let ws: Vec<f64> = active
                .iter()
                .map(|&i| weights[i].unwrap_or(sizes[i]))
                .collect();
            let total: f64 = ws.iter().sum();
            if total <= TOLERANCE {
                equal()
            } else {
                ws.iter().map(|w| surplus * w / total).collect()
            }
        }
        DistributionPolicy::Equal | DistributionPolicy::PackMinimum => equal(),
    }
}

/// Floor every size and hand the lost whole units back one at a time in
/// traversal order.
///
/// `spans` must come from snapped bounds, so flooring never leaves them.
fn snap_to_units(sizes: &mut [f64], spans: &[Span]) {
    let target: f64 = sizes.iter().sum();
    for (size, span) in sizes.iter_mut().zip(spans) {
        *size = (*size + TOLERANCE).floor().max(span.min);
    }
    let floored: f64 = sizes.iter().sum();
    let mut units = (target - floored + TOLERANCE).floor().max(0.0) as usize;

    for (size, span) in sizes.iter_mut().zip(spans) {
        if units == 0 {
            break;
        }
        if *size + 1.0 <= span.max {
            *size += 1.0;
            units -= 1;
        }
    }
}

/// Total extent needed to give every track its minimum, including gaps and
/// padding.
#[must_use]
pub fn minimum_extent(tracks: &[Track], spacing: f32, leading: f32, trailing: f32) -> f32 {
    let mins: f32 = tracks.iter().map(|t| t.bounds.min()).sum();
    mins + gaps(tracks.len(), spacing) + leading + trailing
}

/// Space taken by the gaps between `count` elements.
#[must_use]
pub fn gaps(count: usize, spacing: f32) -> f32 {
    spacing * count.saturating_sub(1) as f32
}
