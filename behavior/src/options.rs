//! Observation options for viewport intersection.
//!
//! Mirrors the shape of the browser's `IntersectionObserverInit` (threshold,
//! root, root margin) but validated up front, so a bad threshold is a typed
//! error at configuration time instead of a thrown exception at mount time.

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;

use std::fmt;

use crate::visibility::IntersectionEntry;

/// Error returned when observe options are malformed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OptionsError {
    /// A threshold fraction was NaN or outside `[0, 1]`.
    #[error("threshold {0} is outside [0, 1]")]
    ThresholdOutOfRange(f64),
    /// A threshold step set had no entries.
    #[error("threshold step set is empty")]
    EmptyThreshold,
    /// The root margin string is not a 1-4 value px/% list.
    #[error("invalid root margin: {0:?}")]
    InvalidRootMargin(String),
}

/// Fraction(s) of the target area that must be on screen to count as visible.
///
/// Stored as a sorted, de-duplicated, non-empty list of steps.
#[derive(Clone, Debug, PartialEq)]
pub struct Threshold {
    steps: Vec<f64>,
}

impl Threshold {
    /// A single threshold fraction.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::ThresholdOutOfRange`] for NaN or values outside `[0, 1]`.
    pub fn new(fraction: f64) -> Result<Self, OptionsError> {
        Self::from_steps([fraction])
    }

    /// A set of threshold fractions.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::EmptyThreshold`] for an empty set and
    /// [`OptionsError::ThresholdOutOfRange`] for any invalid step.
    pub fn from_steps(steps: impl IntoIterator<Item = f64>) -> Result<Self, OptionsError> {
        let mut steps = steps.into_iter().collect::<Vec<_>>();
        if let Some(bad) = steps.iter().copied().find(|s| !(0.0..=1.0).contains(s)) {
            return Err(OptionsError::ThresholdOutOfRange(bad));
        }
        if steps.is_empty() {
            return Err(OptionsError::EmptyThreshold);
        }
        steps.sort_by(f64::total_cmp);
        steps.dedup();
        Ok(Self { steps })
    }

    /// Sorted threshold steps.
    #[must_use]
    pub fn steps(&self) -> &[f64] {
        &self.steps
    }

    /// Smallest step; crossing it is what counts as "became visible".
    #[must_use]
    pub fn lowest(&self) -> f64 {
        self.steps.first().copied().unwrap_or(0.0)
    }

    /// Whether an intersection entry satisfies this threshold.
    ///
    /// A zero threshold is satisfied by any intersection, including an
    /// edge-adjacent one with a ratio of exactly zero.
    #[must_use]
    pub fn is_met(&self, entry: &IntersectionEntry) -> bool {
        let lowest = self.lowest();
        if lowest <= 0.0 {
            return entry.is_intersecting;
        }
        entry.ratio >= lowest
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self { steps: vec![0.0] }
    }
}

/// One side of a root margin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MarginLength {
    Px(f64),
    Percent(f64),
}

impl MarginLength {
    fn parse(raw: &str) -> Option<Self> {
        if raw == "0" {
            return Some(Self::Px(0.0));
        }
        if let Some(num) = raw.strip_suffix("px") {
            return finite(num).map(Self::Px);
        }
        if let Some(num) = raw.strip_suffix('%') {
            return finite(num).map(Self::Percent);
        }
        None
    }
}

fn finite(raw: &str) -> Option<f64> {
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}

impl Default for MarginLength {
    fn default() -> Self {
        Self::Px(0.0)
    }
}

impl fmt::Display for MarginLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{v}px"),
            Self::Percent(v) => write!(f, "{v}%"),
        }
    }
}

/// Offset margin grown (or shrunk, when negative) around the root before
/// computing intersections. Sides are top, right, bottom, left.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RootMargin {
    pub top: MarginLength,
    pub right: MarginLength,
    pub bottom: MarginLength,
    pub left: MarginLength,
}

impl RootMargin {
    /// Parse CSS margin shorthand (`"10px"`, `"10px 5%"`, up to four values).
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::InvalidRootMargin`] for anything other than
    /// one to four `px`/`%` lengths (a bare `0` is accepted).
    pub fn parse(raw: &str) -> Result<Self, OptionsError> {
        let invalid = || OptionsError::InvalidRootMargin(raw.to_owned());
        let parts = raw
            .split_whitespace()
            .map(MarginLength::parse)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(invalid)?;
        match parts.as_slice() {
            [all] => Ok(Self { top: *all, right: *all, bottom: *all, left: *all }),
            [vertical, horizontal] => Ok(Self {
                top: *vertical,
                right: *horizontal,
                bottom: *vertical,
                left: *horizontal,
            }),
            [top, horizontal, bottom] => Ok(Self {
                top: *top,
                right: *horizontal,
                bottom: *bottom,
                left: *horizontal,
            }),
            [top, right, bottom, left] => Ok(Self { top: *top, right: *right, bottom: *bottom, left: *left }),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

/// Options for a single observation. `root: None` means the page viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct ObserveOptions<R> {
    pub threshold: Threshold,
    pub root: Option<R>,
    pub root_margin: RootMargin,
}

impl<R> Default for ObserveOptions<R> {
    fn default() -> Self {
        Self { threshold: Threshold::default(), root: None, root_margin: RootMargin::default() }
    }
}

impl<R> ObserveOptions<R> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: Threshold) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_root(mut self, root: R) -> Self {
        self.root = Some(root);
        self
    }

    #[must_use]
    pub fn with_root_margin(mut self, root_margin: RootMargin) -> Self {
        self.root_margin = root_margin;
        self
    }
}
