use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> GraphResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(GraphError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Visual style bundle applied to one trace: line, symbol, and error-bar
/// attributes. Pens are shared read-only across traces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pen {
    pub color: Color,
    pub line_width: f64,
    pub symbol_size: f64,
    pub error_bar_color: Color,
    pub error_bar_line_width: f64,
    /// Half-width of the perpendicular cap on error-bar stems, pixels.
    pub error_cap_width: f64,
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            color: Color::rgb(0.0, 0.0, 0.0),
            line_width: 1.0,
            symbol_size: 6.0,
            error_bar_color: Color::rgb(0.0, 0.0, 0.0),
            error_bar_line_width: 1.0,
            error_cap_width: 3.0,
        }
    }
}

impl Pen {
    pub fn validate(&self) -> GraphResult<()> {
        for (field, value) in [
            ("line_width", self.line_width),
            ("symbol_size", self.symbol_size),
            ("error_bar_line_width", self.error_bar_line_width),
            ("error_cap_width", self.error_cap_width),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(GraphError::InvalidData(format!(
                    "pen `{field}` must be finite and >= 0"
                )));
            }
        }
        self.color.validate()?;
        self.error_bar_color.validate()
    }
}

/// Direction constraint governing retrace breaks between consecutive
/// transformed X positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PenDirection {
    /// Break the trace when screen X decreases.
    Increasing,
    /// Break the trace when screen X increases.
    Decreasing,
    /// Never break on direction.
    #[default]
    Both,
}

impl PenDirection {
    /// True when stepping from `prev_x` to `next_x` violates the constraint
    /// and the next point must start a new trace.
    #[must_use]
    pub fn breaks_between(self, prev_x: f64, next_x: f64) -> bool {
        match self {
            PenDirection::Increasing => next_x < prev_x,
            PenDirection::Decreasing => next_x > prev_x,
            PenDirection::Both => false,
        }
    }
}

/// Half-open weight interval mapped to a named pen.
///
/// Membership uses the normalized test `0 <= (w - min) / range <= 1` with
/// floating-point epsilon tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightRange {
    pub min: f64,
    pub range: f64,
    pub pen: String,
}

impl WeightRange {
    #[must_use]
    pub fn new(min: f64, range: f64, pen: impl Into<String>) -> Self {
        Self {
            min,
            range,
            pen: pen.into(),
        }
    }

    fn contains(&self, weight: f64) -> bool {
        if self.range == 0.0 {
            return false;
        }
        let norm = (weight - self.min) / self.range;
        norm >= -f64::EPSILON && norm - 1.0 <= f64::EPSILON
    }
}

/// Ordered pen registry plus the weight-range table that selects between
/// pens per data point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenTable {
    pens: IndexMap<String, Pen>,
    ranges: Vec<WeightRange>,
    default_pen: String,
}

impl Default for PenTable {
    fn default() -> Self {
        let mut pens = IndexMap::new();
        pens.insert("default".to_owned(), Pen::default());
        Self {
            pens,
            ranges: Vec::new(),
            default_pen: "default".to_owned(),
        }
    }
}

impl PenTable {
    pub fn new(default_name: impl Into<String>, default_pen: Pen) -> GraphResult<Self> {
        default_pen.validate()?;
        let default_name = default_name.into();
        let mut pens = IndexMap::new();
        pens.insert(default_name.clone(), default_pen);
        Ok(Self {
            pens,
            ranges: Vec::new(),
            default_pen: default_name,
        })
    }

    pub fn add_pen(&mut self, name: impl Into<String>, pen: Pen) -> GraphResult<()> {
        pen.validate()?;
        self.pens.insert(name.into(), pen);
        Ok(())
    }

    /// Replaces the weight-range table. Every referenced pen must already be
    /// registered; ranges must be finite with a nonzero span.
    pub fn set_weight_ranges(&mut self, ranges: Vec<WeightRange>) -> GraphResult<()> {
        for range in &ranges {
            if !range.min.is_finite() || !range.range.is_finite() || range.range == 0.0 {
                return Err(GraphError::InvalidData(
                    "weight range must be finite with a nonzero span".to_owned(),
                ));
            }
            if !self.pens.contains_key(&range.pen) {
                return Err(GraphError::UnknownPen(range.pen.clone()));
            }
        }
        self.ranges = ranges;
        Ok(())
    }

    #[must_use]
    pub fn default_pen_name(&self) -> &str {
        &self.default_pen
    }

    #[must_use]
    pub fn pen(&self, name: &str) -> Option<&Pen> {
        self.pens.get(name)
    }

    /// Pen lookup that falls back to the default pen for unknown names.
    #[must_use]
    pub fn pen_or_default(&self, name: &str) -> &Pen {
        self.pens
            .get(name)
            .unwrap_or_else(|| &self.pens[&self.default_pen])
    }

    /// Resolves the pen for one weight value.
    ///
    /// Ranges are tested in reverse declaration order so later, more specific
    /// ranges win; no match falls back to the default pen.
    #[must_use]
    pub fn resolve(&self, weight: f64) -> &str {
        for range in self.ranges.iter().rev() {
            if range.contains(weight) {
                return &range.pen;
            }
        }
        &self.default_pen
    }

    /// Resolves the pen for one data index against an optional weight
    /// sequence. Absent weights or out-of-range indices use the default pen.
    #[must_use]
    pub fn resolve_for_index(&self, weights: Option<&[f64]>, index: usize) -> &str {
        match weights.and_then(|w| w.get(index)) {
            Some(weight) => self.resolve(*weight),
            None => &self.default_pen,
        }
    }

    pub fn to_json(&self) -> GraphResult<String> {
        serde_json::to_string(self)
            .map_err(|err| GraphError::InvalidData(format!("pen table serialization: {err}")))
    }

    /// Deserializes a pen table, enforcing the same invariants as
    /// [`PenTable::add_pen`] and [`PenTable::set_weight_ranges`].
    pub fn from_json(json: &str) -> GraphResult<Self> {
        let table: Self = serde_json::from_str(json)
            .map_err(|err| GraphError::InvalidData(format!("pen table deserialization: {err}")))?;
        if !table.pens.contains_key(&table.default_pen) {
            return Err(GraphError::UnknownPen(table.default_pen));
        }
        for pen in table.pens.values() {
            pen.validate()?;
        }
        for range in &table.ranges {
            if !range.min.is_finite() || !range.range.is_finite() || range.range == 0.0 {
                return Err(GraphError::InvalidData(
                    "weight range must be finite with a nonzero span".to_owned(),
                ));
            }
            if !table.pens.contains_key(&range.pen) {
                return Err(GraphError::UnknownPen(range.pen.clone()));
            }
        }
        Ok(table)
    }
}
