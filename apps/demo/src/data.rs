use std::fmt;

/// A one-dimensional array of measurements with a unit.
///
/// This is the host type the accessors act on; it knows nothing about them.
#[derive(Debug, Clone, PartialEq)]
pub struct DataArray {
    values: Vec<f64>,
    unit: String,
}

impl DataArray {
    pub fn new(values: Vec<f64>, unit: impl Into<String>) -> Self {
        Self { values, unit: unit.into() }
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn unit(&self) -> &str {
        &self.unit
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean(&self) -> Option<f64> {
        if self.values.is_empty() {
            return None;
        }
        Some(self.values.iter().sum::<f64>() / self.values.len() as f64)
    }

    /// `max - min`.
    #[must_use]
    pub fn range(&self) -> Option<f64> {
        let min = self.values.iter().copied().reduce(f64::min)?;
        let max = self.values.iter().copied().reduce(f64::max)?;
        Some(max - min)
    }

    #[must_use]
    pub fn scaled(&self, factor: f64, unit: impl Into<String>) -> Self {
        Self::new(self.values.iter().map(|v| v * factor).collect(), unit)
    }
}

impl fmt::Display for DataArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {}", self.values, self.unit)
    }
}
