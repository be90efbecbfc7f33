use num_traits::Zero;
use serde::Serialize;

/// Water held above each column, plus the summed volume.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaterProfile<T> {
    pub total: T,
    pub water_at: Vec<T>,
}

impl<T: Copy + Zero> WaterProfile<T> {
    pub fn empty() -> Self {
        WaterProfile {
            total: T::zero(),
            water_at: Vec::new(),
        }
    }

    /// Builds a profile from per-position heights; the total is their sum.
    pub fn from_water_at(water_at: Vec<T>) -> Self {
        let total = water_at.iter().fold(T::zero(), |sum, &w| sum + w);
        WaterProfile { total, water_at }
    }

    pub fn len(&self) -> usize {
        self.water_at.len()
    }

    pub fn is_empty(&self) -> bool {
        self.water_at.is_empty()
    }

    /// Number of positions holding any water.
    pub fn wet_positions(&self) -> usize {
        self.water_at.iter().filter(|w| !w.is_zero()).count()
    }
}

impl<T: std::fmt::Display> std::fmt::Display for WaterProfile<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "total={} water_at=[", self.total)?;
        for (i, w) in self.water_at.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", w)?;
        }
        write!(f, "]")
    }
}
