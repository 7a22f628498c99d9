use crate::math::Real;

/// What the block does in the fluid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BuoyancyStatus {
    Sinking,
    /// Fully submerged but in equilibrium.
    Neutral,
    #[default]
    Floating,
}

impl BuoyancyStatus {
    pub fn classify(is_sinking: bool, submerged_fraction: Real) -> Self {
        if is_sinking {
            Self::Sinking
        } else if submerged_fraction == 1.0 {
            Self::Neutral
        } else {
            Self::Floating
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Sinking => "The block sinks",
            Self::Neutral => "The block hovers (neutral buoyancy)",
            Self::Floating => "The block floats",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sinking_wins_over_full_submersion() {
        assert_eq!(BuoyancyStatus::classify(true, 1.0), BuoyancyStatus::Sinking);
        assert_eq!(BuoyancyStatus::classify(false, 1.0), BuoyancyStatus::Neutral);
        assert_eq!(BuoyancyStatus::classify(false, 0.999), BuoyancyStatus::Floating);
    }
}
