/// Planner tunables shared by every path query.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavConfig {
    /// Agent radius used when a caller does not supply one.
    pub default_radius: f64,
    /// Lower bound of the search cell size. The effective cell is
    /// `max(min_grid_size, radius)`.
    pub min_grid_size: f64,
    /// Number of nodes a single search may close before giving up.
    pub max_explored_nodes: usize,
    /// Weight of the cross-product term that favours straight routes.
    pub tie_break_weight: f64,
    /// Run the visibility smoother over raw grid paths.
    pub smoothing: bool,
}

impl NavConfig {
    pub const DEFAULT_RADIUS: f64 = 0.5;
    pub const DEFAULT_MIN_GRID_SIZE: f64 = 0.5;
    pub const DEFAULT_MAX_EXPLORED_NODES: usize = 10_000;
    pub const DEFAULT_TIE_BREAK_WEIGHT: f64 = 0.001;

    pub fn new() -> Self {
        Self {
            default_radius: Self::DEFAULT_RADIUS,
            min_grid_size: Self::DEFAULT_MIN_GRID_SIZE,
            max_explored_nodes: Self::DEFAULT_MAX_EXPLORED_NODES,
            tie_break_weight: Self::DEFAULT_TIE_BREAK_WEIGHT,
            smoothing: true,
        }
    }

    pub fn with_default_radius(mut self, radius: f64) -> Self {
        self.default_radius = radius;
        self
    }

    pub fn with_max_explored_nodes(mut self, max: usize) -> Self {
        self.max_explored_nodes = max;
        self
    }

    pub fn with_tie_break_weight(mut self, weight: f64) -> Self {
        self.tie_break_weight = weight;
        self
    }

    pub fn with_smoothing(mut self, enabled: bool) -> Self {
        self.smoothing = enabled;
        self
    }

    /// Search cell size for an agent of the given radius.
    pub fn grid_size(&self, radius: f64) -> f64 {
        radius.max(self.min_grid_size)
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_size_never_drops_below_minimum() {
        let config = NavConfig::default();
        assert_eq!(config.grid_size(0.0), 0.5);
        assert_eq!(config.grid_size(0.3), 0.5);
        assert_eq!(config.grid_size(2.0), 2.0);
    }
}
