// Garage grid configuration
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GarageConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for GarageConfig {
    fn default() -> Self {
        Self {
            rows: 10, // Default garage size
            cols: 10,
        }
    }
}

impl GarageConfig {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn capacity(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether (row, col) lies inside the grid
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }
}
