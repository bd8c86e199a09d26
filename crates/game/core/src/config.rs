use crate::error::{ErrorSeverity, MazeFault};
use crate::state::ObjectId;

/// Half-extent of the egocentric observation window.
///
/// A radius of `(fr, fc)` yields a `(2·fr + 1) × (2·fc + 1)` window centred on
/// the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldRadius {
    pub rows: usize,
    pub cols: usize,
}

impl FieldRadius {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Shape of the window produced by this radius.
    pub const fn window_shape(&self) -> (usize, usize) {
        (2 * self.rows + 1, 2 * self.cols + 1)
    }
}

/// Episode parameters and tunable defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeConfig {
    /// Logical maze rows (the cell grid has `2·rows + 1` rows).
    pub rows: usize,
    /// Logical maze columns (the cell grid has `2·cols + 1` columns).
    pub cols: usize,
    /// Number of wall colors sampled from the palette.
    pub n_colors: usize,
    /// Number of collectible targets spawned on every reset.
    pub n_targets: usize,
    /// Partial observability window. `None` observes the full grid.
    pub field: Option<FieldRadius>,
    /// Seed for the episode generator. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Whether an episode with an empty target set counts as finished.
    ///
    /// Goal-style decorators run without targets and disable this.
    pub end_without_targets: bool,
}

impl MazeConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ROWS: usize = 10;
    pub const DEFAULT_COLS: usize = 10;
    pub const DEFAULT_COLORS: usize = 5;
    pub const DEFAULT_TARGETS: usize = 1;

    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            n_colors: Self::DEFAULT_COLORS,
            n_targets: Self::DEFAULT_TARGETS,
            field: None,
            seed: None,
            end_without_targets: true,
        }
    }

    #[must_use]
    pub fn with_colors(mut self, n_colors: usize) -> Self {
        self.n_colors = n_colors;
        self
    }

    #[must_use]
    pub fn with_targets(mut self, n_targets: usize) -> Self {
        self.n_targets = n_targets;
        self
    }

    #[must_use]
    pub fn with_field(mut self, field: FieldRadius) -> Self {
        self.field = Some(field);
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_end_without_targets(mut self, enabled: bool) -> Self {
        self.end_without_targets = enabled;
        self
    }

    /// Shape of the expanded cell grid.
    pub const fn grid_shape(&self) -> (usize, usize) {
        (2 * self.rows + 1, 2 * self.cols + 1)
    }

    /// Corridor cells of a perfect maze: every logical cell plus the
    /// `rows·cols − 1` carved passages between them.
    pub fn corridor_cells(&self) -> Option<usize> {
        self.rows
            .checked_mul(self.cols)
            .and_then(|cells| cells.checked_mul(2))
            .and_then(|cells| cells.checked_sub(1))
    }

    /// Checks every construction precondition.
    ///
    /// # Errors
    ///
    /// Returns the first violated precondition.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::ZeroDimension {
                rows: self.rows,
                cols: self.cols,
            });
        }

        if self.n_colors == 0 {
            return Err(ConfigError::EmptyPalette);
        }

        if let Some(field) = self.field {
            if field.rows == 0 || field.cols == 0 {
                return Err(ConfigError::InvalidField(field));
            }
        }

        let corridors = self.corridor_cells().ok_or(ConfigError::TooLarge {
            rows: self.rows,
            cols: self.cols,
        })?;
        // one corridor cell is always taken by the player
        let available = corridors - 1;
        if self.n_targets > available {
            return Err(ConfigError::TooManyTargets {
                requested: self.n_targets,
                available,
            });
        }

        let limit = ObjectId::target_capacity();
        if self.n_targets > limit {
            return Err(ConfigError::TooManyObjects {
                requested: self.n_targets,
                limit,
            });
        }

        Ok(())
    }
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ROWS, Self::DEFAULT_COLS)
    }
}

/// Invalid construction parameters.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigError {
    #[error("maze dimensions must be positive (got {rows}x{cols})")]
    ZeroDimension { rows: usize, cols: usize },

    #[error("maze of {rows}x{cols} cells does not fit in memory")]
    TooLarge { rows: usize, cols: usize },

    #[error("palette needs at least one wall color")]
    EmptyPalette,

    #[error("field radius {0:?} must be positive on both axes")]
    InvalidField(FieldRadius),

    #[error("requested {requested} targets but only {available} free cells exist")]
    TooManyTargets { requested: usize, available: usize },

    #[error("requested {requested} targets but object ids allow at most {limit}")]
    TooManyObjects { requested: usize, limit: usize },
}

impl MazeFault for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroDimension { .. } => "CONFIG_ZERO_DIMENSION",
            Self::TooLarge { .. } => "CONFIG_TOO_LARGE",
            Self::EmptyPalette => "CONFIG_EMPTY_PALETTE",
            Self::InvalidField(_) => "CONFIG_INVALID_FIELD",
            Self::TooManyTargets { .. } => "CONFIG_TOO_MANY_TARGETS",
            Self::TooManyObjects { .. } => "CONFIG_TOO_MANY_OBJECTS",
        }
    }
}
