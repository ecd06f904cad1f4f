/// Errors produced while building a carousel configuration.
#[derive(Debug, thiserror::Error)]
pub enum CarouselError {
    /// A size that must be a finite, strictly positive number of points.
    #[error("`{field}` must be a finite positive number, got {value}")]
    InvalidDimension { field: &'static str, value: f32 },

    #[error("`card_margin` must be finite and not negative, got {0}")]
    InvalidMargin(f32),

    #[error("`scroll_animation_time` must be finite and not negative, got {0}")]
    InvalidAnimationTime(f32),

    #[error("failed to parse carousel config: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type Result<T, E = CarouselError> = std::result::Result<T, E>;
