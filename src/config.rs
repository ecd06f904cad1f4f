use egui::{Color32, Vec2};
use serde::{Deserialize, Serialize};

use crate::error::{CarouselError, Result};

/// Geometry, colors and timing of a [`crate::Carousel`].
///
/// The scroll distance between two cards ([`CarouselConfig::stride`]) is derived from the same
/// card width and margin used to lay the cards out, so resizing the cards keeps the viewport
/// centered on the active one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub card_width: f32,
    pub card_height: f32,
    /// Space on each side of a card.
    pub card_margin: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Seconds the viewport takes to scroll to a new card. Zero jumps immediately.
    pub scroll_animation_time: f32,
    pub label_size: f32,
    pub card_color: [u8; 3],
    pub viewport_color: [u8; 3],
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            card_width: 300.0,
            card_height: 150.0,
            card_margin: 20.0,
            viewport_width: 600.0,
            viewport_height: 300.0,
            scroll_animation_time: 0.3,
            label_size: 32.0,
            card_color: [0x88, 0xcc, 0xdd],
            viewport_color: [0xcc, 0xcc, 0xcc],
        }
    }
}

impl CarouselConfig {
    /// Parse a config from TOML. Missing keys fall back to their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("card_width", self.card_width),
            ("card_height", self.card_height),
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
            ("label_size", self.label_size),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(CarouselError::InvalidDimension { field, value });
            }
        }
        if !self.card_margin.is_finite() || self.card_margin < 0.0 {
            return Err(CarouselError::InvalidMargin(self.card_margin));
        }
        if !self.scroll_animation_time.is_finite() || self.scroll_animation_time < 0.0 {
            return Err(CarouselError::InvalidAnimationTime(
                self.scroll_animation_time,
            ));
        }
        Ok(())
    }

    /// Card width plus both margins: the scroll distance from one card to the next.
    pub fn stride(&self) -> f32 {
        self.card_width + 2.0 * self.card_margin
    }

    /// Width of the empty space before the first and after the last card, so that any card can
    /// be scrolled to the middle of the viewport.
    pub fn buffer_width(&self) -> f32 {
        ((self.viewport_width - self.stride()) / 2.0).max(0.0)
    }

    pub fn card_size(&self) -> Vec2 {
        Vec2::new(self.card_width, self.card_height)
    }

    pub fn viewport_size(&self) -> Vec2 {
        Vec2::new(self.viewport_width, self.viewport_height)
    }

    pub fn card_fill(&self) -> Color32 {
        let [r, g, b] = self.card_color;
        Color32::from_rgb(r, g, b)
    }

    pub fn viewport_fill(&self) -> Color32 {
        let [r, g, b] = self.viewport_color;
        Color32::from_rgb(r, g, b)
    }
}
