use crate::coordinates::Position;
use serde::{Deserialize, Serialize};

/// Vertical stack of clickable bands on the selection screen, one per preset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionLayout {
    pub base_x: f32,
    pub base_y: f32,
    pub stride: f32,
    pub band_width: f32,
    pub band_height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Band {
    pub fn contains(&self, point: Position) -> bool {
        (self.x..=self.x + self.width).contains(&point.x)
            && (self.y..=self.y + self.height).contains(&point.y)
    }
}

impl SelectionLayout {
    pub fn band(&self, index: usize) -> Band {
        Band {
            x: self.base_x,
            y: self.base_y + index as f32 * self.stride,
            width: self.band_width,
            height: self.band_height,
        }
    }

    pub fn bands(&self, count: usize) -> impl Iterator<Item = Band> + '_ {
        (0..count).map(|index| self.band(index))
    }

    /// Index of the band under `point`, if any. Non-finite points never hit.
    pub fn hit_test(&self, point: Position, count: usize) -> Option<usize> {
        if !point.x.is_finite() || !point.y.is_finite() {
            return None;
        }
        self.bands(count).position(|band| band.contains(point))
    }
}

impl Default for SelectionLayout {
    fn default() -> Self {
        Self {
            base_x: 100.0,
            base_y: 200.0,
            stride: 100.0,
            band_width: 200.0,
            band_height: 50.0,
        }
    }
}
