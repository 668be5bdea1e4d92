use crate::style::descriptor::{StyleDescriptor, clamp_dimension};

/// Optional width/height coupling used while editing dimensions.
///
/// Locking captures the descriptor's current ratio; while locked, changing one side derives the
/// other as `round(side / ratio)` or `round(side * ratio)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AspectLock {
    ratio: f64,
    locked: bool,
}

impl Default for AspectLock {
    fn default() -> Self {
        Self {
            ratio: 800.0 / 600.0,
            locked: false,
        }
    }
}

impl AspectLock {
    /// Current `width / height` ratio.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Whether width and height are coupled.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Flip the lock. Locking re-captures the ratio from `style`.
    pub fn toggle(&mut self, style: &StyleDescriptor) {
        if !self.locked {
            self.capture(style.width, style.height);
        }
        self.locked = !self.locked;
    }

    /// Replace the stored ratio without changing the lock state.
    pub fn capture(&mut self, width: u32, height: u32) {
        self.ratio = f64::from(width.max(1)) / f64::from(height.max(1));
    }

    /// Copy of `style` with a new width, deriving height when locked.
    pub fn set_width(&self, style: &StyleDescriptor, width: u32) -> StyleDescriptor {
        let out = style.with_width(width);
        if !self.locked {
            return out;
        }
        let height = (f64::from(out.width) / self.ratio).round() as u32;
        out.with_height(clamp_dimension(height))
    }

    /// Copy of `style` with a new height, deriving width when locked.
    pub fn set_height(&self, style: &StyleDescriptor, height: u32) -> StyleDescriptor {
        let out = style.with_height(height);
        if !self.locked {
            return out;
        }
        let width = (f64::from(out.height) * self.ratio).round() as u32;
        out.with_width(clamp_dimension(width))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/aspect.rs"]
mod tests;
