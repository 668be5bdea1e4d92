use rayon::prelude::*;

use crate::export::gateway::{ExportFormat, ExportGateway, ExportedImage};
use crate::foundation::error::{PlacardError, PlacardResult};
use crate::style::descriptor::StyleDescriptor;

/// One entry of the batch list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BatchSize {
    /// Pixel width.
    pub width: u32,
    /// Pixel height.
    pub height: u32,
    /// Whether this size takes part in the next export.
    #[serde(default)]
    pub enabled: bool,
}

impl BatchSize {
    /// A disabled entry.
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            enabled: false,
        }
    }

    /// `{w}x{h}` label.
    pub fn label(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

/// Ordered list of sizes for batch export.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct BatchList {
    sizes: Vec<BatchSize>,
}

impl Default for BatchList {
    fn default() -> Self {
        Self {
            sizes: vec![
                BatchSize::new(1920, 1080),
                BatchSize::new(1280, 720),
                BatchSize::new(800, 600),
                BatchSize::new(400, 300),
            ],
        }
    }
}

impl BatchList {
    /// An empty list.
    pub fn empty() -> Self {
        Self { sizes: Vec::new() }
    }

    /// List built from explicit entries.
    pub fn from_sizes(sizes: Vec<BatchSize>) -> Self {
        Self { sizes }
    }

    /// All entries, in order.
    pub fn sizes(&self) -> &[BatchSize] {
        &self.sizes
    }

    /// Enabled entries, in order.
    pub fn enabled(&self) -> impl Iterator<Item = &BatchSize> {
        self.sizes.iter().filter(|s| s.enabled)
    }

    /// Flip the `enabled` flag at `index`. Returns the new state, or `None` when out of range.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let entry = self.sizes.get_mut(index)?;
        entry.enabled = !entry.enabled;
        Some(entry.enabled)
    }

    /// Append the style's current size, enabled.
    pub fn add_current(&mut self, style: &StyleDescriptor) {
        self.sizes.push(BatchSize {
            width: style.width,
            height: style.height,
            enabled: true,
        });
    }

    /// Remove the entry at `index`.
    pub fn remove(&mut self, index: usize) -> Option<BatchSize> {
        (index < self.sizes.len()).then(|| self.sizes.remove(index))
    }
}

/// Export `style` once per enabled size in `list`.
///
/// Each size renders independently with only width and height replaced. Output order follows
/// the list.
#[tracing::instrument(skip_all, fields(format = %format))]
pub fn export_batch(
    gateway: &ExportGateway,
    style: &StyleDescriptor,
    list: &BatchList,
    format: ExportFormat,
) -> PlacardResult<Vec<ExportedImage>> {
    let targets: Vec<BatchSize> = list.enabled().copied().collect();
    if targets.is_empty() {
        return Err(PlacardError::batch("no sizes selected"));
    }
    tracing::info!(count = targets.len(), "batch export");

    targets
        .par_iter()
        .map(|t| gateway.export(&style.with_size(t.width, t.height), format))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/export/batch.rs"]
mod tests;
