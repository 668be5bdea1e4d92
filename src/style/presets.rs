use crate::style::aspect::AspectLock;
use crate::style::descriptor::StyleDescriptor;

/// A named output size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preset {
    /// Display name.
    pub name: &'static str,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Common placeholder sizes.
pub const PRESETS: [Preset; 9] = [
    Preset {
        name: "Square",
        width: 500,
        height: 500,
    },
    Preset {
        name: "HD",
        width: 1280,
        height: 720,
    },
    Preset {
        name: "Full HD",
        width: 1920,
        height: 1080,
    },
    Preset {
        name: "Instagram Post",
        width: 1080,
        height: 1080,
    },
    Preset {
        name: "Instagram Story",
        width: 1080,
        height: 1920,
    },
    Preset {
        name: "Twitter Header",
        width: 1500,
        height: 500,
    },
    Preset {
        name: "Facebook Cover",
        width: 820,
        height: 312,
    },
    Preset {
        name: "YouTube Thumbnail",
        width: 1280,
        height: 720,
    },
    Preset {
        name: "Open Graph",
        width: 1200,
        height: 630,
    },
];

impl Preset {
    /// Look up a preset by name, ignoring case, spaces, `-` and `_`.
    pub fn find(name: &str) -> Option<Preset> {
        let key = normalize_name(name);
        PRESETS.into_iter().find(|p| normalize_name(p.name) == key)
    }

    /// Copy of `style` at this preset's size; also re-captures the aspect ratio.
    pub fn apply(&self, style: &StyleDescriptor, aspect: &mut AspectLock) -> StyleDescriptor {
        aspect.capture(self.width, self.height);
        style.with_size(self.width, self.height)
    }
}

fn normalize_name(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/style/presets.rs"]
mod tests;
