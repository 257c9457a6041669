//! Tag list state for the demo host.
//!
//! Tags carry their own selection flag; the layout only ever sees their sizes.

use anyhow::bail;
use tagflow::{LayoutItem, Size};
use unicode_width::UnicodeWidthStr;

// Monospace metrics for a 14px terminal font.
pub const CHAR_WIDTH: f32 = 8.4;
pub const LINE_HEIGHT: f32 = 18.0;

/// Vertical padding above and below a tag label.
pub const TAG_PADDING: f32 = 5.0;

/// Tags shown when none are given on the command line.
pub const DEMO_TAGS: &[&str] = &[
    "SwiftUI", "Xcode", "iOS", "macOS", "tvOS", "watchOS", "UIKit", "AppKit", "Cocoa",
    "Objective-C", "UIKit", "AppKit", "Cocoa", "Objective-C", "UIKit", "AppKit", "Cocoa",
    "Objective-C", "UIKit", "AppKit", "Cocoa", "Objective-C",
];

/// A selectable tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub selected: bool,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            selected: false,
        }
    }

    /// Width of the rendered tag in character cells: the label plus one
    /// cell of padding on each side.
    pub fn cells(&self) -> usize {
        self.name.width() + 2
    }
}

impl LayoutItem for Tag {
    fn layout_size(&self) -> Size {
        Size::new(
            self.cells() as f32 * CHAR_WIDTH,
            LINE_HEIGHT + 2.0 * TAG_PADDING,
        )
    }
}

/// Ordered tags, duplicates allowed.
#[derive(Debug, Clone, Default)]
pub struct TagList {
    tags: Vec<Tag>,
}

impl TagList {
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: names.into_iter().map(Tag::new).collect(),
        }
    }

    pub fn demo() -> Self {
        Self::from_names(DEMO_TAGS.iter().copied())
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Flip the selection of the tag at `index`, returning its new state.
    pub fn toggle(&mut self, index: usize) -> anyhow::Result<bool> {
        let len = self.tags.len();
        let Some(tag) = self.tags.get_mut(index) else {
            bail!("tag index {} out of range ({} tags)", index, len);
        };
        tag.selected = !tag.selected;
        tracing::debug!("tag {} '{}' selected={}", index, tag.name, tag.selected);
        Ok(tag.selected)
    }
}
