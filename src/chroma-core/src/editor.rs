//! Value flow of a modal color-picker property editor.
//!
//! [`ColorEditor`] decides what color a property ends up with after the user
//! has been asked. The dialog itself is injected as a [`ColorPrompt`], so no
//! windowing code lives here.

use crate::color::Color;
use crate::geometry::Rect;
use crate::surface::FrameBuffer;

/// How an editor presents itself to its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditStyle {
    /// No editing UI.
    None,
    /// A drop-down attached to the property.
    DropDown,
    /// A modal dialog.
    Modal,
}

/// A color-choosing dialog.
pub trait ColorPrompt {
    /// Shows the dialog seeded with `initial`.
    ///
    /// Returns `Some` with the chosen color when the user confirmed, `None`
    /// when the dialog was dismissed.
    fn prompt(&mut self, initial: Color) -> Option<Color>;
}

impl<F> ColorPrompt for F
where
    F: FnMut(Color) -> Option<Color>,
{
    fn prompt(&mut self, initial: Color) -> Option<Color> {
        self(initial)
    }
}

/// Property editor for [`Color`] values.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorEditor;

impl ColorEditor {
    /// Color shown in the dialog when the property has no value yet.
    pub const DEFAULT_COLOR: Color = Color::BLACK;

    /// Creates an editor.
    pub const fn new() -> Self {
        Self
    }

    /// The editor always opens a modal dialog.
    pub const fn edit_style(&self) -> EditStyle {
        EditStyle::Modal
    }

    /// Runs the dialog for `current` and returns the resulting value.
    ///
    /// A missing value seeds the dialog with [`Self::DEFAULT_COLOR`]. A
    /// dismissed dialog returns the seed, not the original `None`.
    pub fn edit_value<P: ColorPrompt + ?Sized>(
        &self,
        current: Option<Color>,
        prompt: &mut P,
    ) -> Color {
        let seed = current.unwrap_or(Self::DEFAULT_COLOR);
        match prompt.prompt(seed) {
            Some(chosen) => {
                tracing::debug!(%seed, %chosen, "color dialog confirmed");
                chosen
            }
            None => seed,
        }
    }

    /// The editor can draw a preview swatch.
    pub const fn paint_value_supported(&self) -> bool {
        true
    }

    /// Paints a swatch of `color` into `bounds`.
    pub fn paint_value(&self, color: Color, surface: &mut FrameBuffer, bounds: Rect) {
        surface.fill_rect(bounds, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    #[test]
    fn test_edit_style_is_modal() {
        assert_eq!(ColorEditor::new().edit_style(), EditStyle::Modal);
        assert!(ColorEditor::new().paint_value_supported());
    }

    #[test]
    fn test_confirmed_dialog_replaces_value() {
        let editor = ColorEditor::new();
        let mut prompt = |_: Color| Some(Color::RED);
        assert_eq!(editor.edit_value(Some(Color::BLUE), &mut prompt), Color::RED);
    }

    #[test]
    fn test_dismissed_dialog_keeps_value() {
        let editor = ColorEditor::new();
        let mut prompt = |_: Color| None;
        assert_eq!(editor.edit_value(Some(Color::BLUE), &mut prompt), Color::BLUE);
    }

    #[test]
    fn test_missing_value_seeds_black() {
        let editor = ColorEditor::new();
        let mut seen = None;
        let mut prompt = |initial: Color| {
            seen = Some(initial);
            None
        };
        assert_eq!(editor.edit_value(None, &mut prompt), Color::BLACK);
        assert_eq!(seen, Some(Color::BLACK));
    }

    #[test]
    fn test_paint_value_fills_bounds() {
        let editor = ColorEditor::new();
        let mut surface = FrameBuffer::new(4, 4, Color::WHITE);
        editor.paint_value(Color::RED, &mut surface, Rect::new(1, 1, 2, 2));
        assert_eq!(surface.get(Point::new(1, 1)), Some(Color::RED));
        assert_eq!(surface.get(Point::new(2, 2)), Some(Color::RED));
        assert_eq!(surface.get(Point::new(3, 3)), Some(Color::WHITE));
        assert_eq!(surface.get(Point::new(0, 1)), Some(Color::WHITE));
    }
}
