//! Move tree widget for TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Borders, Widget},
};

use crate::tree::{layout, MoveTree};
use crate::tui::Theme;

const DEFAULT_LEVEL_HEIGHT: u16 = 3;
const LEFT_EDGE_CHAR: char = '/';
const RIGHT_EDGE_CHAR: char = '\\';

/// Widget that renders a move tree, one level per band of rows
pub struct TreeWidget<'a> {
    tree: &'a MoveTree,
    theme: &'a Theme,
    level_height: u16,
}

impl<'a> TreeWidget<'a> {
    pub fn new(tree: &'a MoveTree, theme: &'a Theme) -> Self {
        Self {
            tree,
            theme,
            level_height: DEFAULT_LEVEL_HEIGHT,
        }
    }

    /// Rows between two levels, at least 2 so there is room for the edges
    pub fn level_height(mut self, level_height: u16) -> Self {
        self.level_height = level_height.max(2);
        self
    }

    fn node_row(&self, inner: Rect, index: usize) -> Option<u16> {
        let offset = u16::try_from(layout::level(index))
            .ok()?
            .checked_mul(self.level_height)?;
        let y = inner.y.checked_add(offset)?;
        if y < inner.bottom() {
            Some(y)
        } else {
            None
        }
    }

    fn render_label(&self, inner: Rect, index: usize, label: &str, buf: &mut Buffer) {
        let y = match self.node_row(inner, index) {
            Some(y) => y,
            None => return,
        };

        let centre = inner.x + layout::slot_x(index, inner.width);
        let half_width = u16::try_from(label.chars().count() / 2).unwrap_or(u16::MAX);
        let x = centre.saturating_sub(half_width).max(inner.x);
        let max_width = usize::from(inner.right().saturating_sub(x));

        buf.set_stringn(x, y, label, max_width, self.theme.node_style(index == 0));
    }

    /// Draws `/` or `\` halfway between a parent and its child, on the row
    /// below the parent.
    fn render_edge(&self, inner: Rect, parent: usize, child: usize, buf: &mut Buffer) {
        let y = match self.node_row(inner, parent) {
            Some(y) if y + 1 < inner.bottom() => y + 1,
            _ => return,
        };

        let parent_x = layout::slot_x(parent, inner.width);
        let child_x = layout::slot_x(child, inner.width);
        let x = inner.x + (parent_x + child_x) / 2;
        let edge_char = if child_x < parent_x {
            LEFT_EDGE_CHAR
        } else {
            RIGHT_EDGE_CHAR
        };

        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_char(edge_char).set_style(self.theme.edge_style());
        }
    }
}

impl Widget for TreeWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Create a bordered block for the tree
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Game tree")
            .border_style(self.theme.border_style());

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return; // Not enough space to render
        }

        for (index, label) in self.tree.labels().iter().enumerate() {
            for child in self.tree.children(index) {
                self.render_edge(inner, index, child, buf);
            }
            self.render_label(inner, index, label, buf);
        }
    }
}
