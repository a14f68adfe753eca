//! Projection of a game onto a binary tree of move labels.
//!
//! The tree is only a way of drawing a linear sequence: the root is the
//! starting position and the half-moves fill the levels breadth first. It does
//! not model variations.

pub mod layout;
pub mod outline;
pub mod projection;

use crate::game::{Game, Turn};

pub use outline::render_outline;
pub use projection::{project, ROOT_LABEL};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveTree {
    labels: Vec<String>,
}

impl MoveTree {
    pub fn from_turns(turns: &[Turn]) -> Self {
        Self {
            labels: project(turns),
        }
    }

    pub fn from_game(game: &Game) -> Self {
        Self::from_turns(game.turns())
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn root(&self) -> Option<&str> {
        self.label(0)
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Children of `index` that exist in this tree.
    pub fn children(&self, index: usize) -> impl Iterator<Item = usize> {
        let len = self.labels.len();
        layout::children(index)
            .into_iter()
            .filter(move |&child| child < len)
    }

    pub fn parent(&self, index: usize) -> Option<usize> {
        if index < self.labels.len() {
            layout::parent(index)
        } else {
            None
        }
    }

    pub fn depth(&self) -> usize {
        layout::depth(self.labels.len())
    }

    /// Labels grouped by level, root first.
    pub fn levels(&self) -> impl Iterator<Item = &[String]> {
        (0..self.depth()).map(move |level| {
            let range = layout::level_range(level);
            let end = range.end.min(self.labels.len());
            &self.labels[range.start..end]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> MoveTree {
        MoveTree::from_turns(&[
            Turn::new(1, "e4".into(), Some("e5".into())),
            Turn::new(2, "Nf3".into(), Some("Nc6".into())),
            Turn::new(3, "Bc4".into(), None),
        ])
    }

    #[test]
    fn test_root_and_labels() {
        let tree = sample_tree();
        assert_eq!(tree.root(), Some(ROOT_LABEL));
        assert_eq!(tree.len(), 6);
        assert_eq!(tree.label(3), Some("Nf3"));
        assert_eq!(tree.label(6), None);
    }

    #[test]
    fn test_children_are_clipped() {
        let tree = sample_tree();
        assert_eq!(tree.children(0).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(tree.children(2).collect::<Vec<_>>(), vec![5]);
        assert_eq!(tree.children(3).count(), 0);
    }

    #[test]
    fn test_parent() {
        let tree = sample_tree();
        assert_eq!(tree.parent(0), None);
        assert_eq!(tree.parent(5), Some(2));
        assert_eq!(tree.parent(9), None);
    }

    #[test]
    fn test_levels() {
        let tree = sample_tree();
        assert_eq!(tree.depth(), 3);
        let levels: Vec<Vec<&str>> = tree
            .levels()
            .map(|level| level.iter().map(String::as_str).collect())
            .collect();
        assert_eq!(
            levels,
            vec![vec!["Inicio"], vec!["e4", "e5"], vec!["Nf3", "Nc6", "Bc4"]]
        );
    }
}
