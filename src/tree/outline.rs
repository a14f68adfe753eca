use super::MoveTree;

const LABEL_SEPARATOR: &str = "  ";

/// Renders the tree as text, one line per level, e.g.
///
/// ```text
/// Inicio
/// e4  e5
/// Nf3  Nc6
/// ```
pub fn render_outline(tree: &MoveTree) -> String {
    tree.levels()
        .map(|labels| labels.join(LABEL_SEPARATOR))
        .collect::<Vec<_>>()
        .join("\n")
}
