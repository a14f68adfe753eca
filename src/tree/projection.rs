use crate::game::Turn;

/// Label of the node that stands for the starting position.
pub const ROOT_LABEL: &str = "Inicio";

/// Flattens `turns` into the labels handed to a tree renderer: the root label
/// followed by every half-move in play order. A turn without a black reply
/// contributes a single label.
pub fn project(turns: &[Turn]) -> Vec<String> {
    let mut labels = Vec::with_capacity(1 + turns.len() * 2);
    labels.push(ROOT_LABEL.to_string());
    labels.extend(
        turns
            .iter()
            .flat_map(|turn| turn.half_moves())
            .map(|(_, half_move)| half_move.notation().to_string()),
    );
    labels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_in_play_order() {
        let turns = vec![
            Turn::new(1, "e4".into(), Some("e5".into())),
            Turn::new(2, "Nf3".into(), Some("Nc6".into())),
        ];
        assert_eq!(project(&turns), vec!["Inicio", "e4", "e5", "Nf3", "Nc6"]);
    }

    #[test]
    fn test_project_omits_missing_black() {
        let turns = vec![
            Turn::new(1, "d4".into(), Some("d5".into())),
            Turn::new(2, "Bf4".into(), None),
            Turn::new(3, "e3".into(), Some("e6".into())),
        ];
        let labels = project(&turns);
        assert_eq!(labels, vec!["Inicio", "d4", "d5", "Bf4", "e3", "e6"]);

        let half_moves: usize = turns.iter().map(|t| t.half_moves().count()).sum();
        assert_eq!(labels.len(), 1 + half_moves);
    }

    #[test]
    fn test_project_empty() {
        assert_eq!(project(&[]), vec![ROOT_LABEL]);
    }
}
