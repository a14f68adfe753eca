use super::*;

#[test]
fn test_castling_forms() {
    assert!(is_castling("O-O"));
    assert!(is_castling("O-O-O"));
    assert_eq!(classify("O-O-O"), Some(MoveKind::Castling));
}

#[test]
fn test_castling_is_exact() {
    for token in ["0-0", "o-o", "O-O+", " O-O", "O-O-O-O", "O-", "OO", "O-O-"] {
        assert!(!is_castling(token), "{} should not be castling", token);
    }
}

#[test]
fn test_castling_with_check_is_rejected() {
    // castling takes no check suffix in this grammar
    assert!(!is_valid_half_move("O-O#"));
    assert!(!is_valid_half_move("O-O-O+"));
}

#[test]
fn test_piece_moves() {
    let valid = [
        "Nf3", "Bb5", "Qh4#", "Kxe2", "Rad1", "R1e2", "Nbd7", "Qh4e1", "Nxe5", "Rfxe8+",
        "Qa1=Q", "Bc4+",
    ];
    for token in valid {
        assert!(is_piece_move(token), "{} should be a piece move", token);
        assert_eq!(classify(token), Some(MoveKind::PieceMove));
    }
}

#[test]
fn test_invalid_piece_moves() {
    let invalid = [
        "N", "Nf", "Nf9", "Ni3", "Pf3", "nf3", "Nabcd4", "Nf3++", "Nxxf3", "Nf3=K", "Nf3=",
        "Nf3x", "N-f3",
    ];
    for token in invalid {
        assert!(!is_piece_move(token), "{} should not be a piece move", token);
    }
}

#[test]
fn test_pawn_moves() {
    let valid = ["e4", "d5", "exd5", "e8=Q", "e8=Q+", "bxa1=N#", "h7+", "axb8=R"];
    for token in valid {
        assert!(is_pawn_move(token), "{} should be a pawn move", token);
        assert_eq!(classify(token), Some(MoveKind::PawnMove));
    }
}

#[test]
fn test_invalid_pawn_moves() {
    let invalid = ["e9", "i4", "e", "ex", "exd", "e4e5", "xd5", "1xd5", "e8=K", "e8=", "E4"];
    for token in invalid {
        assert!(!is_pawn_move(token), "{} should not be a pawn move", token);
    }
}

#[test]
fn test_classify_rejects_junk() {
    for token in ["", "1-0", "...", "e4!", "Nf3?", "½-½", "♘f3", "e4 e5"] {
        assert_eq!(classify(token), None, "{:?} should be rejected", token);
        assert!(!is_valid_half_move(token));
    }
}

#[test]
fn test_non_ascii_input_never_panics() {
    for token in ["é4", "Ne\u{301}4", "O\u{2013}O", "Qh4\u{0}", "日本"] {
        assert!(!is_valid_half_move(token));
    }
}

#[test]
fn test_is_valid_square() {
    assert!(is_valid_square("a1"));
    assert!(is_valid_square("h8"));
    assert!(!is_valid_square("i1"));
    assert!(!is_valid_square("a0"));
    assert!(!is_valid_square("a9"));
    assert!(!is_valid_square("a"));
    assert!(!is_valid_square("a1b"));
    assert!(!is_valid_square("A1"));
    assert!(!is_valid_square(""));
}

#[test]
fn test_is_valid_piece() {
    for piece in ['K', 'Q', 'R', 'B', 'N'] {
        assert!(is_valid_piece(piece));
    }
    for piece in ['P', 'k', 'x', '1', ' '] {
        assert!(!is_valid_piece(piece));
    }
}

#[test]
fn test_king_is_not_a_promotion_piece() {
    assert!(!is_valid_promotion_piece('K'));
    assert!(is_valid_promotion_piece('N'));
}
