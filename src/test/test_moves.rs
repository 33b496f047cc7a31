#[cfg(test)]
mod test {
    use Direction::*;
    use crate::core::*;
    use crate::test::test_util::GameTestState;

    #[test]
    fn when_move_right_observes_move_right() {
        let level = r#"
#@ #
"#;
        let mut game = GameTestState::new(level);
        let code = game.assert_move(Right);

        assert_eq!(code.as_char(), 'r');
        game.assert_matches(r#"
# @#
"#);
    }

    #[test]
    fn when_push_pushes() {
        let level = r#"
#@$ #
"#;
        let mut game = GameTestState::new(level);
        let code = game.assert_move(Right);

        assert_eq!(code.as_char(), 'R');
        game.assert_matches(r#"
# @$#
"#);
    }

    #[test]
    fn when_walk_into_wall_nothing_changes() {
        let mut game = GameTestState::new(r#"
###
#@#
###
"#);
        for direction in Direction::ALL {
            game.assert_rejected(direction);
        }
    }

    #[test]
    fn when_block_pushed_into_block_remains_two_blocks() {
        let level = r#"
#@$$ #
"#;
        let mut game = GameTestState::new(level);
        game.assert_rejected(Right);

        game.assert_matches(r#"
#@$$ #
"#);
    }

    #[test]
    fn when_block_pushed_into_wall_stays() {
        let mut game = GameTestState::new(r#"
#@$#
"#);
        game.assert_rejected(Right);
        assert_eq!(game.game.solution(), "");
    }

    #[test]
    fn when_player_leaves_goal_goal_remains() {
        let mut game = GameTestState::new(r#"
#+ .#
"#);
        game.assert_move(Right);
        game.assert_matches(r#"
#.@.#
"#);
        game.assert_move(Right);
        game.assert_matches(r#"
#. +#
"#);
    }

    #[test]
    fn when_box_leaves_goal_goal_remains() {
        let mut game = GameTestState::new(r#"
#@*  #
"#);
        assert!(game.game.has_won());
        game.assert_move(Right);
        game.assert_matches(r#"
# +$ #
"#);
        assert!(!game.game.has_won());
    }

    #[test]
    fn when_box_pushed_from_goal_onto_goal() {
        let mut game = GameTestState::new(r#"
#@*. #
"#);
        let code = game.assert_move(Right);
        assert!(code.is_push());
        game.assert_matches(r#"
# +* #
"#);
    }

    #[test]
    fn when_push_vertically() {
        let mut game = GameTestState::new(r#"
###
#.#
# #
#$#
#@#
###
"#);
        game.assert_move(Up);
        game.assert_matches(r#"
###
#.#
#$#
#@#
# #
###
"#);
        let code = game.assert_move(Up);
        assert_eq!(code.as_char(), 'U');
        assert!(game.game.has_won());
        game.assert_matches(r#"
###
#*#
#@#
# #
# #
###
"#);
        game.assert_rejected(Up);
        game.assert_move(Down);
        assert_eq!(game.game.solution(), "UUd");
    }

    #[test]
    fn when_player_moves_back_board_is_equal() {
        let level = r#"
#@ $#
"#;
        let mut game = GameTestState::new(level);
        let original_state = game.game.state().clone();
        game.assert_move(Right);
        game.assert_move(Left);

        game.assert_matches(level);
        assert_eq!(&original_state, game.game.state());
    }

    #[test]
    fn when_blocks_swap_board_remains_equal() {
        let level = r#"
#    #
#@$  #
# $  #
#    #
"#;
        let mut game = GameTestState::new(level);
        let original_state = game.game.state().clone();
        game.assert_moves(&[
            Right, Left,
            Down, Down,
            Right, Up,
            Right, Right, Up, Up,
            Left, Down, Right, Down, Left,]);
        game.assert_matches(r#"
#    #
# $  #
# $@ #
#    #
"#);
        game.assert_moves(&[
            Down, Left, Left, Up, Up,]);

        game.assert_matches(level);
        assert_eq!(&original_state, game.game.state());
    }

    #[test]
    fn when_level_is_jagged_short_row_edge_blocks() {
        let mut game = GameTestState::new(r#"
#####
#  @
#####
"#);
        game.assert_rejected(Right);
        game.assert_move(Left);
    }

    #[test]
    fn when_move_leaves_the_grid_board_is_unchanged() {
        let mut game = GameTestState::new(r#"
#####
#@$
#####
"#);
        assert_eq!(game.try_move(Right), MoveOutcome::Rejected(Rejection::PushBlocked));
        game.assert_rejected(Right);

        let mut game = GameTestState::new(r#"
 @ #
#  #
####
"#);
        assert_eq!(game.try_move(Up), MoveOutcome::Rejected(Rejection::OutOfBounds));
        game.assert_rejected(Up);
    }

    #[test]
    fn when_box_on_goal_pushed_into_box_on_goal_nothing_changes() {
        let mut game = GameTestState::new(r#"
#@**.#
"#);
        assert_eq!(game.try_move(Right), MoveOutcome::Rejected(Rejection::PushBlocked));
        game.assert_rejected(Right);
        game.assert_matches(r#"
#@**.#
"#);
    }

    #[test]
    fn when_level_has_non_ascii_symbol_parse_fails() {
        assert_eq!(
            Grid::parse("#@\u{e9}#").unwrap_err(),
            LevelError::UnknownSymbol { symbol: '\u{e9}', position: Vec2::new(2, 0) }
        );
    }
}
