
mod test {
    use BlockedReason::*;
    use Direction::*;
    use crate::core::*;
    use crate::test::test_util::GameTestState;

    #[test]
    fn when_move_right_observes_move_right(){
        let level = r#"
#@ #
"#;
        let mut game = GameTestState::new(level);
        game.assert_move(Right);

        let expected_level = r#"
# @#
"#;
        game.assert_matches(expected_level);
        assert_eq!(game.session.move_count(), 1);
    }

    #[test]
    fn when_push_pushes(){
        let level = r#"
#@$ #
"#;
        let mut game = GameTestState::new(level);
        let outcome = game.assert_move(Right);
        assert_eq!(outcome, MoveOutcome::Moved { change: GameChangeType::PlayerAndBoxMove, won: true });

        let expected_level = r#"
# @$#
"#;
        game.assert_matches(expected_level);
    }

    #[test]
    fn when_step_onto_target_player_covers_target(){
        let level = r#"
#@.$.#
"#;
        let mut game = GameTestState::new(level);
        game.assert_move(Right);
        game.assert_matches(r#"
# +$.#
"#);
        game.assert_move(Right);
        game.assert_matches(r#"
# .@*#
"#);
        game.assert_player_in_sync();
    }

    #[test]
    fn when_push_box_off_target_target_remains(){
        let level = r#"
#
#
#.
#*
#+
#
"#;
        let mut game = GameTestState::new(level);
        game.assert_move(Up);
        game.assert_matches(r#"
#
#
#*
#+
#.
#
"#);
        game.assert_move(Up);
        game.assert_matches(r#"
#
#$
#+
#.
#.
#
"#);
    }

    #[test]
    fn when_walk_into_wall_nothing_changes(){
        let level = r#"
####
#@ #
####
"#;
        let mut game = GameTestState::new(level);
        game.assert_blocked(Up, Wall);
        game.assert_blocked(Left, Wall);
        game.assert_blocked(Down, Wall);
        game.assert_matches(level);
        assert_eq!(game.session.move_count(), 0);
    }

    #[test]
    fn when_walk_off_the_edge_nothing_changes(){
        let level = r#"
@  $
"#;
        let mut game = GameTestState::new(level);
        game.assert_blocked(Up, OutOfBounds);
        game.assert_blocked(Left, OutOfBounds);
        game.assert_matches(level);
    }

    #[test]
    fn when_block_pushed_into_block_remains_two_blocks(){
        let level = r#"
#@$$ #
"#;
        let mut game = GameTestState::new(level);
        game.assert_blocked(Right, BoxBlocked);

        let expected_level = r#"
#@$$ #
"#;
        game.assert_matches(expected_level);
    }

    #[test]
    fn when_block_pushed_into_wall_or_box_on_target_nothing_changes(){
        let level = r#"
#####
##$@#
#  *#
#  $#
#####
"#;
        let mut game = GameTestState::new(level);
        game.assert_blocked(Left, BoxBlocked);
        game.assert_blocked(Down, BoxBlocked);
        game.assert_matches(level);
    }

    #[test]
    fn when_block_pushed_off_the_edge_nothing_changes(){
        let level = r#"
          @$
"#;
        let mut game = GameTestState::new(level);
        game.assert_blocked(Right, BoxBlocked);
        game.assert_matches(level);
    }

    #[test]
    fn when_player_moves_back_board_is_equal(){
        let level = r#"
#@ $#
"#;
        let mut game = GameTestState::new(level);
        let original_board = *game.session.board();
        game.assert_move(Right);
        game.assert_move(Left);

        game.assert_matches(level);
        assert_eq!(original_board, *game.session.board());
        assert_eq!(game.session.move_count(), 2);
    }

    #[test]
    fn when_blocks_swap_board_remains_equal(){
        let level = r#"
#    #
#@$  #
# $  #
#    #
"#;
        let mut game = GameTestState::new(level);
        let original_board = *game.session.board();
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
        assert_eq!(original_board, *game.session.board());
        game.assert_player_in_sync();
    }

    #[test]
    fn win_only_after_last_target_is_covered(){
        let level = r#"
######
#@$ .#
# $ .#
######
"#;
        let mut game = GameTestState::new(level);
        assert!(!game.session.is_won());
        assert!(!game.assert_move(Right).is_won());
        assert!(!game.assert_move(Right).is_won());
        game.assert_moves(&[Left, Left, Down, Right]);
        assert!(!game.session.is_won());
        let outcome = game.assert_move(Right);
        assert!(outcome.is_won());
        let last = outcome;
        assert!(game.session.is_won());
        let winning_move = game.session.history().last().copied();
        assert_eq!(winning_move, Some(MoveRecord::new(Right, GameChangeType::PlayerAndBoxMove)));
        assert_eq!(last, MoveOutcome::Moved { change: GameChangeType::PlayerAndBoxMove, won: true });
    }
}
