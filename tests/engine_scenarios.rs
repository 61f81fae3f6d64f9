//! End-to-end move selection on hand-picked positions.

mod common;

use advisor::{
    Error, SearchEngine,
    search::{Algorithm, Difficulty},
};
use common::{Scripted, board};

mod immediate_tactics {
    use super::*;

    #[test]
    fn test_every_algorithm_completes_the_winning_line() {
        let engine = SearchEngine::default();
        let position = board("OO./XX./...");

        for algorithm in Algorithm::ALL {
            for depth in 2..=9 {
                let (mv, analysis) = engine
                    .get_best_move(
                        &position,
                        algorithm,
                        Difficulty::Hard,
                        Some(depth),
                        &mut Scripted::keep(),
                    )
                    .unwrap();
                assert_eq!(mv.position(), (0, 2), "{algorithm} at depth {depth}");
                assert!(analysis.evaluation_score > 90, "{algorithm} at depth {depth}");
                assert_eq!(mv.score, Some(analysis.evaluation_score));
            }
        }
    }

    #[test]
    fn test_minimax_blocks_the_opponent() {
        let engine = SearchEngine::default();
        let position = board("XX./O../...");

        for depth in 2..=9 {
            let (mv, _) = engine
                .get_best_move(
                    &position,
                    Algorithm::Minimax,
                    Difficulty::Hard,
                    Some(depth),
                    &mut Scripted::keep(),
                )
                .unwrap();
            assert_eq!(mv.position(), (0, 2), "depth {depth}");
        }
    }
}

mod short_circuits {
    use super::*;

    #[test]
    fn test_single_empty_cell_is_returned_without_search() {
        let engine = SearchEngine::default();
        let position = board("XOX/OXO/OX.");

        for algorithm in Algorithm::ALL {
            for difficulty in Difficulty::ALL {
                let mut rng = Scripted::new(&[true], &[0]);
                let (mv, analysis) = engine
                    .get_best_move(&position, algorithm, difficulty, None, &mut rng)
                    .unwrap();

                assert_eq!(mv.position(), (2, 2));
                assert_eq!(mv.score, Some(0));
                assert_eq!(analysis.evaluation_score, 0);
                assert_eq!(analysis.nodes_explored, 0);
                assert_eq!(analysis.pruned_branches, 0);
                assert!(analysis.move_reasoning.contains("Only one move"));
                // Easy never rolls the dice when there is nothing to choose from.
                assert_eq!(rng.chance_calls, 0);
            }
        }
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let engine = SearchEngine::default();
        let position = board("XOX/XOO/OXX");

        let err = engine
            .get_best_move(
                &position,
                Algorithm::AlphaBeta,
                Difficulty::Medium,
                None,
                &mut Scripted::keep(),
            )
            .unwrap_err();
        assert!(matches!(err, Error::NoMovesAvailable));
    }

    #[test]
    fn test_zero_depth_falls_back_to_first_move() {
        let engine = SearchEngine::default();
        let position = board("X../.../...");

        let (mv, analysis) = engine
            .get_best_move(
                &position,
                Algorithm::Minimax,
                Difficulty::Hard,
                Some(0),
                &mut Scripted::keep(),
            )
            .unwrap();
        assert_eq!(mv.position(), (0, 1));
        assert_eq!(analysis.evaluation_score, 0);
        assert_eq!(analysis.nodes_explored, 1);
        assert!(analysis.move_reasoning.contains("Fallback"));
    }
}

mod easy_difficulty {
    use super::*;

    #[test]
    fn test_keeps_the_searched_move() {
        let engine = SearchEngine::default();
        let position = board("OO./XX./...");
        let mut rng = Scripted::keep();

        let (mv, analysis) = engine
            .get_best_move(&position, Algorithm::Minimax, Difficulty::Easy, None, &mut rng)
            .unwrap();
        assert_eq!(mv.position(), (0, 2));
        assert_eq!(rng.chance_calls, 1);
        assert_eq!(rng.pick_calls, 0);
        assert_eq!(analysis.move_reasoning, "Classic minimax algorithm");
    }

    #[test]
    fn test_substitutes_a_random_empty_cell() {
        let engine = SearchEngine::default();
        let position = board("OO./XX./...");
        // Empty cells in scan order: (0,2) (1,2) (2,0) (2,1) (2,2)
        let mut rng = Scripted::substitute(3);

        let (mv, analysis) = engine
            .get_best_move(&position, Algorithm::AlphaBeta, Difficulty::Easy, None, &mut rng)
            .unwrap();
        assert_eq!(mv.position(), (2, 1));
        assert_eq!(mv.score, None);
        assert!(position.is_valid_move(mv.row, mv.col));
        assert!(analysis.move_reasoning.contains("Random move"));
        assert!(analysis.evaluation_score > 90);
        assert_eq!(rng.pick_calls, 1);
    }

    #[test]
    fn test_other_difficulties_never_consult_randomness() {
        let engine = SearchEngine::default();
        let position = board("X../.O./..X");

        for difficulty in [Difficulty::Medium, Difficulty::Hard] {
            let mut rng = Scripted::new(&[true], &[0]);
            engine
                .get_best_move(&position, Algorithm::AlphaBeta, difficulty, None, &mut rng)
                .unwrap();
            assert_eq!(rng.chance_calls, 0);
            assert_eq!(rng.pick_calls, 0);
        }
    }
}

mod depth_bounds {
    use super::*;

    #[test]
    fn test_policy_depths_are_monotonic() {
        let engine = SearchEngine::default();
        let easy = engine.search_depth(Difficulty::Easy, None);
        let medium = engine.search_depth(Difficulty::Medium, None);
        let hard = engine.search_depth(Difficulty::Hard, None);
        assert_eq!((easy, medium, hard), (3, 6, 9));
    }

    #[test]
    fn test_max_depth_reached_respects_the_bound() {
        let engine = SearchEngine::default();
        let position = board("X../.../...");

        for algorithm in Algorithm::ALL {
            for difficulty in Difficulty::ALL {
                let bound = engine.search_depth(difficulty, None);
                let (_, analysis) = engine
                    .get_best_move(&position, algorithm, difficulty, None, &mut Scripted::keep())
                    .unwrap();
                assert!(analysis.max_depth_reached <= bound);
                assert!(analysis.nodes_explored > 0);
            }
            for depth in 1..=8 {
                let (_, analysis) = engine
                    .get_best_move(
                        &position,
                        algorithm,
                        Difficulty::Hard,
                        Some(depth),
                        &mut Scripted::keep(),
                    )
                    .unwrap();
                assert!(analysis.max_depth_reached <= depth, "{algorithm}");
                if algorithm != Algorithm::AlphaBeta {
                    assert_eq!(analysis.max_depth_reached, depth, "{algorithm}");
                }
            }
        }
    }

    #[test]
    fn test_deeper_search_explores_more_nodes() {
        let engine = SearchEngine::default();
        let position = board("X../.../...");

        let nodes: Vec<u64> = Difficulty::ALL
            .iter()
            .map(|&difficulty| {
                engine
                    .get_best_move(
                        &position,
                        Algorithm::Minimax,
                        difficulty,
                        None,
                        &mut Scripted::keep(),
                    )
                    .unwrap()
                    .1
                    .nodes_explored
            })
            .collect();
        assert!(nodes.windows(2).all(|pair| pair[0] < pair[1]), "{nodes:?}");
    }
}
