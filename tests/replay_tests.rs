// Integration tests for deterministic replay

use algoscope::generators::generate_steps;
use algoscope::replay::{ReplayMachine, ReplayPhase, ReplayState};
use algoscope::snapshot::CheckpointStore;
use algoscope::step::{Algorithm, Value};
use proptest::prelude::*;

const SORTS: [Algorithm; 4] = [
    Algorithm::Bubble,
    Algorithm::Merge,
    Algorithm::Quick,
    Algorithm::Heap,
];

fn loaded(algorithm: Algorithm, input: &[Value], checkpoints: CheckpointStore) -> ReplayMachine {
    let initial = if algorithm.uses_input() {
        input.to_vec()
    } else {
        Vec::new()
    };
    let mut machine = ReplayMachine::new(initial, checkpoints);
    machine
        .load(generate_steps(algorithm, input).expect("generation failed"))
        .expect("generated sequence rejected");
    machine
}

/// State reached by advancing `count` times from the pristine state
fn advanced(algorithm: Algorithm, input: &[Value], count: usize) -> ReplayState {
    let mut machine = loaded(algorithm, input, CheckpointStore::disabled());
    for _ in 0..count {
        machine.advance().expect("advance failed");
    }
    machine.state().clone()
}

#[test]
fn test_every_algorithm_replays_to_completion() {
    let input = [64, 34, 25, 12, 22, 11, 90];
    for algorithm in Algorithm::ALL {
        let mut machine = loaded(algorithm, &input, CheckpointStore::disabled());
        assert_eq!(machine.phase(), ReplayPhase::Ready);

        machine.seek_to_end().expect("seek failed");
        assert_eq!(machine.phase(), ReplayPhase::Complete, "{}", algorithm);
        assert!(!machine.advance().unwrap());
    }
}

#[test]
fn test_default_input_sorts() {
    let input = [64, 34, 25, 12, 22, 11, 90];
    for algorithm in SORTS {
        let mut machine = loaded(algorithm, &input, CheckpointStore::disabled());
        machine.seek_to_end().unwrap();
        assert_eq!(machine.state().array, vec![11, 12, 22, 25, 34, 64, 90]);
        assert_eq!(machine.state().sorted_indices.len(), 7, "{}", algorithm);
    }
}

#[test]
fn test_graph_replay_visits_everything() {
    for algorithm in [Algorithm::Bfs, Algorithm::Dfs] {
        let mut machine = loaded(algorithm, &[], CheckpointStore::disabled());
        machine.seek_to_end().unwrap();
        let state = machine.state();
        assert_eq!(state.visited_nodes.len(), 6);
        assert!(state.array.is_empty());
    }

    let mut bfs = loaded(Algorithm::Bfs, &[], CheckpointStore::disabled());
    bfs.seek_to_end().unwrap();
    assert_eq!(bfs.state().queue, vec!["B", "D", "C", "E", "F"]);
}

#[test]
fn test_dfs_replay_stacks_each_node_once() {
    let mut dfs = loaded(Algorithm::Dfs, &[], CheckpointStore::disabled());
    dfs.seek_to_end().unwrap();

    let stack = &dfs.state().stack;
    assert_eq!(stack, &vec!["D", "B", "E", "C", "F"]);
    let mut unique = stack.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), stack.len());
}

#[test]
fn test_bst_replay_builds_canonical_tree() {
    let mut machine = loaded(Algorithm::Bst, &[], CheckpointStore::disabled());
    machine.seek_to_end().unwrap();

    let tree = &machine.state().tree;
    assert_eq!(tree.len(), 7);
    assert_eq!(tree.height(), 3);
    assert_eq!(tree.root().map(|n| n.value), Some(50));
    assert!(tree.is_search_tree());
}

#[test]
fn test_retreat_from_start_is_noop() {
    let mut machine = loaded(Algorithm::Heap, &[3, 1, 2], CheckpointStore::disabled());
    assert!(!machine.retreat().unwrap());
    assert_eq!(machine.phase(), ReplayPhase::Ready);
    assert_eq!(machine.state(), machine.initial_state());
}

#[test]
fn test_reset_restores_original_array() {
    let mut machine = loaded(Algorithm::Quick, &[5, 4, 3, 2, 1], CheckpointStore::disabled());
    machine.seek_to_end().unwrap();
    machine.reset();

    let state = machine.state();
    assert_eq!(state.array, vec![5, 4, 3, 2, 1]);
    assert!(state.sorted_indices.is_empty());
    assert_eq!(state.pivot_index, None);
    assert_eq!(machine.phase(), ReplayPhase::Ready);
}

#[test]
fn test_seek_clamps_to_last_step() {
    let mut machine = loaded(Algorithm::Bubble, &[2, 1], CheckpointStore::disabled());
    machine.seek(Some(1_000)).unwrap();
    assert_eq!(machine.position(), Some(machine.len() - 1));
    machine.seek(None).unwrap();
    assert_eq!(machine.position(), None);
}

proptest! {
    #[test]
    fn prop_full_replay_sorts_and_marks_everything(values in prop::collection::vec(-200i64..200, 1..40)) {
        let mut expected = values.clone();
        expected.sort();

        for algorithm in SORTS {
            let mut machine = loaded(algorithm, &values, CheckpointStore::disabled());
            machine.seek_to_end().unwrap();
            let state = machine.state();
            prop_assert_eq!(&state.array, &expected);
            prop_assert!((0..values.len()).all(|i| state.sorted_indices.contains(&i)));
        }
    }

    #[test]
    fn prop_retreat_then_advance_matches_direct_navigation(
        values in prop::collection::vec(-50i64..50, 1..16),
        algorithm_index in 0usize..7,
        fraction in 0.0f64..1.0,
    ) {
        let algorithm = Algorithm::ALL[algorithm_index];
        let mut machine = loaded(algorithm, &values, CheckpointStore::new(3, usize::MAX));
        let len = machine.len();
        // Target positions 1..=len so there is always a step to retreat over
        let target = 1 + ((len - 1) as f64 * fraction) as usize;

        for _ in 0..target {
            machine.advance().unwrap();
        }
        prop_assert!(machine.retreat().unwrap());
        prop_assert_eq!(machine.state(), &advanced(algorithm, &values, target - 1));
        prop_assert!(machine.advance().unwrap());
        prop_assert_eq!(machine.state(), &advanced(algorithm, &values, target));
    }

    #[test]
    fn prop_checkpoints_do_not_change_replay(
        values in prop::collection::vec(-50i64..50, 1..24),
        interval in 1usize..8,
    ) {
        for algorithm in SORTS {
            let mut plain = loaded(algorithm, &values, CheckpointStore::disabled());
            let mut cached = loaded(algorithm, &values, CheckpointStore::new(interval, usize::MAX));
            plain.seek_to_end().unwrap();
            cached.seek_to_end().unwrap();
            while plain.retreat().unwrap() {
                prop_assert!(cached.retreat().unwrap());
                prop_assert_eq!(plain.state(), cached.state());
            }
            prop_assert_eq!(cached.phase(), ReplayPhase::Ready);
        }
    }
}
