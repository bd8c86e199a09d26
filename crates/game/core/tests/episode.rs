mod common;

use common::first_step_towards;
use discomaze_core::{
    Action, Cell, DiscoMaze, Direction, Environment, FieldRadius, MazeConfig, Palette, PcgRng,
    Position, WithPosition,
};
use rand::Rng;

fn random_actions(seed: u64, n: usize) -> Vec<Action> {
    let mut rng = PcgRng::new(seed);
    (0..n)
        .filter_map(|_| Action::from_index(rng.gen_range(0..Action::COUNT)))
        .collect()
}

#[test]
fn collecting_every_target_sums_to_target_count() {
    let k = 5;
    let mut sim = DiscoMaze::new(MazeConfig::new(6, 6).with_targets(k).with_seed(31)).unwrap();

    let mut total = 0.0;
    let mut steps = 0;
    while !sim.is_terminated() {
        let action = first_step_towards(sim.grid(), sim.player_position(), &sim.target_positions())
            .expect("targets are reachable through corridors");
        let transition = sim.step(action).unwrap();
        total += transition.reward;
        steps += 1;
        assert!(steps < 10_000);
    }

    assert_eq!(total, k as f32);
    assert!(sim.is_alive());
    assert!(sim.targets().is_empty());
    assert!(sim.objects().live().all(|(id, _)| id.is_player()));
}

#[test]
fn hitting_a_wall_kills_the_agent() {
    // in a single-row maze every corridor cell has a wall to the north
    let mut sim = DiscoMaze::new(MazeConfig::new(1, 4).with_targets(2).with_seed(8)).unwrap();
    let player = sim.player_position();
    let wall = player.step(Direction::North).unwrap();
    assert_eq!(sim.grid().get(wall), Some(Cell::Wall));

    let transition = sim.step(Action::North).unwrap();
    assert!(transition.terminated);
    assert_eq!(transition.reward, 0.0);
    assert!(!sim.is_alive());
    assert_eq!(sim.targets().len(), 2);

    // the displaced wall is gone and the agent stands in its place
    assert_eq!(sim.player_position(), wall);
    assert_eq!(sim.state()[wall], Palette::PLAYER);
}

#[test]
fn stepping_after_termination_repeats_last_observation() {
    let mut sim = DiscoMaze::new(MazeConfig::new(1, 1).with_targets(0).with_seed(0)).unwrap();
    let last = sim.step(Action::Stay).unwrap();
    assert!(last.terminated);

    for action in Action::ALL {
        let again = sim.step(action).unwrap();
        assert!(again.terminated);
        assert_eq!(again.reward, 0.0);
        assert_eq!(again.observation, last.observation);
    }
}

#[test]
fn single_cell_without_targets_terminates_on_first_step() {
    let mut sim = DiscoMaze::new(MazeConfig::new(1, 1).with_targets(0).with_seed(0)).unwrap();
    assert_eq!(sim.player_position(), Position::new(1, 1));
    let transition = sim.step(Action::Stay).unwrap();
    assert!(transition.terminated);
    assert!(sim.is_alive());
}

#[test]
fn targetless_episode_can_run_open_ended() {
    let config = MazeConfig::new(1, 1)
        .with_targets(0)
        .with_seed(0)
        .with_end_without_targets(false);
    let mut sim = DiscoMaze::new(config).unwrap();
    assert!(!sim.step(Action::Stay).unwrap().terminated);
}

#[test]
fn two_by_two_is_reproducible() {
    let config = MazeConfig::new(2, 2).with_targets(1).with_seed(0);
    let a = DiscoMaze::new(config.clone()).unwrap();
    let b = DiscoMaze::new(config).unwrap();

    assert_eq!(a.grid(), b.grid());
    assert_eq!(a.player_position(), b.player_position());
    assert_eq!(a.target_positions(), b.target_positions());
    assert_eq!(a.state(), b.state());
}

#[test]
fn same_seed_same_trajectory() {
    let config = MazeConfig::new(5, 5).with_targets(3).with_seed(2024);
    let mut a = DiscoMaze::new(config.clone()).unwrap();
    let mut b = DiscoMaze::new(config).unwrap();

    for action in random_actions(9, 200) {
        if a.is_terminated() {
            a.reset().unwrap();
            b.reset().unwrap();
        }
        assert_eq!(a.step(action).unwrap(), b.step(action).unwrap());
        assert_eq!(a.grid(), b.grid());
    }
}

#[test]
fn reseeding_reproduces_the_next_episode() {
    let config = MazeConfig::new(4, 4).with_seed(1);
    let mut a = DiscoMaze::new(config.clone()).unwrap();
    let mut b = DiscoMaze::new(config.with_seed(2)).unwrap();

    a.seed(Some(55));
    b.seed(Some(55));
    assert_eq!(a.reset().unwrap(), b.reset().unwrap());
    assert_eq!(a.grid(), b.grid());
}

#[test]
fn window_background_matches_mask() {
    let field = FieldRadius::new(3, 2);
    let config = MazeConfig::new(3, 4).with_targets(2).with_field(field).with_seed(6);
    let mut sim = DiscoMaze::new(config).unwrap();

    for action in random_actions(3, 40) {
        if sim.is_terminated() {
            sim.reset().unwrap();
        }
        let observation = sim.step(action).unwrap().observation;
        let mask = sim.mask();
        assert_eq!(observation.shape(), field.window_shape());
        assert_eq!(mask.shape(), field.window_shape());

        let center = Position::new(field.rows, field.cols);
        assert!(mask[center]);
        assert_eq!(observation[center], Palette::PLAYER);

        let player = sim.player_position();
        let (rows, cols) = sim.state().shape();
        for (position, &visible) in mask.iter() {
            let row = (player.row + position.row).checked_sub(center.row);
            let col = (player.col + position.col).checked_sub(center.col);
            let source = row
                .zip(col)
                .filter(|&(r, c)| r < rows && c < cols)
                .map(|(r, c)| Position::new(r, c));
            assert_eq!(visible, source.is_some(), "mask at {position}");
            match source {
                Some(src) => assert_eq!(observation[position], sim.state()[src]),
                None => assert_eq!(observation[position], Palette::BACKGROUND),
            }
        }
    }
}

#[test]
fn position_variant_runs_through_the_trait() {
    fn run<E: Environment>(env: &mut E, actions: &[Action]) -> usize {
        let mut steps = 0;
        for &action in actions {
            steps += 1;
            if env.step(action).unwrap().terminated {
                break;
            }
        }
        steps
    }

    let mut env = WithPosition::new(MazeConfig::new(4, 4).with_seed(3)).unwrap();
    env.reset().unwrap();
    assert!(run(&mut env, &random_actions(1, 30)) >= 1);
}
