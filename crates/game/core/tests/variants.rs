mod common;

use common::first_step_towards;
use discomaze_core::{Environment, ExploreMaze, GoalMaze, InfoValue, MazeConfig, Palette};

#[test]
fn goal_maze_rewards_reaching_the_goal() {
    let mut env = GoalMaze::new(MazeConfig::new(5, 5).with_seed(17)).unwrap();
    let start = env.reset().unwrap();
    assert_eq!(start.observation, start.achieved_goal);
    assert_eq!(
        GoalMaze::compute_reward(&start.achieved_goal, &start.desired_goal),
        -1.0
    );

    let goal = env.goal();
    let mut last = None;
    for _ in 0..1_000 {
        let action = first_step_towards(env.inner().grid(), env.inner().player_position(), &[goal])
            .expect("goal is reachable");
        let transition = env.step(action).unwrap();
        if transition.terminated {
            last = Some(transition);
            break;
        }
        assert_eq!(transition.reward, 0.0);
    }

    let last = last.expect("episode ends at the goal");
    assert_eq!(last.reward, 1.0);
    assert_eq!(last.info.get("is_success"), Some(&InfoValue::Bool(true)));
    assert!(env.inner().is_alive());
    assert_eq!(last.observation.achieved_goal[goal], Palette::PLAYER);
    assert_eq!(
        GoalMaze::compute_reward(&last.observation.achieved_goal, &last.observation.desired_goal),
        0.0
    );

    let after = env.step(discomaze_core::Action::Stay).unwrap();
    assert!(after.terminated);
    assert_eq!(after.reward, 0.0);
}

#[test]
fn explore_maze_reward_grows_towards_the_goal() {
    let mut env = ExploreMaze::new(MazeConfig::new(5, 5).with_seed(23)).unwrap();
    env.reset().unwrap();
    let goal = env.goal();

    let mut previous = env.proximity()[env.inner().player_position()];
    for _ in 0..1_000 {
        let action = first_step_towards(env.inner().grid(), env.inner().player_position(), &[goal])
            .expect("goal is reachable");
        let transition = env.step(action).unwrap();
        // following a shortest path never moves away from the goal
        assert!(transition.reward > previous);
        previous = transition.reward;
        if transition.terminated {
            assert_eq!(transition.reward, 1.0);
            assert_eq!(env.inner().player_position(), goal);
            return;
        }
    }
    panic!("goal was never reached");
}
