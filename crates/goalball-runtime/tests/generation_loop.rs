//! Generation loop integration - evaluate, pick the winner, save, replay.

use goalball_runtime::prelude::*;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

fn driver() -> GenerationDriver {
    GenerationDriver::new(EpisodeConfig::default().with_seed(5))
        .unwrap()
        .with_max_generations(3)
}

#[test]
fn sample_population_produces_a_winner() {
    let mut driver = driver();
    let mut population = sample_population();

    let summary = driver.evaluate(&mut population).unwrap();
    assert_eq!(summary.generation, 1);
    assert_eq!(summary.population, 5);
    // Both waypoint seekers reach the goal; they tie and the first wins.
    assert_eq!(summary.goal_count, 2);
    assert_eq!(summary.best_id, Some(GenomeId(3)));
    assert!(summary.best_fitness.unwrap() > 586.0);

    for candidate in &population {
        assert!(candidate.fitness.is_some(), "{} has no fitness", candidate.id);
    }
    assert_eq!(driver.remaining(), Some(2));
}

#[test]
fn fitness_is_reproducible_across_generations() {
    let mut driver = driver();
    let mut population = sample_population();

    driver.evaluate(&mut population).unwrap();
    let first: Vec<Option<f64>> = population.iter().map(|c| c.fitness).collect();
    driver.evaluate(&mut population).unwrap();
    let second: Vec<Option<f64>> = population.iter().map(|c| c.fitness).collect();

    assert_eq!(first, second);
    assert_eq!(driver.history().len(), 2);
    assert_eq!(driver.history().best_ever().map(|b| b.generation), Some(1));
}

#[test]
fn raised_flag_interrupts_without_advancing() {
    let mut driver = driver();
    let mut population = sample_population();
    let flag = Arc::new(AtomicBool::new(true));
    let mut hooks = EpisodeHooks::none().with_quit(flag.clone());

    let summary = driver.evaluate_with(&mut population, &mut hooks).unwrap();
    assert!(summary.interrupted);
    assert_eq!(summary.ticks_run, 0);
    assert_eq!(driver.generation(), 0);
    // Partial (here: empty) fitness is still written back.
    assert!(population.iter().all(|c| c.fitness == Some(0.0)));
    assert!(driver.history().best_ever().is_none());
}

#[test]
fn frames_carry_the_generation_number() {
    let mut driver = driver();
    let mut population = sample_population();
    let mut recorder = FrameRecorder::new();

    driver
        .evaluate_with(
            &mut population,
            &mut EpisodeHooks::none().with_renderer(&mut recorder, 40),
        )
        .unwrap();
    driver
        .evaluate_with(
            &mut population,
            &mut EpisodeHooks::none().with_renderer(&mut recorder, 40),
        )
        .unwrap();

    let generations: Vec<u64> = recorder.frames().iter().map(|f| f.generation).collect();
    assert_eq!(generations, vec![1, 1, 1, 1, 1, 2, 2, 2, 2, 2]);
    assert_eq!(recorder.frames()[0].positions.len(), 5);
}

#[test]
fn winner_round_trips_through_disk_and_replays() {
    let mut driver = driver();
    let mut population = sample_population();
    let summary = driver.evaluate(&mut population).unwrap();

    let best_id = summary.best_id.unwrap();
    let best = population.iter().find(|c| c.id == best_id).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("best.json");
    let meta = PolicyMetadata::new(RunId::new(), summary.generation)
        .with_genome(best.id, best.fitness);
    save_policy(&path, &best.policy, meta).unwrap();

    let saved = load_policy(&path).unwrap();
    assert_eq!(saved.metadata.genome, Some(GenomeId(3)));
    assert_eq!(saved.policy.kind(), PolicyKind::Seek);

    let mut policy = saved.policy.instantiate().unwrap();
    let mut replay = Replay::new(driver.config().clone()).unwrap();
    let demo = replay.run(&mut policy).unwrap();
    assert_eq!(demo.outcome, Outcome::GoalReached);
    assert_eq!(demo.terminal_step, 114);
}
