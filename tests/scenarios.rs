//! End-to-end packing scenarios.

use std::io::Cursor;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use u_shelf::io::{read_tasks, TaskGenerator};
use u_shelf::models::{Task, TaskSet};
use u_shelf::packing::{Algorithm, FirstFitPacker};
use u_shelf::scheduler::{lower_bound, PackingRequest, StripScheduler};
use u_shelf::validation::ValidationErrorKind;
use u_shelf::Error;

fn validation_kinds(err: Error) -> Vec<ValidationErrorKind> {
    match err {
        Error::Validation(errors) => errors.into_iter().map(|e| e.kind).collect(),
        other => panic!("expected validation error, got {other}"),
    }
}

#[test]
fn test_nfdh_equal_heights_share_shelf() {
    let tasks = read_tasks(Cursor::new("1 3\n1 3\n2 1\n")).unwrap();
    let request = PackingRequest::new(tasks, 2).with_algorithm(Algorithm::Nfdh);
    let report = StripScheduler::new().schedule_request(&request).unwrap();

    assert_eq!(report.makespan(), 4.0);
    assert_eq!(report.shelf_count, 2);
    assert_eq!(report.lower_bound(), 4.0);
}

#[test]
fn test_ffdh_stacks_and_refills() {
    let tasks = vec![
        Task::new(2, 5),
        Task::new(2, 4),
        Task::new(1, 4),
        Task::new(1, 1),
    ];
    let set = TaskSet::new(tasks, 3).unwrap();
    let shelves = FirstFitPacker::new()
        .pack_shelves(set.tasks(), set.strip_width())
        .unwrap();

    assert_eq!(shelves.len(), 2);
    assert_eq!(shelves.get(0).unwrap().end(), 5);
    assert_eq!(shelves.get(1).unwrap().y_offset, 5);
    assert_eq!(shelves.get(1).unwrap().end(), 9);

    let scheduler = StripScheduler::new();
    let report = scheduler.schedule(&set, Algorithm::Ffdh).unwrap();
    assert_eq!(report.makespan(), 9.0);
}

#[test]
fn test_empty_task_set_rejected() {
    for algorithm in Algorithm::ALL {
        let request = PackingRequest::new(Vec::new(), 8).with_algorithm(algorithm);
        let err = StripScheduler::new().schedule_request(&request).unwrap_err();
        assert_eq!(
            validation_kinds(err),
            vec![ValidationErrorKind::EmptyTaskSet]
        );
    }
}

#[test]
fn test_task_wider_than_strip_rejected() {
    let tasks = read_tasks(Cursor::new("2 4\n9 1\n")).unwrap();
    let err = TaskSet::new(tasks, 8).unwrap_err();
    assert_eq!(
        validation_kinds(err),
        vec![ValidationErrorKind::WidthExceedsStrip]
    );
}

#[test]
fn test_huge_strip_width_rejected() {
    let tasks = read_tasks(Cursor::new("9223372036854775807 1\n")).unwrap();
    for algorithm in Algorithm::ALL {
        let request = PackingRequest::new(tasks.clone(), i64::MAX);
        let request = request.with_algorithm(algorithm);
        let err = StripScheduler::new().schedule_request(&request).unwrap_err();
        assert_eq!(
            validation_kinds(err),
            vec![ValidationErrorKind::StripWidthTooLarge]
        );
    }
}

#[test]
fn test_lower_bound_holds_for_random_sets() {
    let mut rng = SmallRng::seed_from_u64(2024);
    let scheduler = StripScheduler::new();

    for _ in 0..40 {
        let strip_width = rng.random_range(1..=256);
        let count = rng.random_range(1..=500);
        let tasks = TaskGenerator::new(strip_width).generate(count, &mut rng);
        let set = TaskSet::new(tasks, strip_width).unwrap();

        for report in scheduler.compare(&set).unwrap() {
            assert!(report.makespan() + 1e-9 >= lower_bound(&set));
            assert!(report.epsilon() >= -1e-9);
            assert_eq!(report.task_count, count);
        }
    }
}

#[test]
fn test_repeated_runs_identical() {
    let tasks = TaskGenerator::new(128).generate_seeded(1000, 77);
    let set = TaskSet::new(tasks, 128).unwrap();
    let scheduler = StripScheduler::new();

    for algorithm in Algorithm::ALL {
        let first = scheduler.schedule(&set, algorithm).unwrap();
        let second = scheduler.schedule(&set, algorithm).unwrap();
        assert_eq!(first.quality, second.quality);
        assert_eq!(first.shelf_count, second.shelf_count);
    }
}
