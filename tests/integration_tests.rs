use psort::prelude::*;
use psort::{SERIAL_THRESHOLD, SortPath};
use rand::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn reference<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    let mut expected = input.to_vec();
    expected.sort_unstable();
    expected
}

#[test]
fn test_basic_example() {
    let mut input = vec![5, 3, 8, 1, 9, 2];
    psort(&mut input);
    assert_eq!(input, vec![1, 2, 3, 5, 8, 9]);
}

#[test]
fn test_empty_and_single() {
    let mut empty: Vec<i32> = vec![];
    psort(&mut empty);
    assert!(empty.is_empty());

    let mut single = vec![7];
    psort(&mut single);
    assert_eq!(single, vec![7]);
}

#[test]
fn test_strings() {
    let mut input = vec![
        "banana".to_string(),
        "apple".to_string(),
        "cherry".to_string(),
        "date".to_string(),
    ];
    psort(&mut input);
    assert_eq!(input, vec!["apple", "banana", "cherry", "date"]);
}

#[test]
fn test_parallel_random_u32() {
    let mut rng = StdRng::seed_from_u64(42);
    let input: Vec<u32> = (0..20_000).map(|_| rng.random::<u32>()).collect();
    let expected = reference(&input);

    let mut actual = input.clone();
    let stats = Sorter::default().sort(&mut actual).unwrap();

    assert_eq!(stats.path, SortPath::Parallel);
    assert_eq!(actual, expected);
}

#[test]
fn test_threshold_boundary_same_output() {
    let mut rng = StdRng::seed_from_u64(7);
    let pool: Vec<u16> = (0..SERIAL_THRESHOLD + 1)
        .map(|_| rng.random_range(0..500))
        .collect();

    // Same multiset minus one element on either side of the threshold.
    let mut serial = pool[..SERIAL_THRESHOLD].to_vec();
    let mut parallel = pool.clone();

    let sorter = Sorter::default();
    assert_eq!(sorter.sort(&mut serial).unwrap().path, SortPath::Serial);
    assert_eq!(sorter.sort(&mut parallel).unwrap().path, SortPath::Parallel);

    assert_eq!(serial, reference(&pool[..SERIAL_THRESHOLD]));
    assert_eq!(parallel, reference(&pool));
}

#[test]
fn test_idempotent() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut input: Vec<i64> = (0..30_000).map(|_| rng.random()).collect();
    psort(&mut input);
    let once = input.clone();
    psort(&mut input);
    assert_eq!(input, once);
}

#[test]
fn test_deterministic_across_runs() {
    let mut rng = StdRng::seed_from_u64(11);
    let input: Vec<u32> = (0..100_000).map(|_| rng.random_range(0..1000)).collect();

    let mut first = input.clone();
    psort(&mut first);
    for _ in 0..5 {
        let mut again = input.clone();
        psort(&mut again);
        assert_eq!(again, first);
    }
}

#[test]
fn test_fuzz_random_lengths() {
    let mut rng = rand::rng();

    for _ in 0..200 {
        let len = rng.random_range(0..2_000);
        let input: Vec<i32> = (0..len).map(|_| rng.random_range(-100..100)).collect();
        let mut actual = input.clone();
        psort(&mut actual);
        assert_eq!(actual, reference(&input));
    }
}

#[test]
fn test_fuzz_small_thresholds() {
    // Low thresholds push tiny inputs through the parallel path.
    let mut rng = StdRng::seed_from_u64(1234);

    for scheduler in [Scheduler::Tasks, Scheduler::NestedJoin] {
        let sorter = Sorter::new(
            SortConfig::default()
                .with_serial_threshold(8)
                .with_task_threshold(4)
                .with_thread_count(4)
                .with_scheduler(scheduler),
        )
        .unwrap();

        for _ in 0..100 {
            let len = rng.random_range(0..500);
            let input: Vec<u8> = (0..len).map(|_| rng.random()).collect();
            let mut actual = input.clone();
            sorter.sort(&mut actual).unwrap();
            assert_eq!(actual, reference(&input), "{:?}", scheduler);
        }
    }
}

#[test]
fn test_edge_patterns() {
    let len = 50_000;

    // 1. All same
    let mut input = vec![9u32; len];
    psort(&mut input);
    assert!(input.iter().all(|&x| x == 9));

    // 2. Reversed
    let mut input: Vec<u32> = (0..len as u32).rev().collect();
    psort(&mut input);
    assert!(input.windows(2).all(|w| w[0] <= w[1]));

    // 3. Sorted
    let mut input: Vec<u32> = (0..len as u32).collect();
    let expected = input.clone();
    psort(&mut input);
    assert_eq!(input, expected);

    // 4. Two values
    let mut input: Vec<u32> = (0..len as u32).map(|i| i % 2).collect();
    let expected = reference(&input);
    psort(&mut input);
    assert_eq!(input, expected);

    // 5. Organ pipe
    let mut input: Vec<u32> = (0..len as u32)
        .map(|i| if i < len as u32 / 2 { i } else { len as u32 - i })
        .collect();
    let expected = reference(&input);
    psort(&mut input);
    assert_eq!(input, expected);
}

#[test]
fn test_psort_by_descending() {
    let mut rng = StdRng::seed_from_u64(5);
    let input: Vec<u64> = (0..40_000).map(|_| rng.random()).collect();

    let mut actual = input.clone();
    psort_by(&mut actual, &|a: &u64, b: &u64| a > b);

    let mut expected = reference(&input);
    expected.reverse();
    assert_eq!(actual, expected);
}

#[test]
fn test_psort_by_key() {
    let mut input: Vec<(u32, String)> = (0..10_000u32)
        .map(|i| ((i * 7_919) % 10_007, format!("item-{i}")))
        .collect();
    psort_by_key(&mut input, |(k, _)| *k);
    assert!(input.windows(2).all(|w| w[0].0 <= w[1].0));
}
