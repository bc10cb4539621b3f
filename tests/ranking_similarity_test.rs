use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use ranksim::assertions::assert_ranking_similarity;
use ranksim::error::RankSimError;
use ranksim::ranking::{RankedList, RankingSimilarity, SharedRankingSimilarity};
use serde_json::json;

fn random_ranking(rng: &mut StdRng, vocabulary: &[&'static str]) -> Vec<&'static str> {
    let mut items = vocabulary.to_vec();
    items.shuffle(rng);
    let len = rng.random_range(0..=items.len());
    items.truncate(len);
    items
}

#[tokio::test]
async fn test_assert_ranking_similarity_partial_overlap() {
    assert_ranking_similarity(["a", "b"], ["b", "c"], 0.4);
}

#[tokio::test]
async fn test_swapped_scores_higher_than_shifted() {
    let mut scorer = RankingSimilarity::new(0.5);
    let shifted = scorer
        .measure(&RankedList::from(["a", "b"]), &RankedList::from(["b", "c"]))
        .unwrap();
    let swapped = scorer
        .measure(&RankedList::from(["a", "b"]), &RankedList::from(["b", "a"]))
        .unwrap();
    assert!(swapped > shifted, "Ranking not working.");
}

#[tokio::test]
async fn test_record_lists_are_successful() {
    let mut scorer = RankingSimilarity::new(0.5);
    scorer
        .measure_json(
            &json!([{"text": "a"}, {"text": "b"}]),
            &json!([{"text": "b"}, {"text": "c"}]),
        )
        .unwrap();
    assert!(scorer.is_successful().unwrap(), "Ranking dicts not working.");
}

#[test]
fn test_records_match_plain_values() {
    let mut scorer = RankingSimilarity::new(0.5);
    let cases = [
        (json!(["a", "b", "c"]), json!(["c", "a", "d", "e"])),
        (json!(["x"]), json!(["y", "x"])),
        (json!(["p", "q"]), json!(["r", "s"])),
    ];

    for (plain_1, plain_2) in cases {
        let as_records = |value: &serde_json::Value| {
            let records: Vec<_> = value
                .as_array()
                .unwrap()
                .iter()
                .map(|text| json!({"text": text, "score": 1.0}))
                .collect();
            serde_json::Value::Array(records)
        };

        let plain = scorer.measure_json(&plain_1, &plain_2).unwrap();
        let records = scorer
            .measure_json(&as_records(&plain_1), &as_records(&plain_2))
            .unwrap();
        assert_eq!(plain, records);
    }
}

#[test]
fn test_self_similarity_and_disjoint_bounds() {
    let mut scorer = RankingSimilarity::new(0.5);
    let list = RankedList::from(["alpha", "beta", "gamma", "delta"]);
    assert_eq!(scorer.measure(&list, &list).unwrap(), 1.0);

    let other = RankedList::from(["one", "two"]);
    assert_eq!(scorer.measure(&list, &other).unwrap(), 0.0);
    assert!(!scorer.is_successful().unwrap());
}

#[test]
fn test_non_sequence_input() {
    let mut scorer = RankingSimilarity::new(0.5);
    let err = scorer.measure_json(&json!(42), &json!(["a"])).unwrap_err();
    assert!(matches!(err, RankSimError::Input(_)));

    let err = scorer.measure_json(&json!(["a"]), &json!({"text": "a"})).unwrap_err();
    assert!(matches!(err, RankSimError::Input(_)));

    assert!(matches!(scorer.is_successful(), Err(RankSimError::State(_))));
}

#[test]
fn test_random_rankings_are_bounded_symmetric_and_stable() {
    let vocabulary = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"];
    let mut rng = StdRng::seed_from_u64(42);
    let mut scorer = RankingSimilarity::new(0.5);

    for _ in 0..500 {
        let left = random_ranking(&mut rng, &vocabulary);
        let right = random_ranking(&mut rng, &vocabulary);

        let forward = scorer.measure_keys(&left, &right);
        let backward = scorer.measure_keys(&right, &left);
        let again = scorer.measure_keys(&left, &right);

        assert!((0.0..=1.0).contains(&forward), "{left:?} {right:?} -> {forward}");
        assert!((forward - backward).abs() < 1e-12, "{left:?} {right:?}");
        assert_eq!(forward, again);
        assert_eq!(scorer.measure_keys(&left, &left), 1.0);
    }
}

#[test]
fn test_extra_shared_item_never_lowers_score() {
    let vocabulary = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"];
    let mut rng = StdRng::seed_from_u64(7);
    let mut scorer = RankingSimilarity::new(0.5);

    for _ in 0..500 {
        let left = random_ranking(&mut rng, &vocabulary);
        let right = random_ranking(&mut rng, &vocabulary);
        let before = scorer.measure_keys(&left, &right);

        // A new item that both rankings put first.
        let mut left_plus = vec!["new"];
        left_plus.extend(&left);
        let mut right_plus = vec!["new"];
        right_plus.extend(&right);
        let after = scorer.measure_keys(&left_plus, &right_plus);

        assert!(
            after >= before - 1e-12,
            "{left:?} {right:?}: {before} -> {after}"
        );
    }
}

#[test]
fn test_more_shared_items_score_higher() {
    let mut scorer = RankingSimilarity::new(0.5);
    let base = ["a", "b", "c", "d"];
    let one_shared = scorer.measure_keys(&base, &["d", "x", "y", "z"]);
    let two_shared = scorer.measure_keys(&base, &["d", "c", "x", "y"]);
    assert!(two_shared > one_shared, "{two_shared} <= {one_shared}");
}

#[test]
fn test_long_lists_sharing_last_item_score_near_zero() {
    let mut scorer = RankingSimilarity::new(0.1);

    for n in [20, 50, 200] {
        let mut left: Vec<String> = (0..n - 1).map(|i| format!("left-{i}")).collect();
        let mut right: Vec<String> = (0..n - 1).map(|i| format!("right-{i}")).collect();
        left.push("shared".to_string());
        right.push("shared".to_string());

        let score = scorer.measure_keys(&left, &right);
        assert!(score > 0.0, "n = {n}");
        assert!(score < 0.05, "n = {n}: {score}");
        assert!(!scorer.is_successful().unwrap(), "n = {n}");
    }
}

#[tokio::test]
async fn test_shared_scorer_across_tasks() {
    let shared = SharedRankingSimilarity::new(RankingSimilarity::new(0.5));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let shared = shared.clone();
        handles.push(tokio::spawn(async move {
            shared.measure_json(
                &json!([{"text": "a"}, {"text": "b"}]),
                &json!([{"text": "b"}, {"text": "c"}]),
            )
        }));
    }

    for handle in handles {
        let score = handle.await.unwrap().unwrap();
        assert!((score - 0.525).abs() < 1e-10);
    }
    assert!(shared.is_successful().unwrap());
}
