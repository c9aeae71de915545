mod common;

use common::{facility, observed_at, three_facilities};
use shared::aggregate::{max_free, ranked, summarize, top_n};
use shared::filter::apply;
use shared::snapshot::Snapshot;
use shared::stallingsnet::feed::Facility;

fn names<'a>(facilities: impl IntoIterator<Item = &'a Facility>) -> Vec<&'a str> {
    facilities
        .into_iter()
        .map(|f| f.facility_name.as_str())
        .collect()
}

fn mixed_snapshot() -> Snapshot {
    Snapshot::new(vec![
        facility("Stationsplein Laag", 40),
        facility("Neude", 12),
        facility("Pop Up Neude", 12),
        facility("Knoop Hoog", 0),
        facility("neude laag", 3),
        facility("Jaarbeursplein", 40),
    ])
}

#[test]
fn top_two_of_three_fixture() {
    let snapshot = three_facilities();
    let top = top_n(&snapshot, 2);
    assert_eq!(names(top.iter().copied()), ["Neude", "Stationsplein"]);
    assert_eq!(top[0].free_places, 12);
    assert_eq!(top[1].free_places, 5);
}

#[test]
fn min_free_of_one_excludes_full_facility() {
    let filtered = apply(&three_facilities(), "", 1);
    assert_eq!(names(filtered.facilities()), ["Stationsplein", "Neude"]);
}

#[test]
fn empty_query_and_zero_threshold_is_identity() {
    let snapshot = mixed_snapshot();
    assert_eq!(apply(&snapshot, "", 0), snapshot);
}

#[test]
fn empty_query_keeps_exactly_facilities_at_or_above_threshold() {
    let snapshot = mixed_snapshot();
    for min_free in [0, 1, 3, 4, 12, 13, 40, 41] {
        let expected: Vec<&str> = snapshot
            .facilities()
            .iter()
            .filter(|f| f.free_places >= min_free)
            .map(|f| f.facility_name.as_str())
            .collect();
        let filtered = apply(&snapshot, "", min_free);
        assert_eq!(names(filtered.facilities()), expected, "min_free {min_free}");
    }
}

#[test]
fn query_matches_case_insensitively_without_omissions() {
    let snapshot = mixed_snapshot();
    let filtered = apply(&snapshot, "NEUDE", 0);
    assert_eq!(names(filtered.facilities()), ["Neude", "Pop Up Neude", "neude laag"]);
    assert!(
        filtered
            .facilities()
            .iter()
            .all(|f| f.facility_name.to_lowercase().contains("neude"))
    );
}

#[test]
fn query_is_matched_literally() {
    let snapshot = Snapshot::new(vec![
        facility("P+R Westraven", 10),
        facility("PR Overvecht", 4),
    ]);
    assert_eq!(names(apply(&snapshot, "p+r", 0).facilities()), ["P+R Westraven"]);
}

#[test]
fn both_predicates_combine() {
    let filtered = apply(&mixed_snapshot(), "neude", 10);
    assert_eq!(names(filtered.facilities()), ["Neude", "Pop Up Neude"]);
}

#[test]
fn filter_leaves_input_untouched() {
    let snapshot = mixed_snapshot();
    let before = snapshot.clone();
    let filtered = apply(&snapshot, "nothing matches this", 0);
    assert!(filtered.is_empty());
    assert_eq!(snapshot, before);
}

#[test]
fn ranking_is_non_increasing_and_stable() {
    let snapshot = mixed_snapshot();
    let ranking = ranked(&snapshot);
    assert_eq!(
        names(ranking.iter().copied()),
        [
            "Stationsplein Laag",
            "Jaarbeursplein",
            "Neude",
            "Pop Up Neude",
            "neude laag",
            "Knoop Hoog",
        ]
    );
    assert!(ranking.windows(2).all(|w| w[0].free_places >= w[1].free_places));
}

#[test]
fn top_n_length_is_bounded_by_snapshot_size() {
    let snapshot = mixed_snapshot();
    assert_eq!(top_n(&snapshot, 0).len(), 0);
    assert_eq!(top_n(&snapshot, 3).len(), 3);
    assert_eq!(top_n(&snapshot, 100).len(), snapshot.len());
    assert!(top_n(&Snapshot::default(), 3).is_empty());
}

#[test]
fn summary_sums_columns() {
    let snapshot = mixed_snapshot();
    let stats = summarize(&snapshot);
    assert_eq!(stats.total_stallingen, 6);
    assert_eq!(stats.totaal_vrij, 40 + 12 + 12 + 3 + 40);
    assert_eq!(
        stats.totaal_plekken,
        snapshot.facilities().iter().map(|f| u64::from(f.total_places)).sum::<u64>()
    );
    assert_eq!(stats.totaal_bezet, 600);
}

#[test]
fn summary_counts_distinct_names() {
    let snapshot = Snapshot::new(vec![
        facility("Neude", 1),
        facility("Neude", 2),
        facility("Knoop", 3),
    ]);
    let stats = summarize(&snapshot);
    assert_eq!(stats.total_stallingen, 2);
    assert_eq!(stats.totaal_vrij, 6);
}

#[test]
fn latest_time_is_most_recent_observation() {
    let mut older = facility("Neude", 1);
    older.time = observed_at(1);
    let mut newest = facility("Knoop", 1);
    newest.time = observed_at(9);
    let snapshot = Snapshot::new(vec![older, newest]);
    assert_eq!(summarize(&snapshot).latest_time, Some(observed_at(9)));
}

#[test]
fn empty_snapshot_summarizes_to_zero() {
    let stats = summarize(&Snapshot::default());
    assert_eq!(stats.total_stallingen, 0);
    assert_eq!(stats.totaal_plekken, 0);
    assert_eq!(stats.totaal_vrij, 0);
    assert_eq!(stats.totaal_bezet, 0);
    assert_eq!(stats.latest_time, None);
    assert_eq!(max_free(&Snapshot::default()), 0);
}

#[test]
fn max_free_is_largest_free_count() {
    assert_eq!(max_free(&three_facilities()), 12);
}
