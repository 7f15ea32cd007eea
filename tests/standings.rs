//! Integration tests for ranking.

use league_tournament_web::{
    standings, Entrant, EntrantStats, League, RankCriterion, Ranking,
};

fn entrant(name: &str, points: u32, goals_for: u64, goals_against: u64) -> Entrant {
    let mut e = Entrant::new(name);
    e.stats = EntrantStats {
        points,
        goals_for,
        goals_against,
        goal_difference: goals_for as i64 - goals_against as i64,
        ..Default::default()
    };
    e
}

fn names(table: &[Entrant]) -> Vec<&str> {
    table.iter().map(|e| e.name.as_str()).collect()
}

#[test]
fn points_then_goal_difference() {
    let league = League {
        entrants: vec![
            entrant("A", 6, 4, 2),
            entrant("B", 6, 5, 1),
            entrant("C", 3, 1, 2),
        ],
        matches: Vec::new(),
    };
    let table = standings(&league, &Ranking::default());
    assert_eq!(names(&table), vec!["B", "A", "C"]);
}

#[test]
fn unplayed_entrants_sort_by_points_only() {
    let league = League {
        entrants: vec![
            entrant("Idle", 0, 0, 0),
            entrant("Loser", 0, 0, 5),
            entrant("Winner", 3, 2, 0),
        ],
        matches: Vec::new(),
    };
    let table = standings(&league, &Ranking::default());
    assert_eq!(names(&table), vec!["Winner", "Idle", "Loser"]);
}

#[test]
fn full_ties_keep_registration_order() {
    let league = League {
        entrants: vec![
            entrant("First", 4, 3, 3),
            entrant("Second", 4, 2, 2),
            entrant("Third", 4, 5, 5),
        ],
        matches: Vec::new(),
    };
    let table = standings(&league, &Ranking::default());
    assert_eq!(names(&table), vec!["First", "Second", "Third"]);
}

#[test]
fn custom_ranking_breaks_further_ties() {
    let league = League {
        entrants: vec![
            entrant("First", 4, 3, 3),
            entrant("Second", 4, 2, 2),
            entrant("Third", 4, 5, 5),
        ],
        matches: Vec::new(),
    };
    let ranking = Ranking::new(vec![
        RankCriterion::Points,
        RankCriterion::GoalDifference,
        RankCriterion::GoalsFor,
    ]);
    assert_eq!(names(&standings(&league, &ranking)), vec!["Third", "First", "Second"]);

    let ranking = Ranking::new(vec![RankCriterion::GoalsAgainst, RankCriterion::Name]);
    assert_eq!(names(&standings(&league, &ranking)), vec!["Second", "First", "Third"]);
}
