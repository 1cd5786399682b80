use super::*;

#[test]
fn rates_round_of_ten() {
    let expected = [
        (10, Rating::Perfect),
        (9, Rating::Excellent),
        (8, Rating::Excellent),
        (7, Rating::Good),
        (6, Rating::Good),
        (5, Rating::NotBad),
        (4, Rating::NotBad),
        (3, Rating::KeepTrying),
        (0, Rating::KeepTrying),
    ];
    for (score, rating) in expected.iter() {
        assert_eq!(Rating::from_score(*score, 10), *rating, "score {}", score);
    }
}

#[test]
fn boundaries_take_higher_bucket() {
    // 4/5 is exactly 80%, 3/5 exactly 60%, 2/5 exactly 40%
    assert_eq!(Rating::from_score(4, 5), Rating::Excellent);
    assert_eq!(Rating::from_score(3, 5), Rating::Good);
    assert_eq!(Rating::from_score(2, 5), Rating::NotBad);
    assert_eq!(Rating::from_score(1, 5), Rating::KeepTrying);
}

#[test]
fn just_below_boundary_takes_lower_bucket() {
    // 79/100, 59/100, 39/100
    assert_eq!(Rating::from_score(79, 100), Rating::Good);
    assert_eq!(Rating::from_score(59, 100), Rating::NotBad);
    assert_eq!(Rating::from_score(39, 100), Rating::KeepTrying);
    assert_eq!(Rating::from_score(99, 100), Rating::Excellent);
}

#[test]
fn summary_carries_description() {
    let summary = Summary::new(10, 10);
    assert_eq!(summary.rating, Rating::Perfect);
    assert_eq!(summary.description(), Rating::Perfect.description());
}

#[test]
fn progress_percentage() {
    let progress = Progress {
        answered: 3,
        total: 10,
        score: 2,
    };
    assert_eq!(progress.percentage(), 30);
    let empty = Progress {
        answered: 0,
        total: 0,
        score: 0,
    };
    assert_eq!(empty.percentage(), 0);
}
