//! 계수표 6.3/6.4 조회 회귀 테스트.
use electrical_load_toolbox::load::{
    discrete_rows, lookup_discrete, lookup_ranged, ranged_rows, round_rate_key,
};

#[test]
fn discrete_exact_row_and_column() {
    assert_eq!(lookup_discrete(5, 0.4), Some(1.15));
    assert_eq!(lookup_discrete(1, 0.1), Some(8.0));
    assert_eq!(lookup_discrete(100, 0.8), Some(1.0));
    assert_eq!(lookup_discrete(2, 0.15), Some(4.33));
}

#[test]
fn discrete_matches_rounded_keys() {
    // 3.0 / 10.0 처럼 반올림 과정에서 만들어진 키도 표 리터럴과 일치해야 한다.
    assert_eq!(lookup_discrete(4, round_rate_key(0.3227)), Some(1.39));
    assert_eq!(lookup_discrete(7, round_rate_key(0.65)), Some(1.0));
}

#[test]
fn discrete_misses_on_missing_row_or_column() {
    assert_eq!(lookup_discrete(11, 0.5), None);
    assert_eq!(lookup_discrete(0, 0.5), None);
    assert_eq!(lookup_discrete(101, 0.5), None);
    assert_eq!(lookup_discrete(5, 0.9), None);
    assert_eq!(lookup_discrete(5, f64::NAN), None);
}

#[test]
fn discrete_table_shape() {
    let keys: Vec<u32> = discrete_rows().iter().map(|r| r.n).collect();
    assert_eq!(
        keys,
        vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 12, 14, 16, 18, 20, 25, 30, 35, 40, 50, 60, 80, 100]
    );
}

#[test]
fn ranged_interior_of_range() {
    assert_eq!(lookup_ranged(7, 0.1), Some(1.20));
    assert_eq!(lookup_ranged(6, 0.7), Some(0.91));
    assert_eq!(lookup_ranged(40, 0.5), Some(0.80));
}

#[test]
fn ranged_boundaries_take_first_range() {
    // 10, 25, 50은 두 구간에 걸쳐 있으며 표 순서상 앞 구간이 선택된다.
    assert_eq!(lookup_ranged(10, 0.1), Some(1.10));
    assert_eq!(lookup_ranged(25, 0.1), Some(0.80));
    assert_eq!(lookup_ranged(50, 0.1), Some(0.75));
    assert_eq!(lookup_ranged(51, 0.1), Some(0.65));
}

#[test]
fn ranged_open_end_covers_large_counts() {
    assert_eq!(lookup_ranged(56, 0.3), Some(0.70));
    assert_eq!(lookup_ranged(u32::MAX, 0.6), Some(0.80));
}

#[test]
fn ranged_misses_without_column_or_range() {
    assert_eq!(lookup_ranged(7, 0.8), None);
    assert_eq!(lookup_ranged(0, 0.1), None);
}

#[test]
fn ranged_table_is_contiguous_from_one() {
    let rows = ranged_rows();
    assert_eq!(rows[0].start, 1);
    for pair in rows.windows(2) {
        let end = pair[0].end.expect("only the last range is open");
        assert!(pair[1].start <= end + 1, "gap after {end}");
    }
    assert!(rows[rows.len() - 1].end.is_none());
}

#[test]
fn rate_key_rounds_half_up() {
    assert_eq!(round_rate_key(0.25), 0.3);
    assert_eq!(round_rate_key(0.149), 0.1);
    assert_eq!(round_rate_key(0.4143), 0.4);
    assert_eq!(round_rate_key(0.0), 0.0);
    assert!(round_rate_key(f64::NAN).is_nan());
}
