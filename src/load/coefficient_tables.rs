//! 계산 활성전력 계수 Kp 참조표.
//! 표 6.3: 1000 V 이하 배전망용 (유효 설비 수 n 정확 일치).
//! 표 6.4: 공장 변압기 저압 모선·간선 버스덕트용 (n 구간).
//! 두 표 모두 정적 데이터이며 보간하지 않는다.

/// 표 6.3의 이용률(Kв) 열 키.
pub const DISCRETE_RATE_KEYS: [f64; 9] = [0.1, 0.15, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8];

/// 표 6.4의 이용률(Kв) 열 키. 0.8 열은 없다.
pub const RANGED_RATE_KEYS: [f64; 8] = [0.1, 0.15, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7];

// 반올림된 키(예: 3.0 / 10.0)와 표 리터럴 비교 시 표현 오차만 허용한다.
const KEY_EPS: f64 = 1e-9;

/// 표 6.3의 한 행. `n`이 정확히 일치할 때만 사용된다.
#[derive(Debug, Clone, Copy)]
pub struct DiscreteRow {
    pub n: u32,
    pub coefficients: [f64; 9],
}

impl DiscreteRow {
    const fn new(n: u32, coefficients: [f64; 9]) -> Self {
        Self { n, coefficients }
    }
}

/// 표 6.4의 한 구간 행. `end`가 `None`이면 상한이 없다.
#[derive(Debug, Clone, Copy)]
pub struct RangedRow {
    pub start: u32,
    pub end: Option<u32>,
    pub coefficients: [f64; 8],
}

impl RangedRow {
    const fn new(start: u32, end: Option<u32>, coefficients: [f64; 8]) -> Self {
        Self {
            start,
            end,
            coefficients,
        }
    }

    /// `n`이 이 구간(양 끝 포함)에 속하는지 판단한다.
    pub fn contains(&self, n: u32) -> bool {
        n >= self.start && self.end.map_or(true, |end| n <= end)
    }
}

#[rustfmt::skip]
static DISCRETE_TABLE: [DiscreteRow; 23] = [
    DiscreteRow::new(1,   [8.00, 5.33, 4.00, 2.67, 2.00, 1.60, 1.33, 1.14, 1.0]),
    DiscreteRow::new(2,   [6.22, 4.33, 3.39, 2.45, 1.98, 1.60, 1.33, 1.14, 1.0]),
    DiscreteRow::new(3,   [4.06, 2.89, 2.31, 1.74, 1.45, 1.34, 1.22, 1.14, 1.0]),
    DiscreteRow::new(4,   [3.23, 2.29, 1.83, 1.39, 1.21, 1.13, 1.08, 1.03, 1.0]),
    DiscreteRow::new(5,   [2.84, 2.06, 1.65, 1.31, 1.15, 1.10, 1.05, 1.01, 1.0]),
    DiscreteRow::new(6,   [2.64, 1.96, 1.62, 1.28, 1.14, 1.13, 1.06, 1.01, 1.0]),
    DiscreteRow::new(7,   [2.49, 1.86, 1.54, 1.23, 1.12, 1.10, 1.04, 1.0,  1.0]),
    DiscreteRow::new(8,   [2.37, 1.78, 1.48, 1.19, 1.10, 1.08, 1.02, 1.0,  1.0]),
    DiscreteRow::new(9,   [2.27, 1.71, 1.43, 1.16, 1.09, 1.07, 1.01, 1.0,  1.0]),
    DiscreteRow::new(10,  [2.18, 1.65, 1.39, 1.13, 1.07, 1.05, 1.0,  1.0,  1.0]),
    DiscreteRow::new(12,  [2.04, 1.56, 1.32, 1.08, 1.05, 1.03, 1.0,  1.0,  1.0]),
    DiscreteRow::new(14,  [1.94, 1.49, 1.27, 1.05, 1.02, 1.0,  1.0,  1.0,  1.0]),
    DiscreteRow::new(16,  [1.85, 1.43, 1.23, 1.02, 1.0,  1.0,  1.0,  1.0,  1.0]),
    DiscreteRow::new(18,  [1.78, 1.39, 1.19, 1.0,  1.0,  1.0,  1.0,  1.0,  1.0]),
    DiscreteRow::new(20,  [1.72, 1.35, 1.16, 1.0,  1.0,  1.0,  1.0,  1.0,  1.0]),
    DiscreteRow::new(25,  [1.60, 1.27, 1.10, 1.0,  1.0,  1.0,  1.0,  1.0,  1.0]),
    DiscreteRow::new(30,  [1.51, 1.21, 1.05, 1.0,  1.0,  1.0,  1.0,  1.0,  1.0]),
    DiscreteRow::new(35,  [1.44, 1.16, 1.0,  1.0,  1.0,  1.0,  1.0,  1.0,  1.0]),
    DiscreteRow::new(40,  [1.40, 1.13, 1.0,  1.0,  1.0,  1.0,  1.0,  1.0,  1.0]),
    DiscreteRow::new(50,  [1.30, 1.07, 1.0,  1.0,  1.0,  1.0,  1.0,  1.0,  1.0]),
    DiscreteRow::new(60,  [1.25, 1.03, 1.0,  1.0,  1.0,  1.0,  1.0,  1.0,  1.0]),
    DiscreteRow::new(80,  [1.16, 1.0,  1.0,  1.0,  1.0,  1.0,  1.0,  1.0,  1.0]),
    DiscreteRow::new(100, [1.0,  1.0,  1.0,  1.0,  1.0,  1.0,  1.0,  1.0,  1.0]),
];

// 경계값 10, 25, 50은 인접한 두 구간에 모두 등장한다. 조회는 표 순서상 첫 구간을 택한다.
#[rustfmt::skip]
static RANGED_TABLE: [RangedRow; 10] = [
    RangedRow::new(1,  Some(1),  [8.00, 5.33, 4.00, 2.67, 2.00, 1.60, 1.33, 1.14]),
    RangedRow::new(2,  Some(2),  [5.01, 3.44, 2.69, 1.90, 1.52, 1.24, 1.11, 1.0]),
    RangedRow::new(3,  Some(3),  [2.40, 2.17, 1.80, 1.42, 1.23, 1.14, 1.08, 1.0]),
    RangedRow::new(4,  Some(4),  [2.28, 1.73, 1.46, 1.19, 1.06, 1.04, 1.0,  0.97]),
    RangedRow::new(5,  Some(5),  [1.31, 1.12, 1.02, 1.0,  0.98, 0.96, 0.94, 0.93]),
    RangedRow::new(6,  Some(8),  [1.20, 1.0,  0.96, 0.95, 0.94, 0.93, 0.92, 0.91]),
    RangedRow::new(9,  Some(10), [1.10, 0.97, 0.91, 0.90, 0.90, 0.90, 0.90, 0.90]),
    RangedRow::new(10, Some(25), [0.80, 0.80, 0.80, 0.85, 0.85, 0.85, 0.90, 0.90]),
    RangedRow::new(25, Some(50), [0.75, 0.75, 0.75, 0.75, 0.75, 0.80, 0.85, 0.85]),
    RangedRow::new(50, None,     [0.65, 0.65, 0.65, 0.70, 0.70, 0.75, 0.80, 0.80]),
];

/// 표 6.3 전체 행.
pub fn discrete_rows() -> &'static [DiscreteRow] {
    &DISCRETE_TABLE
}

/// 표 6.4 전체 구간 행.
pub fn ranged_rows() -> &'static [RangedRow] {
    &RANGED_TABLE
}

fn column_index(keys: &[f64], rate_key: f64) -> Option<usize> {
    keys.iter().position(|k| (k - rate_key).abs() < KEY_EPS)
}

/// 표 6.3에서 `n` 행과 `rate_key` 열이 정확히 일치하는 계수를 찾는다.
///
/// `rate_key`는 이미 0.1 단위로 반올림된 값이어야 한다. 표에 없는 `n`(예: 11)이면 `None`.
pub fn lookup_discrete(n: u32, rate_key: f64) -> Option<f64> {
    let row = DISCRETE_TABLE.iter().find(|row| row.n == n)?;
    let col = column_index(&DISCRETE_RATE_KEYS, rate_key)?;
    Some(row.coefficients[col])
}

/// 표 6.4에서 `n`을 포함하는 첫 구간을 찾고 `rate_key` 열의 계수를 반환한다.
pub fn lookup_ranged(n: u32, rate_key: f64) -> Option<f64> {
    let row = RANGED_TABLE.iter().find(|row| row.contains(n))?;
    let col = column_index(&RANGED_RATE_KEYS, rate_key)?;
    Some(row.coefficients[col])
}
