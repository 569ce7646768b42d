use serde::{Deserialize, Serialize};
use tracing::debug;

use super::coefficient_tables::{lookup_discrete, lookup_ranged};
use super::equipment::EquipmentRecord;

/// 표 6.3 조회 실패 시 사용하는 보수적 계수.
pub const DISCRETE_FALLBACK_COEFFICIENT: f64 = 1.25;
/// 표 6.4 조회 실패 시 사용하는 계수.
pub const RANGED_FALLBACK_COEFFICIENT: f64 = 0.7;

/// 공장 전체(변압기 0.38 kV 모선) 계산에 쓰이는 고정 참조 사례.
///
/// 입력 설비 목록과 무관한 별도 데이터이며, 기본값은 81대 설비 사례를 그대로 담는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceWorkshop {
    /// 설비 대수
    pub equipment_count: u32,
    /// Σ n × Pн [kW]
    pub power_total: f64,
    /// Σ n × Pн × Kв [kW]
    pub utilization_power: f64,
    /// Σ n × Pн × Kв × tg φ [kvar]
    pub reactive_power: f64,
    /// Σ n × Pн²
    pub squared_power: f64,
    /// 모선 전압 [kV]. `None`이면 입력 목록 첫 행의 전압으로 전류를 구한다.
    pub bus_voltage_kv: Option<f64>,
}

impl Default for ReferenceWorkshop {
    fn default() -> Self {
        Self {
            equipment_count: 81,
            power_total: 2330.0,
            utilization_power: 752.0,
            reactive_power: 657.0,
            squared_power: 96388.0,
            bus_voltage_kv: None,
        }
    }
}

/// 계수 Kp를 어디서 얻었는지 표시한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CoefficientSource {
    /// 참조표에서 찾음
    Table,
    /// 조회 실패로 기본 계수를 사용함
    Fallback,
}

/// 그룹/공장 전체 블록의 계산 결과. 두 블록은 같은 형태를 가진다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoadBlock {
    /// 그룹 이용률 Kв
    pub utilization_rate: f64,
    /// 유효 설비 수 nₑ
    pub effective_equipment_count: f64,
    /// 표 조회에 사용한 n 키
    pub count_key: u32,
    /// 표 조회에 사용한 Kв 키 (0.1 단위 반올림)
    pub rate_key: f64,
    /// 계산 활성전력 계수 Kp
    pub active_power_coefficient: f64,
    pub coefficient_source: CoefficientSource,
    /// 계산 활성 부하 Pp [kW]
    pub active_load: f64,
    /// 계산 무효 부하 Qp [kvar]
    pub reactive_load: f64,
    /// 피상 전력 Sp [kVA]
    pub full_power: f64,
    /// 계산 전류 Ip [A]
    pub current: f64,
}

/// 전체 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorkshopResults {
    /// 입력 설비 목록 기준
    pub group: LoadBlock,
    /// 고정 참조 사례 기준 (0.38 kV 모선)
    pub workshop: LoadBlock,
}

#[derive(Debug, Clone, Copy, Default)]
struct Totals {
    power: f64,
    utilization: f64,
    reactive: f64,
    squared: f64,
}

impl Totals {
    fn from_records(records: &[EquipmentRecord]) -> Self {
        records.iter().fold(Self::default(), |acc, r| Self {
            power: acc.power + r.derived.power_total,
            utilization: acc.utilization + r.derived.utilization_power,
            reactive: acc.reactive + r.derived.reactive_power,
            squared: acc.squared + r.derived.squared_power,
        })
    }
}

/// 이용률을 0.1 단위로 반올림(half-up)해 표의 열 키로 만든다.
pub fn round_rate_key(rate: f64) -> f64 {
    (rate * 10.0 + 0.5).floor() / 10.0
}

// NaN은 0, 범위를 넘는 값은 포화된다. 어느 쪽이든 표 조회는 실패한다.
fn count_key(count: f64) -> u32 {
    count.ceil() as u32
}

fn resolve(found: Option<f64>, fallback: f64, n: u32, rate_key: f64) -> (f64, CoefficientSource) {
    match found {
        Some(k) => (k, CoefficientSource::Table),
        None => {
            debug!(n, rate_key, fallback, "계수표 조회 실패, 기본 계수 사용");
            (fallback, CoefficientSource::Fallback)
        }
    }
}

fn first_voltage(records: &[EquipmentRecord]) -> Option<f64> {
    records.first().map(|r| r.load_voltage_kv)
}

fn group_block(records: &[EquipmentRecord]) -> LoadBlock {
    let totals = Totals::from_records(records);

    let utilization_rate = totals.utilization / totals.power;
    let effective_equipment_count = (totals.power.powi(2) / totals.squared).ceil();

    let n = count_key(effective_equipment_count);
    let rate_key = round_rate_key(utilization_rate);
    let (coefficient, source) = resolve(
        lookup_discrete(n, rate_key),
        DISCRETE_FALLBACK_COEFFICIENT,
        n,
        rate_key,
    );

    let active_load = coefficient * totals.utilization;
    // 그룹 단위에서는 무효 부하에 계수를 적용하지 않는다.
    let reactive_load = totals.reactive;
    let full_power = (active_load.powi(2) + reactive_load.powi(2)).sqrt();
    let current = first_voltage(records).map_or(0.0, |u| active_load / u);

    LoadBlock {
        utilization_rate,
        effective_equipment_count,
        count_key: n,
        rate_key,
        active_power_coefficient: coefficient,
        coefficient_source: source,
        active_load,
        reactive_load,
        full_power,
        current,
    }
}

fn workshop_block(reference: &ReferenceWorkshop, records: &[EquipmentRecord]) -> LoadBlock {
    let utilization_rate = reference.utilization_power / reference.power_total;
    // 모선 표(6.4)는 구간 조회이므로 nₑ를 올림하지 않고 버린다.
    let effective_equipment_count =
        (reference.power_total.powi(2) / reference.squared_power).trunc();

    let n = effective_equipment_count as u32;
    let rate_key = round_rate_key(utilization_rate);
    let (coefficient, source) = resolve(
        lookup_ranged(n, rate_key),
        RANGED_FALLBACK_COEFFICIENT,
        n,
        rate_key,
    );

    let active_load = coefficient * reference.utilization_power;
    let reactive_load = coefficient * reference.reactive_power;
    let full_power = (active_load.powi(2) + reactive_load.powi(2)).sqrt();
    let voltage = reference.bus_voltage_kv.or_else(|| first_voltage(records));
    let current = voltage.map_or(0.0, |u| active_load / u);

    LoadBlock {
        utilization_rate,
        effective_equipment_count,
        count_key: n,
        rate_key,
        active_power_coefficient: coefficient,
        coefficient_source: source,
        active_load,
        reactive_load,
        full_power,
        current,
    }
}

/// 입력 설비 목록과 기본 참조 사례로 그룹/공장 전체 부하를 계산한다.
///
/// 각 레코드의 `derived`는 미리 계산돼 있어야 한다([`calculate_equipment_values`]).
/// 오류를 반환하지 않으며, 빈 목록처럼 분모가 0이 되면 NaN/∞가 결과에 그대로 남는다.
///
/// [`calculate_equipment_values`]: super::equipment::calculate_equipment_values
pub fn calculate_workshop_results(records: &[EquipmentRecord]) -> WorkshopResults {
    calculate_workshop_results_with(records, &ReferenceWorkshop::default())
}

/// 참조 사례를 주입받아 계산한다.
pub fn calculate_workshop_results_with(
    records: &[EquipmentRecord],
    reference: &ReferenceWorkshop,
) -> WorkshopResults {
    WorkshopResults {
        group: group_block(records),
        workshop: workshop_block(reference, records),
    }
}
