//! 그룹/공장 전체 부하 집계 테스트.
use electrical_load_toolbox::load::{
    calculate_equipment_values, calculate_workshop_results, calculate_workshop_results_with,
    CoefficientSource, EquipmentRecord, ReferenceWorkshop, DISCRETE_FALLBACK_COEFFICIENT,
    RANGED_FALLBACK_COEFFICIENT,
};

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "{label} expected {expected:.6} got {actual:.6}"
    );
}

fn record(n: u32, pn: u32, kv: f64, tg: f64, cos: f64, eta: f64, u: f64) -> EquipmentRecord {
    calculate_equipment_values(&EquipmentRecord {
        efficiency_factor: eta,
        load_power_factor: cos,
        load_voltage_kv: u,
        quantity: n,
        rated_power_kw: pn,
        utilization_rate: kv,
        reactive_power_factor: tg,
        ..Default::default()
    })
}

fn golden_pair() -> Vec<EquipmentRecord> {
    vec![
        record(2, 10, 0.5, 0.75, 0.9, 0.92, 0.38),
        record(3, 5, 0.3, 0.6, 0.85, 0.9, 0.38),
    ]
}

#[test]
fn golden_group_block() {
    let records = golden_pair();
    assert_eq!(records[0].derived.power_total, 20.0);
    assert_eq!(records[1].derived.power_total, 15.0);

    let g = calculate_workshop_results(&records).group;
    // Σ n·Pн = 35, Σ n·Pн·Kв = 14.5, Σ n·Pн² = 275, Σ Q = 10.2
    assert_close("Kв", g.utilization_rate, 14.5 / 35.0, 1e-12);
    assert_eq!(g.effective_equipment_count, 5.0); // ceil(1225 / 275 = 4.45)
    assert_eq!(g.count_key, 5);
    assert_close("rate key", g.rate_key, 0.4, 1e-12);
    assert_eq!(g.active_power_coefficient, 1.15);
    assert_eq!(g.coefficient_source, CoefficientSource::Table);
    assert_close("Pp", g.active_load, 16.675, 1e-9);
    assert_close("Qp", g.reactive_load, 10.2, 1e-9);
    assert_close("Sp", g.full_power, (16.675f64.powi(2) + 10.2f64.powi(2)).sqrt(), 1e-9);
    assert_close("Ip", g.current, 16.675 / 0.38, 1e-9);
}

#[test]
fn reference_workshop_block() {
    let w = calculate_workshop_results(&golden_pair()).workshop;
    assert_close("Kв", w.utilization_rate, 752.0 / 2330.0, 1e-12);
    // 2330² / 96388 ≈ 56.32 → 56
    assert_eq!(w.effective_equipment_count, 56.0);
    assert_eq!(w.count_key, 56);
    assert_close("rate key", w.rate_key, 0.3, 1e-12);
    assert_eq!(w.active_power_coefficient, 0.70);
    assert_eq!(w.coefficient_source, CoefficientSource::Table);
    assert_close("Pp", w.active_load, 526.4, 1e-9);
    assert_close("Qp", w.reactive_load, 459.9, 1e-9);
    assert_close("Sp", w.full_power, (526.4f64.powi(2) + 459.9f64.powi(2)).sqrt(), 1e-9);
    // 모선 전류는 입력 목록 첫 행의 전압을 쓴다.
    assert_close("Ip", w.current, 526.4 / 0.38, 1e-9);
}

#[test]
fn workshop_current_follows_first_input_voltage() {
    let mut records = golden_pair();
    records[0].load_voltage_kv = 0.66;
    let results = calculate_workshop_results(&records);
    assert_close("Ip", results.workshop.current, 526.4 / 0.66, 1e-9);
    assert_close("group Ip", results.group.current, results.group.active_load / 0.66, 1e-9);
}

#[test]
fn bus_voltage_overrides_first_record() {
    let reference = ReferenceWorkshop {
        bus_voltage_kv: Some(0.4),
        ..Default::default()
    };
    let w = calculate_workshop_results_with(&golden_pair(), &reference).workshop;
    assert_close("Ip", w.current, 526.4 / 0.4, 1e-9);

    let empty = calculate_workshop_results_with(&[], &reference).workshop;
    assert_close("Ip", empty.current, 526.4 / 0.4, 1e-9);
}

#[test]
fn empty_list_yields_nan_rates_and_zero_current() {
    let results = calculate_workshop_results(&[]);
    let g = results.group;
    assert!(g.utilization_rate.is_nan());
    assert!(g.effective_equipment_count.is_nan());
    assert_eq!(g.count_key, 0);
    assert_eq!(g.active_power_coefficient, DISCRETE_FALLBACK_COEFFICIENT);
    assert_eq!(g.coefficient_source, CoefficientSource::Fallback);
    assert_eq!(g.active_load, 0.0);
    assert_eq!(g.reactive_load, 0.0);
    assert_eq!(g.full_power, 0.0);
    assert_eq!(g.current, 0.0);

    // 공장 전체 블록은 참조 사례로 계산되며 전류만 0이 된다.
    assert_close("Pp", results.workshop.active_load, 526.4, 1e-9);
    assert_eq!(results.workshop.current, 0.0);
}

#[test]
fn blank_rows_do_not_break_aggregation() {
    let records: Vec<EquipmentRecord> = vec![EquipmentRecord::default(); 8]
        .iter()
        .map(calculate_equipment_values)
        .collect();
    let g = calculate_workshop_results(&records).group;
    assert!(g.utilization_rate.is_nan());
    assert_eq!(g.active_load, 0.0);
    // 첫 행 전압이 0이므로 0/0
    assert!(g.current.is_nan());
}

#[test]
fn unmatched_count_falls_back_to_discrete_default() {
    // 11대 × 10 kW: nₑ = 110² / 1100 = 11, 표 6.3에는 11 행이 없다.
    let records = vec![record(11, 10, 0.5, 1.0, 0.9, 0.9, 0.38)];
    let g = calculate_workshop_results(&records).group;
    assert_eq!(g.effective_equipment_count, 11.0);
    assert_close("rate key", g.rate_key, 0.5, 1e-12);
    assert_eq!(g.active_power_coefficient, 1.25);
    assert_eq!(g.coefficient_source, CoefficientSource::Fallback);
    assert_close("Pp", g.active_load, 1.25 * 55.0, 1e-9);
}

#[test]
fn ranged_miss_falls_back_to_workshop_default() {
    // Kв = 0.9 → 키 0.9는 표 6.4에 없다.
    let reference = ReferenceWorkshop {
        utilization_power: 2097.0,
        ..Default::default()
    };
    let w = calculate_workshop_results_with(&[], &reference).workshop;
    assert_close("rate key", w.rate_key, 0.9, 1e-12);
    assert_eq!(w.active_power_coefficient, RANGED_FALLBACK_COEFFICIENT);
    assert_eq!(w.coefficient_source, CoefficientSource::Fallback);
}

#[test]
fn group_and_workshop_blocks_are_independent() {
    let a = calculate_workshop_results(&golden_pair()).workshop;
    let b = calculate_workshop_results(&[record(1, 500, 0.8, 0.2, 0.9, 0.9, 0.38)]).workshop;
    assert_eq!(a.active_load, b.active_load);
    assert_eq!(a.reactive_load, b.reactive_load);
}
