//! 계산 결과 보고서 (텍스트/JSON).

use serde::Serialize;

use crate::form::fixed;
use crate::load::{CoefficientSource, EquipmentRecord, LoadBlock, ReferenceWorkshop, WorkshopResults};

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    equipment: &'a [EquipmentRecord],
    reference_workshop: &'a ReferenceWorkshop,
    results: &'a WorkshopResults,
}

/// 설비 목록과 결과를 JSON 문자열로 만든다. NaN/∞는 `null`로 나간다.
pub fn render_json(
    records: &[EquipmentRecord],
    reference: &ReferenceWorkshop,
    results: &WorkshopResults,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport {
        equipment: records,
        reference_workshop: reference,
        results,
    })
}

/// 설비 한 행의 중간값 표시. 전력 합계가 0이면 표시하지 않는다.
pub fn render_equipment(index: usize, record: &EquipmentRecord) -> String {
    let d = &record.derived;
    let title = if record.name.is_empty() {
        format!("설비 {}", index + 1)
    } else {
        format!("설비 {} ({})", index + 1, record.name)
    };
    if d.power_total <= 0.0 {
        return format!("{title}: 입력 없음\n");
    }
    format!(
        "{title}\n  n × Pн = {} kW\n  n × Pн × Kв = {} kW\n  n × Pн × Kв × tgφ = {} kvar\n  n × Pн² = {}\n  Ip = {} A\n",
        fixed(d.power_total, 2),
        fixed(d.utilization_power, 2),
        fixed(d.reactive_power, 2),
        fixed(d.squared_power, 2),
        fixed(d.current, 2),
    )
}

fn source_note(source: CoefficientSource) -> &'static str {
    match source {
        CoefficientSource::Table => "",
        CoefficientSource::Fallback => " (표에 없음, 기본값)",
    }
}

fn render_block(out: &mut String, heading: &str, block: &LoadBlock) {
    out.push_str(heading);
    out.push('\n');
    out.push_str(&format!(
        "  이용률 Kв: {}\n",
        fixed(block.utilization_rate, 4)
    ));
    out.push_str(&format!(
        "  유효 설비 수 nₑ: {}\n",
        fixed(block.effective_equipment_count, 2)
    ));
    out.push_str(&format!(
        "  계산 활성전력 계수 Kp: {}{}\n",
        fixed(block.active_power_coefficient, 2),
        source_note(block.coefficient_source)
    ));
    out.push_str(&format!("  활성 부하 Pp: {} kW\n", fixed(block.active_load, 2)));
    out.push_str(&format!("  무효 부하 Qp: {} kvar\n", fixed(block.reactive_load, 2)));
    out.push_str(&format!("  피상 전력 Sp: {} kVA\n", fixed(block.full_power, 2)));
    out.push_str(&format!("  계산 전류 Ip: {} A\n", fixed(block.current, 2)));
}

/// 텍스트 보고서.
pub fn render_text(records: &[EquipmentRecord], results: &WorkshopResults) -> String {
    let mut out = String::new();
    out.push_str("=== 중간 계산 ===\n");
    for (i, r) in records.iter().enumerate() {
        out.push_str(&render_equipment(i, r));
    }
    out.push('\n');
    render_block(&mut out, "=== 설비 그룹 ===", &results.group);
    out.push('\n');
    render_block(&mut out, "=== 공장 전체 (0.38 kV 모선) ===", &results.workshop);
    out
}
