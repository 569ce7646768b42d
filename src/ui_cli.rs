use std::io::{self, Write};

use tracing::info;

use crate::app::AppError;
use crate::config::Config;
use crate::form::{field_text, fixed, EquipmentField, EquipmentSheet};
use crate::load::{discrete_rows, ranged_rows, DISCRETE_RATE_KEYS, RANGED_RATE_KEYS};
use crate::report;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ListRows,
    EditRow,
    AddRow,
    Calculate,
    Tables,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== 전기 부하 계산기 ===");
    println!("1) 설비 목록 보기");
    println!("2) 설비 입력/수정");
    println!("3) 설비 행 추가");
    println!("4) 전체 결과 계산");
    println!("5) 계수표 보기");
    println!("0) 종료");
    loop {
        let sel = read_line("메뉴 선택: ")?;
        // 입력 스트림 종료
        if sel.is_empty() {
            return Ok(MenuChoice::Exit);
        }
        match sel.trim() {
            "1" => return Ok(MenuChoice::ListRows),
            "2" => return Ok(MenuChoice::EditRow),
            "3" => return Ok(MenuChoice::AddRow),
            "4" => return Ok(MenuChoice::Calculate),
            "5" => return Ok(MenuChoice::Tables),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 대화형 설비 시트의 메인 루프를 실행한다.
pub fn run_sheet(mut sheet: EquipmentSheet, cfg: &Config) -> Result<(), AppError> {
    loop {
        match main_menu()? {
            MenuChoice::ListRows => list_rows(&sheet),
            MenuChoice::EditRow => handle_edit(&mut sheet)?,
            MenuChoice::AddRow => {
                let idx = sheet.add_row();
                println!("설비 {} 행을 추가했습니다.", idx + 1);
            }
            MenuChoice::Calculate => {
                let results = sheet.results(&cfg.reference_workshop);
                info!(rows = sheet.rows().len(), "전체 결과 계산");
                print!("{}", report::render_text(sheet.rows(), &results));
            }
            MenuChoice::Tables => print_tables(),
            MenuChoice::Exit => break,
        }
    }
    Ok(())
}

fn list_rows(sheet: &EquipmentSheet) {
    for (i, r) in sheet.rows().iter().enumerate() {
        print!("{}", report::render_equipment(i, r));
    }
}

/// 한 행을 골라 필드를 차례로 입력받는다. 엔터만 누르면 기존 값을 유지한다.
fn handle_edit(sheet: &mut EquipmentSheet) -> Result<(), AppError> {
    let count = sheet.rows().len();
    if count == 0 {
        println!("설비 행이 없습니다. 먼저 행을 추가하세요.");
        return Ok(());
    }
    let sel = read_line(&format!("행 번호 (1-{count}): "))?;
    let index = match sel.trim().parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => n - 1,
        _ => {
            println!("잘못된 행 번호입니다.");
            return Ok(());
        }
    };
    for field in EquipmentField::ALL {
        let current = field_text(&sheet.rows()[index], field);
        let input = read_line(&format!("{} [{}]: ", field.label(), current))?;
        // 엔터는 유지, 공백 한 칸은 비우기(0)로 취급한다.
        if input.trim_end_matches(['\r', '\n']).is_empty() {
            continue;
        }
        if !sheet.edit(index, field, input.trim()) {
            println!("숫자로 읽을 수 없어 무시합니다.");
        }
    }
    print!("{}", report::render_equipment(index, &sheet.rows()[index]));
    Ok(())
}

/// 계수표 6.3/6.4를 출력한다.
pub fn print_tables() {
    println!("\n-- 표 6.3 계산 활성전력 계수 Kp (1000 V 이하 배전망) --");
    print!("{:>6}", "n");
    for k in DISCRETE_RATE_KEYS {
        print!("{k:>6.2}");
    }
    println!();
    for row in discrete_rows() {
        print!("{:>6}", row.n);
        for c in row.coefficients {
            print!("{:>6}", fixed(c, 2));
        }
        println!();
    }

    println!("\n-- 표 6.4 계산 활성전력 계수 Kp (변압기 저압 모선) --");
    print!("{:>8}", "n");
    for k in RANGED_RATE_KEYS {
        print!("{k:>6.2}");
    }
    println!();
    for row in ranged_rows() {
        let span = match row.end {
            Some(end) if end == row.start => format!("{}", row.start),
            Some(end) => format!("{}-{}", row.start, end),
            None => format!("{}+", row.start),
        };
        print!("{span:>8}");
        for c in row.coefficients {
            print!("{:>6}", fixed(c, 2));
        }
        println!();
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}
