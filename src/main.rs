use clap::Parser;
use electrical_load_toolbox::{app, logging};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 선택된 명령을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        tracing::error!("{err}");
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), app::AppError> {
    let cli = app::Cli::parse();
    let cfg = app::load_config(&cli.config)?;
    logging::init(&cfg.log_level);
    app::run(cli.command, &cfg)
}
