//! tracing 기반 로그 초기화.
//! 보고서가 stdout으로 나가므로 로그는 stderr에 쓴다.

use tracing_subscriber::{fmt, EnvFilter};

/// 로그 구독자를 설치한다.
///
/// `RUST_LOG`가 설정돼 있으면 그 필터를, 아니면 `default_level`(설정 파일의 `log_level`)을 쓴다.
/// 이미 설치돼 있으면 아무 것도 하지 않는다.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
