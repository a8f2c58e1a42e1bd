use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 未設定 `RUST_LOG` 時使用的過濾條件。
///
/// 平常只放行警告，讓 stderr 在失敗時只有一行診斷；`-v` 才打開 debug。
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "grid_icon_gen=debug,warn"
    } else {
        "grid_icon_gen=warn"
    }
}

pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // stdout 保留給 "Created ..." 進度輸出與 dry-run 的 JSON
    let stderr = std::io::stderr();
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(stderr.is_terminal())
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(false)
                .compact(),
        )
        .init();
}
