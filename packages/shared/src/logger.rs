//! Logging setup utilities for the Bilingo binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Crates whose events are enabled by the default filter.
/// `tower_http` carries the server's request traces.
const DEFAULT_TARGETS: [&str; 4] = [
    "bilingo_shared",
    "bilingo_server",
    "bilingo_client",
    "tower_http",
];

/// Build the default `EnvFilter` directive string.
///
/// Every workspace crate plus the binary itself is enabled at `default_log_level`.
fn default_directives(binary_name: &str, default_log_level: &str) -> String {
    let binary_target = binary_name.replace('-', "_");
    let mut targets: Vec<String> = DEFAULT_TARGETS.iter().map(|c| c.to_string()).collect();
    if !targets.contains(&binary_target) {
        targets.push(binary_target);
    }

    targets
        .iter()
        .map(|target| format!("{}={}", target, default_log_level))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize the tracing subscriber with the specified default log level.
///
/// The log level can be overridden using the `RUST_LOG` environment variable.
///
/// # Arguments
///
/// * `binary_name` - The name of the binary (e.g., "bilingo-server", "bilingo-client")
/// * `default_log_level` - The default log level (e.g., "debug", "info", "warn", "error")
///
/// # Examples
///
/// ```no_run
/// use bilingo_shared::logger::setup_logger;
///
/// setup_logger("bilingo-server", "debug");
/// ```
pub fn setup_logger(binary_name: &str, default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directives(binary_name, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_cover_workspace_and_binary() {
        // テスト項目: デフォルトのフィルタにワークスペースの crate と tower_http が含まれる
        // given (前提条件):
        let binary_name = "bilingo-server";

        // when (操作):
        let directives = default_directives(binary_name, "debug");

        // then (期待する結果): バイナリ名は重複しない
        assert_eq!(
            directives,
            "bilingo_shared=debug,bilingo_server=debug,bilingo_client=debug,tower_http=debug"
        );
    }

    #[test]
    fn test_default_directives_append_unknown_binary() {
        // テスト項目: ワークスペース外の名前のバイナリはフィルタの末尾に追加される
        // given (前提条件):
        let binary_name = "load-tester";

        // when (操作):
        let directives = default_directives(binary_name, "info");

        // then (期待する結果):
        assert!(directives.ends_with(",load_tester=info"));
    }
}
