use clap::Parser;
use std::path::Path;
use webext_tools::config::CheckerArgs;
use webext_tools::core::audit::render_report;
use webext_tools::utils::logger;
use webext_tools::{HealthAudit, LayoutConfig};

fn main() {
    let args = CheckerArgs::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting extension health check");
    tracing::info!("📁 Auditing directory: {}", args.dir);

    let root = Path::new(&args.dir);

    // 載入佈局配置
    let layout = match LayoutConfig::load_or_default(root, &args.config) {
        Ok(layout) => layout,
        Err(e) => {
            tracing::error!("❌ Layout configuration rejected: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let report = HealthAudit::new(root, layout).run();

    println!("{}", render_report(&report));

    if report.passed() {
        tracing::info!("✅ Health check passed");
    } else {
        tracing::warn!("❌ Health check failed");
    }

    std::process::exit(report.exit_code());
}
