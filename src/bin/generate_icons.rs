use clap::Parser;
use std::path::Path;
use webext_tools::config::GeneratorArgs;
use webext_tools::core::icon;
use webext_tools::utils::logger;
use webext_tools::LocalStorage;

fn main() {
    let args = GeneratorArgs::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting icon generation");

    // 建立輸出目錄
    let icons_dir = Path::new(&args.dir).join("icons");
    if let Err(e) = std::fs::create_dir_all(&icons_dir) {
        eprintln!(
            "❌ Cannot create output directory '{}': {}",
            icons_dir.display(),
            e
        );
        eprintln!("💡 Check that {} exists and is writable", args.dir);
        std::process::exit(1);
    }

    println!("Generating extension icons...");

    let storage = LocalStorage::new(args.dir.clone());

    match icon::generate_all(&storage) {
        Ok(written) => {
            tracing::info!("✅ Generated {} icons", written.len());
            println!();
            println!("✅ All icons generated successfully!");
            println!("You can now load the extension in Chrome.");
        }
        Err(e) => {
            tracing::error!("❌ Icon generation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}
