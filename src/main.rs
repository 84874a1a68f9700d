use agrilink_icon::{render_icon, write_png, IconConfig};
use std::process::ExitCode;

fn run(config: &IconConfig) -> agrilink_icon::Result<()> {
    println!("🚜 Creating Agrilink Tractor Launcher Icon...");
    let pixmap = render_icon(config)?;
    println!("🎨 Rendered {}x{} canvas", pixmap.width(), pixmap.height());

    write_png(&pixmap, &config.output)?;
    println!("✅ Icon created successfully!");
    println!("📁 Saved to: {}", config.output.display());
    println!("🔧 Next steps:");
    println!("   1. Run: flutter pub get");
    println!("   2. Run: flutter pub run flutter_launcher_icons");
    println!("   3. Build your app with the new icon!");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(&IconConfig::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
