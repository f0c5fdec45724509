use clap::{Parser, Subcommand};

use oilfield_unit_toolbox::i18n::{resolve_language, Translator};
use oilfield_unit_toolbox::{app, config, conversion, format};

#[derive(Parser)]
#[command(name = "oilfield_unit_toolbox")]
#[command(about = "Oilfield unit conversion toolbox", long_about = None)]
struct Cli {
    /// Interface language: zh, en or auto
    #[arg(short = 'L', long, default_value = "auto")]
    lang: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a value between two unit symbols and print the result
    Convert {
        /// Numeric value to convert
        value: f64,
        /// Source unit symbol (ex: ft, psi, °C)
        from_unit: String,
        /// Target unit symbol (ex: m, MPa, °F)
        to_unit: String,
        /// Decimal places in the printed result
        #[arg(short, long)]
        decimals: Option<usize>,
    },
}

/// 程序入口。加载设置后运行 CLI 应用。
fn main() {
    if let Err(err) = try_run() {
        eprintln!("错误: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    match cli.command {
        Some(Commands::Convert {
            value,
            from_unit,
            to_unit,
            decimals,
        }) => {
            let result = conversion::convert_value(value, &from_unit, &to_unit);
            println!("{} {}", format::format_value(result, decimals), to_unit);
        }
        None => {
            let code = resolve_language(&cli.lang, Some(cfg.language.as_str()));
            let tr = Translator::new(&code);
            app::run(&mut cfg, &tr)?;
        }
    }
    Ok(())
}
