//! Build script for lcd1602-firmware
//!
//! - Sets up linker search paths and scripts for memory.x
//! - Parses lcd.toml and bakes the wiring in as `BUS_CONFIG`

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use lcd1602_core::BusConfig;

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    setup_linker(&out_dir);
    generate_config(&out_dir);
}

/// Copy memory.x next to the build output and link against it
fn setup_linker(out_dir: &Path) {
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Turn the `[lcd]` table of lcd.toml into `lcd_config.rs`
fn generate_config(out_dir: &Path) {
    println!("cargo:rerun-if-changed=lcd.toml");

    let config_path = Path::new("lcd.toml");
    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: lcd.toml not found!                                      ║\n\
            ║                                                                  ║\n\
            ║  The firmware needs an lcd.toml describing the LCD wiring.       ║\n\
            ║  Please create one in the lcd1602-firmware directory.            ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read lcd.toml", &e.to_string()),
    };

    let document: toml::Table = match toml::from_str(&content) {
        Ok(table) => table,
        Err(e) => fail("Invalid TOML syntax in lcd.toml", &e.to_string()),
    };

    let Some(lcd) = document.get("lcd") else {
        fail("Missing [lcd] section in lcd.toml", "Add an [lcd] table with a `bus` key");
    };

    let config: BusConfig = match lcd.clone().try_into() {
        Ok(config) => config,
        Err(e) => fail("Invalid [lcd] section in lcd.toml", &e.to_string()),
    };

    if let Err(e) = config.validate() {
        fail("Invalid LCD wiring in lcd.toml", &e.to_string());
    }

    let generated = format!(
        "/// LCD wiring from lcd.toml\npub const BUS_CONFIG: BusConfig = BusConfig::{:?};\n",
        config
    );
    fs::write(out_dir.join("lcd_config.rs"), generated).unwrap();

    println!("cargo:warning=lcd.toml validated successfully");
}

fn fail(title: &str, detail: &str) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        format_error_lines(detail)
    );
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
