use crate::cli::BootArgs;
use serde::Serialize;
use topos_kernel::spells::TEXT_KEY;
use topos_kernel::{Content, Engine, EngineConfig, TruthAssignment, TruthValue};

/// Element that reads as undefined in `classify` arguments.
pub const NULL_ELEMENT: &str = "null";

pub fn exit_with(message: impl std::fmt::Display) -> ! {
    eprintln!("error: {message}");
    std::process::exit(1);
}

pub fn boot_or_exit(args: &BootArgs) -> Engine {
    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path).unwrap_or_else(|e| exit_with(e)),
        None => EngineConfig::default(),
    };
    if let Some(text) = &args.text {
        config = config.with_content(TEXT_KEY, text.as_str());
    }
    tracing::debug!(config = ?args.config, mode = %config.initial_mode, "booting engine");
    Engine::boot_with(&config)
}

pub fn parse_tag_or_exit(tag: &str) -> TruthValue {
    tag.parse().unwrap_or_else(|e: String| exit_with(e))
}

pub fn print_json(value: &impl Serialize) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).expect("json serialization")
    );
}

pub fn yes_no(ok: bool) -> &'static str {
    if ok { "yes" } else { "no" }
}

pub fn render_content(content: &Content) -> String {
    let fields: Vec<String> = content
        .iter()
        .map(|(key, value)| format!("{key}: {value}"))
        .collect();
    format!("{{{}}}", fields.join(", "))
}

pub fn print_truth_block(truth: &TruthAssignment) {
    for (tag, value) in truth.iter() {
        println!("  {:<9} {}  {}", tag.name(), tag.glyph(), yes_no(value));
    }
}
