use crate::cli::BootArgs;
use crate::support::{boot_or_exit, print_json};

pub fn run(boot: BootArgs, json_output: bool) {
    let engine = boot_or_exit(&boot);
    let summaries = engine.summaries();

    if json_output {
        print_json(&summaries);
        return;
    }

    println!("topos spells ({})", summaries.len());
    for summary in &summaries {
        println!(
            "  {}: {} → {}",
            summary.name, summary.source_type, summary.target_type
        );
        if !summary.metadata.magic.is_empty() {
            println!("    magic: {}", summary.metadata.magic);
        }
        if !summary.metadata.math.is_empty() {
            println!("    math:  {}", summary.metadata.math);
        }
    }
}
