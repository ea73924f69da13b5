use crate::cli::BootArgs;
use crate::support::{
    boot_or_exit, exit_with, parse_tag_or_exit, print_json, print_truth_block, yes_no,
};
use serde_json::json;
use topos_kernel::TruthReading;

pub fn run(apply: Vec<String>, tag: Option<String>, boot: BootArgs, json_output: bool) {
    let tag = tag.as_deref().map(parse_tag_or_exit);
    let mut engine = boot_or_exit(&boot);
    if let Err(e) = engine.compose_sequence(&apply) {
        exit_with(e);
    }

    let reading = engine.query_truth(tag);
    if json_output {
        let payload = json!({
            "applied": apply,
            "mode": engine.state().mode(),
            "tag": tag,
            "truth": reading,
        });
        print_json(&payload);
        return;
    }

    match reading {
        TruthReading::Single(value) => {
            let label = tag
                .map(|tag| format!("{} {}", tag.name(), tag.glyph()))
                .unwrap_or_default();
            println!("{label}: {}", yes_no(value));
        }
        TruthReading::Full(truth) => {
            println!("topos truth (mode {})", engine.state().mode());
            print_truth_block(&truth);
        }
    }
}
