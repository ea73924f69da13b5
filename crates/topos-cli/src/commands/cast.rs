use crate::cli::BootArgs;
use crate::support::{boot_or_exit, exit_with, print_json, render_content};
use serde_json::json;

pub fn run(names: Vec<String>, boot: BootArgs, json_output: bool) {
    let mut engine = boot_or_exit(&boot);

    let mut reports = Vec::with_capacity(names.len());
    let mut failure = None;
    for name in &names {
        match engine.cast(name) {
            Ok(report) => reports.push(report),
            Err(e) => {
                failure = Some(e);
                break;
            }
        }
    }

    if json_output {
        let payload = json!({
            "reports": reports,
            "state": engine.state(),
            "error": failure.as_ref().map(ToString::to_string),
        });
        print_json(&payload);
    } else {
        for report in &reports {
            println!("cast {}", report.spell);
            println!("  {}", report.magic);
            println!("  before: {}", render_content(&report.before));
            println!("  after:  {}", render_content(&report.after));
            println!("  truth:  {}", report.truth);
        }
    }

    if let Some(e) = failure {
        exit_with(e);
    }
}
