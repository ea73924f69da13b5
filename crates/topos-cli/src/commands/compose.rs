use crate::cli::BootArgs;
use crate::support::{boot_or_exit, exit_with, print_json};

pub fn run(first: String, second: String, boot: BootArgs, json_output: bool) {
    let engine = boot_or_exit(&boot);
    let composite = engine
        .compose(&first, &second)
        .unwrap_or_else(|e| exit_with(e));

    if json_output {
        print_json(&composite.summary());
        return;
    }

    let metadata = composite.metadata();
    println!("{composite}");
    println!("  math:   {}", metadata.math);
    println!("  magic:  {}", metadata.magic);
    println!("  art:    {}", metadata.art);
    println!("  avatar: {}", metadata.avatar);
    println!("  nature: {}", metadata.nature);
}
