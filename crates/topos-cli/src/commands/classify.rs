use crate::support::{NULL_ELEMENT, print_json, print_truth_block};
use serde_json::json;
use std::collections::HashSet;
use topos_kernel::SubobjectClassifier;

fn elements(raw: &[String]) -> HashSet<Option<String>> {
    raw.iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(|item| (item != NULL_ELEMENT).then(|| item.to_string()))
        .collect()
}

pub fn run(subset: Vec<String>, whole: Vec<String>, json_output: bool) {
    let subset_elements = elements(&subset);
    let whole_elements = elements(&whole);
    let truth = SubobjectClassifier::new().classify(&subset_elements, &whole_elements);

    if json_output {
        let payload = json!({
            "subset_size": subset_elements.len(),
            "whole_size": whole_elements.len(),
            "truth": truth,
        });
        print_json(&payload);
        return;
    }

    println!(
        "topos classify |subset| = {}, |whole| = {}",
        subset_elements.len(),
        whole_elements.len()
    );
    print_truth_block(&truth);
}
