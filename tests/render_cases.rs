use linktext::{Content, RenderOptions, text_to_html};
use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
struct RenderCase {
    name: String,
    content: Content,
    #[serde(default)]
    options: RenderOptions,
    html: String,
}

#[test]
fn render_fixture_cases() {
    let data = fs::read_to_string("tests/data/cases.json").expect("Failed to read cases.json");
    let cases: Vec<RenderCase> = serde_json::from_str(&data).expect("Failed to parse cases.json");
    assert!(!cases.is_empty());

    let mut failures = Vec::new();
    for case in &cases {
        let result = text_to_html(case.content.clone(), &case.options);
        if result != case.html {
            eprintln!("\nCase `{}` failed", case.name);
            eprintln!("  Input: {:?}", case.content);
            eprintln!("  Expected: {:?}", case.html);
            eprintln!("  Got: {:?}", result);
            failures.push(case.name.as_str());
        }
    }

    assert!(failures.is_empty(), "failed cases: {:?}", failures);
}
