use std::env;
use yxmd::plugin::display_name;
use yxmd::{Document, WorkflowParser};

const DEFAULT_WORKFLOW: &str = "data/sample_workflow.yxmd";

fn main() {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: cargo run -- [path/to/workflow.yxmd]");
        std::process::exit(1);
    }
    let path = args.get(1).map(String::as_str).unwrap_or(DEFAULT_WORKFLOW);

    let document = match Document::from_file(path) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("Failed to load workflow: {}", e);
            std::process::exit(1);
        }
    };

    let parser = WorkflowParser::builder().lenient_positions().build();
    let workflow = match parser.extract(&document) {
        Ok(workflow) => workflow,
        Err(e) => {
            eprintln!("Failed to read workflow: {}", e);
            std::process::exit(1);
        }
    };

    println!("File: {}", path);
    println!(
        "Alteryx Version: {}",
        if workflow.version.is_empty() {
            "Unknown"
        } else {
            &workflow.version
        }
    );
    println!("Number of Tools: {}", workflow.tools.len());
    println!("Number of Connections: {}", workflow.connections.len());

    println!("\nTools in workflow:");
    for (i, tool) in workflow.tools.iter().enumerate() {
        println!("  {}. Tool {}: {}", i + 1, tool.tool_id, display_name(&tool.plugin));
    }
}
