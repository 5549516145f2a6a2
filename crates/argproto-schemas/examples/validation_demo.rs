//! Validation demonstration example
//!
//! Copyright (c) 2025 Argproto Team
//! Licensed under the Apache-2.0 license

use argproto_schemas::{MapShape, Schema, Validate};
use serde_json::json;

fn main() {
    println!("=== Argproto Schema Validation Demo ===\n");

    let options = MapShape::new()
        .required("target", Schema::string())
        .optional_with_default("jobs", 1, Schema::integer())
        .optional("mode", Schema::one_of(["debug", "release"]));

    println!("Shape: {}\n", options);

    let inputs = [
        json!({"target": "app"}),
        json!({"target": "app", "mode": "release", "jobs": 8}),
        json!({"jobs": 8}),
        json!({"target": "app", "mode": "fast"}),
        json!({"target": "app", "colour": "blue"}),
    ];

    for input in &inputs {
        println!("Validating {}:", input);
        match options.validate(input) {
            Ok(value) => println!("   Valid: {}", value),
            Err(e) => println!("   Error: {}", e),
        }
    }
}
