//! Diagnostics playground. Every error in this file is deliberate: open it in
//! an editor and the language server should flag each one. It is not part of
//! any Cargo target and must stay broken.

use std::collections::HashMap;

fn calculate_sum(a: i32, b: i32) -> i32 {
    // type mismatch: string added to a number
    a + b + "string"
}

fn unused_function() {
    let x = 10; // unused variable
}

struct SampleClass {
    name: String,
    unused_attr: Option<i32>, // never read
}

impl SampleClass {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            unused_attr: None,
        }
    }

    fn greet(&self) -> String {
        println!("Hello, {}", self.name);
        // not defined anywhere
        undefined_var
    }
}

fn main() {
    let result = calculate_sum(5, 10);
    println!("{}", result);
}
