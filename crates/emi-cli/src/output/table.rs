use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use emi_core::format::format_inr;

use super::{as_decimal, plain, MONEY_FIELDS};

/// Format output as tables, rupee amounts in Indian grouping.
///
/// Nested objects (breakdown, validation) get their own Field/Value table;
/// arrays (the schedule) become one row per element.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => match map.get("result") {
            Some(Value::Object(result)) => print_envelope(result, map),
            _ => print_object(None, map),
        },
        Value::Array(rows) => print_rows(rows),
        _ => println!("{}", value),
    }
}

fn print_envelope(result: &Map<String, Value>, envelope: &Map<String, Value>) {
    print_object(None, result);

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings.iter().filter_map(Value::as_str) {
                println!("  - {}", w);
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_object(title: Option<&str>, map: &Map<String, Value>) {
    if let Some(title) = title {
        println!("\n{}", title);
    }

    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    let mut has_scalars = false;
    for (key, val) in map {
        if !val.is_object() && !val.is_array() {
            builder.push_record([key.clone(), render(key, val)]);
            has_scalars = true;
        }
    }
    if has_scalars {
        println!("{}", Table::from(builder));
    }

    for (key, val) in map {
        match val {
            Value::Object(child) => print_object(Some(key.as_str()), child),
            Value::Array(rows) => {
                println!("\n{}", key);
                print_rows(rows);
            }
            _ => {}
        }
    }
}

fn print_rows(rows: &[Value]) {
    let Some(Value::Object(first)) = rows.first() else {
        if rows.is_empty() {
            println!("(empty)");
        }
        for item in rows {
            println!("{}", plain(item));
        }
        return;
    };

    let headers: Vec<String> = first.keys().cloned().collect();
    let mut builder = Builder::default();
    builder.push_record(&headers);

    for row in rows.iter().filter_map(Value::as_object) {
        let cells: Vec<String> = headers
            .iter()
            .map(|h| row.get(h).map(|v| render(h, v)).unwrap_or_default())
            .collect();
        builder.push_record(cells);
    }

    println!("{}", Table::from(builder));
}

fn render(key: &str, value: &Value) -> String {
    if value.is_null() {
        return "-".to_string();
    }
    if MONEY_FIELDS.contains(&key) {
        if let Some(amount) = as_decimal(value) {
            return format_inr(amount);
        }
    }
    plain(value)
}
