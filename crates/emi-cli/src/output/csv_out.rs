use serde_json::{Map, Value};
use std::io;

use super::plain;

/// Write output as CSV to stdout.
///
/// Row arrays (the schedule) are written one record per row; an analysis
/// envelope writes its schedule. Anything else becomes `field,value` pairs,
/// nested keys joined with dots.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    match result {
        Value::Array(rows) => write_rows(&mut wtr, rows),
        Value::Object(map) => match map.get("schedule") {
            Some(Value::Array(rows)) => write_rows(&mut wtr, rows),
            _ => {
                let _ = wtr.write_record(["field", "value"]);
                for (field, val) in flatten(map) {
                    let _ = wtr.write_record([field, val]);
                }
            }
        },
        _ => {
            let _ = wtr.write_record([plain(result)]);
        }
    }

    let _ = wtr.flush();
}

fn write_rows<W: io::Write>(wtr: &mut csv::Writer<W>, rows: &[Value]) {
    let Some(Value::Object(first)) = rows.first() else {
        for item in rows {
            let _ = wtr.write_record([plain(item)]);
        }
        return;
    };

    let headers: Vec<&str> = first.keys().map(String::as_str).collect();
    let _ = wtr.write_record(&headers);

    for row in rows.iter().filter_map(Value::as_object) {
        let record: Vec<String> = headers
            .iter()
            .map(|h| row.get(*h).map(plain).unwrap_or_default())
            .collect();
        let _ = wtr.write_record(&record);
    }
}

/// `{"errors": {"principal": ".."}}` -> `("errors.principal", "..")`.
fn flatten(map: &Map<String, Value>) -> Vec<(String, String)> {
    let mut out = Vec::new();
    for (key, val) in map {
        match val {
            Value::Object(child) => {
                for (sub, v) in flatten(child) {
                    out.push((format!("{key}.{sub}"), v));
                }
            }
            _ => out.push((key.clone(), plain(val))),
        }
    }
    out
}
