use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;
use tabled::{builder::Builder, Table};

use homeloan_core::format::format_indian_currency;

use crate::output::is_money_field;

/// Format output as a table using the tabled crate. Monetary fields are
/// rendered with Indian rupee grouping.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(Value::Array(entries)) = map.get("entries") {
                // Amortization schedule: the month rows first, totals after.
                print_array_table(entries);
                print_totals(map);
            } else if let Some(result) = map.get("result") {
                print_result_table(result, map);
            } else {
                print_flat_object(value);
            }
        }
        Value::Array(arr) => {
            print_array_table(arr);
        }
        _ => {
            println!("{}", value);
        }
    }
}

fn print_result_table(result: &Value, envelope: &serde_json::Map<String, Value>) {
    if let Value::Object(res_map) = result {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in res_map {
            match val {
                // Scenario lists get their own table below the scalar fields.
                Value::Array(items)
                    if items.first().map(Value::is_object).unwrap_or(false) =>
                {
                    continue;
                }
                // One level of nesting (e.g. metrics) flattens into dotted rows.
                Value::Object(sub) => {
                    for (sub_key, sub_val) in sub {
                        builder.push_record([
                            format!("{key}.{sub_key}"),
                            format_field(sub_key, sub_val),
                        ]);
                    }
                }
                _ => builder.push_record([key.to_string(), format_field(key, val)]),
            }
        }
        let table = Table::from(builder);
        println!("{}", table);

        for (key, val) in res_map {
            if let Value::Array(items) = val {
                if items.first().map(Value::is_object).unwrap_or(false) {
                    println!("\n{}:", key);
                    print_array_table(items);
                }
            }
        }
    } else {
        print_flat_object(&Value::Object(envelope.clone()));
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_flat_object(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &format_field(key, val)]);
        }
        let table = Table::from(builder);
        println!("{}", table);
    }
}

fn print_array_table(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| {
                        map.get(h.as_str())
                            .map(|v| format_field(h, v))
                            .unwrap_or_default()
                    })
                    .collect();
                builder.push_record(row);
            }
        }

        let table = Table::from(builder);
        println!("{}", table);
    } else {
        for item in arr {
            println!("{}", format_field("", item));
        }
    }
}

fn print_totals(map: &serde_json::Map<String, Value>) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        if key != "entries" {
            builder.push_record([key.as_str(), &format_field(key, val)]);
        }
    }
    println!("\n{}", Table::from(builder));
}

fn format_field(key: &str, value: &Value) -> String {
    if is_money_field(key) {
        if let Some(amount) = as_decimal(value) {
            return format_indian_currency(amount);
        }
    }
    format_value(value)
}

/// Decimals arrive as JSON strings (serde-with-str); accept plain numbers too.
fn as_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::String(s) => Decimal::from_str(s).ok(),
        Value::Number(n) => Decimal::from_str(&n.to_string()).ok(),
        _ => None,
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(|v| format_value(v)).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
