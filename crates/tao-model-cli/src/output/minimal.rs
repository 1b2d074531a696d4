use serde_json::Value;

/// Print just the headline figures from the output.
///
/// P&L and scenario tables reduce to their net income column, one line per
/// row; the cash trajectory reduces to the month the balance turns positive.
/// The combined evaluation reduces to the P&L nets.
pub fn print_minimal(value: &Value) {
    let result = value
        .as_object()
        .and_then(|map| map.get("result"))
        .unwrap_or(value);

    if let Value::Object(map) = result {
        if let Some(Value::Object(pnl)) = map.get("pnl") {
            print_nets(pnl.get("years"));
            return;
        }
        if map.contains_key("years") {
            print_nets(map.get("years"));
            return;
        }
        if map.contains_key("scenarios") {
            print_nets(map.get("scenarios"));
            return;
        }
        if let Some(month) = map.get("month_turn_positive") {
            println!("{}", format_minimal(month));
            return;
        }
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    println!("{}", format_minimal(result));
}

fn print_nets(rows: Option<&Value>) {
    if let Some(Value::Array(rows)) = rows {
        for row in rows {
            if let Some(net) = row.get("net") {
                println!("{}", format_minimal(net));
            }
        }
    }
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
