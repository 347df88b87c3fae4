use serde_json::Value;

use super::plain;

/// Print just the headline figure.
///
/// Looks for the monthly EMI (directly, or under `breakdown` in an analysis
/// envelope), then the validation verdict, then falls back to the first field.
pub fn print_minimal(value: &Value) {
    println!("{}", headline(value));
}

fn headline(value: &Value) -> String {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let Value::Object(map) = result_obj else {
        return plain(result_obj);
    };

    let nested = map.get("breakdown").and_then(Value::as_object);
    for key in ["monthly_emi", "is_valid"] {
        let found = map.get(key).or_else(|| nested.and_then(|b| b.get(key)));
        if let Some(val) = found.filter(|v| !v.is_null()) {
            return plain(val);
        }
    }

    match map.iter().next() {
        Some((key, val)) => format!("{}: {}", key, plain(val)),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_headline_breakdown() {
        let v = json!({"monthly_emi": "147530", "principal": "17000000"});
        assert_eq!(headline(&v), "147530");
    }

    #[test]
    fn test_headline_analysis_envelope() {
        let v = json!({"result": {"parameters": {}, "breakdown": {"monthly_emi": "21247"}}});
        assert_eq!(headline(&v), "21247");
    }

    #[test]
    fn test_headline_validation() {
        let v = json!({"is_valid": false, "errors": {"principal": "Minimum loan amount is ₹50 Lakhs"}});
        assert_eq!(headline(&v), "false");
    }

    #[test]
    fn test_headline_fallback_first_field() {
        let v = json!({"min_loan_amount": "5000000"});
        assert_eq!(headline(&v), "min_loan_amount: 5000000");
    }
}
