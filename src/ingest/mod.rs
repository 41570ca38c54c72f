//! Item-list ingestion: turns the three alternative order-form inputs
//! (free-text lines, raw JSON, catalog selection) into one canonical list of
//! `{name, price}` items. Pure functions, no I/O; the catalog channel is
//! handed already-resolved menu entries by the caller.

use crate::domain::requests::OrderFormErrors;
use crate::model::OrderItem;
use serde_json::Value;

pub const NO_DISH_ERROR: &str = "Add at least one dish through any of the input channels";

/// Parses one `"<name> - <price>"` line. The name is the shortest prefix
/// followed by a dash and a non-negative decimal; text after the price is
/// ignored. Returns `None` when no such split exists.
fn parse_text_line(line: &str) -> Option<OrderItem> {
    for (idx, ch) in line.char_indices() {
        if ch != '-' || idx == 0 {
            continue;
        }

        let name = line[..idx].trim();
        if name.is_empty() {
            continue;
        }

        let rest = line[idx + 1..].trim_start();
        if let Some(price) = leading_decimal(rest) {
            return Some(OrderItem {
                name: name.to_string(),
                price,
            });
        }
    }
    None
}

/// Longest `\d+(\.\d+)?` prefix of `s`, if any.
fn leading_decimal(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == 0 {
        return None;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac = end + 1;
        while frac < bytes.len() && bytes[frac].is_ascii_digit() {
            frac += 1;
        }
        if frac > end + 1 {
            end = frac;
        }
    }
    s[..end].parse().ok()
}

/// Free-text channel: one item per non-blank line. Malformed lines produce
/// one error each and do not stop the remaining lines from parsing.
pub fn parse_text_channel(text: &str) -> (Vec<OrderItem>, Vec<String>) {
    let mut items = Vec::new();
    let mut errors = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_text_line(line) {
            Some(item) => items.push(item),
            None => errors.push(format!(
                "Invalid format in line \"{line}\". Use \"name - price\""
            )),
        }
    }

    (items, errors)
}

/// JSON channel: the document must be an array of objects carrying `name`
/// and `price`. A document-level failure is reported once; per-element
/// failures are reported individually.
pub fn parse_json_channel(raw: &str) -> (Vec<OrderItem>, Vec<String>) {
    let mut items = Vec::new();
    let mut errors = Vec::new();

    if raw.trim().is_empty() {
        return (items, errors);
    }

    let document: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(_) => {
            errors.push("Invalid JSON format".to_string());
            return (items, errors);
        }
    };

    let Value::Array(elements) = document else {
        errors.push("JSON must be an array of objects".to_string());
        return (items, errors);
    };

    for element in elements {
        let Some(object) = element.as_object() else {
            errors.push("Each item must contain \"name\" and \"price\" fields".to_string());
            continue;
        };
        let (Some(name_value), Some(price_value)) = (object.get("name"), object.get("price"))
        else {
            errors.push("Each item must contain \"name\" and \"price\" fields".to_string());
            continue;
        };
        let Some(name) = name_value.as_str() else {
            errors.push("Each item must contain \"name\" and \"price\" fields".to_string());
            continue;
        };
        match coerce_price(price_value) {
            Some(price) => items.push(OrderItem {
                name: name.to_string(),
                price,
            }),
            None => errors.push(format!("Invalid price for dish \"{name}\"")),
        }
    }

    (items, errors)
}

/// A price may arrive as a JSON number or as a numeric string.
fn coerce_price(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Merges all three channels into the canonical item list: text entries,
/// then JSON entries, then catalog entries, no dedup. Any channel error
/// invalidates the submission; so does an empty merged list.
pub fn merge_channels(
    items_text: &str,
    items_json: &str,
    catalog_items: Vec<OrderItem>,
) -> Result<Vec<OrderItem>, OrderFormErrors> {
    let (text_items, text_errors) = parse_text_channel(items_text);
    let (json_items, json_errors) = parse_json_channel(items_json);

    let mut merged = text_items;
    merged.extend(json_items);
    merged.extend(catalog_items);

    let mut errors = OrderFormErrors {
        items_text: text_errors,
        items: json_errors,
        ..OrderFormErrors::default()
    };

    if merged.is_empty() {
        errors.form.push(NO_DISH_ERROR.to_string());
    }

    if errors.is_empty() { Ok(merged) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, price: f64) -> OrderItem {
        OrderItem {
            name: name.to_string(),
            price,
        }
    }

    #[test]
    fn test_text_channel_basic() {
        let (items, errors) = parse_text_channel("Soup - 7.5\nCoffee - 2.3");
        assert!(errors.is_empty());
        assert_eq!(items, vec![item("Soup", 7.5), item("Coffee", 2.3)]);
    }

    #[test]
    fn test_text_channel_skips_blank_lines() {
        let (items, errors) = parse_text_channel("\nSoup - 7.5\n\n  \nTea - 2\n");
        assert!(errors.is_empty());
        assert_eq!(items, vec![item("Soup", 7.5), item("Tea", 2.0)]);
    }

    #[test]
    fn test_text_channel_bad_line_keeps_good_lines() {
        let (items, errors) = parse_text_channel("Soup - 7.5\njust words\nTea - 2");
        assert_eq!(items, vec![item("Soup", 7.5), item("Tea", 2.0)]);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("just words"));
    }

    #[test]
    fn test_text_channel_name_may_contain_dash() {
        let (items, errors) = parse_text_channel("Semi-dry wine - 12.5");
        assert!(errors.is_empty());
        assert_eq!(items, vec![item("Semi-dry wine", 12.5)]);
    }

    #[test]
    fn test_text_channel_ignores_trailing_text_after_price() {
        let (items, errors) = parse_text_channel("Soup - 250 large");
        assert!(errors.is_empty());
        assert_eq!(items, vec![item("Soup", 250.0)]);
    }

    #[test]
    fn test_text_channel_dash_before_price_folds_into_name() {
        // "- -5" is no price, so the split moves to the second dash and the
        // first one stays part of the name; a line with nothing before any
        // dash never matches
        let (items, errors) = parse_text_channel("Soup - -5\n- 10");
        assert_eq!(items, vec![item("Soup -", 5.0)]);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("- 10"));
    }

    #[test]
    fn test_json_channel_basic() {
        let raw = r#"[{"name":"Pizza","price":12.0},{"name":"Juice","price":3.5}]"#;
        let (items, errors) = parse_json_channel(raw);
        assert!(errors.is_empty());
        assert_eq!(items, vec![item("Pizza", 12.0), item("Juice", 3.5)]);
    }

    #[test]
    fn test_json_channel_numeric_string_price() {
        let (items, errors) = parse_json_channel(r#"[{"name":"Tea","price":"2.5"}]"#);
        assert!(errors.is_empty());
        assert_eq!(items, vec![item("Tea", 2.5)]);
    }

    #[test]
    fn test_json_channel_bad_price_reported_per_item() {
        let raw = r#"[{"name":"Tea","price":"cheap"},{"name":"Soup","price":7.5}]"#;
        let (items, errors) = parse_json_channel(raw);
        assert_eq!(items, vec![item("Soup", 7.5)]);
        assert_eq!(errors, vec!["Invalid price for dish \"Tea\"".to_string()]);
    }

    #[test]
    fn test_json_channel_missing_keys() {
        let (items, errors) = parse_json_channel(r#"[{"name":"Tea"},42]"#);
        assert!(items.is_empty());
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_json_channel_non_array_reported_once() {
        let (items, errors) = parse_json_channel(r#"{"name":"Tea","price":2}"#);
        assert!(items.is_empty());
        assert_eq!(errors, vec!["JSON must be an array of objects".to_string()]);
    }

    #[test]
    fn test_json_channel_malformed_document() {
        let (items, errors) = parse_json_channel("[{broken");
        assert!(items.is_empty());
        assert_eq!(errors, vec!["Invalid JSON format".to_string()]);
    }

    #[test]
    fn test_merge_order_is_text_then_json_then_catalog() {
        let merged = merge_channels(
            "Soup - 7.5",
            r#"[{"name":"Pizza","price":12.0}]"#,
            vec![item("Espresso", 2.5)],
        )
        .unwrap();
        assert_eq!(
            merged,
            vec![item("Soup", 7.5), item("Pizza", 12.0), item("Espresso", 2.5)]
        );
    }

    #[test]
    fn test_merge_keeps_duplicates() {
        let merged = merge_channels("Tea - 2\nTea - 2", "", vec![]).unwrap();
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_merge_empty_inputs_is_form_error() {
        let errors = merge_channels("", "", vec![]).unwrap_err();
        assert_eq!(errors.form, vec![NO_DISH_ERROR.to_string()]);
        assert!(errors.items_text.is_empty());
        assert!(errors.items.is_empty());
    }

    #[test]
    fn test_merge_all_rejected_is_form_error_plus_field_errors() {
        let errors = merge_channels("nonsense", "", vec![]).unwrap_err();
        assert_eq!(errors.items_text.len(), 1);
        assert_eq!(errors.form, vec![NO_DISH_ERROR.to_string()]);
    }

    #[test]
    fn test_merge_channel_error_invalidates_despite_valid_items() {
        let errors = merge_channels("Soup - 7.5\nbroken line", "", vec![]).unwrap_err();
        assert_eq!(errors.items_text.len(), 1);
        assert!(errors.form.is_empty());
    }
}
