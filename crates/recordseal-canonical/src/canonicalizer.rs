use crate::value::CanonicalValue;

/// Produces the deterministic string form of a canonical value.
///
/// Total over [`CanonicalValue`]: every variant has a defined rendering and
/// there is no failure path. Two values that are structurally equal as
/// unordered mappings always canonicalize to the identical string, because
/// mapping keys are emitted in code-point order. Sequence element order is
/// preserved; sequences represent ordered data and are never sorted.
pub fn canonicalize(value: &CanonicalValue) -> String {
    let mut out = String::new();
    write_value(value, &mut out);
    out
}

fn write_value(value: &CanonicalValue, out: &mut String) {
    match value {
        CanonicalValue::Null => {}
        CanonicalValue::Bool(true) => out.push_str("true"),
        CanonicalValue::Bool(false) => out.push_str("false"),
        CanonicalValue::Number(n) => {
            // Non-finite numbers and negative zero normalize to absent,
            // avoiding numeric-representation ambiguity across platforms.
            if n.is_finite() && !(*n == 0.0 && n.is_sign_negative()) {
                out.push_str(&n.to_string());
            }
        }
        CanonicalValue::Text(s) => out.push_str(s),
        CanonicalValue::Sequence(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(item, out);
            }
            out.push(']');
        }
        CanonicalValue::Mapping(map) => {
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push('"');
                out.push_str(key);
                out.push_str("\":");
                write_value(item, out);
            }
            out.push('}');
        }
    }
}
