use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use serde_json::{Map, Value};
use std::fmt::Write as _;
use std::io;

/// Keys removed from every object before hashing or signing.
pub const EXCLUDED_FIELDS: [&str; 2] = ["hash", "signature"];

/// Produces the canonical UTF-8 bytes for a JSON value.
///
/// Object members named in [`EXCLUDED_FIELDS`] and members whose value is
/// `null` are removed, recursing through nested objects. Values held inside
/// arrays keep every member; only their key order is normalized.
///
/// Floats are written in shortest round-trip form with Python `repr`
/// layout: `1e-07`, `1e+16`, `2.0`.
pub fn canonicalize(value: &Value) -> Vec<u8> {
    let mut out = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut out, CanonicalFormatter);
    canonical_value(value)
        .serialize(&mut serializer)
        .expect("serializing a JSON value into memory cannot fail");
    out
}

/// Returns the normalized value that [`canonicalize`] serializes.
///
/// Keys are inserted in sorted order so the result is stable whether or not
/// `serde_json` preserves insertion order. Its `Display` output is not the
/// canonical text for floats; use [`canonicalize`] for that.
pub fn canonical_value(value: &Value) -> Value {
    normalize(value, true)
}

/// Compact formatter that writes floats the way Python's `repr` does.
struct CanonicalFormatter;

impl Formatter for CanonicalFormatter {
    fn write_f64<W: ?Sized + io::Write>(&mut self, writer: &mut W, value: f64) -> io::Result<()> {
        writer.write_all(format_float(value).as_bytes())
    }

    fn write_f32<W: ?Sized + io::Write>(&mut self, writer: &mut W, value: f32) -> io::Result<()> {
        writer.write_all(format_float(f64::from(value)).as_bytes())
    }
}

/// Shortest round-trip digits, positional when the decimal exponent lies in
/// `-4..16`, scientific otherwise with a signed, at least two-digit exponent.
fn format_float(value: f64) -> String {
    // `{:e}` yields the shortest digits, e.g. `-1.5e-10`, `1e16`, `0e0`.
    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => return scientific,
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let (negative, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let point = exponent + 1;

    let mut out = String::with_capacity(digits.len() + 8);
    if negative {
        out.push('-');
    }

    if point <= -4 || point > 16 {
        out.push_str(&digits[..1]);
        if digits.len() > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        let sign = if exponent < 0 { '-' } else { '+' };
        let _ = write!(out, "e{}{:02}", sign, exponent.unsigned_abs());
    } else if point <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat('0').take(point.unsigned_abs() as usize));
        out.push_str(&digits);
    } else {
        let point = point as usize;
        if point >= digits.len() {
            out.push_str(&digits);
            out.extend(std::iter::repeat('0').take(point - digits.len()));
            out.push_str(".0");
        } else {
            out.push_str(&digits[..point]);
            out.push('.');
            out.push_str(&digits[point..]);
        }
    }

    out
}

fn normalize(value: &Value, strip: bool) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map
                .iter()
                .filter(|(key, child)| {
                    !strip || !(child.is_null() || EXCLUDED_FIELDS.contains(&key.as_str()))
                })
                .collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));

            let mut sorted = Map::new();
            for (key, child) in entries {
                sorted.insert(key.clone(), normalize(child, strip));
            }
            Value::Object(sorted)
        }
        // Members of objects nested in arrays are only reordered.
        Value::Array(items) => Value::Array(items.iter().map(|v| normalize(v, false)).collect()),
        other => other.clone(),
    }
}
