//! Best-effort repair of JSON produced by a language model.
//!
//! Models wrap JSON in markdown fences, add prose around it, use single quotes, leave trailing
//! commas or stop mid-object. [`BestEffortJsonRepair`] fixes the common cases; the result is
//! still only a candidate and callers must parse it.

use serde_json::Value;

/// Repair step applied to raw model output before parsing.
pub trait JsonRepair: Send + Sync {
    fn repair(&self, raw: &str) -> String;
}

/// Default repair. Well-formed JSON is returned unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct BestEffortJsonRepair;

impl JsonRepair for BestEffortJsonRepair {
    fn repair(&self, raw: &str) -> String {
        repair_json(raw)
    }
}

fn is_valid(s: &str) -> bool {
    serde_json::from_str::<Value>(s).is_ok()
}

fn is_object(s: &str) -> bool {
    matches!(serde_json::from_str::<Value>(s), Ok(Value::Object(_)))
}

/// See [`BestEffortJsonRepair`].
///
/// Callers expect an object: when the text from the first bracket does not repair into one
/// (e.g. a `[tag]` before the JSON), the text from the first `{` is tried instead.
pub fn repair_json(raw: &str) -> String {
    if is_valid(raw) {
        return raw.to_string();
    }
    let body = strip_code_fence(raw.trim());
    let Some(start) = body.find(['{', '[']) else {
        return body.to_string();
    };
    let repaired = repair_from(&body[start..]);
    if is_object(&repaired) {
        return repaired;
    }
    match body.find('{') {
        Some(object_start) if object_start > start => repair_from(&body[object_start..]),
        _ => repaired,
    }
}

fn repair_from(candidate: &str) -> String {
    if is_valid(candidate) {
        candidate.to_string()
    } else {
        close_structure(candidate)
    }
}

/// Returns the content of the first markdown code fence, or `s` when there is none.
fn strip_code_fence(s: &str) -> &str {
    let Some(open) = s.find("```") else {
        return s;
    };
    let mut inner = &s[open + 3..];
    // Skip a language tag line such as ```json, but not content that starts on the fence line.
    if let Some(nl) = inner.find('\n') {
        if !inner[..nl].contains(['{', '[']) {
            inner = &inner[nl + 1..];
        }
    }
    match inner.find("```") {
        Some(close) => inner[..close].trim(),
        None => inner.trim(),
    }
}

fn trim_trailing_comma(out: &mut String) {
    let end = out.trim_end().len();
    if out[..end].ends_with(',') {
        out.truncate(end - 1);
    }
}

/// Rewrites `s` (starting at `{` or `[`) into balanced JSON: single-quoted strings become
/// double-quoted, trailing commas are dropped, text after the top-level value is ignored,
/// and unterminated strings, dangling keys and open brackets are closed.
fn close_structure(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 8);
    let mut stack: Vec<char> = Vec::new();
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for c in s.chars() {
        if let Some(q) = quote {
            if escaped {
                // `\'` is not a JSON escape; keep the bare quote.
                if c == '\'' {
                    out.pop();
                }
                out.push(c);
                escaped = false;
                continue;
            }
            match c {
                '\\' => {
                    out.push(c);
                    escaped = true;
                }
                c if c == q => {
                    out.push('"');
                    quote = None;
                }
                '"' => out.push_str("\\\""),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                _ => out.push(c),
            }
            continue;
        }

        match c {
            '"' | '\'' => {
                quote = Some(c);
                out.push('"');
            }
            '{' => {
                stack.push('}');
                out.push(c);
            }
            '[' => {
                stack.push(']');
                out.push(c);
            }
            '}' | ']' => {
                trim_trailing_comma(&mut out);
                if stack.last() == Some(&c) {
                    stack.pop();
                    out.push(c);
                }
                if stack.is_empty() {
                    return out;
                }
            }
            _ => out.push(c),
        }
    }

    if quote.is_some() {
        if escaped {
            out.pop();
        }
        out.push('"');
    }
    let end = out.trim_end().len();
    out.truncate(end);
    if out.ends_with(',') {
        out.pop();
    }
    if out.ends_with(':') {
        out.push_str("null");
    }
    while let Some(closer) = stack.pop() {
        trim_trailing_comma(&mut out);
        out.push(closer);
    }
    out
}
