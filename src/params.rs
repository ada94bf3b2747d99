// Parameter substitution
//
// Replaces prefix-marked tokens in a template with values from a page's
// data store. A token is the configured prefix immediately followed by a
// braced key: prefix "$" matches `${key}`, the empty prefix matches `{key}`.

use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;

/// Substitutes `<prefix>{key}` tokens in `template` with values from `data`.
///
/// String values substitute verbatim; other JSON values substitute via their
/// JSON rendering. Tokens whose key has no entry in `data` are left
/// untouched.
pub fn param_translate(data: &HashMap<String, Value>, prefix: &str, template: &str) -> String {
    if template.is_empty() || data.is_empty() {
        return template.to_string();
    }

    let pattern = format!(r"{}\{{([^{{}}]+)\}}", regex::escape(prefix));
    let Ok(re) = Regex::new(&pattern) else {
        // Unreachable: an escaped prefix always compiles.
        return template.to_string();
    };

    re.replace_all(template, |caps: &regex::Captures| {
        match data.get(&caps[1]) {
            Some(Value::String(s)) => s.clone(),
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        }
    })
    .into_owned()
}
