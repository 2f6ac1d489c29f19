use crate::types::NameSet;

/// Derives every case variant the renderers need from `base`.
pub fn name_set(base: &str) -> NameSet {
    let snake = split_upper_runs(base);
    NameSet {
        base:        base.to_string(),
        upper:       map_first(base, |c| c.to_uppercase().collect()),
        lower:       map_first(base, |c| c.to_lowercase().collect()),
        upper_snake: snake.to_uppercase(),
        lower_snake: snake.to_lowercase(),
    }
}

/// Only the first character changes; the rest is kept verbatim.
fn map_first(s: &str, f: impl Fn(char) -> String) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => f(first) + chars.as_str(),
    }
}

/// Puts `_` in front of each run of uppercase letters, except a run at the start.
fn split_upper_runs(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev_upper = false;
    for (i, c) in s.chars().enumerate() {
        let upper = c.is_uppercase();
        if upper && !prev_upper && i > 0 {
            out.push('_');
        }
        out.push(c);
        prev_upper = upper;
    }
    out
}
