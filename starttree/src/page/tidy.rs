//! Output normalization.
//!
//! Only whitespace between lines is touched: trailing blanks are stripped,
//! runs of empty lines collapse into one and the text ends with a single
//! newline. Tags, attributes and text are left as they are.
//!
//! Lines inside `<pre>`, `<textarea>` and `<script>` are content, so they
//! are copied verbatim from the line opening the element up to the line
//! closing it.

/// Elements whose inner lines are never normalized.
const RAW_ELEMENTS: [&str; 3] = ["pre", "textarea", "script"];

/// Normalizes an assembled page for readability.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut blank_run = false;
    let mut raw: Option<&str> = None;

    for line in text.lines() {
        if let Some(tag) = raw {
            out.push_str(line);
            out.push('\n');
            if line.to_ascii_lowercase().contains(&format!("</{tag}")) {
                raw = None;
            }
            blank_run = false;
            continue;
        }

        raw = opens_raw(line);
        let line = if raw.is_some() { line } else { line.trim_end() };
        if line.is_empty() {
            if blank_run || out.is_empty() {
                continue;
            }
            blank_run = true;
        } else {
            blank_run = false;
        }
        out.push_str(line);
        out.push('\n');
    }

    while out.ends_with("\n\n") {
        out.pop();
    }
    out
}

/// Raw element left open at the end of `line`, if any.
fn opens_raw(line: &str) -> Option<&'static str> {
    let lower = line.to_ascii_lowercase();
    RAW_ELEMENTS.into_iter().find(|tag| {
        let open = format!("<{tag}");
        let last_open = lower.match_indices(&open).map(|(i, _)| i).filter(|&i| {
            let rest = &lower[i + open.len()..];
            rest.is_empty() || rest.starts_with(|c: char| c == '>' || c.is_ascii_whitespace())
        });
        match last_open.last() {
            Some(i) => !lower[i..].contains(&format!("</{tag}")),
            None => false,
        }
    })
}
