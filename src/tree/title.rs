//! Title extraction from marker file contents

/// A top-level heading located in a marker file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Heading text with the marker and surrounding whitespace removed
    pub text: String,
    /// Zero-based line index the heading was found on
    pub line: usize,
    /// Whether no non-blank line precedes the heading
    pub leading: bool,
}

/// Locate the first top-level heading in `content`.
///
/// A top-level heading is a line starting with a single `#` followed by a
/// space or tab. Lines inside fenced code blocks are never headings, and a
/// heading with no text is passed over.
pub fn find_heading(content: &str) -> Option<Heading> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut fence: Option<&str> = None;
    let mut seen_text = false;

    for (line_no, line) in content.lines().enumerate() {
        if let Some(open) = fence {
            if line.trim_start().starts_with(open) {
                fence = None;
            }
            seen_text = true;
            continue;
        }

        if let Some(open) = fence_opener(line) {
            fence = Some(open);
            seen_text = true;
            continue;
        }

        if let Some(text) = heading_text(line) {
            return Some(Heading {
                text: text.to_string(),
                line: line_no,
                leading: !seen_text,
            });
        }

        if !line.trim().is_empty() {
            seen_text = true;
        }
    }

    None
}

/// Derive the display title for a marker file, falling back to the
/// containing directory's name when no heading is present.
pub fn extract_title(content: &str, dir_name: &str) -> String {
    match find_heading(content) {
        Some(heading) => heading.text,
        None => fallback_title(dir_name),
    }
}

/// Directory-name title with any path separators stripped
pub fn fallback_title(dir_name: &str) -> String {
    dir_name
        .chars()
        .filter(|c| *c != '/' && *c != '\\')
        .collect()
}

/// Marker body with the title heading line removed.
///
/// `heading` is the result of [`find_heading`] on the same content. A BOM is
/// dropped and blank lines around the remaining text are trimmed.
pub fn marker_body(content: &str, heading: Option<&Heading>) -> String {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let skip = heading.map(|h| h.line);
    let lines: Vec<&str> = content
        .lines()
        .enumerate()
        .filter(|(line_no, _)| Some(*line_no) != skip)
        .map(|(_, line)| line)
        .collect();

    let first = lines.iter().position(|l| !l.trim().is_empty());
    let last = lines.iter().rposition(|l| !l.trim().is_empty());
    match (first, last) {
        (Some(first), Some(last)) => lines[first..=last].join("\n"),
        _ => String::new(),
    }
}

/// Push every ATX heading in `body` down by `shift` levels, never past
/// `max_level`. Fenced code is copied untouched.
pub fn shift_headings(body: &str, shift: usize, max_level: usize) -> String {
    let max_level = max_level.max(1);
    let mut fence: Option<&str> = None;
    let mut lines = Vec::new();

    for line in body.lines() {
        if let Some(open) = fence {
            if line.trim_start().starts_with(open) {
                fence = None;
            }
            lines.push(line.to_string());
            continue;
        }
        if let Some(open) = fence_opener(line) {
            fence = Some(open);
            lines.push(line.to_string());
            continue;
        }

        match atx_level(line) {
            Some(level) => {
                let target = (level + shift).min(max_level);
                lines.push(format!("{}{}", "#".repeat(target), &line[level..]));
            }
            None => lines.push(line.to_string()),
        }
    }

    lines.join("\n")
}

fn fence_opener(line: &str) -> Option<&'static str> {
    let trimmed = line.trim_start();
    if trimmed.starts_with("```") {
        Some("```")
    } else if trimmed.starts_with("~~~") {
        Some("~~~")
    } else {
        None
    }
}

/// Level of an ATX heading line: 1-6 `#` at line start, then whitespace or
/// end of line
fn atx_level(line: &str) -> Option<usize> {
    let level = line.bytes().take_while(|b| *b == b'#').count();
    if level == 0 || level > 6 {
        return None;
    }
    let rest = &line[level..];
    (rest.is_empty() || rest.starts_with([' ', '\t'])).then_some(level)
}

fn heading_text(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('#')?;
    if !rest.starts_with([' ', '\t']) {
        return None;
    }
    let text = rest.trim();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
