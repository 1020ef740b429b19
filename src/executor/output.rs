//! Output shaping for error details.

const MAX_LINE_CHARS: usize = 200;
const MAX_TOTAL_CHARS: usize = 1000;

/// Trim and bound command output before it is placed in an error message.
///
/// Keeps at most `max_lines` non-empty lines, shortens long lines, and caps
/// the overall length.
pub fn sanitize_output(output: &str, max_lines: usize) -> String {
    let lines: Vec<&str> = output
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .collect();

    let mut result = String::new();
    for line in lines.iter().take(max_lines) {
        let line = if line.chars().count() > MAX_LINE_CHARS {
            let head: String = line.chars().take(MAX_LINE_CHARS).collect();
            format!("{}...", head)
        } else {
            line.to_string()
        };

        if result.len() + line.len() > MAX_TOTAL_CHARS {
            result.push_str("...[truncated]");
            return result;
        }

        if !result.is_empty() {
            result.push('\n');
        }
        result.push_str(&line);
    }

    if lines.len() > max_lines {
        result.push_str("\n...[additional output truncated]");
    }

    result
}
