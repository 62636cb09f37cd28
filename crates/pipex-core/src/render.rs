use crate::explorer::StageExplorer;
use std::fmt::Write as _;

/// Render the explorer as plain text: one line per collapsed stage, the
/// expanded stage (if any) with its details and tool list inline.
///
/// Pure function of explorer state: calling it again without an
/// intervening `select` produces byte-identical output.
pub fn render(explorer: &StageExplorer) -> String {
    let mut out = String::new();
    for stage in explorer.catalog().iter() {
        if explorer.is_expanded(stage.id) {
            let _ = writeln!(out, "[-] {}. {}", stage.id, stage.title);
            for line in wrap(&stage.details, 72) {
                let _ = writeln!(out, "    {line}");
            }
            if !stage.tools.is_empty() {
                let _ = writeln!(out, "    Tools: {}", stage.tools.join(", "));
            }
        } else {
            let _ = writeln!(out, "[+] {}. {} — {}", stage.id, stage.title, stage.summary);
        }
    }
    out
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
