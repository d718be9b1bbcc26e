//! Greedy paragraph reflow with runt avoidance.

use unicode_width::UnicodeWidthStr;

use crate::span::TextRun;

/// Wraps a run of spans at `max_line_len` display columns. A span is
/// never split across lines; a span wider than the margin gets a line
/// of its own and overflows it.
///
/// Lines keep a trailing space per chunk; the renderer strips line
/// ends globally before joining.
pub fn reflow(run: &TextRun, max_line_len: usize, avoid_runts: bool) -> Vec<String> {
    let mut lines: Vec<Vec<String>> = vec![Vec::new()];

    for span in &run.spans {
        let chunk = format!("{} ", span.text());

        match lines.last_mut() {
            Some(last) if last.is_empty() || line_width(last) + span.width() <= max_line_len => {
                last.push(chunk);
            }
            _ => lines.push(vec![chunk]),
        }
    }

    if avoid_runts {
        fix_runt(&mut lines, max_line_len);
    }

    let mut lines: Vec<String> = lines.into_iter().map(|chunks| chunks.concat()).collect();

    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    lines
}

// A single leftover chunk on the last line reads badly; pull the
// previous line's last chunk down when the pair still fits.
fn fix_runt(lines: &mut [Vec<String>], max_line_len: usize) {
    if lines.len() < 2 || lines[lines.len() - 1].len() != 1 {
        return;
    }

    let at = lines.len() - 2;
    let prev_last = match lines[at].last() {
        Some(chunk) => chunk.width(),
        None => return,
    };
    let runt = lines[at + 1][0].width();

    // chunk widths include their trailing space, hence the -1
    if prev_last + runt - 1 <= max_line_len {
        if let Some(moved) = lines[at].pop() {
            lines[at + 1].insert(0, moved);
        }
    }
}

fn line_width(chunks: &[String]) -> usize {
    chunks.iter().map(|chunk| chunk.width()).sum()
}
