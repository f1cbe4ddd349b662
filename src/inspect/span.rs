//! Locate a handler method's line span inside its source file.

use regex::Regex;

/// Inclusive line window delimiting one method's text.
///
/// Lines are zero-based indices into the file's line vector. The span is a
/// read window only; nothing is persisted from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceSpan {
    pub start: usize,
    pub end: usize,
}

/// Find the span of `fn <method>` in the given lines.
///
/// The start line is the first line declaring the method; the end line is
/// found by balancing braces from the declaration onward. Brace counting is a
/// text heuristic and will be confused by braces inside string literals; for
/// handler code this has not mattered in practice.
pub fn find_span(lines: &[String], method: &str) -> Option<SourceSpan> {
    let decl = Regex::new(&format!(r"\bfn\s+{}\s*[(<]", regex::escape(method))).ok()?;
    let start = lines.iter().position(|line| decl.is_match(line))?;

    let mut depth: i32 = 0;
    let mut opened = false;
    for (offset, line) in lines[start..].iter().enumerate() {
        for ch in line.chars() {
            match ch {
                '{' => {
                    depth += 1;
                    opened = true;
                }
                '}' => depth -= 1,
                _ => {}
            }
        }
        if opened && depth <= 0 {
            return Some(SourceSpan {
                start,
                end: start + offset,
            });
        }
    }
    None
}
