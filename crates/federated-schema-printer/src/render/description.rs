use std::fmt::{self, Display, Write};

use crate::PrintOptions;

const MAX_LINE_LENGTH: usize = 120;
/// A description made of one line shorter than this is printed on the same line as its quotes.
const MAX_INLINE_LENGTH: usize = 70;
const MIN_SEGMENT_LENGTH: usize = 15;

/// A description, rendered as a block string or as `#` comments depending on the options.
///
/// Renders nothing for a missing or empty description.
#[derive(Debug, Clone, Copy)]
pub(super) struct Description<'a> {
    text: Option<&'a str>,
    indentation: &'a str,
    first_in_block: bool,
    comments: bool,
}

impl<'a> Description<'a> {
    pub(super) fn new(text: Option<&'a str>, options: &PrintOptions) -> Self {
        Description {
            text,
            indentation: "",
            first_in_block: true,
            comments: options.comment_descriptions,
        }
    }

    /// Descriptions of nested members are separated from the previous member by a blank line, unless they open
    /// the block.
    pub(super) fn indented(self, indentation: &'a str, first_in_block: bool) -> Self {
        Description {
            indentation,
            first_in_block,
            ..self
        }
    }

    fn separated(&self) -> bool {
        !self.indentation.is_empty() && !self.first_in_block
    }

    fn write_comments(&self, lines: &[&str], f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indentation = self.indentation;

        if self.separated() {
            f.write_char('\n')?;
        }

        for line in lines {
            if line.is_empty() {
                writeln!(f, "{indentation}#")?;
            } else {
                writeln!(f, "{indentation}# {line}")?;
            }
        }

        Ok(())
    }

    fn write_block_string(&self, lines: &[&str], f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indentation = self.indentation;

        if self.separated() {
            f.write_char('\n')?;
        }

        write!(f, r#"{indentation}""""#)?;

        if let [line] = lines {
            if line.chars().count() < MAX_INLINE_LENGTH && !line.ends_with('"') {
                return writeln!(f, r#"{}""""#, EscapedLine(line));
            }
        }

        let has_leading_space = lines.first().is_some_and(|line| line.starts_with([' ', '\t']));

        if !has_leading_space {
            f.write_char('\n')?;
        }

        for (idx, line) in lines.iter().enumerate() {
            if idx != 0 || !has_leading_space {
                f.write_str(indentation)?;
            }

            writeln!(f, "{}", EscapedLine(line))?;
        }

        writeln!(f, r#"{indentation}""""#)
    }
}

impl Display for Description<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(text) = self.text.filter(|text| !text.is_empty()) else {
            return Ok(());
        };

        let lines = description_lines(text, MAX_LINE_LENGTH.saturating_sub(self.indentation.len()));

        if self.comments {
            self.write_comments(&lines, f)
        } else {
            self.write_block_string(&lines, f)
        }
    }
}

/// Escapes triple quotes inside a block string.
struct EscapedLine<'a>(&'a str);

impl Display for EscapedLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = self.0.split(r#"""""#);

        if let Some(first) = parts.next() {
            f.write_str(first)?;
        }

        for part in parts {
            f.write_str(r#"\""""#)?;
            f.write_str(part)?;
        }

        Ok(())
    }
}

fn description_lines(description: &str, max_len: usize) -> Vec<&str> {
    description
        .split('\n')
        .flat_map(|line| {
            if line.is_empty() {
                vec![line]
            } else {
                break_line(line, max_len)
            }
        })
        .collect()
}

/// Cuts lines of `max_len + 5` characters or more at spaces, into sublines of 15 to `max_len - 40` characters.
///
/// Text that does not fit a subline stays attached to the previous one, so the words are never lost.
fn break_line(line: &str, max_len: usize) -> Vec<&str> {
    let chars: Vec<(usize, char)> = line.char_indices().collect();

    if chars.len() < max_len + 5 {
        return vec![line];
    }

    let max_segment_length = max_len.saturating_sub(40).max(MIN_SEGMENT_LENGTH);
    let starts = segment_starts(&chars, max_segment_length);

    let Some((_, rest)) = starts.split_first() else {
        return vec![line];
    };

    let byte_offset = |idx: usize| chars.get(idx).map_or(line.len(), |(offset, _)| *offset);

    // The first subline also takes whatever precedes the first segment.
    std::iter::once(0)
        .chain(rest.iter().copied())
        .zip(rest.iter().copied().chain(std::iter::once(chars.len())))
        .map(|(start, end)| line[byte_offset(start)..byte_offset(end)].trim())
        .collect()
}

/// Greedily finds the segments of a line. A segment starts at the start of the line or at a space, spans
/// `MIN_SEGMENT_LENGTH..=max_length` characters after that and must be followed by a space or by the end of
/// the line. Returns the index of the first character of each segment.
fn segment_starts(chars: &[(usize, char)], max_length: usize) -> Vec<usize> {
    let is_space = |idx: usize| chars.get(idx).is_some_and(|(_, c)| *c == ' ');
    let ends_segment = |idx: usize| idx == chars.len() || is_space(idx);

    let segment_end = |start: usize| {
        let space_prefixed = is_space(start).then_some(start + 1);
        let line_start = (start == 0).then_some(0);

        space_prefixed.into_iter().chain(line_start).find_map(|body_start| {
            (MIN_SEGMENT_LENGTH..=max_length)
                .rev()
                .map(|len| body_start + len)
                .find(|&end| end <= chars.len() && ends_segment(end))
        })
    };

    let mut starts = Vec::new();
    let mut position = 0;

    while position < chars.len() {
        match segment_end(position) {
            Some(end) => {
                starts.push(position);
                position = end;
            }
            None => position += 1,
        }
    }

    starts
}
