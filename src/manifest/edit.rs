// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


//! Scalar edits applied directly to the manifest's source text.
//!
//! Only the `version` and `sha256` values of block-style `jdks` entries are
//! located and replaced. Everything else in the file, comments included,
//! is left byte for byte as it was.

use crate::error::Result;
use std::ops::Range;

const JDKS_LINE: &str = "jdks:";

/// Byte ranges of an entry's `version` and `sha256` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PinSpans {
    pub version: Range<usize>,
    pub sha256: Range<usize>,
}

struct Line<'a> {
    start: usize,
    text: &'a str,
}

/// Locate the pin scalars of every item in the top-level `jdks` sequence.
///
/// Returns one slot per sequence item, in order. A slot is `None` when the
/// item is not a block mapping with exactly one plain or quoted `version`
/// and `sha256` each. The result is empty when `jdks` is not a block
/// sequence.
pub(crate) fn locate_pins(source: &str) -> Vec<Option<PinSpans>> {
    let lines = split_lines(source);

    let Some(jdks_line) = lines.iter().position(|line| {
        line.text
            .strip_prefix(JDKS_LINE)
            .is_some_and(|rest| is_blank_or_comment(rest))
    }) else {
        return Vec::new();
    };

    let mut items: Vec<Vec<&Line<'_>>> = Vec::new();
    let mut sequence_indent = None;
    for line in &lines[jdks_line + 1..] {
        if is_blank_or_comment(line.text) {
            continue;
        }
        let indent = indent_of(line.text);
        let starts_item = is_item_start(&line.text[indent..]);

        match sequence_indent {
            None if starts_item => {
                sequence_indent = Some(indent);
                items.push(vec![line]);
            }
            None => break,
            Some(column) if indent == column && starts_item => items.push(vec![line]),
            Some(column) if indent > column => {
                if let Some(item) = items.last_mut() {
                    item.push(line);
                }
            }
            Some(_) => break,
        }
    }

    items.iter().map(|item| locate_in_item(item)).collect()
}

fn locate_in_item(item: &[&Line<'_>]) -> Option<PinSpans> {
    let (first, rest) = item.split_first()?;
    let dash = indent_of(first.text);
    let after_dash = &first.text[dash + 1..];

    // Column of each line's key, with the first line's key sitting after the dash.
    let mut keyed: Vec<(&Line<'_>, usize)> = Vec::new();
    if !is_blank_or_comment(after_dash) {
        let padding = after_dash.len() - after_dash.trim_start().len();
        keyed.push((*first, dash + 1 + padding));
    }
    keyed.extend(rest.iter().map(|line| (*line, indent_of(line.text))));

    let mapping_indent = keyed.first()?.1;
    let mut version = None;
    let mut sha256 = None;

    for (line, column) in keyed {
        if column != mapping_indent {
            continue;
        }
        let content = &line.text[column..];
        let (slot, offset) = match (
            key_value_start(content, "version"),
            key_value_start(content, "sha256"),
        ) {
            (Some(offset), _) => (&mut version, offset),
            (_, Some(offset)) => (&mut sha256, offset),
            _ => continue,
        };
        if slot.is_some() {
            return None;
        }

        let span = scalar_span(line.text, column + offset)?;
        *slot = Some(line.start + span.start..line.start + span.end);
    }

    Some(PinSpans {
        version: version?,
        sha256: sha256?,
    })
}

/// Offset of the value after `key:` in `content`, if `content` is that key.
fn key_value_start(content: &str, key: &str) -> Option<usize> {
    let rest = content.strip_prefix(key)?.strip_prefix(':')?;
    if !(rest.is_empty() || rest.starts_with(' ')) {
        return None;
    }
    let padding = rest.len() - rest.trim_start().len();
    Some(key.len() + 1 + padding)
}

/// Span of the single-line scalar starting at `start`, without any trailing
/// comment or whitespace.
fn scalar_span(text: &str, start: usize) -> Option<Range<usize>> {
    let value = &text[start..];
    let bytes = value.as_bytes();

    let len = match bytes.first()? {
        b'"' => {
            let mut i = 1;
            loop {
                match bytes.get(i)? {
                    b'\\' => i += 2,
                    b'"' => break i + 1,
                    _ => i += 1,
                }
            }
        }
        b'\'' => {
            let mut i = 1;
            loop {
                match (bytes.get(i)?, bytes.get(i + 1)) {
                    (b'\'', Some(b'\'')) => i += 2,
                    (b'\'', _) => break i + 1,
                    _ => i += 1,
                }
            }
        }
        b'|' | b'>' | b'&' | b'*' | b'!' | b'{' | b'[' | b'#' => return None,
        _ => {
            let end = value.find(" #").unwrap_or(value.len());
            value[..end].trim_end().len()
        }
    };

    if !is_blank_or_comment(&value[len..]) {
        return None;
    }
    Some(start..start + len)
}

/// Render `value` as a YAML scalar, keeping the quoting style of `original`.
pub(crate) fn render_scalar(original: &str, value: &str) -> Result<String> {
    if original.starts_with('\'') {
        return Ok(format!("'{}'", value.replace('\'', "''")));
    }
    if original.starts_with('"') {
        return Ok(serde_json::to_string(value)?);
    }

    let plain = serde_yaml::to_string(value)?;
    let plain = plain.trim_end_matches('\n');
    if plain.contains('\n') {
        Ok(serde_json::to_string(value)?)
    } else {
        Ok(plain.to_string())
    }
}

/// Replace each range of `source` with its text. Ranges must not overlap.
pub(crate) fn apply_edits(source: &str, mut edits: Vec<(Range<usize>, String)>) -> String {
    edits.sort_by_key(|(range, _)| std::cmp::Reverse(range.start));

    let mut contents = source.to_string();
    for (range, text) in edits {
        contents.replace_range(range, &text);
    }
    contents
}

fn split_lines(source: &str) -> Vec<Line<'_>> {
    let mut start = 0;
    source
        .split_inclusive('\n')
        .map(|raw| {
            let text = raw.trim_end_matches('\n').trim_end_matches('\r');
            let line = Line { start, text };
            start += raw.len();
            line
        })
        .collect()
}

fn indent_of(text: &str) -> usize {
    text.len() - text.trim_start_matches(' ').len()
}

fn is_item_start(content: &str) -> bool {
    content == "-" || content.starts_with("- ")
}

fn is_blank_or_comment(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_at(source: &str, range: &Range<usize>) -> String {
        source[range.clone()].to_string()
    }

    #[test]
    fn test_locates_indented_sequence() {
        let source = "jdks:\n  - platform: linux\n    version: jdk-21.0.3+9  # pinned\n    sha256: aaaa\nother: 1\n";
        let spans = locate_pins(source);

        assert_eq!(spans.len(), 1);
        let spans = spans[0].as_ref().unwrap();
        assert_eq!(value_at(source, &spans.version), "jdk-21.0.3+9");
        assert_eq!(value_at(source, &spans.sha256), "aaaa");
    }

    #[test]
    fn test_locates_indentless_sequence_and_key_on_dash_line() {
        let source = "jdks:\n- version: jdk8u422-b05\n  sha256: bbbb\n- sha256: cccc\n  version: jdk-17.0.12+7\nmirror: x\n";
        let spans = locate_pins(source);

        assert_eq!(spans.len(), 2);
        let first = spans[0].as_ref().unwrap();
        assert_eq!(value_at(source, &first.version), "jdk8u422-b05");
        let second = spans[1].as_ref().unwrap();
        assert_eq!(value_at(source, &second.version), "jdk-17.0.12+7");
        assert_eq!(value_at(source, &second.sha256), "cccc");
    }

    #[test]
    fn test_nested_keys_are_not_pins() {
        let source = "jdks:\n  -\n    platform: linux\n    meta:\n      version: nested\n    version: 'jdk-21.0.3+9'\n    sha256: \"dddd\"\n";
        let spans = locate_pins(source);
        let spans = spans[0].as_ref().unwrap();

        assert_eq!(value_at(source, &spans.version), "'jdk-21.0.3+9'");
        assert_eq!(value_at(source, &spans.sha256), "\"dddd\"");
    }

    #[test]
    fn test_flow_style_is_not_located() {
        assert!(locate_pins("jdks: [{version: a, sha256: b}]\n").is_empty());

        let spans = locate_pins("jdks:\n  - {version: a, sha256: b}\n");
        assert_eq!(spans, vec![None]);
    }

    #[test]
    fn test_block_scalar_is_not_located() {
        let spans = locate_pins("jdks:\n  - version: |\n      jdk-21\n    sha256: e\n");
        assert_eq!(spans, vec![None]);
    }

    #[test]
    fn test_render_keeps_quoting_style() {
        assert_eq!(render_scalar("plain", "jdk-21.0.4+7").unwrap(), "jdk-21.0.4+7");
        assert_eq!(render_scalar("'x'", "it's").unwrap(), "'it''s'");
        assert_eq!(render_scalar("\"x\"", "jdk-21").unwrap(), "\"jdk-21\"");
        // Values that would read back as numbers get quoted.
        assert_eq!(render_scalar("plain", "8.10").unwrap(), "'8.10'");
    }

    #[test]
    fn test_apply_edits_in_any_order() {
        let source = "a: 1\nb: 2\n";
        let edits = vec![(3..4, "one".to_string()), (8..9, "two".to_string())];
        assert_eq!(apply_edits(source, edits), "a: one\nb: two\n");
    }
}
