use crate::conf::TwConf;
use std::io::{self, Write};

/// Markers that make a paragraph read as a bulleted item.
const LIST_ITEM_MARKERS: [&str; 3] = ["- ", "* ", "+ "];

/// Extra continuation indent for bulleted paragraphs, enough to step over
/// the marker.
const LIST_ITEM_INDENT: usize = 2;

/// Newline and form-feed both end a paragraph.
fn is_para_break(c: char) -> bool {
    c == '\n' || c == '\u{000C}'
}

/// True for whitespace that may be turned into a line break. A no-break
/// space is whitespace but is treated as part of the word around it.
pub fn is_breakable_space(c: char) -> bool {
    c.is_whitespace() && c != '\u{00A0}'
}

/// True if the paragraph starts with one of the bullet markers.
pub fn is_list_item(para: &str) -> bool {
    LIST_ITEM_MARKERS.iter().any(|m| para.starts_with(m))
}

fn write_spaces<W: Write + ?Sized>(out: &mut W, n: usize) -> io::Result<()> {
    write!(out, "{:n$}", "")
}

/// Per-paragraph state: the line being filled plus the pending word and the
/// run of spaces in front of it.
struct ParaWriter<'w, W: Write + ?Sized> {
    out: &'w mut W,
    first_indent: usize,
    max_width: usize,
    other_indent: usize,
    other_max_width: usize,
    line_len: usize,
    word: String,
    word_len: usize,
    spaces: String,
    spaces_len: usize,
}

impl<'w, W: Write + ?Sized> ParaWriter<'w, W> {
    fn write_para(mut self, para: &str) -> io::Result<()> {
        for c in para.chars() {
            if is_breakable_space(c) {
                if self.word_len > 0 {
                    self.flush_word()?;
                }
                self.spaces.push(c);
                self.spaces_len += 1;
            } else {
                self.word.push(c);
                self.word_len += 1;
            }
        }

        // trailing spaces with no word after them are dropped
        if self.word_len > 0 {
            self.flush_word()?;
        }
        writeln!(self.out)
    }

    fn flush_word(&mut self) -> io::Result<()> {
        if self.line_len == 0 {
            // First word on the line is always printed, along with any
            // leading spaces, however long it is.
            write_spaces(&mut *self.out, self.first_indent)?;
            self.out.write_all(self.spaces.as_bytes())?;
            self.line_len = self.spaces_len + self.word_len;
        } else if self.line_len + self.spaces_len + self.word_len <= self.max_width {
            self.out.write_all(self.spaces.as_bytes())?;
            self.line_len += self.spaces_len + self.word_len;
        } else {
            writeln!(self.out)?;
            write_spaces(&mut *self.out, self.other_indent)?;
            self.max_width = self.other_max_width;
            self.line_len = self.word_len;
        }
        self.out.write_all(self.word.as_bytes())?;

        self.word.clear();
        self.word_len = 0;
        self.spaces.clear();
        self.spaces_len = 0;
        Ok(())
    }
}

impl TwConf {
    /// Wraps `text` with every line indented by `indent`.
    pub fn wrap<W: Write + ?Sized>(
        &self,
        out: &mut W,
        text: &str,
        indent: usize,
    ) -> io::Result<()> {
        self.wrap_3_indent(out, text, indent, indent, indent)
    }

    /// Wraps `text` with the first line of each paragraph indented by
    /// `first_line_indent` and the remaining lines by `other_line_indent`.
    pub fn wrap_2_indent<W: Write + ?Sized>(
        &self,
        out: &mut W,
        text: &str,
        first_line_indent: usize,
        other_line_indent: usize,
    ) -> io::Result<()> {
        self.wrap_3_indent(
            out,
            text,
            first_line_indent,
            first_line_indent,
            other_line_indent,
        )
    }

    /// Wraps `text` onto `out`. The very first line is indented by
    /// `first_line_indent`, the first line of every later paragraph by
    /// `para_first_line_indent` and all other lines by `other_line_indent`.
    ///
    /// Each line holds at most `target_width - indent` characters but never
    /// fewer than `min_content_width`; a word longer than that is printed
    /// whole on a line of its own. Paragraphs are separated by newline or
    /// form-feed and each one ends with a newline. Empty text prints nothing.
    ///
    /// When the continuation indent matches a paragraph's first-line indent
    /// and the paragraph starts with a bullet (`- `, `* `, `+ `), its
    /// continuation lines are indented two more so they line up with the
    /// text after the bullet.
    pub fn wrap_3_indent<W: Write + ?Sized>(
        &self,
        out: &mut W,
        text: &str,
        first_line_indent: usize,
        para_first_line_indent: usize,
        other_line_indent: usize,
    ) -> io::Result<()> {
        if text.is_empty() {
            return Ok(());
        }

        log::trace!(
            "wrap: indents {}/{}/{} budgets {}/{}/{}",
            first_line_indent,
            para_first_line_indent,
            other_line_indent,
            self.budget(first_line_indent),
            self.budget(para_first_line_indent),
            self.budget(other_line_indent)
        );

        let mut line_indent = first_line_indent;
        for para in text.split(is_para_break) {
            let mut cont_indent = other_line_indent;
            if cont_indent == line_indent && is_list_item(para) {
                cont_indent += LIST_ITEM_INDENT;
            }

            ParaWriter {
                out: &mut *out,
                first_indent: line_indent,
                max_width: self.budget(line_indent),
                other_indent: cont_indent,
                other_max_width: self.budget(cont_indent),
                line_len: 0,
                word: String::new(),
                word_len: 0,
                spaces: String::new(),
                spaces_len: 0,
            }
            .write_para(para)?;

            line_indent = para_first_line_indent;
        }
        Ok(())
    }

    /// Prints `prefix` followed by `text`, wrapped so that continuation
    /// lines (and later paragraphs) line up with the start of the text.
    pub fn wrap_prefixed<W: Write + ?Sized>(
        &self,
        out: &mut W,
        prefix: &str,
        text: &str,
        indent: usize,
    ) -> io::Result<()> {
        let text_indent = indent + prefix.chars().count();
        let mut full = String::with_capacity(prefix.len() + text.len());
        full.push_str(prefix);
        full.push_str(text);
        self.wrap_3_indent(out, &full, indent, text_indent, text_indent)
    }
}
