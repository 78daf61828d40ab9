use crate::conf::{index_width, TwConf};
use std::io::{self, Write};

/// Separator used to split path-like entries into segments.
pub const PATH_SEPARATOR: char = '/';

impl TwConf {
    /// Prints each entry as a wrapped paragraph prefixed by the list marker.
    pub fn list<W, S>(&self, out: &mut W, entries: &[S], indent: usize) -> io::Result<()>
    where
        W: Write + ?Sized,
        S: AsRef<str>,
    {
        log::debug!("list: {} entries at indent {}", entries.len(), indent);
        for entry in entries {
            self.wrap_prefixed(out, &self.list_marker, entry.as_ref(), indent)?;
        }
        Ok(())
    }

    /// Like [`list`](Self::list) but each entry is numbered from 1, with the
    /// numbers right-aligned to the width of the largest one.
    pub fn idx_list<W, S>(&self, out: &mut W, entries: &[S], indent: usize) -> io::Result<()>
    where
        W: Write + ?Sized,
        S: AsRef<str>,
    {
        log::debug!("idx_list: {} entries at indent {}", entries.len(), indent);
        let digits = index_width(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            let prefix = self.idx_prefix(i + 1, digits);
            self.wrap_prefixed(out, &prefix, entry.as_ref(), indent)?;
        }
        Ok(())
    }

    /// Prints each entry on one unwrapped line. Leading characters shared
    /// with the previous entry are replaced with spaces.
    pub fn no_rpt_list<W, S>(&self, out: &mut W, entries: &[S], indent: usize) -> io::Result<()>
    where
        W: Write + ?Sized,
        S: AsRef<str>,
    {
        self.no_rpt(out, entries, indent, false, write_unique_chars)
    }

    /// Numbered form of [`no_rpt_list`](Self::no_rpt_list).
    pub fn idx_no_rpt_list<W, S>(&self, out: &mut W, entries: &[S], indent: usize) -> io::Result<()>
    where
        W: Write + ?Sized,
        S: AsRef<str>,
    {
        self.no_rpt(out, entries, indent, true, write_unique_chars)
    }

    /// Prints each entry on one unwrapped line, treating it as a path.
    /// Leading directory segments equal to those of the previous entry are
    /// replaced with spaces; from the first differing segment on, the rest
    /// of the directory is printed as is. The final segment is always shown.
    pub fn no_rpt_path_list<W, S>(
        &self,
        out: &mut W,
        entries: &[S],
        indent: usize,
    ) -> io::Result<()>
    where
        W: Write + ?Sized,
        S: AsRef<str>,
    {
        self.no_rpt(out, entries, indent, false, write_unique_dirs)
    }

    /// Numbered form of [`no_rpt_path_list`](Self::no_rpt_path_list).
    pub fn idx_no_rpt_path_list<W, S>(
        &self,
        out: &mut W,
        entries: &[S],
        indent: usize,
    ) -> io::Result<()>
    where
        W: Write + ?Sized,
        S: AsRef<str>,
    {
        self.no_rpt(out, entries, indent, true, write_unique_dirs)
    }

    fn idx_prefix(&self, idx: usize, digits: usize) -> String {
        format!("{}{:>digits$}: ", self.list_marker, idx)
    }

    /// Shared loop for the no-repeat printers. `write_unique` prints the
    /// body of one entry given what was kept from the previous one, and
    /// returns the state to compare the next entry against.
    fn no_rpt<W, S, T, F>(
        &self,
        out: &mut W,
        entries: &[S],
        indent: usize,
        numbered: bool,
        write_unique: F,
    ) -> io::Result<()>
    where
        W: Write + ?Sized,
        S: AsRef<str>,
        T: Default,
        F: Fn(&mut W, &str, T) -> io::Result<T>,
    {
        log::debug!(
            "no-repeat list: {} entries at indent {} (numbered: {})",
            entries.len(),
            indent,
            numbered
        );
        let digits = index_width(entries.len());
        entries
            .iter()
            .enumerate()
            .try_fold(T::default(), |prev, (i, entry)| {
                write!(out, "{:indent$}", "")?;
                if numbered {
                    out.write_all(self.idx_prefix(i + 1, digits).as_bytes())?;
                } else {
                    out.write_all(self.list_marker.as_bytes())?;
                }
                write_unique(&mut *out, entry.as_ref(), prev)
            })?;
        Ok(())
    }
}

/// Number of leading items equal in both slices.
fn common_prefix_len<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

/// Writes `entry` with the characters it shares with the start of `prev`
/// blanked out, and returns its characters for the next comparison.
fn write_unique_chars<W: Write + ?Sized>(
    out: &mut W,
    entry: &str,
    prev: Vec<char>,
) -> io::Result<Vec<char>> {
    let chars: Vec<char> = entry.chars().collect();
    let common = common_prefix_len(&chars, &prev);

    let mut line = " ".repeat(common);
    line.extend(&chars[common..]);
    writeln!(out, "{line}")?;

    Ok(chars)
}

/// Splits a path into its directory segments and final part. The directory
/// of `/a/b/c` is `["", "a", "b"]`, the leading empty segment being the root.
fn split_path(entry: &str) -> (Vec<String>, &str) {
    match entry.rsplit_once(PATH_SEPARATOR) {
        Some((dir, leaf)) => (
            dir.split(PATH_SEPARATOR).map(String::from).collect(),
            leaf,
        ),
        None => (Vec::new(), entry),
    }
}

/// Writes `entry` with the directory segments it shares with `prev` blanked
/// out, and returns its directory segments for the next comparison.
fn write_unique_dirs<W: Write + ?Sized>(
    out: &mut W,
    entry: &str,
    prev: Vec<String>,
) -> io::Result<Vec<String>> {
    let (parts, leaf) = split_path(entry);
    let common = common_prefix_len(&parts, &prev);

    let blanked: usize = parts[..common]
        .iter()
        .map(|p| p.chars().count() + 1)
        .sum();
    write!(out, "{:blanked$}", "")?;
    if common < parts.len() {
        let sep = PATH_SEPARATOR.to_string();
        write!(out, "{}{}", parts[common..].join(sep.as_str()), PATH_SEPARATOR)?;
    }
    writeln!(out, "{leaf}")?;

    Ok(parts)
}
