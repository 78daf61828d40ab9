#![allow(dead_code)]
use std::io;
use twrap::TwConf;

/// The narrow configuration most wrap tests use: 10 chars minimum, 20 target.
pub fn small_conf() -> TwConf {
    TwConf::builder()
        .min_chars(10)
        .target_width(20)
        .build()
        .expect("Couldn't create the TwConf")
}

/// Runs a printing call against an in-memory sink and returns what it wrote.
pub fn render<F>(f: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
{
    let mut buf = Vec::new();
    f(&mut buf).expect("write to Vec should not fail");
    String::from_utf8(buf).expect("output should be UTF-8")
}

/// Frames every output line with `|` so leading and trailing spaces survive
/// in inline snapshots.
pub fn visible(output: &str) -> String {
    output
        .lines()
        .map(|line| format!("|{}|", line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A sink that accepts `limit` bytes and then fails every write.
pub struct FailingWriter {
    pub written: Vec<u8>,
    pub limit: usize,
}

impl FailingWriter {
    pub fn new(limit: usize) -> Self {
        FailingWriter {
            written: Vec::new(),
            limit,
        }
    }
}

impl io::Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written.len() + buf.len() > self.limit {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
        }
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
