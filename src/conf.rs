use crate::errors::ConfError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_CONTENT_WIDTH: usize = 30;
pub const DEFAULT_TARGET_WIDTH: usize = 80;
pub const DEFAULT_LIST_MARKER: &str = "- ";

/// Configuration shared by the wrap and list printers.
///
/// A `TwConf` is immutable once built; every printing method borrows it and
/// takes the output sink as a separate argument, so a single value can drive
/// any number of writers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TwConfBuilder")]
pub struct TwConf {
    /// Content that will always be attempted on a line, however deep the indent.
    pub(crate) min_content_width: usize,
    /// Total line length the wrapper tries to stay within.
    pub(crate) target_width: usize,
    /// Printed before each list entry.
    pub(crate) list_marker: String,
}

impl Default for TwConf {
    fn default() -> Self {
        TwConf {
            min_content_width: DEFAULT_MIN_CONTENT_WIDTH,
            target_width: DEFAULT_TARGET_WIDTH,
            list_marker: DEFAULT_LIST_MARKER.to_string(),
        }
    }
}

impl TwConf {
    pub fn builder() -> TwConfBuilder {
        TwConfBuilder::default()
    }

    pub fn min_content_width(&self) -> usize {
        self.min_content_width
    }

    pub fn target_width(&self) -> usize {
        self.target_width
    }

    pub fn list_marker(&self) -> &str {
        &self.list_marker
    }

    /// The line budget for the given indent under this configuration.
    pub fn budget(&self, indent: usize) -> usize {
        line_budget(self.min_content_width, self.target_width, indent)
    }
}

/// Collects overrides for the default [`TwConf`] and validates them together.
/// Deserializing a `TwConf` goes through this builder too.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TwConfBuilder {
    min_content_width: Option<usize>,
    target_width: Option<usize>,
    list_marker: Option<String>,
}

impl TwConfBuilder {
    pub fn min_chars(mut self, n: usize) -> Self {
        self.min_content_width = Some(n);
        self
    }

    pub fn target_width(mut self, n: usize) -> Self {
        self.target_width = Some(n);
        self
    }

    pub fn list_marker(mut self, marker: impl Into<String>) -> Self {
        self.list_marker = Some(marker.into());
        self
    }

    pub fn build(self) -> Result<TwConf, ConfError> {
        let conf = TwConf {
            min_content_width: self.min_content_width.unwrap_or(DEFAULT_MIN_CONTENT_WIDTH),
            target_width: self.target_width.unwrap_or(DEFAULT_TARGET_WIDTH),
            list_marker: self
                .list_marker
                .unwrap_or_else(|| DEFAULT_LIST_MARKER.to_string()),
        };

        if conf.target_width == 0 {
            return Err(ConfError::ZeroTargetWidth);
        }
        if conf.min_content_width > conf.target_width {
            return Err(ConfError::MinExceedsTarget {
                min: conf.min_content_width,
                target: conf.target_width,
            });
        }

        log::trace!(
            "built TwConf: min={} target={} marker={:?}",
            conf.min_content_width,
            conf.target_width,
            conf.list_marker
        );
        Ok(conf)
    }

    /// Like [`build`](Self::build) but panics on invalid settings. Bad
    /// parameters here are a programming error at the call site.
    pub fn build_or_panic(self) -> TwConf {
        self.build()
            .unwrap_or_else(|e| panic!("Couldn't create a new TwConf: {e}"))
    }
}

impl TryFrom<TwConfBuilder> for TwConf {
    type Error = ConfError;

    fn try_from(builder: TwConfBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

/// Maximum content on a line indented by `indent`, never less than `min`.
pub fn line_budget(min: usize, target: usize, indent: usize) -> usize {
    target.saturating_sub(indent).max(min)
}

/// Number of decimal digits needed to show every index of a `count` long list.
pub fn index_width(count: usize) -> usize {
    match count {
        0 => 0,
        n => n.ilog10() as usize + 1,
    }
}
