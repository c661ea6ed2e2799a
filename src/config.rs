//! Centralized configuration and builder for manifestdb.
//!
//! Goals:
//! - Single place to collect tunables instead of scattering env lookups.
//! - ManifestConfig::from_env() reads the MF_* variables.
//! - ManifestBuilder collects overrides and opens a Manifest with them.
//!
//! Defaults reproduce the classic on-disk layout:
//! - indent = 1 (pretty JSON, one space per level)
//! - atomic_write = true (write <path>.tmp, then rename over <path>)
//! - fsync = false
//! - require_existing = false (missing file => empty manifest)

use std::fmt;
use std::path::Path;

use crate::error::Result;
use crate::manifest::Manifest;

/// Top-level configuration of a manifest store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManifestConfig {
    /// Indent width (spaces) of the persisted JSON. 0 writes compact JSON.
    /// Env: MF_INDENT (default 1)
    pub indent: usize,

    /// Write through a temporary sibling file and rename it over the target.
    /// Env: MF_ATOMIC_WRITE (default true)
    pub atomic_write: bool,

    /// fsync the file after every write.
    /// Env: MF_FSYNC (default false)
    pub fsync: bool,

    /// Fail open() with NotFound instead of starting empty when the file is missing.
    /// Env: MF_REQUIRE_EXISTING (default false)
    pub require_existing: bool,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            indent: 1,
            atomic_write: true,
            fsync: false,
            require_existing: false,
        }
    }
}

fn parse_flag(v: &str) -> bool {
    let s = v.trim().to_ascii_lowercase();
    s == "1" || s == "true" || s == "on" || s == "yes"
}

impl ManifestConfig {
    /// Load configuration from environment variables; unparseable values keep defaults.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var("MF_INDENT") {
            if let Ok(n) = v.trim().parse::<usize>() {
                cfg.indent = n;
            }
        }

        if let Ok(v) = std::env::var("MF_ATOMIC_WRITE") {
            cfg.atomic_write = parse_flag(&v);
        }

        if let Ok(v) = std::env::var("MF_FSYNC") {
            cfg.fsync = parse_flag(&v);
        }

        if let Ok(v) = std::env::var("MF_REQUIRE_EXISTING") {
            cfg.require_existing = parse_flag(&v);
        }

        cfg
    }

    // Fluent setters (builder-style) to override specific fields.

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_atomic_write(mut self, on: bool) -> Self {
        self.atomic_write = on;
        self
    }

    pub fn with_fsync(mut self, on: bool) -> Self {
        self.fsync = on;
        self
    }

    pub fn with_require_existing(mut self, on: bool) -> Self {
        self.require_existing = on;
        self
    }
}

impl fmt::Display for ManifestConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ManifestConfig {{ \
             indent: {}, \
             atomic_write: {}, \
             fsync: {}, \
             require_existing: {} \
             }}",
            if self.indent == 0 {
                "compact".to_string()
            } else {
                self.indent.to_string()
            },
            self.atomic_write,
            self.fsync,
            self.require_existing,
        )
    }
}

/// Builder that produces a ManifestConfig or opens a Manifest directly.
/// `Manifest::builder()` returns this builder.
#[derive(Clone, Debug)]
pub struct ManifestBuilder {
    cfg: ManifestConfig,
}

impl Default for ManifestBuilder {
    fn default() -> Self {
        // Start from env, then allow overrides.
        Self {
            cfg: ManifestConfig::from_env(),
        }
    }
}

impl ManifestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a clean default (without reading env).
    pub fn from_default() -> Self {
        Self {
            cfg: ManifestConfig::default(),
        }
    }

    pub fn indent(mut self, indent: usize) -> Self {
        self.cfg.indent = indent;
        self
    }

    pub fn atomic_write(mut self, on: bool) -> Self {
        self.cfg.atomic_write = on;
        self
    }

    pub fn fsync(mut self, on: bool) -> Self {
        self.cfg.fsync = on;
        self
    }

    pub fn require_existing(mut self, on: bool) -> Self {
        self.cfg.require_existing = on;
        self
    }

    /// Finish the builder and obtain the configuration.
    pub fn build(self) -> ManifestConfig {
        self.cfg
    }

    /// Open (or start) a manifest at `path` with the collected configuration.
    pub fn open<P: AsRef<Path>>(self, path: P) -> Result<Manifest> {
        Manifest::open_with_config(path, self.cfg)
    }
}
