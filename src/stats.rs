//! Tree statistics collection and display
//!
//! This module counts files in a scanned tree and summarizes it:
//! entry counts by kind, total size, and a breakdown by extension.

use serde::Serialize;
use std::collections::HashMap;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{Dir, Item, format_size};

/// Count the files below `root`, descending into directories and skipping
/// unknown items. Does not touch the filesystem.
pub fn count_files(root: &Dir) -> usize {
    root.items
        .iter()
        .map(|item| match item {
            Item::File(_) => 1,
            Item::Dir(dir) => count_files(dir),
            Item::Unknown(_) => 0,
        })
        .sum()
}

/// Collected statistics about a scanned tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    /// Total number of files
    pub files: usize,
    /// Number of directories below the root
    pub directories: usize,
    /// Entries that are neither files nor directories
    pub unknown: usize,
    /// Size of the root directory in bytes
    pub total_size: u64,
    /// Statistics by extension
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub by_extension: Vec<ExtensionStats>,
}

/// Statistics for a single extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionStats {
    /// Extension with its leading dot, or empty for files without one
    pub extension: String,
    pub files: usize,
    pub size: u64,
}

impl TreeStats {
    pub fn collect(root: &Dir) -> Self {
        let mut stats = TreeStats {
            total_size: root.size,
            ..Default::default()
        };
        let mut by_extension: HashMap<&str, (usize, u64)> = HashMap::new();
        stats.record(&root.items, &mut by_extension);

        let mut extensions: Vec<ExtensionStats> = by_extension
            .into_iter()
            .map(|(ext, (files, size))| ExtensionStats {
                extension: ext.to_string(),
                files,
                size,
            })
            .collect();

        // Sort by file count descending
        extensions.sort_by(|a, b| b.files.cmp(&a.files).then_with(|| a.extension.cmp(&b.extension)));
        stats.by_extension = extensions;
        stats
    }

    fn record<'a>(&mut self, items: &'a [Item], by_extension: &mut HashMap<&'a str, (usize, u64)>) {
        for item in items {
            match item {
                Item::File(file) => {
                    self.files += 1;
                    let entry = by_extension
                        .entry(file.ext.as_deref().unwrap_or_default())
                        .or_insert((0, 0));
                    entry.0 += 1;
                    entry.1 = entry.1.saturating_add(file.size);
                }
                Item::Dir(dir) => {
                    self.directories += 1;
                    self.record(&dir.items, by_extension);
                }
                Item::Unknown(_) => self.unknown += 1,
            }
        }
    }
}

/// Print statistics to stdout with optional color.
pub fn print_stats(stats: &TreeStats, use_color: bool) -> io::Result<()> {
    let color_choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(color_choice);

    // Header
    let mut bold = ColorSpec::new();
    bold.set_bold(true);
    stdout.set_color(&bold)?;
    writeln!(stdout, "Tree Statistics")?;
    stdout.reset()?;
    writeln!(stdout, "───────────────")?;

    // Summary
    writeln!(stdout, "Files:        {} total", format_number(stats.files))?;
    writeln!(stdout, "Directories:  {}", format_number(stats.directories))?;
    if stats.unknown > 0 {
        writeln!(stdout, "Other:        {}", format_number(stats.unknown))?;
    }
    writeln!(stdout, "Size:         {}", format_size(stats.total_size))?;
    writeln!(stdout)?;

    if !stats.by_extension.is_empty() {
        stdout.set_color(&bold)?;
        writeln!(stdout, "By Extension:")?;
        stdout.reset()?;

        let mut ext_color = ColorSpec::new();
        ext_color.set_fg(Some(Color::Cyan));

        for ext in &stats.by_extension {
            write!(stdout, "  ")?;
            stdout.set_color(&ext_color)?;
            let label = if ext.extension.is_empty() {
                "(none)"
            } else {
                ext.extension.as_str()
            };
            write!(stdout, "{:<14}", label)?;
            stdout.reset()?;
            writeln!(stdout, "{:>6} files  {:>8}", ext.files, format_size(ext.size))?;
        }
    }

    Ok(())
}

/// Format a number with thousand separators.
fn format_number(n: usize) -> String {
    let s = n.to_string();
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::new();

    for (i, c) in chars.iter().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, *c);
    }

    result
}

/// Print statistics as JSON.
pub fn print_stats_json(stats: &TreeStats) -> io::Result<()> {
    let json = serde_json::to_string_pretty(stats).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
