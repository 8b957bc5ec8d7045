//! Indented text rendering
//!
//! `render` builds the text as a `String`; `TextFormatter` prints the same
//! lines to stdout with colors.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{Dir, Item, ItemType, format_size};

use super::config::RenderOptions;

/// One rendered line before it is joined or printed.
struct Line {
    depth: usize,
    item_type: ItemType,
    text: String,
}

/// Collect lines in pre-order. The root is depth 0.
fn collect_lines(root: &Dir, options: &RenderOptions) -> Vec<Line> {
    let mut lines = vec![Line {
        depth: 0,
        item_type: ItemType::Dir,
        text: line_text(root.path.display(), Some(root.size), options),
    }];
    collect_children(&root.items, 1, options, &mut lines);
    lines
}

fn collect_children(items: &[Item], depth: usize, options: &RenderOptions, lines: &mut Vec<Line>) {
    for item in items {
        let size = match item {
            Item::Unknown(_) => None,
            _ => Some(item.size()),
        };
        lines.push(Line {
            depth,
            item_type: item.item_type(),
            text: line_text(item.path().display(), size, options),
        });
        if let Item::Dir(dir) = item {
            collect_children(&dir.items, depth + 1, options, lines);
        }
    }
}

fn line_text(path: impl std::fmt::Display, size: Option<u64>, options: &RenderOptions) -> String {
    match size {
        Some(bytes) if options.show_size => {
            format!("{}{} ({})", options.bullet, path, format_size(bytes))
        }
        _ => format!("{}{}", options.bullet, path),
    }
}

fn indent(depth: usize, options: &RenderOptions) -> String {
    " ".repeat(depth * options.indent_size)
}

/// Render a scanned tree as indented text.
///
/// The first line is the bullet followed by the root path; every descendant
/// follows in pre-order, indented by `indent_size` spaces per level. Lines
/// are separated by `\n` with no trailing newline.
pub fn render(root: &Dir, options: &RenderOptions) -> String {
    collect_lines(root, options)
        .iter()
        .map(|line| format!("{}{}", indent(line.depth, options), line.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Formatter for colored console output.
pub struct TextFormatter {
    options: RenderOptions,
    use_color: bool,
}

impl TextFormatter {
    pub fn new(options: RenderOptions, use_color: bool) -> Self {
        Self { options, use_color }
    }

    pub fn format(&self, root: &Dir) -> String {
        render(root, &self.options)
    }

    pub fn print(&self, root: &Dir) -> io::Result<()> {
        let choice = if self.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write_to(&mut stdout, root)?;
        stdout.reset()
    }

    fn write_to<W: WriteColor>(&self, out: &mut W, root: &Dir) -> io::Result<()> {
        let mut dir_color = ColorSpec::new();
        dir_color.set_fg(Some(Color::Blue)).set_bold(true);
        let mut unknown_color = ColorSpec::new();
        unknown_color.set_fg(Some(Color::Cyan));

        for line in collect_lines(root, &self.options) {
            write!(out, "{}", indent(line.depth, &self.options))?;
            match line.item_type {
                ItemType::Dir => out.set_color(&dir_color)?,
                ItemType::Unknown => out.set_color(&unknown_color)?,
                ItemType::File => {}
            }
            write!(out, "{}", line.text)?;
            out.reset()?;
            writeln!(out)?;
        }
        Ok(())
    }
}
