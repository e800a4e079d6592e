//! Rendering a profile as plain text.
//!
//! A rendered profile is a sequence of [`Block`]s separated by blank lines.
//! Every block remembers which [`Part`] of the profile it came from, so that
//! callers such as search can attribute individual lines.

use std::fmt;

use crate::{Profile, Section, UnknownSectionError};

/// The title line of the closing note.
pub const NOTE_TITLE: &str = "Note:";

/// The disclaimer printed at the end of every full threat model.
pub const DISCLAIMER: &str =
    "This output is an educational starting point and does not replace a full security review.";

/// The closing line of every full threat model.
pub const CLOSING: &str =
    "Always adapt and extend it for your specific protocol, chain, and deployment model.";

/// The part of a rendered profile a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    /// The `Threat model profile: ...` header.
    Header,
    /// One of the five body sections.
    Section(Section),
    /// The closing disclaimer.
    Note,
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Header => f.write_str("header"),
            Self::Section(section) => fmt::Display::fmt(section, f),
            Self::Note => f.write_str("note"),
        }
    }
}

/// A run of lines belonging to one [`Part`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    part: Part,
    lines: Vec<String>,
}

impl Block {
    /// The part this block was rendered from.
    #[must_use]
    pub const fn part(&self) -> Part {
        self.part
    }

    /// The lines of the block, without trailing newlines.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn header(profile: &Profile) -> Self {
        Self {
            part: Part::Header,
            lines: vec![format!("Threat model profile: {}", profile.name())],
        }
    }

    fn section(profile: &Profile, section: Section) -> Self {
        let mut lines = vec![format!("{}:", section.title())];
        if section.is_list() {
            let items = profile.items(section);
            if !items.is_empty() {
                lines.push(String::new());
                // numbering restarts at 1 for every list
                lines.extend(
                    items
                        .iter()
                        .enumerate()
                        .map(|(index, item)| format!("{}. {item}", index + 1)),
                );
            }
        } else {
            lines.push(String::new());
            lines.push(profile.overview().to_string());
        }
        Self {
            part: Part::Section(section),
            lines,
        }
    }

    fn note() -> Self {
        Self {
            part: Part::Note,
            lines: vec![
                NOTE_TITLE.to_string(),
                DISCLAIMER.to_string(),
                String::new(),
                CLOSING.to_string(),
            ],
        }
    }
}

/// The rendered text of a profile, or of one of its sections.
///
/// Use the [`fmt::Display`] implementation to obtain the final text. The text
/// always ends with a newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    blocks: Vec<Block>,
}

impl Rendered {
    /// The blocks, in output order.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Every line of the output together with the part it belongs to.
    ///
    /// The blank lines separating blocks are not included.
    pub fn lines(&self) -> impl Iterator<Item = (Part, &str)> {
        self.blocks.iter().flat_map(|block| {
            block
                .lines
                .iter()
                .map(move |line| (block.part, line.as_str()))
        })
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, block) in self.blocks.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for line in &block.lines {
                writeln!(f, "{line}")?;
            }
        }
        Ok(())
    }
}

/// Renders a profile, or a single section of it.
///
/// [`Section::Full`] renders the header, the five body sections and the
/// closing note. Any other section renders only its own title and content.
#[must_use]
pub fn render(profile: &Profile, section: Section) -> Rendered {
    let blocks = match section {
        Section::Full => {
            let mut blocks = Vec::with_capacity(Section::BODY.len() + 2);
            blocks.push(Block::header(profile));
            blocks.extend(
                Section::BODY
                    .into_iter()
                    .map(|section| Block::section(profile, section)),
            );
            blocks.push(Block::note());
            blocks
        }
        section => vec![Block::section(profile, section)],
    };
    Rendered { blocks }
}

/// Renders a profile section selected by name.
///
/// # Errors
///
/// Returns [`UnknownSectionError`] if `section` is not a recognised section
/// name.
pub fn render_named(profile: &Profile, section: &str) -> Result<Rendered, UnknownSectionError> {
    Ok(render(profile, section.parse()?))
}
