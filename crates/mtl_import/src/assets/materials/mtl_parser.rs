//! MTL (Material Template Library) directive parser
//!
//! Walks a Wavefront `.mtl` buffer one line at a time and writes recognized
//! directives into a [`Model`]. Parsing is total: unknown keywords, junk
//! numbers and truncated lines are skipped or read as zero, never reported.

use super::cursor::Cursor;
use super::model::Model;
use super::values::{parse_color, parse_float, parse_int};

/// Which color slot a `K*` directive targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSlot {
    /// Ka
    Ambient,
    /// Kd
    Diffuse,
    /// Ks
    Specular,
}

/// Directive selected by the leading bytes of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// `Ka`, `Kd`, `Ks`
    Color(ColorSlot),
    /// Any line starting with `d`
    Alpha,
    /// `Ns`
    Shininess,
    /// `Ni`; recognized but not stored
    RefractionIndex,
    /// Any line starting with `m` (`map_Kd`, `map_Bump`, ...)
    Texture,
    /// Any line starting with `n` (`newmtl`)
    NewMaterial,
    /// Any line starting with `i` (`illum`)
    Illumination,
    /// Comments, blank or indented lines, other `K*`/`N*` subtypes and
    /// everything else
    Ignored,
}

impl Directive {
    /// Classify a line by its first bytes
    ///
    /// No whitespace is skipped, so an indented line is ignored. `K` and
    /// `N` are told apart by their second byte; `d`, `m`, `n` and `i` by
    /// their leading byte alone.
    pub fn classify(line: &[u8]) -> Self {
        match line {
            [b'K', b'a', ..] => Self::Color(ColorSlot::Ambient),
            [b'K', b'd', ..] => Self::Color(ColorSlot::Diffuse),
            [b'K', b's', ..] => Self::Color(ColorSlot::Specular),
            [b'N', b's', ..] => Self::Shininess,
            [b'N', b'i', ..] => Self::RefractionIndex,
            [b'd', ..] => Self::Alpha,
            [b'm', ..] => Self::Texture,
            [b'n', ..] => Self::NewMaterial,
            [b'i', ..] => Self::Illumination,
            _ => Self::Ignored,
        }
    }

    /// Bytes of the line that select this directive
    ///
    /// Values are read right after them. `None` means the whole first word
    /// is the keyword.
    pub fn prefix_len(self) -> Option<usize> {
        match self {
            Self::Color(_) | Self::Shininess | Self::RefractionIndex => Some(2),
            Self::Alpha => Some(1),
            Self::Texture | Self::NewMaterial | Self::Illumination | Self::Ignored => None,
        }
    }
}

/// Parse session over one material library buffer
///
/// Holds the scan position and the target model; the model's current
/// material is the implicit destination of every property directive.
pub struct MtlParser<'a, 'm> {
    cursor: Cursor<'a>,
    model: &'m mut Model,
}

impl<'a, 'm> MtlParser<'a, 'm> {
    /// Start a session writing into `model`
    ///
    /// The model's default material is created here if it does not exist yet
    /// and becomes the current material.
    pub fn new(data: &'a [u8], model: &'m mut Model) -> Self {
        model.ensure_default();
        Self {
            cursor: Cursor::new(data),
            model,
        }
    }

    /// Parse `data` into `model` in one call
    ///
    /// Returns the final line counter.
    pub fn parse(data: &[u8], model: &mut Model) -> usize {
        let mut parser = MtlParser::new(data, model);
        parser.run();
        parser.line()
    }

    /// Current line counter (1-based)
    pub fn line(&self) -> usize {
        self.cursor.line()
    }

    /// Consume the whole buffer
    pub fn run(&mut self) {
        while !self.cursor.is_at_end() {
            self.parse_line();
            self.cursor.skip_to_next_line();
        }
    }

    /// Handle a single directive; the caller moves on to the next line
    fn parse_line(&mut self) {
        let directive = Directive::classify(self.cursor.remaining());
        match directive.prefix_len() {
            Some(len) => self.cursor.advance_by(len),
            None if directive != Directive::Ignored => {
                self.cursor.next_word();
            }
            None => {}
        }

        match directive {
            Directive::Color(slot) => {
                let color = parse_color(&mut self.cursor);
                let material = self.model.current_material_mut();
                match slot {
                    ColorSlot::Ambient => material.ambient = color,
                    ColorSlot::Diffuse => material.diffuse = color,
                    ColorSlot::Specular => material.specular = color,
                }
            }
            Directive::Alpha => {
                let alpha = parse_float(self.cursor.next_word());
                self.model.current_material_mut().alpha = alpha;
            }
            Directive::Shininess => {
                let shininess = parse_float(self.cursor.next_word());
                self.model.current_material_mut().shininess = shininess;
            }
            Directive::Texture => {
                let path = self.cursor.next_name();
                if !path.is_empty() {
                    self.model.current_material_mut().texture =
                        Some(String::from_utf8_lossy(path).into_owned());
                }
            }
            Directive::NewMaterial => {
                let name = self.cursor.next_name();
                if name.is_empty() {
                    log::trace!("Line {}: material declaration without a name", self.line());
                } else {
                    self.model.create_or_select(&String::from_utf8_lossy(name));
                }
            }
            Directive::Illumination => {
                let illum = parse_int(self.cursor.next_word());
                self.model.current_material_mut().illumination_model = illum;
            }
            // TODO: store Ni once Material grows an optical density field
            Directive::RefractionIndex => {}
            Directive::Ignored => {
                let keyword = self.cursor.next_word();
                if !keyword.is_empty() {
                    log::trace!(
                        "Line {}: skipping '{}'",
                        self.line(),
                        String::from_utf8_lossy(keyword)
                    );
                }
            }
        }
    }
}
