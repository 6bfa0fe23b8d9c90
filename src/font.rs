use crate::{Pt, WrapError};
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};

/// A parsed font object. Fonts can be TTF or OTF fonts; only the metrics needed to
/// measure text are ever read from them.
///
/// Typically, fonts are registered in a [`FontBook`](crate::FontBook) and picked
/// from there by [`FontSpec`](crate::FontSpec) rather than used directly.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, WrapError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    /// Obtain the full name of the font, if it has one
    pub fn name(&self) -> Option<String> {
        self.name_entry(owned_ttf_parser::name_id::FULL_NAME)
    }

    /// Obtain the family name of the font, if it has one
    pub fn family(&self) -> Option<String> {
        self.name_entry(owned_ttf_parser::name_id::TYPOGRAPHIC_FAMILY)
            .or_else(|| self.name_entry(owned_ttf_parser::name_id::FAMILY))
    }

    fn name_entry(&self, id: u16) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == id && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// Obtain the weight of the font. Numerical values generally map as follows:
    ///
    /// * 100: Thin (Hairline)
    /// * 200: Extra Light (Ultra Light)
    /// * 300: Light
    /// * 400: Normal
    /// * 500: Medium
    /// * 600: Semi Bold (Demi Bold)
    /// * 700: Bold
    /// * 800: Extra Bold (Ultra Bold)
    /// * 900: Black (Heavy)
    pub fn weight(&self) -> u16 {
        self.face.as_face_ref().weight().to_number()
    }

    /// Whether the face is italic or oblique
    pub fn is_italic(&self) -> bool {
        let face = self.face.as_face_ref();
        face.is_italic() || face.is_oblique()
    }

    /// Calculate the default line height of the font for the given size. The returned value is
    /// how much to vertically offset a second row of text below a first row of text.
    pub fn line_height(&self, size: Pt) -> Pt {
        let face = self.face.as_face_ref();
        let scaling: Pt = size / face.units_per_em() as f32;
        let leading: Pt = scaling * face.line_gap() as f32;
        let ascent: Pt = scaling * face.ascender() as f32;
        let descent: Pt = scaling * face.descender() as f32;
        leading + ascent - descent
    }

    /// Look up the glyph for a character, substituting the replacement character
    /// (or failing that, a question mark) for characters the font can't render
    pub fn glyph_id(&self, ch: char) -> Option<GlyphId> {
        let face = self.face.as_face_ref();
        face.glyph_index(ch)
            .or_else(|| face.glyph_index('\u{FFFD}'))
            .or_else(|| face.glyph_index('?'))
    }

    /// Calculate the width of a given string of text at the given font size
    pub fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        let face = self.face.as_face_ref();
        let scaling = size / face.units_per_em() as f32;
        text.chars()
            .filter_map(|ch| self.glyph_id(ch))
            .map(|gid| scaling * face.glyph_hor_advance(gid).unwrap_or_default() as f32)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MONO: &[u8] = include_bytes!("../assets/DejaVuSansMono.ttf");
    const MONO_BOLD: &[u8] = include_bytes!("../assets/DejaVuSansMono-Bold.ttf");

    // DejaVu Sans Mono advances every glyph by 1233 of 2048 units
    fn advance(size: f32) -> f32 {
        size * 1233.0 / 2048.0
    }

    #[test]
    fn reads_names_and_weight() {
        let font = Font::load(MONO.to_vec()).expect("can load font");
        assert_eq!(font.family().as_deref(), Some("DejaVu Sans Mono"));
        assert_eq!(font.weight(), 400);
        assert!(!font.is_italic());

        let bold = Font::load(MONO_BOLD.to_vec()).expect("can load font");
        assert_eq!(bold.family().as_deref(), Some("DejaVu Sans Mono"));
        assert_eq!(bold.weight(), 700);
    }

    #[test]
    fn measures_text() {
        let font = Font::load(MONO.to_vec()).expect("can load font");
        assert_eq!(font.width_of_text("", Pt(12.0)), Pt(0.0));

        let width = font.width_of_text("hello", Pt(12.0));
        assert!((width.0 - 5.0 * advance(12.0)).abs() < 1e-3);

        // unmapped characters fall back to a replacement glyph rather than vanishing
        let width = font.width_of_text("\u{E000}", Pt(12.0));
        assert!(width.0 > 0.0);

        assert!(font.line_height(Pt(12.0)).0 > 12.0);
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            Font::load(vec![0; 16]),
            Err(WrapError::FaceParsing(_))
        ));
    }
}
