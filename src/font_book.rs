use crate::{font::Font, FontSpec, Measurer, Pt};
use id_arena::{Arena, Id};
use std::ops::Index;

/// A collection of loaded fonts that measures text by picking the face best
/// matching a [FontSpec].
///
/// Faces are matched on, in order of priority:
///
/// 1. the first family in the spec's family list that any registered face has
///    (case-insensitive),
/// 2. italic or upright, as requested,
/// 3. the weight closest to the requested one.
///
/// If no family matches, the first font added to the book is used. Faces can
/// only be added through [FontBook::add_font], which keeps the family index in
/// step with the arena.
#[derive(Default)]
pub struct FontBook {
    fonts: Arena<Font>,
    families: Vec<(Id<Font>, String)>,
}

impl FontBook {
    pub fn new() -> FontBook {
        FontBook::default()
    }

    /// Add a font to the book, returning its id. The first font added becomes the
    /// fallback for specs that don't match anything.
    pub fn add_font(&mut self, font: Font) -> Id<Font> {
        let family = font.family().unwrap_or_default().to_lowercase();
        let id = self.fonts.alloc(font);
        self.families.push((id, family));
        id
    }

    pub fn font(&self, id: Id<Font>) -> Option<&Font> {
        self.fonts.get(id)
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.len() == 0
    }

    /// Iterate over every face in the order they were added
    pub fn fonts(&self) -> impl Iterator<Item = (Id<Font>, &Font)> {
        self.fonts.iter()
    }

    /// Find the font and size (in points) that `spec` refers to. Returns [None]
    /// only when the book is empty.
    pub fn resolve(&self, spec: &FontSpec) -> Option<(&Font, Pt)> {
        let descriptor = spec.descriptor();
        let size = descriptor.size_pt();
        let italic = descriptor.is_italic();
        let weight = descriptor.numeric_weight();

        let matched = descriptor.families().into_iter().find_map(|family| {
            let family = family.to_lowercase();
            self.families
                .iter()
                .filter(|(_, f)| *f == family)
                .map(|&(id, _)| id)
                .min_by_key(|&id| {
                    let font = &self.fonts[id];
                    (font.is_italic() != italic, font.weight().abs_diff(weight))
                })
        });

        let id = match matched {
            Some(id) => id,
            None => {
                let (id, fallback) = self.families.first()?;
                if !spec.is_empty() {
                    tracing::warn!(font = %spec, fallback = %fallback, "no font matches, using fallback");
                }
                *id
            }
        };

        Some((&self.fonts[id], size))
    }
}

impl Index<Id<Font>> for FontBook {
    type Output = Font;

    fn index(&self, id: Id<Font>) -> &Font {
        &self.fonts[id]
    }
}

impl Measurer for FontBook {
    fn measure(&self, text: &str, font: &FontSpec) -> Pt {
        match self.resolve(font) {
            Some((face, size)) => face.width_of_text(text, size),
            None => Pt(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FontDescriptor;

    fn book() -> (FontBook, Id<Font>, Id<Font>) {
        let regular = include_bytes!("../assets/DejaVuSansMono.ttf");
        let bold = include_bytes!("../assets/DejaVuSansMono-Bold.ttf");

        let mut book = FontBook::new();
        let regular = book.add_font(Font::load(regular.to_vec()).expect("can load font"));
        let bold = book.add_font(Font::load(bold.to_vec()).expect("can load font"));
        (book, regular, bold)
    }

    #[test]
    fn empty_book_measures_nothing() {
        let book = FontBook::new();
        assert!(book.resolve(&"12pt serif".into()).is_none());
        assert_eq!(book.measure("hello", &"12pt serif".into()), Pt(0.0));
    }

    #[test]
    fn resolves_by_family_and_weight() {
        let (book, regular, bold) = book();

        let (font, size) = book
            .resolve(&"bold 16px 'DejaVu Sans Mono', monospace".into())
            .expect("font resolves");
        assert_eq!(font.weight(), book[bold].weight());
        assert_eq!(size, Pt(12.0));

        let mut descriptor = FontDescriptor::new("Comic Sans, dejavu sans mono");
        descriptor.size("10pt");
        let (font, size) = book
            .resolve(&descriptor.into())
            .expect("font resolves");
        assert_eq!(font.weight(), book[regular].weight());
        assert_eq!(size, Pt(10.0));
    }

    #[test]
    fn falls_back_to_first_font() {
        let (book, regular, _) = book();
        let (font, _) = book.resolve(&"900 9pt Papyrus".into()).expect("font resolves");
        assert_eq!(font.weight(), book[regular].weight());
    }

    #[test]
    fn empty_specs_use_the_first_font() {
        let (book, regular, _) = book();
        let (font, size) = book.resolve(&"".into()).expect("font resolves");
        assert_eq!(font.weight(), book[regular].weight());
        assert_eq!(size, crate::DEFAULT_FONT_SIZE);
        assert!(book.measure("ab", &FontDescriptor::default().into()) > Pt(0.0));
    }

    #[test]
    fn looks_up_faces_by_id() {
        let (book, regular, bold) = book();
        assert_eq!(book.len(), 2);
        assert!(!book.is_empty());
        assert!(book.font(bold).is_some_and(|f| f.weight() > book[regular].weight()));

        let ids: Vec<Id<Font>> = book.fonts().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![regular, bold]);
        assert!(FontBook::new().is_empty());
    }

    #[test]
    fn measures_with_resolved_size() {
        let (book, _, _) = book();
        let small = book.measure("wrap", &"8pt DejaVu Sans Mono".into());
        let large = book.measure("wrap", &"16pt DejaVu Sans Mono".into());
        assert!((large.0 - 2.0 * small.0).abs() < 1e-3);
        assert!((small.0 - 4.0 * 8.0 * 1233.0 / 2048.0).abs() < 1e-3);
    }
}
