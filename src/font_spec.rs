use crate::{In, Mm, Pt, Px};
use std::fmt;

/// The font size assumed when a font does not specify one (CSS `medium`)
pub const DEFAULT_FONT_SIZE: Pt = Pt(12.0);

/// Identifies the font that text is measured in. Either a pre-formatted font
/// string in CSS shorthand form (`"italic bold 16px Arial"`), or a structured
/// descriptor. The wrapper never interprets this itself; it is handed as-is to
/// the [`Measurer`](crate::Measurer) for every measurement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum FontSpec {
    Css(String),
    Descriptor(FontDescriptor),
}

/// A structured font description. Fields that are [None] are omitted when the
/// descriptor is formatted as a font string.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FontDescriptor {
    /// Comma-separated family list, e.g. `"Fira Sans, sans-serif"`
    pub family: Option<String>,
    /// `normal`, `italic` or `oblique`
    pub style: Option<String>,
    /// `normal`, `bold`, or a numeric weight from 100 to 900
    pub weight: Option<String>,
    /// A length such as `16px` or `12pt`
    pub size: Option<String>,
}

impl FontSpec {
    /// Whether the spec carries no information at all
    pub fn is_empty(&self) -> bool {
        match self {
            FontSpec::Css(s) => s.trim().is_empty(),
            FontSpec::Descriptor(d) => d.is_empty(),
        }
    }

    /// Obtain a structured view of this font, parsing the CSS font shorthand if
    /// needed. Parsing is lenient: unrecognized tokens before the size are
    /// ignored, and a string without a size is treated as a bare family list.
    pub fn descriptor(&self) -> FontDescriptor {
        match self {
            FontSpec::Css(s) => FontDescriptor::parse(s),
            FontSpec::Descriptor(d) => d.clone(),
        }
    }
}

impl fmt::Display for FontSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontSpec::Css(s) => f.write_str(s),
            FontSpec::Descriptor(d) => d.fmt(f),
        }
    }
}

impl From<&str> for FontSpec {
    fn from(value: &str) -> Self {
        FontSpec::Css(value.to_string())
    }
}

impl From<String> for FontSpec {
    fn from(value: String) -> Self {
        FontSpec::Css(value)
    }
}

impl From<FontDescriptor> for FontSpec {
    fn from(value: FontDescriptor) -> Self {
        FontSpec::Descriptor(value)
    }
}

impl FontDescriptor {
    /// Create a descriptor with only the family set
    pub fn new<S: ToString>(family: S) -> FontDescriptor {
        FontDescriptor {
            family: Some(family.to_string()),
            ..Default::default()
        }
    }

    /// Set the style of the descriptor, modifying `self`
    pub fn style<S: ToString>(&mut self, style: S) -> &mut Self {
        self.style = Some(style.to_string());
        self
    }

    /// Set the weight of the descriptor, modifying `self`
    pub fn weight<S: ToString>(&mut self, weight: S) -> &mut Self {
        self.weight = Some(weight.to_string());
        self
    }

    /// Set the size of the descriptor, modifying `self`
    pub fn size<S: ToString>(&mut self, size: S) -> &mut Self {
        self.size = Some(size.to_string());
        self
    }

    pub fn is_empty(&self) -> bool {
        [&self.family, &self.style, &self.weight, &self.size]
            .into_iter()
            .all(|field| field.as_deref().map_or(true, |s| s.trim().is_empty()))
    }

    /// Parse a CSS font shorthand such as `"italic 700 16px/1.2 'Fira Sans', serif"`
    pub fn parse(font: &str) -> FontDescriptor {
        let mut descriptor = FontDescriptor::default();
        let tokens: Vec<&str> = font.split_whitespace().collect();

        let size_at = tokens.iter().position(|t| {
            t.starts_with(|c: char| c.is_ascii_digit() || c == '.') && !is_numeric_weight(t)
        });
        let Some(size_at) = size_at else {
            if !tokens.is_empty() {
                descriptor.family = Some(tokens.join(" "));
            }
            return descriptor;
        };

        for token in &tokens[..size_at] {
            match token.to_ascii_lowercase().as_str() {
                "italic" | "oblique" => descriptor.style = Some(token.to_string()),
                "bold" | "bolder" | "lighter" => descriptor.weight = Some(token.to_string()),
                t if is_numeric_weight(t) => descriptor.weight = Some(token.to_string()),
                // `normal` is ambiguous between style and weight and means the default for both
                _ => {}
            }
        }

        // drop any `/line-height` suffix
        let size = tokens[size_at].split('/').next().unwrap_or_default();
        descriptor.size = Some(size.to_string());

        if size_at + 1 < tokens.len() {
            descriptor.family = Some(tokens[size_at + 1..].join(" "));
        }

        descriptor
    }

    /// The family names in order of preference, with quotes removed
    pub fn families(&self) -> Vec<String> {
        self.family
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(|f| f.trim().trim_matches(|c| c == '"' || c == '\'').to_string())
            .filter(|f| !f.is_empty())
            .collect()
    }

    /// Whether an italic or oblique face is requested
    pub fn is_italic(&self) -> bool {
        matches!(
            self.style.as_deref().map(str::to_ascii_lowercase).as_deref(),
            Some("italic") | Some("oblique")
        )
    }

    /// The requested weight as a number from 100 to 900, defaulting to 400
    pub fn numeric_weight(&self) -> u16 {
        match self.weight.as_deref().map(str::to_ascii_lowercase).as_deref() {
            Some("bold") | Some("bolder") => 700,
            Some("lighter") => 300,
            Some(w) => w.parse().unwrap_or(400),
            None => 400,
        }
    }

    /// The requested size converted to points. Supports `pt`, `px`, `in` and `mm`
    /// suffixes; a bare number is taken to be in points. Returns
    /// [`DEFAULT_FONT_SIZE`] when no usable size was given.
    pub fn size_pt(&self) -> Pt {
        let Some(size) = self.size.as_deref().map(str::trim) else {
            return DEFAULT_FONT_SIZE;
        };

        let split = size
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(size.len());
        let (value, unit) = size.split_at(split);
        let Ok(value) = value.parse::<f32>() else {
            return DEFAULT_FONT_SIZE;
        };

        match unit.to_ascii_lowercase().as_str() {
            "" | "pt" => Pt(value),
            "px" => Px(value).into(),
            "in" => In(value).into(),
            "mm" => Mm(value).into(),
            _ => DEFAULT_FONT_SIZE,
        }
    }
}

fn is_numeric_weight(token: &str) -> bool {
    token
        .parse::<u16>()
        .is_ok_and(|w| (100..=900).contains(&w) && w % 100 == 0)
}

impl fmt::Display for FontDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = [&self.style, &self.weight, &self.size, &self.family]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .collect();
        f.write_str(&parts.join(" "))
    }
}
