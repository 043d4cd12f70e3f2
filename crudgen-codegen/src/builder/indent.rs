//! Indentation configuration for generated sources.

/// One level of indentation in generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// 2, 4 or 8 spaces; other widths fall back to 4.
    Spaces(u8),
    Tab,
}

impl Indent {
    /// Prisma schema and TypeScript both use two spaces.
    pub const TWO_SPACES: Self = Self::Spaces(2);

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(2) => "  ",
            Self::Spaces(8) => "        ",
            Self::Spaces(_) => "    ",
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TWO_SPACES
    }
}
