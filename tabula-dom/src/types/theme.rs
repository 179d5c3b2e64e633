use crate::types::{Color, Rgb};

/// A theme provides named color variables.
pub trait Theme: Send + Sync {
    /// Resolve a color variable name to a concrete color.
    /// Returns None if the variable is not defined.
    fn resolve(&self, name: &str) -> Option<&Color>;
}

/// Dark default theme with the semantic slots the components use.
#[derive(Debug, Clone)]
pub struct DefaultTheme {
    pub background: Color,
    pub foreground: Color,
    pub surface: Color,
    pub border: Color,
    pub primary: Color,
    pub muted: Color,
    pub error: Color,
    pub selection: Color,
    pub hover: Color,
}

impl DefaultTheme {
    pub const fn new() -> Self {
        Self {
            background: Color::Oklch { l: 0.18, c: 0.0, h: 0.0 },
            foreground: Color::Oklch { l: 0.93, c: 0.0, h: 0.0 },
            surface: Color::Oklch { l: 0.24, c: 0.0, h: 0.0 },
            border: Color::Oklch { l: 0.45, c: 0.0, h: 0.0 },
            primary: Color::Oklch { l: 0.68, c: 0.15, h: 260.0 },
            muted: Color::Oklch { l: 0.6, c: 0.0, h: 0.0 },
            error: Color::Oklch { l: 0.65, c: 0.2, h: 25.0 },
            selection: Color::Oklch { l: 0.35, c: 0.08, h: 260.0 },
            hover: Color::Oklch { l: 0.3, c: 0.0, h: 0.0 },
        }
    }
}

impl Default for DefaultTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for DefaultTheme {
    fn resolve(&self, name: &str) -> Option<&Color> {
        match name {
            "background" => Some(&self.background),
            "foreground" => Some(&self.foreground),
            "surface" => Some(&self.surface),
            "border" => Some(&self.border),
            "primary" => Some(&self.primary),
            "muted" => Some(&self.muted),
            "error" => Some(&self.error),
            "selection" => Some(&self.selection),
            "hover" => Some(&self.hover),
            _ => None,
        }
    }
}

/// Context for resolving color variables.
pub struct ColorContext<'a> {
    theme: &'a dyn Theme,
}

impl<'a> ColorContext<'a> {
    pub fn new(theme: &'a dyn Theme) -> Self {
        Self { theme }
    }

    /// Resolve a color to concrete RGB. Unknown variables resolve to black.
    pub fn resolve(&self, color: &Color) -> Rgb {
        match color {
            Color::Var(name) => match self.theme.resolve(name) {
                // Recursively resolve in case the theme returns another Var
                Some(resolved) if resolved != color => self.resolve(resolved),
                _ => {
                    log::warn!("unresolved color variable: {name}");
                    Rgb::default()
                }
            },
            concrete => concrete.to_rgb(),
        }
    }
}
