//! UI Theme - Design system constants
//!
//! Colors, icons and label widths shared by every command. Keeping them in
//! one place keeps the menu, status report and prompts visually consistent.

use crossterm::style::Color;

/// Default theme for filmcache output
#[derive(Debug, Clone, Default)]
pub struct Theme {
    /// Colors for different UI elements
    pub colors: ColorScheme,
    /// Status icons
    pub icons: Icons,
    /// Layout constants
    pub layout: Layout,
}

/// Color scheme for UI elements
#[derive(Debug, Clone)]
pub struct ColorScheme {
    /// Labels, dates and secondary info
    pub secondary: Color,
    /// Section headers
    pub header: Color,
    /// Success states
    pub success: Color,
    /// Warning states
    pub warning: Color,
    /// Error states
    pub error: Color,
    /// Informational notes
    pub info: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            secondary: Color::DarkGrey,
            header: Color::White,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::Blue,
        }
    }
}

/// Status icons for different states
#[derive(Debug, Clone)]
pub struct Icons {
    /// Success/completed state (✓)
    pub success: &'static str,
    /// Error/failed state (✗)
    pub error: &'static str,
    /// Warning state (⚠)
    pub warning: &'static str,
    /// Info/Tip state (ℹ)
    pub info: &'static str,
    /// List bullet for sample films
    pub bullet: &'static str,
}

impl Default for Icons {
    fn default() -> Self {
        Self {
            success: "✓",
            error: "✗",
            warning: "⚠",
            info: "ℹ",
            bullet: "-",
        }
    }
}

/// Layout constants
#[derive(Debug, Clone)]
pub struct Layout {
    /// Width of the label column in key/value blocks
    pub label_width: usize,
    /// Indent for list items
    pub indent: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            label_width: 12,
            indent: 2,
        }
    }
}

/// Format fractional days with one decimal, as shown in status output.
pub fn format_days(days: f64) -> String {
    format!("{days:.1} days")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_days() {
        assert_eq!(format_days(3.0), "3.0 days");
        assert_eq!(format_days(4.04), "4.0 days");
        assert_eq!(format_days(-1.26), "-1.3 days");
        assert_eq!(format_days(0.0), "0.0 days");
    }

    #[test]
    fn test_theme_defaults() {
        let theme = Theme::default();
        assert_eq!(theme.icons.success, "✓");
        assert_eq!(theme.icons.error, "✗");
        assert_eq!(theme.layout.label_width, 12);
    }
}
