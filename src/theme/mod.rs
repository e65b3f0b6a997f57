//! Design tokens shared by the button styles.
//!
//! Values follow the Tailwind default palette and spacing scale so the inline
//! styles produced by the resolver line up with the utility classes used on
//! the catalog page.

pub const WHITE: &str = "#ffffff";
pub const TRANSPARENT: &str = "transparent";

pub const BLUE_50: &str = "#eff6ff";
pub const BLUE_100: &str = "#dbeafe";
pub const BLUE_600: &str = "#2563eb";
pub const BLUE_700: &str = "#1d4ed8";
pub const BLUE_800: &str = "#1e40af";

pub const GRAY_100: &str = "#f3f4f6";
pub const GRAY_200: &str = "#e5e7eb";
pub const GRAY_300: &str = "#d1d5db";
pub const GRAY_500: &str = "#6b7280";
pub const GRAY_600: &str = "#4b5563";
pub const GRAY_700: &str = "#374151";

pub const RED_600: &str = "#dc2626";
pub const RED_700: &str = "#b91c1c";
pub const RED_800: &str = "#991b1b";

// Spacing scale (Tailwind units, 1 = 0.25rem).
pub const SPACING_2: &str = "0.5rem";
pub const SPACING_3: &str = "0.75rem";
pub const SPACING_4: &str = "1rem";
pub const SPACING_6: &str = "1.5rem";
pub const SPACING_8: &str = "2rem";

pub const FONT_SIZE_SM: &str = "0.875rem";
pub const FONT_SIZE_BASE: &str = "1rem";
pub const FONT_SIZE_LG: &str = "1.125rem";

/// Muted palette forced onto disabled buttons regardless of variant.
pub const MUTED_BACKGROUND: &str = GRAY_300;
pub const MUTED_FOREGROUND: &str = GRAY_500;

/// Opacity used for any button that cannot be activated.
pub const NON_INTERACTIVE_OPACITY: f32 = 0.5;

pub const BORDER_WIDTH_PX: u8 = 2;

/// Spinner glyph edge length.
pub const SPINNER_SIZE_PX: u8 = 16;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_muted_palette_is_gray() {
        assert_eq!(MUTED_BACKGROUND, GRAY_300);
        assert_eq!(MUTED_FOREGROUND, GRAY_500);
        assert_ne!(MUTED_BACKGROUND, MUTED_FOREGROUND);
    }
}
