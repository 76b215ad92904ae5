// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Layout and typography constants shared by the clock and calendar cards.
Colors are not tokens here: they come from the active
[`ColorScheme`](crate::ui::theming::ColorScheme).

## Organization

- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use showcase_clock::ui::design_tokens::{sizing, spacing};

let grid_width = sizing::DAY_CELL * 7.0 + spacing::XXS * 6.0;
assert!(grid_width + spacing::LG * 2.0 <= sizing::CARD_MIN_WIDTH);
```
"#]

pub mod opacity {
    /// Hovered toggle buttons and calendar cells
    pub const HOVER: f32 = 0.85;

    /// Weekday header row above the calendar grid
    pub const MUTED: f32 = 0.6;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;

    /// Square calendar day cell
    pub const DAY_CELL: f32 = 36.0;

    /// Cards never shrink below this width: seven day cells, six gaps
    /// and the card padding
    pub const CARD_MIN_WIDTH: f32 = 324.0;

    pub const WINDOW_WIDTH: f32 = 760.0;
    pub const WINDOW_HEIGHT: f32 = 480.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Digital clock readout
    pub const DISPLAY: f32 = 48.0;

    /// Section headers and the month title
    pub const TITLE_SM: f32 = 18.0;

    pub const BODY: f32 = 14.0;

    /// Weekday header row
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            a: 0.1,
            ..Color::BLACK
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.15,
            ..Color::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::HOVER > 0.0 && opacity::HOVER < 1.0);
    assert!(opacity::MUTED > 0.0 && opacity::MUTED < 1.0);

    assert!(typography::DISPLAY > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    // A padded week row must fit in a card
    assert!(sizing::DAY_CELL * 7.0 + spacing::XXS * 6.0 + spacing::LG * 2.0 <= sizing::CARD_MIN_WIDTH);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn calendar_week_fits_card_at_minimum_window() {
        // Body padding on both sides plus the gap between the two cards
        let min_window = sizing::CARD_MIN_WIDTH * 2.0 + spacing::LG * 3.0;
        let card_inner = (min_window - spacing::LG * 3.0) / 2.0 - spacing::LG * 2.0;
        let week_row = sizing::DAY_CELL * 7.0 + spacing::XXS * 6.0;

        assert!(week_row <= card_inner);
        assert!(min_window <= sizing::WINDOW_WIDTH);
    }
}
