// Tests for the angle -> color band table.

use dial_core::palette::{color_for_angle, COLOR_BANDS};

#[test]
fn band_table_shape() {
    // Nine 40-degree bands covering [0, 360]
    assert_eq!(COLOR_BANDS.len(), 9);
    // Upper bounds strictly increase and the table closes at 360
    for pair in COLOR_BANDS.windows(2) {
        assert!(
            pair[0].upper_deg < pair[1].upper_deg,
            "bounds must be strictly increasing: {} then {}",
            pair[0].upper_deg,
            pair[1].upper_deg
        );
    }
    assert_eq!(COLOR_BANDS[COLOR_BANDS.len() - 1].upper_deg, 360.0);
}

#[test]
fn boundary_belongs_to_lower_band() {
    // A value exactly on a boundary resolves to the band above it (strict <)
    let cases = [
        (0.0, 0),
        (39.0, 0),
        (40.0, 1),
        (79.0, 1),
        (80.0, 2),
        (119.0, 2),
        (120.0, 3),
        (319.0, 7),
        (320.0, 8),
        (359.0, 8),
    ];
    for (deg, band_index) in cases {
        assert_eq!(
            color_for_angle(deg),
            COLOR_BANDS[band_index].color,
            "angle {} should land in band {}",
            deg,
            band_index
        );
    }
}

#[test]
fn full_turn_resolves_to_last_band() {
    // 360 is inclusive in the final band only
    assert_eq!(color_for_angle(360.0), COLOR_BANDS[8].color);
}

#[test]
fn adjacent_bands_share_light_value() {
    // The shipped palette reuses one light value across the blue and violet
    // bands; only the CSS colors differ. Pinned so it is not "fixed" silently.
    let blue = COLOR_BANDS[5].color;
    let violet = COLOR_BANDS[6].color;
    assert_eq!(blue.light, violet.light);
    assert_ne!(blue.display, violet.display);
    assert_ne!(blue.glow, violet.glow);

    // No other adjacent pair shares a light value
    for (i, pair) in COLOR_BANDS.windows(2).enumerate() {
        if i == 5 {
            continue;
        }
        assert_ne!(
            pair[0].color.light, pair[1].color.light,
            "unexpected duplicate light value at bands {} and {}",
            i,
            i + 1
        );
    }
}
