use crate::palette::Palette;

#[test]
fn named_palettes_have_ordered_bounds() {
    for palette in [
        Palette::rock(),
        Palette::ocean(),
        Palette::ice(),
        Palette::life(),
        Palette::atmosphere(),
        Palette::giant_bands(),
        Palette::ring(),
    ] {
        assert!(palette.hue_min <= palette.hue_max);
        assert!(palette.saturation_min <= palette.saturation_max);
        assert!(palette.value_min <= palette.value_max);
        assert!(palette.saturation_min >= 0.0 && palette.saturation_max <= 1.0);
        assert!(palette.value_min >= 0.0 && palette.value_max <= 1.0);
    }
}

#[test]
fn ocean_palette_sits_in_the_blue_band() {
    let ocean = Palette::ocean();
    assert!(ocean.hue_min >= 180.0 && ocean.hue_max <= 260.0);
}
