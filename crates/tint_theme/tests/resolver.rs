//! End-to-end resolution behavior through the public API.

use tint_theme::tokens::palette;
use tint_theme::{
    create_theme, define_theme, Color, ComponentOverrides, DefineThemeConfig, InputTheme, Overlay,
    ThemeConfig, ThemePair, DEFAULT_DARK, DEFAULT_LIGHT,
};

#[test]
fn no_config_yields_builtin_defaults() {
    let pair = create_theme(None);
    assert_eq!(pair.light, *DEFAULT_LIGHT);
    assert_eq!(pair.dark, *DEFAULT_DARK);
}

#[test]
fn resolution_is_idempotent_for_defaults() {
    let a = create_theme(Some(&ThemeConfig::default()));
    let b = create_theme(Some(&ThemeConfig::default()));
    assert_eq!(a.light, b.light);
    assert_eq!(a.dark, b.dark);
    assert_eq!(a.light, ThemePair::default().light);
}

#[test]
fn palette_shortcut_sets_primary_family_per_mode() {
    let config = ThemeConfig::from_toml_str("primary_color = \"orange\"").unwrap();
    let pair = create_theme(Some(&config));
    assert_eq!(pair.light.primary, palette::ORANGE.s500);
    assert_eq!(pair.light.primary_light, palette::ORANGE.s300);
    assert_eq!(pair.light.primary_dark, palette::ORANGE.s700);
    assert_eq!(pair.dark.primary, palette::ORANGE.s400);
    assert_eq!(pair.dark.primary_light, palette::ORANGE.s300);
    assert_eq!(pair.dark.primary_dark, palette::ORANGE.s600);
    // everything else stays at the mode default
    assert_eq!(pair.light.background, DEFAULT_LIGHT.background);
    assert_eq!(pair.dark.surface, DEFAULT_DARK.surface);
}

#[test]
fn unknown_palette_shortcut_behaves_like_blue() {
    let unknown =
        create_theme(Some(&ThemeConfig::from_toml_str("primary_color = \"chartreuse\"").unwrap()));
    let blue = create_theme(Some(&ThemeConfig::from_toml_str("primary_color = \"blue\"").unwrap()));
    assert_eq!(unknown.light, blue.light);
    assert_eq!(unknown.dark, blue.dark);
}

#[test]
fn explicit_color_maps_win_over_shortcut() {
    let config = ThemeConfig::from_toml_str(
        "primary_color = \"green\"\n\n[light]\nprimary = \"#FF0000\"\n",
    )
    .unwrap();
    let pair = create_theme(Some(&config));
    // the shortcut is ignored entirely once a map is present
    assert_eq!(pair.light.primary, Color::from_hex(0xFF0000));
    assert_eq!(pair.dark.primary, DEFAULT_DARK.primary);
}

#[test]
fn explicit_map_keeps_unset_roles_at_mode_defaults() {
    let config = ThemeConfig::from_toml_str("[dark]\nbackground = \"#000000\"\n").unwrap();
    let pair = create_theme(Some(&config));
    assert_eq!(pair.dark.background, Color::BLACK);
    assert_eq!(pair.dark.primary, DEFAULT_DARK.primary);
    assert_eq!(pair.light, *DEFAULT_LIGHT);
}

#[test]
fn malformed_and_non_string_values_keep_defaults() {
    let config = ThemeConfig::from_toml_str(
        "[light]\nprimary = \"nonsense\"\nsurface = 42\ntext = \"#333333\"\n",
    )
    .unwrap();
    let pair = create_theme(Some(&config));
    assert_eq!(pair.light.primary, DEFAULT_LIGHT.primary);
    assert_eq!(pair.light.surface, DEFAULT_LIGHT.surface);
    assert_eq!(pair.light.text, Color::from_hex(0x333333));
}

#[test]
fn custom_string_keys_are_promoted_verbatim() {
    let config = ThemeConfig::from_toml_str(
        "[light]\nbrand_accent = \"#FF00FF\"\nnot_a_color = 7\n",
    )
    .unwrap();
    let pair = create_theme(Some(&config));
    assert_eq!(
        pair.light.custom.get("brand_accent").map(String::as_str),
        Some("#FF00FF")
    );
    assert_eq!(
        pair.light.custom_color("brand_accent"),
        Some(Color::from_hex(0xFF00FF))
    );
    assert!(!pair.light.custom.contains_key("not_a_color"));
    assert!(!pair.dark.custom.contains_key("brand_accent"));
}

#[test]
fn component_overrides_apply_to_both_modes() {
    let config = ThemeConfig::from_toml_str(
        "primary_color = \"purple\"\n\n[components.input]\nborder_radius = 0.0\n",
    )
    .unwrap();
    let pair = create_theme(Some(&config));
    assert_eq!(pair.light.components.input.border_radius(), 0.0);
    assert_eq!(pair.dark.components.input.border_radius(), 0.0);
    // untouched component attributes survive
    assert_eq!(pair.light.components.input.border_width(), 1.0);
}

#[test]
fn components_only_config_keeps_default_colors() {
    let config = ThemeConfig::from_toml_str("[components.input]\nborder_radius = 0.0\n").unwrap();
    let pair = create_theme(Some(&config));
    assert_eq!(pair.light.components.input.border_radius(), 0.0);
    assert_eq!(pair.dark.components.input.border_radius(), 0.0);
    // no shortcut and no maps: every color stays at the built-in default
    assert_eq!(pair.light.primary, DEFAULT_LIGHT.primary);
    assert_eq!(pair.dark.primary, DEFAULT_DARK.primary);
    assert_eq!(pair.light.background, DEFAULT_LIGHT.background);
}

#[test]
fn component_merge_combines_disjoint_layers() {
    // {border_radius} over {border_width} keeps both
    let base = InputTheme {
        border_width: Some(2.0),
        ..InputTheme::default()
    };
    let patch = InputTheme {
        border_radius: Some(16.0),
        ..InputTheme::default()
    };
    let merged = InputTheme::boxed().overlay(&base).overlay(&patch);
    assert_eq!(merged.border_width(), 2.0);
    assert_eq!(merged.border_radius(), 16.0);
}

#[test]
fn text_variant_override_merges_one_level_deep() {
    let config = ThemeConfig::from_toml_str(
        "[components.text.variants.title]\nfont_size = 28.0\n",
    )
    .unwrap();
    let pair = create_theme(Some(&config));
    let typography = tint_theme::TypographyTokens::default();
    let title = pair.light.components.text.style_for("title", &typography);
    assert_eq!(title.font_size, 28.0);
    // the rest of the builtin title variant survives the merge
    let builtin = typography.builtin_variant("title").unwrap();
    assert_eq!(title.font_weight, builtin.font_weight);
}

#[test]
fn define_theme_fallbacks_are_mode_local() {
    let config = DefineThemeConfig::from_toml_str(
        "[light]\nprimary = \"#112233\"\n\n[dark]\nbackground = \"#101010\"\n",
    )
    .unwrap();
    let pair = define_theme(&config);
    assert_eq!(pair.light.primary, Color::from_hex(0x112233));
    // dark.primary falls back to the dark default, never to light's value
    assert_eq!(pair.dark.primary, DEFAULT_DARK.primary);
    assert_eq!(pair.dark.background, Color::from_hex(0x101010));
    assert_eq!(pair.light.background, DEFAULT_LIGHT.background);
}

#[test]
fn define_theme_components_are_per_mode() {
    let config = DefineThemeConfig::from_toml_str(
        "[light.components.input]\nborder_radius = 0.0\n\n[dark]\n",
    )
    .unwrap();
    let pair = define_theme(&config);
    assert_eq!(pair.light.components.input.border_radius(), 0.0);
    assert_eq!(
        pair.dark.components.input.border_radius(),
        InputTheme::boxed().border_radius()
    );
}

#[test]
fn empty_component_override_is_identity() {
    let with_empty = {
        let config = ThemeConfig {
            components: Some(ComponentOverrides::default()),
            ..ThemeConfig::default()
        };
        create_theme(Some(&config))
    };
    let without = create_theme(None);
    assert_eq!(with_empty.light, without.light);
    assert_eq!(with_empty.dark, without.dark);
}
