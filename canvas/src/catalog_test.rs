use super::*;

// =============================================================
// Category
// =============================================================

#[test]
fn category_serde_lowercase() {
    let json = serde_json::to_string(&Category::Furniture).unwrap();
    assert_eq!(json, "\"furniture\"");
    let back: Category = serde_json::from_str("\"zone\"").unwrap();
    assert_eq!(back, Category::Zone);
}

#[test]
fn category_rejects_unknown_name() {
    assert!(serde_json::from_str::<Category>("\"spaceship\"").is_err());
    assert_eq!("spaceship".parse::<Category>(), Err(UnknownCategory("spaceship".into())));
}

#[test]
fn category_parse_matches_display() {
    for c in [Category::Building, Category::Transport, Category::Nature, Category::Furniture, Category::Zone] {
        assert_eq!(c.to_string().parse::<Category>(), Ok(c));
    }
}

// =============================================================
// Default tables
// =============================================================

#[test]
fn sizes_for_known_subtypes() {
    assert_eq!(default_size("road"), Some((200.0, 40.0)));
    assert_eq!(default_size("parking"), Some((150.0, 100.0)));
    assert_eq!(default_size("bus"), Some((40.0, 25.0)));
    assert_eq!(default_size("lamp"), Some((10.0, 10.0)));
    assert_eq!(default_size("tree"), Some((30.0, 30.0)));
}

#[test]
fn size_unknown_for_generic_subtypes() {
    assert_eq!(default_size("shop"), None);
    assert_eq!(default_size(""), None);
}

#[test]
fn subtype_colors_override_category() {
    assert_eq!(default_color(Category::Transport, "road"), "#404040");
    assert_eq!(default_color(Category::Transport, "parking"), "#606060");
    assert_eq!(default_color(Category::Zone, "sidewalk"), "#D3D3D3");
}

#[test]
fn category_colors() {
    assert_eq!(default_color(Category::Building, "shop"), "#8B4513");
    assert_eq!(default_color(Category::Transport, "car"), "#696969");
    assert_eq!(default_color(Category::Nature, "tree"), "#228B22");
    assert_eq!(default_color(Category::Furniture, "bench"), "#4682B4");
    assert_eq!(default_color(Category::Zone, "plaza"), "#FFD700");
}

#[test]
fn names_fall_back_to_object() {
    assert_eq!(default_name("shop"), "Shop");
    assert_eq!(default_name("loading"), "Loading zone");
    assert_eq!(default_name("unheard-of"), "Object");
}

// =============================================================
// Summary buckets
// =============================================================

#[test]
fn buckets_are_mutually_exclusive() {
    assert_eq!(area_bucket(Category::Building, "parking"), Some(AreaBucket::Building));
    assert_eq!(area_bucket(Category::Transport, "parking"), Some(AreaBucket::Parking));
    assert_eq!(area_bucket(Category::Transport, "road"), None);
    assert_eq!(area_bucket(Category::Nature, "tree"), Some(AreaBucket::Green));
    assert_eq!(area_bucket(Category::Zone, "parking"), None);
    assert_eq!(area_bucket(Category::Furniture, "bench"), None);
}

#[test]
fn surface_label_categories() {
    assert!(shows_surface(Category::Building, "shop"));
    assert!(shows_surface(Category::Zone, "plaza"));
    assert!(shows_surface(Category::Transport, "parking"));
    assert!(!shows_surface(Category::Transport, "road"));
    assert!(!shows_surface(Category::Nature, "park"));
}
