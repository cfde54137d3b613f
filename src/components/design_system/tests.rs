//! Design System Component Tests
//!
//! Unit tests for design system enums, variants, and styling logic.

use crate::components::design_system::badge::BadgeVariant;
use crate::components::design_system::button::ButtonVariant;

// ========================================================================
// ButtonVariant Tests
// ========================================================================

#[test]
fn test_button_variant_default() {
    assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
}

#[test]
fn test_button_variant_classes_non_empty() {
    let variants = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Danger,
        ButtonVariant::Ghost,
    ];

    for variant in variants {
        let class = variant.class();
        assert!(!class.is_empty(), "Variant {:?} should have class", variant);
    }
}

#[test]
fn test_button_variant_classes_unique() {
    let primary = ButtonVariant::Primary.class();
    let secondary = ButtonVariant::Secondary.class();
    let danger = ButtonVariant::Danger.class();
    let ghost = ButtonVariant::Ghost.class();

    assert_ne!(primary, secondary);
    assert_ne!(primary, danger);
    assert_ne!(primary, ghost);
    assert_ne!(secondary, danger);
    assert_ne!(danger, ghost);
}

#[test]
fn test_button_variant_danger_has_red() {
    let class = ButtonVariant::Danger.class();
    assert!(class.contains("red"), "Danger should contain 'red' color");
}

#[test]
fn test_button_variant_ghost_has_hover() {
    let class = ButtonVariant::Ghost.class();
    assert!(class.contains("hover:"), "Ghost variant should have hover styles");
}

// ========================================================================
// BadgeVariant Tests
// ========================================================================

#[test]
fn test_badge_variant_default() {
    assert_eq!(BadgeVariant::default(), BadgeVariant::Default);
}

#[test]
fn test_badge_variant_classes_unique() {
    let default = BadgeVariant::Default.class();
    let success = BadgeVariant::Success.class();
    let warning = BadgeVariant::Warning.class();
    let danger = BadgeVariant::Danger.class();
    let info = BadgeVariant::Info.class();

    assert_ne!(default, success);
    assert_ne!(success, warning);
    assert_ne!(warning, danger);
    assert_ne!(danger, info);
}

#[test]
fn test_badge_variant_success_has_green() {
    let class = BadgeVariant::Success.class();
    assert!(class.contains("green"), "Success should contain 'green' color");
}
