//! Lint rule implementations.
//!
//! Most rules are declarative labelling policies; the structural rules at
//! the bottom carry their own logic.

mod avatar_needs_name;
mod breadcrumb_needs_labelling;
mod checkbox_needs_labelling;
mod combobox_needs_labelling;
mod compound_button_needs_labelling;
mod dialog_surface_needs_aria;
mod dropdown_needs_labelling;
mod input_components_require_accessible_name;
mod link_missing_labelling;
mod menu_item_needs_labelling;
mod progressbar_needs_labelling;
mod radio_button_missing_label;
mod radio_group_missing_label;
mod slider_needs_labelling;
mod spin_button_needs_labelling;
mod spinner_needs_labelling;
mod switch_needs_labelling;
mod tab_needs_labelling;
mod tablist_needs_labelling;
mod toolbar_missing_aria;

mod accordion_item_needs_header_and_panel;
mod badge_needs_accessible_name;
mod image_needs_alt;

pub use avatar_needs_name::avatar_needs_name;
pub use breadcrumb_needs_labelling::breadcrumb_needs_labelling;
pub use checkbox_needs_labelling::checkbox_needs_labelling;
pub use combobox_needs_labelling::combobox_needs_labelling;
pub use compound_button_needs_labelling::compound_button_needs_labelling;
pub use dialog_surface_needs_aria::dialog_surface_needs_aria;
pub use dropdown_needs_labelling::dropdown_needs_labelling;
pub use input_components_require_accessible_name::input_components_require_accessible_name;
pub use link_missing_labelling::link_missing_labelling;
pub use menu_item_needs_labelling::menu_item_needs_labelling;
pub use progressbar_needs_labelling::progressbar_needs_labelling;
pub use radio_button_missing_label::radio_button_missing_label;
pub use radio_group_missing_label::radio_group_missing_label;
pub use slider_needs_labelling::slider_needs_labelling;
pub use spin_button_needs_labelling::spin_button_needs_labelling;
pub use spinner_needs_labelling::spinner_needs_labelling;
pub use switch_needs_labelling::switch_needs_labelling;
pub use tab_needs_labelling::tab_needs_labelling;
pub use tablist_needs_labelling::tablist_needs_labelling;
pub use toolbar_missing_aria::toolbar_missing_aria;

pub use accordion_item_needs_header_and_panel::AccordionItemNeedsHeaderAndPanel;
pub use badge_needs_accessible_name::BadgeNeedsAccessibleName;
pub use image_needs_alt::ImageNeedsAlt;
