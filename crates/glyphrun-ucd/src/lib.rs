#![forbid(unsafe_code)]

//! Unicode character properties needed for run segmentation.
//!
//! Two properties drive segmentation:
//! - [`Script`] via [`script`]: which writing system a codepoint belongs to.
//! - [`EmojiSegmentationCategory`] via [`emoji_segmentation_category`]: the
//!   codepoint's role in the emoji sequence grammar.
//!
//! Both are compact hand-maintained range tables. They cover what terminal
//! and UI text needs, not the full UCD. [`CharProperties`] is the seam for
//! swapping in other tables.

pub mod emoji;
pub mod properties;
pub mod script;

pub use emoji::{
    EmojiSegmentationCategory, emoji_segmentation_category, is_emoji, is_emoji_component,
    is_emoji_keycap_base, is_emoji_modifier, is_emoji_modifier_base, is_emoji_presentation,
    is_regional_indicator,
};
pub use properties::{CharProperties, UnicodeProperties};
pub use script::{Script, script};
