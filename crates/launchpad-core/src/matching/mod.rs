//! Path template and feature name utilities.

mod name;
mod template;

pub use name::normalize_feature_name;
pub use template::{
    placeholders, substitute_all, substitute_first, template_matches, TemplateMatch,
};
