//! 类型定义

mod field;
mod form_data;

pub use field::{experience_label, ExperienceOption, Field, EXPERIENCE_OPTIONS};
pub use form_data::FormData;
