//! 页面状态模块

mod submissions;

pub use submissions::{Submission, SubmissionsState};
