pub mod resume;
pub mod skill;
pub mod github;
pub mod leetcode;
pub mod rating;

pub use resume::*;
pub use skill::*;
pub use github::*;
pub use leetcode::*;
pub use rating::*;
