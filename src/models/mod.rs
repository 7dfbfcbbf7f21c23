mod subscription;
mod user;
mod user_preferences;
mod user_trial;

pub use subscription::*;
pub use user::*;
pub use user_preferences::*;
pub use user_trial::*;
