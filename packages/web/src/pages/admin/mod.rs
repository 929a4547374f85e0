mod dashboard;
mod login;
mod review;

pub use dashboard::AdminDashboard;
pub use login::AdminLogin;
pub use review::{AdminReview, AdminReviewDetail};
