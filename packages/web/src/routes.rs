//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::AdminLayout;
use crate::pages::admin::{AdminDashboard, AdminLogin, AdminReview, AdminReviewDetail};
use crate::pages::public::{Home, ResourceDetail, StudyMaterials, Submit, Syllabus};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    // Public routes
    #[route("/")]
    Home {},

    #[route("/materials?:q&:category")]
    StudyMaterials { q: String, category: String },

    #[route("/syllabus")]
    Syllabus {},

    #[route("/resource/:id")]
    ResourceDetail { id: String },

    #[route("/submit")]
    Submit {},

    // Admin routes
    #[route("/admin/login")]
    AdminLogin {},

    #[nest("/admin")]
        #[layout(AdminLayout)]
            #[route("/dashboard")]
            AdminDashboard {},

            #[route("/review")]
            AdminReview {},

            #[route("/review/:id")]
            AdminReviewDetail { id: String },
}
