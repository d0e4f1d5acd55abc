//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::{AdminLayout, AppLayout};
use crate::pages::admin::{SearchUsers, UserDetails};
use crate::pages::{ArticleView, Forbidden, Home, Login, NotFound, SetPassword};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Home {},

        #[route("/login")]
        Login {},

        #[route("/set-password")]
        SetPassword {},

        #[route("/articles/:id")]
        ArticleView { id: String },

        #[route("/forbidden")]
        Forbidden {},

        #[nest("/manage-users")]
            #[layout(AdminLayout)]
                #[route("/")]
                SearchUsers {},

                #[route("/:user_id/:account_id")]
                UserDetails { user_id: i64, account_id: String },
            #[end_layout]
        #[end_nest]

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
