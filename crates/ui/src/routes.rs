use dioxus::prelude::*;
use dioxus_router::Routable;

use crate::views::{LandingView, WorkspaceView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/", LandingView)] Landing {},
    #[route("/app", WorkspaceView)] Workspace {},
}
