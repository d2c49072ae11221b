use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::ShowcaseView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", ShowcaseView)] Showcase {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        main { class: "page",
            Outlet::<Route> {}
        }
    }
}
