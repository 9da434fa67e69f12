use askama::Template;

use crate::frontend::components::{AccountControl, Navbar};
use crate::frontend::pages::{HomePage, SearchPage, SubmitPage};

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub navbar: Navbar,
    pub page: HomePage,
}

#[derive(Template)]
#[template(path = "search.html")]
pub struct SearchTemplate {
    pub navbar: Navbar,
    pub page: SearchPage,
}

#[derive(Template)]
#[template(path = "submit.html")]
pub struct SubmitTemplate {
    pub navbar: Navbar,
    pub page: SubmitPage,
}

#[derive(Template)]
#[template(path = "sign_in.html")]
pub struct SignInTemplate {
    pub navbar: Navbar,
    pub error: Option<String>,
    pub submit_class: String,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate;
