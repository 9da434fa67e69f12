use crate::frontend::components::{button_variants, AccountMenu, ButtonStyle, SearchBar, LOGO_SVG};
use crate::models::Session;

pub const SIGN_IN_PATH: &str = "/sign-in";

/// Logo plus site name; the name is hidden on narrow viewports by the template.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Brand {
    pub name: &'static str,
    pub href: &'static str,
    pub logo_svg: &'static str,
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            name: "Breadit",
            href: "/",
            logo_svg: LOGO_SVG,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignInLink {
    pub href: &'static str,
    pub class: String,
}

/// The identity-dependent slot of the navbar. Exactly one branch renders.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AccountControl {
    Menu(AccountMenu),
    SignIn(SignInLink),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Navbar {
    pub brand: Brand,
    pub search: SearchBar,
    pub account: AccountControl,
}

impl Navbar {
    /// Builds the navbar for an already resolved session.
    pub fn for_session(session: &Session) -> Self {
        let account = match &session.user {
            Some(user) => AccountControl::Menu(AccountMenu::new(user.clone())),
            None => AccountControl::SignIn(SignInLink {
                href: SIGN_IN_PATH,
                class: button_variants(ButtonStyle::default()),
            }),
        };

        Self {
            brand: Brand::default(),
            search: SearchBar::default(),
            account,
        }
    }

    pub fn shows_account_menu(&self) -> bool {
        matches!(self.account, AccountControl::Menu(_))
    }

    pub fn shows_sign_in(&self) -> bool {
        matches!(self.account, AccountControl::SignIn(_))
    }
}
