//! Reusable UI pieces for Breadit pages.
//!
//! Components are plain values handed to askama templates; they carry the
//! data a template needs and never touch a store themselves.

mod account_menu;
mod button;
mod editor;
mod form;
mod icons;
mod nav;
mod search;

pub use account_menu::AccountMenu;
pub use button::{button_variants, ButtonSize, ButtonStyle, ButtonVariant, SubmitButton};
pub use editor::Editor;
pub use form::{FormHandle, POST_FORM};
pub use icons::LOGO_SVG;
pub use nav::{AccountControl, Brand, Navbar, SignInLink};
pub use search::SearchBar;
