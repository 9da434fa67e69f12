use std::fmt;

/// Symbolic name shared by a form and the controls that submit it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct FormHandle(&'static str);

/// The community post form.
pub const POST_FORM: FormHandle = FormHandle("subreddit-post-form");

impl FormHandle {
    /// Element id used for both `<form id>` and `<button form>`.
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FormHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
