use crate::frontend::components::FormHandle;

const BASE_CLASSES: &str = "active:scale-95 inline-flex items-center justify-center rounded-md text-sm font-medium transition-colors focus:outline-none focus:ring-2 focus:ring-slate-400 focus:ring-offset-2 disabled:opacity-50 disabled:pointer-events-none";

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Destructive,
    Outline,
    Subtle,
    Ghost,
    Link,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Xs,
    Lg,
}

/// Variant and size of a button-styled element. `ButtonStyle::default()`
/// is the stock appearance.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ButtonStyle {
    pub variant: ButtonVariant,
    pub size: ButtonSize,
}

impl ButtonVariant {
    fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Default => "bg-zinc-900 text-zinc-100 hover:bg-zinc-800",
            ButtonVariant::Destructive => "text-white hover:bg-red-600",
            ButtonVariant::Outline => {
                "bg-zinc-100 text-zinc-900 hover:bg-zinc-200 outline outline-1 outline-zinc-300"
            }
            ButtonVariant::Subtle => "hover:bg-zinc-200 bg-zinc-100 text-zinc-900",
            ButtonVariant::Ghost => "bg-transparent hover:bg-zinc-100 text-zinc-800",
            ButtonVariant::Link => {
                "bg-transparent underline-offset-4 hover:underline text-slate-900 hover:bg-transparent"
            }
        }
    }
}

impl ButtonSize {
    fn classes(self) -> &'static str {
        match self {
            ButtonSize::Default => "h-10 py-2 px-4",
            ButtonSize::Sm => "h-9 px-2 rounded-md",
            ButtonSize::Xs => "h-8 px-1.5 rounded-sm",
            ButtonSize::Lg => "h-11 px-8 rounded-md",
        }
    }
}

/// Class list for anything styled as a button, links included.
pub fn button_variants(style: ButtonStyle) -> String {
    format!(
        "{} {} {}",
        BASE_CLASSES,
        style.variant.classes(),
        style.size.classes()
    )
}

/// Submit control bound to a form by handle rather than by nesting, so it
/// may sit anywhere on the page.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SubmitButton {
    pub form: FormHandle,
    pub label: &'static str,
    pub class: String,
}

impl SubmitButton {
    pub fn new(form: FormHandle, label: &'static str) -> Self {
        let class = format!("{} w-full", button_variants(ButtonStyle::default()));
        Self { form, label, class }
    }
}
