//! Shared UI themes and Tailwind class constants to ensure visual consistency
//! across the auth screens.

pub struct Theme;

impl Theme {
    /// Card that hosts a single auth form.
    pub const CARD: &'static str = "w-full max-w-md rounded-2xl border border-slate-200 bg-white/90 p-6 shadow-[0_20px_60px_-40px_rgba(15,23,42,0.35)] backdrop-blur sm:p-8";

    pub const EYEBROW: &'static str =
        "text-[11px] font-semibold uppercase tracking-[0.2em] text-slate-400";

    pub const TITLE: &'static str = "text-2xl font-semibold text-slate-900";

    pub const SUBTITLE: &'static str = "text-sm text-slate-500";

    pub const LABEL: &'static str = "block mb-2 text-sm font-medium text-slate-700";

    pub const INPUT: &'static str = "w-full rounded-xl border border-slate-200 bg-slate-50 px-3 py-2.5 text-sm text-slate-900 focus:border-slate-400 focus:ring-2 focus:ring-slate-200";

    /// Select sharing the input look; used for gender, role and country.
    pub const SELECT: &'static str = "w-full rounded-xl border border-slate-200 bg-slate-50 px-3 py-2.5 text-sm text-slate-900 focus:border-slate-400 focus:ring-2 focus:ring-slate-200";

    pub const LINK: &'static str = "font-medium text-blue-700 hover:underline";

    /// Secondary button for social signup and resend actions.
    pub const OUTLINE_BUTTON: &'static str = "inline-flex w-full items-center justify-center gap-2 rounded-lg border border-slate-200 bg-white px-5 py-2.5 text-sm font-medium text-slate-700 hover:bg-slate-50 disabled:cursor-not-allowed disabled:opacity-70";
}
