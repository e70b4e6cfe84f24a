mod alert;
mod button;
mod password_input;
mod phone_input;
mod spinner;
mod toaster;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use button::Button;
pub(crate) use password_input::PasswordInput;
pub(crate) use phone_input::PhoneInput;
pub(crate) use spinner::Spinner;
pub(crate) use toaster::{Toaster, provide_toaster, use_toaster};
