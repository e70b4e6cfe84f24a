//! Owned form records for the auth pages. Each page keeps one record in a signal
//! and replaces it wholesale on input; `validate` runs the checks in a fixed
//! order, stops at the first failure and yields the request payload.

use crate::features::auth::{
    types::{
        Country, ForgotPasswordRequest, Gender, LoginRequest, RegisterRequest,
        ResetPasswordRequest, Role,
    },
    validation::{
        ValidationError, format_phone_number, normalize_email, require, validate_email,
        validate_password, validate_passwords_match, validate_phone,
    },
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub firstname: String,
    pub lastname: String,
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub country: Country,
    pub password: String,
    pub confirm_password: String,
    pub gender: Option<Gender>,
    pub role: Option<Role>,
}

impl SignupForm {
    pub fn set_firstname(&mut self, value: String) {
        self.firstname = value;
    }

    pub fn set_lastname(&mut self, value: String) {
        self.lastname = value;
    }

    pub fn set_username(&mut self, value: String) {
        self.username = value;
    }

    pub fn set_email(&mut self, value: String) {
        self.email = value;
    }

    /// Stores the phone number reformatted as `XXX-XXX-XXXX`.
    pub fn set_phone_number(&mut self, raw: &str) {
        self.phone_number = format_phone_number(raw);
    }

    pub fn set_country(&mut self, country: Country) {
        self.country = country;
    }

    pub fn set_password(&mut self, value: String) {
        self.password = value;
    }

    pub fn set_confirm_password(&mut self, value: String) {
        self.confirm_password = value;
    }

    pub fn set_gender(&mut self, gender: Option<Gender>) {
        self.gender = gender;
    }

    pub fn set_role(&mut self, role: Option<Role>) {
        self.role = role;
    }

    pub fn validate(&self) -> Result<RegisterRequest, ValidationError> {
        require("First name", &self.firstname)?;
        require("Last name", &self.lastname)?;
        require("Username", &self.username)?;
        validate_email(&self.email)?;
        require("Phone number", &self.phone_number)?;
        validate_phone(&self.phone_number)?;
        let gender = self.gender.ok_or(ValidationError::Required("Gender"))?;
        let role = self.role.ok_or(ValidationError::Required("Role"))?;
        require("Password", &self.password)?;
        validate_passwords_match(&self.password, &self.confirm_password)?;
        validate_password(&self.password)?;

        Ok(RegisterRequest {
            firstname: self.firstname.trim().to_string(),
            lastname: self.lastname.trim().to_string(),
            username: self.username.trim().to_string(),
            email: normalize_email(&self.email),
            phone_number: self.phone_number.clone(),
            country_code: self.country.dial_code().to_string(),
            password: self.password.clone(),
            gender,
            role,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn set_email(&mut self, value: String) {
        self.email = value;
    }

    pub fn set_password(&mut self, value: String) {
        self.password = value;
    }

    pub fn validate(&self) -> Result<LoginRequest, ValidationError> {
        validate_email(&self.email)?;
        require("Password", &self.password)?;

        Ok(LoginRequest {
            email: normalize_email(&self.email),
            password: self.password.clone(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl ForgotPasswordForm {
    pub fn set_email(&mut self, value: String) {
        self.email = value;
    }

    pub fn validate(&self) -> Result<ForgotPasswordRequest, ValidationError> {
        validate_email(&self.email)?;
        Ok(ForgotPasswordRequest {
            email: normalize_email(&self.email),
        })
    }
}

/// The token comes from the page URL, never from user input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResetPasswordForm {
    pub token: Option<String>,
    pub password: String,
    pub confirm_password: String,
}

impl ResetPasswordForm {
    pub fn with_token(token: Option<String>) -> Self {
        Self {
            token,
            ..Self::default()
        }
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn set_password(&mut self, value: String) {
        self.password = value;
    }

    pub fn set_confirm_password(&mut self, value: String) {
        self.confirm_password = value;
    }

    pub fn validate(&self) -> Result<ResetPasswordRequest, ValidationError> {
        require("Password", &self.password)?;
        validate_passwords_match(&self.password, &self.confirm_password)?;
        let token = self
            .token
            .clone()
            .ok_or(ValidationError::MissingResetToken)?;
        validate_password(&self.password)?;

        Ok(ResetPasswordRequest {
            token,
            new_password: self.password.clone(),
        })
    }
}

/// Trims the `token` query value; blank counts as absent.
pub fn normalize_token(token: Option<String>) -> Option<String> {
    token
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
pub(crate) fn valid_signup() -> SignupForm {
    let mut form = SignupForm::default();
    form.set_firstname("Ama".to_string());
    form.set_lastname("Mensah".to_string());
    form.set_username("ama".to_string());
    form.set_email(" Ama@JinVa.app ".to_string());
    form.set_phone_number("0241234567");
    form.set_country(Country::Ghana);
    form.set_password("abc12345!".to_string());
    form.set_confirm_password("abc12345!".to_string());
    form.set_gender(Some(Gender::Female));
    form.set_role(Some(Role::Stylist));
    form
}
