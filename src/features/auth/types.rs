//! Request and response types for auth-related API calls, plus the closed sets
//! the signup form chooses from. Payloads carry passwords and verification
//! tokens, so they must never be logged.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    /// Wire value, also used as the `<option>` value.
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
            Gender::Other => "OTHER",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Customer,
    Stylist,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Customer, Role::Stylist, Role::Admin];
    /// Roles offered on the public signup form. Admins are provisioned by the backend.
    pub const SELF_SERVICE: [Role; 2] = [Role::Customer, Role::Stylist];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Customer => "CUSTOMER",
            Role::Stylist => "STYLIST",
            Role::Admin => "ADMIN",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Customer => "Customer",
            Role::Stylist => "Stylist",
            Role::Admin => "Admin",
        }
    }
}

/// Error for select values outside a closed set.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown choice `{0}`")]
pub struct UnknownChoice(pub String);

impl FromStr for Gender {
    type Err = UnknownChoice;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .into_iter()
            .find(|gender| gender.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| UnknownChoice(value.to_string()))
    }
}

impl FromStr for Role {
    type Err = UnknownChoice;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| UnknownChoice(value.to_string()))
    }
}

/// Dial codes offered by the phone input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Country {
    #[default]
    Benin,
    BurkinaFaso,
    CapeVerde,
    CoteDIvoire,
    Gambia,
    Ghana,
    Guinea,
    GuineaBissau,
    Liberia,
    Mali,
    Mauritania,
    Niger,
    Nigeria,
    Senegal,
    SierraLeone,
    Togo,
}

impl Country {
    pub const ALL: [Country; 16] = [
        Country::Benin,
        Country::BurkinaFaso,
        Country::CapeVerde,
        Country::CoteDIvoire,
        Country::Gambia,
        Country::Ghana,
        Country::Guinea,
        Country::GuineaBissau,
        Country::Liberia,
        Country::Mali,
        Country::Mauritania,
        Country::Niger,
        Country::Nigeria,
        Country::Senegal,
        Country::SierraLeone,
        Country::Togo,
    ];

    pub fn dial_code(self) -> &'static str {
        match self {
            Country::Benin => "+229",
            Country::BurkinaFaso => "+226",
            Country::CapeVerde => "+238",
            Country::CoteDIvoire => "+225",
            Country::Gambia => "+220",
            Country::Ghana => "+233",
            Country::Guinea => "+224",
            Country::GuineaBissau => "+245",
            Country::Liberia => "+231",
            Country::Mali => "+223",
            Country::Mauritania => "+222",
            Country::Niger => "+227",
            Country::Nigeria => "+234",
            Country::Senegal => "+221",
            Country::SierraLeone => "+232",
            Country::Togo => "+228",
        }
    }

    /// ISO 3166-1 alpha-2 code.
    pub fn iso_code(self) -> &'static str {
        match self {
            Country::Benin => "BJ",
            Country::BurkinaFaso => "BF",
            Country::CapeVerde => "CV",
            Country::CoteDIvoire => "CI",
            Country::Gambia => "GM",
            Country::Ghana => "GH",
            Country::Guinea => "GN",
            Country::GuineaBissau => "GW",
            Country::Liberia => "LR",
            Country::Mali => "ML",
            Country::Mauritania => "MR",
            Country::Niger => "NE",
            Country::Nigeria => "NG",
            Country::Senegal => "SN",
            Country::SierraLeone => "SL",
            Country::Togo => "TG",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Country::Benin => "Benin",
            Country::BurkinaFaso => "Burkina Faso",
            Country::CapeVerde => "Cape Verde",
            Country::CoteDIvoire => "Côte d'Ivoire",
            Country::Gambia => "Gambia",
            Country::Ghana => "Ghana",
            Country::Guinea => "Guinea",
            Country::GuineaBissau => "Guinea-Bissau",
            Country::Liberia => "Liberia",
            Country::Mali => "Mali",
            Country::Mauritania => "Mauritania",
            Country::Niger => "Niger",
            Country::Nigeria => "Nigeria",
            Country::Senegal => "Senegal",
            Country::SierraLeone => "Sierra Leone",
            Country::Togo => "Togo",
        }
    }

    /// Regional-indicator flag derived from the ISO code.
    pub fn flag(self) -> String {
        self.iso_code()
            .chars()
            .filter_map(|letter| char::from_u32(0x1F1E6 + (letter as u32 - 'A' as u32)))
            .collect()
    }

    /// Looks a country up by ISO code, the value used by the `<select>`.
    pub fn from_iso(code: &str) -> Option<Country> {
        Country::ALL
            .into_iter()
            .find(|country| country.iso_code().eq_ignore_ascii_case(code.trim()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
    Facebook,
}

impl OAuthProvider {
    pub const ALL: [OAuthProvider; 2] = [OAuthProvider::Google, OAuthProvider::Facebook];

    /// Path segment for `/auth/oauth/{provider}`.
    pub fn slug(self) -> &'static str {
        match self {
            OAuthProvider::Google => "google",
            OAuthProvider::Facebook => "facebook",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OAuthProvider::Google => "Continue with Google",
            OAuthProvider::Facebook => "Continue with Facebook",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub firstname: String,
    pub lastname: String,
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub country_code: String,
    pub password: String,
    pub gender: Gender,
    pub role: Role,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VerifyEmailRequest {
    pub token: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthStartResponse {
    pub auth_url: String,
}
