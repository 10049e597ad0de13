use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::User;
use crate::session::RegistrationErrors;

// Browser form posts may omit fields entirely, so every field defaults to
// an empty string and validation treats missing and empty the same way.

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub username: String,
    /// Birth date as submitted by an `<input type="date">`, ISO `YYYY-MM-DD`.
    #[serde(default)]
    pub data: String,
    #[serde(default)]
    pub nickname: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatForm {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub username: String,
}

impl RegisterForm {
    /// Presence check on all three fields. Validation is presence only:
    /// a non-empty birth date that does not parse still registers the
    /// user, with `birth_date` left unset. Duplicate usernames are
    /// deliberately not rejected.
    pub fn validate(&self) -> Result<User, RegistrationErrors> {
        let mut errors = RegistrationErrors::default();

        if self.username.is_empty() {
            errors.username = Some("Usuário é obrigatório".into());
        }
        if self.data.is_empty() {
            errors.data = Some("Data de nascimento é obrigatório".into());
        }
        if self.nickname.is_empty() {
            errors.nickname = Some("Apelido é obrigatório".into());
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(User {
            username: self.username.clone(),
            birth_date: NaiveDate::parse_from_str(&self.data, "%Y-%m-%d").ok(),
            nickname: self.nickname.clone(),
        })
    }
}
