//! Page rendering. Templates are embedded at compile time and rendered
//! through a shared `minijinja` environment; every page extends the same
//! `base.html` shell, whose navigation bar only appears for authenticated
//! sessions. Dates are formatted into view models before they reach a
//! template, so markup stays free of formatting logic.

use minijinja::{Environment, context};
use serde::Serialize;

use mural_types::models::{Message, User};
use mural_types::session::{RegistrationErrors, SessionUser};

/// Greeting line and message timestamps, `dd/mm/yyyy HH:MM`.
const DATETIME_FORMAT: &str = "%d/%m/%Y %H:%M";
/// Birth dates in the user table, `dd/mm/yyyy`.
const DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Serialize)]
struct NavUser {
    username: String,
    last_login: String,
}

impl From<&SessionUser> for NavUser {
    fn from(user: &SessionUser) -> Self {
        Self {
            username: user.username.clone(),
            last_login: user.last_login.format(DATETIME_FORMAT).to_string(),
        }
    }
}

#[derive(Serialize)]
struct UserRow {
    username: String,
    birth_date: String,
    nickname: String,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            birth_date: user
                .birth_date
                .map(|date| date.format(DATE_FORMAT).to_string())
                .unwrap_or_else(|| "Invalid Date".into()),
            nickname: user.nickname.clone(),
        }
    }
}

#[derive(Serialize)]
struct MessageRow {
    username: String,
    message: String,
    sent_at: String,
}

impl From<&Message> for MessageRow {
    fn from(message: &Message) -> Self {
        Self {
            username: message.username.clone(),
            message: message.message.clone(),
            sent_at: message.date.format(DATETIME_FORMAT).to_string(),
        }
    }
}

pub struct Pages {
    env: Environment<'static>,
}

impl Pages {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("base.html", include_str!("../templates/base.html"))?;
        env.add_template("home.html", include_str!("../templates/home.html"))?;
        env.add_template("login.html", include_str!("../templates/login.html"))?;
        env.add_template("cadastro.html", include_str!("../templates/cadastro.html"))?;
        env.add_template("batepapo.html", include_str!("../templates/batepapo.html"))?;
        env.add_template("not_found.html", include_str!("../templates/not_found.html"))?;
        Ok(Self { env })
    }

    pub fn home(&self, user: Option<&SessionUser>) -> Result<String, minijinja::Error> {
        self.env.get_template("home.html")?.render(context! {
            title => "Home",
            user => user.map(NavUser::from),
        })
    }

    pub fn login(&self, user: Option<&SessionUser>) -> Result<String, minijinja::Error> {
        self.env.get_template("login.html")?.render(context! {
            title => "Login",
            user => user.map(NavUser::from),
        })
    }

    pub fn register(
        &self,
        user: Option<&SessionUser>,
        users: &[User],
        errors: Option<&RegistrationErrors>,
    ) -> Result<String, minijinja::Error> {
        self.env.get_template("cadastro.html")?.render(context! {
            title => "Cadastro",
            user => user.map(NavUser::from),
            users => users.iter().map(UserRow::from).collect::<Vec<_>>(),
            errors => errors,
        })
    }

    pub fn chat(
        &self,
        user: Option<&SessionUser>,
        users: &[User],
        messages: &[Message],
    ) -> Result<String, minijinja::Error> {
        self.env.get_template("batepapo.html")?.render(context! {
            title => "Bate papo",
            user => user.map(NavUser::from),
            users => users.iter().map(UserRow::from).collect::<Vec<_>>(),
            messages => messages.iter().map(MessageRow::from).collect::<Vec<_>>(),
        })
    }

    pub fn not_found(&self, user: Option<&SessionUser>) -> Result<String, minijinja::Error> {
        self.env.get_template("not_found.html")?.render(context! {
            title => "Página",
            user => user.map(NavUser::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn pages() -> Pages {
        Pages::new().unwrap()
    }

    fn session_user() -> SessionUser {
        SessionUser {
            username: "admin".into(),
            last_login: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
        }
    }

    fn user(username: &str, nickname: &str) -> User {
        User {
            username: username.into(),
            birth_date: NaiveDate::from_ymd_opt(2000, 1, 15),
            nickname: nickname.into(),
        }
    }

    #[test]
    fn nav_is_shown_only_for_authenticated_sessions() {
        let anonymous = pages().home(None).unwrap();
        assert!(!anonymous.contains("Sair"));

        let authenticated = pages().home(Some(&session_user())).unwrap();
        assert!(authenticated.contains("Olá, admin"));
        assert!(authenticated.contains("Último login: 01/03/2024 09:30"));
        assert!(authenticated.contains(r#"<a href="/logout">Sair</a>"#));
    }

    #[test]
    fn register_page_lists_users_with_formatted_birth_dates() {
        let users = [user("joe", "J"), user("ana", "A")];
        let html = pages().register(Some(&session_user()), &users, None).unwrap();

        assert!(html.contains("<td>joe</td>"));
        assert!(html.contains("<td>ana</td>"));
        assert!(html.contains("<td>15/01/2000</td>"));
    }

    #[test]
    fn register_page_shows_invalid_date_for_unset_birth_dates() {
        let users = [User {
            username: "joe".into(),
            birth_date: None,
            nickname: "J".into(),
        }];
        let html = pages().register(None, &users, None).unwrap();

        assert!(html.contains("<td>joe</td>"));
        assert!(html.contains("<td>Invalid Date</td>"));
    }

    #[test]
    fn register_page_shows_only_present_field_errors() {
        let errors = RegistrationErrors {
            data: Some("Data de nascimento é obrigatório".into()),
            ..Default::default()
        };
        let html = pages()
            .register(Some(&session_user()), &[], Some(&errors))
            .unwrap();

        assert!(html.contains("Data de nascimento é obrigatório"));
        assert!(!html.contains("Usuário é obrigatório"));
        assert!(!html.contains("Apelido é obrigatório"));
    }

    #[test]
    fn chat_page_renders_selector_and_history() {
        let users = [user("joe", "J")];
        let messages = [Message {
            username: "joe".into(),
            message: "hi".into(),
            date: Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap(),
        }];
        let html = pages()
            .chat(Some(&session_user()), &users, &messages)
            .unwrap();

        assert!(html.contains(r#"<option value="joe">joe</option>"#));
        assert!(html.contains("joe - hi - enviado em 01/03/2024 10:00"));
    }

    #[test]
    fn message_text_is_html_escaped() {
        let users = [user("joe", "J")];
        let messages = [Message {
            username: "joe".into(),
            message: "<script>alert(1)</script>".into(),
            date: Utc::now(),
        }];
        let html = pages().chat(None, &users, &messages).unwrap();

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
