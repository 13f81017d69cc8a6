use crate::config::Config;
use crate::export::UserExport;
use crate::form::{NewUser, User};
use crate::ui::add_user::AddUser;
use crossterm::event::KeyEvent;
use std::sync::mpsc::{self, Receiver};

/// Application shell: owns the form, the users it produced and the export sink.
pub struct App {
    should_quit: bool,
    form: AddUser,
    /// Filled by the form's callback, drained after every input event.
    submissions: Receiver<NewUser>,
    users: Vec<User>,
    export: Option<UserExport>,
    last_export_error: Option<String>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let (tx, rx) = mpsc::channel();
        let form = AddUser::new(move |name, age| {
            // Receiver is owned by the same App as the form, so this cannot fail while it runs
            let _ = tx.send(NewUser { name, age });
        })
        .with_age_policy(config.validation.age_policy);

        Self {
            should_quit: false,
            form,
            submissions: rx,
            users: Vec::new(),
            export: None,
            last_export_error: None,
        }
    }

    pub fn with_export(mut self, export: UserExport) -> Self {
        self.export = Some(export);
        self
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn form(&self) -> &AddUser {
        &self.form
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn last_export_error(&self) -> Option<&str> {
        self.last_export_error.as_deref()
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        self.form.handle_key(key);
        self.collect_submissions();
    }

    pub fn on_paste(&mut self, text: &str) {
        self.form.handle_paste(text);
    }

    fn collect_submissions(&mut self) {
        while let Ok(submission) = self.submissions.try_recv() {
            self.add_user(User::from(submission));
        }
    }

    fn add_user(&mut self, user: User) {
        tracing::info!(id = %user.id, total = self.users.len() + 1, "User added");

        if let Some(export) = self.export.as_mut() {
            match export.append(&user) {
                Ok(()) => self.last_export_error = None,
                Err(err) => {
                    tracing::warn!(error = %err, path = %export.path().display(), "Failed to export user");
                    self.last_export_error = Some(err.to_string());
                }
            }
        }

        self.users.push(user);
    }
}
