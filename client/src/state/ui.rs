//! Local UI chrome state (menu, auth modals, flash banner, hero carousel).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the session store and the
//! page-level fetch state so controls can evolve independently of API data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Auto-advance period of the landing hero carousel.
pub const CAROUSEL_INTERVAL_MS: u32 = 5_000;

/// Which header modal is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthModal {
    Login,
    Signup,
}

/// Header state: mobile menu and login/signup modals.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderUi {
    pub menu_open: bool,
    pub modal: Option<AuthModal>,
    /// Message shown inside the open modal.
    pub error: Option<String>,
    pub busy: bool,
}

impl HeaderUi {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Open `modal`, replacing any other and clearing its error.
    pub fn open(&mut self, modal: AuthModal) {
        self.modal = Some(modal);
        self.error = None;
        self.busy = false;
        self.menu_open = false;
    }

    pub fn close(&mut self) {
        self.modal = None;
        self.error = None;
        self.busy = false;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.busy = false;
    }

    /// A completed signup hands over to the login modal.
    pub fn signup_succeeded(&mut self) {
        self.open(AuthModal::Login);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashTone {
    Success,
    Error,
}

/// One-shot banner shown after a navigation or a back-office action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flash {
    pub tone: FlashTone,
    pub text: String,
}

impl Flash {
    pub fn success(text: impl Into<String>) -> Self {
        Self { tone: FlashTone::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { tone: FlashTone::Error, text: text.into() }
    }

    pub fn css_class(&self) -> &'static str {
        match self.tone {
            FlashTone::Success => "flash flash--success",
            FlashTone::Error => "flash flash--error",
        }
    }
}

/// Index into a fixed, looping slide list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(self) -> usize {
        self.index
    }

    pub fn advance(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn back(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump to `index`; out-of-range values are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}
