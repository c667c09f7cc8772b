#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

impl ToastLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastLevel::Success => "success",
            ToastLevel::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

/// Capability to tell the user how an action went.
pub trait Notifier {
    fn success(&mut self, message: &str);
    fn error(&mut self, message: &str);
}

/// Collects toasts for the page that is about to be rendered.
#[derive(Debug, Default)]
pub struct Toasts(Vec<Toast>);

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_vec(self) -> Vec<Toast> {
        self.0
    }

    fn push(&mut self, level: ToastLevel, message: &str) {
        self.0.push(Toast {
            level,
            message: message.to_string(),
        });
    }
}

impl Notifier for Toasts {
    fn success(&mut self, message: &str) {
        tracing::info!(message, "Success toast");
        self.push(ToastLevel::Success, message);
    }

    fn error(&mut self, message: &str) {
        tracing::warn!(message, "Error toast");
        self.push(ToastLevel::Error, message);
    }
}
