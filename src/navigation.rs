/// Where the user lands after a recipient has been updated.
pub const RECIPIENT_LIST_ROUTE: &str = "/recipients";

/// Capability to move the user to another page.
pub trait Navigator {
    fn push(&mut self, route: &str);
}

/// Records the route to hand to htmx through the `HX-Redirect` header.
#[derive(Debug, Default)]
pub struct HxRedirect(Option<String>);

impl HxRedirect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl Navigator for HxRedirect {
    fn push(&mut self, route: &str) {
        tracing::info!(route, "Redirecting");
        self.0 = Some(route.to_string());
    }
}
