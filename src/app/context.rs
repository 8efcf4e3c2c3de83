use crate::ports::{Console, GistClient};

/// Application context holding dependencies for command execution.
pub struct AppContext<G: GistClient, C: Console> {
    client: G,
    console: C,
}

impl<G: GistClient, C: Console> AppContext<G, C> {
    /// Create a new application context.
    pub fn new(client: G, console: C) -> Self {
        Self { client, console }
    }

    /// Borrow the client and console together.
    pub fn parts(&mut self) -> (&G, &mut C) {
        (&self.client, &mut self.console)
    }

    /// Consume the context, returning the console.
    pub fn into_console(self) -> C {
        self.console
    }
}
