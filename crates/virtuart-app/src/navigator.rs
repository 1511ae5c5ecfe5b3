//! Outbound navigation.
//!
//! The page only decides *where* a link goes. Following it is up to the host,
//! which plugs in a [`Navigator`].

use tracing::info;
use virtuart_core::Route;

/// Receives followed links
pub trait Navigator: Send {
    fn navigate(&mut self, route: Route);
}

/// Navigator that records the last route and logs each visit
#[derive(Debug, Default)]
pub struct LogNavigator {
    last: Option<Route>,
}

impl LogNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<Route> {
        self.last
    }
}

impl Navigator for LogNavigator {
    fn navigate(&mut self, route: Route) {
        info!("Following link to {}", route.path());
        self.last = Some(route);
    }
}
