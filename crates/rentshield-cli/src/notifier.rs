use async_trait::async_trait;
use rentshield_session::{Notifier, Permission};

/// Prints notifications to the terminal. The permission answer is fixed at startup.
pub struct ConsoleNotifier {
    allow: bool,
}

impl ConsoleNotifier {
    pub fn new(allow: bool) -> Self {
        Self { allow }
    }
}

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn request_permission(&self) -> Permission {
        if self.allow {
            Permission::Granted
        } else {
            Permission::Denied
        }
    }

    fn notify(&self, title: &str, body: &str) {
        println!("[{title}] {body}");
    }
}
