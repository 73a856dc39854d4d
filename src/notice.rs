use std::sync::Mutex;

use log::info;

pub const NOTICE_PREFIX: &str = "Kenku: ";

/// Fire-and-forget display of a short user-facing message.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Prints notices to stdout.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, message: &str) {
        println!("{}{}", NOTICE_PREFIX, message);
    }
}

/// Logs every notice and keeps it in memory, for hosts that draw their own
/// notification area and poll [`RecordingNotifier::notices`].
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<String> {
        self.notices
            .lock()
            .map(|notices| notices.clone())
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        info!("{}{}", NOTICE_PREFIX, message);
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(message.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::{Notifier, RecordingNotifier};

    #[test]
    fn recording_notifier_keeps_notices_in_order() {
        let recorder = Arc::new(RecordingNotifier::default());
        let notifier: Arc<dyn Notifier> = recorder.clone();

        notifier.notify("Playing playlist 1");
        notifier.notify("Error - 500");

        assert_eq!(
            recorder.notices(),
            vec!["Playing playlist 1".to_string(), "Error - 500".to_string()]
        );
    }
}
