use crate::commands::CmdMessage;

/// Sink for user-facing feedback (confirmations and input errors).
///
/// Each call stands for one blocking popup: the page hands over a message
/// and continues once `notify` returns.
pub trait Notifier {
    fn notify(&mut self, message: &CmdMessage);
}

/// Keeps every message, in order. Used by tests and by clients that render
/// feedback after the event has been handled.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub messages: Vec<CmdMessage>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> Vec<CmdMessage> {
        std::mem::take(&mut self.messages)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &CmdMessage) {
        self.messages.push(message.clone());
    }
}
