use crate::*;
use std::{cell::RefCell, rc::Rc};
use test_context::TestContext;
pub use test_context::test_context;
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// A query session over an in-memory surface for the `sales` sheet, with the
/// executor and message display wired to things a test can inspect.
pub struct SessionTest {
    pub session: QuerySessionController<BufferSurface>,
    pub rx: UnboundedReceiver<QueryRequest>,
    pub messages: RecordingMessages,
}

impl SessionTest {
    /// Everything sent to the executor since the last call.
    pub fn dispatched(&mut self) -> Vec<QueryRequest> {
        std::iter::from_fn(|| self.rx.try_recv().ok()).collect()
    }
}

impl TestContext for SessionTest {
    fn setup() -> Self {
        crate::testing::common_init();
        let (tx, rx) = mpsc::unbounded_channel();
        let messages = RecordingMessages::default();
        let session = QuerySessionController::builder()
            .surface(BufferSurface::new())
            .sheet_name("sales")
            .executor(tx)
            .messages(messages.clone())
            .build()
            .expect("session should build");

        Self {
            session,
            rx,
            messages,
        }
    }

    fn teardown(mut self) {
        let leftover = self.dispatched();
        if !leftover.is_empty() {
            trace!("{} undrained queries at teardown", leftover.len());
        }
    }
}

#[derive(Debug, Default)]
struct Recorded {
    shown: Vec<String>,
    cleared: usize,
}

/// Message display that remembers what it was told. Clones share one record.
#[derive(Debug, Clone, Default)]
pub struct RecordingMessages(Rc<RefCell<Recorded>>);

impl RecordingMessages {
    pub fn shown(&self) -> Vec<String> {
        self.0.borrow().shown.clone()
    }

    pub fn cleared(&self) -> usize {
        self.0.borrow().cleared
    }
}

impl MessageDisplay for RecordingMessages {
    fn show(&mut self, message: &str) {
        self.0.borrow_mut().shown.push(message.to_string());
    }

    fn clear(&mut self) {
        self.0.borrow_mut().cleared += 1;
    }
}
