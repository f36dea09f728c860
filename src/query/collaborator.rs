use super::*;
use tokio::sync::mpsc::UnboundedSender;

/// One query handed to the execution backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub text: String,
    pub limit: u32,
    pub page: u32,
}

/// Runs queries somewhere else. Fire-and-forget: results, errors and stale
/// responses are the backend's and the display layer's business.
pub trait QueryExecutor {
    fn query(&mut self, text: &str, limit: u32, page: u32);
}

impl QueryExecutor for UnboundedSender<QueryRequest> {
    fn query(&mut self, text: &str, limit: u32, page: u32) {
        let request = QueryRequest {
            text: text.to_string(),
            limit,
            page,
        };
        if let Err(e) = self.send(request) {
            warn!(text = %e.0.text, "query executor is gone, dropping query");
        }
    }
}

/// The message line under the editor.
pub trait MessageDisplay {
    fn show(&mut self, message: &str);
    fn clear(&mut self);
}

/// Message display that writes to the log; used by the headless shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogMessages;

impl MessageDisplay for LogMessages {
    fn show(&mut self, message: &str) {
        info!("{message}");
    }

    fn clear(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[test]
    fn sender_dispatches_requests() {
        let (mut tx, mut rx) = mpsc::unbounded_channel::<QueryRequest>();
        tx.query("select 1", 10, 2);
        assert_eq!(
            rx.try_recv().ok(),
            Some(QueryRequest {
                text: "select 1".into(),
                limit: 10,
                page: 2
            })
        );
    }

    #[test]
    fn closed_receiver_is_not_fatal() {
        let (mut tx, rx) = mpsc::unbounded_channel::<QueryRequest>();
        drop(rx);
        tx.query("select 1", 10, 0);
    }
}
