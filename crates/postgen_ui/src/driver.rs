//! Sequential request driver for non-interactive hosts.

use crate::{App, Completion, PostgenApi, Request, execute};

/// Run `requests` and every follow-up they trigger, one at a time, until the
/// app is quiet. Returns the number of requests executed.
///
/// Used by the HTML snapshot and tests. Interactive hosts run requests
/// concurrently instead.
pub async fn settle(app: &mut App, api: &dyn PostgenApi, requests: Vec<Request>) -> usize {
    let mut queue = std::collections::VecDeque::from(requests);
    let mut executed = 0;
    while let Some(request) = queue.pop_front() {
        let result = execute(api, &request.call).await;
        executed += 1;
        queue.extend(app.complete(Completion { request, result }));
    }
    tracing::debug!(executed, "Requests settled");
    executed
}
