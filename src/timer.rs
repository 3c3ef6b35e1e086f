#![cfg(feature = "std")]

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};

use crate::session::TurnTicket;

/// Deliver `ticket` on `tx` after `delay`.
///
/// The task is never cancelled; a ticket that arrives after its game was
/// replaced is rejected by [`crate::Session::resolve_computer_turn`].
pub fn schedule_computer_turn(
    ticket: TurnTicket,
    delay: Duration,
    tx: UnboundedSender<TurnTicket>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        sleep(delay).await;
        if tx.send(ticket).is_err() {
            log::debug!("computer turn receiver closed");
        }
    })
}
