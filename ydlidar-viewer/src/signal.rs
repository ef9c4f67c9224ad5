use crate::error::ViewerError;
use crossbeam_channel::{bounded, Receiver};

/// Installs a Ctrl-C/SIGTERM handler that sends `true` on the returned channel.
pub fn install_interrupt_handler() -> Result<Receiver<bool>, ViewerError> {
    let (terminator_tx, terminator_rx) = bounded(1);
    ctrlc::set_handler(move || {
        log::info!("Received interrupt signal");
        // A pending request is already enough to stop the loop.
        terminator_tx.try_send(true).ok();
    })?;
    Ok(terminator_rx)
}

pub(crate) fn do_terminate(terminator_rx: &Receiver<bool>) -> bool {
    terminator_rx.try_recv().unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_do_terminate() {
        let (tx, rx) = bounded(1);
        assert!(!do_terminate(&rx));
        tx.send(true).unwrap();
        assert!(do_terminate(&rx));
        assert!(!do_terminate(&rx));
        drop(tx);
        assert!(!do_terminate(&rx));
    }
}
