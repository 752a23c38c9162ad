//! Ctrl-C handling.
//!
//! The first Ctrl-C raises the quit flag the simulator polls once per
//! tick. A second one exits immediately.

use anyhow::{Context, Result};
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::task::Poll;
use tokio::runtime::Runtime;

type Listener = Pin<Box<dyn Future<Output = std::io::Result<()>> + Send>>;

/// Install the handler and return the flag it raises.
///
/// The process-wide handler is registered before this returns, so an
/// early Ctrl-C lands on the flag instead of killing the process.
pub fn install() -> Result<Arc<AtomicBool>> {
    let flag = Arc::new(AtomicBool::new(false));
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build signal runtime")?;

    let (first, fired) = arm(&runtime)?;
    if fired {
        raise(&flag);
    }

    let raised = Arc::clone(&flag);
    std::thread::Builder::new()
        .name("goalball-ctrl-c".into())
        .spawn(move || {
            runtime.block_on(async move {
                if !fired {
                    if first.await.is_err() {
                        return;
                    }
                    raise(&raised);
                }
                if tokio::signal::ctrl_c().await.is_ok() {
                    std::process::exit(130);
                }
            })
        })
        .context("Failed to spawn signal thread")?;

    Ok(flag)
}

/// Poll a fresh listener once on `runtime`. The first poll registers the
/// signal handler. Returns the listener and whether it already fired.
fn arm(runtime: &Runtime) -> Result<(Listener, bool)> {
    let mut listener: Listener = Box::pin(tokio::signal::ctrl_c());
    let polled = runtime.block_on(std::future::poll_fn(|cx| {
        Poll::Ready(listener.as_mut().poll(cx))
    }));
    match polled {
        Poll::Pending => Ok((listener, false)),
        Poll::Ready(Ok(())) => Ok((listener, true)),
        Poll::Ready(Err(e)) => Err(e).context("Failed to listen for Ctrl-C"),
    }
}

fn raise(flag: &AtomicBool) {
    flag.store(true, Ordering::Relaxed);
    tracing::warn!("Interrupt received, finishing the current tick");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listener_is_registered_before_install_returns() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let (_listener, fired) = arm(&runtime).unwrap();
        assert!(!fired);
    }

    #[test]
    fn install_starts_lowered() {
        let flag = install().unwrap();
        assert!(!flag.load(Ordering::Relaxed));
    }
}
