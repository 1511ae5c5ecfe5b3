//! Lifecycle of the gallery screen.
//!
//! Mounting the gallery acquires its background producers: the carousel
//! auto-advance timer and the input listener. Both are scoped to the
//! [`GalleryMount`]; unmounting (or dropping it) releases them, after which
//! no further messages are produced on their behalf.

use tokio::sync::mpsc;
use tracing::info;

use crate::config::Settings;
use crate::message::Message;
use crate::subscription::{spawn_auto_advance, Subscription};

/// Source of input messages (key presses, pointer events).
///
/// The terminal implementation lives in the TUI crate; tests plug in fakes.
pub trait EventSource {
    /// Start listening, forwarding messages to `tx` until the returned
    /// subscription is shut down.
    fn listen(self, tx: mpsc::Sender<Message>) -> Subscription;
}

/// Subscriptions owned by a mounted gallery screen
#[derive(Debug)]
pub struct GalleryMount {
    auto_advance: Option<Subscription>,
    listener: Option<Subscription>,
}

impl GalleryMount {
    /// Acquire the screen's subscriptions
    pub fn mount<S: EventSource>(settings: &Settings, source: S, tx: mpsc::Sender<Message>) -> Self {
        let auto_advance = if settings.autoplay.enabled {
            Some(spawn_auto_advance(settings.autoplay.interval(), tx.clone()))
        } else {
            None
        };
        let listener = Some(source.listen(tx));

        info!(
            "Gallery mounted (autoplay: {})",
            if auto_advance.is_some() { "on" } else { "off" }
        );

        Self {
            auto_advance,
            listener,
        }
    }

    pub fn is_autoplaying(&self) -> bool {
        self.auto_advance.is_some()
    }

    /// Release every subscription and wait for the tasks to stop
    pub async fn unmount(mut self) {
        if let Some(sub) = self.auto_advance.take() {
            sub.shutdown().await;
        }
        if let Some(sub) = self.listener.take() {
            sub.shutdown().await;
        }
        info!("Gallery unmounted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    /// Listener that never produces input but reports when it is released
    struct FakeSource {
        released: Arc<AtomicBool>,
    }

    struct Release(Arc<AtomicBool>);

    impl Drop for Release {
        fn drop(&mut self) {
            self.0.store(true, Ordering::SeqCst);
        }
    }

    impl EventSource for FakeSource {
        fn listen(self, tx: mpsc::Sender<Message>) -> Subscription {
            let release = Release(self.released);
            Subscription::spawn("fake-input", move |mut shutdown| async move {
                let _release = release;
                let _tx = tx;
                let _ = shutdown.changed().await;
            })
        }
    }

    fn fake() -> (FakeSource, Arc<AtomicBool>) {
        let released = Arc::new(AtomicBool::new(false));
        (
            FakeSource {
                released: released.clone(),
            },
            released,
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_mounted_gallery_auto_advances() {
        let (tx, mut rx) = mpsc::channel(8);
        let (source, _) = fake();
        let mount = GalleryMount::mount(&Settings::default(), source, tx);
        assert!(mount.is_autoplaying());

        tokio::time::sleep(Duration::from_millis(4600)).await;
        assert_eq!(rx.try_recv(), Ok(Message::AutoAdvance));

        mount.unmount().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_while_timer_pending_stops_everything() {
        let (tx, mut rx) = mpsc::channel(8);
        let (source, released) = fake();
        let mount = GalleryMount::mount(&Settings::default(), source, tx);

        // Halfway to the first tick
        tokio::time::sleep(Duration::from_millis(2000)).await;
        mount.unmount().await;

        assert!(released.load(Ordering::SeqCst));

        // Every sender is gone and nothing was produced
        let next = tokio::time::timeout(Duration::from_secs(60), rx.recv()).await;
        assert_eq!(next, Ok(None));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_releases_subscriptions() {
        let (tx, mut rx) = mpsc::channel(8);
        let (source, released) = fake();
        let mount = GalleryMount::mount(&Settings::default(), source, tx);

        drop(mount);
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert!(released.load(Ordering::SeqCst));
        tokio::time::sleep(Duration::from_secs(20)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_autoplay_disabled() {
        let (tx, _rx) = mpsc::channel(8);
        let (source, _) = fake();
        let mut settings = Settings::default();
        settings.autoplay.enabled = false;

        let mount = GalleryMount::mount(&settings, source, tx);
        assert!(!mount.is_autoplaying());
        mount.unmount().await;
    }
}
