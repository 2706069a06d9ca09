//! Body scroll lock shared by every modal on the page.
//!
//! Only one modal may hold the lock. Releasing restores whatever overflow
//! style the body had before the lock was taken, and only the holder can
//! release it.

use std::cell::RefCell;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScrollLockError {
    #[error("another modal already holds the scroll lock")]
    Busy,
    #[error("document body is not available")]
    NoBody,
}

/// Access to the body's `overflow` style.
pub trait BodyStyle {
    fn overflow(&self) -> Result<String, ScrollLockError>;
    fn set_overflow(&mut self, value: &str) -> Result<(), ScrollLockError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModalSession(u64);

#[derive(Debug)]
struct Holder {
    session: ModalSession,
    previous_overflow: String,
}

#[derive(Debug, Default)]
pub struct ScrollLock {
    holder: Option<Holder>,
    next_session: u64,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(&self) -> bool {
        self.holder.is_some()
    }

    pub fn holder(&self) -> Option<ModalSession> {
        self.holder.as_ref().map(|h| h.session)
    }

    pub fn acquire(&mut self, body: &mut dyn BodyStyle) -> Result<ModalSession, ScrollLockError> {
        if self.holder.is_some() {
            return Err(ScrollLockError::Busy);
        }
        let previous_overflow = body.overflow()?;
        body.set_overflow("hidden")?;
        self.next_session += 1;
        let session = ModalSession(self.next_session);
        self.holder = Some(Holder {
            session,
            previous_overflow,
        });
        Ok(session)
    }

    /// Releases the lock if `session` holds it. Returns whether anything was
    /// released. Restoring the style is best effort.
    pub fn release(&mut self, session: ModalSession, body: &mut dyn BodyStyle) -> bool {
        match &self.holder {
            Some(holder) if holder.session == session => {}
            _ => return false,
        }
        if let Some(holder) = self.holder.take() {
            if let Err(e) = body.set_overflow(&holder.previous_overflow) {
                log::warn!("failed to restore body overflow: {}", e);
            }
        }
        true
    }
}

/// The live document body.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentBody;

impl DocumentBody {
    fn element() -> Result<web_sys::HtmlElement, ScrollLockError> {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .ok_or(ScrollLockError::NoBody)
    }
}

impl BodyStyle for DocumentBody {
    fn overflow(&self) -> Result<String, ScrollLockError> {
        Self::element()?
            .style()
            .get_property_value("overflow")
            .map_err(|_| ScrollLockError::NoBody)
    }

    fn set_overflow(&mut self, value: &str) -> Result<(), ScrollLockError> {
        let style = Self::element()?.style();
        let result = if value.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", value)
        };
        result.map_err(|_| ScrollLockError::NoBody)
    }
}

thread_local! {
    static PAGE_LOCK: RefCell<ScrollLock> = RefCell::new(ScrollLock::new());
}

/// Holds the page scroll lock until dropped.
#[derive(Debug)]
pub struct ModalGuard {
    session: ModalSession,
}

impl ModalGuard {
    pub fn acquire() -> Result<Self, ScrollLockError> {
        PAGE_LOCK.with(|lock| {
            let mut lock = lock.try_borrow_mut().map_err(|_| ScrollLockError::Busy)?;
            let session = lock.acquire(&mut DocumentBody)?;
            Ok(Self { session })
        })
    }

    pub fn session(&self) -> ModalSession {
        self.session
    }
}

impl Drop for ModalGuard {
    fn drop(&mut self) {
        let session = self.session;
        PAGE_LOCK.with(|lock| {
            if let Ok(mut lock) = lock.try_borrow_mut() {
                lock.release(session, &mut DocumentBody);
            }
        });
    }
}

/// Ways a modal can be dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Button,
    Backdrop,
    Escape,
    /// Another modal held the lock, so this one never opened.
    Refused,
    /// The link could not be turned into an embeddable player.
    Unplayable,
}

/// Something the user did while a modal was open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalInput<'a> {
    Key(&'a str),
    Backdrop,
    CloseButton,
}

pub fn is_escape_key(key: &str) -> bool {
    key == "Escape" || key == "Esc"
}

/// Whether `input` dismisses an open modal, and why.
pub fn close_reason(input: ModalInput<'_>) -> Option<CloseReason> {
    match input {
        ModalInput::Key(key) => is_escape_key(key).then_some(CloseReason::Escape),
        ModalInput::Backdrop => Some(CloseReason::Backdrop),
        ModalInput::CloseButton => Some(CloseReason::Button),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeBody {
        overflow: String,
        fail_reads: bool,
    }

    impl BodyStyle for FakeBody {
        fn overflow(&self) -> Result<String, ScrollLockError> {
            if self.fail_reads {
                return Err(ScrollLockError::NoBody);
            }
            Ok(self.overflow.clone())
        }

        fn set_overflow(&mut self, value: &str) -> Result<(), ScrollLockError> {
            self.overflow = value.to_owned();
            Ok(())
        }
    }

    /// Feeds `inputs` to an open modal the way the player does. The first
    /// closing input unmounts it, which releases the lock.
    fn run_modal(inputs: &[ModalInput<'_>]) -> (Option<CloseReason>, ScrollLock, FakeBody) {
        let mut lock = ScrollLock::new();
        let mut body = FakeBody::default();
        let session = lock.acquire(&mut body).unwrap();
        assert_eq!(body.overflow, "hidden");
        let reason = inputs.iter().find_map(|input| close_reason(*input));
        if reason.is_some() {
            lock.release(session, &mut body);
        }
        (reason, lock, body)
    }

    #[test]
    fn every_close_path_restores_scrolling() {
        let cases = [
            (ModalInput::CloseButton, CloseReason::Button),
            (ModalInput::Backdrop, CloseReason::Backdrop),
            (ModalInput::Key("Escape"), CloseReason::Escape),
            (ModalInput::Key("Esc"), CloseReason::Escape),
        ];
        for (input, expected) in cases {
            let (reason, lock, body) = run_modal(&[input]);
            assert_eq!(reason, Some(expected));
            assert_eq!(body.overflow, "", "{input:?}");
            assert!(!lock.is_locked());
        }
    }

    #[test]
    fn other_keys_keep_the_modal_open() {
        let (reason, lock, body) = run_modal(&[ModalInput::Key("Enter"), ModalInput::Key(" ")]);
        assert_eq!(reason, None);
        assert_eq!(body.overflow, "hidden");
        assert!(lock.is_locked());

        let (reason, _, body) = run_modal(&[ModalInput::Key("Enter"), ModalInput::Key("Escape")]);
        assert_eq!(reason, Some(CloseReason::Escape));
        assert_eq!(body.overflow, "");
    }

    #[test]
    fn restores_previous_overflow() {
        let mut lock = ScrollLock::new();
        let mut body = FakeBody {
            overflow: "auto".into(),
            ..FakeBody::default()
        };
        let session = lock.acquire(&mut body).unwrap();
        assert!(lock.release(session, &mut body));
        assert_eq!(body.overflow, "auto");
    }

    #[test]
    fn second_modal_is_refused() {
        let mut lock = ScrollLock::new();
        let mut body = FakeBody::default();
        let first = lock.acquire(&mut body).unwrap();
        assert_eq!(lock.acquire(&mut body), Err(ScrollLockError::Busy));
        assert_eq!(lock.holder(), Some(first));
    }

    #[test]
    fn stale_session_cannot_release() {
        let mut lock = ScrollLock::new();
        let mut body = FakeBody::default();
        let first = lock.acquire(&mut body).unwrap();
        assert!(lock.release(first, &mut body));
        let second = lock.acquire(&mut body).unwrap();
        assert!(!lock.release(first, &mut body));
        assert_eq!(body.overflow, "hidden");
        assert!(lock.release(second, &mut body));
        assert!(!lock.release(second, &mut body));
    }

    #[test]
    fn unreadable_body_does_not_lock() {
        let mut lock = ScrollLock::new();
        let mut body = FakeBody {
            fail_reads: true,
            ..FakeBody::default()
        };
        assert_eq!(lock.acquire(&mut body), Err(ScrollLockError::NoBody));
        assert!(!lock.is_locked());
        assert_eq!(body.overflow, "");
    }
}
