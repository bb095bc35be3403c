use std::fmt;
use std::sync::Arc;

use super::keys::Key;

struct Frame {
    key: Key,
    value: Arc<str>,
    parent: Option<Arc<Frame>>,
}

/// Immutable request-scoped value chain.
///
/// Cloning is a refcount bump. `with_value` returns a new context whose newest
/// frame shadows older frames for the same key.
#[derive(Clone, Default)]
pub struct Context {
    head: Option<Arc<Frame>>,
}

impl Context {
    /// Empty root context.
    pub fn background() -> Self {
        Self::default()
    }

    /// Derive a child context carrying `value` under `key`.
    pub fn with_value(&self, key: Key, value: impl Into<Arc<str>>) -> Self {
        Self {
            head: Some(Arc::new(Frame {
                key,
                value: value.into(),
                parent: self.head.clone(),
            })),
        }
    }

    /// Newest value stored under `key`, if any.
    pub fn value(&self, key: Key) -> Option<&str> {
        let mut cur = self.head.as_deref();
        while let Some(frame) = cur {
            if frame.key == key {
                return Some(&frame.value);
            }
            cur = frame.parent.as_deref();
        }
        None
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut cur = self.head.as_deref();
        while let Some(frame) = cur {
            list.entry(&(frame.key.as_str(), &*frame.value));
            cur = frame.parent.as_deref();
        }
        list.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_is_untouched_by_child() {
        let root = Context::background();
        let child = root.with_value(Key::Phase, "Running");

        assert!(root.is_empty());
        assert_eq!(root.value(Key::Phase), None);
        assert_eq!(child.value(Key::Phase), Some("Running"));
    }

    #[test]
    fn newest_frame_shadows_older() {
        let ctx = Context::background()
            .with_value(Key::Phase, "Queued")
            .with_value(Key::Namespace, "flyte")
            .with_value(Key::Phase, "Running");

        assert_eq!(ctx.value(Key::Phase), Some("Running"));
        assert_eq!(ctx.value(Key::Namespace), Some("flyte"));
        assert_eq!(format!("{ctx:?}"), r#"[("phase", "Running"), ("ns", "flyte"), ("phase", "Queued")]"#);
    }

    #[test]
    fn snapshots_cross_threads() {
        let ctx = Context::background().with_value(Key::ExecId, "exec-1");
        let handle = std::thread::spawn({
            let ctx = ctx.clone();
            move || ctx.value(Key::ExecId).map(str::to_string)
        });
        assert_eq!(handle.join().ok().flatten().as_deref(), Some("exec-1"));
    }
}
