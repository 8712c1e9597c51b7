//! 共享状态
//!
//! - [`TaskStore`]：未处理申请的计数，唯一的共享业务状态。
//! - [`MessageStore`]：全局提示条，HTTP 层和路由守卫都向它投递
//!   用户可见的消息。
//!
//! 两者都是信号 + 覆盖写语义，单线程运行时下无需并发控制。

use crate::api::DictionaryApi;
use crate::logger;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

// ---------------------------------------------------------------------------
// 未处理任务计数
// ---------------------------------------------------------------------------

/// 未处理"新增术语"申请的计数
#[derive(Clone, Copy)]
pub struct TaskStore {
    count: ReadSignal<i64>,
    set_count: WriteSignal<i64>,
}

impl TaskStore {
    pub fn new() -> Self {
        let (count, set_count) = signal(0);
        Self { count, set_count }
    }

    pub fn unprocessed_count(&self) -> ReadSignal<i64> {
        self.count
    }

    /// 覆盖写入计数（last write wins）
    fn apply(&self, count: i64) {
        self.set_count.set(count);
    }

    /// 调用计数接口刷新。失败只记日志，不打扰用户。
    pub async fn refresh(&self, api: &DictionaryApi) {
        match api.task_count().await {
            Ok(res) => {
                self.apply(res.count);
                logger::debug("Store:Task", "未处理任务数已更新", res.count.to_string().as_str());
            }
            Err(e) => {
                logger::error("Store:Task", "更新任务数失败", e.to_string().as_str());
            }
        }
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取任务计数
pub fn use_tasks() -> TaskStore {
    use_context::<TaskStore>().expect("TaskStore should be provided")
}

// ---------------------------------------------------------------------------
// 全局提示条
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warn,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
}

/// 一次只显示一条消息，后来者直接覆盖
#[derive(Clone, Copy)]
pub struct MessageStore {
    current: ReadSignal<Option<Message>>,
    set_current: WriteSignal<Option<Message>>,
}

/// 提示条自动消失时间
const DISMISS_AFTER_MS: u32 = 3_000;

impl MessageStore {
    pub fn new() -> Self {
        let (current, set_current) = signal(None);
        Self { current, set_current }
    }

    pub fn current(&self) -> ReadSignal<Option<Message>> {
        self.current
    }

    pub fn info(&self, text: &str) {
        self.show(MessageKind::Info, text);
    }

    pub fn success(&self, text: &str) {
        self.show(MessageKind::Success, text);
    }

    pub fn warn(&self, text: &str) {
        self.show(MessageKind::Warn, text);
    }

    pub fn error(&self, text: &str) {
        self.show(MessageKind::Error, text);
    }

    pub fn dismiss(&self) {
        self.set_current.set(None);
    }

    fn show(&self, kind: MessageKind, text: &str) {
        let message = Message {
            kind,
            text: text.to_string(),
        };
        self.set_current.set(Some(message.clone()));

        // 到点后只清除仍在显示的同一条消息，不碰后来覆盖的
        let set_current = self.set_current;
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            set_current.update(|current| {
                if current.as_ref() == Some(&message) {
                    *current = None;
                }
            });
        });
    }
}

impl Default for MessageStore {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取提示条
pub fn use_messages() -> MessageStore {
    use_context::<MessageStore>().expect("MessageStore should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_apply_is_idempotent() {
        let owner = Owner::new();
        owner.set();
        let store = TaskStore::new();
        store.apply(3);
        store.apply(3);
        assert_eq!(store.unprocessed_count().get_untracked(), 3);
        // 覆盖写：新值直接生效
        store.apply(5);
        assert_eq!(store.unprocessed_count().get_untracked(), 5);
    }

    #[test]
    fn count_starts_at_zero() {
        let owner = Owner::new();
        owner.set();
        let store = TaskStore::new();
        assert_eq!(store.unprocessed_count().get_untracked(), 0);
    }

    #[test]
    fn badge_shows_only_when_tasks_pending() {
        let owner = Owner::new();
        owner.set();
        let store = TaskStore::new();
        let count = store.unprocessed_count();
        let visible = move || count.get_untracked() > 0;
        assert!(!visible());
        store.apply(2);
        assert!(visible());
        store.apply(0);
        assert!(!visible());
    }
}
