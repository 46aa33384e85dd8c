//! Search Debouncer
//!
//! 语言列表的文本筛选输入防抖：一串连续输入中只有最后一次会在
//! 静默期结束后生效。筛选只作用于已缓存的语言，不触发网络请求。

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// 默认静默期
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// 输入防抖器
pub struct SearchDebouncer {
    delay: Duration,
    generation: AtomicU64,
}

impl SearchDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: AtomicU64::new(0),
        }
    }

    /// 提交一次输入，静默期后仍是最新输入则返回 `Some(input)`
    pub async fn submit(&self, input: String) -> Option<String> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.delay).await;

        if self.generation.load(Ordering::SeqCst) == ticket {
            Some(input)
        } else {
            None
        }
    }
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_only_last_input_of_burst_applies() {
        let debouncer = SearchDebouncer::default();

        let first = debouncer.submit("e".to_string());
        let second = async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            debouncer.submit("en".to_string()).await
        };
        let third = async {
            tokio::time::sleep(Duration::from_millis(200)).await;
            debouncer.submit("eng".to_string()).await
        };

        let (first, second, third) = tokio::join!(first, second, third);
        assert_eq!(first, None);
        assert_eq!(second, None);
        assert_eq!(third, Some("eng".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_spaced_inputs_all_apply() {
        let debouncer = SearchDebouncer::new(Duration::from_millis(50));

        assert_eq!(debouncer.submit("a".to_string()).await, Some("a".to_string()));
        assert_eq!(debouncer.submit("ab".to_string()).await, Some("ab".to_string()));
    }
}
