// Управление режимом отладки (флаг --debug)

use std::sync::atomic::{AtomicBool, Ordering};

static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Включить или выключить режим отладки
pub fn set_debug(enabled: bool) {
    DEBUG_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Проверить, включен ли режим отладки
pub fn is_debug_enabled() -> bool {
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

/// Вывод отладочного сообщения, если режим отладки включен
#[macro_export]
macro_rules! debug_println {
    ($($arg:tt)*) => {
        if $crate::common::debug::is_debug_enabled() {
            eprint!("[debug] ");
            eprintln!($($arg)*);
        }
    };
}
