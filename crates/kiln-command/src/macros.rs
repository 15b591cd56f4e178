//! Convenience macros for command producers.

/// Format and append a UI text record in one call.
///
/// Expands to [`PushBuffer::push_ui_text_fmt`](crate::PushBuffer::push_ui_text_fmt)
/// with a `format_args!` built from the trailing arguments, so the text is
/// formatted straight into the buffer's arena without an intermediate
/// `String`.
///
/// ```
/// use glam::Vec2;
/// use kiln_command::{push_text, PushBuffer};
/// use kiln_core::Color;
///
/// let mut buffer = PushBuffer::with_max_bytes(4096);
/// push_text!(buffer, Vec2::new(8.0, 8.0), Color::WHITE, "frame {}", 42)?;
/// # Ok::<(), kiln_command::CommandError>(())
/// ```
#[macro_export]
macro_rules! push_text {
    ($buffer:expr, $position:expr, $color:expr, $($arg:tt)*) => {
        $buffer.push_ui_text_fmt($position, $color, ::core::format_args!($($arg)*))
    };
}
