use owo_colors::{OwoColorize, Stream, Style};
use std::fmt::{Arguments, Display};

/// `<label>: <message>` with the label styled for `stream`
pub fn tagged<'a>(
    label: &'a str,
    style: Style,
    stream: Stream,
    message: Arguments<'a>,
) -> impl Display + 'a {
    lazy_format::lazy_format!(
        "{}: {}",
        label.if_supports_color(stream, move |s| s.style(style)),
        message
    )
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_line {
    ($print:ident, $stream:ident, $label:literal, $style:expr, $($arg:tt)+) => {
        $print!(
            "{}",
            $crate::log::tagged(
                $label,
                $style,
                owo_colors::Stream::$stream,
                format_args!($($arg)+),
            )
        )
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::__log_line!(eprintln, Stderr, "error", owo_colors::Style::new().bold().red(), $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        $crate::__log_line!(eprintln, Stderr, "warning", owo_colors::Style::new().bold().yellow(), $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::__log_line!(println, Stdout, "info", owo_colors::Style::new().bold().green(), $($arg)+)
    };
}

/// Only prints when [`TRACE_ENV`](crate::TRACE_ENV) is set
#[macro_export]
macro_rules! trace {
    ($($arg:tt)+) => {
        if std::env::var_os($crate::TRACE_ENV).is_some() {
            $crate::__log_line!(println, Stdout, "trace", owo_colors::Style::new().bold(), $($arg)+)
        }
    };
}
