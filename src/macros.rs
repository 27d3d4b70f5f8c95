/// Generate accessor functions for the global view signals.
///
/// Usage:
/// `global_signals! {
///     pub title_html => title_html: String,
///     pub cursor_blink => cursor_blink: bool,
/// }`
#[macro_export]
macro_rules! global_signals {
    ( $( $vis:vis $name:ident => $field:ident : $ty:ty ),+ $(,)? ) => {
        $(
            $vis fn $name() -> ::leptos::RwSignal<$ty> {
                $crate::global_state::globals().$field
            }
        )+
    };
}
