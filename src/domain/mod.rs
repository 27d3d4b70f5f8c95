//! Domain layer: pure reveal logic and the page text catalog.
//! Nothing in here touches the browser.

pub mod catalog;
pub mod errors;
pub mod logging;
pub mod typewriter;
