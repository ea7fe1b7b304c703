// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Environment probing: DOM availability and live viewport width.
//!
//! The engine never reads global state. Hosts pass an [`Environment`] that
//! answers two questions: is there a DOM-like host at all, and how wide is the
//! viewport right now. Tests and headless layout use [`Headless`] or
//! [`FixedViewport`]; browsers use `WebEnvironment` (feature `web`, `wasm32`).

/// Read-only view of the host environment.
pub trait Environment {
    /// Returns `true` if a windowing/DOM-like API is reachable and able to
    /// create elements.
    ///
    /// Implementations must contain any failure of the underlying query and
    /// report `false` instead.
    fn can_use_dom(&self) -> bool;

    /// Current viewport width in pixels, if it can be read.
    fn viewport_width(&self) -> Option<f64>;
}

impl<E: Environment + ?Sized> Environment for &E {
    fn can_use_dom(&self) -> bool {
        (**self).can_use_dom()
    }

    fn viewport_width(&self) -> Option<f64> {
        (**self).viewport_width()
    }
}

/// An environment without a DOM or viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Headless;

impl Environment for Headless {
    fn can_use_dom(&self) -> bool {
        false
    }

    fn viewport_width(&self) -> Option<f64> {
        None
    }
}

/// A DOM-capable environment with a fixed viewport width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedViewport(pub f64);

impl Environment for FixedViewport {
    fn can_use_dom(&self) -> bool {
        true
    }

    fn viewport_width(&self) -> Option<f64> {
        self.0.is_finite().then_some(self.0.max(0.0))
    }
}

/// Returns `true` if `env` reports a usable DOM.
pub fn can_use_environment(env: &dyn Environment) -> bool {
    let available = env.can_use_dom();
    if !available {
        log::debug!(target: "understory_carousel", "no DOM available; using headless defaults");
    }
    available
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::WebEnvironment;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web {
    use super::Environment;

    /// Probes the browser window through `web-sys`.
    ///
    /// A missing window or document, a thrown `innerWidth` getter, or a
    /// non-numeric width all read as "unavailable".
    #[derive(Clone, Copy, Debug, Default)]
    pub struct WebEnvironment;

    impl Environment for WebEnvironment {
        fn can_use_dom(&self) -> bool {
            let Some(document) = web_sys::window().and_then(|window| window.document()) else {
                return false;
            };
            document.create_element("div").is_ok()
        }

        fn viewport_width(&self) -> Option<f64> {
            let window = web_sys::window()?;
            match window.inner_width() {
                Ok(value) => value.as_f64().filter(|width| width.is_finite()),
                Err(err) => {
                    log::debug!(target: "understory_carousel", "innerWidth query failed: {err:?}");
                    None
                }
            }
        }
    }
}
