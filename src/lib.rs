//! Layout Anchors - declarative constraint expressions for anchor-based layout engines
//!
//! `element.layout(|l| ...)` hands a closure the element's named anchors.
//! Each relation written inside the closure creates one constraint in the
//! layout engine and activates it immediately.
//!
//! # Example
//!
//! ```rust
//! use layout_anchors::engine::{LayoutEngine, Rect};
//! use layout_anchors::{constrain, AnchorSource, LayoutElementExt};
//!
//! let engine = LayoutEngine::default();
//! let root = engine.root();
//! let card = engine.add_view("card", Rect::zero());
//!
//! card.layout(|l| {
//!     constrain!(l =>
//!         leading == root.leading_anchor() + 16.0;
//!         trailing == root.trailing_anchor() - 16.0;
//!         safe_top >= root.top_anchor();
//!         height == 120.0;
//!     );
//! });
//!
//! let frame = card.frame();
//! assert!((frame.x - 16.0).abs() < 1e-6);
//! assert!((frame.width - 343.0).abs() < 1e-6);
//! assert!((frame.height - 120.0).abs() < 1e-6);
//! ```

pub mod anchor;
pub mod engine;
pub mod property;
pub mod proxy;

pub use anchor::{
    AnchorSource, DimensionalLayoutAnchor, LayoutAnchor, LayoutConstraint, LayoutElement,
};
pub use property::{EqualityTarget, LayoutProperty, Offset};
pub use proxy::LayoutProxy;

/// Entry point for configuring an element's constraints
pub trait LayoutElementExt: LayoutElement + Sized {
    /// Disable the element's synthesized frame constraints and run `configure`
    /// with a fresh [`LayoutProxy`]
    ///
    /// Must be called on whatever thread the engine requires for layout
    /// mutations.
    fn layout<F>(&self, configure: F)
    where
        F: FnOnce(&LayoutProxy<'_, Self>),
    {
        self.set_translates_autoresizing_mask(false);
        configure(&LayoutProxy::new(self));
    }
}

impl<E: LayoutElement> LayoutElementExt for E {}

/// Infix relations over a [`LayoutProxy`]
///
/// Each `property op target;` statement runs in order and activates one
/// constraint. `==` takes an anchor, `anchor + c` / `anchor - c`, or a
/// constant on `width` / `height`. `>=` and `<=` take an anchor or an offset
/// anchor. The created constraints are discarded; use the
/// [`LayoutProperty`] methods to keep them.
///
/// ```rust
/// # use layout_anchors::engine::{LayoutEngine, Rect};
/// # use layout_anchors::{constrain, AnchorSource, LayoutElementExt};
/// let engine = LayoutEngine::default();
/// let root = engine.root();
/// let badge = engine.add_view("badge", Rect::zero());
/// badge.layout(|l| {
///     constrain!(l =>
///         center_x == root.center_x_anchor();
///         top >= root.top_anchor() + 8.0;
///         width == 24.0;
///         height == 24.0;
///     );
/// });
/// ```
#[macro_export]
macro_rules! constrain {
    (@relation $property:expr, ==, $target:expr) => {
        let _ = $property.equal_to($target);
    };
    (@relation $property:expr, >=, $target:expr) => {
        let _ = $property.greater_than_or_equal_to($target);
    };
    (@relation $property:expr, <=, $target:expr) => {
        let _ = $property.less_than_or_equal_to($target);
    };
    ($proxy:expr => $($property:ident $op:tt $target:expr);+ $(;)?) => {{
        let proxy = &$proxy;
        $(
            $crate::constrain!(@relation proxy.$property(), $op, $target);
        )+
    }};
}
