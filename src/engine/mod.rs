//! Reference layout engine backed by the kasuari Cassowary solver
//!
//! Views own four solver variables (left, top, width, height). While a view
//! translates its autoresizing mask, four required constraints pin those
//! variables to the view's frame; [`crate::LayoutElementExt::layout`] drops
//! them so anchor constraints take over.
//!
//! The engine is single-threaded: handles are `Rc`-based and therefore `!Send`.

pub mod anchors;
pub mod config;
pub mod error;
pub mod types;

pub use anchors::{Constraint, DimensionAnchor, XAxisAnchor, YAxisAnchor};
pub use config::{ConfigError, EngineConfig, Priority};
pub use error::EngineError;
pub use types::{Insets, Rect, Size};

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use kasuari::{Solver, Strength, Variable, WeightedRelation::*};

use crate::anchor::{AnchorSource, LayoutConstraint, LayoutElement};

use anchors::{AnchorRef, Attribute};

/// Solver variables and per-view state
pub(crate) struct Item {
    pub(crate) name: String,
    pub(crate) left: Variable,
    pub(crate) top: Variable,
    pub(crate) width: Variable,
    pub(crate) height: Variable,
    pub(crate) safe_area_insets: Cell<Insets>,
    frame: Cell<Rect>,
    /// Present while the view translates its autoresizing mask
    autoresizing: RefCell<Option<Vec<kasuari::Constraint>>>,
}

impl Item {
    fn new(name: impl Into<String>, frame: Rect, safe_area_insets: Insets) -> Self {
        Self {
            name: name.into(),
            left: Variable::new(),
            top: Variable::new(),
            width: Variable::new(),
            height: Variable::new(),
            safe_area_insets: Cell::new(safe_area_insets),
            frame: Cell::new(frame),
            autoresizing: RefCell::new(None),
        }
    }

    fn pin_constraints(&self, frame: Rect) -> Vec<kasuari::Constraint> {
        vec![
            self.left | EQ(Strength::REQUIRED) | frame.x,
            self.top | EQ(Strength::REQUIRED) | frame.y,
            self.width | EQ(Strength::REQUIRED) | frame.width,
            self.height | EQ(Strength::REQUIRED) | frame.height,
        ]
    }
}

struct EngineState {
    solver: Solver,
    /// Last value reported by the solver for each variable
    values: HashMap<Variable, f64>,
    config: EngineConfig,
}

impl EngineState {
    fn refresh(&mut self) {
        let changes = self.solver.fetch_changes();
        for (var, value) in changes {
            self.values.insert(*var, *value);
        }
    }

    fn value(&self, var: Variable) -> f64 {
        self.values.get(&var).copied().unwrap_or(0.0)
    }
}

/// Handle to one constraint system and its views
#[derive(Clone)]
pub struct LayoutEngine {
    state: Rc<RefCell<EngineState>>,
    root: Rc<Item>,
}

impl LayoutEngine {
    pub fn new(config: EngineConfig) -> Self {
        let frame = Rect::new(0.0, 0.0, config.root_size.width, config.root_size.height);
        let root = Rc::new(Item::new("root", frame, config.safe_area_insets));
        let engine = Self {
            state: Rc::new(RefCell::new(EngineState {
                solver: Solver::new(),
                values: HashMap::new(),
                config,
            })),
            root,
        };
        engine.pin(&engine.root);
        engine
    }

    /// The root view, pinned to `(0, 0, root_size)`
    pub fn root(&self) -> View {
        View {
            engine: self.clone(),
            item: Rc::clone(&self.root),
        }
    }

    /// Create a view that starts out pinned to `frame`
    pub fn add_view(&self, name: impl Into<String>, frame: Rect) -> View {
        let item = Rc::new(Item::new(name, frame, Insets::zero()));
        self.pin(&item);
        View {
            engine: self.clone(),
            item,
        }
    }

    pub fn config(&self) -> EngineConfig {
        self.state.borrow().config.clone()
    }

    /// Activate every constraint in `constraints`
    pub fn activate(&self, constraints: &[Constraint]) {
        for constraint in constraints {
            constraint.set_active(true);
        }
    }

    /// Deactivate every constraint in `constraints`
    pub fn deactivate(&self, constraints: &[Constraint]) {
        for constraint in constraints {
            constraint.set_active(false);
        }
    }

    pub(crate) fn priority(&self) -> Priority {
        self.state.borrow().config.priority
    }

    pub(crate) fn add_raw(
        &self,
        constraint: &kasuari::Constraint,
        description: &str,
    ) -> Result<(), EngineError> {
        self.state
            .borrow_mut()
            .solver
            .add_constraint(constraint.clone())
            .map_err(|e| EngineError::from_add(e, description))
    }

    pub(crate) fn remove_raw(
        &self,
        constraint: &kasuari::Constraint,
        description: &str,
    ) -> Result<(), EngineError> {
        self.state
            .borrow_mut()
            .solver
            .remove_constraint(constraint)
            .map_err(|e| EngineError::from_remove(e, description))
    }

    fn pin(&self, item: &Item) {
        let mut autoresizing = item.autoresizing.borrow_mut();
        if autoresizing.is_some() {
            return;
        }
        let mut pins = Vec::new();
        for constraint in item.pin_constraints(item.frame.get()) {
            match self.add_raw(&constraint, &item.name) {
                Ok(()) => pins.push(constraint),
                Err(e) => tracing::warn!(
                    view = %item.name,
                    error = %e,
                    "unable to pin view to its frame",
                ),
            }
        }
        *autoresizing = Some(pins);
    }

    fn unpin(&self, item: &Item) {
        let Some(pins) = item.autoresizing.borrow_mut().take() else {
            return;
        };
        for constraint in &pins {
            if let Err(e) = self.remove_raw(constraint, &item.name) {
                tracing::warn!(view = %item.name, error = %e, "unable to unpin view");
            }
        }
        tracing::debug!(view = %item.name, "removed autoresizing constraints");
    }

    fn frame_of(&self, item: &Item) -> Rect {
        let mut state = self.state.borrow_mut();
        state.refresh();
        Rect::new(
            state.value(item.left),
            state.value(item.top),
            state.value(item.width),
            state.value(item.height),
        )
    }

    fn anchor(&self, item: &Rc<Item>, attribute: Attribute, safe_area: bool) -> AnchorRef {
        AnchorRef::new(self.clone(), Rc::clone(item), attribute, safe_area)
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

/// A rectangular element managed by a [`LayoutEngine`]
#[derive(Clone)]
pub struct View {
    engine: LayoutEngine,
    item: Rc<Item>,
}

impl View {
    pub fn name(&self) -> &str {
        &self.item.name
    }

    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    /// Current solved frame
    pub fn frame(&self) -> Rect {
        self.engine.frame_of(&self.item)
    }

    pub fn safe_area_insets(&self) -> Insets {
        self.item.safe_area_insets.get()
    }

    /// Set the safe-area insets; affects safe-area constraints created afterwards
    pub fn set_safe_area_insets(&self, insets: Insets) {
        self.item.safe_area_insets.set(insets);
    }

    /// Whether the view is still pinned to its frame
    pub fn translates_autoresizing_mask(&self) -> bool {
        self.item.autoresizing.borrow().is_some()
    }

    fn anchor(&self, attribute: Attribute, safe_area: bool) -> AnchorRef {
        self.engine.anchor(&self.item, attribute, safe_area)
    }
}

impl std::fmt::Debug for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("View").field("name", &self.item.name).finish()
    }
}

/// The safe-area guide of a [`View`]
#[derive(Clone)]
pub struct SafeAreaGuide {
    view: View,
}

impl SafeAreaGuide {
    /// Current solved frame of the guide
    pub fn frame(&self) -> Rect {
        self.view.frame().inset_by(self.view.safe_area_insets())
    }
}

macro_rules! anchor_source {
    ($ty:ty, $safe_area:expr, |$this:ident| $view:expr) => {
        impl AnchorSource for $ty {
            type XAxis = XAxisAnchor;
            type YAxis = YAxisAnchor;
            type Dimension = DimensionAnchor;

            fn leading_anchor(&self) -> XAxisAnchor {
                let $this = self;
                XAxisAnchor($view.anchor(Attribute::Leading, $safe_area))
            }

            fn trailing_anchor(&self) -> XAxisAnchor {
                let $this = self;
                XAxisAnchor($view.anchor(Attribute::Trailing, $safe_area))
            }

            fn top_anchor(&self) -> YAxisAnchor {
                let $this = self;
                YAxisAnchor($view.anchor(Attribute::Top, $safe_area))
            }

            fn bottom_anchor(&self) -> YAxisAnchor {
                let $this = self;
                YAxisAnchor($view.anchor(Attribute::Bottom, $safe_area))
            }

            fn width_anchor(&self) -> DimensionAnchor {
                let $this = self;
                DimensionAnchor($view.anchor(Attribute::Width, $safe_area))
            }

            fn height_anchor(&self) -> DimensionAnchor {
                let $this = self;
                DimensionAnchor($view.anchor(Attribute::Height, $safe_area))
            }

            fn center_x_anchor(&self) -> XAxisAnchor {
                let $this = self;
                XAxisAnchor($view.anchor(Attribute::CenterX, $safe_area))
            }

            fn center_y_anchor(&self) -> YAxisAnchor {
                let $this = self;
                YAxisAnchor($view.anchor(Attribute::CenterY, $safe_area))
            }
        }
    };
}

anchor_source!(View, false, |this| this);
anchor_source!(SafeAreaGuide, true, |this| this.view);

impl LayoutElement for View {
    type Guide = SafeAreaGuide;

    fn safe_area_layout_guide(&self) -> SafeAreaGuide {
        SafeAreaGuide { view: self.clone() }
    }

    fn set_translates_autoresizing_mask(&self, enabled: bool) {
        if enabled {
            self.item.frame.set(self.frame());
            self.engine.pin(&self.item);
        } else {
            self.engine.unpin(&self.item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::LayoutAnchor;

    const TOLERANCE: f64 = 1e-6;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_root_is_pinned_to_config_size() {
        let engine = LayoutEngine::new(EngineConfig::new().with_root_size(320.0, 480.0));
        let frame = engine.root().frame();
        assert_close(frame.width, 320.0);
        assert_close(frame.height, 480.0);
        assert!(engine.root().translates_autoresizing_mask());
    }

    #[test]
    fn test_new_view_keeps_its_frame_until_unpinned() {
        let engine = LayoutEngine::default();
        let view = engine.add_view("card", Rect::new(5.0, 6.0, 70.0, 80.0));
        let frame = view.frame();
        assert_close(frame.x, 5.0);
        assert_close(frame.height, 80.0);

        view.set_translates_autoresizing_mask(false);
        assert!(!view.translates_autoresizing_mask());
        // idempotent
        view.set_translates_autoresizing_mask(false);
        assert!(!view.translates_autoresizing_mask());
    }

    #[test]
    fn test_repin_uses_current_frame() {
        let engine = LayoutEngine::default();
        let root = engine.root();
        let view = engine.add_view("card", Rect::zero());
        view.set_translates_autoresizing_mask(false);

        let width = view.width_anchor().constraint_equal_to(&root.width_anchor(), -75.0);
        width.set_active(true);
        assert_close(view.frame().width, 300.0);

        view.set_translates_autoresizing_mask(true);
        width.set_active(false);
        assert!(!width.is_active());
        assert_close(view.frame().width, 300.0);
    }

    #[test]
    fn test_safe_area_guide_frame() {
        let engine = LayoutEngine::default();
        let frame = engine.root().safe_area_layout_guide().frame();
        assert_close(frame.y, 44.0);
        assert_close(frame.width, 375.0);
        assert_close(frame.height, 734.0);
    }

    #[test]
    fn test_anchor_equality_tracks_view_and_attribute() {
        let engine = LayoutEngine::default();
        let a = engine.add_view("a", Rect::zero());
        let b = engine.add_view("a", Rect::zero());

        assert_eq!(a.leading_anchor(), a.leading_anchor());
        assert_ne!(a.leading_anchor(), a.trailing_anchor());
        assert_ne!(a.leading_anchor(), b.leading_anchor());
        assert_ne!(
            a.leading_anchor(),
            a.safe_area_layout_guide().leading_anchor()
        );
    }
}
