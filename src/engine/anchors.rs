//! Anchors and constraints of the reference engine
//!
//! Each anchor maps to a linear expression over its view's kasuari variables:
//! `leading = left`, `trailing = left + width`, `center_x = left + width / 2`,
//! and likewise on the vertical axis. Safe-area anchors fold in the owner's
//! insets as they are when the constraint is created.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use kasuari::{Expression, WeightedRelation::*};

use crate::anchor::{DimensionalLayoutAnchor, LayoutAnchor, LayoutConstraint};

use super::error::EngineError;
use super::{Item, LayoutEngine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Attribute {
    Leading,
    Trailing,
    CenterX,
    Top,
    Bottom,
    CenterY,
    Width,
    Height,
}

impl Attribute {
    fn name(self) -> &'static str {
        match self {
            Attribute::Leading => "leading",
            Attribute::Trailing => "trailing",
            Attribute::CenterX => "centerX",
            Attribute::Top => "top",
            Attribute::Bottom => "bottom",
            Attribute::CenterY => "centerY",
            Attribute::Width => "width",
            Attribute::Height => "height",
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Relation {
    Equal,
    GreaterOrEqual,
    LessOrEqual,
}

impl Relation {
    fn symbol(self) -> &'static str {
        match self {
            Relation::Equal => "==",
            Relation::GreaterOrEqual => ">=",
            Relation::LessOrEqual => "<=",
        }
    }
}

/// Shared state of every anchor kind
#[derive(Clone)]
pub(crate) struct AnchorRef {
    engine: LayoutEngine,
    item: Rc<Item>,
    attribute: Attribute,
    safe_area: bool,
}

impl AnchorRef {
    pub(crate) fn new(
        engine: LayoutEngine,
        item: Rc<Item>,
        attribute: Attribute,
        safe_area: bool,
    ) -> Self {
        Self {
            engine,
            item,
            attribute,
            safe_area,
        }
    }

    fn name(&self) -> String {
        if self.safe_area {
            format!("{}.safeArea.{}", self.item.name, self.attribute.name())
        } else {
            format!("{}.{}", self.item.name, self.attribute.name())
        }
    }

    fn expression(&self) -> Expression {
        let item = &self.item;
        let insets = if self.safe_area {
            item.safe_area_insets.get()
        } else {
            Default::default()
        };
        let left = Expression::from(item.left) + insets.leading;
        let top = Expression::from(item.top) + insets.top;
        let width = Expression::from(item.width) - insets.leading - insets.trailing;
        let height = Expression::from(item.height) - insets.top - insets.bottom;

        match self.attribute {
            Attribute::Leading => left,
            Attribute::Trailing => left + width,
            Attribute::CenterX => left + width * 0.5,
            Attribute::Top => top,
            Attribute::Bottom => top + height,
            Attribute::CenterY => top + height * 0.5,
            Attribute::Width => width,
            Attribute::Height => height,
        }
    }

    fn relate(&self, relation: Relation, other: &AnchorRef, constant: f64) -> Constraint {
        let strength = self.engine.priority().strength();
        let lhs = self.expression();
        let rhs = other.expression() + constant;
        let raw = match relation {
            Relation::Equal => lhs | EQ(strength) | rhs,
            Relation::GreaterOrEqual => lhs | GE(strength) | rhs,
            Relation::LessOrEqual => lhs | LE(strength) | rhs,
        };
        let description = format!(
            "{} {} {}{}",
            self.name(),
            relation.symbol(),
            other.name(),
            format_constant(constant)
        );
        Constraint::new(self.engine.clone(), raw, description)
    }

    fn relate_constant(&self, value: f64) -> Constraint {
        let strength = self.engine.priority().strength();
        let raw = self.expression() | EQ(strength) | value;
        let description = format!("{} == {}", self.name(), value);
        Constraint::new(self.engine.clone(), raw, description)
    }
}

impl PartialEq for AnchorRef {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.item, &other.item)
            && self.attribute == other.attribute
            && self.safe_area == other.safe_area
    }
}

impl fmt::Debug for AnchorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

fn format_constant(constant: f64) -> String {
    if constant == 0.0 {
        String::new()
    } else if constant < 0.0 {
        format!(" - {}", -constant)
    } else {
        format!(" + {}", constant)
    }
}

macro_rules! anchor_kind {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name(pub(crate) AnchorRef);

        impl LayoutAnchor for $name {
            type Constraint = Constraint;

            fn constraint_equal_to(&self, anchor: &Self, constant: f64) -> Constraint {
                self.0.relate(Relation::Equal, &anchor.0, constant)
            }

            fn constraint_greater_than_or_equal_to(&self, anchor: &Self, constant: f64) -> Constraint {
                self.0.relate(Relation::GreaterOrEqual, &anchor.0, constant)
            }

            fn constraint_less_than_or_equal_to(&self, anchor: &Self, constant: f64) -> Constraint {
                self.0.relate(Relation::LessOrEqual, &anchor.0, constant)
            }
        }
    };
}

anchor_kind!(
    /// Leading, trailing and center-x anchors
    XAxisAnchor
);
anchor_kind!(
    /// Top, bottom and center-y anchors
    YAxisAnchor
);
anchor_kind!(
    /// Width and height anchors
    DimensionAnchor
);

impl DimensionalLayoutAnchor for DimensionAnchor {
    fn constraint_equal_to_constant(&self, constant: f64) -> Constraint {
        self.0.relate_constant(constant)
    }
}

crate::impl_anchor_offset_ops!(XAxisAnchor, YAxisAnchor, DimensionAnchor);

struct ConstraintInner {
    engine: LayoutEngine,
    raw: kasuari::Constraint,
    description: String,
    active: Cell<bool>,
}

/// A relation between two anchors, or an anchor and a constant
///
/// Clones share activation state.
#[derive(Clone)]
pub struct Constraint {
    inner: Rc<ConstraintInner>,
}

impl Constraint {
    fn new(engine: LayoutEngine, raw: kasuari::Constraint, description: String) -> Self {
        Self {
            inner: Rc::new(ConstraintInner {
                engine,
                raw,
                description,
                active: Cell::new(false),
            }),
        }
    }

    /// Human-readable form, e.g. `card.leading == root.leading + 16`
    pub fn description(&self) -> &str {
        &self.inner.description
    }

    /// Add the constraint to, or remove it from, the solver
    ///
    /// Requesting the current state is a no-op.
    pub fn try_set_active(&self, active: bool) -> Result<(), EngineError> {
        let inner = &self.inner;
        if inner.active.get() == active {
            return Ok(());
        }
        if active {
            inner.engine.add_raw(&inner.raw, &inner.description)?;
            tracing::debug!(constraint = %inner.description, "constraint activated");
        } else {
            inner.engine.remove_raw(&inner.raw, &inner.description)?;
            tracing::debug!(constraint = %inner.description, "constraint deactivated");
        }
        inner.active.set(active);
        Ok(())
    }
}

impl LayoutConstraint for Constraint {
    fn set_active(&self, active: bool) {
        if let Err(e) = self.try_set_active(active) {
            tracing::warn!(
                constraint = %self.inner.description,
                error = %e,
                "unable to change constraint activation; leaving it unchanged",
            );
        }
    }

    fn is_active(&self) -> bool {
        self.inner.active.get()
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.description)
    }
}

impl fmt::Debug for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constraint")
            .field("description", &self.inner.description)
            .field("active", &self.inner.active.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_constant() {
        assert_eq!(format_constant(0.0), "");
        assert_eq!(format_constant(10.0), " + 10");
        assert_eq!(format_constant(-5.0), " - 5");
        assert_eq!(format_constant(0.5), " + 0.5");
    }
}
