//! Layout properties and the relations they activate
//!
//! A [`LayoutProperty`] wraps one anchor of the element being configured.
//! Every relation builds a constraint through the anchor and activates it
//! before handing it back.
//!
//! Constant equality only exists for dimension anchors:
//!
//! ```rust,compile_fail
//! use layout_anchors::engine::{LayoutEngine, Rect};
//! use layout_anchors::LayoutElementExt;
//!
//! let engine = LayoutEngine::default();
//! let view = engine.add_view("card", Rect::zero());
//! view.layout(|l| {
//!     l.leading().equal_to(100.0);
//! });
//! ```

use std::ops::{Add, Sub};

use crate::anchor::{DimensionalLayoutAnchor, LayoutAnchor, LayoutConstraint};

/// An anchor paired with a signed constant, produced by `anchor + c` / `anchor - c`
#[derive(Debug, Clone, PartialEq)]
pub struct Offset<A> {
    pub anchor: A,
    pub constant: f64,
}

impl<A> Offset<A> {
    pub fn new(anchor: A, constant: f64) -> Self {
        Self { anchor, constant }
    }
}

impl<A: LayoutAnchor> From<A> for Offset<A> {
    fn from(anchor: A) -> Self {
        Self::new(anchor, 0.0)
    }
}

impl<A> Add<f64> for Offset<A> {
    type Output = Offset<A>;

    fn add(self, rhs: f64) -> Self::Output {
        Offset::new(self.anchor, self.constant + rhs)
    }
}

impl<A> Sub<f64> for Offset<A> {
    type Output = Offset<A>;

    fn sub(self, rhs: f64) -> Self::Output {
        Offset::new(self.anchor, self.constant - rhs)
    }
}

/// Implement `anchor + f64` and `anchor - f64` for engine anchor types
///
/// ```rust,ignore
/// layout_anchors::impl_anchor_offset_ops!(MyXAnchor, MyYAnchor, MyDimension);
/// ```
#[macro_export]
macro_rules! impl_anchor_offset_ops {
    ($($anchor:ty),+ $(,)?) => {
        $(
            impl ::core::ops::Add<f64> for $anchor {
                type Output = $crate::Offset<$anchor>;

                fn add(self, rhs: f64) -> Self::Output {
                    $crate::Offset::new(self, rhs)
                }
            }

            impl ::core::ops::Sub<f64> for $anchor {
                type Output = $crate::Offset<$anchor>;

                fn sub(self, rhs: f64) -> Self::Output {
                    $crate::Offset::new(self, -rhs)
                }
            }
        )+
    };
}

/// Right-hand sides accepted by [`LayoutProperty::equal_to`]
///
/// Implemented for a bare anchor, an [`Offset`], and `f64` when the property
/// wraps a dimension.
pub trait EqualityTarget<A: LayoutAnchor> {
    fn equality_constraint(self, anchor: &A) -> A::Constraint;
}

impl<A: LayoutAnchor> EqualityTarget<A> for A {
    fn equality_constraint(self, anchor: &A) -> A::Constraint {
        anchor.constraint_equal_to(&self, 0.0)
    }
}

impl<A: LayoutAnchor> EqualityTarget<A> for Offset<A> {
    fn equality_constraint(self, anchor: &A) -> A::Constraint {
        anchor.constraint_equal_to(&self.anchor, self.constant)
    }
}

impl<A: DimensionalLayoutAnchor> EqualityTarget<A> for f64 {
    fn equality_constraint(self, anchor: &A) -> A::Constraint {
        anchor.constraint_equal_to_constant(self)
    }
}

/// A handle binding one anchor to the relational operations
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutProperty<A> {
    anchor: A,
}

impl<A: LayoutAnchor> LayoutProperty<A> {
    pub fn new(anchor: A) -> Self {
        Self { anchor }
    }

    /// The wrapped engine anchor
    pub fn anchor(&self) -> &A {
        &self.anchor
    }

    /// Activate `self = to + offset_by`
    pub fn equal(&self, to: &A, offset_by: f64) -> A::Constraint {
        activate(self.anchor.constraint_equal_to(to, offset_by), "==", offset_by)
    }

    /// Activate `self >= to + offset_by`
    pub fn greater_than_or_equal(&self, to: &A, offset_by: f64) -> A::Constraint {
        activate(
            self.anchor.constraint_greater_than_or_equal_to(to, offset_by),
            ">=",
            offset_by,
        )
    }

    /// Activate `self <= to + offset_by`
    pub fn less_than_or_equal(&self, to: &A, offset_by: f64) -> A::Constraint {
        activate(
            self.anchor.constraint_less_than_or_equal_to(to, offset_by),
            "<=",
            offset_by,
        )
    }

    /// `self == target`, where the target is an anchor, an [`Offset`] or
    /// (for dimensions) a constant
    pub fn equal_to(&self, target: impl EqualityTarget<A>) -> A::Constraint {
        let constraint = target.equality_constraint(&self.anchor);
        constraint.set_active(true);
        tracing::trace!(relation = "==", "activated layout constraint");
        constraint
    }

    /// `self >= target`; a bare anchor means an offset of zero
    pub fn greater_than_or_equal_to(&self, target: impl Into<Offset<A>>) -> A::Constraint {
        let Offset { anchor, constant } = target.into();
        self.greater_than_or_equal(&anchor, constant)
    }

    /// `self <= target`; a bare anchor means an offset of zero
    pub fn less_than_or_equal_to(&self, target: impl Into<Offset<A>>) -> A::Constraint {
        let Offset { anchor, constant } = target.into();
        self.less_than_or_equal(&anchor, constant)
    }
}

impl<A: DimensionalLayoutAnchor> LayoutProperty<A> {
    /// Activate `self = value`
    pub fn equal_constant(&self, value: f64) -> A::Constraint {
        activate(self.anchor.constraint_equal_to_constant(value), "=", value)
    }
}

fn activate<C: LayoutConstraint>(constraint: C, relation: &'static str, constant: f64) -> C {
    constraint.set_active(true);
    tracing::trace!(relation, constant, "activated layout constraint");
    constraint
}
