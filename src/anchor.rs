//! Capability traits implemented by a layout engine
//!
//! The DSL never touches a solver directly. An engine describes its anchors,
//! constraints and elements through these traits, and the DSL only calls the
//! constructors declared here.

/// A constraint object owned by the engine
pub trait LayoutConstraint {
    /// Enable or disable the constraint in the engine's solver
    fn set_active(&self, active: bool);

    /// Whether the constraint currently takes part in layout
    fn is_active(&self) -> bool;
}

/// A positionable attribute of one element along one axis
///
/// Relations are only constructible between anchors of the same type, so an
/// engine that gives each axis its own anchor type gets axis checking for free.
/// None of these methods activate the returned constraint.
pub trait LayoutAnchor: Clone {
    type Constraint: LayoutConstraint;

    /// `self = anchor + constant`
    fn constraint_equal_to(&self, anchor: &Self, constant: f64) -> Self::Constraint;

    /// `self >= anchor + constant`
    fn constraint_greater_than_or_equal_to(&self, anchor: &Self, constant: f64)
        -> Self::Constraint;

    /// `self <= anchor + constant`
    fn constraint_less_than_or_equal_to(&self, anchor: &Self, constant: f64) -> Self::Constraint;
}

/// An anchor that can also be pinned to an absolute value (widths and heights)
pub trait DimensionalLayoutAnchor: LayoutAnchor {
    /// `self = constant`
    fn constraint_equal_to_constant(&self, constant: f64) -> Self::Constraint;
}

/// Anything exposing the standard anchor set: elements and their guides
pub trait AnchorSource {
    type XAxis: LayoutAnchor;
    type YAxis: LayoutAnchor;
    type Dimension: DimensionalLayoutAnchor;

    fn leading_anchor(&self) -> Self::XAxis;
    fn trailing_anchor(&self) -> Self::XAxis;
    fn top_anchor(&self) -> Self::YAxis;
    fn bottom_anchor(&self) -> Self::YAxis;
    fn width_anchor(&self) -> Self::Dimension;
    fn height_anchor(&self) -> Self::Dimension;
    fn center_x_anchor(&self) -> Self::XAxis;
    fn center_y_anchor(&self) -> Self::YAxis;
}

/// A UI element that can be configured with [`crate::LayoutElementExt::layout`]
pub trait LayoutElement: AnchorSource {
    /// The element's safe-area guide; shares the element's anchor types
    type Guide: AnchorSource<XAxis = Self::XAxis, YAxis = Self::YAxis, Dimension = Self::Dimension>;

    fn safe_area_layout_guide(&self) -> Self::Guide;

    /// Toggle the constraints the engine synthesizes from the element's frame
    fn set_translates_autoresizing_mask(&self, enabled: bool);
}
