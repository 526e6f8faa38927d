//! Per-element anchor registry handed to `layout` closures

use std::cell::OnceCell;

use crate::anchor::{AnchorSource, LayoutElement};
use crate::property::LayoutProperty;

type XProperty<E> = LayoutProperty<<E as AnchorSource>::XAxis>;
type YProperty<E> = LayoutProperty<<E as AnchorSource>::YAxis>;
type DimensionProperty<E> = LayoutProperty<<E as AnchorSource>::Dimension>;

/// Named layout properties of one element
///
/// Each property is created on first access and cached for the lifetime of
/// the proxy, so repeated reads return the same handle. Properties that are
/// never read never touch the engine.
pub struct LayoutProxy<'a, E: LayoutElement> {
    element: &'a E,
    safe_area: OnceCell<E::Guide>,

    leading: OnceCell<XProperty<E>>,
    safe_leading: OnceCell<XProperty<E>>,
    trailing: OnceCell<XProperty<E>>,
    safe_trailing: OnceCell<XProperty<E>>,
    top: OnceCell<YProperty<E>>,
    safe_top: OnceCell<YProperty<E>>,
    bottom: OnceCell<YProperty<E>>,
    safe_bottom: OnceCell<YProperty<E>>,
    width: OnceCell<DimensionProperty<E>>,
    height: OnceCell<DimensionProperty<E>>,
    center_x: OnceCell<XProperty<E>>,
    center_y: OnceCell<YProperty<E>>,
}

impl<'a, E: LayoutElement> LayoutProxy<'a, E> {
    pub(crate) fn new(element: &'a E) -> Self {
        Self {
            element,
            safe_area: OnceCell::new(),
            leading: OnceCell::new(),
            safe_leading: OnceCell::new(),
            trailing: OnceCell::new(),
            safe_trailing: OnceCell::new(),
            top: OnceCell::new(),
            safe_top: OnceCell::new(),
            bottom: OnceCell::new(),
            safe_bottom: OnceCell::new(),
            width: OnceCell::new(),
            height: OnceCell::new(),
            center_x: OnceCell::new(),
            center_y: OnceCell::new(),
        }
    }

    /// The element being configured
    pub fn element(&self) -> &'a E {
        self.element
    }

    fn guide(&self) -> &E::Guide {
        self.safe_area
            .get_or_init(|| self.element.safe_area_layout_guide())
    }

    pub fn leading(&self) -> &XProperty<E> {
        self.leading
            .get_or_init(|| LayoutProperty::new(self.element.leading_anchor()))
    }

    pub fn safe_leading(&self) -> &XProperty<E> {
        self.safe_leading
            .get_or_init(|| LayoutProperty::new(self.guide().leading_anchor()))
    }

    pub fn trailing(&self) -> &XProperty<E> {
        self.trailing
            .get_or_init(|| LayoutProperty::new(self.element.trailing_anchor()))
    }

    pub fn safe_trailing(&self) -> &XProperty<E> {
        self.safe_trailing
            .get_or_init(|| LayoutProperty::new(self.guide().trailing_anchor()))
    }

    pub fn top(&self) -> &YProperty<E> {
        self.top
            .get_or_init(|| LayoutProperty::new(self.element.top_anchor()))
    }

    pub fn safe_top(&self) -> &YProperty<E> {
        self.safe_top
            .get_or_init(|| LayoutProperty::new(self.guide().top_anchor()))
    }

    pub fn bottom(&self) -> &YProperty<E> {
        self.bottom
            .get_or_init(|| LayoutProperty::new(self.element.bottom_anchor()))
    }

    pub fn safe_bottom(&self) -> &YProperty<E> {
        self.safe_bottom
            .get_or_init(|| LayoutProperty::new(self.guide().bottom_anchor()))
    }

    pub fn width(&self) -> &DimensionProperty<E> {
        self.width
            .get_or_init(|| LayoutProperty::new(self.element.width_anchor()))
    }

    pub fn height(&self) -> &DimensionProperty<E> {
        self.height
            .get_or_init(|| LayoutProperty::new(self.element.height_anchor()))
    }

    pub fn center_x(&self) -> &XProperty<E> {
        self.center_x
            .get_or_init(|| LayoutProperty::new(self.element.center_x_anchor()))
    }

    pub fn center_y(&self) -> &YProperty<E> {
        self.center_y
            .get_or_init(|| LayoutProperty::new(self.element.center_y_anchor()))
    }
}
