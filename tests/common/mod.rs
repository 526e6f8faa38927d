//! Recording engine used to observe exactly what the DSL asks of an engine.
//!
//! Every anchor read, guide read, flag write and constraint constructor call
//! is appended to a shared [`Journal`].

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::marker::PhantomData;
use std::rc::Rc;

use layout_anchors::{
    AnchorSource, DimensionalLayoutAnchor, LayoutAnchor, LayoutConstraint, LayoutElement,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    Equal,
    GreaterOrEqual,
    LessOrEqual,
    EqualConstant,
}

/// One constructor call on an anchor
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub op: Op,
    pub lhs: String,
    pub rhs: Option<String>,
    pub constant: f64,
}

impl Call {
    pub fn relate(op: Op, lhs: &str, rhs: &str, constant: f64) -> Self {
        Self {
            op,
            lhs: lhs.to_string(),
            rhs: Some(rhs.to_string()),
            constant,
        }
    }

    pub fn constant(lhs: &str, value: f64) -> Self {
        Self {
            op: Op::EqualConstant,
            lhs: lhs.to_string(),
            rhs: None,
            constant: value,
        }
    }
}

#[derive(Default)]
pub struct Journal {
    pub calls: RefCell<Vec<Call>>,
    pub anchor_reads: RefCell<Vec<String>>,
    pub guide_reads: Cell<usize>,
    pub flag_writes: RefCell<Vec<bool>>,
    next_serial: Cell<u64>,
}

impl Journal {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn anchor_reads(&self) -> Vec<String> {
        self.anchor_reads.borrow().clone()
    }

    pub fn flag_writes(&self) -> Vec<bool> {
        self.flag_writes.borrow().clone()
    }

    fn serial(&self) -> u64 {
        let serial = self.next_serial.get();
        self.next_serial.set(serial + 1);
        serial
    }
}

pub struct Horizontal;
pub struct Vertical;
pub struct Size;

/// Constraint whose activation count is observable
#[derive(Clone)]
pub struct FakeConstraint {
    pub call: Call,
    activations: Rc<Cell<usize>>,
    active: Rc<Cell<bool>>,
}

impl FakeConstraint {
    pub fn activations(&self) -> usize {
        self.activations.get()
    }
}

impl LayoutConstraint for FakeConstraint {
    fn set_active(&self, active: bool) {
        if active {
            self.activations.set(self.activations.get() + 1);
        }
        self.active.set(active);
    }

    fn is_active(&self) -> bool {
        self.active.get()
    }
}

pub struct FakeAnchor<K> {
    pub name: String,
    /// Unique per constructed anchor; equal serials mean the same anchor
    pub serial: u64,
    journal: Rc<Journal>,
    kind: PhantomData<K>,
}

impl<K> Clone for FakeAnchor<K> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            serial: self.serial,
            journal: Rc::clone(&self.journal),
            kind: PhantomData,
        }
    }
}

impl<K> FakeAnchor<K> {
    fn new(journal: &Rc<Journal>, name: String) -> Self {
        journal.anchor_reads.borrow_mut().push(name.clone());
        Self {
            name,
            serial: journal.serial(),
            journal: Rc::clone(journal),
            kind: PhantomData,
        }
    }

    fn record(&self, call: Call) -> FakeConstraint {
        self.journal.calls.borrow_mut().push(call.clone());
        FakeConstraint {
            call,
            activations: Rc::new(Cell::new(0)),
            active: Rc::new(Cell::new(false)),
        }
    }
}

impl<K> LayoutAnchor for FakeAnchor<K> {
    type Constraint = FakeConstraint;

    fn constraint_equal_to(&self, anchor: &Self, constant: f64) -> FakeConstraint {
        self.record(Call::relate(Op::Equal, &self.name, &anchor.name, constant))
    }

    fn constraint_greater_than_or_equal_to(&self, anchor: &Self, constant: f64) -> FakeConstraint {
        self.record(Call::relate(Op::GreaterOrEqual, &self.name, &anchor.name, constant))
    }

    fn constraint_less_than_or_equal_to(&self, anchor: &Self, constant: f64) -> FakeConstraint {
        self.record(Call::relate(Op::LessOrEqual, &self.name, &anchor.name, constant))
    }
}

impl DimensionalLayoutAnchor for FakeAnchor<Size> {
    fn constraint_equal_to_constant(&self, constant: f64) -> FakeConstraint {
        self.record(Call::constant(&self.name, constant))
    }
}

layout_anchors::impl_anchor_offset_ops!(
    FakeAnchor<Horizontal>,
    FakeAnchor<Vertical>,
    FakeAnchor<Size>,
);

/// Element or guide; guides prefix their anchor names with `safe.`
pub struct FakeView {
    name: String,
    journal: Rc<Journal>,
}

impl FakeView {
    pub fn new(journal: &Rc<Journal>, name: &str) -> Self {
        Self {
            name: name.to_string(),
            journal: Rc::clone(journal),
        }
    }

    fn make<K>(&self, attribute: &str) -> FakeAnchor<K> {
        FakeAnchor::new(&self.journal, format!("{}.{}", self.name, attribute))
    }
}

impl AnchorSource for FakeView {
    type XAxis = FakeAnchor<Horizontal>;
    type YAxis = FakeAnchor<Vertical>;
    type Dimension = FakeAnchor<Size>;

    fn leading_anchor(&self) -> Self::XAxis {
        self.make("leading")
    }

    fn trailing_anchor(&self) -> Self::XAxis {
        self.make("trailing")
    }

    fn top_anchor(&self) -> Self::YAxis {
        self.make("top")
    }

    fn bottom_anchor(&self) -> Self::YAxis {
        self.make("bottom")
    }

    fn width_anchor(&self) -> Self::Dimension {
        self.make("width")
    }

    fn height_anchor(&self) -> Self::Dimension {
        self.make("height")
    }

    fn center_x_anchor(&self) -> Self::XAxis {
        self.make("centerX")
    }

    fn center_y_anchor(&self) -> Self::YAxis {
        self.make("centerY")
    }
}

impl LayoutElement for FakeView {
    type Guide = FakeView;

    fn safe_area_layout_guide(&self) -> FakeView {
        self.journal.guide_reads.set(self.journal.guide_reads.get() + 1);
        FakeView::new(&self.journal, &format!("{}.safe", self.name))
    }

    fn set_translates_autoresizing_mask(&self, enabled: bool) {
        self.journal.flag_writes.borrow_mut().push(enabled);
    }
}
