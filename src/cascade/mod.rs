//! Bytecode replay and the cascade.
//!
//! During selection each matched rule's style buffer is replayed against a
//! [`CascadeState`]: every entry's OPV is decoded, its payload read, and
//! [`CascadeState::outranks_existing`] decides whether the declaration
//! displaces the recorded winner for that property. Winning values land in
//! the state's [`ComputedStyle`] through the per-property routines.
//!
//! The caller (the selector matcher) replays buffers in ascending
//! specificity and source order; within one precedence level a later
//! declaration therefore wins.

pub(crate) mod computed;
pub(crate) mod helpers;
pub mod properties;

#[cfg(test)]
mod tests;

pub use computed::ComputedStyle;

use crate::bytecode::{Opv, PropertyId, Style};
use crate::error::{Error, Result};
use crate::intern::Interner;

/// Where a stylesheet came from, in ascending normal-declaration precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Origin {
    #[default]
    UserAgent,
    User,
    Author,
}

/// CSS 2.1 cascade precedence: user agent < user < author for normal
/// declarations, author < user < user agent for important ones.
fn precedence(origin: Origin, important: bool) -> u8 {
    match (origin, important) {
        (Origin::UserAgent, false) => 0,
        (Origin::User, false) => 1,
        (Origin::Author, false) => 2,
        (Origin::Author, true) => 3,
        (Origin::User, true) => 4,
        (Origin::UserAgent, true) => 5,
    }
}

/// Best-so-far record for one property.
#[derive(Debug, Clone, Copy, Default)]
struct PropState {
    set: bool,
    origin: Origin,
    important: bool,
}

/// Per-element cascade context: the target computed style plus the
/// best-so-far origin/importance for every property.
pub struct CascadeState<'i> {
    pub computed: ComputedStyle,
    pub(crate) interner: &'i Interner,
    origin: Origin,
    props: Vec<PropState>,
}

impl<'i> CascadeState<'i> {
    pub fn new(interner: &'i Interner) -> CascadeState<'i> {
        CascadeState {
            computed: ComputedStyle::new(),
            interner,
            origin: Origin::default(),
            props: vec![PropState::default(); PropertyId::COUNT],
        }
    }

    /// Replay one style buffer from a stylesheet of the given origin.
    pub fn cascade_style(&mut self, style: &Style, origin: Origin) -> Result<()> {
        self.origin = origin;
        let mut reader = style.reader();
        while !reader.at_end() {
            let opv = reader.read_opv()?;
            let prop = opv.opcode().ok_or(Error::Invalid)?;
            log::trace!("cascading {prop:?} (origin {origin:?})");
            (properties::ops(prop).cascade)(opv, &mut reader, self)?;
        }
        Ok(())
    }

    /// Decide whether a declaration for `opv`'s property beats the recorded
    /// winner, updating the record when it does.
    ///
    /// The style cursor has already been advanced past the entry's payload
    /// by the time this runs, so a losing declaration costs nothing further.
    pub(crate) fn outranks_existing(&mut self, opv: Opv) -> bool {
        let Some(prop) = opv.opcode() else {
            return false;
        };
        let index = prop as usize;
        let existing = self.props[index];
        let outranks = !existing.set
            || precedence(self.origin, opv.is_important())
                >= precedence(existing.origin, existing.important);
        if outranks {
            self.props[index] = PropState {
                set: true,
                origin: self.origin,
                important: opv.is_important(),
            };
        }
        outranks
    }

    /// Fill in defaults after every matched buffer has been replayed:
    /// properties without a winning declaration take their initial value
    /// unless CSS inherits them (those stay `Inherit` for composition).
    pub fn finish(&mut self) -> Result<()> {
        for prop in PropertyId::ALL {
            if !self.props[prop as usize].set && !prop.inherited() {
                (properties::ops(prop).initial)(self)?;
            }
        }
        Ok(())
    }

    /// Write the CSS-defined initial value of every property, inherited or
    /// not. This is the starting record for the root element's parent.
    pub fn set_initial_values(&mut self) -> Result<()> {
        for prop in PropertyId::ALL {
            (properties::ops(prop).initial)(self)?;
        }
        Ok(())
    }
}

/// Resolve inheritance: for each property, `result` takes the child's value
/// unless the child's effective state is `Inherit`, in which case it takes
/// the parent's. List-valued properties are deep-copied with fresh interned
/// references.
pub fn compose_styles(
    parent: &ComputedStyle,
    child: &ComputedStyle,
    result: &mut ComputedStyle,
    interner: &Interner,
) -> Result<()> {
    for prop in PropertyId::ALL {
        (properties::ops(prop).compose)(parent, child, result, interner)?;
    }
    Ok(())
}

/// Release a style buffer: walk its entries through the per-property
/// destructors, dropping one interned reference per embedded handle.
pub fn destroy_style(style: Style, interner: &Interner) -> Result<()> {
    let mut reader = style.reader();
    while !reader.at_end() {
        destroy_entry(&mut reader, interner)?;
    }
    Ok(())
}

/// Destroy a single entry, returning its total length in octets.
pub fn destroy_entry(
    reader: &mut crate::bytecode::StyleReader<'_>,
    interner: &Interner,
) -> Result<usize> {
    let mut probe = reader.clone();
    let opv = probe.read_opv()?;
    let prop = opv.opcode().ok_or(Error::Invalid)?;
    let start = reader.pos();
    let consumed = (properties::ops(prop).destroy)(reader, interner)?;
    debug_assert_eq!(consumed, reader.pos() - start);
    Ok(consumed)
}
