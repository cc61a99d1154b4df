//! Enumeration types.
//!
//! An [`EnumType`] is an immutable descriptor built once from a declaration.
//! Its values are [`Enumeration`]s: a validated `i32` plus a reference to the
//! descriptor, copied freely and compared by value.
//!
//! ```ignore
//! let fruit = EnumBuilder::new("Fruit")
//!     .value("apple", 1)
//!     .member("orange")
//!     .member("kiwi")
//!     .build()?;
//! assert_eq!(fruit.from_integer(2)?.name(), "orange");
//! assert!(fruit.from_integer(4).is_err());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Range;

use tracing::{Level, debug, span};

use enumforge_common::{BuildOptions, DecodeError, DefinitionError, InvalidValueError};
use enumforge_decl::{
    ConstantResolver, Declaration, ExplicitValue, LiteralResolver, MemberDecl, MemberSpec,
    validate,
};

use crate::assign::assign_values;
use crate::membership::{Membership, Strategy};
use crate::table::MemberTable;

/// Encoded width of an enumeration value.
pub const ENCODED_LEN: usize = 4;

/// Descriptor of one enumeration type.
#[derive(Debug, Clone)]
pub struct EnumType {
    name: String,
    table: MemberTable<i32>,
    lo: i32,
    hi: i32,
    membership: Membership,
}

impl EnumType {
    /// Build a descriptor from a declaration.
    ///
    /// Fails with the first [`DefinitionError`]; nothing is returned for a
    /// declaration that does not fully validate.
    pub fn from_declaration(
        decl: &Declaration,
        options: &BuildOptions,
        resolver: &dyn ConstantResolver,
    ) -> Result<Self, DefinitionError> {
        let _span = span!(Level::TRACE, "build_enum", type_name = %decl.type_name).entered();

        let result = validate(decl, &options.identifiers())
            .and_then(|validated| assign_values(&validated, resolver).map(|a| (validated, a)));
        let (validated, assigned) = match result {
            Ok(ok) => ok,
            Err(err) => {
                debug!(error = %err, "enum definition rejected");
                return Err(err);
            }
        };

        let values: Vec<i32> = assigned.members.iter().map(|(_, v)| *v).collect();
        let membership = Membership::synthesize(&values, assigned.lo, assigned.hi);
        debug!(
            type_name = %validated.type_name,
            members = values.len(),
            lo = assigned.lo,
            hi = assigned.hi,
            strategy = ?membership.strategy(),
            "built enum type"
        );

        Ok(Self {
            name: validated.type_name,
            table: MemberTable::from_pairs(assigned.members),
            lo: assigned.lo,
            hi: assigned.hi,
            membership,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared `(name, value)` pairs in declaration order.
    pub fn table(&self) -> &MemberTable<i32> {
        &self.table
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn membership_strategy(&self) -> Strategy {
        self.membership.strategy()
    }

    /// Whether `x` is a declared value.
    pub fn contains(&self, x: i128) -> bool {
        i32::try_from(x).is_ok_and(|x| self.membership.contains(x))
    }

    /// Validated conversion from a raw integer.
    pub fn from_integer(&self, x: impl Into<i128>) -> Result<Enumeration<'_>, InvalidValueError> {
        let x = x.into();
        match i32::try_from(x) {
            Ok(value) if self.membership.contains(value) => Ok(Enumeration { ty: self, value }),
            _ => Err(InvalidValueError::new(self.name.as_str(), x)),
        }
    }

    /// Member declared as `name`.
    pub fn member(&self, name: &str) -> Option<Enumeration<'_>> {
        self.table
            .get(name)
            .map(|value| Enumeration { ty: self, value })
    }

    /// Member with the smallest value.
    pub fn min(&self) -> Enumeration<'_> {
        Enumeration {
            ty: self,
            value: self.lo,
        }
    }

    /// Member with the largest value.
    pub fn max(&self) -> Enumeration<'_> {
        Enumeration {
            ty: self,
            value: self.hi,
        }
    }

    /// All members in declaration order. Each call starts a fresh pass.
    pub fn instances(&self) -> Instances<'_> {
        Instances {
            ty: self,
            range: 0..self.table.len(),
        }
    }

    /// Order two values of this type by their underlying integers.
    pub fn compare(&self, a: Enumeration<'_>, b: Enumeration<'_>) -> Ordering {
        debug_assert!(a.is(self) && b.is(self), "values of another enum type");
        a.value.cmp(&b.value)
    }

    /// Decode the 4-byte native-endian form, re-validating the value.
    pub fn decode(&self, bytes: &[u8]) -> Result<Enumeration<'_>, DecodeError> {
        let raw: [u8; ENCODED_LEN] = bytes.try_into().map_err(|_| DecodeError::Length {
            type_name: self.name.clone(),
            expected: ENCODED_LEN,
            found: bytes.len(),
        })?;
        Ok(self.from_integer(i32::from_ne_bytes(raw))?)
    }
}

/// A validated enumeration value.
#[derive(Clone, Copy)]
pub struct Enumeration<'t> {
    ty: &'t EnumType,
    value: i32,
}

impl<'t> Enumeration<'t> {
    pub fn to_integer(self) -> i32 {
        self.value
    }

    pub fn descriptor(self) -> &'t EnumType {
        self.ty
    }

    pub fn type_name(self) -> &'t str {
        &self.ty.name
    }

    /// Declared name of this value.
    pub fn name(self) -> &'t str {
        // Every value was validated against the table it came from.
        self.ty.table.name_of(self.value).unwrap_or_default()
    }

    pub fn encode(self) -> [u8; ENCODED_LEN] {
        self.value.to_ne_bytes()
    }

    fn is(self, ty: &EnumType) -> bool {
        std::ptr::eq(self.ty, ty)
    }
}

impl PartialEq for Enumeration<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && std::ptr::eq(self.ty, other.ty)
    }
}

impl Eq for Enumeration<'_> {}

impl Hash for Enumeration<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl PartialOrd for Enumeration<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// By underlying integer; values of different types fall back to descriptor
/// identity so the order stays total.
impl Ord for Enumeration<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value).then_with(|| {
            (self.ty as *const EnumType as usize).cmp(&(other.ty as *const EnumType as usize))
        })
    }
}

impl fmt::Debug for Enumeration<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}({})", self.type_name(), self.name(), self.value)
    }
}

/// Iterator over an enumeration's members in declaration order.
#[derive(Debug, Clone)]
pub struct Instances<'t> {
    ty: &'t EnumType,
    range: Range<usize>,
}

impl<'t> Iterator for Instances<'t> {
    type Item = Enumeration<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.range.next()?;
        let (_, value) = self.ty.table.get_index(index)?;
        Some(Enumeration { ty: self.ty, value })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl DoubleEndedIterator for Instances<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let index = self.range.next_back()?;
        let (_, value) = self.ty.table.get_index(index)?;
        Some(Enumeration { ty: self.ty, value })
    }
}

impl ExactSizeIterator for Instances<'_> {}

/// Declarative builder for [`EnumType`].
#[derive(Debug, Clone)]
pub struct EnumBuilder {
    decl: Declaration,
    options: BuildOptions,
}

impl EnumBuilder {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            decl: Declaration::new(type_name),
            options: BuildOptions::default(),
        }
    }

    pub fn from_declaration(decl: Declaration) -> Self {
        Self {
            decl,
            options: BuildOptions::default(),
        }
    }

    pub fn with_options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }

    /// Bare member taking the next auto-incremented value.
    pub fn member(mut self, name: impl Into<String>) -> Self {
        self.decl.push(MemberSpec::bare(name));
        self
    }

    /// Member with an explicit value.
    pub fn value(mut self, name: impl Into<String>, value: impl Into<ExplicitValue>) -> Self {
        self.decl.push(MemberSpec::with_value(name, value));
        self
    }

    /// Raw entry text, `name` or `name = expr`.
    pub fn entry(mut self, text: impl Into<String>) -> Self {
        self.decl.push(MemberDecl::Text(text.into()));
        self
    }

    /// Build with [`LiteralResolver`] for expression values.
    pub fn build(self) -> Result<EnumType, DefinitionError> {
        self.build_with(&LiteralResolver)
    }

    pub fn build_with(self, resolver: &dyn ConstantResolver) -> Result<EnumType, DefinitionError> {
        EnumType::from_declaration(&self.decl, &self.options, resolver)
    }
}
