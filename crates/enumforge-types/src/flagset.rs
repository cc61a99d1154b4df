//! Flag-set types.
//!
//! A [`FlagSetType`] owns a table of single-bit flags whose bits never
//! overlap. Any union of declared bits is a valid [`FlagSet`], including
//! combinations no declaration names; a raw integer is accepted exactly when
//! it is a submask of the type's mask.
//!
//! [`FlagSetType::instances`] walks the declared atomic flags only. Use
//! [`FlagSet::flags`] to split a combined value back into its atoms.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{BitAnd, BitOr, Range, Sub};

use smallvec::SmallVec;
use tracing::{Level, debug, span};

use enumforge_common::{BaseWidth, BuildOptions, DecodeError, DefinitionError, InvalidValueError};
use enumforge_decl::{
    ConstantResolver, Declaration, ExplicitValue, LiteralResolver, MemberDecl, MemberSpec,
    validate,
};

use crate::bits::{assign_bits, resolve_base};
use crate::table::MemberTable;

/// Descriptor of one flag-set type.
#[derive(Debug, Clone)]
pub struct FlagSetType {
    name: String,
    base: BaseWidth,
    table: MemberTable<u64>,
    mask: u64,
}

impl FlagSetType {
    /// Build a descriptor from a declaration.
    ///
    /// The declaration's `base` names the storage width; without one,
    /// `options.default_flag_base` applies.
    pub fn from_declaration(
        decl: &Declaration,
        options: &BuildOptions,
        resolver: &dyn ConstantResolver,
    ) -> Result<Self, DefinitionError> {
        let _span = span!(Level::TRACE, "build_flag_set", type_name = %decl.type_name).entered();

        let result = validate(decl, &options.identifiers()).and_then(|validated| {
            let base = resolve_base(&validated, options.default_flag_base)?;
            let assigned = assign_bits(&validated, base, resolver)?;
            Ok((validated, base, assigned))
        });
        let (validated, base, assigned) = match result {
            Ok(ok) => ok,
            Err(err) => {
                debug!(error = %err, "flag set definition rejected");
                return Err(err);
            }
        };

        debug!(
            type_name = %validated.type_name,
            members = assigned.members.len(),
            base = %base,
            mask = assigned.mask,
            "built flag set type"
        );

        Ok(Self {
            name: validated.type_name,
            base,
            table: MemberTable::from_pairs(assigned.members),
            mask: assigned.mask,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base(&self) -> BaseWidth {
        self.base
    }

    /// Union of every declared bit.
    pub fn mask(&self) -> u64 {
        self.mask
    }

    /// Declared `(name, bit)` pairs in declaration order.
    pub fn table(&self) -> &MemberTable<u64> {
        &self.table
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Whether `x` is a submask of [`mask`](Self::mask).
    pub fn contains(&self, x: i128) -> bool {
        u64::try_from(x).is_ok_and(|x| x & self.mask == x)
    }

    pub fn empty(&self) -> FlagSet<'_> {
        FlagSet { ty: self, bits: 0 }
    }

    /// Every declared flag at once.
    pub fn full(&self) -> FlagSet<'_> {
        FlagSet {
            ty: self,
            bits: self.mask,
        }
    }

    /// Validated conversion from a raw integer.
    pub fn from_integer(&self, x: impl Into<i128>) -> Result<FlagSet<'_>, InvalidValueError> {
        let x = x.into();
        match u64::try_from(x) {
            Ok(bits) if bits & self.mask == bits => Ok(FlagSet { ty: self, bits }),
            _ => Err(InvalidValueError::new(self.name.as_str(), x)),
        }
    }

    /// Flag declared as `name`.
    pub fn member(&self, name: &str) -> Option<FlagSet<'_>> {
        self.table.get(name).map(|bits| FlagSet { ty: self, bits })
    }

    /// Declared atomic flags in declaration order. Each call starts a fresh pass.
    pub fn instances(&self) -> Instances<'_> {
        Instances {
            ty: self,
            range: 0..self.table.len(),
        }
    }

    /// Decode the base-width native-endian form, re-validating the value.
    pub fn decode(&self, bytes: &[u8]) -> Result<FlagSet<'_>, DecodeError> {
        let expected = self.base.bytes();
        if bytes.len() != expected {
            return Err(DecodeError::Length {
                type_name: self.name.clone(),
                expected,
                found: bytes.len(),
            });
        }
        let raw = match self.base {
            BaseWidth::U8 => u64::from(bytes[0]),
            BaseWidth::U16 => u64::from(u16::from_ne_bytes([bytes[0], bytes[1]])),
            BaseWidth::U32 => u64::from(u32::from_ne_bytes([
                bytes[0], bytes[1], bytes[2], bytes[3],
            ])),
            BaseWidth::U64 => u64::from_ne_bytes([
                bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
            ]),
        };
        Ok(self.from_integer(raw)?)
    }
}

/// A validated flag-set value.
#[derive(Clone, Copy)]
pub struct FlagSet<'t> {
    ty: &'t FlagSetType,
    bits: u64,
}

impl<'t> FlagSet<'t> {
    pub fn to_integer(self) -> u64 {
        self.bits
    }

    pub fn descriptor(self) -> &'t FlagSetType {
        self.ty
    }

    pub fn type_name(self) -> &'t str {
        &self.ty.name
    }

    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Bits set in either value.
    pub fn union(self, other: Self) -> Self {
        self.combine(other, self.bits | other.bits)
    }

    /// Bits set in both values.
    pub fn intersect(self, other: Self) -> Self {
        self.combine(other, self.bits & other.bits)
    }

    /// Bits of `self` that are not in `other`.
    pub fn difference(self, other: Self) -> Self {
        self.combine(other, self.bits & (self.bits ^ other.bits))
    }

    pub fn is_subset_of(self, other: Self) -> bool {
        self.check_same_type(other);
        self.bits & other.bits == self.bits
    }

    /// Whether every bit of `other` is set in `self`.
    pub fn contains(self, other: Self) -> bool {
        other.is_subset_of(self)
    }

    /// Declared flags present in this value, in declaration order.
    pub fn flags(self) -> Flags<'t> {
        Flags {
            inner: self.ty.instances(),
            bits: self.bits,
        }
    }

    /// Base-width native-endian bytes.
    pub fn encode(self) -> SmallVec<[u8; 8]> {
        let bytes = self.bits.to_ne_bytes();
        let width = self.ty.base.bytes();
        if cfg!(target_endian = "little") {
            SmallVec::from_slice(&bytes[..width])
        } else {
            SmallVec::from_slice(&bytes[bytes.len() - width..])
        }
    }

    // Results stay within the receiver's mask even if the operands were mixed
    // up across types in a release build.
    fn combine(self, other: Self, bits: u64) -> Self {
        self.check_same_type(other);
        Self {
            ty: self.ty,
            bits: bits & self.ty.mask,
        }
    }

    #[inline]
    fn check_same_type(self, other: Self) {
        debug_assert!(
            std::ptr::eq(self.ty, other.ty),
            "flag set operands of different types: `{}` and `{}`",
            self.ty.name,
            other.ty.name
        );
    }
}

impl BitOr for FlagSet<'_> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitAnd for FlagSet<'_> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersect(rhs)
    }
}

impl Sub for FlagSet<'_> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.difference(rhs)
    }
}

impl PartialEq for FlagSet<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits && std::ptr::eq(self.ty, other.ty)
    }
}

impl Eq for FlagSet<'_> {}

impl Hash for FlagSet<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl fmt::Debug for FlagSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.type_name())?;
        let mut first = true;
        for flag in self.flags() {
            if !first {
                f.write_str(" | ")?;
            }
            first = false;
            f.write_str(self.ty.table.name_of(flag.bits).unwrap_or_default())?;
        }
        write!(f, "; {:#x})", self.bits)
    }
}

/// Iterator over a flag-set type's declared atomic flags.
#[derive(Debug, Clone)]
pub struct Instances<'t> {
    ty: &'t FlagSetType,
    range: Range<usize>,
}

impl<'t> Iterator for Instances<'t> {
    type Item = FlagSet<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.range.next()?;
        let (_, bits) = self.ty.table.get_index(index)?;
        Some(FlagSet { ty: self.ty, bits })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl DoubleEndedIterator for Instances<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let index = self.range.next_back()?;
        let (_, bits) = self.ty.table.get_index(index)?;
        Some(FlagSet { ty: self.ty, bits })
    }
}

impl ExactSizeIterator for Instances<'_> {}

/// Atomic flags contained in one value.
#[derive(Debug, Clone)]
pub struct Flags<'t> {
    inner: Instances<'t>,
    bits: u64,
}

impl<'t> Iterator for Flags<'t> {
    type Item = FlagSet<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let bits = self.bits;
        self.inner.by_ref().find(|flag| flag.bits & bits != 0)
    }
}

/// Declarative builder for [`FlagSetType`].
#[derive(Debug, Clone)]
pub struct FlagSetBuilder {
    decl: Declaration,
    options: BuildOptions,
}

impl FlagSetBuilder {
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

    /// Name the unsigned base type, e.g. `u8` or `uint16`.
    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.decl.base = Some(base.into());
        self
    }

    /// Bare member taking the next free bit.
    pub fn member(mut self, name: impl Into<String>) -> Self {
        self.decl.push(MemberSpec::bare(name));
        self
    }

    /// Member with an explicit single-bit value.
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
    pub fn build(self) -> Result<FlagSetType, DefinitionError> {
        self.build_with(&LiteralResolver)
    }

    pub fn build_with(
        self,
        resolver: &dyn ConstantResolver,
    ) -> Result<FlagSetType, DefinitionError> {
        FlagSetType::from_declaration(&self.decl, &self.options, resolver)
    }
}
